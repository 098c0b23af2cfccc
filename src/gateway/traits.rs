//! Trait abstraction for note persistence

use super::error::TransportResult;
use crate::notes::{Draft, Note, NoteId};
use async_trait::async_trait;

/// The four operations the coordinator needs from the backend.
///
/// Implementations perform no retries and hold no auth state.
#[async_trait]
pub trait NoteGateway: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> TransportResult<Vec<Note>>;

    /// Create a note; the server assigns its id.
    ///
    /// Success is the status alone; the response body is not inspected.
    async fn create(&self, draft: &Draft) -> TransportResult<()>;

    /// Replace the fields of an existing note. A missing id is a failure.
    async fn update(&self, id: &NoteId, draft: &Draft) -> TransportResult<()>;

    /// Delete a note. A missing id is a failure.
    async fn delete(&self, id: &NoteId) -> TransportResult<()>;
}
