//! In-memory mock implementation of NoteGateway for testing without a server.

use super::error::{TransportError, TransportResult};
use super::traits::NoteGateway;
use crate::notes::{Draft, Note, NoteId};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// A gateway call, recorded in order for assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    List,
    Create(Draft),
    Update(NoteId, Draft),
    Delete(NoteId),
}

/// In-memory mock implementation of NoteGateway.
///
/// Notes live in a `Vec` behind an async `RwLock`; ids are assigned from a
/// counter. Each operation can be switched to fail, and `list` can be slowed
/// down to observe in-flight state.
pub struct MockNoteGateway {
    notes: RwLock<Vec<Note>>,
    calls: RwLock<Vec<GatewayCall>>,
    next_id: AtomicI64,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
    fail_delete: AtomicBool,
    list_delay: RwLock<Option<Duration>>,
}

impl MockNoteGateway {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self::with_notes(Vec::new())
    }

    /// Create a mock store pre-seeded with notes.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let max_id = notes
            .iter()
            .filter_map(|n| match n.id {
                NoteId::Number(id) => Some(id),
                NoteId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            notes: RwLock::new(notes),
            calls: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(max_id + 1),
            fail_list: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            list_delay: RwLock::new(None),
        }
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub async fn set_list_delay(&self, delay: Option<Duration>) {
        *self.list_delay.write().await = delay;
    }

    /// Replace the server-side collection directly
    pub async fn set_notes(&self, notes: Vec<Note>) {
        *self.notes.write().await = notes;
    }

    pub async fn calls(&self) -> Vec<GatewayCall> {
        self.calls.read().await.clone()
    }

    pub async fn list_calls(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, GatewayCall::List))
            .count()
    }

    pub async fn clear_calls(&self) {
        self.calls.write().await.clear();
    }

    async fn record(&self, call: GatewayCall) {
        self.calls.write().await.push(call);
    }
}

impl Default for MockNoteGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn injected(op: &str) -> TransportError {
    TransportError::Unavailable(format!("injected {} failure", op))
}

fn not_found(id: &NoteId) -> TransportError {
    TransportError::Unavailable(format!("note {} not found", id))
}

#[async_trait]
impl NoteGateway for MockNoteGateway {
    async fn list(&self) -> TransportResult<Vec<Note>> {
        self.record(GatewayCall::List).await;
        let delay = *self.list_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(injected("list"));
        }
        Ok(self.notes.read().await.clone())
    }

    async fn create(&self, draft: &Draft) -> TransportResult<()> {
        self.record(GatewayCall::Create(draft.clone())).await;
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(injected("create"));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let note = Note::new(id, draft.title.clone(), draft.description.clone());
        self.notes.write().await.push(note);
        Ok(())
    }

    async fn update(&self, id: &NoteId, draft: &Draft) -> TransportResult<()> {
        self.record(GatewayCall::Update(id.clone(), draft.clone())).await;
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(injected("update"));
        }
        let mut notes = self.notes.write().await;
        let note = notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| not_found(id))?;
        note.title = draft.title.clone();
        note.description = draft.description.clone();
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> TransportResult<()> {
        self.record(GatewayCall::Delete(id.clone())).await;
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(injected("delete"));
        }
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|n| &n.id != id);
        if notes.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
