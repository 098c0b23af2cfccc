//! Note lifecycle coordinator
//!
//! Owns the cached collection, the draft, the edit target and the busy flag,
//! and sequences gateway calls for the user actions:
//!
//! ```text
//! [Create] --start_edit--> [Edit(id)]
//! [Edit(id)] --cancel_edit or successful update--> [Create]
//! [Create] --successful create--> [Create]   (draft reset)
//! failures: no transition, draft and edit target preserved
//! ```
//!
//! Operations never return errors: every gateway failure is logged and turned
//! into error feedback. The state lock is never held across a gateway call, so
//! overlapping operations proceed independently and the last refresh to
//! complete wins.

use super::models::{Draft, Note, NoteId};
use crate::feedback::{Feedback, FeedbackChannel};
use crate::gateway::NoteGateway;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::{info, warn};

pub const MSG_FETCH_FAILED: &str = "Failed to fetch notes";
pub const MSG_CREATED: &str = "Note created successfully!";
pub const MSG_CREATE_FAILED: &str = "Failed to create note";
pub const MSG_UPDATED: &str = "Note updated successfully!";
pub const MSG_UPDATE_FAILED: &str = "Failed to update note";
pub const MSG_DELETED: &str = "Note deleted";
pub const MSG_DELETE_FAILED: &str = "Delete failed";

/// Read-only view of the coordinator state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Result of the last successful refresh
    pub notes: Vec<Note>,
    pub draft: Draft,
    /// `None` in create mode
    pub edit_target: Option<NoteId>,
    /// True while a refresh is in flight
    pub busy: bool,
}

impl SessionSnapshot {
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }
}

/// Coordinates the local note session with the remote store.
pub struct NoteCoordinator {
    gateway: Arc<dyn NoteGateway>,
    feedback: Arc<FeedbackChannel>,
    state: RwLock<SessionSnapshot>,
}

impl NoteCoordinator {
    /// Create a coordinator without fetching anything.
    pub fn new(gateway: Arc<dyn NoteGateway>, feedback: Arc<FeedbackChannel>) -> Self {
        Self {
            gateway,
            feedback,
            state: RwLock::new(SessionSnapshot::default()),
        }
    }

    /// Create a coordinator and run the initial refresh.
    pub async fn start(gateway: Arc<dyn NoteGateway>, feedback: Arc<FeedbackChannel>) -> Self {
        let coordinator = Self::new(gateway, feedback);
        coordinator.refresh().await;
        coordinator
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.clone()
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback.current()
    }

    pub fn subscribe_feedback(&self) -> watch::Receiver<Feedback> {
        self.feedback.subscribe()
    }

    // ========================================================================
    // Local edits (no network)
    // ========================================================================

    pub async fn set_title(&self, title: impl Into<String>) {
        self.state.write().await.draft.title = title.into();
    }

    pub async fn set_description(&self, description: impl Into<String>) {
        self.state.write().await.draft.description = description.into();
    }

    /// Enter edit mode for `note`, overwriting the draft with its fields.
    ///
    /// `note` is expected to come from the current collection; this is not
    /// checked. Unsaved changes to a previous draft are discarded.
    pub async fn start_edit(&self, note: &Note) {
        let mut state = self.state.write().await;
        state.edit_target = Some(note.id.clone());
        state.draft = note.to_draft();
        info!(note_id = %note.id, "Editing note");
    }

    /// Return to create mode with an empty draft, whatever the current mode.
    pub async fn cancel_edit(&self) {
        let mut state = self.state.write().await;
        state.edit_target = None;
        state.draft = Draft::default();
    }

    // ========================================================================
    // Remote operations
    // ========================================================================

    /// Replace the collection with the server's current list.
    pub async fn refresh(&self) {
        self.state.write().await.busy = true;

        let result = self.gateway.list().await;

        let failed = {
            let mut state = self.state.write().await;
            let failed = match result {
                Ok(notes) => {
                    info!(count = notes.len(), "Fetched notes");
                    state.notes = notes;
                    None
                }
                Err(e) => Some(e),
            };
            state.busy = false;
            failed
        };

        if let Some(e) = failed {
            warn!("Failed to fetch notes: {}", e);
            self.feedback.notify_error(MSG_FETCH_FAILED).await;
        }
    }

    /// Send the draft as a new note or as an update to the edit target.
    ///
    /// No validation; an empty draft is sent as-is.
    pub async fn submit(&self) {
        let (edit_target, draft) = {
            let state = self.state.read().await;
            (state.edit_target.clone(), state.draft.clone())
        };

        match edit_target {
            Some(id) => self.submit_update(id, draft).await,
            None => self.submit_create(draft).await,
        }
    }

    async fn submit_create(&self, draft: Draft) {
        match self.gateway.create(&draft).await {
            Ok(()) => {
                info!(title = %draft.title, "Created note");
                self.feedback.notify_success(MSG_CREATED).await;
                self.state.write().await.draft = Draft::default();
                self.refresh().await;
            }
            Err(e) => {
                warn!("Failed to create note: {}", e);
                self.feedback.notify_error(MSG_CREATE_FAILED).await;
            }
        }
    }

    async fn submit_update(&self, id: NoteId, draft: Draft) {
        match self.gateway.update(&id, &draft).await {
            Ok(()) => {
                info!(note_id = %id, "Updated note");
                self.feedback.notify_success(MSG_UPDATED).await;
                {
                    let mut state = self.state.write().await;
                    state.edit_target = None;
                    state.draft = Draft::default();
                }
                self.refresh().await;
            }
            Err(e) => {
                warn!(note_id = %id, "Failed to update note: {}", e);
                self.feedback.notify_error(MSG_UPDATE_FAILED).await;
            }
        }
    }

    /// Delete a note and refresh on success.
    ///
    /// Leaves the draft and edit target alone, even when `id` is the note
    /// being edited.
    pub async fn delete_note(&self, id: &NoteId) {
        match self.gateway.delete(id).await {
            Ok(()) => {
                info!(note_id = %id, "Deleted note");
                self.feedback.notify_success(MSG_DELETED).await;
                self.refresh().await;
            }
            Err(e) => {
                warn!(note_id = %id, "Failed to delete note: {}", e);
                self.feedback.notify_error(MSG_DELETE_FAILED).await;
            }
        }
    }
}
