//! Notes module
//!
//! Data model for the notes collection plus the coordinator that keeps the
//! local draft, edit target and cached collection consistent with the server.

pub mod coordinator;
pub mod models;

pub use coordinator::{NoteCoordinator, SessionSnapshot};
pub use models::*;
