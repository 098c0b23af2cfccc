//! Remote store gateway for the `/notes` collection

pub mod client;
pub mod error;
pub mod traits;

pub use client::HttpNoteGateway;
pub use error::TransportError;
pub use traits::NoteGateway;

#[cfg(test)]
pub(crate) mod mock;
