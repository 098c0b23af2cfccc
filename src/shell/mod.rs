//! Line-oriented front-end for the note coordinator
//!
//! Parses commands typed on stdin, drives the [`NoteCoordinator`] and renders
//! the page as plain text.
//!
//! [`NoteCoordinator`]: crate::notes::NoteCoordinator

pub mod commands;
pub mod view;

pub use commands::{Command, CommandError, Outcome, Shell};
pub use view::render;
