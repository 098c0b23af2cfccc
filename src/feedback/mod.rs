//! Transient user feedback
//!
//! Success and error messages that clear themselves after a fixed delay.

pub mod channel;

pub use channel::{Feedback, FeedbackChannel, FeedbackKind, DEFAULT_FEEDBACK_TTL};
