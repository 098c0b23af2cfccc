//! Note models and DTOs
//!
//! Notes are owned by the server. The client keeps a read-only copy of the
//! collection and a locally edited [`Draft`] used for both creation and edits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifier
// ============================================================================

/// Server-assigned note identifier.
///
/// Opaque to the client: backends hand out either integers or strings, and
/// the id is echoed back verbatim in `/notes/{id}` paths.
///
/// Numeric ids must fit in an `i64`. A fractional id, or an unsigned one
/// above `i64::MAX`, does not decode, and the whole list response is then
/// rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for NoteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty note id".to_string());
        }
        Ok(match s.parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(s.to_string()),
        })
    }
}

impl From<i64> for NoteId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

// ============================================================================
// Note
// ============================================================================

/// A note as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Note {
    pub fn new(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Copy of this note's editable fields
    pub fn to_draft(&self) -> Draft {
        Draft {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Form fields being composed, sent as the request body for create and update.
///
/// No validation: empty fields are sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}
