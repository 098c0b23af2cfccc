//! Gateway error type

use thiserror::Error;

/// Failure of any gateway call.
///
/// Network faults, non-2xx responses and malformed bodies all land here.
/// Callers treat every variant the same way; the variants only exist so
/// logs say what actually went wrong.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Url(String),

    #[cfg(test)]
    #[error("{0}")]
    Unavailable(String),
}

pub type TransportResult<T> = Result<T, TransportError>;
