//! Error types for the posts API client.
//!
//! # Design
//! Every failure a hook can observe is normalized into one `FetchError`
//! value, which is stored inside `FetchState` snapshots. It is `Clone` so a
//! snapshot can be handed to any number of observers. A 404 is not a
//! separate variant: views ask `is_not_found()` instead, so the status code
//! always survives into the message.

use thiserror::Error;

/// Errors surfaced by `BlogClient` parse methods and the fetch hooks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No response was obtained (connection refused, DNS, aborted).
    #[error("network request failed: {0}")]
    Network(String),

    /// A response arrived with a status outside 2xx.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },

    /// A 2xx body that is not valid JSON or does not match the expected shape.
    #[error("could not parse response: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failure reported by a `Transport` when no response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Network(err.0)
    }
}
