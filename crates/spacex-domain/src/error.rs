//! Domain errors.

use thiserror::Error;

/// Raised when a requested transition violates an entity's transition table
/// or a structural invariant (blank name, launch without a mission, empty
/// rocket set, cardinality mismatch, already-assigned rocket).
///
/// The malformed value is never constructed: an entity that exists is always
/// valid. The message embeds a snapshot of the offending entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidStateError {
    message: String,
}

impl InvalidStateError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
