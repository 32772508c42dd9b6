//! Service-level errors.

use std::fmt;

use thiserror::Error;

use spacex_domain::{InvalidStateError, RepositoryError};

/// Result type alias for the use case layer.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A transition violated an entity's transition table or an invariant.
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),

    /// An id passed by the caller does not resolve in storage.
    #[error("there is no {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },

    /// The storage collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn not_found(kind: &'static str, id: impl fmt::Display) -> Self {
        ServiceError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
