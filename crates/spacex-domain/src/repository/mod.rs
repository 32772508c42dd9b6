//! Repository ports - the persistence contracts the domain depends on.
//!
//! These traits define what the domain needs from storage, not how it is
//! done. Implementations live in the adapter crate. The store is a plain
//! key-by-id upsert: no transactions, no batch atomicity across the rocket
//! store and the mission store, last write wins.

pub mod mission_repository;
pub mod rocket_repository;

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("persistence error: {message}")]
    Persistence { message: String },
}
