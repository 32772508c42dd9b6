//! # SpaceX Domain Layer
//!
//! Rockets and missions, each with its own status state machine, kept
//! mutually consistent by the orchestration layer in `spacex-usecase`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                    │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Rocket and Mission value objects              ││
//! │  │  repository/- Persistence ports (not implementations)       ││
//! │  │  error      - InvalidStateError                             ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both entities are value objects: a transition never mutates an existing
//! instance, it returns a new one. An instance that exists is always valid;
//! every constructor and transition is checked before the value is built.

pub mod error;
pub mod model;
pub mod repository;

// Re-export commonly used types
pub use error::InvalidStateError;
pub use model::{
    id::{MissionId, RocketId},
    mission::{Mission, MissionStatus},
    rocket::{Rocket, RocketStatus},
};
pub use repository::{
    mission_repository::MissionRepository, rocket_repository::RocketRepository, RepositoryError,
};
