//! # SpaceX Adapter Layer
//!
//! Implementations of the repository ports defined in `spacex-domain`.
//! Currently in-memory only; the ports are where a durable store would
//! plug in.

pub mod repository;

pub use repository::in_memory::{InMemoryMissionRepository, InMemoryRocketRepository};
