//! # SpaceX Use Case Layer
//!
//! Application-specific flows on top of the domain: per-entity services
//! (fetch, transition, save) and the facade that orchestrates paired
//! rocket/mission updates.
//!
//! The facade is the only component allowed to mutate both entities as a
//! result of one user action. The stores are independent, so a rocket-side
//! transition can commit while the mission-side one fails; the facade
//! reports both outcomes instead of pretending the pair is atomic.

pub mod error;
pub mod facade;
pub mod mission_service;
pub mod rocket_service;

pub use error::{Result, ServiceError};
pub use facade::{RocketUpdate, SpaceXFacade};
pub use mission_service::MissionService;
pub use rocket_service::RocketService;
