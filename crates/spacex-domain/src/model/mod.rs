//! Domain models - the vocabulary of the system.
//!
//! Every name here should match how we talk about the fleet: rockets go to
//! space, missions track the rockets flying them.

pub mod id;
pub mod mission;
pub mod rocket;
