//! Rocket persistence port.

use crate::model::id::{MissionId, RocketId};
use crate::model::rocket::Rocket;

use super::RepositoryError;

/// Rocket store: upsert by id, last write wins.
pub trait RocketRepository {
    /// Save a rocket (create or update).
    fn save(&mut self, rocket: &Rocket) -> Result<(), RepositoryError>;

    /// Find a rocket by id.
    fn get(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError>;

    /// All rockets, in no particular order.
    fn get_all(&self) -> Result<Vec<Rocket>, RepositoryError>;

    /// All rockets currently pointing at the given mission.
    fn find_by_mission_id(&self, mission_id: &MissionId) -> Result<Vec<Rocket>, RepositoryError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|rocket| rocket.mission_id() == Some(*mission_id))
            .collect())
    }
}
