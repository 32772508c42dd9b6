//! Mission persistence port.

use crate::model::id::MissionId;
use crate::model::mission::{Mission, MissionStatus};

use super::RepositoryError;

/// Mission store: upsert by id, last write wins.
pub trait MissionRepository {
    /// Save a mission (create or update).
    fn save(&mut self, mission: &Mission) -> Result<(), RepositoryError>;

    /// Find a mission by id.
    fn get(&self, id: &MissionId) -> Result<Option<Mission>, RepositoryError>;

    /// All missions, in no particular order.
    fn get_all(&self) -> Result<Vec<Mission>, RepositoryError>;

    /// All missions with the given status.
    fn find_by_status(&self, status: MissionStatus) -> Result<Vec<Mission>, RepositoryError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|mission| mission.status() == status)
            .collect())
    }
}
