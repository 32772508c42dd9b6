//! In-memory repository implementations.
//!
//! Thread-safe via `RwLock`; cloning a repository yields another handle to
//! the same underlying map, which is how the services and the facade share
//! one store. Last write wins, exactly the guarantee the ports promise.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use spacex_domain::model::id::{MissionId, RocketId};
use spacex_domain::model::mission::Mission;
use spacex_domain::model::rocket::Rocket;
use spacex_domain::repository::mission_repository::MissionRepository;
use spacex_domain::repository::rocket_repository::RocketRepository;
use spacex_domain::repository::RepositoryError;

fn lock_poisoned(which: &str) -> RepositoryError {
    RepositoryError::Persistence {
        message: format!("failed to acquire {which} lock"),
    }
}

/// In-memory rocket store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRocketRepository {
    rockets: Arc<RwLock<HashMap<RocketId, Rocket>>>,
}

impl InMemoryRocketRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RocketRepository for InMemoryRocketRepository {
    fn save(&mut self, rocket: &Rocket) -> Result<(), RepositoryError> {
        let mut rockets = self.rockets.write().map_err(|_| lock_poisoned("write"))?;
        rockets.insert(rocket.id(), rocket.clone());
        Ok(())
    }

    fn get(&self, id: &RocketId) -> Result<Option<Rocket>, RepositoryError> {
        let rockets = self.rockets.read().map_err(|_| lock_poisoned("read"))?;
        Ok(rockets.get(id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Rocket>, RepositoryError> {
        let rockets = self.rockets.read().map_err(|_| lock_poisoned("read"))?;
        Ok(rockets.values().cloned().collect())
    }
}

/// In-memory mission store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMissionRepository {
    missions: Arc<RwLock<HashMap<MissionId, Mission>>>,
}

impl InMemoryMissionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MissionRepository for InMemoryMissionRepository {
    fn save(&mut self, mission: &Mission) -> Result<(), RepositoryError> {
        let mut missions = self.missions.write().map_err(|_| lock_poisoned("write"))?;
        missions.insert(mission.id(), mission.clone());
        Ok(())
    }

    fn get(&self, id: &MissionId) -> Result<Option<Mission>, RepositoryError> {
        let missions = self.missions.read().map_err(|_| lock_poisoned("read"))?;
        Ok(missions.get(id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Mission>, RepositoryError> {
        let missions = self.missions.read().map_err(|_| lock_poisoned("read"))?;
        Ok(missions.values().cloned().collect())
    }
}
