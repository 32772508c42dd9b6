//! Rocket service: fetch, transition, save.
//!
//! The service owns no state-machine rules; it resolves ids against the
//! rocket store and lets the entity validate the transition.

use std::cmp::Ordering;

use spacex_domain::{
    InvalidStateError, MissionId, Rocket, RocketId, RocketRepository,
};

use crate::error::{Result, ServiceError};

pub struct RocketService<R> {
    repository: R,
}

impl<R: RocketRepository> RocketService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Persist a rocket (create or update).
    pub fn add(&mut self, rocket: Rocket) -> Result<Rocket> {
        self.repository.save(&rocket)?;
        Ok(rocket)
    }

    pub fn get(&self, id: &RocketId) -> Result<Option<Rocket>> {
        Ok(self.repository.get(id)?)
    }

    /// Fetch a rocket, mapping a storage miss to `NotFound`.
    pub fn require(&self, id: &RocketId) -> Result<Rocket> {
        self.get(id)?
            .ok_or_else(|| ServiceError::not_found("rocket", id))
    }

    pub fn get_all(&self) -> Result<Vec<Rocket>> {
        Ok(self.repository.get_all()?)
    }

    /// All rockets currently belonging to the given mission.
    pub fn get_by_mission(&self, mission_id: &MissionId) -> Result<Vec<Rocket>> {
        Ok(self.repository.find_by_mission_id(mission_id)?)
    }

    /// Read-only projection: all rockets ordered by the given comparator.
    pub fn sorted_by<F>(&self, mut compare: F) -> Result<Vec<Rocket>>
    where
        F: FnMut(&Rocket, &Rocket) -> Ordering,
    {
        let mut rockets = self.get_all()?;
        rockets.sort_by(|a, b| compare(a, b));
        Ok(rockets)
    }

    /// ON_GROUND -> IN_SPACE.
    pub fn start(&mut self, id: &RocketId) -> Result<Rocket> {
        self.update(id, Rocket::start)
    }

    /// ON_GROUND -> IN_REPAIR.
    pub fn repair(&mut self, id: &RocketId) -> Result<Rocket> {
        self.update(id, Rocket::repair)
    }

    /// IN_REPAIR or IN_SPACE -> ON_GROUND.
    pub fn return_to_ground(&mut self, id: &RocketId) -> Result<Rocket> {
        self.update(id, Rocket::return_to_ground)
    }

    fn update<F>(&mut self, id: &RocketId, operation: F) -> Result<Rocket>
    where
        F: FnOnce(&Rocket) -> std::result::Result<Rocket, InvalidStateError>,
    {
        let rocket = self.require(id)?;
        let updated = operation(&rocket)?;
        self.repository.save(&updated)?;
        Ok(updated)
    }
}
