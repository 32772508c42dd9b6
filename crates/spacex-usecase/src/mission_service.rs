//! Mission service: fetch, transition, save.

use std::cmp::Ordering;

use spacex_domain::{
    InvalidStateError, Mission, MissionId, MissionRepository, Rocket,
};

use crate::error::{Result, ServiceError};

pub struct MissionService<R> {
    repository: R,
}

impl<R: MissionRepository> MissionService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Persist a mission (create or update).
    pub fn add(&mut self, mission: Mission) -> Result<Mission> {
        self.repository.save(&mission)?;
        Ok(mission)
    }

    pub fn get(&self, id: &MissionId) -> Result<Option<Mission>> {
        Ok(self.repository.get(id)?)
    }

    /// Fetch a mission, mapping a storage miss to `NotFound`.
    pub fn require(&self, id: &MissionId) -> Result<Mission> {
        self.get(id)?
            .ok_or_else(|| ServiceError::not_found("mission", id))
    }

    pub fn get_all(&self) -> Result<Vec<Mission>> {
        Ok(self.repository.get_all()?)
    }

    /// Read-only projection: all missions ordered by the given comparator.
    pub fn sorted_by<F>(&self, mut compare: F) -> Result<Vec<Mission>>
    where
        F: FnMut(&Mission, &Mission) -> Ordering,
    {
        let mut missions = self.get_all()?;
        missions.sort_by(|a, b| compare(a, b));
        Ok(missions)
    }

    /// SCHEDULED -> PENDING with the complete replacement set of rockets.
    pub fn mark_as_pending(&mut self, id: &MissionId, rockets: &[Rocket]) -> Result<Mission> {
        self.update(id, |mission| mission.mark_as_pending(rockets))
    }

    /// PENDING -> SCHEDULED with the complete replacement set of rockets.
    pub fn schedule(&mut self, id: &MissionId, rockets: &[Rocket]) -> Result<Mission> {
        self.update(id, |mission| mission.schedule(rockets))
    }

    /// SCHEDULED -> IN_PROGRESS with the complete replacement set of rockets.
    pub fn start(&mut self, id: &MissionId, rockets: &[Rocket]) -> Result<Mission> {
        self.update(id, |mission| mission.start(rockets))
    }

    /// IN_PROGRESS -> ENDED.
    pub fn end(&mut self, id: &MissionId) -> Result<Mission> {
        self.update(id, Mission::end)
    }

    /// Add rockets not previously part of the mission.
    pub fn assign_rockets(&mut self, id: &MissionId, rockets: Vec<Rocket>) -> Result<Mission> {
        self.update(id, move |mission| mission.assign_rockets(rockets))
    }

    fn update<F>(&mut self, id: &MissionId, operation: F) -> Result<Mission>
    where
        F: FnOnce(&Mission) -> std::result::Result<Mission, InvalidStateError>,
    {
        let mission = self.require(id)?;
        let updated = operation(&mission)?;
        self.repository.save(&updated)?;
        Ok(updated)
    }
}
