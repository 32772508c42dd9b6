//! The facade: one entry point per user intent.
//!
//! A single user action that touches a rocket usually has a mission-side
//! consequence: launching a rocket should start its mission, sending one to
//! repair should park the mission as pending. The facade sequences the two
//! entity-level transitions and keeps both stores in agreement.
//!
//! The two stores have no batch atomicity, so the pair is deliberately not
//! atomic either: the rocket transition is validated and committed first,
//! then the mission is recomputed from the full, current set of its rockets
//! as read back from storage. When the mission cannot legally follow, the
//! rocket-side success and the mission-side error are both reported via
//! [`RocketUpdate`].

use std::cmp::Ordering;

use tracing::{info, warn};

use spacex_domain::{
    Mission, MissionId, MissionRepository, Rocket, RocketId, RocketRepository,
};

use crate::error::{Result, ServiceError};
use crate::mission_service::MissionService;
use crate::rocket_service::RocketService;

/// Outcome of a rocket-side operation.
///
/// The rocket transition is committed by the time this value exists. The
/// mission field is `None` when the rocket belongs to no mission, and
/// carries the mission-side result otherwise. A mission-level error does
/// not undo the rocket (partial success is expected, not a bug).
#[derive(Debug)]
pub struct RocketUpdate {
    pub rocket: Rocket,
    pub mission: Option<Result<Mission>>,
}

pub struct SpaceXFacade<MR, RR> {
    missions: MissionService<MR>,
    rockets: RocketService<RR>,
}

impl<MR: MissionRepository, RR: RocketRepository> SpaceXFacade<MR, RR> {
    pub fn new(mission_repository: MR, rocket_repository: RR) -> Self {
        Self {
            missions: MissionService::new(mission_repository),
            rockets: RocketService::new(rocket_repository),
        }
    }

    /// Create a rocket on the ground with a fresh id and persist it.
    pub fn add_rocket(&mut self, name: &str) -> Result<Rocket> {
        let rocket = Rocket::new(RocketId::random(), name)?;
        info!(rocket_id = %rocket.id(), name, "rocket added");
        self.rockets.add(rocket)
    }

    /// Create a scheduled mission with a fresh id. Every supplied rocket is
    /// assigned to the mission and persisted as part of the same logical
    /// operation.
    pub fn add_mission(&mut self, name: &str, rockets: Vec<Rocket>) -> Result<Mission> {
        let mission = Mission::with_rockets(MissionId::random(), name, rockets)?;
        for rocket in mission.rockets().values() {
            self.rockets.add(rocket.clone())?;
        }
        info!(
            mission_id = %mission.id(),
            name,
            rockets = mission.rocket_count(),
            "mission added"
        );
        self.missions.add(mission)
    }

    /// Assign existing rockets to an existing mission.
    ///
    /// Fails fast with `NotFound` on the first unknown rocket id; nothing is
    /// persisted unless the mission accepts the whole batch.
    pub fn assign_rockets_to_mission(
        &mut self,
        mission_id: MissionId,
        rocket_ids: &[RocketId],
    ) -> Result<Mission> {
        let mut assigned = Vec::with_capacity(rocket_ids.len());
        for rocket_id in rocket_ids {
            let rocket = self.rockets.require(rocket_id)?;
            assigned.push(rocket.assign_to_mission(mission_id)?);
        }
        let mission = self.missions.assign_rockets(&mission_id, assigned.clone())?;
        for rocket in assigned {
            self.rockets.add(rocket)?;
        }
        info!(
            mission_id = %mission.id(),
            rockets = rocket_ids.len(),
            "rockets assigned to mission"
        );
        Ok(mission)
    }

    /// Launch a rocket. If it belongs to a mission, the mission is started
    /// from the full, current set of its rockets.
    pub fn start_rocket(&mut self, id: RocketId) -> Result<RocketUpdate> {
        let rocket = self.rockets.start(&id)?;
        info!(rocket_id = %id, "rocket started");
        let mission = self.follow_mission(&rocket, |missions, mission_id, rockets| {
            missions.start(mission_id, rockets)
        });
        Ok(RocketUpdate { rocket, mission })
    }

    /// Send a rocket to repair; its mission follows into PENDING.
    pub fn repair_rocket(&mut self, id: RocketId) -> Result<RocketUpdate> {
        let rocket = self.rockets.repair(&id)?;
        info!(rocket_id = %id, "rocket sent to repair");
        let mission = self.follow_mission(&rocket, |missions, mission_id, rockets| {
            missions.mark_as_pending(mission_id, rockets)
        });
        Ok(RocketUpdate { rocket, mission })
    }

    /// Return a repaired rocket to the ground; its mission follows back into
    /// SCHEDULED.
    pub fn mark_rocket_repaired(&mut self, id: RocketId) -> Result<RocketUpdate> {
        let rocket = self.rockets.return_to_ground(&id)?;
        info!(rocket_id = %id, "rocket repaired");
        let mission = self.follow_mission(&rocket, |missions, mission_id, rockets| {
            missions.schedule(mission_id, rockets)
        });
        Ok(RocketUpdate { rocket, mission })
    }

    /// End a running mission. Ended missions retain no rocket assignments.
    pub fn end_mission(&mut self, id: MissionId) -> Result<Mission> {
        let mission = self.missions.end(&id)?;
        info!(mission_id = %id, "mission ended");
        Ok(mission)
    }

    pub fn get_rocket(&self, id: RocketId) -> Result<Rocket> {
        self.rockets.require(&id)
    }

    pub fn get_mission(&self, id: MissionId) -> Result<Mission> {
        self.missions.require(&id)
    }

    /// All missions, ordered by an arbitrary comparator.
    pub fn missions_sorted_by<F>(&self, compare: F) -> Result<Vec<Mission>>
    where
        F: FnMut(&Mission, &Mission) -> Ordering,
    {
        self.missions.sorted_by(compare)
    }

    /// All rockets, ordered by an arbitrary comparator.
    pub fn rockets_sorted_by<F>(&self, compare: F) -> Result<Vec<Rocket>>
    where
        F: FnMut(&Rocket, &Rocket) -> Ordering,
    {
        self.rockets.sorted_by(compare)
    }

    /// Recompute the rocket's mission from storage and apply a mission-side
    /// operation. Returns `None` when the rocket has no mission. The rocket
    /// transition is already committed; a mission-side failure is reported,
    /// never rolled back.
    fn follow_mission<F>(&mut self, rocket: &Rocket, operation: F) -> Option<Result<Mission>>
    where
        F: FnOnce(&mut MissionService<MR>, &MissionId, &[Rocket]) -> Result<Mission>,
    {
        let mission_id = rocket.mission_id()?;
        let current = match self.rockets.get_by_mission(&mission_id) {
            Ok(rockets) => rockets,
            Err(error) => return Some(Err(error)),
        };
        let outcome = operation(&mut self.missions, &mission_id, &current);
        if let Err(error) = &outcome {
            warn!(
                rocket_id = %rocket.id(),
                %mission_id,
                %error,
                "rocket transition committed but the mission could not follow"
            );
        }
        Some(outcome)
    }
}
