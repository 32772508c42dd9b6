//! Rocket - a spacecraft tracked through its operational lifecycle.
//!
//! A Rocket is a value object: every transition returns a new instance and
//! the previous one stays valid, so before/after snapshots can be compared
//! with plain equality.
//!
//! ```text
//!            ┌──────────── repair ────────────┐
//!            ▼                                │
//!        IN_REPAIR ── return_to_ground ──▶ ON_GROUND ── start ──▶ IN_SPACE
//!                                             ▲                      │
//!                                             └── return_to_ground ──┘
//! ```

use std::fmt;

use crate::error::InvalidStateError;

use super::id::{MissionId, RocketId};

/// Where a rocket currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RocketStatus {
    OnGround,
    InRepair,
    InSpace,
}

impl RocketStatus {
    /// Every declared status, for exhaustive table checks.
    pub const ALL: [RocketStatus; 3] = [
        RocketStatus::OnGround,
        RocketStatus::InRepair,
        RocketStatus::InSpace,
    ];

    /// Statuses directly reachable from this one in a single transition.
    ///
    /// The match is total over the enum, so a newly added status without a
    /// table entry is a compile error rather than a silently unreachable
    /// state.
    pub fn allowed_transitions(self) -> &'static [RocketStatus] {
        match self {
            RocketStatus::OnGround => &[RocketStatus::InRepair, RocketStatus::InSpace],
            RocketStatus::InRepair => &[RocketStatus::OnGround],
            RocketStatus::InSpace => &[RocketStatus::OnGround],
        }
    }

    fn check_transition(self, next: RocketStatus) -> Result<(), InvalidStateError> {
        let allowed = self.allowed_transitions();
        if allowed.contains(&next) {
            Ok(())
        } else {
            Err(InvalidStateError::new(format!(
                "rocket status {self} cannot be changed to {next}, available statuses: {}",
                format_statuses(allowed),
            )))
        }
    }
}

impl fmt::Display for RocketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RocketStatus::OnGround => "ON_GROUND",
            RocketStatus::InRepair => "IN_REPAIR",
            RocketStatus::InSpace => "IN_SPACE",
        };
        f.write_str(name)
    }
}

fn format_statuses(statuses: &[RocketStatus]) -> String {
    statuses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A spacecraft with its status and (at most one) mission assignment.
///
/// The `mission_id` is the single source of truth for which mission the
/// rocket belongs to; the mission's view of its rockets is recomputed from
/// storage by the orchestration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rocket {
    id: RocketId,
    name: String,
    status: RocketStatus,
    mission_id: Option<MissionId>,
}

impl Rocket {
    /// Create a rocket on the ground with no mission.
    ///
    /// Fails when the name is empty or blank.
    pub fn new(id: RocketId, name: impl Into<String>) -> Result<Self, InvalidStateError> {
        Self::build(id, name.into(), RocketStatus::OnGround, None)
    }

    /// ON_GROUND -> IN_SPACE. Requires an assigned mission.
    pub fn start(&self) -> Result<Rocket, InvalidStateError> {
        self.status.check_transition(RocketStatus::InSpace)?;
        if self.mission_id.is_none() {
            return Err(InvalidStateError::new(format!(
                "rocket cannot be in space because there is no mission, rocket: {self:?}"
            )));
        }
        self.with_status(RocketStatus::InSpace)
    }

    /// ON_GROUND -> IN_REPAIR.
    pub fn repair(&self) -> Result<Rocket, InvalidStateError> {
        self.status.check_transition(RocketStatus::InRepair)?;
        self.with_status(RocketStatus::InRepair)
    }

    /// IN_REPAIR or IN_SPACE -> ON_GROUND. Keeps the mission assignment;
    /// status is the only field that changes.
    pub fn return_to_ground(&self) -> Result<Rocket, InvalidStateError> {
        self.status.check_transition(RocketStatus::OnGround)?;
        self.with_status(RocketStatus::OnGround)
    }

    /// Point this rocket at a mission. Status is unchanged.
    ///
    /// Fails when the rocket is not on the ground or already belongs to a
    /// mission.
    pub fn assign_to_mission(&self, mission_id: MissionId) -> Result<Rocket, InvalidStateError> {
        if self.status != RocketStatus::OnGround {
            return Err(InvalidStateError::new(format!(
                "rocket cannot be assigned to mission because of invalid status, rocket: {self:?}"
            )));
        }
        if self.mission_id.is_some() {
            return Err(InvalidStateError::new(format!(
                "rocket is already assigned to mission, rocket: {self:?}"
            )));
        }
        Self::build(self.id, self.name.clone(), self.status, Some(mission_id))
    }

    pub fn id(&self) -> RocketId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> RocketStatus {
        self.status
    }

    pub fn mission_id(&self) -> Option<MissionId> {
        self.mission_id
    }

    fn with_status(&self, status: RocketStatus) -> Result<Rocket, InvalidStateError> {
        Self::build(self.id, self.name.clone(), status, self.mission_id)
    }

    /// Single construction point. A rocket that exists is always valid:
    /// name non-blank, IN_SPACE implies a mission assignment.
    fn build(
        id: RocketId,
        name: String,
        status: RocketStatus,
        mission_id: Option<MissionId>,
    ) -> Result<Self, InvalidStateError> {
        if name.trim().is_empty() {
            return Err(InvalidStateError::new(format!(
                "rocket name cannot be empty or blank, rocket id: {id}"
            )));
        }
        if status == RocketStatus::InSpace && mission_id.is_none() {
            return Err(InvalidStateError::new(format!(
                "rocket {id} ({name}) cannot be in space without a mission"
            )));
        }
        Ok(Self {
            id,
            name,
            status,
            mission_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_ground(name: &str) -> Rocket {
        Rocket::new(RocketId::random(), name).unwrap()
    }

    fn in_space() -> Rocket {
        on_ground("Dragon XL")
            .assign_to_mission(MissionId::random())
            .unwrap()
            .start()
            .unwrap()
    }

    #[test]
    fn rocket_is_created_on_ground_without_mission() {
        let rocket = on_ground("Dragon XL");
        assert_eq!(rocket.status(), RocketStatus::OnGround);
        assert_eq!(rocket.mission_id(), None);
    }

    #[test]
    fn rocket_cannot_be_created_with_blank_name() {
        for name in ["", " ", "     "] {
            assert!(Rocket::new(RocketId::random(), name).is_err());
        }
    }

    #[test]
    fn rocket_can_be_assigned_to_mission() {
        let rocket = on_ground("Dragon XL");
        let assigned = rocket.assign_to_mission(MissionId::random()).unwrap();

        assert_eq!(assigned.status(), RocketStatus::OnGround);
        assert!(assigned.mission_id().is_some());
        // The original value is untouched.
        assert_eq!(rocket.mission_id(), None);
    }

    #[test]
    fn rocket_cannot_be_assigned_while_under_repair() {
        let in_repair = on_ground("Dragon XL").repair().unwrap();
        assert!(in_repair.assign_to_mission(MissionId::random()).is_err());
    }

    #[test]
    fn rocket_cannot_be_assigned_twice() {
        let assigned = on_ground("Dragon XL")
            .assign_to_mission(MissionId::random())
            .unwrap();
        assert!(assigned.assign_to_mission(MissionId::random()).is_err());
    }

    #[test]
    fn rocket_cannot_start_without_mission() {
        let rocket = on_ground("Dragon 1");
        assert!(rocket.start().is_err());
    }

    #[test]
    fn rocket_cannot_start_while_under_repair() {
        let in_repair = on_ground("Dragon XL").repair().unwrap();
        assert!(in_repair.start().is_err());
    }

    #[test]
    fn assigned_rocket_can_start() {
        let rocket = in_space();
        assert_eq!(rocket.status(), RocketStatus::InSpace);
        assert!(rocket.mission_id().is_some());
    }

    #[test]
    fn rocket_in_space_cannot_be_repaired() {
        assert!(in_space().repair().is_err());
    }

    #[test]
    fn rocket_in_space_can_return_to_ground_and_keeps_mission() {
        let returned = in_space().return_to_ground().unwrap();
        assert_eq!(returned.status(), RocketStatus::OnGround);
        assert!(returned.mission_id().is_some());
    }

    #[test]
    fn rocket_cannot_be_repaired_twice() {
        let in_repair = on_ground("Dragon XL").repair().unwrap();
        assert!(in_repair.repair().is_err());
    }

    #[test]
    fn repair_round_trip_restores_the_original_value() {
        let rocket = on_ground("Dragon XL");
        let round_trip = rocket.repair().unwrap().return_to_ground().unwrap();

        assert_eq!(round_trip, rocket);
        // No self-loop on ON_GROUND.
        assert!(round_trip.return_to_ground().is_err());
    }

    #[test]
    fn every_status_has_an_outgoing_edge() {
        for status in RocketStatus::ALL {
            assert!(
                !status.allowed_transitions().is_empty(),
                "{status} has no outgoing transitions"
            );
        }
    }

    #[test]
    fn every_status_has_an_incoming_edge() {
        for status in RocketStatus::ALL {
            let reachable = RocketStatus::ALL
                .iter()
                .any(|from| from.allowed_transitions().contains(&status));
            assert!(reachable, "{status} is unreachable");
        }
    }

    #[test]
    fn no_status_allows_a_self_loop() {
        for status in RocketStatus::ALL {
            assert!(!status.allowed_transitions().contains(&status));
        }
    }
}
