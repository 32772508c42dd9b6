//! Mission - a flight campaign and the rockets currently assigned to it.
//!
//! A Mission is a value object like [`Rocket`]: transitions return new
//! instances. Operations that change status take the *complete replacement
//! set* of assigned rockets, never a delta: the orchestration layer reloads
//! the mission's rockets from storage and passes them whole.
//!
//! ```text
//!   PENDING ◀── mark_as_pending ── SCHEDULED ── start ──▶ IN_PROGRESS
//!      │                               ▲                       │
//!      └────────── schedule ───────────┘                      end
//!                                                              ▼
//!                                                            ENDED
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::error::InvalidStateError;

use super::id::{MissionId, RocketId};
use super::rocket::{Rocket, RocketStatus};

/// Where a mission currently is in its lifecycle. ENDED is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissionStatus {
    Scheduled,
    Pending,
    InProgress,
    Ended,
}

impl MissionStatus {
    /// Every declared status, for exhaustive table checks.
    pub const ALL: [MissionStatus; 4] = [
        MissionStatus::Scheduled,
        MissionStatus::Pending,
        MissionStatus::InProgress,
        MissionStatus::Ended,
    ];

    /// Statuses directly reachable from this one in a single transition.
    ///
    /// Total match over the enum: a status added without a table entry is a
    /// compile error, not a silently un-exitable state.
    pub fn allowed_transitions(self) -> &'static [MissionStatus] {
        match self {
            MissionStatus::Scheduled => &[MissionStatus::Pending, MissionStatus::InProgress],
            MissionStatus::Pending => &[MissionStatus::Scheduled],
            MissionStatus::InProgress => &[MissionStatus::Ended],
            MissionStatus::Ended => &[],
        }
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    fn check_transition(self, next: MissionStatus) -> Result<(), InvalidStateError> {
        let allowed = self.allowed_transitions();
        if allowed.contains(&next) {
            Ok(())
        } else {
            Err(InvalidStateError::new(format!(
                "mission status {self} cannot be changed to {next}, available statuses: {}",
                format_statuses(allowed),
            )))
        }
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissionStatus::Scheduled => "SCHEDULED",
            MissionStatus::Pending => "PENDING",
            MissionStatus::InProgress => "IN_PROGRESS",
            MissionStatus::Ended => "ENDED",
        };
        f.write_str(name)
    }
}

fn format_statuses(statuses: &[MissionStatus]) -> String {
    statuses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A mission and its current view of the rockets flying it.
///
/// The mapping keys are unique rocket ids; insertion order is irrelevant.
/// Referential consistency (every mapped rocket pointing back at this
/// mission) is kept by the orchestration layer, which rebuilds the set from
/// storage on every relevant rocket-side transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    id: MissionId,
    name: String,
    status: MissionStatus,
    rockets: HashMap<RocketId, Rocket>,
}

impl Mission {
    /// Create a scheduled mission with no rockets.
    ///
    /// Fails when the name is empty or blank.
    pub fn new(id: MissionId, name: impl Into<String>) -> Result<Self, InvalidStateError> {
        Self::build(id, name.into(), MissionStatus::Scheduled, HashMap::new())
    }

    /// Create a scheduled mission with an initial set of rockets.
    ///
    /// Each rocket is assigned to this mission as a construction side
    /// effect, so a rocket that already belongs elsewhere fails the whole
    /// construction. Supplied rocket ids must be unique.
    pub fn with_rockets(
        id: MissionId,
        name: impl Into<String>,
        rockets: Vec<Rocket>,
    ) -> Result<Self, InvalidStateError> {
        let mut assigned = HashMap::with_capacity(rockets.len());
        for rocket in rockets {
            let rocket = rocket.assign_to_mission(id)?;
            let rocket_id = rocket.id();
            if assigned.insert(rocket_id, rocket).is_some() {
                return Err(InvalidStateError::new(format!(
                    "rocket {rocket_id} appears twice in the initial set, mission id: {id}"
                )));
            }
        }
        Self::build(id, name.into(), MissionStatus::Scheduled, assigned)
    }

    /// PENDING -> SCHEDULED, with the complete replacement set of rockets.
    pub fn schedule(&self, rockets: &[Rocket]) -> Result<Mission, InvalidStateError> {
        self.status.check_transition(MissionStatus::Scheduled)?;
        let updated = self.replacement_set(rockets)?;
        Self::build(self.id, self.name.clone(), MissionStatus::Scheduled, updated)
    }

    /// SCHEDULED -> PENDING, with the complete replacement set of rockets.
    ///
    /// A mission without rockets has nothing to wait on and cannot become
    /// pending.
    pub fn mark_as_pending(&self, rockets: &[Rocket]) -> Result<Mission, InvalidStateError> {
        self.status.check_transition(MissionStatus::Pending)?;
        if self.rockets.is_empty() {
            return Err(InvalidStateError::new(format!(
                "mission cannot be marked as pending because there are no rockets, mission: {self:?}"
            )));
        }
        let updated = self.replacement_set(rockets)?;
        Self::build(self.id, self.name.clone(), MissionStatus::Pending, updated)
    }

    /// SCHEDULED -> IN_PROGRESS, with the complete replacement set of
    /// rockets. At least one supplied rocket must be in space.
    pub fn start(&self, rockets: &[Rocket]) -> Result<Mission, InvalidStateError> {
        self.status.check_transition(MissionStatus::InProgress)?;
        if self.rockets.is_empty() {
            return Err(InvalidStateError::new(format!(
                "mission cannot be started because there are no rockets, mission: {self:?}"
            )));
        }
        let updated = self.replacement_set(rockets)?;
        Self::build(self.id, self.name.clone(), MissionStatus::InProgress, updated)
    }

    /// IN_PROGRESS -> ENDED. Ended missions retain no rocket assignments.
    pub fn end(&self) -> Result<Mission, InvalidStateError> {
        self.status.check_transition(MissionStatus::Ended)?;
        Self::build(
            self.id,
            self.name.clone(),
            MissionStatus::Ended,
            HashMap::new(),
        )
    }

    /// Add rockets that were not previously part of the mission.
    ///
    /// The supplied rockets are the re-derived results of
    /// [`Rocket::assign_to_mission`]; each must already carry this mission's
    /// id. Fails on a running or ended mission, an empty list, or a rocket
    /// id already present in the mapping.
    pub fn assign_rockets(&self, rockets: Vec<Rocket>) -> Result<Mission, InvalidStateError> {
        if matches!(self.status, MissionStatus::InProgress | MissionStatus::Ended) {
            return Err(InvalidStateError::new(format!(
                "rockets cannot be assigned because mission has invalid status, mission: {self:?}"
            )));
        }
        if rockets.is_empty() {
            return Err(InvalidStateError::new(format!(
                "there are no rockets to assign, mission: {self:?}"
            )));
        }

        let mut updated = self.rockets.clone();
        for rocket in rockets {
            if rocket.mission_id() != Some(self.id) {
                return Err(InvalidStateError::new(format!(
                    "rocket does not carry this mission's id, rocket: {rocket:?}, mission id: {}",
                    self.id,
                )));
            }
            let rocket_id = rocket.id();
            if updated.insert(rocket_id, rocket).is_some() {
                return Err(InvalidStateError::new(format!(
                    "rocket {rocket_id} is already assigned to this mission, mission: {self:?}"
                )));
            }
        }
        Self::build(self.id, self.name.clone(), self.status, updated)
    }

    pub fn id(&self) -> MissionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn rockets(&self) -> &HashMap<RocketId, Rocket> {
        &self.rockets
    }

    pub fn rocket_count(&self) -> usize {
        self.rockets.len()
    }

    /// Validate a complete replacement set: same cardinality as the current
    /// mapping, unique ids, and every id already belonging to this mission.
    /// Rockets may change identity and status, never cardinality.
    fn replacement_set(
        &self,
        rockets: &[Rocket],
    ) -> Result<HashMap<RocketId, Rocket>, InvalidStateError> {
        if rockets.len() != self.rockets.len() {
            return Err(InvalidStateError::new(format!(
                "the number of rockets must stay {}, got {}, mission: {self:?}",
                self.rockets.len(),
                rockets.len(),
            )));
        }
        let mut updated = HashMap::with_capacity(rockets.len());
        for rocket in rockets {
            let rocket_id = rocket.id();
            if !self.rockets.contains_key(&rocket_id) {
                return Err(InvalidStateError::new(format!(
                    "rocket {rocket_id} does not belong to this mission, mission: {self:?}"
                )));
            }
            if updated.insert(rocket_id, rocket.clone()).is_some() {
                return Err(InvalidStateError::new(format!(
                    "rocket {rocket_id} appears twice in the replacement set, mission: {self:?}"
                )));
            }
        }
        Ok(updated)
    }

    /// Single construction point. A mission that exists is always valid:
    /// name non-blank, IN_PROGRESS implies at least one rocket in space.
    fn build(
        id: MissionId,
        name: String,
        status: MissionStatus,
        rockets: HashMap<RocketId, Rocket>,
    ) -> Result<Self, InvalidStateError> {
        if name.trim().is_empty() {
            return Err(InvalidStateError::new(format!(
                "mission name cannot be empty or blank, mission id: {id}"
            )));
        }
        if status == MissionStatus::InProgress
            && !rockets
                .values()
                .any(|rocket| rocket.status() == RocketStatus::InSpace)
        {
            return Err(InvalidStateError::new(format!(
                "mission {id} ({name}) cannot be in progress without a rocket in space"
            )));
        }
        Ok(Self {
            id,
            name,
            status,
            rockets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(name: &str) -> Mission {
        Mission::new(MissionId::random(), name).unwrap()
    }

    fn rocket(name: &str) -> Rocket {
        Rocket::new(RocketId::random(), name).unwrap()
    }

    #[test]
    fn mission_is_created_scheduled_and_empty() {
        let mars = mission("Mars");
        assert_eq!(mars.status(), MissionStatus::Scheduled);
        assert_eq!(mars.rocket_count(), 0);
    }

    #[test]
    fn mission_cannot_be_created_with_blank_name() {
        for name in ["", " ", "   "] {
            assert!(Mission::new(MissionId::random(), name).is_err());
        }
    }

    #[test]
    fn construction_with_rockets_assigns_them() {
        let id = MissionId::random();
        let mars = Mission::with_rockets(id, "Mars", vec![rocket("Dragon")]).unwrap();

        assert_eq!(mars.rocket_count(), 1);
        for assigned in mars.rockets().values() {
            assert_eq!(assigned.mission_id(), Some(id));
        }
    }

    #[test]
    fn construction_rejects_duplicate_rocket_ids() {
        let dragon = rocket("Dragon");
        let err = Mission::with_rockets(
            MissionId::random(),
            "Mars",
            vec![dragon.clone(), dragon],
        )
        .unwrap_err();
        assert!(err.message().contains("appears twice"));
    }

    #[test]
    fn construction_rejects_rockets_already_assigned_elsewhere() {
        let elsewhere = rocket("Dragon")
            .assign_to_mission(MissionId::random())
            .unwrap();
        assert!(Mission::with_rockets(MissionId::random(), "Mars", vec![elsewhere]).is_err());
    }

    #[test]
    fn full_lifecycle_scheduled_pending_scheduled_in_progress_ended() {
        let scheduled = mission("Mars");
        let dragon = rocket("Dragon").assign_to_mission(scheduled.id()).unwrap();
        let assigned = scheduled.assign_rockets(vec![dragon.clone()]).unwrap();

        let dragon_in_repair = dragon.repair().unwrap();
        let pending = assigned
            .mark_as_pending(&[dragon_in_repair.clone()])
            .unwrap();
        assert_eq!(pending.status(), MissionStatus::Pending);

        let dragon_repaired = dragon_in_repair.return_to_ground().unwrap();
        let scheduled_again = pending.schedule(&[dragon_repaired.clone()]).unwrap();
        assert_eq!(scheduled_again.status(), MissionStatus::Scheduled);

        let dragon_in_space = dragon_repaired.start().unwrap();
        let in_progress = scheduled_again.start(&[dragon_in_space.clone()]).unwrap();
        assert_eq!(in_progress.status(), MissionStatus::InProgress);

        let ended = in_progress.end().unwrap();
        assert_eq!(ended.status(), MissionStatus::Ended);
        assert_eq!(ended.rocket_count(), 0);
    }

    #[test]
    fn pending_fails_without_rockets() {
        let empty = mission("Mars");
        let err = empty.mark_as_pending(&[]).unwrap_err();
        assert!(err.message().contains("no rockets"));
    }

    #[test]
    fn pending_fails_from_in_progress() {
        let scheduled = mission("Mars");
        let dragon = rocket("Dragon").assign_to_mission(scheduled.id()).unwrap();
        let assigned = scheduled.assign_rockets(vec![dragon.clone()]).unwrap();
        let in_progress = assigned.start(&[dragon.start().unwrap()]).unwrap();

        assert!(in_progress.mark_as_pending(&[]).is_err());
    }

    #[test]
    fn start_fails_without_a_rocket_in_space() {
        let scheduled = mission("Mars");
        let dragon = rocket("Dragon").assign_to_mission(scheduled.id()).unwrap();
        let assigned = scheduled.assign_rockets(vec![dragon.clone()]).unwrap();

        // The supplied rocket is still on the ground.
        assert!(assigned.start(&[dragon]).is_err());
    }

    #[test]
    fn start_fails_on_an_empty_mission() {
        assert!(mission("Mars").start(&[]).is_err());
    }

    #[test]
    fn replacement_set_cannot_change_cardinality() {
        let scheduled = mission("Mars");
        let dragon = rocket("Dragon").assign_to_mission(scheduled.id()).unwrap();
        let assigned = scheduled.assign_rockets(vec![dragon.clone()]).unwrap();

        let stranger = rocket("Falcon").assign_to_mission(scheduled.id()).unwrap();
        // Two rockets supplied to a one-rocket mission.
        assert!(assigned
            .mark_as_pending(&[dragon.repair().unwrap(), stranger])
            .is_err());
    }

    #[test]
    fn replacement_set_rejects_foreign_rockets() {
        let scheduled = mission("Mars");
        let dragon = rocket("Dragon").assign_to_mission(scheduled.id()).unwrap();
        let assigned = scheduled.assign_rockets(vec![dragon]).unwrap();

        let stranger = rocket("Falcon").assign_to_mission(scheduled.id()).unwrap();
        assert!(assigned.mark_as_pending(&[stranger]).is_err());
    }

    #[test]
    fn assign_rockets_rejects_duplicates() {
        let scheduled = mission("Mars");
        let dragon = rocket("Dragon").assign_to_mission(scheduled.id()).unwrap();
        let assigned = scheduled.assign_rockets(vec![dragon.clone()]).unwrap();

        assert!(assigned.assign_rockets(vec![dragon]).is_err());
    }

    #[test]
    fn assign_rockets_rejects_an_empty_list() {
        assert!(mission("Mars").assign_rockets(vec![]).is_err());
    }

    #[test]
    fn assign_rockets_rejects_rockets_pointing_elsewhere() {
        let mars = mission("Mars");
        let foreign = rocket("Dragon")
            .assign_to_mission(MissionId::random())
            .unwrap();
        assert!(mars.assign_rockets(vec![foreign]).is_err());
    }

    #[test]
    fn assign_rockets_fails_on_running_or_ended_missions() {
        let scheduled = mission("Mars");
        let dragon = rocket("Dragon").assign_to_mission(scheduled.id()).unwrap();
        let assigned = scheduled.assign_rockets(vec![dragon.clone()]).unwrap();
        let in_progress = assigned.start(&[dragon.start().unwrap()]).unwrap();

        let late = rocket("Falcon").assign_to_mission(scheduled.id()).unwrap();
        assert!(in_progress.assign_rockets(vec![late.clone()]).is_err());

        let ended = in_progress.end().unwrap();
        assert!(ended.assign_rockets(vec![late]).is_err());
    }

    #[test]
    fn ended_is_the_only_terminal_status() {
        for status in MissionStatus::ALL {
            assert_eq!(status.is_terminal(), status == MissionStatus::Ended);
        }
    }

    #[test]
    fn every_status_has_an_incoming_edge() {
        for status in MissionStatus::ALL {
            let reachable = MissionStatus::ALL
                .iter()
                .any(|from| from.allowed_transitions().contains(&status));
            assert!(reachable, "{status} is unreachable");
        }
    }

    #[test]
    fn no_status_allows_a_self_loop() {
        for status in MissionStatus::ALL {
            assert!(!status.allowed_transitions().contains(&status));
        }
    }
}
