//! Identifier value objects.
//!
//! Opaque, globally-unique identifiers compared by value. Uniqueness comes
//! from the UUID source; the domain performs no check beyond trusting it.

use std::fmt;

use uuid::Uuid;

/// Unique identifier for a Rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RocketId(Uuid);

impl RocketId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Fresh, globally-unique identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a Mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissionId(Uuid);

impl MissionId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Fresh, globally-unique identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
