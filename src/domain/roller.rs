// ============================================================================
// Roller Domain Model
// ============================================================================

use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Identity of a rolling driver, carried as the source of its events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollerId(Uuid);

impl RollerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RollerId {
    fn default() -> Self {
        Self::new()
    }
}

/// How the current value is exposed to readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RollingType {
    /// Truncated to an integer when read; fractions are kept internally
    #[default]
    Integer,
    /// Full value including fractions
    Point,
}

// ============================================================================
// Roller State Machine
// ============================================================================

/// Observable state of a rolling driver.
///
/// `Finished` is transient: it is reported while completion events are
/// built and the driver is `Idle` again before control returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RollerState {
    Idle = 0,
    Rolling = 1,
    Finished = 2,
}

impl RollerState {
    pub fn from_u8(val: u8) -> Self {
        match val {
            1 => RollerState::Rolling,
            2 => RollerState::Finished,
            _ => RollerState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RollerState::Rolling)
    }

    /// Valid transitions of the per-roll state machine
    pub fn can_transition_to(&self, to: RollerState) -> bool {
        use RollerState::*;
        matches!(
            (self, to),
            (Idle, Rolling)
                | (Idle, Finished)
                | (Rolling, Rolling)
                | (Rolling, Finished)
                | (Rolling, Idle)
                | (Finished, Idle)
                | (Idle, Idle)
        )
    }
}
