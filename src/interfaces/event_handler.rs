// ============================================================================
// Event Handler Interface
// Defines the contract for handling rolling progress and completion events
// ============================================================================

use crate::domain::RollerId;
use crate::numeric::NumericValue;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a rolling driver
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RollingEvent {
    /// Displayed value moved; emitted on every applied tick
    NumberRolling {
        source: RollerId,
        tag: i32,
        /// Value as readers see it (truncated in integer mode)
        current: NumericValue,
        target: NumericValue,
        timestamp: DateTime<Utc>,
    },

    /// Roll reached its target; emitted exactly once per roll
    RollingFinished {
        source: RollerId,
        tag: i32,
        target: NumericValue,
        timestamp: DateTime<Utc>,
    },
}

impl RollingEvent {
    pub fn source(&self) -> RollerId {
        match self {
            RollingEvent::NumberRolling { source, .. }
            | RollingEvent::RollingFinished { source, .. } => *source,
        }
    }

    pub fn target(&self) -> NumericValue {
        match self {
            RollingEvent::NumberRolling { target, .. }
            | RollingEvent::RollingFinished { target, .. } => *target,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, RollingEvent::RollingFinished { .. })
    }
}

/// Event handler trait for processing rolling events
/// Implementations can update labels, play sounds, log, etc.
pub trait RollingEventHandler: Send + Sync {
    /// Handle a rolling event
    fn on_event(&self, event: RollingEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: &[RollingEvent]) {
        for event in events {
            self.on_event(event.clone());
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl RollingEventHandler for NoOpEventHandler {
    fn on_event(&self, _event: RollingEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl RollingEventHandler for LoggingEventHandler {
    fn on_event(&self, event: RollingEvent) {
        tracing::debug!("Rolling number event: {:?}", event);
    }
}

/// Keeps every event it receives, in order.
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<RollingEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events
    pub fn events(&self) -> Vec<RollingEvent> {
        self.events.lock().clone()
    }

    /// Remove and return recorded events
    pub fn drain(&self) -> Vec<RollingEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn rolling_count(&self) -> usize {
        self.events.lock().iter().filter(|e| !e.is_finished()).count()
    }

    pub fn finished_count(&self) -> usize {
        self.events.lock().iter().filter(|e| e.is_finished()).count()
    }

    pub fn last(&self) -> Option<RollingEvent> {
        self.events.lock().last().cloned()
    }
}

impl RollingEventHandler for RecordingEventHandler {
    fn on_event(&self, event: RollingEvent) {
        self.events.lock().push(event);
    }
}
