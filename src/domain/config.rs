// ============================================================================
// Rolling Configuration
// Timing and presentation settings for a rolling driver
// ============================================================================

use crate::domain::roller::RollingType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default time a roll takes, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Default refresh interval; 0 means every frame.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 0;

/// Settings for a [`RollingNumber`](crate::engine::RollingNumber).
///
/// Builder methods clamp out-of-range values instead of rejecting them:
/// a non-positive duration becomes 1 ms and a negative refresh interval
/// becomes 0 (every frame).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RollingConfig {
    /// Time a roll takes to reach its target, in milliseconds (>= 1)
    pub duration_ms: u64,

    /// Minimum time between ticks, in milliseconds (0 = every frame)
    pub refresh_interval_ms: u64,

    /// Emit a rolling notification as soon as a non-empty roll starts
    pub emit_event_on_set: bool,

    /// Whether readers see the truncated or the full current value
    pub rolling_type: RollingType,

    /// Caller-defined tag echoed in every event
    pub tag: i32,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            emit_event_on_set: true,
            rolling_type: RollingType::Integer,
            tag: 0,
        }
    }
}

impl RollingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set roll duration (non-positive becomes 1 ms)
    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = clamp_duration_ms(duration_ms);
        self
    }

    /// Builder method: Set refresh interval (negative becomes 0)
    pub fn with_refresh_interval_ms(mut self, interval_ms: i64) -> Self {
        self.refresh_interval_ms = clamp_refresh_interval_ms(interval_ms);
        self
    }

    /// Builder method: Emit a rolling event when a roll starts
    pub fn with_emit_event_on_set(mut self, emit: bool) -> Self {
        self.emit_event_on_set = emit;
        self
    }

    /// Builder method: Set how the current value is read
    pub fn with_rolling_type(mut self, rolling_type: RollingType) -> Self {
        self.rolling_type = rolling_type;
        self
    }

    /// Builder method: Set the event tag
    pub fn with_tag(mut self, tag: i32) -> Self {
        self.tag = tag;
        self
    }

    /// Validate the configuration
    ///
    /// Only fields assigned directly can be out of range; the builders
    /// always produce valid values.
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_ms == 0 {
            return Err("Duration must be at least 1 ms".to_string());
        }

        Ok(())
    }

    /// Duration actually used, never below 1 ms.
    pub fn effective_duration_ms(&self) -> u64 {
        self.duration_ms.max(1)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RollingConfig {
    /// Whole-unit counter, e.g. coin balances
    /// - Integer reading
    /// - Ticks every frame
    pub fn integer_counter(duration_ms: i64) -> Self {
        Self::new()
            .with_duration_ms(duration_ms)
            .with_rolling_type(RollingType::Integer)
    }

    /// Fractional counter, e.g. multipliers or cash with cents
    /// - Full-precision reading
    pub fn point_counter(duration_ms: i64) -> Self {
        Self::new()
            .with_duration_ms(duration_ms)
            .with_rolling_type(RollingType::Point)
    }

    /// Shortest possible roll: reaches the target on the first tick
    pub fn instant() -> Self {
        Self::new().with_duration_ms(1)
    }
}

// ============================================================================
// JSON (optional)
// ============================================================================

#[cfg(feature = "serde")]
impl RollingConfig {
    /// Parse a configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}

pub(crate) fn clamp_duration_ms(duration_ms: i64) -> u64 {
    if duration_ms <= 0 {
        tracing::trace!(duration_ms, "non-positive duration clamped to 1 ms");
        1
    } else {
        duration_ms as u64
    }
}

pub(crate) fn clamp_refresh_interval_ms(interval_ms: i64) -> u64 {
    if interval_ms < 0 {
        tracing::warn!(interval_ms, "negative refresh interval clamped to every frame");
        0
    } else {
        interval_ms as u64
    }
}
