// ============================================================================
// Rolling Number
// Frame-driven animation of a displayed value toward a target
// ============================================================================

use crate::domain::config::{clamp_duration_ms, clamp_refresh_interval_ms};
use crate::domain::{RollerId, RollerState, RollingConfig, RollingType};
use crate::engine::ticker::{TickHandle, Ticker};
use crate::interfaces::{RollingEvent, RollingEventHandler};
use crate::numeric::{NumericInput, NumericValue, RoundingMode};
use chrono::Utc;
use smallvec::SmallVec;
use std::sync::Arc;
use std::time::Duration;

/// Events produced by one call into the driver (at most rolling + finished).
pub type RollingEvents = SmallVec<[RollingEvent; 2]>;

/// Result of starting a roll.
#[derive(Debug, Clone)]
pub struct RollStart {
    /// Whether ticking was scheduled (false when the roll completed at once)
    pub started: bool,
    /// Events emitted synchronously by the start
    pub events: RollingEvents,
}

/// Animates a current value toward a target over a fixed duration.
///
/// The host calls [`RollingNumber::update`] once per frame. Each applied
/// tick moves the value by `delta_per_second * dt`, emits a
/// [`RollingEvent::NumberRolling`], and on reaching or crossing the target
/// clamps to it and emits [`RollingEvent::RollingFinished`].
///
/// Starting a new roll cancels the one in flight. Dropping the driver
/// stops it.
pub struct RollingNumber {
    id: RollerId,
    config: RollingConfig,

    /// Internally tracked value, never truncated
    current: NumericValue,

    target: NumericValue,

    /// Signed change per second, fixed for the lifetime of a roll
    delta: NumericValue,

    /// Time applied to the current roll so far
    rolled: Duration,

    /// Duration of the current roll
    roll_duration: Duration,

    state: RollerState,
    ticker: Ticker,
    handle: Option<TickHandle>,
    event_handler: Arc<dyn RollingEventHandler>,
}

impl RollingNumber {
    /// Create a new idle driver at zero
    pub fn new(config: RollingConfig, event_handler: Arc<dyn RollingEventHandler>) -> Self {
        Self {
            id: RollerId::new(),
            config,
            current: NumericValue::ZERO,
            target: NumericValue::ZERO,
            delta: NumericValue::ZERO,
            rolled: Duration::ZERO,
            roll_duration: Duration::ZERO,
            state: RollerState::Idle,
            ticker: Ticker::new(),
            handle: None,
            event_handler,
        }
    }

    // ========================================================================
    // Rolling
    // ========================================================================

    /// Start rolling from `from` to `to`.
    ///
    /// `duration_ms` overrides the configured duration when positive.
    /// `continual` marks a roll that continues from the displayed value.
    /// Returns whether ticking was scheduled; a roll whose start equals its
    /// target finishes immediately and returns false.
    pub fn roll_number(
        &mut self,
        from: impl Into<NumericInput>,
        to: impl Into<NumericInput>,
        duration_ms: Option<i64>,
        continual: bool,
    ) -> bool {
        self.start_roll(from, to, duration_ms, continual).started
    }

    /// Roll from the current internal value to `to`.
    pub fn roll_number_to(&mut self, to: impl Into<NumericInput>, duration_ms: Option<i64>) -> bool {
        let from = self.current;
        self.roll_number(from, to, duration_ms, true)
    }

    /// Same as [`RollingNumber::roll_number`], also returning the events
    /// emitted synchronously.
    pub fn start_roll(
        &mut self,
        from: impl Into<NumericInput>,
        to: impl Into<NumericInput>,
        duration_ms: Option<i64>,
        continual: bool,
    ) -> RollStart {
        let to = NumericValue::new(to);
        let from = NumericValue::new(from);

        self.cancel_ticker();
        if self.state != RollerState::Idle {
            self.transition(RollerState::Idle);
        }

        let duration_ms = match duration_ms {
            Some(ms) if ms > 0 => ms as u64,
            _ => self.config.effective_duration_ms(),
        }
        .max(1);

        self.current = from;
        self.target = to;
        self.rolled = Duration::ZERO;
        self.roll_duration = Duration::from_millis(duration_ms);
        self.delta = to.minus(from).divided_by(duration_ms as f64 * 0.001);

        let mut events = RollingEvents::new();
        let started = !self.delta.eq(0);

        tracing::debug!(
            roller = ?self.id,
            from = %from,
            to = %to,
            duration_ms,
            continual,
            started,
            "roll requested"
        );

        if started {
            self.transition(RollerState::Rolling);
            if self.config.emit_event_on_set {
                events.push(self.rolling_event());
            }
            self.handle = Some(self.ticker.schedule(self.config.refresh_interval_ms));
        } else {
            self.transition(RollerState::Finished);
            events.push(self.finished_event());
            self.transition(RollerState::Idle);
        }

        self.dispatch(&events);
        RollStart { started, events }
    }

    /// Feed one host frame. Returns the events emitted by the tick, if the
    /// ticker fired.
    pub fn update(&mut self, frame_dt: Duration) -> RollingEvents {
        match self.ticker.advance(frame_dt) {
            Some(dt) => self.tick(dt),
            None => RollingEvents::new(),
        }
    }

    fn tick(&mut self, dt: Duration) -> RollingEvents {
        let mut events = RollingEvents::new();
        if self.current.eq(self.target) {
            return events;
        }

        let step = self.delta.multiplied_by(dt.as_secs_f64());
        self.current = self.current.plus(step);
        self.rolled += dt;

        let crossed = (step.gt(0) && self.current.gte(self.target))
            || (step.lt(0) && self.current.lte(self.target));
        // Float steps can fall a hair short of the target at the deadline
        let finished = crossed || self.rolled >= self.roll_duration;

        if finished {
            self.current = self.target;
            self.transition(RollerState::Finished);
        }

        events.push(self.rolling_event());

        if finished {
            events.push(self.finished_event());
            tracing::debug!(roller = ?self.id, target = %self.target, "roll finished");
            self.clear();
        }

        self.dispatch(&events);
        events
    }

    /// Cancel any roll without emitting events.
    pub fn stop(&mut self) {
        if self.is_rolling() {
            tracing::debug!(roller = ?self.id, current = %self.current, "roll stopped");
        }
        self.clear();
    }

    pub fn is_rolling(&self) -> bool {
        !self.delta.eq(0)
    }

    /// Rolling, but already sitting on the target (e.g. after
    /// `set_current(target)`). Ticks do nothing in this state, so the roll
    /// never finishes on its own.
    pub fn is_stalled(&self) -> bool {
        self.is_rolling() && self.current.eq(self.target)
    }

    fn clear(&mut self) {
        self.cancel_ticker();
        self.delta = NumericValue::ZERO;
        self.transition(RollerState::Idle);
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.ticker.cancel(handle);
        }
    }

    fn transition(&mut self, to: RollerState) {
        debug_assert!(
            self.state.can_transition_to(to),
            "invalid roller transition {:?} -> {:?}",
            self.state,
            to
        );
        self.state = to;
    }

    // ========================================================================
    // Events
    // ========================================================================

    fn rolling_event(&self) -> RollingEvent {
        RollingEvent::NumberRolling {
            source: self.id,
            tag: self.config.tag,
            current: self.current(),
            target: self.target,
            timestamp: Utc::now(),
        }
    }

    fn finished_event(&self) -> RollingEvent {
        RollingEvent::RollingFinished {
            source: self.id,
            tag: self.config.tag,
            target: self.target,
            timestamp: Utc::now(),
        }
    }

    fn dispatch(&self, events: &[RollingEvent]) {
        if !events.is_empty() {
            self.event_handler.on_events(events);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> RollerId {
        self.id
    }

    pub fn state(&self) -> RollerState {
        self.state
    }

    /// Current value as readers see it (truncated in integer mode).
    pub fn current(&self) -> NumericValue {
        match self.config.rolling_type {
            RollingType::Integer => self.current.to_decimal_places(0, Some(RoundingMode::Down)),
            RollingType::Point => self.current,
        }
    }

    /// Current value with its fractional part, regardless of mode.
    pub fn current_raw(&self) -> NumericValue {
        self.current
    }

    /// Overwrite the current value without starting or stopping a roll.
    pub fn set_current(&mut self, value: impl Into<NumericInput>) {
        self.current = NumericValue::new(value);
    }

    pub fn target(&self) -> NumericValue {
        self.target
    }

    /// Signed change per second of the active roll (zero when idle).
    pub fn delta(&self) -> NumericValue {
        self.delta
    }

    pub fn config(&self) -> &RollingConfig {
        &self.config
    }

    pub fn duration_ms(&self) -> u64 {
        self.config.duration_ms
    }

    /// Negative durations become 1 ms.
    pub fn set_duration_ms(&mut self, duration_ms: i64) {
        self.config.duration_ms = clamp_duration_ms(duration_ms);
    }

    /// Negative intervals become 0 (every frame). Applies from the next roll.
    pub fn set_refresh_interval_ms(&mut self, interval_ms: i64) {
        self.config.refresh_interval_ms = clamp_refresh_interval_ms(interval_ms);
    }

    pub fn set_emit_event_on_set(&mut self, emit: bool) {
        self.config.emit_event_on_set = emit;
    }

    pub fn rolling_type(&self) -> RollingType {
        self.config.rolling_type
    }

    pub fn set_rolling_type(&mut self, rolling_type: RollingType) {
        self.config.rolling_type = rolling_type;
    }

    pub fn tag(&self) -> i32 {
        self.config.tag
    }

    pub fn set_tag(&mut self, tag: i32) {
        self.config.tag = tag;
    }

    pub fn set_event_handler(&mut self, event_handler: Arc<dyn RollingEventHandler>) {
        self.event_handler = event_handler;
    }
}

impl Drop for RollingNumber {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for RollingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingNumber")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("current", &self.current)
            .field("target", &self.target)
            .field("delta", &self.delta)
            .field("config", &self.config)
            .finish()
    }
}
