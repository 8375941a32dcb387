// ============================================================================
// Rolling Label
// Text display driven by a RollingNumber, with deferred roll starts
// ============================================================================

use crate::domain::RollingConfig;
use crate::engine::rolling_number::RollingNumber;
use crate::format;
use crate::interfaces::{NoOpEventHandler, RollingEvent, RollingEventHandler};
use crate::numeric::{NumericInput, NumericValue};
use smallvec::SmallVec;
use std::sync::Arc;
use std::time::Duration;

/// Grouping width used when no formatter is set.
pub const DEFAULT_MAX_LENGTH: usize = 19;

/// Label notifications (at most three per call: the immediate path emits
/// two rolling updates and a finish).
pub type LabelEvents = SmallVec<[LabelEvent; 3]>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelEvent {
    Rolling { current: NumericValue, target: NumericValue },
    Finished { target: NumericValue },
}

/// How the label turns a value into text.
pub enum LabelFormatter {
    /// Thousands grouping, suffixed once wider than `max_length`
    Grouped { max_length: usize },
    Custom(Box<dyn Fn(NumericValue) -> String + Send + Sync>),
}

impl LabelFormatter {
    pub fn custom(f: impl Fn(NumericValue) -> String + Send + Sync + 'static) -> Self {
        LabelFormatter::Custom(Box::new(f))
    }

    pub fn render(&self, value: NumericValue) -> String {
        match self {
            LabelFormatter::Grouped { max_length } => format::format(value, *max_length, 0),
            LabelFormatter::Custom(f) => f(value),
        }
    }
}

impl Default for LabelFormatter {
    fn default() -> Self {
        LabelFormatter::Grouped {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl std::fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFormatter::Grouped { max_length } => f
                .debug_struct("Grouped")
                .field("max_length", max_length)
                .finish(),
            LabelFormatter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Roll parked until the next `late_update`.
#[derive(Debug, Clone, Copy)]
struct PendingRoll {
    /// `None` continues from the driver's current value
    current: Option<NumericValue>,
    target: NumericValue,
}

/// Text label whose number rolls toward new values.
///
/// Animated requests are parked and handed to the driver on the next
/// [`RollingLabel::late_update`], so several requests within one frame
/// collapse into the last one.
#[derive(Debug)]
pub struct RollingLabel {
    roller: RollingNumber,
    formatter: LabelFormatter,
    text: String,
    pending: Option<PendingRoll>,
    visible: bool,
}

impl RollingLabel {
    pub fn new(config: RollingConfig) -> Self {
        Self::with_event_handler(config, Arc::new(NoOpEventHandler))
    }

    /// The handler receives the driver's own events.
    pub fn with_event_handler(config: RollingConfig, event_handler: Arc<dyn RollingEventHandler>) -> Self {
        let mut label = Self {
            roller: RollingNumber::new(config, event_handler),
            formatter: LabelFormatter::default(),
            text: String::new(),
            pending: None,
            visible: true,
        };
        label.render(NumericValue::ZERO);
        label
    }

    // ========================================================================
    // Rolling
    // ========================================================================

    /// Roll from `current` to `target`.
    ///
    /// Animated: the text shows `current` now and the roll starts at the
    /// next `late_update`. Otherwise the label jumps to `target` and the
    /// notifications are returned at once.
    pub fn roll_number(
        &mut self,
        current: impl Into<NumericInput>,
        target: impl Into<NumericInput>,
        animate: bool,
    ) -> LabelEvents {
        self.stop();
        let current = NumericValue::new(current);
        let target = NumericValue::new(target);

        if animate {
            self.pending = Some(PendingRoll {
                current: Some(current),
                target,
            });
            self.render(current);
            LabelEvents::new()
        } else {
            self.jump_to(target)
        }
    }

    /// Roll from the number on display to `target`.
    pub fn roll_number_to(&mut self, target: impl Into<NumericInput>, animate: bool) -> LabelEvents {
        self.stop();
        let target = NumericValue::new(target);

        if animate {
            self.pending = Some(PendingRoll { current: None, target });
            LabelEvents::new()
        } else {
            self.jump_to(target)
        }
    }

    fn jump_to(&mut self, target: NumericValue) -> LabelEvents {
        let mut events = LabelEvents::new();

        let before = self.roller.current();
        self.render(before);
        events.push(LabelEvent::Rolling { current: before, target });

        self.roller.set_current(target);
        let after = self.roller.current();
        self.render(after);
        events.push(LabelEvent::Rolling { current: after, target });

        events.push(LabelEvent::Finished { target });
        events
    }

    /// Start the parked request, if any. Call once per frame after updates.
    pub fn late_update(&mut self) -> LabelEvents {
        let Some(pending) = self.pending.take() else {
            return LabelEvents::new();
        };

        let start = match pending.current {
            Some(current) => self.roller.start_roll(current, pending.target, None, false),
            None => {
                let from = self.roller.current_raw();
                self.roller.start_roll(from, pending.target, None, true)
            },
        };
        self.absorb(&start.events)
    }

    /// Feed one host frame to the driver.
    pub fn update(&mut self, frame_dt: Duration) -> LabelEvents {
        let events = self.roller.update(frame_dt);
        self.absorb(&events)
    }

    /// Drop the parked request and stop the driver.
    pub fn stop(&mut self) {
        self.pending = None;
        self.roller.stop();
    }

    pub fn is_rolling(&self) -> bool {
        self.roller.is_rolling()
    }

    fn absorb(&mut self, events: &[RollingEvent]) -> LabelEvents {
        events
            .iter()
            .map(|event| match *event {
                RollingEvent::NumberRolling { current, target, .. } => {
                    self.render(current);
                    LabelEvent::Rolling { current, target }
                },
                RollingEvent::RollingFinished { target, .. } => LabelEvent::Finished { target },
            })
            .collect()
    }

    fn render(&mut self, value: NumericValue) {
        self.text = self.formatter.render(value);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Set the number without animation.
    pub fn set_number(&mut self, value: impl Into<NumericInput>) -> LabelEvents {
        self.roller.set_current(value);
        let current = self.roller.current();
        self.roll_number_to(current, false)
    }

    /// Number as the driver reports it.
    pub fn number(&self) -> NumericValue {
        self.roller.current()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn formatter(&self) -> &LabelFormatter {
        &self.formatter
    }

    /// Replace the formatter and re-render the current number.
    pub fn set_formatter(&mut self, formatter: LabelFormatter) {
        self.formatter = formatter;
        self.render(self.number());
    }

    /// Replace the formatter and render `value`.
    pub fn set_formatter_and_value(&mut self, formatter: LabelFormatter, value: impl Into<NumericInput>) {
        self.formatter = formatter;
        self.render(NumericValue::new(value));
    }

    pub fn has_pending_roll(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn duration_ms(&self) -> u64 {
        self.roller.duration_ms()
    }

    pub fn set_duration_ms(&mut self, duration_ms: i64) {
        self.roller.set_duration_ms(duration_ms);
    }

    pub fn tag(&self) -> i32 {
        self.roller.tag()
    }

    pub fn set_tag(&mut self, tag: i32) {
        self.roller.set_tag(tag);
    }

    pub fn roller(&self) -> &RollingNumber {
        &self.roller
    }

    pub fn roller_mut(&mut self) -> &mut RollingNumber {
        &mut self.roller
    }
}
