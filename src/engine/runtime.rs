// ============================================================================
// Async Frame Loop
// Drives rollers from a tokio interval when no host frame loop exists
// ============================================================================

use crate::engine::rolling_label::{LabelEvent, RollingLabel};
use crate::engine::rolling_number::RollingNumber;
use crate::interfaces::RollingEvent;
use std::time::Duration;
use tokio::time::{interval, Instant, MissedTickBehavior};

/// Frame period of a 60 Hz display.
pub const DEFAULT_FRAME: Duration = Duration::from_micros(16_667);

/// Interval ticking every `frame`, with late ticks delayed rather than
/// bursted so each update sees the real elapsed time.
fn frame_clock(frame: Duration) -> tokio::time::Interval {
    let mut clock = interval(frame.max(Duration::from_millis(1)));
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    clock
}

/// Feed measured frame deltas into `roller` until its roll ends.
///
/// Returns every event emitted along the way. Returns at once when the
/// roller is idle. A roll stalled on its target is stopped silently.
pub async fn drive_until_idle(roller: &mut RollingNumber, frame: Duration) -> Vec<RollingEvent> {
    let mut events = Vec::new();
    if !roller.is_rolling() {
        return events;
    }

    let mut clock = frame_clock(frame);
    let mut last: Instant = clock.tick().await;

    while roller.is_rolling() {
        if roller.is_stalled() {
            tracing::debug!(roller = ?roller.id(), "stalled roll stopped by frame loop");
            roller.stop();
            break;
        }
        let now = clock.tick().await;
        events.extend(roller.update(now.duration_since(last)));
        last = now;
    }

    tracing::trace!(roller = ?roller.id(), events = events.len(), "frame loop idle");
    events
}

/// Like [`drive_until_idle`], also starting parked label requests after
/// each frame.
pub async fn drive_label_until_idle(label: &mut RollingLabel, frame: Duration) -> Vec<LabelEvent> {
    let mut events: Vec<LabelEvent> = label.late_update().into_iter().collect();
    if !label.is_rolling() {
        return events;
    }

    let mut clock = frame_clock(frame);
    let mut last: Instant = clock.tick().await;

    while label.is_rolling() || label.has_pending_roll() {
        if label.roller().is_stalled() {
            tracing::debug!(roller = ?label.roller().id(), "stalled label roll stopped by frame loop");
            label.roller_mut().stop();
            if !label.has_pending_roll() {
                break;
            }
        }
        let now = clock.tick().await;
        events.extend(label.update(now.duration_since(last)));
        events.extend(label.late_update());
        last = now;
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RollingConfig;
    use crate::interfaces::RecordingEventHandler;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_drive_until_idle_finishes_roll() {
        let handler = Arc::new(RecordingEventHandler::new());
        let mut roller = RollingNumber::new(RollingConfig::point_counter(500), handler.clone());
        roller.roll_number(0, 100, None, false);

        let started = Instant::now();
        let events = drive_until_idle(&mut roller, DEFAULT_FRAME).await;

        assert!(!roller.is_rolling());
        assert_eq!(roller.current().to_number(), 100.0);
        assert!(events.last().is_some_and(|e| e.is_finished()));
        assert!(started.elapsed() >= Duration::from_millis(500));
        // Start event went to the handler only
        assert_eq!(handler.events().len(), events.len() + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_roller_returns_immediately() {
        let mut roller = RollingNumber::new(
            RollingConfig::default(),
            Arc::new(RecordingEventHandler::new()),
        );
        assert!(drive_until_idle(&mut roller, DEFAULT_FRAME).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_roll_does_not_hang() {
        let handler = Arc::new(RecordingEventHandler::new());
        let mut roller = RollingNumber::new(RollingConfig::point_counter(1000), handler.clone());
        roller.roll_number(0, 100, None, false);
        roller.set_current(100);

        let driven = tokio::time::timeout(
            Duration::from_secs(60),
            drive_until_idle(&mut roller, DEFAULT_FRAME),
        )
        .await;

        let events = driven.expect("frame loop hung on a stalled roll");
        assert!(events.is_empty());
        assert!(!roller.is_rolling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_label_does_not_hang() {
        let mut label = RollingLabel::new(RollingConfig::point_counter(1000));
        label.roll_number(0, 100, true);
        label.late_update();
        label.roller_mut().set_current(100);

        let driven = tokio::time::timeout(
            Duration::from_secs(60),
            drive_label_until_idle(&mut label, DEFAULT_FRAME),
        )
        .await;

        assert!(driven.is_ok());
        assert!(!label.is_rolling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drive_label() {
        let mut label = RollingLabel::new(RollingConfig::integer_counter(300));
        label.roll_number(0, 1500, true);

        let events = drive_label_until_idle(&mut label, DEFAULT_FRAME).await;
        assert!(matches!(events.first(), Some(LabelEvent::Rolling { .. })));
        assert!(matches!(events.last(), Some(LabelEvent::Finished { .. })));
        assert_eq!(label.text(), "1,500");
    }
}
