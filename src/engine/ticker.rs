// ============================================================================
// Ticker
// Handle-based interval timer driven by host frame updates
// ============================================================================

use std::time::Duration;

/// Handle to a scheduled ticker slot.
///
/// Handles are never reused: each `schedule` issues a new generation, so
/// a stale handle cannot cancel a newer schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    handle: TickHandle,
    interval: Duration,
    elapsed: Duration,
}

/// Single-slot periodic timer owned by one rolling session.
///
/// The host feeds frame deltas through [`Ticker::advance`]; the ticker
/// fires once the accumulated time reaches the interval and reports the
/// time accumulated since it last fired. An interval of zero fires on
/// every frame.
#[derive(Debug, Default)]
pub struct Ticker {
    next_generation: u64,
    slot: Option<Slot>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is live and schedule a fresh slot.
    pub fn schedule(&mut self, interval_ms: u64) -> TickHandle {
        if let Some(previous) = self.cancel_all() {
            tracing::trace!(generation = previous.0, "ticker slot replaced");
        }

        self.next_generation += 1;
        let handle = TickHandle(self.next_generation);
        self.slot = Some(Slot {
            handle,
            interval: Duration::from_millis(interval_ms),
            elapsed: Duration::ZERO,
        });
        handle
    }

    /// Cancel `handle` if it is the live one.
    pub fn cancel(&mut self, handle: TickHandle) -> bool {
        match self.slot {
            Some(slot) if slot.handle == handle => {
                self.slot = None;
                true
            },
            _ => false,
        }
    }

    /// Cancel the live slot, returning its handle.
    pub fn cancel_all(&mut self) -> Option<TickHandle> {
        self.slot.take().map(|slot| slot.handle)
    }

    pub fn is_scheduled(&self) -> bool {
        self.slot.is_some()
    }

    pub fn live_handle(&self) -> Option<TickHandle> {
        self.slot.map(|slot| slot.handle)
    }

    /// Feed one frame. Returns the time to apply when the slot fires.
    pub fn advance(&mut self, frame_dt: Duration) -> Option<Duration> {
        let slot = self.slot.as_mut()?;
        slot.elapsed += frame_dt;

        if slot.elapsed >= slot.interval {
            let fired = slot.elapsed;
            slot.elapsed = Duration::ZERO;
            Some(fired)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_idle_ticker_never_fires() {
        let mut ticker = Ticker::new();
        assert!(!ticker.is_scheduled());
        assert_eq!(ticker.advance(FRAME), None);
    }

    #[test]
    fn test_zero_interval_fires_every_frame() {
        let mut ticker = Ticker::new();
        ticker.schedule(0);
        for _ in 0..5 {
            assert_eq!(ticker.advance(FRAME), Some(FRAME));
        }
    }

    #[test]
    fn test_interval_accumulates_frames() {
        let mut ticker = Ticker::new();
        ticker.schedule(40);
        assert_eq!(ticker.advance(FRAME), None);
        assert_eq!(ticker.advance(FRAME), None);
        // 48 ms accumulated
        assert_eq!(ticker.advance(FRAME), Some(Duration::from_millis(48)));
        assert_eq!(ticker.advance(FRAME), None);
    }

    #[test]
    fn test_schedule_replaces_live_slot() {
        let mut ticker = Ticker::new();
        let first = ticker.schedule(0);
        let second = ticker.schedule(0);
        assert_ne!(first, second);
        assert!(second.generation() > first.generation());

        // Stale handle is ignored
        assert!(!ticker.cancel(first));
        assert_eq!(ticker.live_handle(), Some(second));
        assert!(ticker.cancel(second));
        assert!(!ticker.is_scheduled());
    }

    #[test]
    fn test_cancel_all() {
        let mut ticker = Ticker::new();
        assert_eq!(ticker.cancel_all(), None);
        let handle = ticker.schedule(10);
        assert_eq!(ticker.cancel_all(), Some(handle));
        assert_eq!(ticker.advance(Duration::from_secs(1)), None);
    }
}
