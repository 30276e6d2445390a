//! Gravity clock: turns host timestamps into whole gravity ticks.
//!
//! The host calls `advance` with its monotonic clock (e.g. a frame
//! timestamp in ms). Ticks are counted from the epoch set by `arm`, so
//! irregular frame timing never drifts the gravity rhythm.

/// Repeating interval timer driven by host timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u64,
    last_tick_ms: Option<u64>,
}

impl GravityClock {
    /// Create a disarmed clock.
    ///
    /// An interval of 0 is treated as 1ms.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            last_tick_ms: None,
        }
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.last_tick_ms.is_some()
    }

    /// Start counting intervals from `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.last_tick_ms = Some(now_ms);
    }

    /// Stop ticking. Pending partial intervals are discarded.
    pub fn disarm(&mut self) {
        self.last_tick_ms = None;
    }

    /// Consume and return the whole intervals elapsed since the last tick.
    ///
    /// Returns 0 while disarmed or if `now_ms` is earlier than the last tick.
    pub fn advance(&mut self, now_ms: u64) -> u64 {
        let Some(last) = self.last_tick_ms else {
            return 0;
        };
        if now_ms <= last {
            return 0;
        }

        let ticks = (now_ms - last) / self.interval_ms;
        self.last_tick_ms = Some(last + ticks * self.interval_ms);
        ticks
    }
}
