//! Round countdown.
//!
//! Elapsed time accumulates from the durations passed to [`RoundClock::advance`].
//! The displayed value truncates *elapsed* time to whole seconds, so a fresh
//! 60s round shows 60 for its first second and reaches 0 exactly at 60s.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundClock {
    limit_secs: u32,
    elapsed_ms: u64,
    frozen: bool,
}

impl RoundClock {
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit_secs,
            elapsed_ms: 0,
            frozen: false,
        }
    }

    /// Add `dt_ms` of wall-clock time. No-op once frozen.
    pub fn advance(&mut self, dt_ms: u32) {
        if self.frozen {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms as u64);
    }

    /// Stop accumulating; the displayed time stays at the current value.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Back to a full, running countdown.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.frozen = false;
    }

    pub fn limit_secs(&self) -> u32 {
        self.limit_secs
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// `max(limit - floor(elapsed), 0)` in whole seconds.
    pub fn time_left_secs(&self) -> u32 {
        let elapsed_secs = (self.elapsed_ms / 1000).min(u32::MAX as u64) as u32;
        self.limit_secs.saturating_sub(elapsed_secs)
    }

    pub fn is_expired(&self) -> bool {
        self.time_left_secs() == 0
    }
}
