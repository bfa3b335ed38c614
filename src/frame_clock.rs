//! Fixed-rate tick scheduling for the main loop.

use std::time::{Duration, Instant};

/// Hands out whole milliseconds of wall-clock time once per tick.
///
/// Only the milliseconds actually handed out are consumed, so the sub-millisecond
/// remainder of each frame carries into the next one and the round clock never
/// falls behind real time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(tick: Duration, now: Instant) -> Self {
        Self { tick, last: now }
    }

    /// Time left until the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.tick
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Milliseconds to advance the game by, or `None` before the tick is due.
    pub fn due(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.tick {
            return None;
        }
        let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
        self.last += Duration::from_millis(ms as u64);
        Some(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_due_before_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(33), start);
        assert_eq!(clock.due(start + Duration::from_millis(20)), None);
        assert_eq!(
            clock.timeout(start + Duration::from_millis(20)),
            Duration::from_millis(13)
        );
        assert_eq!(clock.due(start + Duration::from_millis(33)), Some(33));
    }

    #[test]
    fn fractional_milliseconds_carry_over() {
        let start = Instant::now();
        let frame = Duration::from_micros(33_700);
        let mut clock = FrameClock::new(Duration::from_millis(33), start);

        let mut now = start;
        let mut total: u64 = 0;
        for _ in 0..1800 {
            now += frame;
            total += clock.due(now).unwrap() as u64;
        }
        // 1800 * 33.7 ms of real time, all of it handed to the game.
        assert_eq!(total, 60_660);
    }

    #[test]
    fn late_frame_is_counted_in_full() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(33), start);
        assert_eq!(clock.due(start + Duration::from_millis(250)), Some(250));
        assert_eq!(clock.timeout(start + Duration::from_millis(250)), Duration::from_millis(33));
    }
}
