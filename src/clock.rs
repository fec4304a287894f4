//! Frame timing
//!
//! The display loop hands us absolute timestamps; the sim wants bounded
//! deltas. `FrameClock` does the conversion, `Clock` lets tests and the
//! headless runner supply time without a browser.

use crate::consts::MAX_TICK_MS;

/// A source of monotonically increasing timestamps in milliseconds
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Converts timestamps into capped tick deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Delta since the previous call, capped at `MAX_TICK_MS`.
    ///
    /// The first call returns 0. Timestamps that go backwards also yield 0.
    pub fn delta_ms(&mut self, now_ms: f64) -> f64 {
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        (now_ms - last).clamp(0.0, MAX_TICK_MS)
    }
}

/// Clock advanced by a fixed step on every read
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
}

impl ManualClock {
    pub fn new(step_ms: f64) -> Self {
        Self { now_ms: 0.0, step_ms }
    }

    /// Jump ahead, e.g. to simulate a stalled tab
    pub fn skip(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        let now = self.now_ms;
        self.now_ms += self.step_ms;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_ms(1234.0), 0.0);
        assert_eq!(clock.delta_ms(1250.0), 16.0);
    }

    #[test]
    fn test_delta_capped_after_stall() {
        let mut clock = FrameClock::new();
        clock.delta_ms(0.0);
        assert_eq!(clock.delta_ms(5000.0), MAX_TICK_MS);
        assert_eq!(clock.delta_ms(5016.0), 16.0);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.delta_ms(100.0);
        assert_eq!(clock.delta_ms(90.0), 0.0);
    }

    #[test]
    fn test_manual_clock_steps() {
        let mut clock = ManualClock::new(16.0);
        assert_eq!(clock.now_ms(), 0.0);
        assert_eq!(clock.now_ms(), 16.0);
        clock.skip(1000.0);
        assert_eq!(clock.now_ms(), 1032.0);
    }
}
