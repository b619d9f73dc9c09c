//! Monotonic time source
//!
//! The animation reads the clock exactly once per tick. Wraparound is not
//! modelled; a `u64` millisecond counter outlives any session.

use core::cell::Cell;

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed epoch
    fn now_ms(&self) -> u64;
}

/// Manually advanced clock for host-side simulation and tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Move time forward
    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }

    /// Jump to an absolute time (never moves backwards)
    pub fn set(&self, ms: u64) {
        if ms > self.now_ms.get() {
            self.now_ms.set(ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);

        clock.advance(30);
        assert_eq!(clock.now_ms(), 130);
    }

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::new(500);
        clock.set(200);
        assert_eq!(clock.now_ms(), 500);

        clock.set(900);
        assert_eq!(clock.now_ms(), 900);
    }
}
