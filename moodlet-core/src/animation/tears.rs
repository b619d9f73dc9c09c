//! Tear animation timer
//!
//! Only runs while the face is crying. Fixed period, no randomness.

use super::elapsed;
use super::events::AnimationEvent;
use crate::config::AnimationConfig;

/// Tear frame parity and progress counter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TearState {
    parity: bool,
    count: u8,
    last_ms: u64,
}

impl TearState {
    pub const fn new() -> Self {
        Self {
            parity: false,
            count: 0,
            last_ms: 0,
        }
    }

    /// Advance to `now_ms`; caller decides whether tears are running
    pub fn update(&mut self, now_ms: u64, config: &AnimationConfig) -> Option<AnimationEvent> {
        if elapsed(now_ms, self.last_ms) < config.tear_interval_ms as u64 {
            return None;
        }

        self.parity = !self.parity;
        self.last_ms = now_ms;
        self.count = (self.count + 1) % config.tear_cycle.max(1);

        Some(AnimationEvent::TearAdvanced {
            count: self.count,
            parity: self.parity,
        })
    }

    /// Zigzag phase of the left tear
    pub fn parity(&self) -> bool {
        self.parity
    }

    /// Progress counter, cycles through `0..tear_cycle`
    pub fn count(&self) -> u8 {
        self.count
    }
}

impl Default for TearState {
    fn default() -> Self {
        Self::new()
    }
}
