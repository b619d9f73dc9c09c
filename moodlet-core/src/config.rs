//! Animation timing configuration
//!
//! The face has no runtime settings; these are the fixed ranges every
//! timer draws its next interval from. `AnimationConfig::DEFAULT` is what
//! the firmware runs with.

use moodlet_hal::RandomSource;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive-exclusive millisecond range `[low_ms, high_ms)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingRange {
    /// Shortest interval (inclusive)
    pub low_ms: u32,
    /// Upper bound (exclusive)
    pub high_ms: u32,
}

impl TimingRange {
    pub const fn new(low_ms: u32, high_ms: u32) -> Self {
        Self { low_ms, high_ms }
    }

    /// Draw a uniformly distributed interval from the range
    pub fn draw<R: RandomSource>(&self, rng: &mut R) -> u32 {
        rng.uniform_int(self.low_ms as i32, self.high_ms as i32) as u32
    }

    /// Check whether `ms` could have been drawn from this range
    pub fn contains(&self, ms: u32) -> bool {
        ms >= self.low_ms && ms < self.high_ms
    }
}

/// Animation timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimationConfig {
    /// How long the eyes stay closed during a blink
    pub blink_duration_ms: u32,
    /// Wait before the first blink of a session
    pub first_blink_ms: u32,
    /// Range for the gap between blinks
    pub blink_interval: TimingRange,
    /// Wait before the first idle drift
    pub first_move_ms: u32,
    /// Range for the gap between idle drifts
    pub move_interval: TimingRange,
    /// Horizontal drift limit in pixels (offset stays within ±limit)
    pub max_offset_x: i32,
    /// Vertical drift limit in pixels
    pub max_offset_y: i32,
    /// How long the power-on expression is held
    pub first_expression_ms: u32,
    /// Range for how long each later expression is held
    pub expression_duration: TimingRange,
    /// Tear frame period
    pub tear_interval_ms: u32,
    /// Tear counter modulus
    pub tear_cycle: u8,
    /// Chance (percent) that a bubble comes back after its lifecycle ends
    pub bubble_respawn_percent: u8,
}

impl AnimationConfig {
    pub const DEFAULT: Self = Self {
        blink_duration_ms: 150,
        first_blink_ms: 4000,
        blink_interval: TimingRange::new(3000, 5000),
        first_move_ms: 1500,
        move_interval: TimingRange::new(500, 2500),
        max_offset_x: 8,
        max_offset_y: 5,
        first_expression_ms: 5000,
        expression_duration: TimingRange::new(4000, 7000),
        tear_interval_ms: 150,
        tear_cycle: 20,
        bubble_respawn_percent: 80,
    };
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
