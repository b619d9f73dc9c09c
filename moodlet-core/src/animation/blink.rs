//! Blink timer
//!
//! Two-phase: open eyes wait out `interval`, closed eyes wait out the fixed
//! blink duration.

use moodlet_hal::RandomSource;

use super::events::AnimationEvent;
use super::elapsed;
use crate::config::AnimationConfig;

/// Blink timer state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkState {
    blinking: bool,
    last_ms: u64,
    interval_ms: u32,
    duration_ms: u32,
}

impl BlinkState {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            blinking: false,
            last_ms: 0,
            interval_ms: config.first_blink_ms,
            duration_ms: config.blink_duration_ms,
        }
    }

    /// Advance the timer to `now_ms`
    pub fn update<R: RandomSource>(
        &mut self,
        now_ms: u64,
        config: &AnimationConfig,
        rng: &mut R,
    ) -> Option<AnimationEvent> {
        let since = elapsed(now_ms, self.last_ms);

        if !self.blinking && since >= self.interval_ms as u64 {
            self.blinking = true;
            self.last_ms = now_ms;
            Some(AnimationEvent::BlinkStarted)
        } else if self.blinking && since >= self.duration_ms as u64 {
            self.blinking = false;
            self.last_ms = now_ms;
            self.interval_ms = config.blink_interval.draw(rng);
            Some(AnimationEvent::BlinkEnded {
                next_interval_ms: self.interval_ms,
            })
        } else {
            None
        }
    }

    /// Eyes currently closed
    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    /// Gap armed before the next blink
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Closed-eye window length
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Time of the last open/close edge
    pub fn last_edge_ms(&self) -> u64 {
        self.last_ms
    }
}
