//! Idle drift timer
//!
//! Eyes wander to a random offset every so often. The mouth follows the
//! eyes exactly; it has no drift of its own.

use moodlet_hal::RandomSource;

use super::elapsed;
use super::events::AnimationEvent;
use crate::config::AnimationConfig;

/// Current feature offsets and the drift timer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdleOffset {
    pub eye_x: i32,
    pub eye_y: i32,
    pub mouth_x: i32,
    pub mouth_y: i32,
    interval_ms: u32,
    last_ms: u64,
}

impl IdleOffset {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            eye_x: 0,
            eye_y: 0,
            mouth_x: 0,
            mouth_y: 0,
            interval_ms: config.first_move_ms,
            last_ms: 0,
        }
    }

    /// Advance the timer to `now_ms`, drifting if it expired
    pub fn update<R: RandomSource>(
        &mut self,
        now_ms: u64,
        config: &AnimationConfig,
        rng: &mut R,
    ) -> Option<AnimationEvent> {
        if elapsed(now_ms, self.last_ms) < self.interval_ms as u64 {
            return None;
        }

        self.eye_x = rng.uniform_int(-config.max_offset_x, config.max_offset_x + 1);
        self.eye_y = rng.uniform_int(-config.max_offset_y, config.max_offset_y + 1);
        self.mouth_x = self.eye_x;
        self.mouth_y = self.eye_y;

        self.last_ms = now_ms;
        self.interval_ms = config.move_interval.draw(rng);

        Some(AnimationEvent::IdleMoved {
            offset_x: self.eye_x,
            offset_y: self.eye_y,
            next_interval_ms: self.interval_ms,
        })
    }

    /// Gap armed before the next drift
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
