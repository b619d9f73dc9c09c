//! Expression rotation timer

use moodlet_hal::RandomSource;

use super::elapsed;
use super::events::AnimationEvent;
use crate::config::AnimationConfig;
use crate::expression::Expression;

/// Which expression is showing and for how long
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExpressionTimer {
    current: Expression,
    duration_ms: u32,
    last_ms: u64,
}

impl ExpressionTimer {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            current: Expression::Happy,
            duration_ms: config.first_expression_ms,
            last_ms: 0,
        }
    }

    /// Advance the timer to `now_ms`, rotating if it expired
    pub fn update<R: RandomSource>(
        &mut self,
        now_ms: u64,
        config: &AnimationConfig,
        rng: &mut R,
    ) -> Option<AnimationEvent> {
        if elapsed(now_ms, self.last_ms) < self.duration_ms as u64 {
            return None;
        }

        let from = self.current;
        self.current = from.successor();
        self.last_ms = now_ms;
        self.duration_ms = config.expression_duration.draw(rng);

        Some(AnimationEvent::ExpressionChanged {
            from,
            to: self.current,
            hold_ms: self.duration_ms,
        })
    }

    /// Switch to `expression` immediately and hold it for the current duration
    pub fn force(&mut self, expression: Expression, now_ms: u64) {
        self.current = expression;
        self.last_ms = now_ms;
    }

    pub fn current(&self) -> Expression {
        self.current
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}
