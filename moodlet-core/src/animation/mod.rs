//! Animation timers
//!
//! One `AnimationState` owns every timer. The frame driver advances it once
//! per tick with a single clock reading; renderers only ever read it.

pub mod blink;
pub mod bubbles;
pub mod events;
pub mod idle;
pub mod rotation;
pub mod tears;

pub use blink::BlinkState;
pub use bubbles::SleepBubbles;
pub use events::AnimationEvent;
pub use idle::IdleOffset;
pub use rotation::ExpressionTimer;
pub use tears::TearState;

use heapless::Vec;
use moodlet_hal::RandomSource;

use crate::config::AnimationConfig;
use crate::expression::Expression;

/// Most events one update pass can produce
pub const MAX_EVENTS: usize = 8;

/// Events from one update pass
pub type Events = Vec<AnimationEvent, MAX_EVENTS>;

/// Time since `last_ms`; a clock that appears to go backwards reads as zero
pub(crate) fn elapsed(now_ms: u64, last_ms: u64) -> u64 {
    now_ms.saturating_sub(last_ms)
}

/// Complete animation state of one face session
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    config: AnimationConfig,
    pub blink: BlinkState,
    pub idle: IdleOffset,
    pub rotation: ExpressionTimer,
    pub tears: TearState,
    pub bubbles: SleepBubbles,
}

impl AnimationState {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            blink: BlinkState::new(&config),
            idle: IdleOffset::new(&config),
            rotation: ExpressionTimer::new(&config),
            tears: TearState::new(),
            bubbles: SleepBubbles::new(),
            config,
        }
    }

    /// Advance every timer to `now_ms`
    ///
    /// Order matters: the tear timer is gated on the expression that was
    /// showing before this pass could rotate it, and the sleep phase only
    /// moves when the frame about to be drawn is the sleeping face.
    pub fn update<R: RandomSource>(&mut self, now_ms: u64, rng: &mut R) -> Events {
        let mut events = Events::new();
        let config = self.config;

        if let Some(event) = self.blink.update(now_ms, &config, rng) {
            let _ = events.push(event);
        }

        if self.rotation.current() == Expression::Crying {
            if let Some(event) = self.tears.update(now_ms, &config) {
                let _ = events.push(event);
            }
        }

        if let Some(event) = self.idle.update(now_ms, &config, rng) {
            let _ = events.push(event);
        }

        if let Some(event) = self.rotation.update(now_ms, &config, rng) {
            let _ = events.push(event);
        }

        if self.visible_expression() == Some(Expression::Sleeping) {
            self.bubbles.update(&config, rng, &mut events);
        }

        events
    }

    /// Expression in the rotation, whether or not a blink hides it
    pub fn expression(&self) -> Expression {
        self.rotation.current()
    }

    /// Face to draw this frame; `None` means the blink overlay
    pub fn visible_expression(&self) -> Option<Expression> {
        let current = self.rotation.current();
        if self.blink.is_blinking() && current.blink_suppressed() {
            None
        } else {
            Some(current)
        }
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.is_blinking()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Jump straight to an expression, e.g. to show the off-rotation wink
    pub fn force_expression(&mut self, expression: Expression, now_ms: u64) {
        self.rotation.force(expression, now_ms);
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(AnimationConfig::DEFAULT)
    }
}
