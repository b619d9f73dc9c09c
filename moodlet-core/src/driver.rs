//! Frame driver
//!
//! Ties one frame together: read the clock once, advance the timers, draw
//! the face and present it. Pacing is left to the caller.

use moodlet_display::{Canvas, DisplayError, DisplaySurface};
use moodlet_hal::{Clock, RandomSource};

use crate::animation::{AnimationState, Events};
use crate::config::AnimationConfig;
use crate::expression::Expression;
use crate::render;

/// Delay between frames the host should aim for (~33 FPS)
pub const FRAME_PACE_MS: u64 = 30;

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Clock reading used for the whole frame
    pub now_ms: u64,
    /// Expression in the rotation after the update
    pub expression: Expression,
    /// Whether a blink is in progress
    pub blinking: bool,
    /// Timer transitions in the order they fired
    pub events: Events,
}

/// Owns the animation state and the randomness feeding it
pub struct FrameDriver<R: RandomSource> {
    state: AnimationState,
    rng: R,
}

impl<R: RandomSource> FrameDriver<R> {
    pub fn new(config: AnimationConfig, rng: R) -> Self {
        Self {
            state: AnimationState::new(config),
            rng,
        }
    }

    /// Advance every timer to `now_ms` without drawing
    pub fn advance(&mut self, now_ms: u64) -> TickReport {
        let events = self.state.update(now_ms, &mut self.rng);
        TickReport {
            now_ms,
            expression: self.state.expression(),
            blinking: self.state.is_blinking(),
            events,
        }
    }

    /// Clear `canvas` and draw the current state onto it
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear();
        render::render(&self.state, canvas);
    }

    /// Run one complete frame against a synchronous surface
    ///
    /// The state advances even if presenting fails; the next frame simply
    /// redraws from the new state.
    pub fn tick<K, S>(&mut self, clock: &K, surface: &mut S) -> Result<TickReport, DisplayError>
    where
        K: Clock + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        let report = self.advance(clock.now_ms());
        self.draw(surface);
        surface.present()?;
        Ok(report)
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Jump to `expression`, restarting its hold timer at `now_ms`
    pub fn force_expression(&mut self, expression: Expression, now_ms: u64) {
        self.state.force_expression(expression, now_ms);
    }
}
