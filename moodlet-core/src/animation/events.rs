//! Events emitted while advancing the animation timers

use crate::expression::Expression;

/// Something that changed during one timer update pass
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationEvent {
    /// Eyes closed
    BlinkStarted,
    /// Eyes reopened; next blink armed
    BlinkEnded { next_interval_ms: u32 },
    /// Eyes and mouth drifted to a new offset
    IdleMoved {
        offset_x: i32,
        offset_y: i32,
        next_interval_ms: u32,
    },
    /// Rotation moved on
    ExpressionChanged {
        from: Expression,
        to: Expression,
        hold_ms: u32,
    },
    /// Tear animation stepped
    TearAdvanced { count: u8, parity: bool },
    /// A bubble finished its lifecycle and re-rolled its activation
    BubbleRespawned { index: u8, active: bool },
    /// No bubble was active, one was switched on
    BubbleForced { index: u8 },
}
