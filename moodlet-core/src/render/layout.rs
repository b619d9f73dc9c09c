//! Face geometry shared by every renderer

use crate::animation::IdleOffset;

/// Panel width in pixels
pub const CANVAS_WIDTH: i32 = 128;
/// Panel height in pixels
pub const CANVAS_HEIGHT: i32 = 64;

/// Left eye centre column
pub const LEFT_EYE_X: i32 = 35;
/// Right eye centre column
pub const RIGHT_EYE_X: i32 = 93;
/// Eye centre row for round eyes
pub const EYE_Y: i32 = 24;
/// Eye row for slit-like eyes (blink, wink, sad)
pub const LOW_EYE_Y: i32 = 28;
/// Mouth centre column
pub const MOUTH_X: i32 = 64;

/// Round eye size
pub const EYE_WIDTH: i32 = 14;
pub const EYE_HEIGHT: i32 = 20;

/// Where the idle drift has moved the features this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pose {
    pub eye_dx: i32,
    pub eye_dy: i32,
    pub mouth_dx: i32,
    pub mouth_dy: i32,
}

impl Pose {
    /// Undisturbed face
    pub const CENTERED: Self = Self {
        eye_dx: 0,
        eye_dy: 0,
        mouth_dx: 0,
        mouth_dy: 0,
    };

    pub fn left_eye_x(&self) -> i32 {
        LEFT_EYE_X + self.eye_dx
    }

    pub fn right_eye_x(&self) -> i32 {
        RIGHT_EYE_X + self.eye_dx
    }

    /// Both eye columns, left first
    pub fn eye_xs(&self) -> [i32; 2] {
        [self.left_eye_x(), self.right_eye_x()]
    }

    /// Eye row relative to `base`
    pub fn eye_y(&self, base: i32) -> i32 {
        base + self.eye_dy
    }

    pub fn mouth_x(&self) -> i32 {
        MOUTH_X + self.mouth_dx
    }

    /// Mouth row relative to `base`
    pub fn mouth_y(&self, base: i32) -> i32 {
        base + self.mouth_dy
    }
}

impl From<&IdleOffset> for Pose {
    fn from(idle: &IdleOffset) -> Self {
        Self {
            eye_dx: idle.eye_x,
            eye_dy: idle.eye_y,
            mouth_dx: idle.mouth_x,
            mouth_dy: idle.mouth_y,
        }
    }
}
