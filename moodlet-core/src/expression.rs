//! Expression set
//!
//! The face is always showing exactly one of these. The rotation is a
//! closed loop driven only by the expression timer.

/// Named face states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expression {
    #[default]
    Happy,
    Sad,
    Neutral,
    /// Renderer exists, but the rotation never enters it
    Wink,
    Angry,
    Surprised,
    Crying,
    Sleepy,
    Sleeping,
}

/// Rotation order, starting from the power-on expression
pub const ROTATION: [Expression; 8] = [
    Expression::Happy,
    Expression::Sad,
    Expression::Neutral,
    Expression::Angry,
    Expression::Surprised,
    Expression::Sleepy,
    Expression::Sleeping,
    Expression::Crying,
];

impl Expression {
    /// Every variant, in declaration order
    pub const ALL: [Expression; 9] = [
        Expression::Happy,
        Expression::Sad,
        Expression::Neutral,
        Expression::Wink,
        Expression::Angry,
        Expression::Surprised,
        Expression::Crying,
        Expression::Sleepy,
        Expression::Sleeping,
    ];

    /// Expression shown after this one when the expression timer expires
    pub fn successor(self) -> Self {
        use Expression::*;

        match self {
            Happy => Sad,
            Sad => Neutral,
            Neutral => Angry,
            Angry => Surprised,
            Surprised => Sleepy,
            Sleepy => Sleeping,
            Sleeping => Crying,
            Crying => Happy,
            // Not part of the rotation; rejoin where it is declared
            Wink => Neutral,
        }
    }

    /// Whether the rotation ever reaches this expression
    pub fn in_rotation(self) -> bool {
        !matches!(self, Expression::Wink)
    }

    /// Whether a blink replaces this face while the eyes are closed
    pub fn blink_suppressed(self) -> bool {
        !matches!(self, Expression::Sleeping)
    }

    /// Short lowercase name, for logs
    pub fn name(self) -> &'static str {
        match self {
            Expression::Happy => "happy",
            Expression::Sad => "sad",
            Expression::Neutral => "neutral",
            Expression::Wink => "wink",
            Expression::Angry => "angry",
            Expression::Surprised => "surprised",
            Expression::Crying => "crying",
            Expression::Sleepy => "sleepy",
            Expression::Sleeping => "sleeping",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_order() {
        for pair in ROTATION.windows(2) {
            assert_eq!(pair[0].successor(), pair[1]);
        }
        assert_eq!(ROTATION[7].successor(), ROTATION[0]);
    }

    #[test]
    fn test_eight_steps_return_to_happy() {
        let mut expr = Expression::Happy;
        for step in 1..=8 {
            expr = expr.successor();
            if step < 8 {
                assert_ne!(expr, Expression::Happy, "returned early at step {}", step);
            }
        }
        assert_eq!(expr, Expression::Happy);
    }

    #[test]
    fn test_wink_unreachable_from_rotation() {
        for expr in ROTATION {
            assert_ne!(expr.successor(), Expression::Wink);
            assert!(expr.in_rotation());
        }
        assert!(!Expression::Wink.in_rotation());
        assert!(Expression::Wink.successor().in_rotation());
    }

    #[test]
    fn test_only_sleeping_ignores_blink() {
        for expr in Expression::ALL {
            assert_eq!(expr.blink_suppressed(), expr != Expression::Sleeping);
        }
    }
}
