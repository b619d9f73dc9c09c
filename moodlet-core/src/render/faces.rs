//! Per-expression composition of eyes, mouth and extras

use moodlet_display::Canvas;

use super::layout::Pose;
use super::{eyes, mouths, sleep, tears};
use crate::animation::AnimationState;
use crate::expression::Expression;

/// Draw the frame `state` describes onto `canvas`
///
/// The canvas is not cleared first.
pub fn render<C: Canvas + ?Sized>(state: &AnimationState, canvas: &mut C) {
    let pose = Pose::from(&state.idle);

    let Some(expression) = state.visible_expression() else {
        eyes::blink(canvas, pose);
        return;
    };

    match expression {
        Expression::Happy => {
            eyes::round(canvas, pose);
            mouths::smile(canvas, pose);
        }
        Expression::Sad => {
            eyes::sad(canvas, pose);
            mouths::frown(canvas, pose, 54);
        }
        Expression::Neutral => {
            eyes::lidded(canvas, pose, 1);
            mouths::flat(canvas, pose);
        }
        Expression::Sleepy => {
            eyes::lidded(canvas, pose, 3);
            mouths::slack(canvas, pose);
        }
        Expression::Angry => {
            eyes::angry(canvas, pose);
            mouths::gritted(canvas, pose);
        }
        Expression::Surprised => {
            eyes::round(canvas, pose);
            mouths::gasp(canvas, pose);
        }
        Expression::Crying => {
            eyes::round(canvas, pose);
            mouths::frown(canvas, pose, 52);
            tears::tears(canvas, pose, &state.tears);
        }
        Expression::Sleeping => {
            eyes::sleeping(canvas);
            mouths::snore(canvas, pose.mouth_dx, state.bubbles.phase());
            sleep::bubble_cluster(canvas, &state.bubbles);
        }
        Expression::Wink => {
            eyes::wink(canvas, pose);
            mouths::grin(canvas, pose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::XorShiftRng;
    use moodlet_display::{FrameBuffer, RecordingSurface};

    fn draw(state: &AnimationState) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        render(state, &mut fb);
        fb
    }

    #[test]
    fn test_every_expression_draws_on_panel() {
        for expression in Expression::ALL {
            let mut state = AnimationState::default();
            state.force_expression(expression, 0);

            let mut surface = RecordingSurface::new();
            render(&state, &mut surface);
            assert!(
                surface.working().lit_count() > 0,
                "{} drew nothing",
                expression.name()
            );
            assert_eq!(surface.clipped(), 0, "{} left the panel", expression.name());
        }
    }

    #[test]
    fn test_expressions_look_different() {
        let mut frames: heapless::Vec<FrameBuffer, 9> = heapless::Vec::new();
        for expression in Expression::ALL {
            let mut state = AnimationState::default();
            state.force_expression(expression, 0);
            let fb = draw(&state);
            assert!(!frames.contains(&fb), "{} is a duplicate", expression.name());
            let _ = frames.push(fb);
        }
    }

    #[test]
    fn test_blink_replaces_face() {
        let mut state = AnimationState::default();
        let mut rng = XorShiftRng::new(9);
        state.update(4000, &mut rng);
        assert!(state.is_blinking());

        let mut expected = FrameBuffer::new();
        eyes::blink(&mut expected, Pose::from(&state.idle));
        assert_eq!(draw(&state), expected);
    }

    #[test]
    fn test_sleeping_face_ignores_blink() {
        let mut state = AnimationState::default();
        let mut rng = XorShiftRng::new(9);
        state.force_expression(Expression::Sleeping, 0);
        let awake = draw(&state);

        state.update(4000, &mut rng);
        assert!(state.is_blinking());
        let blinking = draw(&state);
        let mut eyes_only = FrameBuffer::new();
        eyes::sleeping(&mut eyes_only);
        for (x, y) in eyes_only.lit_pixels() {
            assert!(awake.is_set(x, y) && blinking.is_set(x, y));
        }
    }

    #[test]
    fn test_render_is_pure() {
        let mut state = AnimationState::default();
        state.force_expression(Expression::Sleeping, 0);
        let before = state.clone();
        let first = draw(&state);
        let second = draw(&state);
        assert_eq!(first, second);
        assert_eq!(state, before);
    }
}
