//! Eye shapes

use moodlet_display::Canvas;

use super::layout::{Pose, EYE_HEIGHT, EYE_WIDTH, EYE_Y, LEFT_EYE_X, LOW_EYE_Y, RIGHT_EYE_X};
use super::primitives::{fill_oval, lidded_oval, line, plot_f};

/// Half-width of a closed eye line
const CLOSED_HALF_WIDTH: i32 = 7;

/// Wide open round eyes
pub fn round<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let y = pose.eye_y(EYE_Y);
    for x in pose.eye_xs() {
        fill_oval(canvas, x, y, EYE_WIDTH, EYE_HEIGHT);
    }
}

/// Droopy eyes, each slanting away from the nose
pub fn sad<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let y = pose.eye_y(LOW_EYE_Y);
    sad_eye(canvas, pose.left_eye_x(), y, true);
    sad_eye(canvas, pose.right_eye_x(), y, false);
}

fn sad_eye<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, cy: i32, slant_left: bool) {
    for x in -8..=8 {
        let xf = x as f32 / 8.0;
        let curve = (1.0 - xf * xf) * 6.0;
        let mut slant = (xf * 4.0) as i32;
        if slant_left {
            slant = -slant;
        }
        let base = cy + slant;

        for y in 0..curve as i32 {
            canvas.set_pixel(cx + x, base + y);
        }
        if x.abs() >= 6 {
            canvas.set_pixel(cx + x, base + curve as i32);
        }
    }
}

/// Round eyes with the top `quarters`/4 hidden behind the lid
pub fn lidded<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose, quarters: i32) {
    let y = pose.eye_y(EYE_Y);
    let cut = y - EYE_HEIGHT / 2 + quarters * EYE_HEIGHT / 4;
    for x in pose.eye_xs() {
        lidded_oval(canvas, x, y, EYE_WIDTH, EYE_HEIGHT, cut);
    }
}

/// Narrow eyes with the outer corners raised
pub fn angry<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let top = pose.eye_y(20);
    angry_eye(canvas, pose.left_eye_x(), top, 4.0);
    angry_eye(canvas, pose.right_eye_x(), top, -4.0);
}

fn angry_eye<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, top: i32, slope: f32) {
    const WIDTH: i32 = 20;
    const HEIGHT: f32 = 12.0;

    for x in -WIDTH / 2..=WIDTH / 2 {
        let xf = x as f32 / (WIDTH as f32 / 2.0);
        let slant = xf * slope;
        let curve = xf * xf * 4.0;

        let mut y = 0;
        while y as f32 <= HEIGHT - curve {
            plot_f(canvas, cx + x, (top + y) as f32 + slant);
            y += 1;
        }
        if x.abs() >= WIDTH / 2 - 2 {
            plot_f(canvas, cx + x, top as f32 + HEIGHT - curve + 1.0 + slant);
        }
    }
}

/// Single closed eye, a thick horizontal stroke
pub fn closed<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, y: i32) {
    line(
        canvas,
        (cx - CLOSED_HALF_WIDTH, y),
        (cx + CLOSED_HALF_WIDTH, y),
        2,
    );
}

/// Both eyes shut mid-blink
pub fn blink<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let y = pose.eye_y(LOW_EYE_Y);
    for x in pose.eye_xs() {
        closed(canvas, x, y);
    }
}

/// Left eye shut, right eye a happy upward arc
pub fn wink<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let y = pose.eye_y(LOW_EYE_Y);
    closed(canvas, pose.left_eye_x(), y);

    let cx = pose.right_eye_x();
    for x in -7..=7 {
        let xf = x as f32 / 7.0;
        let lift = -libm::fabsf(xf) * 3.0 - 1.0;
        let row = y as f32 + lift;

        plot_f(canvas, cx + x, row);
        plot_f(canvas, cx + x, row + 1.0);
        if x.abs() >= 5 {
            plot_f(canvas, cx + x, row - 1.0);
        }
    }
}

/// Relaxed closed eyes while asleep; ignores idle drift
pub fn sleeping<C: Canvas + ?Sized>(canvas: &mut C) {
    let half = EYE_WIDTH / 2;
    for cx in [LEFT_EYE_X, RIGHT_EYE_X] {
        for x in -half..=half {
            let xn = x as f32 / half as f32;
            let lift = (2.0 * (1.0 - xn * xn)) as i32;
            let y = EYE_Y - lift;

            canvas.set_pixel(cx + x, y);
            canvas.set_pixel(cx + x, y + 1);
            if x.abs() >= half - 2 {
                canvas.set_pixel(cx + x, y - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlet_display::FrameBuffer;

    fn mirrored(fb: &FrameBuffer, left_x: i32, right_x: i32) -> bool {
        fb.lit_pixels()
            .filter(|(x, _)| *x < 64)
            .all(|(x, y)| fb.is_set(right_x + (left_x - x), y))
    }

    #[test]
    fn test_round_eyes_follow_pose() {
        let mut fb = FrameBuffer::new();
        let pose = Pose {
            eye_dx: 3,
            eye_dy: -2,
            ..Pose::CENTERED
        };
        round(&mut fb, pose);
        assert!(fb.is_set(38, 22));
        assert!(fb.is_set(96, 22));
        assert!(!fb.is_set(35, 24 + 11));
    }

    #[test]
    fn test_sad_eyes_are_mirror_images() {
        let mut fb = FrameBuffer::new();
        sad(&mut fb, Pose::CENTERED);
        assert!(fb.lit_count() > 0);
        assert!(mirrored(&fb, LEFT_EYE_X, RIGHT_EYE_X));
    }

    #[test]
    fn test_sad_left_eye_outer_corner_lower() {
        let mut fb = FrameBuffer::new();
        sad(&mut fb, Pose::CENTERED);
        // x = -8: slant +4 on the left eye, so its outer column starts at row 32
        assert!(fb.is_set(LEFT_EYE_X - 8, LOW_EYE_Y + 4));
        assert!(!fb.is_set(LEFT_EYE_X - 8, LOW_EYE_Y - 4));
    }

    #[test]
    fn test_angry_outer_corners_raised() {
        let mut fb = FrameBuffer::new();
        angry(&mut fb, Pose::CENTERED);

        let top_row = |x: i32| (0..64).find(|y| fb.is_set(x, *y));
        let left_outer = top_row(LEFT_EYE_X - 10).unwrap();
        let left_inner = top_row(LEFT_EYE_X + 10).unwrap();
        assert!(left_outer < left_inner);

        let right_outer = top_row(RIGHT_EYE_X + 10).unwrap();
        let right_inner = top_row(RIGHT_EYE_X - 10).unwrap();
        assert!(right_outer < right_inner);
        assert!(mirrored(&fb, LEFT_EYE_X, RIGHT_EYE_X));
    }

    #[test]
    fn test_lidded_quarters() {
        let mut neutral = FrameBuffer::new();
        lidded(&mut neutral, Pose::CENTERED, 1);
        let mut sleepy = FrameBuffer::new();
        lidded(&mut sleepy, Pose::CENTERED, 3);

        assert!(neutral.lit_pixels().all(|(_, y)| y >= EYE_Y - 5));
        assert!(sleepy.lit_pixels().all(|(_, y)| y >= EYE_Y + 5));
        assert!(sleepy.lit_count() < neutral.lit_count());
    }

    #[test]
    fn test_blink_is_two_closed_strokes() {
        let mut fb = FrameBuffer::new();
        blink(&mut fb, Pose::CENTERED);
        // 15 columns, 3 rows, 2 eyes
        assert_eq!(fb.lit_count(), 15 * 3 * 2);
        assert!(fb.is_set(LEFT_EYE_X - 7, LOW_EYE_Y - 1));
        assert!(fb.is_set(RIGHT_EYE_X + 7, LOW_EYE_Y + 1));
    }

    #[test]
    fn test_sleeping_ignores_pose() {
        let mut fb = FrameBuffer::new();
        sleeping(&mut fb);
        // Centre column lifted by 2
        assert!(fb.is_set(LEFT_EYE_X, EYE_Y - 2));
        assert!(fb.is_set(RIGHT_EYE_X, EYE_Y - 1));
        // Ends sit on the baseline with an extra pixel above
        assert!(fb.is_set(LEFT_EYE_X - 7, EYE_Y));
        assert!(fb.is_set(LEFT_EYE_X - 7, EYE_Y - 1));
    }

    #[test]
    fn test_wink_one_eye_closed() {
        let mut fb = FrameBuffer::new();
        wink(&mut fb, Pose::CENTERED);
        // Closed stroke on the left spans 15 columns on the eye row
        assert!((LEFT_EYE_X - 7..=LEFT_EYE_X + 7).all(|x| fb.is_set(x, LOW_EYE_Y)));
        // Right arc peaks in the middle, one row above the eye row
        assert!(fb.is_set(RIGHT_EYE_X, LOW_EYE_Y - 1));
        assert!(!fb.is_set(RIGHT_EYE_X, LOW_EYE_Y + 1));
    }
}
