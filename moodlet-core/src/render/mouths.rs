//! Mouth shapes
//!
//! Curves are two pixels thick with a third pixel at the ends to round
//! them off.

use moodlet_display::Canvas;

use super::layout::{Pose, EYE_Y, MOUTH_X};
use super::primitives::plot_f;

/// Stroke one column of a thick curve at float row `row`
fn thick_column<C: Canvas + ?Sized>(canvas: &mut C, x: i32, row: f32, soften_end: bool) {
    plot_f(canvas, x, row);
    plot_f(canvas, x, row + 1.0);
    if soften_end {
        plot_f(canvas, x, row - 1.0);
    }
}

/// Upward parabola
pub fn smile<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let cx = pose.mouth_x();
    let base = pose.mouth_y(52) as f32;

    for x in -10..=10 {
        let xf = x as f32 / 10.0;
        let y = -(xf * xf) * 6.0;
        thick_column(canvas, cx + x, base + y, x.abs() >= 8);
    }
}

/// Downward parabola with its vertex on `base_y`
pub fn frown<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose, base_y: i32) {
    let cx = pose.mouth_x();
    let base = pose.mouth_y(base_y) as f32;

    for x in -12..=12 {
        let xf = x as f32 / 12.0;
        let y = 4.0 * (xf * xf);
        thick_column(canvas, cx + x, base + y, x.abs() >= 10);
    }
}

/// Short flat line
pub fn flat<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let cx = pose.mouth_x();
    let y = pose.mouth_y(52);

    for x in -10..=10 {
        canvas.set_pixel(cx + x, y);
        canvas.set_pixel(cx + x, y + 1);
        if x.abs() >= 8 {
            canvas.set_pixel(cx + x, y - 1);
        }
    }
}

/// Slack line with drooping corners
pub fn slack<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let cx = pose.mouth_x();
    let y = pose.mouth_y(54);

    for x in -7..=7 {
        canvas.set_pixel(cx + x, y);
        if x.abs() >= 5 {
            canvas.set_pixel(cx + x, y + 1);
        }
    }
}

/// Clenched teeth: rectangle outline with vertical bars
pub fn gritted<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    const WIDTH: i32 = 24;
    const HEIGHT: i32 = 6;
    let cx = pose.mouth_x();
    let cy = pose.mouth_y(52);
    let (hw, hh) = (WIDTH / 2, HEIGHT / 2);

    for x in -hw..=hw {
        canvas.set_pixel(cx + x, cy - hh);
        canvas.set_pixel(cx + x, cy + hh);
        if x.abs() >= hw - 2 {
            canvas.set_pixel(cx + x, cy - hh - 1);
            canvas.set_pixel(cx + x, cy + hh + 1);
        }
    }

    for y in -hh..=hh {
        canvas.set_pixel(cx - hw, cy + y);
        canvas.set_pixel(cx + hw, cy + y);
        if y.abs() >= hh - 1 {
            canvas.set_pixel(cx - hw - 1, cy + y);
            canvas.set_pixel(cx + hw + 1, cy + y);
        }
    }

    for x in (-hw + 4..hw).step_by(5) {
        for y in -hh + 1..hh {
            canvas.set_pixel(cx + x, cy + y);
        }
    }
}

/// Filled half-ellipse opening upward from a flat bottom
///
/// The baseline hangs off the eye row, so it moves with both the eye and
/// mouth drift.
pub fn gasp<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    const HALF_WIDTH: i32 = 10;
    const HEIGHT: f32 = 10.0;
    let cx = pose.mouth_x();
    let base = pose.eye_y(EYE_Y) + 30 + pose.mouth_dy;

    for x in 0..=HALF_WIDTH {
        let nx = x as f32 / HALF_WIDTH as f32;
        let limit = libm::sqrtf(1.0 - nx * nx) * HEIGHT;

        let mut y = 0;
        while y as f32 <= limit {
            canvas.set_pixel(cx + x, base - y);
            canvas.set_pixel(cx - x, base - y);
            y += 1;
        }

        if x > 0 && x < HALF_WIDTH - 1 {
            let edge = base as f32 - limit - 1.0;
            plot_f(canvas, cx + x, edge);
            plot_f(canvas, cx - x, edge);
        }

        canvas.set_pixel(cx + x, base);
        canvas.set_pixel(cx - x, base);
    }
}

/// Wide V-shaped grin for the wink
pub fn grin<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose) {
    let cx = pose.mouth_x();
    let base = pose.mouth_y(52) as f32;

    for x in -15..=15 {
        let xf = x as f32 / 15.0;
        let y = -libm::fabsf(xf / 2.0) * 6.0 + 3.0;
        thick_column(canvas, cx + x, base + y, x.abs() >= 12);
    }
}

/// Small breathing mouth while asleep
///
/// Follows the horizontal drift only; rises and falls half a pixel with
/// the sleep phase.
pub fn snore<C: Canvas + ?Sized>(canvas: &mut C, mouth_dx: i32, phase: f32) {
    let y = (54.0 + libm::sinf(phase) * 0.5) as i32;
    for x in -5..=5 {
        canvas.set_pixel(MOUTH_X + x + mouth_dx, y);
    }
}
