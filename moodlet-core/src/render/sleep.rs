//! Sleep bubbles and the floating "Z"

use moodlet_display::Canvas;

use super::primitives::dithered_circle;
use crate::animation::bubbles::{SleepBubbles, BUBBLE_COUNT};

/// Where the bubble cluster hangs, just right of the nose
pub const CLUSTER_ANCHOR: (i32, i32) = (68, 34);

/// Bubble positions relative to the anchor
const BUBBLE_OFFSETS: [(i32, i32); BUBBLE_COUNT] = [(2, -2), (8, -5), (16, -10)];

/// How far a bubble rises over its whole life
const RISE_PX: f32 = 2.5;

/// Side of the Z glyph
const Z_SIZE: i32 = 4;

/// Draw the Z and every visible bubble
pub fn bubble_cluster<C: Canvas + ?Sized>(canvas: &mut C, bubbles: &SleepBubbles) {
    let (ax, ay) = CLUSTER_ANCHOR;
    let (last_dx, last_dy) = BUBBLE_OFFSETS[BUBBLE_COUNT - 1];
    let z_x = ax + last_dx + 4;
    let z_y = ((ay + last_dy - 4) as f32 + libm::sinf(bubbles.phase() * 0.5) * 0.8) as i32;
    z_glyph(canvas, z_x, z_y);

    for (index, (dx, dy)) in BUBBLE_OFFSETS.iter().enumerate() {
        let radius = bubbles.radius(index);
        if radius < 1 {
            continue;
        }
        let x = ax + dx;
        let y = ((ay + dy) as f32 - bubbles.progress(index) * RISE_PX) as i32;
        dithered_circle(canvas, x, y, radius);
    }
}

/// 4x4 "Z" with its top-left corner at `(x, y)`
pub fn z_glyph<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32) {
    for i in 0..Z_SIZE {
        canvas.set_pixel(x + i, y);
        canvas.set_pixel(x + Z_SIZE - 1 - i, y + i);
        canvas.set_pixel(x + i, y + Z_SIZE - 1);
    }
}
