//! Falling zigzag tears

use moodlet_display::Canvas;

use super::layout::{Pose, EYE_HEIGHT, EYE_Y};
use crate::animation::TearState;

/// Rows in a full tear track
pub const TEAR_LENGTH: i32 = 18;

/// Rows at the bottom of the track drawn three pixels wide
const DROPLET_ROWS: i32 = 4;

/// Progress offset of the right tear relative to the left
const RIGHT_TEAR_LEAD: i32 = 2;

/// Draw both tears for the current tear frame
pub fn tears<C: Canvas + ?Sized>(canvas: &mut C, pose: Pose, state: &TearState) {
    let start_y = pose.eye_y(EYE_Y) + EYE_HEIGHT / 2;
    let count = state.count() as i32;

    tear(canvas, pose.left_eye_x(), start_y, state.parity(), count);
    tear(
        canvas,
        pose.right_eye_x(),
        start_y,
        !state.parity(),
        count + RIGHT_TEAR_LEAD,
    );
}

/// One tear track, grown down to `progress % TEAR_LENGTH` rows
pub fn tear<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, start_y: i32, parity: bool, progress: i32) {
    let reach = progress.rem_euclid(TEAR_LENGTH);

    for i in 0..=reach {
        let zigzag = match (i % 3 == 0, parity) {
            (true, true) => 1,
            (true, false) => -1,
            (false, _) => 0,
        };
        let x = cx + zigzag;
        let y = start_y + i;

        canvas.set_pixel(x, y);

        if i >= TEAR_LENGTH - DROPLET_ROWS {
            canvas.set_pixel(x - 1, y);
            canvas.set_pixel(x + 1, y);
        }

        if (2..TEAR_LENGTH - DROPLET_ROWS).contains(&i) {
            if i % 2 == 0 {
                canvas.set_pixel(x + 1, y);
            } else {
                canvas.set_pixel(x - 1, y);
            }
        }
    }
}
