//! Rasterization primitives
//!
//! Shape fillers that stamp pixels straight into a canvas. None of them
//! clip; the canvas drops anything off-panel. Float coordinates truncate
//! toward zero when they become pixels.

use moodlet_display::Canvas;

/// Squared normalized distance up to which an oval pixel is lit
pub const OVAL_SOFT_EDGE: f32 = 1.15;

/// Plot at a float row, truncating it to a pixel
#[inline]
pub fn plot_f<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: f32) {
    canvas.set_pixel(x, y as i32);
}

/// Bresenham line between two points
///
/// With `thickness > 1` every step also lights its two neighbours across
/// the major axis: above and below for shallow lines, left and right for
/// steep ones.
pub fn line<C: Canvas + ?Sized>(
    canvas: &mut C,
    (mut x0, mut y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: u8,
) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        canvas.set_pixel(x0, y0);

        if thickness > 1 {
            if dx > dy {
                canvas.set_pixel(x0, y0 + 1);
                canvas.set_pixel(x0, y0 - 1);
            } else {
                canvas.set_pixel(x0 + 1, y0);
                canvas.set_pixel(x0 - 1, y0);
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Filled circle with one softening ring
///
/// Ring pixels (between `radius` and `radius + 1`) are only admitted when
/// their true distance sits inside `(radius - 0.5, radius + 1)`.
pub fn fill_circle<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, cy: i32, radius: i32) {
    let r2 = radius * radius;
    let outer2 = (radius + 1) * (radius + 1);

    for y in -radius..=radius {
        for x in -radius..=radius {
            let d2 = x * x + y * y;
            if d2 <= r2 {
                canvas.set_pixel(cx + x, cy + y);
            } else if d2 <= outer2 {
                let distance = libm::sqrtf(d2 as f32);
                if distance < radius as f32 + 1.0 && distance > radius as f32 - 0.5 {
                    canvas.set_pixel(cx + x, cy + y);
                }
            }
        }
    }
}

/// Solid disc with a checkerboard rim one pixel wide
pub fn dithered_circle<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, cy: i32, radius: i32) {
    let r = radius as f32;

    for x in -radius - 1..=radius + 1 {
        for y in -radius - 1..=radius + 1 {
            let distance = libm::sqrtf((x * x + y * y) as f32);
            if distance <= r {
                canvas.set_pixel(cx + x, cy + y);
            } else if distance <= r + 1.0 && (x + y) % 2 == 0 {
                canvas.set_pixel(cx + x, cy + y);
            }
        }
    }
}

/// Squared normalized distance of `(x, y)` from an oval's centre
pub fn oval_distance(x: i32, y: i32, width: i32, height: i32) -> f32 {
    let nx = x as f32 / (width as f32 / 2.0);
    let ny = y as f32 / (height as f32 / 2.0);
    nx * nx + ny * ny
}

/// Whether a squared normalized distance falls inside the softened oval
pub fn oval_admits(distance: f32) -> bool {
    distance <= OVAL_SOFT_EDGE
}

/// Filled oval with a softened edge
pub fn fill_oval<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, cy: i32, width: i32, height: i32) {
    for y in -height / 2 - 1..=height / 2 + 1 {
        for x in -width / 2 - 1..=width / 2 + 1 {
            if oval_admits(oval_distance(x, y, width, height)) {
                canvas.set_pixel(cx + x, cy + y);
            }
        }
    }
}

/// Oval with everything above `cut_y` removed
///
/// Used for lidded eyes: the ellipse test is applied over the remaining
/// rows with a soft band between 0.9 and 1.2.
pub fn lidded_oval<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i32,
    cy: i32,
    width: i32,
    height: i32,
    cut_y: i32,
) {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;

    for x in cx - width / 2 - 1..=cx + width / 2 + 1 {
        for y in cut_y - 1..=cy + height / 2 + 1 {
            if y < cut_y {
                continue;
            }
            let dx = (x - cx) as f32 / half_w;
            let dy = (y - cy) as f32 / half_h;
            let d = dx * dx + dy * dy;
            if d <= 1.0 || (d > 0.9 && d <= 1.2) {
                canvas.set_pixel(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlet_display::{FrameBuffer, RecordingSurface};

    #[test]
    fn test_oval_membership_band() {
        assert!(oval_admits(1.0));
        assert!(oval_admits(1.1));
        assert!(!oval_admits(1.2));
        assert!(oval_admits(0.0));
    }

    #[test]
    fn test_oval_pixels() {
        let mut fb = FrameBuffer::new();
        fill_oval(&mut fb, 40, 30, 14, 20);

        // Exactly on the horizontal and vertical radius
        assert_eq!(oval_distance(7, 0, 14, 20), 1.0);
        assert!(fb.is_set(47, 30));
        assert!(fb.is_set(40, 40));
        // One past the radius is 8/7 squared = 1.306
        assert!(!fb.is_set(48, 30));
        assert!(fb.is_set(40, 30));
        // Symmetric
        assert_eq!(fb.is_set(33, 30), fb.is_set(47, 30));
    }

    #[test]
    fn test_horizontal_line() {
        let mut fb = FrameBuffer::new();
        line(&mut fb, (10, 5), (14, 5), 1);
        assert_eq!(fb.lit_count(), 5);
        for x in 10..=14 {
            assert!(fb.is_set(x, 5));
        }
    }

    #[test]
    fn test_thick_line_widens_across_major_axis() {
        let mut fb = FrameBuffer::new();
        line(&mut fb, (10, 20), (20, 20), 2);
        assert_eq!(fb.lit_count(), 33);
        assert!(fb.is_set(15, 19) && fb.is_set(15, 21));

        let mut fb = FrameBuffer::new();
        line(&mut fb, (30, 10), (30, 14), 2);
        assert_eq!(fb.lit_count(), 15);
        assert!(fb.is_set(29, 12) && fb.is_set(31, 12));
    }

    #[test]
    fn test_line_reaches_endpoint_any_direction() {
        for (from, to) in [((0, 0), (7, 3)), ((7, 3), (0, 0)), ((5, 9), (2, 1))] {
            let mut fb = FrameBuffer::new();
            line(&mut fb, from, to, 1);
            assert!(fb.is_set(from.0, from.1));
            assert!(fb.is_set(to.0, to.1));
        }
    }

    #[test]
    fn test_fill_circle_core_and_ring() {
        let mut fb = FrameBuffer::new();
        fill_circle(&mut fb, 20, 20, 3);

        assert!(fb.is_set(20, 20));
        assert!(fb.is_set(23, 20));
        // (2, 3): d2 = 13, distance 3.6 lies in the ring band
        assert!(fb.is_set(22, 23));
        // Outside the scanned box entirely
        assert!(!fb.is_set(24, 20));
    }

    #[test]
    fn test_dithered_circle_rim() {
        let mut fb = FrameBuffer::new();
        dithered_circle(&mut fb, 30, 30, 2);

        assert!(fb.is_set(30, 30));
        assert!(fb.is_set(32, 30));
        // (3, 1): distance 3.16 is past the rim
        assert!(!fb.is_set(33, 31));
        // (2, 2): distance 2.83, even sum, inside the rim band
        assert!(fb.is_set(32, 32));
        // (3, 0): on the rim but odd sum
        assert!(!fb.is_set(33, 30));
    }

    #[test]
    fn test_lidded_oval_respects_cut() {
        let mut fb = FrameBuffer::new();
        lidded_oval(&mut fb, 40, 24, 14, 20, 29);

        for (_, y) in fb.lit_pixels() {
            assert!(y >= 29);
        }
        assert!(fb.is_set(40, 29));
        assert!(fb.is_set(40, 34));
    }

    #[test]
    fn test_primitives_tolerate_off_canvas() {
        let mut surface = RecordingSurface::new();
        fill_oval(&mut surface, -5, -5, 14, 20);
        fill_circle(&mut surface, 130, 70, 4);
        line(&mut surface, (-10, 3), (140, 3), 2);

        assert!(surface.clipped() > 0);
        assert!(surface.working().lit_count() > 0);
    }
}
