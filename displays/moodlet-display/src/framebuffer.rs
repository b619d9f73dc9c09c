//! Monochrome frame buffer
//!
//! 1 bit per pixel, organised as 8 horizontal pages of 8 rows each, the
//! native layout of SSD1306/SH1106 controllers. A page can be streamed to
//! the panel without any repacking.

use crate::backend::Canvas;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGES: usize = HEIGHT / 8;

/// 128x64 1-bpp frame buffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Check whether a pixel is lit (out-of-range reads as off)
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((page, col, bit)) => self.pages[page][col] & bit != 0,
            None => false,
        }
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }

    /// Raw page data (page 0 = rows 0..8, LSB = top row)
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }

    /// All pages, in transmit order
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.pages
    }

    /// Iterate lit pixel coordinates row by row
    pub fn lit_pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..HEIGHT as i32).flat_map(move |y| {
            (0..WIDTH as i32).filter_map(move |x| self.is_set(x, y).then_some((x, y)))
        })
    }

    fn locate(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y / 8, x, 1 << (y % 8)))
    }
}

impl Canvas for FrameBuffer {
    fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        if let Some((page, col, bit)) = Self::locate(x, y) {
            self.pages[page][col] |= bit;
        }
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit", &self.lit_count())
            .finish()
    }
}
