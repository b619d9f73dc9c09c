//! Headless display surface
//!
//! Records every pixel write and keeps a copy of the last presented frame,
//! so simulations can compare what the panel would have shown.

use crate::backend::{Canvas, DisplayError, DisplaySurface};
use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};

/// In-memory display that records writes and presents
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Frame being drawn
    working: FrameBuffer,
    /// Frame shown by the most recent `present`
    shown: FrameBuffer,
    /// `set_pixel` calls since the last clear, including clipped ones
    writes: u32,
    /// Writes that fell outside the panel since the last clear
    clipped: u32,
    /// Successful presents
    presents: u32,
    /// Make the next present fail with a communication error
    fail_next_present: bool,
}

impl RecordingSurface {
    /// Create a blank surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame currently being drawn
    pub fn working(&self) -> &FrameBuffer {
        &self.working
    }

    /// Frame shown by the last successful present
    pub fn shown(&self) -> &FrameBuffer {
        &self.shown
    }

    /// Pixel writes since the last clear
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Out-of-range writes since the last clear
    pub fn clipped(&self) -> u32 {
        self.clipped
    }

    /// Number of successful presents
    pub fn presents(&self) -> u32 {
        self.presents
    }

    /// Simulate a transport failure on the next present
    pub fn fail_next_present(&mut self) {
        self.fail_next_present = true;
    }

    /// FNV-1a hash of the shown frame, for compact trace comparison
    pub fn shown_checksum(&self) -> u32 {
        let mut hash: u32 = 0x811c_9dc5;
        for byte in self.shown.pages().iter().flat_map(|page| page.iter()) {
            hash ^= *byte as u32;
            hash = hash.wrapping_mul(0x0100_0193);
        }
        hash
    }
}

impl Canvas for RecordingSurface {
    fn clear(&mut self) {
        self.working.clear();
        self.writes = 0;
        self.clipped = 0;
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.writes = self.writes.saturating_add(1);
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            self.clipped = self.clipped.saturating_add(1);
        }
        self.working.set_pixel(x, y);
    }
}

impl DisplaySurface for RecordingSurface {
    fn present(&mut self) -> Result<(), DisplayError> {
        if self.fail_next_present {
            self.fail_next_present = false;
            return Err(DisplayError::Communication);
        }
        self.shown = self.working.clone();
        self.presents = self.presents.saturating_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_copies_working_frame() {
        let mut surface = RecordingSurface::new();
        surface.set_pixel(1, 1);
        assert!(!surface.shown().is_set(1, 1));

        surface.present().unwrap();
        assert!(surface.shown().is_set(1, 1));
        assert_eq!(surface.presents(), 1);
    }

    #[test]
    fn test_counts_clipped_writes() {
        let mut surface = RecordingSurface::new();
        surface.set_pixel(-3, 5);
        surface.set_pixel(5, 5);
        surface.set_pixel(200, 5);

        assert_eq!(surface.writes(), 3);
        assert_eq!(surface.clipped(), 2);
        assert_eq!(surface.working().lit_count(), 1);

        surface.clear();
        assert_eq!(surface.writes(), 0);
        assert_eq!(surface.clipped(), 0);
    }

    #[test]
    fn test_injected_failure_keeps_previous_frame() {
        let mut surface = RecordingSurface::new();
        surface.set_pixel(2, 2);
        surface.present().unwrap();
        let before = surface.shown_checksum();

        surface.clear();
        surface.set_pixel(9, 9);
        surface.fail_next_present();
        assert_eq!(surface.present(), Err(DisplayError::Communication));
        assert_eq!(surface.shown_checksum(), before);

        // Failure is one-shot
        surface.present().unwrap();
        assert!(surface.shown().is_set(9, 9));
        assert_ne!(surface.shown_checksum(), before);
    }
}
