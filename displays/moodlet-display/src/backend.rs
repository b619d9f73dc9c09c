//! Display backend traits
//!
//! Defines the interface between the face renderers and a physical or
//! simulated monochrome panel.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Pixel sink
///
/// Coordinates are signed; anything outside the panel must be silently
/// ignored. No renderer performs its own bounds checking.
pub trait Canvas {
    /// Turn every pixel off
    fn clear(&mut self);

    /// Light a single pixel (out-of-range writes are dropped)
    fn set_pixel(&mut self, x: i32, y: i32);
}

/// A canvas that can be flushed to its output
pub trait DisplaySurface: Canvas {
    /// Flush buffered content to the display
    fn present(&mut self) -> Result<(), DisplayError>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        (**self).set_pixel(x, y)
    }
}
