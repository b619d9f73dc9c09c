//! Display abstraction and frame buffer for Moodlet
//!
//! This crate provides:
//! - `Canvas` trait: the pixel sink every renderer draws into
//! - `DisplaySurface` trait: a canvas that can present itself to hardware
//! - `FrameBuffer`: a 128x64 1-bpp page-organised buffer that clips writes
//! - `RecordingSurface`: a headless surface for simulation and golden traces
//!
//! # Architecture
//!
//! Renderers only ever see a `Canvas`. The firmware owns a `FrameBuffer`,
//! lets the face draw into it, then streams its pages to the panel. Host
//! tests swap in a `RecordingSurface` and inspect what would have been shown.

#![no_std]

pub mod backend;
pub mod framebuffer;
pub mod recorder;

// Re-export key types
pub use backend::{Canvas, DisplayError, DisplaySurface};
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use recorder::RecordingSurface;
