//! Board-agnostic core logic for the Moodlet face
//!
//! This crate contains everything that decides what the face looks like,
//! independent of the panel or the MCU:
//!
//! - Expression set and its fixed rotation
//! - Animation timers (blink, idle drift, rotation, tears, sleep bubbles)
//! - Rasterization primitives and the per-expression renderers
//! - The frame driver that ties one tick together
//! - Timing configuration and the seeded PRNG

#![no_std]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod driver;
pub mod expression;
pub mod random;
pub mod render;

pub use animation::{AnimationEvent, AnimationState};
pub use config::{AnimationConfig, TimingRange};
pub use driver::{FrameDriver, TickReport, FRAME_PACE_MS};
pub use expression::Expression;
pub use random::XorShiftRng;
