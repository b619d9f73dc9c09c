//! Procedural face rendering
//!
//! Every shape is computed from scratch each frame, there are no bitmaps.
//! Renderers read the animation state and write pixels; they never mutate
//! the state, so the same state always draws the same frame.

pub mod eyes;
pub mod faces;
pub mod layout;
pub mod mouths;
pub mod primitives;
pub mod sleep;
pub mod tears;

pub use faces::render;
pub use layout::Pose;
