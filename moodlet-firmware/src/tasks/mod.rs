//! Embassy async tasks

pub mod face;

pub use face::{face_task, Panel};
