//! Moodlet Hardware Abstraction Layer
//!
//! This crate defines the platform services the face animation needs from
//! its host. Chip-specific HALs (RP2040, ...) implement them so the same
//! animation core runs on hardware and in host-side simulation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (moodlet-firmware, tests)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  moodlet-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ moodlet-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`clock::Clock`] - Monotonic millisecond time
//! - [`rng::RandomSource`] - Seeded uniform integer draws
//! - [`rng::SeedMixer`] - Folding hardware noise into a seed
//! - [`i2c::I2cConfig`] - Panel bus settings

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod i2c;
pub mod rng;

// Re-export key traits at crate root for convenience
pub use clock::{Clock, ManualClock};
pub use i2c::I2cConfig;
pub use rng::{RandomSource, SeedMixer};
