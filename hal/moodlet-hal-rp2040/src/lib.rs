//! RP2040-specific HAL for the Moodlet face
//!
//! Implements the shared `moodlet-hal` services on top of embassy-rp:
//!
//! - Monotonic clock backed by the embassy time driver
//! - Seed harvesting from floating ADC input noise
//! - Conversion of the panel bus settings into embassy I2C config

#![no_std]

pub mod clock;
pub mod i2c;
pub mod seed;

pub use clock::EmbassyClock;
pub use i2c::i2c_config;
pub use seed::harvest_seed;

// Re-export shared traits from moodlet-hal for convenience
pub use moodlet_hal::{Clock, I2cConfig, RandomSource};
