//! Panel bus configuration

use embassy_rp::i2c::Config;
use moodlet_hal::I2cConfig;

/// Build the embassy-rp I2C config for a panel bus
///
/// Pull-up settings keep the embassy defaults.
pub fn i2c_config(bus: &I2cConfig) -> Config {
    let mut config = Config::default();
    config.frequency = bus.frequency;
    config
}
