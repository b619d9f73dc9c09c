//! Moodlet - Animated OLED Face Firmware
//!
//! Main firmware binary for RP2040 boards driving a 128x64 SSD1306 panel.
//! The face cycles through its expressions on its own; there is no input.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::{I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use moodlet_hal::I2cConfig;
use moodlet_hal_rp2040::{harvest_seed, i2c_config};

use crate::ssd1306::Ssd1306;

mod ssd1306;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Moodlet firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // ========== Seed ==========
    // GPIO26 (ADC0) is left unconnected; its noise seeds the PRNG
    let seed = {
        let mut adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
        let mut floating = Channel::new_pin(p.PIN_26, Pull::None);
        harvest_seed(&mut adc, &mut floating).await
    };
    info!("PRNG seeded");

    // ========== Panel ==========
    // I2C0: SDA on GPIO4, SCL on GPIO5
    let bus = I2cConfig::FAST;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config(&bus));
    let panel = Ssd1306::new(i2c, &bus);
    info!("I2C0 initialized at {} Hz, panel at {=u8:#x}", bus.frequency, bus.address);

    spawner.spawn(tasks::face_task(panel, seed)).unwrap();

    info!("Face task spawned, firmware running");
}
