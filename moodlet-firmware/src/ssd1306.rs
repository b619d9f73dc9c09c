//! SSD1306 OLED panel driver
//!
//! Driver for 128x64 SSD1306 panels over I2C. The face is drawn into a
//! `FrameBuffer` whose page layout matches the controller's GDDRAM, so a
//! flush is eight page writes.

use embedded_hal_async::i2c::I2c;
use moodlet_display::{DisplayError, FrameBuffer, WIDTH};
use moodlet_hal::I2cConfig;

/// Control byte: command stream follows
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: GDDRAM data follows
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-on sequence for 128x64 modules using the internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14,
    cmd::SET_MEMORY_MODE,
    0x02, // page addressing
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    pub fn new(i2c: I2C, bus: &I2cConfig) -> Self {
        Self {
            i2c,
            address: bus.address,
            initialized: false,
        }
    }

    /// Run the power-on sequence
    ///
    /// Safe to call again after a failure; the sequence starts from
    /// display-off every time.
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;
        for &c in INIT_SEQUENCE {
            self.command(c).await?;
        }
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Send a frame to the panel, one page at a time
    pub async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;

        for (page, row) in frame.pages().iter().enumerate() {
            self.command(cmd::SET_PAGE_ADDR | page as u8).await?;
            self.command(cmd::SET_LOW_COLUMN).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            data[1..].copy_from_slice(row);
            self.write(&data).await?;
        }

        Ok(())
    }

    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.write(&[CONTROL_COMMAND, cmd]).await
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, bytes)
            .await
            .map_err(|_| DisplayError::Communication)
    }
}
