//! I2C bus settings for the OLED panel

/// Default 7-bit address of SSD1306/SH1106 panels (0x3D when SA0 is high)
pub const PANEL_ADDRESS: u8 = 0x3C;

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// 7-bit panel address
    pub address: u8,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Fast mode (400 kHz)
    pub const FAST: Self = Self {
        frequency: 400_000,
        address: PANEL_ADDRESS,
    };
}
