//! Display bus configuration for the SSD1306 128x64 OLED.
//!
//! Pin mapping:
//! - SDA: GPIO14 (I2C1 SDA)
//! - SCL: GPIO15 (I2C1 SCL)
//! - Address: 0x3C

use embassy_rp::i2c::Config as I2cConfig;

use crate::config::DISPLAY_I2C_FREQUENCY_HZ;

/// I2C configuration for the SSD1306 display.
///
/// Fast mode (400 kHz) with the RP2040's internal pull-ups enabled on both lines.
pub fn display_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = DISPLAY_I2C_FREQUENCY_HZ;
    config.sda_pullup = true;
    config.scl_pullup = true;
    config
}
