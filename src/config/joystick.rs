//! Joystick sampling constants.

/// Full-scale reading of the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

/// Centre assumed when calibration collected no samples.
pub const ADC_MIDPOINT: u16 = 2048;

/// Deflections smaller than this (in ADC counts) are treated as zero.
pub const DEADZONE: u16 = 200;

/// Number of readings averaged at boot to find the resting position.
pub const CALIBRATION_SAMPLES: u32 = 100;

/// Pause between calibration readings.
pub const CALIBRATION_INTERVAL_MS: u64 = 5;
