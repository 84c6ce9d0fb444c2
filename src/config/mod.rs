//! Application configuration.
//!
//! Everything is a compile-time constant; the firmware has no runtime settings.
//!
//! - `layout`: Display dimensions, marker geometry and display bus settings
//! - `joystick`: ADC range, deadzone and calibration parameters
//! - `leds`: PWM wrap value and deflection gain
//! - `timing`: Frame pacing, debounce window and status logging cadence

pub mod joystick;
pub mod layout;
pub mod leds;
pub mod timing;

// Re-export at config level for convenience
pub use joystick::{ADC_MAX, ADC_MIDPOINT, CALIBRATION_INTERVAL_MS, CALIBRATION_SAMPLES, DEADZONE};
pub use layout::{
    BORDER_HEIGHT,
    BORDER_WIDTH,
    DISPLAY_I2C_ADDRESS,
    DISPLAY_I2C_FREQUENCY_HZ,
    INNER_BORDER_HEIGHT,
    INNER_BORDER_INSET,
    INNER_BORDER_WIDTH,
    MARKER_SIZE,
    MARKER_TRAVEL_X,
    MARKER_TRAVEL_Y,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
pub use leds::{PWM_GAIN, PWM_TOP};
pub use timing::{DEBOUNCE_MS, FRAME_INTERVAL_MS, STATUS_LOG_INTERVAL_FRAMES};
