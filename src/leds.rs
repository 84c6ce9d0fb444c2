//! PWM brightness levels for the red and blue LEDs.
//!
//! Brightness follows deflection magnitude: the red LED tracks the Y axis and
//! the blue LED tracks the X axis. Button A switches both off until it is
//! pressed again (see [`crate::state::Modes`]).

use crate::config::{PWM_GAIN, PWM_TOP};
use crate::joystick::{Center, Deflection, JoystickReading};

/// PWM compare values for the two dimmable LEDs (0..=`PWM_TOP`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LedLevels {
    /// Red LED, GPIO13 (PWM slice 6, channel B).
    pub red: u16,
    /// Blue LED, GPIO12 (PWM slice 6, channel A).
    pub blue: u16,
}

impl LedLevels {
    /// Both LEDs dark.
    pub const OFF: Self = Self { red: 0, blue: 0 };

    /// Scale a deflection to brightness.
    pub fn from_deflection(deflection: Deflection) -> Self {
        Self {
            red: scale_axis(deflection.y),
            blue: scale_axis(deflection.x),
        }
    }

    /// Levels for one frame. Returns [`LedLevels::OFF`] while PWM is disabled.
    pub fn compute(
        reading: JoystickReading,
        center: &Center,
        pwm_enabled: bool,
    ) -> Self {
        if !pwm_enabled {
            return Self::OFF;
        }
        Self::from_deflection(center.deflection(reading))
    }
}

/// |axis| * gain, saturated at the PWM wrap value.
///
/// Compare values above the wrap already mean 100 % duty on the RP2040, so
/// saturating changes nothing visible and keeps levels in range.
fn scale_axis(axis: i16) -> u16 { axis.unsigned_abs().saturating_mul(PWM_GAIN).min(PWM_TOP) }
