//! Joystick readings, boot-time calibration and deadzone handling.
//!
//! The joystick is two potentiometers sampled by the 12-bit ADC. At rest they
//! rarely sit at exactly half scale, so the firmware averages a batch of
//! readings at boot ([`Calibrator`]) and measures deflection relative to that
//! [`Center`]. Small deflections inside the [`DEADZONE`] are reported as zero
//! so ADC noise does not flicker the LEDs.

use crate::config::{ADC_MAX, ADC_MIDPOINT, CALIBRATION_SAMPLES, DEADZONE};

// =============================================================================
// Raw Readings
// =============================================================================

/// One raw sample of both joystick axes, in ADC counts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct JoystickReading {
    /// ADC0 (GPIO26).
    pub x: u16,
    /// ADC1 (GPIO27).
    pub y: u16,
}

impl JoystickReading {
    /// Create a reading from raw ADC counts.
    pub const fn new(
        x: u16,
        y: u16,
    ) -> Self {
        Self { x, y }
    }

    /// Limit both axes to the 12-bit ADC range.
    pub const fn clamped(self) -> Self {
        Self {
            x: clamp_adc(self.x),
            y: clamp_adc(self.y),
        }
    }
}

#[inline]
const fn clamp_adc(raw: u16) -> u16 { if raw > ADC_MAX { ADC_MAX } else { raw } }

// =============================================================================
// Calibration
// =============================================================================

/// Resting position of the joystick, measured at boot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Center {
    pub x: u16,
    pub y: u16,
}

impl Center {
    /// Half-scale centre, used when calibration has nothing to average.
    pub const MIDPOINT: Self = Self {
        x: ADC_MIDPOINT,
        y: ADC_MIDPOINT,
    };

    /// Deflection of `reading` from this centre, with the deadzone applied.
    pub fn deflection(
        &self,
        reading: JoystickReading,
    ) -> Deflection {
        Deflection {
            x: adjust_axis(reading.x, self.x),
            y: adjust_axis(reading.y, self.y),
        }
    }
}

impl Default for Center {
    fn default() -> Self { Self::MIDPOINT }
}

/// Running average of calibration samples.
///
/// Sums are kept in `u32`, which holds over a million full-scale samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct Calibrator {
    sum_x: u32,
    sum_y: u32,
    samples: u32,
}

impl Calibrator {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            sum_x: 0,
            sum_y: 0,
            samples: 0,
        }
    }

    /// Add one reading to the average.
    pub fn add(
        &mut self,
        reading: JoystickReading,
    ) {
        let reading = reading.clamped();
        self.sum_x += u32::from(reading.x);
        self.sum_y += u32::from(reading.y);
        self.samples += 1;
    }

    /// Number of readings collected so far.
    #[inline]
    pub const fn samples(&self) -> u32 { self.samples }

    /// True once the configured number of readings has been collected.
    #[inline]
    pub const fn is_complete(&self) -> bool { self.samples >= CALIBRATION_SAMPLES }

    /// Integer mean of the collected readings.
    ///
    /// Falls back to [`Center::MIDPOINT`] when no reading was collected.
    pub fn finish(&self) -> Center {
        if self.samples == 0 {
            return Center::MIDPOINT;
        }
        Center {
            x: (self.sum_x / self.samples) as u16,
            y: (self.sum_y / self.samples) as u16,
        }
    }
}

// =============================================================================
// Deadzone
// =============================================================================

/// Signed distance of both axes from the centre, after the deadzone.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Deflection {
    pub x: i16,
    pub y: i16,
}

/// Subtract the centre from a raw axis reading and apply the deadzone.
///
/// Differences with magnitude below [`DEADZONE`] become 0; a difference of
/// exactly `DEADZONE` is kept. Inputs are clamped to the ADC range first, so
/// the result always lies in `-4095..=4095`.
pub fn adjust_axis(
    raw: u16,
    center: u16,
) -> i16 {
    let diff = i32::from(clamp_adc(raw)) - i32::from(clamp_adc(center));
    if diff.unsigned_abs() < u32::from(DEADZONE) {
        return 0;
    }
    diff as i16
}
