//! Joystick ADC sampling.
//!
//! Pin mapping:
//! - X axis: GPIO26 (ADC0)
//! - Y axis: GPIO27 (ADC1)

use defmt::{Debug2Format, info, warn};
use embassy_rp::adc::{Adc, Async, Channel, Error as AdcError};
use embassy_time::Timer;

use crate::config::{CALIBRATION_INTERVAL_MS, CALIBRATION_SAMPLES};
use crate::joystick::{Calibrator, Center, JoystickReading};

/// The ADC plus the two joystick channels.
pub struct JoystickAdc<'d> {
    adc: Adc<'d, Async>,
    x: Channel<'d>,
    y: Channel<'d>,
}

impl<'d> JoystickAdc<'d> {
    pub fn new(
        adc: Adc<'d, Async>,
        x: Channel<'d>,
        y: Channel<'d>,
    ) -> Self {
        Self { adc, x, y }
    }

    /// Read X then Y.
    pub async fn read(&mut self) -> Result<JoystickReading, AdcError> {
        let x = self.adc.read(&mut self.x).await?;
        let y = self.adc.read(&mut self.y).await?;
        Ok(JoystickReading::new(x, y))
    }

    /// Average the resting position over `CALIBRATION_SAMPLES` readings.
    ///
    /// The joystick must be left untouched while this runs (~0.5 s).
    /// Failed reads are skipped; if none succeed the ADC midpoint is used.
    pub async fn calibrate(&mut self) -> Center {
        info!("Calibrating joystick ({} samples)...", CALIBRATION_SAMPLES);

        let mut calibrator = Calibrator::new();
        for _ in 0..CALIBRATION_SAMPLES {
            match self.read().await {
                Ok(reading) => calibrator.add(reading),
                Err(e) => warn!("Calibration sample failed: {}", Debug2Format(&e)),
            }
            Timer::after_millis(CALIBRATION_INTERVAL_MS).await;
        }

        if calibrator.samples() == 0 {
            warn!("No calibration samples, using ADC midpoint");
        } else if !calibrator.is_complete() {
            warn!("Calibration used {}/{} samples", calibrator.samples(), CALIBRATION_SAMPLES);
        }

        calibrator.finish()
    }
}
