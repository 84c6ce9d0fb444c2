//! PWM driver for the red and blue LEDs.
//!
//! Both LEDs sit on PWM slice 6: blue on GPIO12 (channel A) and red on GPIO13
//! (channel B). The slice wraps at `PWM_TOP`, so compare values map 1:1 to
//! the 12-bit brightness levels computed by the control loop.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use crate::config::PWM_TOP;
use crate::leds::LedLevels;

/// Owns the PWM slice and its current configuration.
pub struct LedPwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    levels: LedLevels,
}

impl<'d> LedPwm<'d> {
    /// Configure the slice (wrap at `PWM_TOP`, both channels dark).
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        config.compare_b = 0;
        pwm.set_config(&config);

        Self {
            pwm,
            config,
            levels: LedLevels::OFF,
        }
    }

    /// Apply new brightness levels. Unchanged levels skip the register write.
    pub fn set_levels(
        &mut self,
        levels: LedLevels,
    ) {
        if levels == self.levels {
            return;
        }
        self.config.compare_a = levels.blue;
        self.config.compare_b = levels.red;
        self.pwm.set_config(&self.config);
        self.levels = levels;
    }

    /// Levels currently applied to the hardware.
    #[inline]
    pub const fn levels(&self) -> LedLevels { self.levels }
}
