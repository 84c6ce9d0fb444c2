//! PWM LED constants.

/// PWM counter wrap value. A compare value of `PWM_TOP` is full brightness.
pub const PWM_TOP: u16 = 4095;

/// Multiplier from deflection (ADC counts) to PWM compare value.
/// Half deflection already reaches full brightness.
pub const PWM_GAIN: u16 = 2;
