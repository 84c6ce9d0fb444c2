//! Per-frame computation for the control loop.
//!
//! [`plan_frame`] turns one joystick reading plus the current mode flags into
//! everything the loop applies to hardware: PWM compare values, marker
//! position and border style. It touches no peripherals, so the loop body is
//! testable on the host.

use embedded_graphics::prelude::Point;

use crate::joystick::{Center, JoystickReading};
use crate::leds::LedLevels;
use crate::marker::marker_position;
use crate::state::{BorderStyle, Modes};

/// Outputs for one iteration of the control loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FramePlan {
    pub leds: LedLevels,
    /// Top-left corner of the marker.
    pub marker: Point,
    pub border: BorderStyle,
}

/// Compute the outputs for one frame.
pub fn plan_frame(
    reading: JoystickReading,
    center: &Center,
    modes: Modes,
) -> FramePlan {
    FramePlan {
        leds: LedLevels::compute(reading, center, modes.pwm_enabled),
        marker: marker_position(reading),
        border: modes.border,
    }
}
