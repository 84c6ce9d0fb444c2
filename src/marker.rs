//! Mapping from raw joystick position to the on-screen marker.
//!
//! The marker uses raw (uncalibrated) readings with the axes swapped to match
//! how the joystick is mounted next to the display:
//! - raw X drives the vertical position, inverted (full X is the top row);
//! - raw Y drives the horizontal position.

use embedded_graphics::prelude::Point;

use crate::config::{ADC_MAX, MARKER_TRAVEL_X, MARKER_TRAVEL_Y};
use crate::joystick::JoystickReading;

/// Top-left corner of the marker for a reading.
///
/// Readings are clamped to the ADC range first, so the marker never leaves
/// the screen.
pub fn marker_position(reading: JoystickReading) -> Point {
    let reading = reading.clamped();
    let adc_max = u32::from(ADC_MAX);

    let top = ((adc_max - u32::from(reading.x)) * MARKER_TRAVEL_Y) / adc_max;
    let left = (u32::from(reading.y) * MARKER_TRAVEL_X) / adc_max;

    Point::new(left as i32, top as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MARKER_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_extremes() {
        assert_eq!(marker_position(JoystickReading::new(ADC_MAX, 0)), Point::new(0, 0));
        assert_eq!(marker_position(JoystickReading::new(0, ADC_MAX)), Point::new(113, 52));
        assert_eq!(marker_position(JoystickReading::new(0, 0)), Point::new(0, 52));
        assert_eq!(marker_position(JoystickReading::new(ADC_MAX, ADC_MAX)), Point::new(113, 0));
    }

    #[test]
    fn test_center() {
        // (4095 - 2048) * 52 / 4095 = 25, 2048 * 113 / 4095 = 56
        assert_eq!(marker_position(JoystickReading::new(2048, 2048)), Point::new(56, 25));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(marker_position(JoystickReading::new(u16::MAX, u16::MAX)), Point::new(113, 0));
    }

    #[test]
    fn test_marker_stays_on_screen() {
        for raw in (0..=ADC_MAX).step_by(13).chain([ADC_MAX]) {
            let p = marker_position(JoystickReading::new(raw, raw));
            assert!(p.x >= 0 && p.y >= 0);
            assert!((p.x as u32) + MARKER_SIZE <= SCREEN_WIDTH, "x overflow at raw={raw}");
            assert!((p.y as u32) + MARKER_SIZE <= SCREEN_HEIGHT, "y overflow at raw={raw}");
        }
    }
}
