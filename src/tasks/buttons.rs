//! Button edge tasks.
//!
//! Buttons are active-low with internal pull-ups; a press is a falling edge.
//! - Joystick push (GPIO22): toggle single/double border and the green LED
//! - Button A (GPIO5): toggle PWM on the red and blue LEDs

use defmt::info;
use embassy_rp::gpio::{Input, Level, Output};
use embassy_time::Instant;

use crate::state::{Debouncer, MODES};

/// Joystick push button task.
///
/// Owns the green LED, which mirrors the border flag.
#[embassy_executor::task]
pub async fn joystick_button_task(
    mut button: Input<'static>,
    mut led_green: Output<'static>,
) {
    info!("Joystick button task started");

    let mut debouncer = Debouncer::new();
    loop {
        button.wait_for_falling_edge().await;
        if !debouncer.accept(Instant::now().as_millis()) {
            continue;
        }

        let border = MODES.toggle_border();
        led_green.set_level(if border.is_double() { Level::High } else { Level::Low });
        info!("Joystick button: border={}, green LED {}", border.label(), if border.is_double() { "ON" } else { "OFF" });
    }
}

/// Button A task: PWM enable toggle.
#[embassy_executor::task]
pub async fn button_a_task(mut button: Input<'static>) {
    info!("Button A task started");

    let mut debouncer = Debouncer::new();
    loop {
        button.wait_for_falling_edge().await;
        if !debouncer.accept(Instant::now().as_millis()) {
            continue;
        }

        let enabled = MODES.toggle_pwm();
        info!("Button A: LED PWM {}", if enabled { "ON" } else { "OFF" });
    }
}
