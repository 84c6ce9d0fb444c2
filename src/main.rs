//! Joystick Display Firmware for Raspberry Pi Pico (RP2040)
//!
//! Reads a two-axis analog joystick and dims two LEDs by deflection while a
//! marker follows the stick on a 128x64 SSD1306 OLED.
//!
//! # Architecture
//!
//! Single control loop at ~20 Hz plus two button tasks:
//! - Main task: sample joystick, set LED PWM, redraw and flush the display
//! - Button tasks: wait for falling edges, flip the shared mode flags
//!
//! # Controls
//!
//! - **Joystick push**: Toggle single/double border (green LED shows double)
//! - **A**: Toggle red/blue LED PWM on/off
//!
//! # Pin Mapping
//!
//! | Function | GPIO |
//! |----------|------|
//! | Joystick X (ADC0) | 26 |
//! | Joystick Y (ADC1) | 27 |
//! | Joystick button | 22 |
//! | Button A | 5 |
//! | LED red (PWM6 B) | 13 |
//! | LED green | 11 |
//! | LED blue (PWM6 A) | 12 |
//! | I2C1 SDA / SCL | 14 / 15 |

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod display;
mod led_pwm;
mod sampling;
mod tasks;

// Re-export testable modules from library for local use
// (These are defined in lib.rs with host-testable code)
mod config {
    pub use joystick_display::config::*;
}
mod control {
    pub use joystick_display::control::*;
}
mod joystick {
    pub use joystick_display::joystick::*;
}
mod leds {
    pub use joystick_display::leds::*;
}
mod render {
    pub use joystick_display::render::*;
}
mod state {
    pub use joystick_display::state::*;
}

use defmt::{Debug2Format, debug, info, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306Async};
use {defmt_rtt as _, panic_probe as _};

use crate::config::{DISPLAY_I2C_ADDRESS, FRAME_INTERVAL_MS, STATUS_LOG_INTERVAL_FRAMES};
use crate::control::plan_frame;
use crate::display::display_i2c_config;
use crate::joystick::JoystickReading;
use crate::led_pwm::LedPwm;
use crate::render::draw_scene;
use crate::sampling::JoystickAdc;
use crate::state::MODES;
use crate::tasks::{button_a_task, joystick_button_task};

embassy_rp::bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"joystick-display"),
    embassy_rp::binary_info::rp_program_description!(c"Joystick-dimmed LEDs and OLED marker"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joystick display starting...");

    let p = embassy_rp::init(Default::default());

    // Joystick axes: X=26 (ADC0), Y=27 (ADC1)
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let mut joystick = JoystickAdc::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
    );
    info!("ADC initialized");

    // Buttons (active-low with internal pull-up): joystick push=22, A=5
    let btn_joystick = Input::new(p.PIN_22, Pull::Up);
    let btn_a = Input::new(p.PIN_5, Pull::Up);
    info!("Buttons initialized");

    // LEDs: blue=12 and red=13 share PWM slice 6, green=11 is plain GPIO
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, PwmConfig::default());
    let mut leds = LedPwm::new(pwm);
    let led_green = Output::new(p.PIN_11, Level::Low); // Off
    info!("LEDs initialized");

    // Display: SSD1306 on I2C1 (SDA=14, SCL=15)
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, display_i2c_config());
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display =
        Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();

    let mut display_ready = match display.init().await {
        Ok(()) => {
            info!("Display initialized");
            true
        }
        Err(e) => {
            warn!("Display init failed: {}", Debug2Format(&e));
            false
        }
    };

    // Start from a blank screen while calibrating
    if display_ready {
        if let Err(e) = display.clear(BinaryColor::Off) {
            warn!("Display clear failed: {}", Debug2Format(&e));
        }
        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {}", Debug2Format(&e));
        }
    }

    // Buttons are live during calibration; presses only flip the mode flags
    spawner.spawn(joystick_button_task(btn_joystick, led_green)).unwrap();
    spawner.spawn(button_a_task(btn_a)).unwrap();
    info!("Button tasks spawned");

    let center = joystick.calibrate().await;
    info!("Calibration: x_center={}, y_center={}", center.x, center.y);

    // Last good reading; reused when an ADC read fails
    let mut reading = JoystickReading::new(center.x, center.y);
    let mut frame_count = 0u32;

    info!("Main loop starting");

    loop {
        // 1) Sample X then Y
        match joystick.read().await {
            Ok(r) => reading = r,
            Err(e) => warn!("ADC read failed: {}", Debug2Format(&e)),
        }

        // 2) Compute LED levels, marker position and border for this frame
        let modes = MODES.snapshot();
        let plan = plan_frame(reading, &center, modes);
        leds.set_levels(plan.leds);

        // 3) Redraw and transfer
        if !display_ready {
            display_ready = display.init().await.is_ok();
            if display_ready {
                info!("Display initialized (retry)");
            }
        }
        if display_ready {
            if let Err(e) = draw_scene(&mut display, &plan) {
                warn!("Draw failed: {}", Debug2Format(&e));
            }
            if let Err(e) = display.flush().await {
                warn!("Display flush failed: {}", Debug2Format(&e));
            }
        }

        if frame_count.is_multiple_of(STATUS_LOG_INTERVAL_FRAMES) {
            debug!(
                "raw=({}, {}) led r={} b={} marker=({}, {}) border={} pwm={}",
                reading.x,
                reading.y,
                leds.levels().red,
                leds.levels().blue,
                plan.marker.x,
                plan.marker.y,
                plan.border.label(),
                if modes.pwm_enabled { "on" } else { "off" }
            );
        }
        frame_count = frame_count.wrapping_add(1);

        Timer::after_millis(FRAME_INTERVAL_MS).await;
    }
}
