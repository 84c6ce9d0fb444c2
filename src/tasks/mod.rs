//! Async tasks for the joystick display firmware.
//!
//! The two buttons are handled by their own Embassy tasks, woken by the GPIO
//! edge interrupt. They only flip the shared mode flags (and the green LED);
//! the control loop picks the change up on its next frame.

pub mod buttons;

pub use buttons::{button_a_task, joystick_button_task};
