//! State shared between the button tasks and the control loop.
//!
//! - `modes`: Border style and PWM enable flags, toggled by the buttons
//! - `debounce`: Edge debounce for the button tasks

mod debounce;
mod modes;

pub use debounce::Debouncer;
pub use modes::{BorderStyle, MODES, ModeFlags, Modes};
