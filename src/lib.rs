//! Joystick display library - testable modules for the joystick/LED/OLED firmware.
//!
//! This library contains the control logic that can be tested on the host machine:
//! calibration, deadzone handling, LED level scaling, marker mapping and scene drawing.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Input and output models
pub mod joystick;
pub mod leds;
pub mod marker;

// Shared state touched by the button tasks
pub mod state;

// Per-frame computation and drawing
pub mod control;
pub mod render;
