//! Loop pacing and input timing.

/// Delay between control loop iterations (~20 Hz).
pub const FRAME_INTERVAL_MS: u64 = 50;

/// Minimum time between two accepted button edges.
pub const DEBOUNCE_MS: u64 = 50;

/// Emit a status line every N frames (once per second at 20 Hz).
pub const STATUS_LOG_INTERVAL_FRAMES: u32 = 20;
