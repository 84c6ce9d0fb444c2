//! Display and layout configuration constants.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x64 OLED)
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 64;

/// 7-bit I2C address of the SSD1306 controller.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I2C bus clock for the display (fast mode).
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;

// =============================================================================
// Scene Geometry
// =============================================================================

/// Outer outline size. The rightmost column and bottom row stay dark.
pub const BORDER_WIDTH: u32 = SCREEN_WIDTH - 1;
pub const BORDER_HEIGHT: u32 = SCREEN_HEIGHT - 1;

/// Offset of the inner outline when the double border is selected.
pub const INNER_BORDER_INSET: i32 = 1;

/// Inner outline size, covering x 1..=125 and y 1..=61.
pub const INNER_BORDER_WIDTH: u32 = BORDER_WIDTH - 2;
pub const INNER_BORDER_HEIGHT: u32 = BORDER_HEIGHT - 2;

/// Side length of the square marker.
pub const MARKER_SIZE: u32 = 8;

/// Horizontal travel of the marker's left edge (0..=113).
/// Keeps the marker inside the frame: 113 + 8 < 128.
pub const MARKER_TRAVEL_X: u32 = 113;

/// Vertical travel of the marker's top edge (0..=52).
pub const MARKER_TRAVEL_Y: u32 = 52;
