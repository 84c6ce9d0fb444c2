//! Mode flags flipped by the buttons and read by the control loop.
//!
//! Each flag has exactly one writer (its button task) and one reader (the
//! control loop), so a toggle is a plain load followed by a store. The
//! RP2040's Cortex-M0+ has no atomic read-modify-write, only atomic loads and
//! stores, which is all this needs. A stale read costs at most one frame.

use core::sync::atomic::{AtomicBool, Ordering};

/// Global mode flags, initialised at compile time.
pub static MODES: ModeFlags = ModeFlags::new();

/// Frame outline selected by the joystick button.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BorderStyle {
    /// One-pixel outline around the screen edge.
    #[default]
    Single,
    /// Outline plus a second one inset by a pixel.
    Double,
}

impl BorderStyle {
    /// Map the stored flag to a style.
    #[inline]
    pub const fn from_double(double: bool) -> Self { if double { Self::Double } else { Self::Single } }

    /// The other style.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Double,
            Self::Double => Self::Single,
        }
    }

    #[inline]
    pub const fn is_double(self) -> bool { matches!(self, Self::Double) }

    /// Label for log output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

/// Copy of the flags taken once per frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Modes {
    pub border: BorderStyle,
    /// When false the red and blue LEDs are held dark.
    pub pwm_enabled: bool,
}

impl Default for Modes {
    fn default() -> Self {
        Self {
            border: BorderStyle::Single,
            pwm_enabled: true,
        }
    }
}

/// Flags written from the button tasks.
///
/// The green LED mirrors the border flag: both start off/single and the
/// joystick button flips them together.
pub struct ModeFlags {
    double_border: AtomicBool,
    pwm_enabled: AtomicBool,
}

impl ModeFlags {
    /// Single border, PWM enabled.
    pub const fn new() -> Self {
        Self {
            double_border: AtomicBool::new(false),
            pwm_enabled: AtomicBool::new(true),
        }
    }

    /// Flip the border style and return the new one.
    ///
    /// Only the joystick-button task calls this.
    pub fn toggle_border(&self) -> BorderStyle {
        let border = BorderStyle::from_double(self.double_border.load(Ordering::Relaxed)).toggled();
        self.double_border.store(border.is_double(), Ordering::Relaxed);
        border
    }

    /// Flip PWM output on/off and return the new state.
    ///
    /// Only the button-A task calls this.
    pub fn toggle_pwm(&self) -> bool {
        let enabled = !self.pwm_enabled.load(Ordering::Relaxed);
        self.pwm_enabled.store(enabled, Ordering::Relaxed);
        enabled
    }

    /// Read both flags.
    pub fn snapshot(&self) -> Modes {
        Modes {
            border: BorderStyle::from_double(self.double_border.load(Ordering::Relaxed)),
            pwm_enabled: self.pwm_enabled.load(Ordering::Relaxed),
        }
    }
}

impl Default for ModeFlags {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_modes() {
        let flags = ModeFlags::new();
        assert_eq!(flags.snapshot(), Modes::default());
        assert_eq!(flags.snapshot().border, BorderStyle::Single);
        assert!(flags.snapshot().pwm_enabled);
    }

    #[test]
    fn test_toggle_border() {
        let flags = ModeFlags::new();
        assert_eq!(flags.toggle_border(), BorderStyle::Double);
        assert_eq!(flags.snapshot().border, BorderStyle::Double);
        assert_eq!(flags.toggle_border(), BorderStyle::Single);
        assert_eq!(flags.snapshot().border, BorderStyle::Single);
    }

    #[test]
    fn test_toggle_pwm_leaves_border_alone() {
        let flags = ModeFlags::new();
        assert!(!flags.toggle_pwm());
        let modes = flags.snapshot();
        assert!(!modes.pwm_enabled);
        assert_eq!(modes.border, BorderStyle::Single);
        assert!(flags.toggle_pwm());
    }

    #[test]
    fn test_toggles_before_first_snapshot_are_kept() {
        // Presses handled while the loop is still calibrating show up in its first frame
        let flags = ModeFlags::new();
        flags.toggle_border();
        flags.toggle_pwm();
        flags.toggle_border();
        flags.toggle_border();
        let modes = flags.snapshot();
        assert_eq!(modes.border, BorderStyle::Double);
        assert!(!modes.pwm_enabled);
    }

    #[test]
    fn test_border_style_helpers() {
        assert_eq!(BorderStyle::Single.toggled(), BorderStyle::Double);
        assert_eq!(BorderStyle::Double.toggled(), BorderStyle::Single);
        assert!(BorderStyle::Double.is_double());
        assert!(!BorderStyle::Single.is_double());
        assert_eq!(BorderStyle::from_double(true), BorderStyle::Double);
        assert_eq!(BorderStyle::Double.label(), "double");
    }
}
