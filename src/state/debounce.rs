//! Button edge debounce.
//!
//! The button tasks wake on every falling edge the GPIO interrupt reports. A
//! bouncing contact can report several edges per press, so edges that follow
//! an accepted one within [`DEBOUNCE_MS`] are dropped.
//!
//! Time is passed in by the caller (milliseconds since boot) so the logic
//! stays independent of the timer driver.

use crate::config::DEBOUNCE_MS;

/// Time-based edge filter for one button.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debouncer {
    last_accepted_ms: Option<u64>,
}

impl Debouncer {
    /// Create a debouncer that accepts the next edge.
    pub const fn new() -> Self { Self { last_accepted_ms: None } }

    /// Returns true if an edge at `now_ms` counts as a new press.
    pub fn accept(
        &mut self,
        now_ms: u64,
    ) -> bool {
        // Apply debounce: only accept the edge if enough time has passed
        if let Some(last) = self.last_accepted_ms
            && now_ms.saturating_sub(last) < DEBOUNCE_MS
        {
            return false;
        }

        self.last_accepted_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_edge_accepted() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(0));
    }

    #[test]
    fn test_bounce_rejected() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(1_000));
        assert!(!debouncer.accept(1_001));
        assert!(!debouncer.accept(1_000 + DEBOUNCE_MS - 1));
    }

    #[test]
    fn test_edge_after_window_accepted() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(1_000));
        assert!(debouncer.accept(1_000 + DEBOUNCE_MS));
    }

    #[test]
    fn test_rejected_edges_do_not_extend_window() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(0));
        assert!(!debouncer.accept(40));
        // Window is measured from the last accepted edge, not the last bounce
        assert!(debouncer.accept(DEBOUNCE_MS));
    }
}
