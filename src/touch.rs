/// Detects double taps so the zoom gesture can be cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleTapGuard {
    window_ms: f64,
    last_touch_end_ms: f64,
}

impl DoubleTapGuard {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_touch_end_ms: 0.0,
        }
    }

    /// Record a touch-end at `now_ms` and report whether its default action
    /// should be cancelled. The timestamp is updated either way.
    pub fn on_touch_end(&mut self, now_ms: f64) -> bool {
        let suppress = now_ms - self.last_touch_end_ms <= self.window_ms;
        self.last_touch_end_ms = now_ms;
        suppress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Epoch-style timestamps, as produced by `Date.now()`.
    const T0: f64 = 1_700_000_000_000.0;

    #[test]
    fn second_tap_within_window_is_suppressed() {
        let mut guard = DoubleTapGuard::new(300.0);
        assert!(!guard.on_touch_end(T0));
        assert!(guard.on_touch_end(T0 + 300.0));
    }

    #[test]
    fn taps_further_apart_are_left_alone() {
        let mut guard = DoubleTapGuard::new(300.0);
        assert!(!guard.on_touch_end(T0));
        assert!(!guard.on_touch_end(T0 + 301.0));
        assert!(!guard.on_touch_end(T0 + 700.0));
    }

    #[test]
    fn every_touch_end_moves_the_reference_point() {
        let mut guard = DoubleTapGuard::new(300.0);
        guard.on_touch_end(T0);
        assert!(guard.on_touch_end(T0 + 250.0));
        // 500ms after the first tap but only 250ms after the second.
        assert!(guard.on_touch_end(T0 + 500.0));
    }
}
