// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Blinking caret for the text entry readout

use crate::settings;
use std::time::Duration;

/// Caret with blinking animation
#[derive(Debug, Clone, PartialEq)]
pub struct Caret {
    /// Time accumulated since the last toggle
    elapsed: Duration,
    /// Is the caret currently visible?
    visible: bool,
    period: Duration,
}

impl Default for Caret {
    fn default() -> Self {
        Self::new()
    }
}

impl Caret {
    /// Create a visible caret with the standard blink period
    pub fn new() -> Self {
        Self::with_period(settings::caret::BLINK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Caret {
            elapsed: Duration::ZERO,
            visible: true,
            period,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance the blink animation
    ///
    /// Returns true if visibility changed and a redraw is needed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        let mut toggled = false;
        while self.elapsed >= self.period && !self.period.is_zero() {
            self.elapsed -= self.period;
            self.visible = !self.visible;
            toggled = !toggled;
        }
        toggled
    }

    /// Reset caret to visible state (called when the text changes)
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_once_per_period() {
        let mut caret = Caret::new();
        assert!(caret.is_visible());

        assert!(!caret.advance(Duration::from_millis(500)));
        assert!(caret.is_visible());

        assert!(caret.advance(Duration::from_millis(250)));
        assert!(!caret.is_visible());

        assert!(caret.advance(settings::caret::BLINK_PERIOD));
        assert!(caret.is_visible());
    }

    #[test]
    fn two_periods_at_once_leave_visibility_unchanged() {
        let mut caret = Caret::new();
        assert!(!caret.advance(settings::caret::BLINK_PERIOD * 2));
        assert!(caret.is_visible());
    }

    #[test]
    fn reset_makes_caret_visible() {
        let mut caret = Caret::new();
        caret.advance(settings::caret::BLINK_PERIOD);
        assert!(!caret.is_visible());
        caret.reset();
        assert!(caret.is_visible());
    }
}
