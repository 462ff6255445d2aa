// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for MultiSliderWidget

use super::MultiSliderWidget;
use crate::settings;
use kurbo::Point;
use masonry::core::{EventCtx, PointerState};
use std::time::Instant;

/// Detects double-clicks from a stream of primary presses
#[derive(Debug, Clone, Default)]
pub(crate) struct ClickTracker {
    last_click: Option<(Instant, Point)>,
}

impl ClickTracker {
    /// Record a press; true if it completes a double-click
    pub(crate) fn register(&mut self, now: Instant, position: Point) -> bool {
        let is_double = self.last_click.is_some_and(|(time, last_pos)| {
            now.saturating_duration_since(time) < settings::pointer::DOUBLE_CLICK_TIME
                && position.distance(last_pos) < settings::pointer::DOUBLE_CLICK_DISTANCE
        });

        // A completed double-click starts fresh so a third press
        // doesn't count as another one
        self.last_click = if is_double {
            None
        } else {
            Some((now, position))
        };
        is_double
    }
}

impl MultiSliderWidget {
    pub(super) fn handle_pointer_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        ctx.request_focus();
        ctx.capture_pointer();

        let local_pos = ctx.local_position(state.position);
        tracing::debug!("[MultiSliderWidget] Down at {:?}", local_pos);

        let redraw = if self.clicks.register(Instant::now(), local_pos)
            && !self.session.is_dragging()
        {
            self.session.on_double_click(local_pos) || self.session.on_pointer_down(local_pos)
        } else {
            self.session.on_pointer_down(local_pos)
        };
        self.after_input(ctx, redraw);
    }

    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let local_pos = ctx.local_position(state.position);
        let redraw = self.session.on_pointer_move(local_pos);
        self.after_input(ctx, redraw);
    }

    pub(super) fn handle_pointer_up(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let local_pos = ctx.local_position(state.position);
        let redraw = self.session.on_pointer_up(local_pos);
        self.after_input(ctx, redraw);
    }

    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        tracing::debug!("[MultiSliderWidget] Pointer cancelled");
        let redraw = self.session.on_pointer_cancel();
        self.after_input(ctx, redraw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn two_quick_presses_are_a_double_click() {
        let mut clicks = ClickTracker::default();
        let t0 = Instant::now();
        assert!(!clicks.register(t0, Point::new(10.0, 10.0)));
        assert!(clicks.register(t0 + Duration::from_millis(200), Point::new(12.0, 11.0)));
    }

    #[test]
    fn slow_or_distant_presses_are_not() {
        let mut clicks = ClickTracker::default();
        let t0 = Instant::now();
        clicks.register(t0, Point::new(10.0, 10.0));
        assert!(!clicks.register(t0 + Duration::from_millis(600), Point::new(10.0, 10.0)));
        assert!(!clicks.register(
            t0 + Duration::from_millis(700),
            Point::new(40.0, 10.0)
        ));
    }

    #[test]
    fn third_press_starts_over() {
        let mut clicks = ClickTracker::default();
        let t0 = Instant::now();
        let p = Point::new(5.0, 5.0);
        clicks.register(t0, p);
        assert!(clicks.register(t0 + Duration::from_millis(100), p));
        assert!(!clicks.register(t0 + Duration::from_millis(200), p));
    }
}
