// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing for SliderSession

use super::SliderSession;
use kurbo::Point;

impl SliderSession {
    /// Position of the handle under `point`
    ///
    /// Later handles are painted on top, so they win when rectangles
    /// overlap.
    pub fn handle_at(&self, point: Point) -> Option<usize> {
        let track = self.track();
        self.registry
            .handles()
            .iter()
            .rposition(|h| track.contains_handle(h.value(), point))
    }

    /// Handle a double-click at `point` should edit
    ///
    /// Either the handle under the point, or the first handle when the
    /// click lands between the track start and that handle.
    pub(super) fn edit_target(&self, point: Point) -> Option<usize> {
        if let Some(position) = self.handle_at(point) {
            return Some(position);
        }
        let first = self.registry.handles().first()?;
        let region = self.track().leading_region(first.value());
        tracing::debug!(
            "[edit_target] {:?} not on a handle, leading region {:?}",
            point,
            region
        );
        region.contains(point).then_some(0)
    }

    pub(super) fn handle_name(&self, position: usize) -> Option<String> {
        self.registry
            .handles()
            .get(position)
            .map(|h| h.name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::session;
    use kurbo::Point;

    #[test]
    fn topmost_handle_wins() {
        // 10 and 12 are closer than a handle diameter, so they overlap
        let s = session(0, 100, &[("A", 10), ("B", 12)]);
        let track = s.track();
        let overlap = Point::new(
            (track.handle_rect(10).center().x + track.handle_rect(12).center().x) / 2.0,
            track.handle_rect(10).center().y,
        );
        assert_eq!(s.handle_at(overlap), Some(1));
    }

    #[test]
    fn empty_space_hits_nothing() {
        let s = session(0, 100, &[("A", 50)]);
        let track = s.track();
        let y = track.handle_rect(50).center().y;
        assert_eq!(s.handle_at(Point::new(track.value_to_offset(90), y)), None);
        assert_eq!(s.handle_at(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn leading_region_targets_first_handle() {
        let s = session(0, 100, &[("A", 50), ("B", 80)]);
        let track = s.track();
        let y = track.handle_rect(50).center().y;
        let before_first = Point::new(track.value_to_offset(20), y);
        assert_eq!(s.edit_target(before_first), Some(0));

        let between = Point::new(track.value_to_offset(70), y);
        assert_eq!(s.edit_target(between), None);
    }
}
