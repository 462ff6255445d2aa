// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer and keyboard input for SliderSession
//!
//! Every method returns `true` when the slider needs to be repainted.

use super::SliderSession;
use crate::editing::notify::Notification;
use crate::editing::text_entry::{EntryKey, EntryOutcome};
use kurbo::Point;
use std::time::Duration;

impl SliderSession {
    // ===== Pointer =====

    /// Primary button pressed
    ///
    /// A press on a handle selects it, opens name-only readouts for the
    /// others and starts a drag. A press on empty space closes the selected
    /// readout. Any text entry in progress is committed first.
    pub fn on_pointer_down(&mut self, point: Point) -> bool {
        let redraw = self.finish_entry();

        let Some(name) = self.handle_at(point).and_then(|p| self.handle_name(p)) else {
            return self.tooltips.close_selected().is_some() || redraw;
        };

        let track = self.track();
        if self
            .drag
            .begin(&self.registry, &track, &name, point)
            .is_none()
        {
            return redraw;
        }

        self.tooltips.open_selected(&name);
        self.tooltips.clear_hover();
        self.tooltips
            .open_peers(self.registry.handles().iter().map(|h| h.name()));
        true
    }

    /// Pointer moved, with or without a button held
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        if self.drag.is_dragging() {
            let track = self.track();
            return self
                .drag
                .drag_to(&mut self.registry, &track, point, &mut self.outbox)
                .is_some();
        }
        self.update_hover(point)
    }

    /// Primary button released; ends a drag and closes the peer readouts
    pub fn on_pointer_up(&mut self, point: Point) -> bool {
        let ended = self.end_drag();
        self.update_hover(point) || ended
    }

    /// The pointer capture was lost mid-gesture; treated like a release
    pub fn on_pointer_cancel(&mut self) -> bool {
        self.end_drag()
    }

    /// Pointer left the widget
    pub fn on_pointer_leave(&mut self) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let had_hover = self.hovered.take().is_some();
        self.tooltips.clear_hover() || had_hover
    }

    /// Double-click: start typing a value for a handle
    pub fn on_double_click(&mut self, point: Point) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let Some(name) = self.edit_target(point).and_then(|p| self.handle_name(p)) else {
            return false;
        };
        if self.entry_handle() != Some(name.as_str()) {
            self.finish_entry();
        }

        tracing::debug!("[on_double_click] editing '{}'", name);
        self.tooltips.open_selected(&name);
        self.entry.begin(name);
        true
    }

    // ===== Keyboard and focus =====

    /// Key pressed while the slider has focus
    pub fn on_key(&mut self, key: EntryKey) -> bool {
        let outcome = self.entry.handle_key(key);
        self.apply_entry_outcome(outcome)
    }

    /// The slider lost keyboard focus
    ///
    /// Commits any text entry, ends any drag and hides the selected
    /// readout.
    pub fn on_focus_lost(&mut self) -> bool {
        let committed = self.finish_entry();
        let ended = self.end_drag();
        let closed = self.tooltips.close_selected().is_some();
        committed || ended || closed
    }

    /// Advance the caret blink clock
    pub fn advance_caret(&mut self, delta: Duration) -> bool {
        self.entry.advance_caret(delta)
    }

    // ===== Helpers =====

    fn update_hover(&mut self, point: Point) -> bool {
        match self.handle_at(point).and_then(|p| self.handle_name(p)) {
            Some(name) => {
                let ring_changed = self.hovered.as_deref() != Some(name.as_str());
                let readout_changed = self.tooltips.show_hover(&name);
                self.hovered = Some(name);
                ring_changed || readout_changed
            }
            None => {
                let had_hover = self.hovered.take().is_some();
                self.tooltips.clear_hover() || had_hover
            }
        }
    }

    fn end_drag(&mut self) -> bool {
        match self.drag.end() {
            Some(_) => {
                self.tooltips.close_peers();
                true
            }
            None => false,
        }
    }

    /// Commit an open text entry the way losing focus does
    fn finish_entry(&mut self) -> bool {
        let outcome = self.entry.focus_lost();
        self.apply_entry_outcome(outcome)
    }

    fn apply_entry_outcome(&mut self, outcome: EntryOutcome) -> bool {
        match outcome {
            EntryOutcome::Ignored => false,
            EntryOutcome::Redraw => true,
            EntryOutcome::Commit { handle, value } => {
                self.commit_value(handle, value);
                self.tooltips.close_selected();
                true
            }
            EntryOutcome::Closed { handle } => {
                tracing::debug!("Text entry for '{}' closed without a value", handle);
                self.tooltips.close_selected();
                true
            }
        }
    }

    fn commit_value(&mut self, name: String, value: i64) {
        match self.registry.set_value(&name, value) {
            Ok(()) => {
                tracing::info!("'{}' set to {} by text entry", name, value);
                self.outbox.push(Notification::ValueChanged { name, value });
            }
            Err(reason) => {
                tracing::warn!("Rejected typed value for '{}': {}", name, reason);
                self.outbox.push(Notification::Rejected {
                    name,
                    value,
                    reason,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::session;
    use crate::editing::notify::Notification;
    use crate::editing::text_entry::EntryKey;
    use crate::model::SliderError;
    use kurbo::Point;
    use std::time::Duration;

    fn type_keys(s: &mut super::SliderSession, text: &str) {
        for c in text.chars() {
            s.on_key(EntryKey::from_char(c).unwrap());
        }
    }

    fn center(s: &super::SliderSession, value: i64) -> Point {
        s.track().handle_rect(value).center()
    }

    #[test]
    fn drag_opens_selected_and_peers() {
        let mut s = session(0, 100, &[("A", 10), ("B", 50), ("C", 90)]);
        assert!(s.on_pointer_down(center(&s, 50)));

        assert_eq!(s.tooltips().selected(), Some("B"));
        let peers: Vec<&str> = s.tooltips().peers().collect();
        assert_eq!(peers, vec!["A", "C"]);

        s.on_pointer_move(center(&s, 60));
        assert_eq!(s.value("B"), Some(60));

        assert!(s.on_pointer_up(center(&s, 60)));
        assert!(!s.is_dragging());
        assert_eq!(s.tooltips().peers().count(), 0);
        assert_eq!(s.tooltips().selected(), Some("B"));
    }

    #[test]
    fn drag_notifications_reach_the_host() {
        let mut s = session(0, 100, &[("A", 50)]);
        s.on_pointer_down(center(&s, 50));
        s.on_pointer_move(center(&s, 70));
        s.on_pointer_up(center(&s, 70));

        let events = s.take_notifications();
        assert_eq!(
            events,
            vec![
                Notification::ValueChanged {
                    name: "A".to_string(),
                    value: 70
                },
                Notification::ValueUpdated {
                    name: "A".to_string(),
                    value: 70
                },
            ]
        );
        assert!(!s.has_notifications());
    }

    #[test]
    fn click_on_empty_space_closes_selected() {
        let mut s = session(0, 100, &[("A", 50)]);
        s.on_pointer_down(center(&s, 50));
        s.on_pointer_up(center(&s, 50));
        assert_eq!(s.tooltips().selected(), Some("A"));

        assert!(s.on_pointer_down(Point::new(0.0, 0.0)));
        assert_eq!(s.tooltips().selected(), None);
        assert!(!s.is_dragging());
    }

    #[test]
    fn cancel_ends_drag_like_release() {
        let mut s = session(0, 100, &[("A", 10), ("B", 50)]);
        s.on_pointer_down(center(&s, 50));
        assert!(s.on_pointer_cancel());
        assert!(!s.is_dragging());
        assert_eq!(s.tooltips().peers().count(), 0);
        assert!(!s.on_pointer_cancel());
    }

    #[test]
    fn hover_follows_pointer_when_idle() {
        let mut s = session(0, 100, &[("A", 10), ("B", 50)]);
        assert!(s.on_pointer_move(center(&s, 50)));
        assert_eq!(s.tooltips().hover(), Some("B"));
        assert_eq!(s.hovered_handle(), Some("B"));
        assert!(!s.on_pointer_move(center(&s, 50)));

        assert!(s.on_pointer_move(Point::new(0.0, 0.0)));
        assert_eq!(s.tooltips().hover(), None);
        assert_eq!(s.hovered_handle(), None);
    }

    #[test]
    fn hover_disabled_still_tracks_ring() {
        let mut s = session(0, 100, &[("A", 50)]);
        s.set_hover_display(false);
        assert!(s.on_pointer_move(center(&s, 50)));
        assert_eq!(s.tooltips().hover(), None);
        assert_eq!(s.hovered_handle(), Some("A"));
    }

    #[test]
    fn leaving_widget_clears_hover() {
        let mut s = session(0, 100, &[("A", 50)]);
        s.on_pointer_move(center(&s, 50));
        assert!(s.on_pointer_leave());
        assert_eq!(s.tooltips().hover(), None);
        assert!(!s.on_pointer_leave());
    }

    #[test]
    fn no_hover_readout_while_dragging() {
        let mut s = session(0, 100, &[("A", 10), ("B", 50)]);
        s.on_pointer_move(center(&s, 10));
        assert_eq!(s.tooltips().hover(), Some("A"));

        s.on_pointer_down(center(&s, 50));
        assert_eq!(s.tooltips().hover(), None);
        s.on_pointer_move(center(&s, 10));
        assert_eq!(s.tooltips().hover(), None);
    }

    #[test]
    fn typed_value_commits_on_enter() {
        let mut s = session(0, 1000, &[("A", 100), ("B", 900)]);
        assert!(s.on_double_click(center(&s, 100)));
        assert!(s.is_entering());
        assert_eq!(s.tooltips().selected(), Some("A"));

        type_keys(&mut s, "250");
        assert!(s.on_key(EntryKey::Enter));
        assert_eq!(s.value("A"), Some(250));
        assert!(!s.is_entering());
        assert_eq!(s.tooltips().selected(), None);
        assert_eq!(
            s.take_notifications(),
            vec![Notification::ValueChanged {
                name: "A".to_string(),
                value: 250
            }]
        );
    }

    #[test]
    fn backspace_drops_last_digit() {
        let mut s = session(0, 1000, &[("A", 100)]);
        s.on_double_click(center(&s, 100));
        type_keys(&mut s, "250");
        s.on_key(EntryKey::Backspace);
        s.on_key(EntryKey::Enter);
        assert_eq!(s.value("A"), Some(25));
    }

    #[test]
    fn crossing_value_is_rejected() {
        let mut s = session(0, 1000, &[("A", 100), ("B", 200)]);
        s.on_double_click(center(&s, 100));
        type_keys(&mut s, "300");
        s.on_key(EntryKey::Enter);

        assert_eq!(s.value("A"), Some(100));
        let events = s.take_notifications();
        assert!(matches!(
            events.as_slice(),
            [Notification::Rejected {
                value: 300,
                reason: SliderError::OutOfBounds { .. },
                ..
            }]
        ));
    }

    #[test]
    fn enter_without_digits_commits_nothing() {
        let mut s = session(0, 100, &[("A", 50)]);
        s.on_double_click(center(&s, 50));
        assert!(s.on_key(EntryKey::Enter));
        assert!(!s.is_entering());
        assert_eq!(s.value("A"), Some(50));
        assert!(s.take_notifications().is_empty());
    }

    #[test]
    fn escape_cancels_entry() {
        let mut s = session(0, 100, &[("A", 50)]);
        s.on_double_click(center(&s, 50));
        type_keys(&mut s, "7");
        s.on_key(EntryKey::Escape);
        assert_eq!(s.value("A"), Some(50));
        assert!(s.take_notifications().is_empty());
    }

    #[test]
    fn focus_loss_commits_entry() {
        let mut s = session(0, 100, &[("A", 50)]);
        s.on_double_click(center(&s, 50));
        type_keys(&mut s, "42");
        assert!(s.on_focus_lost());
        assert_eq!(s.value("A"), Some(42));
        assert!(!s.is_entering());
    }

    #[test]
    fn clicking_elsewhere_commits_entry() {
        let mut s = session(0, 100, &[("A", 50)]);
        s.on_double_click(center(&s, 50));
        type_keys(&mut s, "42");
        s.on_pointer_down(Point::new(0.0, 0.0));
        assert_eq!(s.value("A"), Some(42));
    }

    #[test]
    fn double_click_in_leading_region_edits_first_handle() {
        let mut s = session(0, 100, &[("A", 50), ("B", 80)]);
        let y = center(&s, 50).y;
        let x = s.track().value_to_offset(20);
        assert!(s.on_double_click(Point::new(x, y)));
        assert_eq!(s.entry_handle(), Some("A"));
    }

    #[test]
    fn double_click_on_empty_space_does_nothing() {
        let mut s = session(0, 100, &[("A", 10)]);
        let y = center(&s, 10).y;
        let x = s.track().value_to_offset(60);
        assert!(!s.on_double_click(Point::new(x, y)));
        assert!(!s.is_entering());
    }

    #[test]
    fn keys_without_entry_are_ignored() {
        let mut s = session(0, 100, &[("A", 50)]);
        assert!(!s.on_key(EntryKey::Digit(4)));
        assert!(!s.on_key(EntryKey::Enter));
    }

    #[test]
    fn caret_blinks_only_while_entering() {
        let mut s = session(0, 100, &[("A", 50)]);
        assert!(!s.advance_caret(Duration::from_secs(1)));
        s.on_double_click(center(&s, 50));
        assert!(s.advance_caret(crate::settings::caret::BLINK_PERIOD));
    }
}
