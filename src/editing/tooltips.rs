// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Floating value readouts and the rules for which ones are open.
//!
//! Three categories exist side by side:
//! - **Selected**: the handle being dragged or edited (at most one)
//! - **Hover**: the handle under the pointer while idle (at most one)
//! - **Peers**: name-only readouts for every other handle during a drag
//!
//! Opening a readout of a category replaces any open readout of that same
//! category. Readouts are keyed by handle name and hold no geometry; their
//! position is derived from the handle value at paint time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How peer readouts are laid out during a drag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolTipLayout {
    /// Every readout on the same side of the track
    #[default]
    Down,
    /// Odd-positioned handles get their readout on the opposite side
    Alternate,
}

/// Readout category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolTipKind {
    Selected,
    Hover,
    Peer,
}

/// Which side of the track a readout hangs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

impl Placement {
    pub fn flipped(self) -> Self {
        match self {
            Placement::Above => Placement::Below,
            Placement::Below => Placement::Above,
        }
    }

    pub fn is_below(self) -> bool {
        self == Placement::Below
    }
}

/// Where a readout of `kind` for the handle at `position` goes
pub fn placement_for(
    kind: ToolTipKind,
    position: usize,
    layout: ToolTipLayout,
    upside_down: bool,
) -> Placement {
    let base = if upside_down {
        Placement::Below
    } else {
        Placement::Above
    };
    match (kind, layout) {
        (ToolTipKind::Peer, ToolTipLayout::Alternate) if position % 2 == 1 => base.flipped(),
        _ => base,
    }
}

/// Tracks which readouts are currently open
#[derive(Debug, Clone, PartialEq)]
pub struct ToolTipCoordinator {
    selected: Option<String>,
    hover: Option<String>,
    peers: BTreeSet<String>,
    hover_enabled: bool,
}

impl Default for ToolTipCoordinator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ToolTipCoordinator {
    pub fn new(hover_enabled: bool) -> Self {
        Self {
            selected: None,
            hover: None,
            peers: BTreeSet::new(),
            hover_enabled,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn hover(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    pub fn peers(&self) -> impl Iterator<Item = &str> {
        self.peers.iter().map(String::as_str)
    }

    pub fn has_peer(&self, name: &str) -> bool {
        self.peers.contains(name)
    }

    pub fn hover_enabled(&self) -> bool {
        self.hover_enabled
    }

    /// Enable or disable hover readouts; disabling closes the open one
    pub fn set_hover_enabled(&mut self, enabled: bool) {
        self.hover_enabled = enabled;
        if !enabled {
            self.hover = None;
        }
    }

    /// Open the selected readout for `name`, returning the one it replaced
    pub fn open_selected(&mut self, name: &str) -> Option<String> {
        let previous = self.selected.replace(name.to_string());
        if self.hover.as_deref() == Some(name) {
            self.hover = None;
        }
        previous.filter(|p| p != name)
    }

    pub fn close_selected(&mut self) -> Option<String> {
        self.selected.take()
    }

    /// Show the hover readout for `name`
    ///
    /// Returns true if the open hover readout changed. The selected handle
    /// never gets a second, hover readout.
    pub fn show_hover(&mut self, name: &str) -> bool {
        if !self.hover_enabled || self.selected.as_deref() == Some(name) {
            return self.clear_hover();
        }
        if self.hover.as_deref() == Some(name) {
            return false;
        }
        self.hover = Some(name.to_string());
        true
    }

    /// Close the hover readout; true if one was open
    pub fn clear_hover(&mut self) -> bool {
        self.hover.take().is_some()
    }

    /// Replace all peer readouts with one per name, skipping the selected
    /// handle
    pub fn open_peers<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.peers.clear();
        let selected = self.selected.as_deref();
        self.peers.extend(
            names
                .into_iter()
                .filter(|n| Some(*n) != selected)
                .map(str::to_string),
        );
    }

    /// Close every peer readout at once, returning how many were open
    pub fn close_peers(&mut self) -> usize {
        let count = self.peers.len();
        self.peers.clear();
        count
    }

    /// Close every readout bound to `name`
    pub fn forget(&mut self, name: &str) {
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        if self.hover.as_deref() == Some(name) {
            self.hover = None;
        }
        self.peers.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_selected_replaces_previous() {
        let mut tips = ToolTipCoordinator::default();
        assert_eq!(tips.open_selected("A"), None);
        assert_eq!(tips.open_selected("B"), Some("A".to_string()));
        assert_eq!(tips.selected(), Some("B"));
        assert_eq!(tips.open_selected("B"), None);
    }

    #[test]
    fn at_most_one_hover() {
        let mut tips = ToolTipCoordinator::default();
        assert!(tips.show_hover("A"));
        assert!(!tips.show_hover("A"));
        assert!(tips.show_hover("B"));
        assert_eq!(tips.hover(), Some("B"));
        assert!(tips.clear_hover());
        assert_eq!(tips.hover(), None);
    }

    #[test]
    fn hover_disabled_shows_nothing() {
        let mut tips = ToolTipCoordinator::new(false);
        assert!(!tips.show_hover("A"));
        assert_eq!(tips.hover(), None);

        let mut tips = ToolTipCoordinator::default();
        tips.show_hover("A");
        tips.set_hover_enabled(false);
        assert_eq!(tips.hover(), None);
    }

    #[test]
    fn selected_handle_gets_no_hover() {
        let mut tips = ToolTipCoordinator::default();
        tips.show_hover("A");
        tips.open_selected("A");
        assert_eq!(tips.hover(), None);
        assert!(!tips.show_hover("A"));
    }

    #[test]
    fn peers_skip_selected_and_close_atomically() {
        let mut tips = ToolTipCoordinator::default();
        tips.open_selected("B");
        tips.open_peers(["A", "B", "C"]);

        let peers: Vec<&str> = tips.peers().collect();
        assert_eq!(peers, vec!["A", "C"]);

        assert_eq!(tips.close_peers(), 2);
        assert_eq!(tips.peers().count(), 0);
    }

    #[test]
    fn alternate_layout_flips_odd_peers() {
        let layout = ToolTipLayout::Alternate;
        assert_eq!(placement_for(ToolTipKind::Peer, 0, layout, false), Placement::Above);
        assert_eq!(placement_for(ToolTipKind::Peer, 1, layout, false), Placement::Below);
        assert_eq!(placement_for(ToolTipKind::Peer, 1, layout, true), Placement::Above);
        assert_eq!(
            placement_for(ToolTipKind::Selected, 1, layout, false),
            Placement::Above
        );
        assert_eq!(
            placement_for(ToolTipKind::Peer, 1, ToolTipLayout::Down, false),
            Placement::Above
        );
    }

    #[test]
    fn forget_closes_everything_for_a_handle() {
        let mut tips = ToolTipCoordinator::default();
        tips.open_selected("A");
        tips.open_peers(["B"]);
        tips.show_hover("B");

        tips.forget("A");
        tips.forget("B");
        assert_eq!(tips.selected(), None);
        assert_eq!(tips.hover(), None);
        assert!(!tips.has_peer("B"));
    }
}
