// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Draw requests emitted by the slider and the adapter that consumes them.
//!
//! The slider core never touches pixels. Each frame it describes the track,
//! the legend, every handle and every open readout, in painting order, to a
//! [`RenderAdapter`]. The masonry widget implements the adapter on top of a
//! vello `Scene`; tests implement it by recording the requests.

use crate::editing::ToolTipKind;
use crate::editing::tooltips::Placement;
use crate::editing::track::{LegendMark, LegendMode};
use kurbo::{Point, Rect, RoundedRect};
use masonry::vello::peniko::Color;

/// The bar and body of the slider
#[derive(Debug, Clone, PartialEq)]
pub struct TrackDraw {
    pub body: Rect,
    pub bar: RoundedRect,
    pub fill: Color,
    pub outline: Color,
}

/// One legend label (and tick or milestone dot)
#[derive(Debug, Clone, PartialEq)]
pub struct LegendDraw {
    pub mark: LegendMark,
    pub mode: LegendMode,
    pub body: Rect,
    pub bar: Rect,
    pub color: Color,
}

/// One handle
#[derive(Debug, Clone, PartialEq)]
pub struct HandleDraw {
    pub name: String,
    pub value: i64,
    pub rect: Rect,
    pub color: Color,
    pub hovered: bool,
    pub selected: bool,
}

/// Colors of a floating readout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolTipColors {
    pub background: Color,
    pub foreground: Color,
}

/// Text entry state shown inside the selected readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputDraw {
    /// Digits typed so far, `None` before the first digit
    pub digits: Option<i64>,
    pub caret_visible: bool,
}

/// A floating readout for one handle
#[derive(Debug, Clone, PartialEq)]
pub struct ToolTipDescriptor {
    pub kind: ToolTipKind,
    /// Handle name, drawn as the header line
    pub title: String,
    /// Value line; `None` for name-only peer readouts
    pub value: Option<i64>,
    /// Tip of the readout's pointer notch
    pub anchor: Point,
    pub placement: Placement,
    pub colors: ToolTipColors,
    /// Present while this readout is accepting typed digits
    pub input: Option<InputDraw>,
}

impl ToolTipDescriptor {
    pub fn is_input_entry(&self) -> bool {
        self.input.is_some()
    }
}

/// Consumer of slider draw requests
pub trait RenderAdapter {
    fn draw_track(&mut self, track: &TrackDraw);
    fn draw_legend_mark(&mut self, legend: &LegendDraw);
    fn draw_handle(&mut self, handle: &HandleDraw);
    fn draw_tooltip(&mut self, tooltip: &ToolTipDescriptor);
}

/// Adapter that keeps every request, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct DrawLog {
    pub tracks: Vec<TrackDraw>,
    pub legend: Vec<LegendDraw>,
    pub handles: Vec<HandleDraw>,
    pub tooltips: Vec<ToolTipDescriptor>,
}

#[cfg(test)]
impl DrawLog {
    pub fn tooltip(&self, kind: ToolTipKind) -> Option<&ToolTipDescriptor> {
        self.tooltips.iter().find(|t| t.kind == kind)
    }

    pub fn tooltips_of(&self, kind: ToolTipKind) -> Vec<&ToolTipDescriptor> {
        self.tooltips.iter().filter(|t| t.kind == kind).collect()
    }
}

#[cfg(test)]
impl RenderAdapter for DrawLog {
    fn draw_track(&mut self, track: &TrackDraw) {
        self.tracks.push(track.clone());
    }

    fn draw_legend_mark(&mut self, legend: &LegendDraw) {
        self.legend.push(legend.clone());
    }

    fn draw_handle(&mut self, handle: &HandleDraw) {
        self.handles.push(handle.clone());
    }

    fn draw_tooltip(&mut self, tooltip: &ToolTipDescriptor) {
        self.tooltips.push(tooltip.clone());
    }
}
