// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Track geometry: mapping between axis values and pixel offsets.
//!
//! A `Track` is a throwaway value built from the current axis and widget
//! size whenever something needs geometry. Handle rectangles are always
//! derived from handle values through it and never cached, so what is
//! painted and what is hit-tested can't drift apart.
//!
//! Offsets returned by [`Track::value_to_offset`] are the *left edge* of a
//! handle, i.e. the handle center minus its radius.

use crate::model::Axis;
use crate::settings;
use kurbo::{Insets, Point, Rect, RoundedRect};
use serde::{Deserialize, Serialize};

/// How legend marks are drawn below the track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendMode {
    /// Short tick marks on the bar with labels underneath
    #[default]
    Default,
    /// A baseline with a dot per mark and labels below it
    Milestone,
}

/// Where along the track a legend mark sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendEdge {
    Start,
    Middle,
    End,
}

/// One labelled position on the legend
#[derive(Debug, Clone, PartialEq)]
pub struct LegendMark {
    pub x: f64,
    pub value: i64,
    pub edge: LegendEdge,
}

/// Pixel-space layout of one slider body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    axis: Axis,
    width: f64,
    top: f64,
    padding: Insets,
    handle_diameter: f64,
}

impl Track {
    /// Build a track for a widget of the given width whose body starts at
    /// `top`. Only the horizontal padding is used.
    pub fn new(axis: Axis, width: f64, top: f64, padding: Insets) -> Self {
        Self {
            axis,
            width,
            top,
            padding,
            handle_diameter: settings::track::HANDLE_DIAMETER,
        }
    }

    pub fn with_handle_diameter(mut self, diameter: f64) -> Self {
        self.handle_diameter = diameter;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn handle_diameter(&self) -> f64 {
        self.handle_diameter
    }

    pub fn handle_radius(&self) -> f64 {
        self.handle_diameter / 2.0
    }

    /// Width available for handle centers
    pub fn track_width(&self) -> f64 {
        self.width - self.padding.x0 - self.padding.x1
    }

    /// Left edge of a handle sitting at `value`
    pub fn value_to_offset(&self, value: i64) -> f64 {
        let span = self.axis.span() as f64;
        let percentage = value.saturating_sub(self.axis.minimum()) as f64 * 100.0 / span;
        (percentage * self.track_width() / 100.0).round() - self.handle_radius() + self.padding.x0
    }

    /// Value of a handle whose left edge is at `offset`, rounded to the
    /// nearest integer. Not clamped to the axis.
    pub fn offset_to_value(&self, offset: f64) -> i64 {
        let track_width = self.track_width();
        if track_width <= 0.0 {
            return self.axis.minimum();
        }
        let center = offset + self.handle_radius() - self.padding.x0;
        let scaled = center * self.axis.span() as f64 / track_width;
        self.axis.minimum().saturating_add(scaled.round() as i64)
    }

    /// Height of the body (bar, handles, legend)
    pub fn body_height(&self) -> f64 {
        settings::track::CONTROL_HEIGHT
    }

    /// The area the slider body occupies
    pub fn body_rect(&self) -> Rect {
        Rect::new(0.0, self.top, self.width, self.top + self.body_height())
    }

    /// The rounded bar handles slide along
    pub fn bar_rect(&self) -> RoundedRect {
        let height = self.body_height();
        let y0 = self.top + height * 3.0 / 10.0;
        let thickness = height / 10.0;
        Rect::new(
            self.padding.x0,
            y0,
            self.width - self.padding.x1,
            y0 + thickness,
        )
        .to_rounded_rect(thickness / 2.0)
    }

    /// Top of every handle rectangle, centering handles on the bar
    fn handle_top(&self) -> f64 {
        let height = self.body_height();
        self.top + height * 3.0 / 10.0 - (self.handle_diameter - height / 10.0) / 2.0
    }

    /// Bounding rectangle of a handle at `value`
    pub fn handle_rect(&self, value: i64) -> Rect {
        Rect::from_origin_size(
            (self.value_to_offset(value), self.handle_top()),
            (self.handle_diameter, self.handle_diameter),
        )
    }

    /// Whether `point` falls on the handle at `value`
    pub fn contains_handle(&self, value: i64, point: Point) -> bool {
        self.handle_rect(value).contains(point)
    }

    /// Point a readout for a handle at `value` hangs from
    ///
    /// Above the handle by default, below it when `below` is set.
    pub fn tooltip_anchor(&self, value: i64, below: bool) -> Point {
        let rect = self.handle_rect(value);
        let gap = settings::tooltip::GAP;
        if below {
            Point::new(rect.center().x, rect.y1 + gap)
        } else {
            Point::new(rect.center().x, rect.y0 - gap)
        }
    }

    /// Region between the track start and the first handle
    ///
    /// Double-clicking here opens text entry for the first handle.
    pub fn leading_region(&self, first_value: i64) -> Rect {
        let handle = self.handle_rect(first_value);
        Rect::new(self.padding.x0, handle.y0, handle.x0.max(self.padding.x0), handle.y1)
    }

    /// Legend marks for `interval` intermediate labels plus both ends
    pub fn legend_marks(&self, interval: u32) -> Vec<LegendMark> {
        let steps = interval.saturating_add(1);
        let span = self.axis.span() as f64;
        (0..=steps)
            .map(|i| {
                let fraction = f64::from(i) / f64::from(steps);
                let edge = match i {
                    0 => LegendEdge::Start,
                    i if i == steps => LegendEdge::End,
                    _ => LegendEdge::Middle,
                };
                LegendMark {
                    x: (self.padding.x0 + self.track_width() * fraction).round(),
                    value: self.axis.minimum().saturating_add((span * fraction).round() as i64),
                    edge,
                }
            })
            .collect()
    }
}
