// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Slider session - all state for one multi-handle slider
//!
//! The session owns the handle registry and the interaction state machines
//! (drag, readouts, text entry) and exposes explicit input methods. It has
//! no dependency on a windowing toolkit; the masonry widget feeds it events
//! and hands it a render adapter at paint time.

mod frame;
mod hit_testing;
mod input;

use super::drag::DragController;
use super::notify::{Notification, Outbox};
use super::text_entry::TextEntryOverlay;
use super::tooltips::{ToolTipCoordinator, ToolTipLayout};
use super::track::{LegendMode, Track};
use crate::config::SliderConfig;
use crate::model::{Axis, Handle, HandleRegistry, SliderError};
use crate::{settings, theme};
use kurbo::Insets;
use masonry::vello::peniko::Color;

/// Appearance options that don't affect handle values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    pub track_color: Color,
    /// Color given to handles added without one
    pub handle_color: Color,
    pub tooltip_background: Color,
    pub tooltip_foreground: Color,
    pub legend_interval: u32,
    pub legend_mode: LegendMode,
    pub tooltip_layout: ToolTipLayout,
    pub upside_down: bool,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_color: theme::track::FILL,
            handle_color: theme::handle::OUTER,
            tooltip_background: theme::tooltip::BACKGROUND,
            tooltip_foreground: theme::tooltip::FOREGROUND,
            legend_interval: 1,
            legend_mode: LegendMode::Default,
            tooltip_layout: ToolTipLayout::Down,
            upside_down: false,
        }
    }
}

impl SliderStyle {
    fn from_config(config: &SliderConfig) -> Self {
        Self {
            track_color: config.track_color.0,
            handle_color: config.handle_color.0,
            tooltip_background: config.tooltip_background.0,
            tooltip_foreground: config.tooltip_foreground.0,
            legend_interval: config.legend_interval,
            legend_mode: config.legend_mode,
            tooltip_layout: config.tooltip_layout,
            upside_down: config.upside_down,
        }
    }
}

/// One multi-handle slider
#[derive(Debug, Clone)]
pub struct SliderSession {
    registry: HandleRegistry,
    style: SliderStyle,

    /// Widget width; geometry is rebuilt from this on every use
    width: f64,

    drag: DragController,
    tooltips: ToolTipCoordinator,
    entry: TextEntryOverlay,
    outbox: Outbox,

    /// Handle under the pointer, drawn with a thicker ring
    hovered: Option<String>,
}

impl Default for SliderSession {
    fn default() -> Self {
        Self::new(Axis::default())
    }
}

impl SliderSession {
    pub fn new(axis: Axis) -> Self {
        Self {
            registry: HandleRegistry::new(axis),
            style: SliderStyle::default(),
            width: 0.0,
            drag: DragController::new(),
            tooltips: ToolTipCoordinator::default(),
            entry: TextEntryOverlay::new(),
            outbox: Outbox::default(),
            hovered: None,
        }
    }

    /// Build a session and its initial handles from a config
    pub fn from_config(config: &SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        let mut session = Self::new(config.axis()?);
        session.style = SliderStyle::from_config(config);
        session.tooltips.set_hover_enabled(config.hover_display);

        for spec in &config.handles {
            let color = spec.color.map(|c| c.0);
            session.add_handle(spec.name.clone(), color, None, spec.value)?;
        }
        Ok(session)
    }

    // ===== Handles =====

    pub fn registry(&self) -> &HandleRegistry {
        &self.registry
    }

    pub fn handles(&self) -> &[Handle] {
        self.registry.handles()
    }

    pub fn value(&self, name: &str) -> Option<i64> {
        self.registry.get(name).map(Handle::value)
    }

    /// Add a handle; `color` falls back to the style's handle color
    pub fn add_handle(
        &mut self,
        name: impl Into<String>,
        color: Option<Color>,
        position: Option<usize>,
        value: Option<i64>,
    ) -> Result<usize, SliderError> {
        let name = name.into();
        let color = color.unwrap_or(self.style.handle_color);
        let position = self
            .registry
            .add_handle(name.clone(), color, position, value)?;
        tracing::info!(
            "Added handle '{}' at position {} with value {:?}",
            name,
            position,
            self.value(&name)
        );
        Ok(position)
    }

    /// Remove a handle and everything bound to it
    pub fn remove_handle(&mut self, name: &str) -> Result<Handle, SliderError> {
        let handle = self.registry.remove_handle(name)?;
        self.tooltips.forget(name);
        if self.drag.session().is_some_and(|s| s.handle() == name) {
            self.drag.end();
            self.tooltips.close_peers();
        }
        if self.entry.entry().is_some_and(|e| e.handle() == name) {
            self.entry.close();
        }
        if self.hovered.as_deref() == Some(name) {
            self.hovered = None;
        }
        Ok(handle)
    }

    /// Move a handle from the host side; no notification is raised
    pub fn set_value(&mut self, name: &str, value: i64) -> Result<(), SliderError> {
        self.registry.set_value(name, value)
    }

    // ===== Axis =====

    pub fn axis(&self) -> Axis {
        self.registry.axis()
    }

    /// Replace both extremes; the previous axis is kept on error
    pub fn set_axis(&mut self, minimum: i64, maximum: i64) -> Result<(), SliderError> {
        self.registry.set_axis(Axis::new(minimum, maximum)?)
    }

    pub fn set_minimum(&mut self, minimum: i64) -> Result<(), SliderError> {
        let axis = self.axis().with_minimum(minimum)?;
        self.registry.set_axis(axis)
    }

    pub fn set_maximum(&mut self, maximum: i64) -> Result<(), SliderError> {
        let axis = self.axis().with_maximum(maximum)?;
        self.registry.set_axis(axis)
    }

    // ===== Style =====

    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SliderStyle) -> Result<(), SliderError> {
        if style.legend_interval == 0 {
            return Err(SliderError::InvalidLegendInterval(0));
        }
        self.style = style;
        Ok(())
    }

    pub fn set_legend_interval(&mut self, interval: u32) -> Result<(), SliderError> {
        if interval == 0 {
            return Err(SliderError::InvalidLegendInterval(interval));
        }
        self.style.legend_interval = interval;
        Ok(())
    }

    pub fn set_legend_mode(&mut self, mode: LegendMode) {
        self.style.legend_mode = mode;
    }

    pub fn set_tooltip_layout(&mut self, layout: ToolTipLayout) {
        self.style.tooltip_layout = layout;
    }

    pub fn set_upside_down(&mut self, upside_down: bool) {
        self.style.upside_down = upside_down;
    }

    pub fn set_track_color(&mut self, color: Color) {
        self.style.track_color = color;
    }

    pub fn set_tooltip_colors(&mut self, background: Color, foreground: Color) {
        self.style.tooltip_background = background;
        self.style.tooltip_foreground = foreground;
    }

    pub fn hover_display(&self) -> bool {
        self.tooltips.hover_enabled()
    }

    pub fn set_hover_display(&mut self, enabled: bool) {
        self.tooltips.set_hover_enabled(enabled);
    }

    // ===== Geometry =====

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
    }

    /// Height the widget wants: the body plus a readout band on each side
    pub fn preferred_height() -> f64 {
        settings::track::CONTROL_HEIGHT + 2.0 * settings::tooltip::BAND
    }

    /// Geometry for the current axis and width
    pub fn track(&self) -> Track {
        let padding = settings::track::PADDING;
        Track::new(
            self.axis(),
            self.width,
            settings::tooltip::BAND,
            Insets::new(padding, 0.0, padding, 0.0),
        )
    }

    // ===== Interaction state =====

    pub fn tooltips(&self) -> &ToolTipCoordinator {
        &self.tooltips
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn dragged_handle(&self) -> Option<&str> {
        self.drag.session().map(|s| s.handle())
    }

    pub fn is_entering(&self) -> bool {
        self.entry.is_entering()
    }

    pub fn entry_handle(&self) -> Option<&str> {
        self.entry.entry().map(|e| e.handle())
    }

    pub fn hovered_handle(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn has_notifications(&self) -> bool {
        !self.outbox.is_empty()
    }

    /// Drain queued notifications, oldest first
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.outbox.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorSpec, HandleSpec};

    pub(super) fn session(minimum: i64, maximum: i64, items: &[(&str, i64)]) -> SliderSession {
        let mut session = SliderSession::new(Axis::new(minimum, maximum).unwrap());
        for (name, value) in items {
            session.add_handle(*name, None, None, Some(*value)).unwrap();
        }
        // Track width of exactly `span` pixels: one pixel per unit
        session.set_width((maximum - minimum) as f64 + 2.0 * settings::track::PADDING);
        session
    }

    #[test]
    fn builds_from_config() {
        let session = SliderSession::from_config(&SliderConfig::defect_sizes()).unwrap();
        let names: Vec<&str> = session.handles().iter().map(|h| h.name()).collect();
        assert_eq!(
            names,
            vec!["Small Defect Size", "Medium Defect Size", "Large Defect Size"]
        );
        assert_eq!(session.value("Medium Defect Size"), Some(300));
        assert_eq!(session.style().legend_interval, 4);
    }

    #[test]
    fn config_handle_without_color_uses_style_color() {
        let config = SliderConfig {
            handle_color: ColorSpec(Color::from_rgb8(1, 2, 3)),
            handles: vec![HandleSpec {
                name: "A".to_string(),
                color: None,
                value: None,
            }],
            ..SliderConfig::default()
        };
        let session = SliderSession::from_config(&config).unwrap();
        assert_eq!(session.handles()[0].color(), Color::from_rgb8(1, 2, 3));
        assert_eq!(session.value("A"), Some(50));
    }

    #[test]
    fn config_with_crossing_handles_fails() {
        let config = SliderConfig {
            handles: vec![
                HandleSpec {
                    name: "A".to_string(),
                    color: None,
                    value: Some(60),
                },
                HandleSpec {
                    name: "B".to_string(),
                    color: None,
                    value: Some(40),
                },
            ],
            ..SliderConfig::default()
        };
        assert!(matches!(
            SliderSession::from_config(&config),
            Err(SliderError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn defect_size_scenario() {
        let mut s = session(
            0,
            1000,
            &[("Small", 0), ("Medium", 300), ("Large", 500)],
        );
        assert_eq!(s.registry().get_bounds(1).as_pair(), (0, 500));

        let track = s.track();
        let margin = track.handle_radius() as i64;
        let grab = track.handle_rect(300).center();
        s.on_pointer_down(grab);
        let target = track.handle_rect(600).center();
        s.on_pointer_move(target);
        s.on_pointer_up(target);

        let medium = s.value("Medium").unwrap();
        assert!(medium <= 500 - margin, "Medium ended at {medium}");
        assert!(s.value("Small").unwrap() < medium);
    }

    #[test]
    fn degenerate_axis_keeps_previous() {
        let mut s = session(0, 100, &[]);
        assert_eq!(
            s.set_axis(5, 5),
            Err(SliderError::DegenerateAxis {
                minimum: 5,
                maximum: 5
            })
        );
        assert!(s.set_minimum(100).is_err());
        assert_eq!(s.axis(), Axis::new(0, 100).unwrap());
        s.set_maximum(500).unwrap();
        assert_eq!(s.axis().maximum(), 500);
    }

    #[test]
    fn zero_legend_interval_is_refused() {
        let mut s = session(0, 100, &[]);
        assert_eq!(
            s.set_legend_interval(0),
            Err(SliderError::InvalidLegendInterval(0))
        );
        assert_eq!(s.style().legend_interval, 1);
        s.set_legend_interval(5).unwrap();
        assert_eq!(s.style().legend_interval, 5);
    }

    #[test]
    fn duplicate_add_leaves_size_unchanged() {
        let mut s = session(0, 100, &[("A", 10)]);
        assert_eq!(
            s.add_handle("A", None, None, Some(50)),
            Err(SliderError::DuplicateName("A".to_string()))
        );
        assert_eq!(s.handles().len(), 1);
    }

    #[test]
    fn removing_dragged_handle_ends_drag() {
        let mut s = session(0, 100, &[("A", 10), ("B", 50)]);
        let grab = s.track().handle_rect(50).center();
        s.on_pointer_down(grab);
        assert_eq!(s.dragged_handle(), Some("B"));

        s.remove_handle("B").unwrap();
        assert!(!s.is_dragging());
        assert_eq!(s.tooltips().selected(), None);
        assert_eq!(s.tooltips().peers().count(), 0);
    }
}
