// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Painting for MultiSliderWidget
//!
//! `SceneRenderer` turns the session's draw requests into vello shapes and
//! parley text.

use super::MultiSliderWidget;
use crate::editing::Placement;
use crate::editing::track::{LegendEdge, LegendMode};
use crate::render::{HandleDraw, LegendDraw, RenderAdapter, ToolTipDescriptor, TrackDraw};
use crate::theme;
use kurbo::{Affine, BezPath, Circle, Line, Point, Rect, Stroke};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};
use parley::{FontContext, FontFamily, FontStack, GenericFamily, Layout, LayoutContext};

/// Length of a legend tick below the bar
const TICK_LENGTH: f64 = 6.0;
/// Gap between the bar (or milestone line) and a legend label
const LABEL_GAP: f64 = 4.0;
/// Distance from the bar to the milestone line
const MILESTONE_DROP: f64 = 14.0;
const MILESTONE_DOT_RADIUS: f64 = 3.0;
/// Height of the notch between a readout and its handle
const NOTCH_HEIGHT: f64 = 6.0;

impl MultiSliderWidget {
    pub(super) fn paint_slider(&mut self, scene: &mut Scene) {
        let mut renderer = SceneRenderer {
            scene,
            font_cx: &mut self.font_cx,
            layout_cx: &mut self.layout_cx,
        };
        self.session.render(&mut renderer);
    }
}

/// A `RenderAdapter` that paints into a vello scene
pub struct SceneRenderer<'a> {
    scene: &'a mut Scene,
    font_cx: &'a mut FontContext,
    layout_cx: &'a mut LayoutContext<BrushIndex>,
}

impl SceneRenderer<'_> {
    fn layout_text(&mut self, text: &str) -> Layout<BrushIndex> {
        let mut builder = self.layout_cx.ranged_builder(self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(theme::size::FONT_SIZE));
        builder.push_default(StyleProperty::FontStack(FontStack::Single(
            FontFamily::Generic(GenericFamily::SansSerif),
        )));
        builder.push_default(StyleProperty::Brush(BrushIndex(0)));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    fn draw_layout(&mut self, layout: &Layout<BrushIndex>, origin: Point, color: Color) {
        let brushes = vec![Brush::Solid(color)];
        render_text(
            self.scene,
            Affine::translate((origin.x, origin.y)),
            layout,
            &brushes,
            false,
        );
    }

    fn stroke(&mut self, shape: &impl kurbo::Shape, width: f64, color: Color) {
        let brush = Brush::Solid(color);
        self.scene
            .stroke(&Stroke::new(width), Affine::IDENTITY, &brush, None, shape);
    }
}

impl RenderAdapter for SceneRenderer<'_> {
    fn draw_track(&mut self, track: &TrackDraw) {
        fill_color(self.scene, &track.bar, track.fill);
        self.stroke(&track.bar, theme::size::TRACK_OUTLINE_WIDTH, track.outline);
    }

    fn draw_legend_mark(&mut self, legend: &LegendDraw) {
        let mark = &legend.mark;
        let line_top = match legend.mode {
            LegendMode::Default => {
                let tick = Line::new((mark.x, legend.bar.y1), (mark.x, legend.bar.y1 + TICK_LENGTH));
                self.stroke(&tick, theme::size::LEGEND_LINE_WIDTH, legend.color);
                legend.bar.y1 + TICK_LENGTH
            }
            LegendMode::Milestone => {
                let y = legend.bar.y1 + MILESTONE_DROP;
                if mark.edge == LegendEdge::Start {
                    let baseline = Line::new((legend.bar.x0, y), (legend.bar.x1, y));
                    self.stroke(&baseline, theme::size::LEGEND_LINE_WIDTH, legend.color);
                }
                fill_color(
                    self.scene,
                    &Circle::new((mark.x, y), MILESTONE_DOT_RADIUS),
                    legend.color,
                );
                y + MILESTONE_DOT_RADIUS
            }
        };

        let layout = self.layout_text(&mark.value.to_string());
        let width = f64::from(layout.width());
        let x = match mark.edge {
            LegendEdge::Start => mark.x,
            LegendEdge::Middle => mark.x - width / 2.0,
            LegendEdge::End => mark.x - width,
        };
        // Keep labels inside the widget body
        let x = x.clamp(legend.body.x0, (legend.body.x1 - width).max(legend.body.x0));
        self.draw_layout(&layout, Point::new(x, line_top + LABEL_GAP), legend.color);
    }

    fn draw_handle(&mut self, handle: &HandleDraw) {
        let center = handle.rect.center();
        let radius = handle.rect.width() / 2.0;
        fill_color(self.scene, &Circle::new(center, radius), handle.color);

        let inset = if handle.hovered {
            theme::size::HANDLE_HOVER_INSET
        } else {
            theme::size::HANDLE_INSET
        };
        fill_color(
            self.scene,
            &Circle::new(center, (radius - inset).max(0.0)),
            theme::handle::INNER,
        );

        if handle.selected {
            self.stroke(
                &Circle::new(center, radius),
                theme::size::TRACK_OUTLINE_WIDTH,
                theme::darker(handle.color),
            );
        }
    }

    fn draw_tooltip(&mut self, tooltip: &ToolTipDescriptor) {
        let title = self.layout_text(&tooltip.title);
        let value_text = match (&tooltip.input, tooltip.value) {
            (Some(input), _) => input.digits.map(|d| d.to_string()).unwrap_or_default(),
            (None, Some(value)) => value.to_string(),
            (None, None) => String::new(),
        };
        let value = (!value_text.is_empty()).then(|| self.layout_text(&value_text));

        let text_width = f64::from(title.width())
            .max(value.as_ref().map_or(0.0, |l| f64::from(l.width())));
        let width = text_width + theme::size::TOOLTIP_PADDING;
        let height = theme::size::TOOLTIP_HEIGHT;
        let anchor = tooltip.anchor;

        let (bubble, notch_base) = match tooltip.placement {
            Placement::Above => {
                let bottom = anchor.y - NOTCH_HEIGHT;
                (
                    Rect::new(anchor.x - width / 2.0, bottom - height, anchor.x + width / 2.0, bottom),
                    bottom,
                )
            }
            Placement::Below => {
                let top = anchor.y + NOTCH_HEIGHT;
                (
                    Rect::new(anchor.x - width / 2.0, top, anchor.x + width / 2.0, top + height),
                    top,
                )
            }
        };

        let mut notch = BezPath::new();
        notch.move_to((anchor.x - NOTCH_HEIGHT, notch_base));
        notch.line_to(anchor);
        notch.line_to((anchor.x + NOTCH_HEIGHT, notch_base));
        notch.close_path();

        let shape = bubble.to_rounded_rect(theme::size::TOOLTIP_RADIUS);
        let colors = tooltip.colors;
        fill_color(self.scene, &shape, colors.background);
        let notch_brush = Brush::Solid(colors.foreground);
        self.scene.fill(
            peniko::Fill::NonZero,
            Affine::IDENTITY,
            &notch_brush,
            None,
            &notch,
        );
        self.stroke(&shape, theme::size::TOOLTIP_OUTLINE_WIDTH, colors.foreground);

        let line_height = height / 2.0;
        let title_y = bubble.y0 + (line_height - f64::from(title.height())) / 2.0;
        let title_x = anchor.x - f64::from(title.width()) / 2.0;
        self.draw_layout(&title, Point::new(title_x, title_y), colors.foreground);

        let value_width = value.as_ref().map_or(0.0, |l| f64::from(l.width()));
        let value_x = anchor.x - value_width / 2.0;
        let value_y = bubble.y0 + line_height;
        if let Some(layout) = &value {
            self.draw_layout(layout, Point::new(value_x, value_y), colors.foreground);
        }

        if let Some(input) = tooltip.input
            && input.caret_visible
        {
            let x = value_x + value_width + 1.0;
            let caret = Line::new((x, value_y + 2.0), (x, bubble.y1 - 4.0));
            self.stroke(&caret, theme::size::CARET_WIDTH, colors.foreground);
        }
    }
}
