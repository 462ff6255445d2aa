// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Frame description for SliderSession
//!
//! Paint order: track, legend, handles, then readouts (peers, hover,
//! selected) so the selected readout ends up on top.

use super::SliderSession;
use crate::editing::tooltips::{ToolTipKind, placement_for};
use crate::editing::track::Track;
use crate::render::{
    HandleDraw, InputDraw, LegendDraw, RenderAdapter, ToolTipColors, ToolTipDescriptor, TrackDraw,
};
use crate::theme;

impl SliderSession {
    /// Describe the current frame to `adapter`
    pub fn render(&self, adapter: &mut impl RenderAdapter) {
        let track = self.track();
        let outline = theme::darker(self.style.track_color);
        let body = track.body_rect();
        let bar = track.bar_rect();

        adapter.draw_track(&TrackDraw {
            body,
            bar,
            fill: self.style.track_color,
            outline,
        });

        for mark in track.legend_marks(self.style.legend_interval) {
            adapter.draw_legend_mark(&LegendDraw {
                mark,
                mode: self.style.legend_mode,
                body,
                bar: bar.rect(),
                color: outline,
            });
        }

        let selected = self.tooltips.selected();
        for handle in self.registry.handles() {
            adapter.draw_handle(&HandleDraw {
                name: handle.name().to_string(),
                value: handle.value(),
                rect: track.handle_rect(handle.value()),
                color: handle.color(),
                hovered: self.hovered.as_deref() == Some(handle.name()),
                selected: selected == Some(handle.name()),
            });
        }

        for (position, handle) in self.registry.handles().iter().enumerate() {
            if self.tooltips.has_peer(handle.name()) {
                if let Some(tip) = self.tooltip(&track, ToolTipKind::Peer, position) {
                    adapter.draw_tooltip(&tip);
                }
            }
        }

        let open = [
            (ToolTipKind::Hover, self.tooltips.hover()),
            (ToolTipKind::Selected, selected),
        ];
        for (kind, name) in open {
            let Some(position) = name.and_then(|n| self.registry.position_of(n)) else {
                continue;
            };
            if let Some(tip) = self.tooltip(&track, kind, position) {
                adapter.draw_tooltip(&tip);
            }
        }
    }

    fn tooltip(&self, track: &Track, kind: ToolTipKind, position: usize) -> Option<ToolTipDescriptor> {
        let handle = self.registry.handles().get(position)?;
        let placement = placement_for(
            kind,
            position,
            self.style.tooltip_layout,
            self.style.upside_down,
        );

        let input = match (kind, self.entry.entry()) {
            (ToolTipKind::Selected, Some(entry)) if entry.handle() == handle.name() => {
                Some(InputDraw {
                    digits: entry.digits(),
                    caret_visible: entry.caret_visible(),
                })
            }
            _ => None,
        };
        let value = match kind {
            ToolTipKind::Peer => None,
            ToolTipKind::Selected | ToolTipKind::Hover => Some(handle.value()),
        };

        Some(ToolTipDescriptor {
            kind,
            title: handle.name().to_string(),
            value,
            anchor: track.tooltip_anchor(handle.value(), placement.is_below()),
            placement,
            colors: ToolTipColors {
                background: self.style.tooltip_background,
                foreground: self.style.tooltip_foreground,
            },
            input,
        })
    }
}
