// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Demo view: one slider with a value summary and an event log

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, flex_col, label, sized_box};

use crate::components::slider_view;
use crate::data::AppState;
use crate::theme;

const GAP: f64 = 12.0;

/// The single demo window's content
pub fn slider_demo(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let error = match &state.error_message {
        Some(message) => Either::A(
            label(message.clone())
                .text_size(14.0)
                .color(theme::text::STRONG),
        ),
        None => Either::B(sized_box(label("")).height(0.px())),
    };

    flex_col((
        label("Defect Size").text_size(18.0).color(theme::text::STRONG),
        error,
        slider_view(
            state.session.clone(),
            state.caret_ticks,
            |state: &mut AppState, session, notifications| {
                state.apply_slider_update(session, notifications);
            },
        ),
        label(state.value_summary())
            .text_size(14.0)
            .color(theme::text::PRIMARY),
        event_log(state).flex(1.0),
    ))
    .gap(GAP.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
    .padding(GAP * 2.0)
    .background_color(theme::app::BACKGROUND)
}

/// Recent value changes, newest first
fn event_log(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let text = if state.events.is_empty() {
        "Drag a handle, or double-click one and type a value".to_string()
    } else {
        state.events.iter().cloned().collect::<Vec<_>>().join("\n")
    };

    sized_box(
        flex_col((label(text).text_size(14.0).color(theme::text::PRIMARY),))
            .cross_axis_alignment(CrossAxisAlignment::Start)
            .padding(GAP),
    )
    .expand_width()
    .background_color(theme::app::PANEL)
    .corner_radius(8.0)
}
