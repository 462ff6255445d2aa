// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Multi-handle slider widget

mod keyboard;
mod paint;
mod pointer;
mod view;

pub use view::{SliderView, slider_view};

use crate::editing::{Notification, SliderSession};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, BrushIndex, ChildrenIds, EventCtx, LayoutCtx, PaintCtx,
    PointerButton, PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef,
    RegisterCtx, TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use parley::{FontContext, LayoutContext};
use pointer::ClickTracker;
use std::sync::Arc;

/// Width used when the parent doesn't bound it
const DEFAULT_WIDTH: f64 = 400.0;

/// The slider widget
pub struct MultiSliderWidget {
    /// Working copy of the slider state
    pub session: SliderSession,

    pub(super) clicks: ClickTracker,

    pub(super) font_cx: FontContext,
    pub(super) layout_cx: LayoutContext<BrushIndex>,
}

impl MultiSliderWidget {
    pub fn new(session: Arc<SliderSession>) -> Self {
        Self {
            session: (*session).clone(),
            clicks: ClickTracker::default(),
            font_cx: FontContext::default(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Snapshot the session and drain its queued notifications
    pub(super) fn take_update(&mut self) -> SliderUpdate {
        SliderUpdate {
            notifications: self.session.take_notifications(),
            session: self.session.clone(),
        }
    }

    /// Close any open entry or drag after focus moved elsewhere
    ///
    /// Returns the update to report when something changed.
    fn focus_lost(&mut self) -> Option<SliderUpdate> {
        self.session.on_focus_lost().then(|| self.take_update())
    }

    /// Repaint and report after an input handler ran
    pub(super) fn after_input(&mut self, ctx: &mut EventCtx<'_>, redraw: bool) {
        if redraw {
            ctx.request_render();
        }
        if redraw || self.session.has_notifications() {
            ctx.submit_action::<SliderUpdate>(self.take_update());
        }
    }
}

/// Action emitted by the slider widget
#[derive(Debug, Clone)]
pub struct SliderUpdate {
    pub session: SliderSession,
    pub notifications: Vec<Notification>,
}

impl Widget for MultiSliderWidget {
    type Action = SliderUpdate;

    fn accepts_focus(&self) -> bool {
        // Typed values arrive as keyboard events
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, _props: &mut PropertiesMut<'_>, event: &Update) {
        match event {
            Update::FocusChanged(false) => {
                if let Some(update) = self.focus_lost() {
                    ctx.submit_action::<SliderUpdate>(update);
                    ctx.request_render();
                }
            }
            Update::HoveredChanged(false) => {
                if self.session.on_pointer_leave() {
                    ctx.submit_action::<SliderUpdate>(self.take_update());
                    ctx.request_render();
                }
            }
            _ => {}
        }
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let height = SliderSession::preferred_height();
        let width = if bc.max().width.is_finite() {
            bc.max().width
        } else {
            DEFAULT_WIDTH
        };
        let size = bc.constrain(Size::new(width, height));
        self.session.set_width(size.width);
        size
    }

    fn paint(&mut self, _ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_slider(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_up(ctx, state);
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        if let TextEvent::Keyboard(key_event) = event {
            self.handle_key_event(ctx, key_event);
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Slider
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        let axis = self.session.axis();
        node.set_min_numeric_value(axis.minimum() as f64);
        node.set_max_numeric_value(axis.maximum() as f64);

        let values: Vec<String> = self
            .session
            .handles()
            .iter()
            .map(|h| format!("{} {}", h.name(), h.value()))
            .collect();
        node.set_label(values.join(", "));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
