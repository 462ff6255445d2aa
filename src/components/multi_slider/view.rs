// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for MultiSliderWidget

use super::{MultiSliderWidget, SliderUpdate};
use crate::editing::{Notification, SliderSession};
use crate::settings;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a slider view from a session, with a callback that receives the
/// updated session and the notifications raised since the last update
///
/// `caret_tick` is a counter the app bumps on every caret blink tick; each
/// change advances the caret of an open text entry by one blink period.
pub fn slider_view<State, F>(
    session: Arc<SliderSession>,
    caret_tick: u64,
    on_update: F,
) -> SliderView<State, F>
where
    F: Fn(&mut State, SliderSession, Vec<Notification>),
{
    SliderView {
        session,
        caret_tick,
        on_update,
        phantom: PhantomData,
    }
}

/// The Xilem View for MultiSliderWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct SliderView<State, F> {
    session: Arc<SliderSession>,
    caret_tick: u64,
    on_update: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for SliderView<State, F> {}

impl<State: 'static, F: Fn(&mut State, SliderSession, Vec<Notification>) + 'static>
    View<State, (), ViewCtx> for SliderView<State, F>
{
    type Element = Pod<MultiSliderWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = MultiSliderWidget::new(self.session.clone());
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        let mut widget = element.downcast::<MultiSliderWidget>();

        if !Arc::ptr_eq(&self.session, &prev.session) {
            tracing::debug!("[SliderView::rebuild] Session Arc changed, updating widget");
            // Keep the width from the last layout
            let width = widget.widget.session.width();
            widget.widget.session = (*self.session).clone();
            widget.widget.session.set_width(width);
            widget.ctx.request_render();
        }

        if self.caret_tick != prev.caret_tick
            && widget.widget.session.advance_caret(settings::caret::BLINK_PERIOD)
        {
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<SliderUpdate>() {
            Some(update) => {
                tracing::debug!(
                    "[SliderView::message] SliderUpdate with {} notifications",
                    update.notifications.len()
                );
                (self.on_update)(app_state, update.session, update.notifications);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
