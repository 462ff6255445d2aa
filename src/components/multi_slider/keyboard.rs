// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard handling for MultiSliderWidget

use super::MultiSliderWidget;
use crate::editing::EntryKey;
use masonry::core::EventCtx;
use masonry::core::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};

/// Map a key to a text entry key, if it is one
pub(super) fn entry_key(key: &Key) -> Option<EntryKey> {
    match key {
        Key::Character(text) => text.chars().next().and_then(EntryKey::from_char),
        Key::Named(NamedKey::Enter) => Some(EntryKey::Enter),
        Key::Named(NamedKey::Backspace) => Some(EntryKey::Backspace),
        Key::Named(NamedKey::Escape) => Some(EntryKey::Escape),
        _ => None,
    }
}

impl MultiSliderWidget {
    pub(super) fn handle_key_event(&mut self, ctx: &mut EventCtx<'_>, key_event: &KeyboardEvent) {
        if key_event.state != KeyState::Down || !self.session.is_entering() {
            return;
        }

        let Some(key) = entry_key(&key_event.key) else {
            return;
        };
        tracing::debug!("[MultiSliderWidget] entry key {:?}", key);

        let redraw = self.session.on_key(key);
        if redraw {
            ctx.set_handled();
        }
        self.after_input(ctx, redraw);
    }
}
