// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Direct numeric entry on top of the selected readout.
//!
//! The overlay is either displaying a value or accumulating digits for one
//! handle. Digits only ever grow the accumulator; a digit that would
//! overflow it (or leave it unchanged, like a leading zero) is dropped.
//! Nothing typed means nothing to commit: Enter on an empty entry closes the
//! overlay without reporting a value.

use super::caret::Caret;
use std::time::Duration;

/// Keys the overlay understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKey {
    Digit(u8),
    Backspace,
    Enter,
    Escape,
}

impl EntryKey {
    /// Map a typed character to an entry key, if it is a decimal digit
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| EntryKey::Digit(d as u8))
    }
}

/// An in-progress entry for one handle
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    handle: String,
    digits: Option<i64>,
    caret: Caret,
}

impl TextEntry {
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Value typed so far, `None` if nothing has been typed
    pub fn digits(&self) -> Option<i64> {
        self.digits
    }

    pub fn caret_visible(&self) -> bool {
        self.caret.is_visible()
    }

    fn push_digit(&mut self, digit: u8) -> bool {
        let digit = i64::from(digit);
        let next = match self.digits {
            None => Some(digit),
            Some(current) => current
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .filter(|&v| v > current),
        };
        match next {
            Some(value) => {
                self.digits = Some(value);
                true
            }
            None => false,
        }
    }

    fn pop_digit(&mut self) -> bool {
        match self.digits {
            None => false,
            Some(current) if current < 10 => {
                self.digits = None;
                true
            }
            Some(current) => {
                self.digits = Some(current / 10);
                true
            }
        }
    }
}

/// What the overlay wants the caller to do after an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Nothing changed
    Ignored,
    /// The entry changed and should be repainted
    Redraw,
    /// The entry finished with a value for `handle`
    Commit { handle: String, value: i64 },
    /// The entry finished without a value
    Closed { handle: String },
}

/// Display / Entering state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextEntryOverlay {
    entry: Option<TextEntry>,
}

impl TextEntryOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_entering(&self) -> bool {
        self.entry.is_some()
    }

    pub fn entry(&self) -> Option<&TextEntry> {
        self.entry.as_ref()
    }

    /// Start entering a value for `handle`, discarding any previous entry
    pub fn begin(&mut self, handle: impl Into<String>) {
        let handle = handle.into();
        tracing::debug!("Text entry started for '{}'", handle);
        self.entry = Some(TextEntry {
            handle,
            digits: None,
            caret: Caret::new(),
        });
    }

    pub fn handle_key(&mut self, key: EntryKey) -> EntryOutcome {
        match key {
            EntryKey::Enter => return self.commit(),
            EntryKey::Escape => return self.close(),
            EntryKey::Digit(_) | EntryKey::Backspace => {}
        }

        let Some(entry) = self.entry.as_mut() else {
            return EntryOutcome::Ignored;
        };

        let changed = match key {
            EntryKey::Digit(d) if d <= 9 => entry.push_digit(d),
            EntryKey::Backspace => entry.pop_digit(),
            _ => false,
        };

        if changed {
            entry.caret.reset();
            EntryOutcome::Redraw
        } else {
            EntryOutcome::Ignored
        }
    }

    /// Losing focus commits exactly like Enter
    pub fn focus_lost(&mut self) -> EntryOutcome {
        self.commit()
    }

    /// Drop the entry without committing
    pub fn close(&mut self) -> EntryOutcome {
        match self.entry.take() {
            Some(entry) => EntryOutcome::Closed {
                handle: entry.handle,
            },
            None => EntryOutcome::Ignored,
        }
    }

    /// Advance the caret blink; true if a redraw is needed
    pub fn advance_caret(&mut self, delta: Duration) -> bool {
        self.entry
            .as_mut()
            .is_some_and(|entry| entry.caret.advance(delta))
    }

    fn commit(&mut self) -> EntryOutcome {
        match self.entry.take() {
            Some(TextEntry {
                handle,
                digits: Some(value),
                ..
            }) => EntryOutcome::Commit { handle, value },
            Some(TextEntry { handle, .. }) => EntryOutcome::Closed { handle },
            None => EntryOutcome::Ignored,
        }
    }
}
