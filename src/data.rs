// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Application state for the slider demo

use crate::config::SliderConfig;
use crate::editing::{Notification, SliderSession};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use xilem::WindowId;

/// How many notifications the event log keeps
const EVENT_LOG_LEN: usize = 8;

/// Main application state
pub struct AppState {
    /// The slider, as last reported by the widget
    pub session: Arc<SliderSession>,

    /// Most recent notifications, newest first
    pub events: VecDeque<String>,

    /// Bumped on every caret blink tick while a value is being typed
    pub caret_ticks: u64,

    /// Shared with the caret blink task; set while a value is being typed
    pub caret_active: Arc<AtomicBool>,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(session: SliderSession) -> Self {
        Self {
            session: Arc::new(session),
            events: VecDeque::new(),
            caret_ticks: 0,
            caret_active: Arc::new(AtomicBool::new(false)),
            error_message: None,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Build the state from a config, falling back to an empty slider
    /// (and showing the error) if the config's handles don't fit
    pub fn from_config(config: &SliderConfig) -> Self {
        match SliderSession::from_config(config) {
            Ok(session) => Self::new(session),
            Err(e) => {
                tracing::error!("Failed to build slider: {}", e);
                let mut state = Self::new(SliderSession::default());
                state.error_message = Some(e.to_string());
                state
            }
        }
    }

    /// Whether the caret clock should be running
    pub fn text_entry_active(&self) -> bool {
        self.session.is_entering()
    }

    /// Take a session update from the slider widget
    pub fn apply_slider_update(&mut self, session: SliderSession, notifications: Vec<Notification>) {
        self.session = Arc::new(session);
        self.caret_active
            .store(self.session.is_entering(), Ordering::SeqCst);
        for notification in notifications {
            self.record(&notification);
        }
    }

    /// A tick that arrives after the entry closed is dropped
    pub fn caret_tick(&mut self) {
        if self.text_entry_active() {
            self.caret_ticks = self.caret_ticks.wrapping_add(1);
        }
    }

    fn record(&mut self, notification: &Notification) {
        let line = match notification {
            Notification::ValueChanged { name, value } => format!("{name} = {value}"),
            // Intermediate drag steps are too frequent for the log
            Notification::ValueUpdated { .. } => return,
            Notification::Rejected {
                name,
                value,
                reason,
            } => format!("{name}: {value} rejected ({reason})"),
        };
        tracing::info!("{}", line);
        self.events.push_front(line);
        self.events.truncate(EVENT_LOG_LEN);
    }

    /// One line per handle, for the status readout under the slider
    pub fn value_summary(&self) -> String {
        self.session
            .handles()
            .iter()
            .map(|h| format!("{}: {}", h.name(), h.value()))
            .collect::<Vec<_>>()
            .join("   ")
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}
