// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Outgoing notification records for the host

use crate::model::SliderError;
use std::collections::VecDeque;

/// Something the host should know about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A handle's committed value changed (drag step or text entry)
    ValueChanged { name: String, value: i64 },
    /// Fired on every intermediate drag step, changed or not
    ValueUpdated { name: String, value: i64 },
    /// A text entry commit was refused because it broke ordering
    Rejected {
        name: String,
        value: i64,
        reason: SliderError,
    },
}

impl Notification {
    pub fn name(&self) -> &str {
        match self {
            Notification::ValueChanged { name, .. }
            | Notification::ValueUpdated { name, .. }
            | Notification::Rejected { name, .. } => name,
        }
    }

    /// Whether this is on the commit-only channel
    pub fn is_commit(&self) -> bool {
        matches!(self, Notification::ValueChanged { .. })
    }
}

/// FIFO queue the session appends to and the host drains
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outbox {
    queue: VecDeque<Notification>,
}

impl Outbox {
    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Take every pending notification in the order they were raised
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }
}
