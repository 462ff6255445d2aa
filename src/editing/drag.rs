// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer drag state machine for moving one handle.
//!
//! A drag freezes the dragged handle's neighbor values when it starts.
//! Every move clamps the handle's pixel position so it stays half a handle
//! away from a neighbor (so the two never overlap on screen), converts the
//! position back to a value, and writes it through the registry.

use super::notify::{Notification, Outbox};
use super::track::Track;
use crate::model::{Bounds, HandleRegistry};
use kurbo::Point;

/// State of one in-progress drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    handle: String,
    /// Distance from the handle's left edge to where it was grabbed
    pointer_offset: f64,
    bounds: Bounds,
    start_value: i64,
}

impl DragSession {
    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn pointer_offset(&self) -> f64 {
        self.pointer_offset
    }

    /// Neighbor values captured when the drag started
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn start_value(&self) -> i64 {
        self.start_value
    }

    /// Range of legal left-edge positions, or `None` if the neighbors are
    /// too close for the handle to move at all
    fn position_range(&self, track: &Track) -> Option<(f64, f64)> {
        let margin = track.handle_radius();
        let mut lo = track.value_to_offset(self.bounds.lower);
        let mut hi = track.value_to_offset(self.bounds.upper);
        if self.bounds.has_lower_neighbor() {
            lo += margin;
        }
        if self.bounds.has_upper_neighbor() {
            hi -= margin;
        }
        (lo <= hi).then_some((lo, hi))
    }
}

/// Drag states
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Turns pointer events into handle value updates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Start dragging `name`, grabbed at `pointer`
    ///
    /// Returns `None` (and stays idle) if the handle doesn't exist.
    pub fn begin(
        &mut self,
        registry: &HandleRegistry,
        track: &Track,
        name: &str,
        pointer: Point,
    ) -> Option<&DragSession> {
        let position = registry.position_of(name)?;
        let value = registry.handles()[position].value();
        let rect = track.handle_rect(value);
        let bounds = registry.get_bounds(position);

        tracing::debug!(
            "[DragController::begin] '{}' at {} within {:?}, grabbed at {:?}",
            name,
            value,
            bounds.as_pair(),
            pointer
        );

        self.state = DragState::Dragging(DragSession {
            handle: name.to_string(),
            pointer_offset: pointer.x - rect.x0,
            bounds,
            start_value: value,
        });
        self.session()
    }

    /// Move the dragged handle toward `pointer`
    ///
    /// Emits `ValueUpdated` for every step and `ValueChanged` when the value
    /// actually moved. Returns the handle's value after the step, or `None`
    /// when idle.
    pub fn drag_to(
        &mut self,
        registry: &mut HandleRegistry,
        track: &Track,
        pointer: Point,
        outbox: &mut Outbox,
    ) -> Option<i64> {
        let DragState::Dragging(session) = &self.state else {
            return None;
        };
        let current = registry.get(&session.handle)?.value();

        // A boxed-in handle (or a slot with no legal value) holds still
        let target = session.position_range(track).and_then(|(lo, hi)| {
            let candidate = (pointer.x - session.pointer_offset).clamp(lo, hi);
            session.bounds.clamp(track.offset_to_value(candidate))
        });

        let mut value = current;
        if let Some(target) = target
            && target != current
        {
            match registry.set_value(&session.handle, target) {
                Ok(()) => {
                    value = target;
                    outbox.push(Notification::ValueChanged {
                        name: session.handle.clone(),
                        value,
                    });
                }
                Err(err) => tracing::warn!("Drag step refused: {}", err),
            }
        }

        outbox.push(Notification::ValueUpdated {
            name: session.handle.clone(),
            value,
        });
        Some(value)
    }

    /// Finish the drag, returning the session that ended
    pub fn end(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                tracing::debug!("[DragController::end] released '{}'", session.handle);
                Some(session)
            }
            DragState::Idle => None,
        }
    }
}
