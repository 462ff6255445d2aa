// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Slider interaction: geometry, drag, readouts and text entry

pub mod caret;
pub mod drag;
pub mod notify;
pub mod session;
pub mod text_entry;
pub mod tooltips;
pub mod track;

pub use drag::{DragController, DragSession, DragState};
pub use notify::{Notification, Outbox};
pub use session::{SliderSession, SliderStyle};
pub use text_entry::{EntryKey, TextEntryOverlay};
pub use tooltips::{Placement, ToolTipCoordinator, ToolTipKind, ToolTipLayout};
pub use track::{LegendMode, Track};
