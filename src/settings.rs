// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Slider settings and layout constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, stroke widths) belongs in `theme.rs`.

// ============================================================================
// TRACK LAYOUT
// ============================================================================
/// Height of the slider body (bar, handles, legend)
const CONTROL_HEIGHT: f64 = 80.0;

/// Diameter of a handle in pixels
const HANDLE_DIAMETER: f64 = 20.0;

/// Horizontal padding between the widget edge and the track ends
const TRACK_PADDING: f64 = 12.0;

// ============================================================================
// READOUTS
// ============================================================================
/// Space the widget reserves above and below the body for readouts
const TOOLTIP_BAND: f64 = 60.0;

/// Gap between a handle and the tip of its readout
const TOOLTIP_GAP: f64 = 4.0;

// ============================================================================
// TEXT ENTRY
// ============================================================================
/// Caret blink period in milliseconds
const CARET_BLINK_MS: u64 = 750;

// ============================================================================
// POINTER
// ============================================================================
/// Max delay between clicks for a double-click
const DOUBLE_CLICK_TIME_MS: u64 = 500;

/// Max distance between clicks for a double-click
const DOUBLE_CLICK_DISTANCE_PX: f64 = 10.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Track geometry
pub mod track {
    /// Height of the slider body
    pub const CONTROL_HEIGHT: f64 = super::CONTROL_HEIGHT;

    /// Handle diameter in pixels
    pub const HANDLE_DIAMETER: f64 = super::HANDLE_DIAMETER;

    /// Padding on the left and right of the track
    pub const PADDING: f64 = super::TRACK_PADDING;
}

/// Floating readout placement
pub mod tooltip {
    /// Reserved readout space on each side of the body
    pub const BAND: f64 = super::TOOLTIP_BAND;

    /// Distance from the handle to the readout tip
    pub const GAP: f64 = super::TOOLTIP_GAP;
}

/// Text entry caret
pub mod caret {
    use std::time::Duration;

    /// Time between caret visibility toggles
    pub const BLINK_PERIOD: Duration = Duration::from_millis(super::CARET_BLINK_MS);
}

/// Double-click detection
pub mod pointer {
    use std::time::Duration;

    pub const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(super::DOUBLE_CLICK_TIME_MS);
    pub const DOUBLE_CLICK_DISTANCE: f64 = super::DOUBLE_CLICK_DISTANCE_PX;
}
