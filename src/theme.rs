// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;
const PANEL_BACKGROUND: Color = BASE_C;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_I;
const STRONG_UI_TEXT: Color = BASE_O;

// ============================================================================
// TRACK (the rounded bar handles slide along)
// ============================================================================
const TRACK_FILL: Color = Color::from_rgb8(0xf0, 0xf8, 0xff); // AliceBlue

// ============================================================================
// HANDLES
// ============================================================================
const HANDLE_OUTER: Color = Color::from_rgb8(0x00, 0xbf, 0xff); // DeepSkyBlue
const HANDLE_INNER: Color = Color::from_rgb8(0xff, 0xff, 0xff);

// ============================================================================
// READOUTS
// ============================================================================
const TOOLTIP_BACKGROUND: Color = TRACK_FILL;
const TOOLTIP_FOREGROUND: Color = HANDLE_OUTER;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
    pub const PANEL: Color = super::PANEL_BACKGROUND;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const STRONG: Color = super::STRONG_UI_TEXT;
}

/// Default track colors
pub mod track {
    use super::Color;
    pub const FILL: Color = super::TRACK_FILL;
}

/// Default handle colors
pub mod handle {
    use super::Color;
    pub const OUTER: Color = super::HANDLE_OUTER;
    pub const INNER: Color = super::HANDLE_INNER;
}

/// Default readout colors
pub mod tooltip {
    use super::Color;
    pub const BACKGROUND: Color = super::TOOLTIP_BACKGROUND;
    pub const FOREGROUND: Color = super::TOOLTIP_FOREGROUND;
}

/// Sizes for rendering
pub mod size {
    /// Outline width around the track bar
    pub const TRACK_OUTLINE_WIDTH: f64 = 2.0;
    /// Width of legend tick marks and the milestone line
    pub const LEGEND_LINE_WIDTH: f64 = 1.75;
    /// Inner inset of a handle's white core
    pub const HANDLE_INSET: f64 = 3.0;
    /// Inner inset of a hovered handle's white core
    pub const HANDLE_HOVER_INSET: f64 = 5.0;
    /// Readout bubble corner radius
    pub const TOOLTIP_RADIUS: f64 = 10.0;
    /// Readout bubble height (excluding the pointer notch)
    pub const TOOLTIP_HEIGHT: f64 = 40.0;
    /// Horizontal padding added around the widest readout line
    pub const TOOLTIP_PADDING: f64 = 20.0;
    /// Readout outline width
    pub const TOOLTIP_OUTLINE_WIDTH: f64 = 3.0;
    /// Text entry caret width
    pub const CARET_WIDTH: f64 = 2.0;
    /// Font size for readouts and legend labels
    pub const FONT_SIZE: f32 = 12.0;
}

/// Darken a color by a fixed step per channel, as used for track outlines
pub fn darker(color: Color) -> Color {
    const STEP: u8 = 50;
    let rgba = color.to_rgba8();
    Color::from_rgba8(
        rgba.r.saturating_sub(STEP),
        rgba.g.saturating_sub(STEP),
        rgba.b.saturating_sub(STEP),
        rgba.a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_saturates_at_zero() {
        let dark = darker(Color::from_rgb8(0x20, 0x80, 0xff)).to_rgba8();
        assert_eq!((dark.r, dark.g, dark.b, dark.a), (0x00, 0x4e, 0xcd, 0xff));
    }
}
