// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Host-facing slider configuration.
//!
//! A `SliderConfig` can be built in code or loaded from TOML:
//!
//! ```toml
//! minimum = 0
//! maximum = 500
//! legend_interval = 4
//! legend_mode = "milestone"
//! tooltip_layout = "alternate"
//! handle_color = "deepskyblue"
//!
//! [[handles]]
//! name = "Small Defect Size"
//! color = "red"
//! value = 100
//! ```
//!
//! Colors accept any CSS color string.

use crate::editing::ToolTipLayout;
use crate::editing::track::LegendMode;
use crate::model::{Axis, SliderError};
use crate::theme;
use anyhow::{Context, Result};
use masonry::vello::peniko::Color;
use masonry::vello::peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A color that (de)serializes as a CSS color string
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorSpec(pub Color);

impl TryFrom<String> for ColorSpec {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color(&value)
            .map(|c| ColorSpec(c.to_alpha_color::<Srgb>()))
            .map_err(|e| format!("invalid color '{value}': {e:?}"))
    }
}

impl From<ColorSpec> for String {
    fn from(spec: ColorSpec) -> Self {
        let c = spec.0.to_rgba8();
        if c.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        }
    }
}

/// A handle to create when the slider is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleSpec {
    pub name: String,
    /// Falls back to the slider's `handle_color`
    #[serde(default)]
    pub color: Option<ColorSpec>,
    /// Falls back to the midpoint of the free gap
    #[serde(default)]
    pub value: Option<i64>,
}

/// Everything a host can configure on a slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub minimum: i64,
    pub maximum: i64,
    /// Number of intermediate legend labels between the two ends
    pub legend_interval: u32,
    pub legend_mode: LegendMode,
    pub track_color: ColorSpec,
    pub handle_color: ColorSpec,
    pub tooltip_background: ColorSpec,
    pub tooltip_foreground: ColorSpec,
    /// Show a readout for the handle under the pointer
    pub hover_display: bool,
    pub tooltip_layout: ToolTipLayout,
    /// Hang readouts below the track instead of above it
    pub upside_down: bool,
    pub handles: Vec<HandleSpec>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            legend_interval: 1,
            legend_mode: LegendMode::Default,
            track_color: ColorSpec(theme::track::FILL),
            handle_color: ColorSpec(theme::handle::OUTER),
            tooltip_background: ColorSpec(theme::tooltip::BACKGROUND),
            tooltip_foreground: ColorSpec(theme::tooltip::FOREGROUND),
            hover_display: true,
            tooltip_layout: ToolTipLayout::Down,
            upside_down: false,
            handles: Vec::new(),
        }
    }
}

impl SliderConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SliderConfig = toml::from_str(text).context("Failed to parse slider config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid slider config in {}", path.display()))?;
        tracing::info!(
            "Loaded slider config from {} ({} handles)",
            path.display(),
            config.handles.len()
        );
        Ok(config)
    }

    pub fn axis(&self) -> Result<Axis, SliderError> {
        Axis::new(self.minimum, self.maximum)
    }

    /// Check the parts of the config that don't depend on handle order
    pub fn validate(&self) -> Result<(), SliderError> {
        self.axis()?;
        if self.legend_interval == 0 {
            return Err(SliderError::InvalidLegendInterval(self.legend_interval));
        }
        Ok(())
    }

    /// The demo configuration: three defect size handles
    pub fn defect_sizes() -> Self {
        let handle = |name: &str, color: Color, value: i64| HandleSpec {
            name: name.to_string(),
            color: Some(ColorSpec(color)),
            value: Some(value),
        };
        Self {
            maximum: 500,
            legend_interval: 4,
            handles: vec![
                handle("Small Defect Size", Color::from_rgb8(0xff, 0x00, 0x00), 100),
                handle("Medium Defect Size", Color::from_rgb8(0x00, 0x80, 0x00), 300),
                handle("Large Defect Size", Color::from_rgb8(0x00, 0x00, 0xff), 450),
            ],
            ..Self::default()
        }
    }
}
