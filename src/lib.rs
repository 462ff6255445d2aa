// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Multislider: an ordered multi-handle range slider built with Xilem
//!
//! The slider core (`model`, `editing`) is toolkit independent and drives
//! rendering through the [`render::RenderAdapter`] trait. `components`
//! wraps it in a masonry widget and Xilem view.

use std::path::PathBuf;

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::core::fork;
use xilem::{EventLoopBuilder, WidgetView, WindowView, Xilem, window};

mod caret_blink;
pub mod components;
pub mod config;
pub mod data;
pub mod editing;
pub mod model;
pub mod render;
pub mod settings;
pub mod theme;
mod views;

use config::SliderConfig;
use data::AppState;
use views::slider_demo;

/// Entry point for the slider demo application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("multislider=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let config = load_config_from_args();
    let initial_state = AppState::from_config(&config);

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Load the slider config named on the command line, or the demo config
fn load_config_from_args() -> SliderConfig {
    let Some(arg) = std::env::args().nth(1) else {
        return SliderConfig::defect_sizes();
    };

    let path = PathBuf::from(arg);
    match SliderConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{:#}", e);
            tracing::error!("Usage: multislider [path/to/slider.toml]");
            SliderConfig::defect_sizes()
        }
    }
}

/// Build the single demo window
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = demo_with_caret_blink(state);

    let window_size = LogicalSize::new(720.0, 420.0);
    let window_view = window(state.main_window_id, "Multislider", content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}

/// Demo view with the caret blink clock running alongside it
///
/// The clock only posts ticks while a value is being typed, so an idle
/// slider doesn't cause rebuilds.
fn demo_with_caret_blink(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let active = state.caret_active.clone();
    fork(
        slider_demo(state),
        xilem::view::task_raw(
            move |proxy| {
                caret_blink::blink(proxy, settings::caret::BLINK_PERIOD, active.clone())
            },
            |state: &mut AppState, _msg: caret_blink::CaretTick| {
                state.caret_tick();
            },
        ),
    )
}
