// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the multi-handle slider

pub mod multi_slider;

pub use multi_slider::slider_view;
