// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Application views

mod demo;

pub use demo::slider_demo;
