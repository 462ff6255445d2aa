// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Multislider demo: `multislider [path/to/slider.toml]`

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    multislider::run(EventLoop::with_user_event())
}
