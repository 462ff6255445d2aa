// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Slider data model: axis, handles, and the ordered registry

pub mod axis;
pub mod error;
pub mod handle;
pub mod registry;

pub use axis::Axis;
pub use error::SliderError;
pub use handle::Handle;
pub use registry::{Bounds, HandleRegistry};
