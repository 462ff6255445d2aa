// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A named, colored marker at one value along the axis

use masonry::vello::peniko::Color;

/// A single slider handle
///
/// The name is the handle's identity and cannot change once the handle
/// has been added to a registry. Values are only mutated through
/// [`HandleRegistry`](super::HandleRegistry) so ordering is always checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    name: String,
    pub(super) value: i64,
    color: Color,
}

impl Handle {
    pub(super) fn new(name: String, value: i64, color: Color) -> Self {
        Self { name, value, color }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
