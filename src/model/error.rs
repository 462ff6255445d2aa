// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by the handle registry and slider configuration.
//!
//! Every error is local and recoverable: the operation that produced it left
//! the registry (and the axis) exactly as it was before the call.

use thiserror::Error;

/// Reasons a slider mutation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    /// A handle with this name already exists
    #[error("a handle named '{0}' already exists")]
    DuplicateName(String),

    /// No handle with this name exists
    #[error("no handle named '{0}'")]
    UnknownHandle(String),

    /// The value would break the ordering of handles along the axis
    #[error("value {value} for '{name}' is outside the legal range {lower}..{upper}")]
    OutOfBounds {
        name: String,
        value: i64,
        lower: i64,
        upper: i64,
    },

    /// The axis minimum is not strictly below its maximum
    #[error("axis minimum {minimum} must be below maximum {maximum}")]
    DegenerateAxis { minimum: i64, maximum: i64 },

    /// The axis span doesn't fit in an `i64`
    #[error("axis {minimum}..{maximum} is too wide")]
    AxisTooWide { minimum: i64, maximum: i64 },

    /// Legend intervals must be positive
    #[error("legend interval must be positive, got {0}")]
    InvalidLegendInterval(u32),
}
