// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The bounded numeric range handles live on

use super::SliderError;
use serde::{Deserialize, Serialize};

/// Inclusive value range `[minimum, maximum]` with `minimum < maximum`
///
/// `maximum - minimum` always fits in an `i64`, so spans and gaps between
/// values on the axis can be computed without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAxis", into = "RawAxis")]
pub struct Axis {
    minimum: i64,
    maximum: i64,
}

impl Axis {
    /// Create an axis, rejecting empty, inverted or overly wide ranges
    pub fn new(minimum: i64, maximum: i64) -> Result<Self, SliderError> {
        if minimum >= maximum {
            return Err(SliderError::DegenerateAxis { minimum, maximum });
        }
        if maximum.checked_sub(minimum).is_none() {
            return Err(SliderError::AxisTooWide { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    /// Width of the range in value units (always positive)
    pub fn span(&self) -> i64 {
        self.maximum - self.minimum
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }

    /// Replace the minimum, keeping the current maximum
    pub fn with_minimum(&self, minimum: i64) -> Result<Self, SliderError> {
        Self::new(minimum, self.maximum)
    }

    /// Replace the maximum, keeping the current minimum
    pub fn with_maximum(&self, maximum: i64) -> Result<Self, SliderError> {
        Self::new(self.minimum, maximum)
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
        }
    }
}

/// Unvalidated serde shape of [`Axis`]
#[derive(Serialize, Deserialize)]
struct RawAxis {
    minimum: i64,
    maximum: i64,
}

impl TryFrom<RawAxis> for Axis {
    type Error = SliderError;

    fn try_from(raw: RawAxis) -> Result<Self, Self::Error> {
        Axis::new(raw.minimum, raw.maximum)
    }
}

impl From<Axis> for RawAxis {
    fn from(axis: Axis) -> Self {
        RawAxis {
            minimum: axis.minimum,
            maximum: axis.maximum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_ranges() {
        assert_eq!(
            Axis::new(5, 5),
            Err(SliderError::DegenerateAxis {
                minimum: 5,
                maximum: 5
            })
        );
        assert!(Axis::new(10, -10).is_err());
    }

    #[test]
    fn with_minimum_keeps_prior_axis_on_failure() {
        let axis = Axis::new(0, 100).unwrap();
        assert!(axis.with_minimum(100).is_err());
        assert_eq!(axis.minimum(), 0);

        let moved = axis.with_minimum(-50).unwrap();
        assert_eq!(moved.span(), 150);
    }

    #[test]
    fn rejects_spans_wider_than_i64() {
        assert_eq!(
            Axis::new(i64::MIN, i64::MAX),
            Err(SliderError::AxisTooWide {
                minimum: i64::MIN,
                maximum: i64::MAX
            })
        );
        assert!(Axis::new(i64::MIN, 1).is_err());

        let widest = Axis::new(i64::MIN, -1).unwrap();
        assert_eq!(widest.span(), i64::MAX);
        let upper = Axis::new(0, i64::MAX).unwrap();
        assert_eq!(upper.span(), i64::MAX);
    }

    #[test]
    fn contains_is_inclusive() {
        let axis = Axis::new(0, 200).unwrap();
        assert!(axis.contains(0));
        assert!(axis.contains(200));
        assert!(!axis.contains(201));
        assert!(!axis.contains(-1));
    }
}
