// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Ordered handle storage with the non-crossing invariant.
//!
//! Handles are kept in position order and the registry guarantees, at rest
//! and after every rejected call, that
//!
//! ```text
//! axis.minimum <= value[0] < value[1] < ... < value[n-1] <= axis.maximum
//! ```
//!
//! Neighboring handles may never share a value. The first and last handles
//! may sit exactly on the axis extremes.

use super::{Axis, Handle, SliderError};
use masonry::vello::peniko::Color;

/// The values surrounding a slot in the handle sequence
///
/// `lower` and `upper` are either a neighbor's value (exclusive) or an axis
/// extreme (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub lower: i64,
    pub upper: i64,
    lower_is_axis: bool,
    upper_is_axis: bool,
}

impl Bounds {
    /// Smallest value a handle in this slot may take
    pub fn legal_min(&self) -> i64 {
        if self.lower_is_axis {
            self.lower
        } else {
            self.lower + 1
        }
    }

    /// Largest value a handle in this slot may take
    pub fn legal_max(&self) -> i64 {
        if self.upper_is_axis {
            self.upper
        } else {
            self.upper - 1
        }
    }

    pub fn admits(&self, value: i64) -> bool {
        self.legal_min() <= value && value <= self.legal_max()
    }

    /// Whether the lower side is a neighboring handle rather than the axis
    pub fn has_lower_neighbor(&self) -> bool {
        !self.lower_is_axis
    }

    /// Whether the upper side is a neighboring handle rather than the axis
    pub fn has_upper_neighbor(&self) -> bool {
        !self.upper_is_axis
    }

    /// Pull `value` into the legal range
    ///
    /// Returns `None` when the slot has no legal value at all.
    pub fn clamp(&self, value: i64) -> Option<i64> {
        let (min, max) = (self.legal_min(), self.legal_max());
        (min <= max).then(|| value.clamp(min, max))
    }

    pub fn midpoint(&self) -> i64 {
        self.lower + (self.upper - self.lower) / 2
    }

    pub fn as_pair(&self) -> (i64, i64) {
        (self.lower, self.upper)
    }
}

/// Ordered collection of uniquely named handles on one axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandleRegistry {
    axis: Axis,
    handles: Vec<Handle>,
}

impl HandleRegistry {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            handles: Vec::new(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Handles in position order
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Handle> {
        self.handles.iter().find(|h| h.name() == name)
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.handles.iter().position(|h| h.name() == name)
    }

    /// Add a handle at `position` (appending when `None` or past the end)
    ///
    /// Without an explicit value the handle lands on the midpoint of the gap
    /// it is inserted into. An explicit value that would cross a neighbor is
    /// rejected rather than adjusted.
    pub fn add_handle(
        &mut self,
        name: impl Into<String>,
        color: Color,
        position: Option<usize>,
        value: Option<i64>,
    ) -> Result<usize, SliderError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(SliderError::DuplicateName(name));
        }

        let position = position.map_or(self.len(), |p| p.min(self.len()));
        let bounds = self.insertion_bounds(position);
        let value = value.unwrap_or_else(|| bounds.midpoint());
        if !bounds.admits(value) {
            return Err(out_of_bounds(name, value, bounds));
        }

        tracing::debug!("Adding handle '{}' at position {} = {}", name, position, value);
        self.handles
            .insert(position, Handle::new(name, value, color));
        Ok(position)
    }

    /// Bounds of the handle currently at `position`
    ///
    /// These are its neighbors' values, or the axis extremes at either end.
    /// For `position == len()` this returns the bounds a newly appended
    /// handle would get.
    pub fn get_bounds(&self, position: usize) -> Bounds {
        if position >= self.len() {
            return self.insertion_bounds(self.len());
        }
        let lower = position.checked_sub(1).map(|i| self.handles[i].value);
        let upper = self.handles.get(position + 1).map(|h| h.value);
        self.make_bounds(lower, upper)
    }

    /// Bounds of the gap a new handle inserted at `position` would occupy
    pub fn insertion_bounds(&self, position: usize) -> Bounds {
        let position = position.min(self.len());
        let lower = position.checked_sub(1).map(|i| self.handles[i].value);
        let upper = self.handles.get(position).map(|h| h.value);
        self.make_bounds(lower, upper)
    }

    /// Move a handle, refusing any value that would cross a neighbor
    pub fn set_value(&mut self, name: &str, value: i64) -> Result<(), SliderError> {
        let position = self
            .position_of(name)
            .ok_or_else(|| SliderError::UnknownHandle(name.to_string()))?;
        let bounds = self.get_bounds(position);
        if !bounds.admits(value) {
            return Err(out_of_bounds(name.to_string(), value, bounds));
        }
        self.handles[position].value = value;
        Ok(())
    }

    pub fn remove_handle(&mut self, name: &str) -> Result<Handle, SliderError> {
        let position = self
            .position_of(name)
            .ok_or_else(|| SliderError::UnknownHandle(name.to_string()))?;
        tracing::debug!("Removing handle '{}' from position {}", name, position);
        Ok(self.handles.remove(position))
    }

    /// Replace the axis if every existing handle still fits inside it
    pub fn set_axis(&mut self, axis: Axis) -> Result<(), SliderError> {
        if let Some(handle) = self.handles.iter().find(|h| !axis.contains(h.value)) {
            return Err(SliderError::OutOfBounds {
                name: handle.name().to_string(),
                value: handle.value,
                lower: axis.minimum(),
                upper: axis.maximum(),
            });
        }
        self.axis = axis;
        Ok(())
    }

    fn make_bounds(&self, lower: Option<i64>, upper: Option<i64>) -> Bounds {
        Bounds {
            lower: lower.unwrap_or(self.axis.minimum()),
            upper: upper.unwrap_or(self.axis.maximum()),
            lower_is_axis: lower.is_none(),
            upper_is_axis: upper.is_none(),
        }
    }
}

fn out_of_bounds(name: String, value: i64, bounds: Bounds) -> SliderError {
    SliderError::OutOfBounds {
        name,
        value,
        lower: bounds.lower,
        upper: bounds.upper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_rgb8(0xff, 0x00, 0x00);

    fn registry(minimum: i64, maximum: i64) -> HandleRegistry {
        HandleRegistry::new(Axis::new(minimum, maximum).unwrap())
    }

    fn values(reg: &HandleRegistry) -> Vec<i64> {
        reg.handles().iter().map(Handle::value).collect()
    }

    #[test]
    fn defect_size_scenario_bounds() {
        let mut reg = registry(0, 1000);
        reg.add_handle("Small", RED, None, Some(0)).unwrap();
        reg.add_handle("Medium", RED, None, Some(300)).unwrap();
        reg.add_handle("Large", RED, None, Some(500)).unwrap();

        assert_eq!(reg.get_bounds(1).as_pair(), (0, 500));
        assert_eq!(reg.get_bounds(0).as_pair(), (0, 300));
        assert_eq!(reg.get_bounds(2).as_pair(), (300, 1000));
        assert_eq!(reg.get_bounds(3).as_pair(), (500, 1000));
    }

    #[test]
    fn widest_axis_supports_default_values() {
        let mut reg = registry(0, i64::MAX);
        reg.add_handle("A", RED, None, None).unwrap();
        assert_eq!(reg.get("A").map(Handle::value), Some(i64::MAX / 2));

        reg.add_handle("B", RED, None, None).unwrap();
        reg.set_value("B", i64::MAX).unwrap();
        reg.set_value("A", 0).unwrap();
        assert_eq!(values(&reg), vec![0, i64::MAX]);

        let mut negative = registry(i64::MIN, -1);
        negative.add_handle("A", RED, None, None).unwrap();
        assert!(negative.get("A").is_some_and(|h| h.value() < 0));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, None).unwrap();
        let err = reg.add_handle("A", RED, None, None).unwrap_err();

        assert_eq!(err, SliderError::DuplicateName("A".to_string()));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn default_value_is_gap_midpoint() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, None).unwrap();
        reg.add_handle("B", RED, None, None).unwrap();
        reg.add_handle("C", RED, Some(0), None).unwrap();

        assert_eq!(values(&reg), vec![25, 50, 75]);
    }

    #[test]
    fn out_of_range_add_is_rejected_and_registry_unchanged() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, Some(40)).unwrap();
        let err = reg.add_handle("B", RED, Some(0), Some(60)).unwrap_err();

        assert!(matches!(err, SliderError::OutOfBounds { value: 60, .. }));
        assert_eq!(values(&reg), vec![40]);
    }

    #[test]
    fn position_past_end_appends() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, Some(10)).unwrap();
        let pos = reg.add_handle("B", RED, Some(9), Some(20)).unwrap();
        assert_eq!(pos, 1);
    }

    #[test]
    fn equal_neighbors_are_forbidden() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, Some(10)).unwrap();
        reg.add_handle("B", RED, None, Some(20)).unwrap();

        assert!(reg.set_value("A", 20).is_err());
        assert!(reg.set_value("B", 10).is_err());
        assert!(reg.set_value("A", 19).is_ok());
        assert_eq!(values(&reg), vec![19, 20]);
    }

    #[test]
    fn axis_extremes_are_reachable_at_the_ends() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, Some(10)).unwrap();
        reg.add_handle("B", RED, None, Some(20)).unwrap();

        assert!(reg.set_value("A", 0).is_ok());
        assert!(reg.set_value("B", 100).is_ok());
        assert!(reg.set_value("B", 101).is_err());
    }

    #[test]
    fn crowded_gap_has_no_midpoint() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, Some(10)).unwrap();
        reg.add_handle("B", RED, None, Some(11)).unwrap();

        let err = reg.add_handle("C", RED, Some(1), None).unwrap_err();
        assert!(matches!(err, SliderError::OutOfBounds { .. }));
        assert_eq!(reg.insertion_bounds(1).clamp(10), None);
    }

    #[test]
    fn set_value_on_unknown_handle() {
        let mut reg = registry(0, 100);
        assert_eq!(
            reg.set_value("ghost", 5),
            Err(SliderError::UnknownHandle("ghost".to_string()))
        );
    }

    #[test]
    fn remove_opens_the_gap() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, Some(10)).unwrap();
        reg.add_handle("B", RED, None, Some(20)).unwrap();
        reg.add_handle("C", RED, None, Some(30)).unwrap();

        let removed = reg.remove_handle("B").unwrap();
        assert_eq!(removed.name(), "B");
        assert_eq!(reg.get_bounds(0).as_pair(), (0, 30));
        assert!(reg.remove_handle("B").is_err());
    }

    #[test]
    fn set_axis_rejects_stranding_a_handle() {
        let mut reg = registry(0, 100);
        reg.add_handle("A", RED, None, Some(80)).unwrap();

        assert!(reg.set_axis(Axis::new(0, 50).unwrap()).is_err());
        assert_eq!(reg.axis().maximum(), 100);

        reg.set_axis(Axis::new(-20, 80).unwrap()).unwrap();
        assert_eq!(reg.axis().minimum(), -20);
    }
}
