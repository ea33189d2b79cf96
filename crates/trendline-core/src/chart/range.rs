//! Axis range resolution
//!
//! Derives concrete axis bounds from the data, letting a caller pin any
//! individual bound.

use serde::{Deserialize, Serialize};

use super::series::{DataPoint, Timestamp};
use super::{ChartError, ChartResult};

/// Concrete bounds for one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds<T> {
    /// Lower bound
    pub min: T,
    /// Upper bound
    pub max: T,
}

impl<T> AxisBounds<T> {
    /// Create new axis bounds
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Concrete x (time) and y (value) bounds after resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Time axis bounds
    pub x: AxisBounds<Timestamp>,
    /// Value axis bounds
    pub y: AxisBounds<f64>,
}

/// Optional bound overrides for one axis
///
/// Each bound is independent: pinning only `min` still derives `max` from the
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisOverride<T> {
    /// Pinned lower bound
    pub min: Option<T>,
    /// Pinned upper bound
    pub max: Option<T>,
}

impl<T: Copy + PartialOrd> AxisOverride<T> {
    /// Pin both bounds
    pub const fn new(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Pin only the lower bound
    pub const fn min(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Pin only the upper bound
    pub const fn max(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    fn apply(&self, derived: AxisBounds<T>) -> AxisBounds<T> {
        AxisBounds {
            min: self.min.unwrap_or(derived.min),
            max: self.max.unwrap_or(derived.max),
        }
    }

    /// Reject an override whose two pinned bounds are inverted
    pub fn validate(&self) -> ChartResult<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(ChartError::InvalidDataBounds),
            _ => Ok(()),
        }
    }
}

/// Caller-supplied partial range, per axis and per bound
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeOverride {
    /// Time axis overrides
    pub x: AxisOverride<Timestamp>,
    /// Value axis overrides
    pub y: AxisOverride<f64>,
}

impl RangeOverride {
    /// Override only the time axis
    pub fn with_x(mut self, x: AxisOverride<Timestamp>) -> Self {
        self.x = x;
        self
    }

    /// Override only the value axis
    pub fn with_y(mut self, y: AxisOverride<f64>) -> Self {
        self.y = y;
        self
    }

    /// Check both axes for inverted bounds
    pub fn validate(&self) -> ChartResult<()> {
        self.x.validate()?;
        self.y.validate()
    }
}

impl AxisRange {
    /// Resolve concrete bounds from an ordered point slice
    ///
    /// The time axis spans the first to the last timestamp (the slice is
    /// assumed ascending); the value axis spans the true extrema. Overridden
    /// bounds always win. Returns `None` for an empty slice.
    pub fn resolve(points: &[DataPoint], overrides: &RangeOverride) -> Option<Self> {
        let (first, last) = (points.first()?, points.last()?);

        let mut y_min = first.value;
        let mut y_max = first.value;
        for point in points.iter().skip(1) {
            y_min = y_min.min(point.value);
            y_max = y_max.max(point.value);
        }

        Some(Self {
            x: overrides
                .x
                .apply(AxisBounds::new(first.timestamp, last.timestamp)),
            y: overrides.y.apply(AxisBounds::new(y_min, y_max)),
        })
    }
}
