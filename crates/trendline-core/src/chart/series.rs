//! Data series types for curve building
//!
//! A series is an ordered slice of [`DataPoint`]s in ascending timestamp
//! order. The engine never sorts; callers hand it data that is already
//! ordered.

use serde::{Deserialize, Serialize};

/// Milliseconds since an arbitrary epoch (typically the Unix epoch)
pub type Timestamp = i64;

/// A single timestamp/value sample of the series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Sample time in milliseconds
    pub timestamp: Timestamp,
    /// Sample value
    pub value: f64,
}

impl DataPoint {
    /// Create a new data point
    pub const fn new(timestamp: Timestamp, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(Timestamp, f64)> for DataPoint {
    fn from((timestamp, value): (Timestamp, f64)) -> Self {
        Self::new(timestamp, value)
    }
}
