//! Chart configuration
//!
//! Everything a rendering driver hands the engine besides the data itself:
//! canvas geometry, smoothing, optional range overrides and the render mode.
//! Configs can be encoded with postcard so a host can persist chart settings.

extern crate alloc;
use alloc::vec::Vec;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::chart::constants::{DEFAULT_SMOOTHING, MAX_SMOOTHING, MIN_SMOOTHING};
use crate::chart::{CanvasGeometry, ChartError, ChartResult, RangeOverride, RenderMode};

/// Configuration for a [`CurveChart`](crate::chart::CurveChart)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Canvas dimensions and padding, as measured by the layout pass
    pub geometry: CanvasGeometry,
    /// Control point smoothing factor in [0, 1]
    pub smoothing: f32,
    /// Optional per-bound axis overrides
    pub range: RangeOverride,
    /// Animated transitions or static cuts
    pub mode: RenderMode,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            geometry: CanvasGeometry::default(),
            smoothing: DEFAULT_SMOOTHING,
            range: RangeOverride::default(),
            mode: RenderMode::Animated,
        }
    }
}

impl ChartConfig {
    /// Create a config for a measured canvas with default settings
    pub fn new(geometry: CanvasGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    /// Set the smoothing factor
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the range overrides
    pub fn with_range(mut self, range: RangeOverride) -> Self {
        self.range = range;
        self
    }

    /// Set the render mode
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check geometry, smoothing and range overrides
    pub fn validate(&self) -> ChartResult<()> {
        let result = self.check();
        if let Err(ref e) = result {
            warn!("Rejected chart config: {}", e);
        }
        result
    }

    fn check(&self) -> ChartResult<()> {
        self.geometry.validate()?;

        if !(MIN_SMOOTHING..=MAX_SMOOTHING).contains(&self.smoothing) {
            return Err(ChartError::InvalidSmoothing {
                value: self.smoothing,
            });
        }

        self.range.validate()
    }

    /// Encode the config with postcard
    pub fn to_bytes(&self) -> ChartResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(|_| ChartError::Encoding)
    }

    /// Decode and validate a postcard-encoded config
    pub fn from_bytes(bytes: &[u8]) -> ChartResult<Self> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ChartError::Encoding)?;
        config.validate()?;
        Ok(config)
    }
}
