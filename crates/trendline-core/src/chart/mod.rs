//! Curve engine for animated time-series charts
//!
//! The pieces are layered leaves first:
//!
//! - [`range`] resolves concrete axis bounds from data and caller overrides
//! - [`viewport`] normalizes data values and projects them into the padded canvas
//! - [`control`] estimates smoothing control points from neighboring vertices
//! - [`path`] fits the curve and re-samples it into a dense command sequence
//! - [`morph`] blends two shape-compatible paths at an animation progress
//! - [`lookup`] answers "what is the curve's y at this x" for pointer readouts
//!
//! [`CurveChart`] ties them together for a rendering driver, and
//! [`SharedMorph`] lets a tick callback read the current transition while a
//! data-update callback replaces it.
//!
//! # Examples
//!
//! ```
//! use trendline_core::chart::*;
//!
//! let points = [
//!     DataPoint::new(0, 10.0),
//!     DataPoint::new(1, 20.0),
//!     DataPoint::new(2, 15.0),
//! ];
//! let range = AxisRange::resolve(&points, &RangeOverride::default()).unwrap();
//! let geometry = CanvasGeometry::new(300.0, 100.0);
//! let path = build_path(&points, &range, &geometry, DEFAULT_SMOOTHING);
//!
//! assert_eq!(path.first(), Some(&PathCommand::MoveTo(Point2D::new(0.0, 100.0))));
//! assert_eq!(path.end_points().last().map(|p| p.x), Some(300.0));
//! ```

use thiserror_no_std::Error;

// Module declarations
mod control;
mod engine;
mod lookup;
mod morph;
mod path;
mod range;
mod shared;
mod stroke;
pub mod constants;
pub mod series;
pub mod viewport;

// Re-export main types
pub use constants::DEFAULT_SMOOTHING;
pub use control::control_point;
pub use engine::{CurveChart, RenderMode};
pub use lookup::{Readout, readout, y_at_x};
pub use morph::{MorphState, morph};
pub use path::{CurvePath, PathCommand, build_path};
pub use range::{AxisBounds, AxisOverride, AxisRange, RangeOverride};
pub use series::{DataPoint, Timestamp};
pub use shared::SharedMorph;
pub use stroke::CurveStroke;
pub use viewport::{CanvasGeometry, Point2D, Viewport, normalize, normalize_x, normalize_y};

/// Error types for chart operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// No data points available
    #[error("No data points available")]
    NoData,

    /// A bound override with min > max
    #[error("Invalid data bounds (min > max)")]
    InvalidDataBounds,

    /// Canvas geometry that cannot hold a drawable area
    #[error("Invalid canvas geometry: {param}")]
    InvalidGeometry {
        /// Offending geometry parameter
        param: &'static str,
    },

    /// Smoothing factor outside of [0, 1]
    #[error("Invalid smoothing factor: {value}")]
    InvalidSmoothing {
        /// The rejected value
        value: f32,
    },

    /// Morph endpoints with different command counts or kinds
    #[error("Incompatible paths (from: {from} commands, to: {to} commands)")]
    IncompatiblePaths {
        /// Command count of the source path
        from: usize,
        /// Command count of the target path
        to: usize,
    },

    /// Config bytes could not be encoded or decoded
    #[error("Config encoding failed")]
    Encoding,
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
