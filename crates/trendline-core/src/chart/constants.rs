//! Constants for curve building and readout
//!
//! All magic numbers are defined here with descriptive names and units.

/// Default smoothing factor for control point estimation
///
/// 0.0 = straight segments, 1.0 = control points pulled the full chord length.
pub const DEFAULT_SMOOTHING: f32 = 0.2;

/// Horizontal distance between two re-sampled curve commands in pixels
///
/// The number of commands a segment emits is its on-screen width divided by
/// this spacing, which keeps the command count tied to the canvas width.
pub const SAMPLE_SPACING_PX: f32 = 2.0;

/// Minimum number of samples emitted per curve segment
pub const MIN_SAMPLES_PER_SEGMENT: usize = 1;

/// Lower bound of the smoothing factor domain
pub const MIN_SMOOTHING: f32 = 0.0;

/// Upper bound of the smoothing factor domain
pub const MAX_SMOOTHING: f32 = 1.0;
