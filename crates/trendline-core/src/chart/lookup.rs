//! Point-in-curve queries for pointer readouts
//!
//! Commands produced by the path builder are x-monotonic, so a left-to-right
//! scan finds the sample at (or just after) any horizontal position. The
//! sampling density already bounds the error; no sub-sample interpolation
//! happens here.

use super::path::CurvePath;
use super::series::DataPoint;
use super::viewport::{Point2D, Viewport};

/// Result of a pointer readout against a built curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    /// Canvas position of the matched curve sample (indicator anchor)
    pub point: Point2D,
    /// Index of the data point the pointer selects
    pub index: usize,
}

/// First sample at or after `x`
fn first_following(path: &CurvePath, x: f32) -> Option<Point2D> {
    let first = path.end_points().next()?;
    if x.is_nan() || x < first.x {
        return None;
    }

    path.end_points().find(|point| point.x >= x)
}

/// The curve's y at canvas position `x`
///
/// Returns the y of the first command whose x is ≥ `x` (nearest-following
/// tie-break), or `None` when `x` lies outside the path's horizontal span.
pub fn y_at_x(path: &CurvePath, x: f32) -> Option<f32> {
    first_following(path, x).map(|point| point.y)
}

/// Resolve a pointer x into an indicator position and a data index
///
/// The index follows the same nearest-following rule as [`y_at_x`]: the first
/// point whose projected x is ≥ the pointer x. `viewport` must be the one the
/// path was built with.
pub fn readout(
    path: &CurvePath,
    points: &[DataPoint],
    viewport: &Viewport,
    x: f32,
) -> Option<Readout> {
    let point = first_following(path, x)?;
    let last = points.len().checked_sub(1)?;

    let index = points
        .iter()
        .position(|data| viewport.project(data).x >= x)
        .unwrap_or(last);

    Some(Readout { point, index })
}
