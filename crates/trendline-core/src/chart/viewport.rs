//! Viewport and coordinate transformation utilities
//!
//! Handles transformation between data space (timestamps, values) and
//! canvas space (pixel coordinates, top-left origin, y growing downward).

use serde::{Deserialize, Serialize};

use super::range::{AxisBounds, AxisRange};
use super::series::{DataPoint, Timestamp};
use super::{ChartError, ChartResult};

/// A canvas-space coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal position in pixels
    pub x: f32,
    /// Vertical position in pixels (0 at the top)
    pub y: f32,
}

impl Point2D {
    /// Create a new canvas point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions and padding of the drawing surface
///
/// The drawable area is `width - 2 * horizontal_padding` by
/// `height - 2 * vertical_padding`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    /// Full canvas width in pixels
    pub width: f32,
    /// Full canvas height in pixels
    pub height: f32,
    /// Padding on the left and on the right in pixels
    pub horizontal_padding: f32,
    /// Padding on the top and on the bottom in pixels
    pub vertical_padding: f32,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl CanvasGeometry {
    /// Create an unpadded geometry
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            horizontal_padding: 0.0,
            vertical_padding: 0.0,
        }
    }

    /// Set the horizontal and vertical padding
    pub const fn with_padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    /// Width of the drawable area
    pub fn drawable_width(&self) -> f32 {
        (self.width - 2.0 * self.horizontal_padding).max(0.0)
    }

    /// Height of the drawable area
    pub fn drawable_height(&self) -> f32 {
        (self.height - 2.0 * self.vertical_padding).max(0.0)
    }

    /// Leftmost drawable x
    pub fn left(&self) -> f32 {
        self.horizontal_padding
    }

    /// Rightmost drawable x
    pub fn right(&self) -> f32 {
        self.horizontal_padding + self.drawable_width()
    }

    /// Topmost drawable y
    pub fn top(&self) -> f32 {
        self.vertical_padding
    }

    /// Bottom drawable y, where the axis minimum lands
    pub fn bottom(&self) -> f32 {
        self.vertical_padding + self.drawable_height()
    }

    /// Clamp a point into the drawable area
    pub fn clamp(&self, point: Point2D) -> Point2D {
        Point2D::new(
            clamp_between(point.x, self.left(), self.right()),
            clamp_between(point.y, self.top(), self.bottom()),
        )
    }

    /// Check that every dimension is finite, non-negative and leaves room
    /// for the padding
    pub fn validate(&self) -> ChartResult<()> {
        let fields = [
            (self.width, "width"),
            (self.height, "height"),
            (self.horizontal_padding, "horizontal_padding"),
            (self.vertical_padding, "vertical_padding"),
        ];
        for (value, param) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidGeometry { param });
            }
        }

        if 2.0 * self.horizontal_padding > self.width {
            return Err(ChartError::InvalidGeometry {
                param: "horizontal_padding",
            });
        }
        if 2.0 * self.vertical_padding > self.height {
            return Err(ChartError::InvalidGeometry {
                param: "vertical_padding",
            });
        }

        Ok(())
    }
}

/// Clamp `value` into [lo, hi] without panicking on NaN bounds
pub(crate) fn clamp_between(value: f32, lo: f32, hi: f32) -> f32 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Normalize a value into [0, 1] within `bounds`
///
/// Values outside the bounds collapse to 0 rather than extrapolating, and a
/// degenerate range (`min == max`) normalizes everything to 0.
pub fn normalize(value: f64, bounds: AxisBounds<f64>) -> f64 {
    let span = bounds.max - bounds.min;
    if span == 0.0 || !span.is_finite() || value < bounds.min || value > bounds.max {
        return 0.0;
    }

    (value - bounds.min) / span
}

/// Normalize a timestamp into [0, 1] within `bounds`
pub fn normalize_x(timestamp: Timestamp, bounds: AxisBounds<Timestamp>) -> f64 {
    normalize(
        timestamp as f64,
        AxisBounds::new(bounds.min as f64, bounds.max as f64),
    )
}

/// Normalize a value into [0, 1] within `bounds`
pub fn normalize_y(value: f64, bounds: AxisBounds<f64>) -> f64 {
    normalize(value, bounds)
}

/// Viewport for transforming data coordinates to canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Resolved data bounds
    range: AxisRange,
    /// Canvas dimensions and padding
    geometry: CanvasGeometry,
}

impl Viewport {
    /// Create a new viewport
    pub const fn new(range: AxisRange, geometry: CanvasGeometry) -> Self {
        Self { range, geometry }
    }

    /// Project a data point into canvas space
    ///
    /// Note: y-axis is inverted (a larger value lands higher on the canvas)
    pub fn project(&self, point: &DataPoint) -> Point2D {
        let x_norm = normalize_x(point.timestamp, self.range.x) as f32;
        let y_norm = normalize_y(point.value, self.range.y) as f32;

        let width = self.geometry.drawable_width();
        let height = self.geometry.drawable_height();

        Point2D::new(
            width * x_norm + self.geometry.horizontal_padding,
            height - height * y_norm + self.geometry.vertical_padding,
        )
    }

    /// Get the data bounds
    pub fn range(&self) -> &AxisRange {
        &self.range
    }

    /// Get the canvas geometry
    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> AxisRange {
        AxisRange {
            x: AxisBounds::new(0, 100),
            y: AxisBounds::new(10.0, 20.0),
        }
    }

    #[test]
    fn test_normalize_endpoints() {
        let bounds = AxisBounds::new(-5.0, 15.0);

        assert_eq!(normalize(-5.0, bounds), 0.0);
        assert_eq!(normalize(15.0, bounds), 1.0);
        assert_eq!(normalize(5.0, bounds), 0.5);
    }

    #[test]
    fn test_normalize_is_monotonic() {
        let bounds = AxisBounds::new(0, 1_000);
        let mut previous = -1.0;
        for ts in (0..=1_000).step_by(50) {
            let norm = normalize_x(ts, bounds);
            assert!(norm > previous, "normalize_x not increasing at {}", ts);
            previous = norm;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn test_normalize_out_of_range_collapses_to_origin() {
        let bounds = AxisBounds::new(0.0, 10.0);

        assert_eq!(normalize(-1.0, bounds), 0.0);
        assert_eq!(normalize(11.0, bounds), 0.0);
    }

    #[test]
    fn test_normalize_degenerate_range() {
        assert_eq!(normalize(3.0, AxisBounds::new(3.0, 3.0)), 0.0);
        assert_eq!(normalize_x(7, AxisBounds::new(7, 7)), 0.0);
    }

    #[test]
    fn test_project_corners_unpadded() {
        let viewport = Viewport::new(range(), CanvasGeometry::new(300.0, 100.0));

        assert_eq!(
            viewport.project(&DataPoint::new(0, 10.0)),
            Point2D::new(0.0, 100.0)
        );
        assert_eq!(
            viewport.project(&DataPoint::new(100, 20.0)),
            Point2D::new(300.0, 0.0)
        );
    }

    #[test]
    fn test_project_with_padding() {
        let geometry = CanvasGeometry::new(320.0, 120.0).with_padding(10.0, 20.0);
        let viewport = Viewport::new(range(), geometry);

        assert_eq!(
            viewport.project(&DataPoint::new(0, 10.0)),
            Point2D::new(10.0, 100.0)
        );
        assert_eq!(
            viewport.project(&DataPoint::new(100, 20.0)),
            Point2D::new(310.0, 20.0)
        );
        assert_eq!(
            viewport.project(&DataPoint::new(50, 15.0)),
            Point2D::new(160.0, 60.0)
        );
    }

    #[test]
    fn test_project_out_of_range_clamps_to_origin() {
        let viewport = Viewport::new(range(), CanvasGeometry::new(300.0, 100.0));

        // Both coordinates outside: collapses to the bottom-left corner
        assert_eq!(
            viewport.project(&DataPoint::new(500, 99.0)),
            Point2D::new(0.0, 100.0)
        );
    }

    #[test]
    fn test_geometry_drawable_area() {
        let geometry = CanvasGeometry::new(200.0, 80.0).with_padding(15.0, 5.0);

        assert_eq!(geometry.drawable_width(), 170.0);
        assert_eq!(geometry.drawable_height(), 70.0);
        assert_eq!((geometry.left(), geometry.right()), (15.0, 185.0));
        assert_eq!((geometry.top(), geometry.bottom()), (5.0, 75.0));
    }

    #[test]
    fn test_geometry_validation() {
        assert!(CanvasGeometry::new(100.0, 50.0).validate().is_ok());
        assert_eq!(
            CanvasGeometry::new(-1.0, 50.0).validate(),
            Err(ChartError::InvalidGeometry { param: "width" })
        );
        assert_eq!(
            CanvasGeometry::new(100.0, 50.0)
                .with_padding(60.0, 0.0)
                .validate(),
            Err(ChartError::InvalidGeometry {
                param: "horizontal_padding"
            })
        );
        assert_eq!(
            CanvasGeometry::new(100.0, f32::NAN).validate(),
            Err(ChartError::InvalidGeometry { param: "height" })
        );
    }
}
