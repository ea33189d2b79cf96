//! Curve paths and the path builder
//!
//! A [`CurvePath`] is one continuous open curve: a single `MoveTo` followed
//! by `CubicTo` commands. The builder fits a cubic through each pair of
//! neighboring points and re-samples it every [`SAMPLE_SPACING_PX`] pixels,
//! emitting one degenerate cubic (all coordinates equal) per sample. Two
//! paths covering the same on-screen span therefore tend to have the same
//! command count, which is what lets the morph engine blend them.

extern crate alloc;
use alloc::vec::Vec;

use log::trace;
use num_traits::Float;

use super::constants::{MAX_SMOOTHING, MIN_SAMPLES_PER_SEGMENT, MIN_SMOOTHING, SAMPLE_SPACING_PX};
use super::control::control_point;
use super::range::AxisRange;
use super::series::DataPoint;
use super::viewport::{CanvasGeometry, Point2D, Viewport, clamp_between};

/// A single drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start the curve at a point
    MoveTo(Point2D),
    /// Cubic bezier segment from the current point to `end`
    CubicTo {
        /// First control point
        ctrl1: Point2D,
        /// Second control point
        ctrl2: Point2D,
        /// Segment end point
        end: Point2D,
    },
}

impl PathCommand {
    /// A cubic segment collapsed onto a single point
    pub const fn sample(point: Point2D) -> Self {
        Self::CubicTo {
            ctrl1: point,
            ctrl2: point,
            end: point,
        }
    }

    /// The point the pen rests at after this command
    pub fn end_point(&self) -> Point2D {
        match *self {
            Self::MoveTo(point) => point,
            Self::CubicTo { end, .. } => end,
        }
    }

    /// Whether both commands are of the same variant
    pub fn same_kind(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Apply `f` to every coordinate of the command
    pub fn map_points(&self, mut f: impl FnMut(Point2D) -> Point2D) -> Self {
        match *self {
            Self::MoveTo(point) => Self::MoveTo(f(point)),
            Self::CubicTo { ctrl1, ctrl2, end } => Self::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                end: f(end),
            },
        }
    }
}

/// Ordered drawing commands for one fitted, re-sampled curve
///
/// Paths are never edited after they are built; every data update produces a
/// new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurvePath {
    commands: Vec<PathCommand>,
}

impl CurvePath {
    /// Get all commands in drawing order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Get the first command
    pub fn first(&self) -> Option<&PathCommand> {
        self.commands.first()
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the path has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over all commands
    pub fn iter(&self) -> impl Iterator<Item = &PathCommand> {
        self.commands.iter()
    }

    /// Iterate over the pen position after each command
    pub fn end_points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.commands.iter().map(PathCommand::end_point)
    }

    /// Check that both paths have the same command count and the same
    /// command kinds in order
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .commands
                .iter()
                .zip(other.commands.iter())
                .all(|(a, b)| a.same_kind(b))
    }

    /// Copy of this path with every y moved to `baseline`
    ///
    /// The result is always compatible with `self`.
    pub fn flattened(&self, baseline: f32) -> Self {
        self.commands
            .iter()
            .map(|command| command.map_points(|point| Point2D::new(point.x, baseline)))
            .collect()
    }
}

impl FromIterator<PathCommand> for CurvePath {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CurvePath {
    type Item = &'a PathCommand;
    type IntoIter = core::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Cubic bezier through `start` and `end` with two control points
struct CubicSegment {
    start: Point2D,
    ctrl1: Point2D,
    ctrl2: Point2D,
    end: Point2D,
}

impl CubicSegment {
    /// Point on the curve at parameter `t` in [0, 1]
    fn at(&self, t: f32) -> Point2D {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;

        Point2D::new(
            a * self.start.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.end.x,
            a * self.start.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.end.y,
        )
    }

    /// Number of samples for this segment at the fixed pixel spacing
    fn sample_count(&self) -> usize {
        let span = (self.end.x - self.start.x).abs();
        let count = (span / SAMPLE_SPACING_PX).ceil();

        if count.is_finite() {
            (count as usize).max(MIN_SAMPLES_PER_SEGMENT)
        } else {
            MIN_SAMPLES_PER_SEGMENT
        }
    }
}

/// Build the re-sampled curve for an ordered point slice
///
/// Emits a `MoveTo` at the first point, then for every following point fits
/// a cubic from the previous point and emits one degenerate `CubicTo` per
/// sample; the last sample of each segment lands exactly on the data point.
/// Points outside `range` are projected with the clamped normalization, so
/// every input point still contributes. Samples are kept inside the drawable
/// area and inside their segment's horizontal extent, keeping the path
/// x-monotonic for ascending data.
///
/// An empty slice yields an empty path; a single point yields only the
/// `MoveTo`.
pub fn build_path(
    points: &[DataPoint],
    range: &AxisRange,
    geometry: &CanvasGeometry,
    smoothing: f32,
) -> CurvePath {
    let viewport = Viewport::new(*range, *geometry);
    let canvas: Vec<Point2D> = points.iter().map(|point| viewport.project(point)).collect();

    let Some(&origin) = canvas.first() else {
        return CurvePath::default();
    };

    let smoothing = if smoothing.is_nan() {
        MIN_SMOOTHING
    } else {
        smoothing.clamp(MIN_SMOOTHING, MAX_SMOOTHING)
    };

    let mut commands = Vec::with_capacity(1 + estimated_samples(&canvas));
    commands.push(PathCommand::MoveTo(origin));

    for i in 1..canvas.len() {
        let prev = canvas[i - 1];
        let prev_prev = if i >= 2 { canvas[i - 2] } else { prev };
        let current = canvas[i];
        let next = canvas.get(i + 1).copied().unwrap_or(current);

        let segment = CubicSegment {
            start: prev,
            ctrl1: control_point(prev, prev_prev, current, smoothing, false),
            ctrl2: control_point(current, prev, next, smoothing, true),
            end: current,
        };

        let (x_lo, x_hi) = (prev.x.min(current.x), prev.x.max(current.x));
        let samples = segment.sample_count();
        for k in 1..=samples {
            let point = if k == samples {
                current
            } else {
                let sampled = segment.at(k as f32 / samples as f32);
                let clamped = geometry.clamp(sampled);
                Point2D::new(clamp_between(clamped.x, x_lo, x_hi), clamped.y)
            };
            commands.push(PathCommand::sample(point));
        }
    }

    trace!(
        "Built curve path: {} points -> {} commands",
        points.len(),
        commands.len()
    );

    CurvePath { commands }
}

fn estimated_samples(canvas: &[Point2D]) -> usize {
    match (canvas.first(), canvas.last()) {
        (Some(first), Some(last)) => {
            let span = (last.x - first.x).abs() / SAMPLE_SPACING_PX;
            (span as usize).saturating_add(canvas.len())
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::range::RangeOverride;

    const EPSILON: f32 = 1e-3;

    fn scenario_points() -> [DataPoint; 3] {
        [
            DataPoint::new(0, 10.0),
            DataPoint::new(1, 20.0),
            DataPoint::new(2, 15.0),
        ]
    }

    fn build(points: &[DataPoint], geometry: CanvasGeometry, smoothing: f32) -> CurvePath {
        let range = AxisRange::resolve(points, &RangeOverride::default()).unwrap();
        build_path(points, &range, &geometry, smoothing)
    }

    #[test]
    fn test_scenario_first_and_last_command() {
        let path = build(&scenario_points(), CanvasGeometry::new(300.0, 100.0), 0.2);

        assert_eq!(
            path.first(),
            Some(&PathCommand::MoveTo(Point2D::new(0.0, 100.0)))
        );
        let last = path.commands().last().unwrap();
        assert_eq!(last.end_point().x, 300.0);
        assert_eq!(last.end_point().y, 50.0);
    }

    #[test]
    fn test_command_count_follows_span() {
        // Two segments of 150px each at 2px spacing
        let path = build(&scenario_points(), CanvasGeometry::new(300.0, 100.0), 0.2);

        assert_eq!(path.len(), 1 + 75 + 75);
        assert!(
            path.commands()[1..]
                .iter()
                .all(|c| matches!(c, PathCommand::CubicTo { ctrl1, ctrl2, end } if ctrl1 == end && ctrl2 == end)),
            "every sample must be a degenerate cubic"
        );
    }

    #[test]
    fn test_empty_points_empty_path() {
        let range = AxisRange {
            x: crate::chart::range::AxisBounds::new(0, 1),
            y: crate::chart::range::AxisBounds::new(0.0, 1.0),
        };
        let path = build_path(&[], &range, &CanvasGeometry::new(100.0, 100.0), 0.2);

        assert!(path.is_empty());
    }

    #[test]
    fn test_single_point_only_moves() {
        let path = build(
            &[DataPoint::new(42, 1.0)],
            CanvasGeometry::new(100.0, 100.0),
            0.2,
        );

        assert_eq!(path.len(), 1);
        assert!(matches!(path.first(), Some(PathCommand::MoveTo(_))));
    }

    #[test]
    fn test_commands_stay_inside_drawable_area() {
        let points: Vec<DataPoint> = (0..40)
            .map(|i| {
                let value = if i % 3 == 0 { 90.0 } else { 5.0 + i as f64 };
                DataPoint::new(i * 1_000, value)
            })
            .collect();
        let geometry = CanvasGeometry::new(320.0, 160.0).with_padding(12.0, 8.0);
        let path = build(&points, geometry, 0.4);

        for point in path.end_points() {
            assert!(
                point.x >= 12.0 && point.x <= 308.0,
                "x out of drawable area: {:?}",
                point
            );
            assert!(
                point.y >= 8.0 && point.y <= 152.0,
                "y out of drawable area: {:?}",
                point
            );
        }
    }

    #[test]
    fn test_commands_are_x_monotonic() {
        let points: Vec<DataPoint> = (0..25)
            .map(|i| DataPoint::new(i * 60, ((i * 7) % 11) as f64))
            .collect();
        let path = build(&points, CanvasGeometry::new(240.0, 100.0), 1.0);

        let xs: Vec<f32> = path.end_points().map(|p| p.x).collect();
        assert!(
            xs.windows(2).all(|pair| pair[0] <= pair[1]),
            "path x must never decrease"
        );
    }

    #[test]
    fn test_zero_smoothing_is_straight() {
        let points = [DataPoint::new(0, 0.0), DataPoint::new(10, 10.0)];
        let path = build(&points, CanvasGeometry::new(100.0, 100.0), 0.0);

        // Straight line from (0, 100) to (100, 0): y = 100 - x
        for point in path.end_points() {
            assert!(
                (point.y - (100.0 - point.x)).abs() < EPSILON,
                "sample off the chord: {:?}",
                point
            );
        }
    }

    #[test]
    fn test_samples_pass_through_every_point() {
        let points = scenario_points();
        let geometry = CanvasGeometry::new(300.0, 100.0);
        let range = AxisRange::resolve(&points, &RangeOverride::default()).unwrap();
        let viewport = Viewport::new(range, geometry);
        let path = build_path(&points, &range, &geometry, 0.2);

        for point in points.iter() {
            let projected = viewport.project(point);
            assert!(
                path.end_points().any(|p| p == projected),
                "no command lands on {:?}",
                projected
            );
        }
    }

    #[test]
    fn test_out_of_range_points_are_kept() {
        let points = [
            DataPoint::new(0, 1.0),
            DataPoint::new(10, 500.0),
            DataPoint::new(20, 2.0),
        ];
        let range = AxisRange::resolve(
            &points,
            &RangeOverride::default().with_y(crate::chart::range::AxisOverride::new(0.0, 10.0)),
        )
        .unwrap();
        let geometry = CanvasGeometry::new(40.0, 10.0);
        let path = build_path(&points, &range, &geometry, 0.2);

        // 500 is above the pinned max, so it collapses to the axis origin (bottom)
        assert_eq!(path.len(), 1 + 10 + 10);
        assert!(path.end_points().any(|p| p == Point2D::new(20.0, 10.0)));
    }

    #[test]
    fn test_same_span_paths_are_compatible() {
        let geometry = CanvasGeometry::new(200.0, 100.0);
        let a: Vec<DataPoint> = (0..10).map(|i| DataPoint::new(i, i as f64)).collect();
        let b: Vec<DataPoint> = (0..10)
            .map(|i| DataPoint::new(i, (10 - i) as f64 * 3.0))
            .collect();

        let path_a = build(&a, geometry, 0.2);
        let path_b = build(&b, geometry, 0.2);

        assert!(path_a.is_compatible_with(&path_b));
        assert_ne!(path_a, path_b);
    }

    #[test]
    fn test_flattened_keeps_shape() {
        let path = build(&scenario_points(), CanvasGeometry::new(300.0, 100.0), 0.2);
        let flat = path.flattened(100.0);

        assert!(flat.is_compatible_with(&path));
        assert!(flat.end_points().all(|p| p.y == 100.0));
        assert!(
            flat.end_points()
                .zip(path.end_points())
                .all(|(a, b)| a.x == b.x)
        );
    }
}
