//! Path morphing between two curves
//!
//! Blends two shape-compatible paths command by command. When the shapes
//! differ (typically because the data grew and the curve now spans more
//! pixels) [`morph`] reports it, and [`MorphState`] turns the transition into
//! an instant cut to the target.

use log::debug;

use super::path::{CurvePath, PathCommand};
use super::viewport::{Point2D, clamp_between};
use super::{ChartError, ChartResult};

/// Clamp an animation progress into [0, 1], treating NaN as the start
fn clamp_progress(t: f32) -> f32 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Linear interpolation that never leaves the [a, b] interval
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    clamp_between(a + (b - a) * t, a.min(b), a.max(b))
}

fn lerp_point(a: Point2D, b: Point2D, t: f32) -> Point2D {
    Point2D::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

fn lerp_command(from: &PathCommand, to: &PathCommand, t: f32) -> PathCommand {
    match (*from, *to) {
        (PathCommand::MoveTo(a), PathCommand::MoveTo(b)) => PathCommand::MoveTo(lerp_point(a, b, t)),
        (
            PathCommand::CubicTo {
                ctrl1: a1,
                ctrl2: a2,
                end: a3,
            },
            PathCommand::CubicTo {
                ctrl1: b1,
                ctrl2: b2,
                end: b3,
            },
        ) => PathCommand::CubicTo {
            ctrl1: lerp_point(a1, b1, t),
            ctrl2: lerp_point(a2, b2, t),
            end: lerp_point(a3, b3, t),
        },
        // Kinds are checked up front; keep the target if they ever differ
        _ => *to,
    }
}

/// Blend two paths at progress `t`
///
/// Every coordinate is linearly interpolated between its `from` and `to`
/// counterpart. `t` is clamped to [0, 1]; at 0 the result is exactly `from`,
/// at 1 exactly `to`.
///
/// Returns [`ChartError::IncompatiblePaths`] when the command counts or kinds
/// differ. The caller is expected to treat that as a cut to `to`.
pub fn morph(from: &CurvePath, to: &CurvePath, t: f32) -> ChartResult<CurvePath> {
    if !from.is_compatible_with(to) {
        return Err(ChartError::IncompatiblePaths {
            from: from.len(),
            to: to.len(),
        });
    }

    let t = clamp_progress(t);
    if t <= 0.0 {
        return Ok(from.clone());
    }
    if t >= 1.0 {
        return Ok(to.clone());
    }

    Ok(from
        .iter()
        .zip(to.iter())
        .map(|(a, b)| lerp_command(a, b, t))
        .collect())
}

/// The `from`/`to` pair driving one animated transition
///
/// A state is never edited; each data update builds a new one from the
/// previous state and the freshly built target path.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphState {
    from: CurvePath,
    to: CurvePath,
}

impl MorphState {
    /// Transition between two paths
    ///
    /// Incompatible endpoints degrade to a cut: `to` is used for both ends.
    pub fn new(from: CurvePath, to: CurvePath) -> Self {
        if from.is_compatible_with(&to) {
            Self { from, to }
        } else {
            debug!(
                "Morph endpoints incompatible ({} vs {} commands), cutting to target",
                from.len(),
                to.len()
            );
            Self::settled(to)
        }
    }

    /// First transition: rise from a flat line at `baseline` into `to`
    pub fn initial(to: CurvePath, baseline: f32) -> Self {
        Self {
            from: to.flattened(baseline),
            to,
        }
    }

    /// A state with no motion left, showing `to`
    pub fn settled(to: CurvePath) -> Self {
        Self {
            from: to.clone(),
            to,
        }
    }

    /// Start the next transition towards `to`
    ///
    /// The new source is what was visible at `progress` of this transition,
    /// so an update that interrupts an animation continues from the frame on
    /// screen instead of jumping.
    pub fn rotate(&self, progress: f32, to: CurvePath) -> Self {
        Self::new(self.frame(progress), to)
    }

    /// The path to draw at `progress`
    pub fn frame(&self, progress: f32) -> CurvePath {
        morph(&self.from, &self.to, progress).unwrap_or_else(|_| self.to.clone())
    }

    /// Source path of the transition
    pub fn from(&self) -> &CurvePath {
        &self.from
    }

    /// Target path of the transition
    pub fn to(&self) -> &CurvePath {
        &self.to
    }

    /// Whether the transition has no motion (source equals target)
    pub fn is_settled(&self) -> bool {
        self.from == self.to
    }
}
