//! Control point estimation for smooth curve segments
//!
//! Each vertex gets its tangent from the chord joining its two neighbors.
//! The outgoing control point of one vertex and the incoming control point of
//! the next come from the same rule with the direction flipped, which keeps
//! the tangent continuous across the shared vertex.

use core::f32::consts::PI;

use num_traits::Float;

use super::viewport::Point2D;

/// Polar form of the chord between two points
struct Chord {
    /// Chord length in pixels
    length: f32,
    /// Chord direction in radians
    angle: f32,
}

impl Chord {
    fn between(from: Point2D, to: Point2D) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        Self {
            length: dx.hypot(dy),
            angle: dy.atan2(dx),
        }
    }
}

/// Calculate the control point for `current`
///
/// The offset runs parallel to the `previous` → `next` chord, scaled by
/// `smoothing` (0.0 keeps the control point on the vertex, so the segment
/// degenerates to a straight line). `reverse` turns the offset around by 180°
/// for the incoming side of a vertex.
///
/// # Arguments
///
/// * `current` - Vertex the control point belongs to
/// * `previous` - Preceding vertex (pass `current` at the start of the curve)
/// * `next` - Following vertex (pass `current` at the end of the curve)
/// * `smoothing` - Fraction of the chord length to offset by, in [0, 1]
/// * `reverse` - Point the offset backwards along the chord
pub fn control_point(
    current: Point2D,
    previous: Point2D,
    next: Point2D,
    smoothing: f32,
    reverse: bool,
) -> Point2D {
    let chord = Chord::between(previous, next);
    let angle = chord.angle + if reverse { PI } else { 0.0 };
    let length = chord.length * smoothing;

    Point2D::new(
        current.x + angle.cos() * length,
        current.y + angle.sin() * length,
    )
}
