//! 3D point/vector primitives and geometric tolerances.

use glam::DVec3;
use std::hash::Hasher;

/// A location in 3D model space.
pub type Point3 = DVec3;

/// A displacement or direction in 3D model space.
pub type Vector3 = DVec3;

/// Geometric tolerance for coordinate and vector comparisons (model units).
pub const TOLERANCE: f64 = 1e-9;

/// Component-wise approximate equality within [`TOLERANCE`].
pub fn approx_eq(a: DVec3, b: DVec3) -> bool {
    a.abs_diff_eq(b, TOLERANCE)
}

/// Euclidean distance between two points.
pub fn distance(p: Point3, q: Point3) -> f64 {
    p.distance(q)
}

/// Translate a point by the sum of the given offsets.
pub fn translate(point: Point3, offsets: impl IntoIterator<Item = Vector3>) -> Point3 {
    offsets.into_iter().fold(point, |acc, v| acc + v)
}

/// Normalize a vector.
///
/// A vector whose magnitude is within [`TOLERANCE`] of zero normalizes to
/// the zero vector rather than failing.
pub fn normalize_or_zero(v: Vector3) -> Vector3 {
    let length = v.length();
    if length <= TOLERANCE {
        DVec3::ZERO
    } else {
        v / length
    }
}

/// Two vectors are collinear when the magnitude of their cross product is
/// within [`TOLERANCE`] of zero.
pub fn are_collinear(u: Vector3, v: Vector3) -> bool {
    u.cross(v).length() <= TOLERANCE
}

/// Project a model-space point onto the drawing plane.
pub fn to_drawing_plane(p: Point3) -> kurbo::Point {
    kurbo::Point::new(p.x, p.y)
}

/// Feed a point's coordinate bits into a hasher.
///
/// Values equal within [`TOLERANCE`] may hash differently.
pub(crate) fn hash_coords<H: Hasher>(p: DVec3, state: &mut H) {
    state.write_u64(p.x.to_bits());
    state.write_u64(p.y.to_bits());
    state.write_u64(p.z.to_bits());
}
