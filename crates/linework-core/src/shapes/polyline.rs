//! Polyline curve.

use super::CurveStyle;
use crate::geom::{self, Point3, Vector3};
use glam::DVec3;
use kurbo::BezPath;
use std::hash::{Hash, Hasher};

/// An ordered chain of points in 3D space.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    points: Vec<Point3>,
    /// Presentation attributes.
    pub style: CurveStyle,
}

impl Polyline {
    /// Prompt shown while the polyline tool waits for a start point.
    pub const START_MESSAGE: &'static str = "Please select the start point of the polyline.";
    /// Prompt shown while the polyline has fewer than two points.
    pub const NEXT_MESSAGE: &'static str =
        "Please select the next point of the polyline with the left mouse button or click right to cancel.";
    /// Prompt shown once the polyline can be finished.
    pub const END_MESSAGE: &'static str =
        "Please select the next point of the polyline with the left mouse button or click right to end.";

    /// Create a new polyline from the given points.
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            style: CurveStyle::default(),
        }
    }

    /// The points of the polyline, in order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Append a point.
    pub fn push_point(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Insert a point at the given index.
    pub fn insert_point(&mut self, index: usize, point: Point3) {
        self.points.insert(index, point);
    }

    /// Remove and return the point at the given index.
    ///
    /// Returns `None` when the index is out of bounds.
    pub fn remove_point(&mut self, index: usize) -> Option<Point3> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// A polyline is valid when it contains at least two points.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }

    /// Whether the first and the last point coincide exactly.
    ///
    /// Exact coordinate equality, not tolerance: closedness gates area
    /// computation, and both the interactive flow and the persistence codec
    /// reproduce coordinates bit-for-bit.
    pub fn is_closed(&self) -> bool {
        self.is_valid() && self.points.first() == self.points.last()
    }

    /// Whether all points lie in the same plane.
    ///
    /// The cross product of the first segment with every later segment must
    /// be collinear with the first segment's cross product with the second
    /// segment. Requires at least three points.
    pub fn is_planar(&self) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        let segments: Vec<Vector3> = self.segments().collect();
        let first = segments[0];
        let reference = first.cross(segments[1]);
        segments[1..]
            .iter()
            .all(|segment| geom::are_collinear(reference, first.cross(*segment)))
    }

    /// Sum of the lengths of all consecutive segments.
    pub fn length(&self) -> f64 {
        self.segments().map(|segment| segment.length()).sum()
    }

    /// Enclosed area, defined only for a closed, planar polyline; 0 otherwise.
    ///
    /// Half the magnitude of the dot product of the plane normal with the
    /// vector sum of cross products of consecutive point pairs, following
    /// <http://geomalgorithms.com/a01-_area.html>. Always non-negative,
    /// independent of winding direction.
    pub fn area(&self) -> f64 {
        if !self.is_closed() || !self.is_planar() {
            return 0.0;
        }

        let sum = self
            .points
            .windows(2)
            .fold(DVec3::ZERO, |acc, pair| acc + pair[0].cross(pair[1]));

        let n = self.points.len();
        let first_segment = self.points[1] - self.points[0];
        let last_segment = self.points[n - 1] - self.points[n - 2];
        let normal = geom::normalize_or_zero(first_segment.cross(last_segment));

        (0.5 * normal.dot(sum)).abs()
    }

    /// Path projection onto the drawing plane.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut projected = self.points.iter().map(|p| geom::to_drawing_plane(*p));
        if let Some(first) = projected.next() {
            path.move_to(first);
            for point in projected {
                path.line_to(point);
            }
        }
        path
    }

    /// Direction vectors of consecutive segments.
    fn segments(&self) -> impl Iterator<Item = Vector3> + '_ {
        self.points.windows(2).map(|pair| pair[1] - pair[0])
    }
}

impl PartialEq for Polyline {
    fn eq(&self, other: &Self) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| geom::approx_eq(*a, *b))
    }
}

impl Hash for Polyline {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for point in &self.points {
            geom::hash_coords(*point, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polyline {
        Polyline::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(10.0, 10.0, 0.0),
            DVec3::new(0.0, 10.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_validity() {
        let mut polyline = Polyline::new(vec![DVec3::ZERO]);
        assert!(!polyline.is_valid());

        polyline.push_point(DVec3::X);
        assert!(polyline.is_valid());
    }

    #[test]
    fn test_length_sums_segments() {
        let polyline = Polyline::new(vec![
            DVec3::ZERO,
            DVec3::new(3.0, 4.0, 0.0),
            DVec3::new(3.0, 4.0, 2.0),
        ]);
        assert!((polyline.length() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_square_is_closed_planar_with_area() {
        let square = square();
        assert!(square.is_closed());
        assert!(square.is_planar());
        assert!((square.area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_area_independent_of_winding() {
        let mut reversed_points: Vec<Point3> = square().points().to_vec();
        reversed_points.reverse();
        let reversed = Polyline::new(reversed_points);
        assert!((reversed.area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_polyline_has_no_area() {
        let open = Polyline::new(vec![
            DVec3::ZERO,
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(10.0, 10.0, 0.0),
        ]);
        assert!(!open.is_closed());
        assert_eq!(open.area(), 0.0);
    }

    #[test]
    fn test_non_coplanar_polyline() {
        let skew = Polyline::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 5.0),
            DVec3::new(0.0, 10.0, 0.0),
        ]);
        assert!(!skew.is_planar());
        assert_eq!(skew.area(), 0.0);
    }

    #[test]
    fn test_tilted_rectangle_area() {
        // 10 x 10*sqrt(2) rectangle in the plane z = y.
        let tilted = Polyline::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(10.0, 10.0, 10.0),
            DVec3::new(0.0, 10.0, 10.0),
            DVec3::new(0.0, 0.0, 0.0),
        ]);
        assert!(tilted.is_closed());
        assert!(tilted.is_planar());
        let expected = 10.0 * (200.0_f64).sqrt();
        assert!((tilted.area() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_closedness_is_exact() {
        let nearly = Polyline::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(10.0, 10.0, 0.0),
            DVec3::new(0.0, 0.0, 1e-12),
        ]);
        assert!(!nearly.is_closed());
    }

    #[test]
    fn test_insert_and_remove_point() {
        let mut polyline = Polyline::new(vec![DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)]);
        polyline.insert_point(1, DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(polyline.points().len(), 3);
        assert!(geom::approx_eq(
            polyline.points()[1],
            DVec3::new(1.0, 0.0, 0.0)
        ));

        let removed = polyline.remove_point(1);
        assert!(removed.is_some());
        assert_eq!(polyline.points().len(), 2);
        assert!(polyline.remove_point(5).is_none());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Polyline::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y]);
        let b = Polyline::new(vec![DVec3::ZERO, DVec3::Y, DVec3::X]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
