//! Line curve.

use super::CurveStyle;
use crate::geom::{self, Point3, Vector3};
use kurbo::BezPath;
use std::hash::{Hash, Hasher};

/// A straight segment between two points in 3D space.
#[derive(Debug, Clone)]
pub struct Line {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
    /// Presentation attributes.
    pub style: CurveStyle,
}

impl Line {
    /// Prompt shown while the line tool waits for a start point.
    pub const START_MESSAGE: &'static str = "Please select the start point of the line.";
    /// Prompt shown while the line tool waits for an end point.
    pub const END_MESSAGE: &'static str = "Please select the end point of the line.";

    /// Create a new line.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            style: CurveStyle::default(),
        }
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f64 {
        geom::distance(self.start, self.end)
    }

    /// Normalized direction from start to end.
    ///
    /// A degenerate line (start and end coincide within tolerance) has the
    /// zero vector as its direction.
    pub fn direction(&self) -> Vector3 {
        geom::normalize_or_zero(self.end - self.start)
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point3 {
        (self.start + self.end) * 0.5
    }

    /// Path projection onto the drawing plane.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(geom::to_drawing_plane(self.start));
        path.line_to(geom::to_drawing_plane(self.end));
        path
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        geom::approx_eq(self.start, other.start) && geom::approx_eq(self.end, other.end)
    }
}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        geom::hash_coords(self.start, state);
        geom::hash_coords(self.end, state);
    }
}
