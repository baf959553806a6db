//! Circle curve.

use super::CurveStyle;
use crate::geom::{self, Point3, Vector3, TOLERANCE};
use kurbo::{BezPath, Circle as KurboCircle, Shape as KurboShape};
use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

/// A circle in 3D space, defined by its center, plane normal, and radius.
#[derive(Debug, Clone)]
pub struct Circle {
    /// Center point.
    pub center: Point3,
    /// Normal of the circle's plane.
    pub normal: Vector3,
    /// Radius, non-negative.
    pub radius: f64,
    /// Presentation attributes.
    pub style: CurveStyle,
}

impl Circle {
    /// Prompt shown while the circle tool waits for a center point.
    pub const START_MESSAGE: &'static str = "Please select the center point of the circle.";
    /// Prompt shown while the circle tool waits for a circumference point.
    pub const END_MESSAGE: &'static str = "Please select a point at the circle's circumference.";

    /// Create a new circle.
    pub fn new(center: Point3, normal: Vector3, radius: f64) -> Self {
        Self {
            center,
            normal,
            radius,
            style: CurveStyle::default(),
        }
    }

    /// Circumference of the circle.
    pub fn length(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Enclosed area of the circle.
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Get as a kurbo circle on the drawing plane.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(geom::to_drawing_plane(self.center), self.radius)
    }

    /// Path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        geom::approx_eq(self.center, other.center)
            && geom::approx_eq(self.normal, other.normal)
            && (self.radius - other.radius).abs() <= TOLERANCE
    }
}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        geom::hash_coords(self.center, state);
        geom::hash_coords(self.normal, state);
        state.write_u64(self.radius.to_bits());
    }
}
