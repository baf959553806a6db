//! Curve definitions for the drawing model.

mod circle;
mod line;
mod polyline;

pub use circle::Circle;
pub use line::Line;
pub use polyline::Polyline;

use kurbo::BezPath;
use peniko::Color;

/// Stroke style for curve outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl StrokeStyle {
    /// Cycle to the next stroke style.
    pub fn next(self) -> Self {
        match self {
            StrokeStyle::Solid => StrokeStyle::Dashed,
            StrokeStyle::Dashed => StrokeStyle::Dotted,
            StrokeStyle::Dotted => StrokeStyle::Solid,
        }
    }
}

/// Presentation attributes for drawing a curve.
///
/// Not part of curve equality and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct CurveStyle {
    /// Stroke color.
    pub stroke_color: Color,
    /// Stroke width.
    pub stroke_width: f64,
    /// Stroke style (Solid, Dashed, Dotted).
    pub stroke_style: StrokeStyle,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::from_rgba8(0, 0, 0, 255),
            stroke_width: 2.0,
            stroke_style: StrokeStyle::default(),
        }
    }
}

/// Discriminant for the closed set of curve variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Line,
    Circle,
    Polyline,
}

/// Enum wrapper for all curve types.
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum Curve {
    Line(Line),
    Circle(Circle),
    Polyline(Polyline),
}

impl Curve {
    /// Get the variant discriminant.
    pub fn kind(&self) -> CurveKind {
        match self {
            Curve::Line(_) => CurveKind::Line,
            Curve::Circle(_) => CurveKind::Circle,
            Curve::Polyline(_) => CurveKind::Polyline,
        }
    }

    /// Get the length of the curve.
    pub fn length(&self) -> f64 {
        match self {
            Curve::Line(c) => c.length(),
            Curve::Circle(c) => c.length(),
            Curve::Polyline(c) => c.length(),
        }
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            Curve::Line(c) => c.to_path(),
            Curve::Circle(c) => c.to_path(),
            Curve::Polyline(c) => c.to_path(),
        }
    }

    /// Get the style.
    pub fn style(&self) -> &CurveStyle {
        match self {
            Curve::Line(c) => &c.style,
            Curve::Circle(c) => &c.style,
            Curve::Polyline(c) => &c.style,
        }
    }

    /// Get mutable style.
    pub fn style_mut(&mut self) -> &mut CurveStyle {
        match self {
            Curve::Line(c) => &mut c.style,
            Curve::Circle(c) => &mut c.style,
            Curve::Polyline(c) => &mut c.style,
        }
    }

    /// Get the line if this curve is a line.
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Curve::Line(c) => Some(c),
            _ => None,
        }
    }

    /// Get the circle if this curve is a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Curve::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Get the polyline if this curve is a polyline.
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Curve::Polyline(c) => Some(c),
            _ => None,
        }
    }
}
