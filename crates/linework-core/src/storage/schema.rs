//! Wire records for curve persistence.
//!
//! The on-disk form is a closed, discriminated record schema: each record
//! carries a stable `"type"` tag, decoupled from internal type names.

use super::StorageError;
use crate::geom::Point3;
use crate::shapes::{Circle, Curve, Line, Polyline};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A 3D coordinate triple as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct PointRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<DVec3> for PointRecord {
    fn from(p: DVec3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl PointRecord {
    /// Convert to a model point, rejecting non-finite coordinates.
    fn validate(self, field: &str) -> Result<Point3, StorageError> {
        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            return Err(StorageError::Format(format!(
                "non-finite coordinate in {field}"
            )));
        }
        Ok(DVec3::new(self.x, self.y, self.z))
    }
}

/// One persisted curve, tagged with its variant discriminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum CurveRecord {
    #[serde(rename = "line", rename_all = "camelCase")]
    Line {
        start_point: PointRecord,
        end_point: PointRecord,
    },
    #[serde(rename = "circle", rename_all = "camelCase")]
    Circle {
        center_point: PointRecord,
        normal: PointRecord,
        radius: f64,
    },
    #[serde(rename = "polyline")]
    Polyline { points: Vec<PointRecord> },
}

impl From<&Curve> for CurveRecord {
    fn from(curve: &Curve) -> Self {
        match curve {
            Curve::Line(line) => CurveRecord::Line {
                start_point: line.start.into(),
                end_point: line.end.into(),
            },
            Curve::Circle(circle) => CurveRecord::Circle {
                center_point: circle.center.into(),
                normal: circle.normal.into(),
                radius: circle.radius,
            },
            Curve::Polyline(polyline) => CurveRecord::Polyline {
                points: polyline.points().iter().copied().map(Into::into).collect(),
            },
        }
    }
}

impl TryFrom<CurveRecord> for Curve {
    type Error = StorageError;

    fn try_from(record: CurveRecord) -> Result<Self, StorageError> {
        match record {
            CurveRecord::Line {
                start_point,
                end_point,
            } => Ok(Curve::Line(Line::new(
                start_point.validate("line.startPoint")?,
                end_point.validate("line.endPoint")?,
            ))),
            CurveRecord::Circle {
                center_point,
                normal,
                radius,
            } => {
                if !radius.is_finite() {
                    return Err(StorageError::Format(
                        "non-finite circle radius".to_string(),
                    ));
                }
                if radius < 0.0 {
                    return Err(StorageError::Format(format!(
                        "negative circle radius {radius}"
                    )));
                }
                Ok(Curve::Circle(Circle::new(
                    center_point.validate("circle.centerPoint")?,
                    normal.validate("circle.normal")?,
                    radius,
                )))
            }
            CurveRecord::Polyline { points } => {
                let points = points
                    .into_iter()
                    .enumerate()
                    .map(|(index, point)| point.validate(&format!("polyline.points[{index}]")))
                    .collect::<Result<Vec<Point3>, StorageError>>()?;
                Ok(Curve::Polyline(Polyline::new(points)))
            }
        }
    }
}
