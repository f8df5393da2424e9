use dovs_macro_tools::Fields;

use crate::{
    error::{GeometryError, Result},
    math::{line::Line, point::Point, segment::Segment, vector::Vector, FloatNum},
    meta::Angle,
};

/// Corridor of an obstacle moving in a straight line.
///
/// Both boundaries are segments parallel to the direction of travel, one
/// through each extremal point of the obstacle footprint. Each segment runs
/// between the canonical points of its supporting line. When `angle` is
/// negative the second point of each segment is reflected through the origin.
#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[r(copy)]
pub struct LinearCorridor {
    boundary1: Segment,
    boundary2: Segment,
    angle: Angle,
}

impl LinearCorridor {
    pub fn new(point1: impl Into<Point>, point2: impl Into<Point>, angle: Angle) -> Result<Self> {
        if !angle.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "direction of travel {angle} is not finite"
            )));
        }

        let direction = Vector::from_angle(angle);

        let to_boundary = |point: Point| -> Result<Segment> {
            let line = Line::from_point_direction(point, direction)?;
            let (start_point, end_point) = line.canonical_points();
            // TODO confirm whether the end point should be mirrored around
            // `start_point` rather than the origin
            if angle < 0. {
                Segment::new(start_point, -end_point)
            } else {
                Segment::new(start_point, end_point)
            }
        };

        let boundary1 = to_boundary(point1.into())?;
        let boundary2 = to_boundary(point2.into())?;

        log::debug!(
            "linear corridor at angle {angle}: {} -> {}, {} -> {}",
            boundary1.start_point(),
            boundary1.end_point(),
            boundary2.start_point(),
            boundary2.end_point()
        );

        Ok(Self {
            boundary1,
            boundary2,
            angle,
        })
    }

    #[inline]
    pub fn distance_between_points(&self, p1: &Point, p2: &Point) -> FloatNum {
        p1.distance(p2)
    }
}
