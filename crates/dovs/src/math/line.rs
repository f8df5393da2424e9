use dovs_macro_tools::Fields;

use super::{point::Point, segment::Segment, vector::Vector, FloatNum};
use crate::error::{GeometryError, Result};

// |x| of the unit direction below which a line has no usable slope,
// an angle of this size away from vertical
const VERTICAL_EPSILON: FloatNum = 1e-12;

/// infinite line through `point`, `direction` is kept normalized
#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[r(copy)]
pub struct Line {
    point: Point,
    direction: Vector,
}

impl Line {
    pub fn from_point_direction(point: impl Into<Point>, direction: impl Into<Vector>) -> Result<Self> {
        let point = point.into();
        let direction = direction.into();

        if !point.is_finite() || !direction.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "line through {point} with direction {direction} is not finite"
            )));
        }

        if direction.is_zero() {
            return Err(GeometryError::degenerate(format!(
                "line through {point} has zero direction"
            )));
        }

        Ok(Self {
            point,
            direction: direction.normalize(),
        })
    }

    pub(crate) fn new_unchecked(point: Point, direction: Vector) -> Self {
        Self {
            point,
            direction: direction.normalize(),
        }
    }

    /// vertical lines have no finite slope, use [`Line::from_point_direction`] for them
    pub fn from_point_slope(point: impl Into<Point>, slope: FloatNum) -> Result<Self> {
        if !slope.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "slope {slope} can't describe a line, vertical lines need a direction"
            )));
        }
        Self::from_point_direction(point, (1., slope))
    }

    pub fn through_points(p1: impl Into<Point>, p2: impl Into<Point>) -> Result<Self> {
        let p1 = p1.into();
        let p2 = p2.into();
        Self::from_point_direction(p1, Vector::from((p1, p2)))
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.direction.x().abs() < VERTICAL_EPSILON
    }

    /// `None` for vertical lines
    pub fn slope(&self) -> Option<FloatNum> {
        (!self.is_vertical()).then(|| self.direction.y() / self.direction.x())
    }

    #[inline]
    pub fn point_at(&self, t: FloatNum) -> Point {
        self.point + self.direction * t
    }

    /// the two points a slope based line is described by:
    /// `point` and `point + (1, slope)`, or `point + (0, 1)` when vertical
    pub fn canonical_points(&self) -> (Point, Point) {
        let step: Vector = match self.slope() {
            Some(slope) => (1., slope).into(),
            None => (0., 1.).into(),
        };
        (self.point, self.point + step)
    }

    pub fn to_segment(&self) -> Result<Segment> {
        let (start_point, end_point) = self.canonical_points();
        Segment::new(start_point, end_point)
    }
}
