use dovs_macro_tools::Fields;

use super::{point::Point, vector::Vector, FloatNum};
use crate::error::{GeometryError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[r(copy)]
pub struct Circle {
    center: Point,
    radius: FloatNum,
}

impl Circle {
    pub fn new(center: impl Into<Point>, radius: FloatNum) -> Result<Self> {
        let center = center.into();

        if !center.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "circle center {center} is not finite"
            )));
        }

        if !radius.is_finite() || radius <= 0. {
            return Err(GeometryError::degenerate(format!(
                "circle at {center} needs a positive radius, got {radius}"
            )));
        }

        Ok(Self { center, radius })
    }

    #[inline]
    pub fn point_at_angle(&self, angle: FloatNum) -> Point {
        self.center + Vector::from_angle(angle) * self.radius
    }

    pub fn contains_on_edge(&self, point: &Point, tolerance: FloatNum) -> bool {
        (self.center.distance(point) - self.radius).abs() <= tolerance
    }
}

impl TryFrom<(Point, FloatNum)> for Circle {
    type Error = GeometryError;

    fn try_from((center, radius): (Point, FloatNum)) -> Result<Self> {
        Self::new(center, radius)
    }
}
