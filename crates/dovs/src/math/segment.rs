use dovs_macro_tools::Fields;

use super::{line::Line, point::Point, vector::Vector, FloatNum};
use crate::error::{GeometryError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[r(copy)]
pub struct Segment {
    start_point: Point,
    end_point: Point,
}

impl Segment {
    pub fn new(start_point: impl Into<Point>, end_point: impl Into<Point>) -> Result<Self> {
        let start_point = start_point.into();
        let end_point = end_point.into();

        if !start_point.is_finite() || !end_point.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "segment {start_point} -> {end_point} is not finite"
            )));
        }

        if Vector::from((start_point, end_point)).is_zero() {
            return Err(GeometryError::degenerate(format!(
                "segment endpoints coincide at {start_point}"
            )));
        }

        Ok(Self {
            start_point,
            end_point,
        })
    }

    #[inline]
    pub fn to_vector(&self) -> Vector {
        (self.start_point, self.end_point).into()
    }

    #[inline]
    pub fn length(&self) -> FloatNum {
        self.to_vector().abs()
    }

    pub fn supporting_line(&self) -> Line {
        // endpoints are finite and distinct, so the direction is never zero
        Line::new_unchecked(self.start_point, self.to_vector())
    }
}

impl TryFrom<(Point, Point)> for Segment {
    type Error = GeometryError;

    fn try_from((start_point, end_point): (Point, Point)) -> Result<Self> {
        Self::new(start_point, end_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_segment_is_rejected() {
        let result = Segment::new((2., 2.), (2., 2.));
        assert!(matches!(result, Err(GeometryError::DegenerateGeometry(_))));
    }

    #[test]
    fn test_nan_endpoint_is_rejected() {
        let result = Segment::new((FloatNum::NAN, 0.), (1., 0.));
        assert!(matches!(result, Err(GeometryError::DegenerateGeometry(_))));
    }

    #[test]
    fn test_length_and_line() {
        let segment = Segment::new((0., 0.), (0., 4.)).unwrap();
        assert_eq!(segment.length(), 4.);

        let line = segment.supporting_line();
        assert!(line.is_vertical());
        assert_eq!(line.point(), Point::new(0., 0.));
    }
}
