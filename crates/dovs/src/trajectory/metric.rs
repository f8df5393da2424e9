use crate::{
    context::GeometryContext,
    error::{GeometryError, Result},
    math::{num::is_approx_zero, point::Point, FloatNum},
};

/// how far apart two points are along an obstacle's motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistanceMetric {
    /// straight line
    Euclidean,
    /// along a circle of `radius`, sign of the radius is ignored
    ArcLength { radius: FloatNum },
}

impl DistanceMetric {
    pub fn distance(&self, p1: &Point, p2: &Point, context: &GeometryContext) -> Result<FloatNum> {
        match *self {
            Self::Euclidean => Ok(p1.distance(p2)),
            Self::ArcLength { radius } => arc_length(p1.distance(p2), radius, context.tolerance()),
        }
    }
}

/// `|r| * 2 * atan(chord / (2 * |r|))`
pub(crate) fn arc_length(chord: FloatNum, radius: FloatNum, tolerance: FloatNum) -> Result<FloatNum> {
    if !radius.is_finite() || !chord.is_finite() {
        return Err(GeometryError::degenerate(format!(
            "arc length of chord {chord} on radius {radius} is not finite"
        )));
    }

    if chord == 0. {
        return Ok(0.);
    }

    let radius = radius.abs();
    if is_approx_zero(radius, tolerance) {
        return Err(GeometryError::degenerate(format!(
            "chord {chord} can't lie on a circle of radius {radius}"
        )));
    }

    let diameter = 2. * radius;
    if chord > diameter + tolerance {
        return Err(GeometryError::ChordExceedsDiameter { chord, diameter });
    }

    let theta = 2. * (chord / diameter).atan();
    Ok(radius * theta)
}
