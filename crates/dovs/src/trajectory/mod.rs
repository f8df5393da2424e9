mod circular;
mod linear;
mod metric;
mod robot;

pub use circular::CircularCorridor;
pub use linear::LinearCorridor;
pub use metric::DistanceMetric;
pub use robot::RobotPath;

use crate::{
    context::GeometryContext,
    error::Result,
    math::{point::Point, FloatNum},
    meta::{Angle, Pose, Velocity},
    shape::BoundaryCurve,
};

/// swept region of one obstacle, bounded by two curves of the same kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Corridor {
    Linear(LinearCorridor),
    Circular(CircularCorridor),
}

impl Corridor {
    pub fn linear(point1: impl Into<Point>, point2: impl Into<Point>, angle: Angle) -> Result<Self> {
        LinearCorridor::new(point1, point2, angle).map(Self::Linear)
    }

    pub fn circular(
        point1: impl Into<Point>,
        point2: impl Into<Point>,
        position: impl Into<Pose>,
        velocity: impl Into<Velocity>,
    ) -> Result<Self> {
        CircularCorridor::new(point1, point2, position, velocity).map(Self::Circular)
    }

    pub fn boundary1(&self) -> BoundaryCurve {
        match self {
            Self::Linear(corridor) => corridor.boundary1().into(),
            Self::Circular(corridor) => corridor.boundary1().into(),
        }
    }

    pub fn boundary2(&self) -> BoundaryCurve {
        match self {
            Self::Linear(corridor) => corridor.boundary2().into(),
            Self::Circular(corridor) => corridor.boundary2().into(),
        }
    }

    pub fn boundaries(&self) -> (BoundaryCurve, BoundaryCurve) {
        (self.boundary1(), self.boundary2())
    }

    /// `v / w` of a turning obstacle, `None` for straight motion
    pub fn turning_radius(&self) -> Option<FloatNum> {
        match self {
            Self::Linear(_) => None,
            Self::Circular(corridor) => Some(corridor.turning_radius()),
        }
    }

    pub fn metric(&self) -> DistanceMetric {
        match self {
            Self::Linear(_) => DistanceMetric::Euclidean,
            Self::Circular(corridor) => DistanceMetric::ArcLength {
                radius: corridor.turning_radius(),
            },
        }
    }

    pub fn distance_between_points(&self, p1: &Point, p2: &Point) -> Result<FloatNum> {
        self.distance_between_points_with_context(p1, p2, &GeometryContext::default())
    }

    pub fn distance_between_points_with_context(
        &self,
        p1: &Point,
        p2: &Point,
        context: &GeometryContext,
    ) -> Result<FloatNum> {
        self.metric().distance(p1, p2, context)
    }
}

impl From<LinearCorridor> for Corridor {
    fn from(corridor: LinearCorridor) -> Self {
        Self::Linear(corridor)
    }
}

impl From<CircularCorridor> for Corridor {
    fn from(corridor: CircularCorridor) -> Self {
        Self::Circular(corridor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_boundaries_share_kind() {
        let linear = Corridor::linear((0., 0.), (0., 2.), 0.).unwrap();
        let (b1, b2) = linear.boundaries();
        assert!(b1.as_segment().is_some() && b2.as_segment().is_some());

        let circular = Corridor::circular((0., 1.), (0., -1.), (0., 0., 0.), (2., 1.)).unwrap();
        let (b1, b2) = circular.boundaries();
        assert!(b1.as_circle().is_some() && b2.as_circle().is_some());
    }

    #[test]
    fn test_metric_follows_variant() {
        let linear = Corridor::linear((0., 0.), (0., 2.), 0.).unwrap();
        assert_eq!(linear.metric(), DistanceMetric::Euclidean);
        assert_eq!(linear.turning_radius(), None);

        let circular = Corridor::circular((0., 1.), (0., -1.), (0., 0., 0.), (2., 1.)).unwrap();
        assert_eq!(circular.metric(), DistanceMetric::ArcLength { radius: 2. });
        assert_eq!(circular.turning_radius(), Some(2.));
    }

    #[test]
    fn test_distance_dispatch() {
        let p1 = Point::new(0., 0.);
        let p2 = Point::new(0., 4.);

        let linear = Corridor::linear((0., 0.), (0., 2.), 0.).unwrap();
        assert_eq!(linear.distance_between_points(&p1, &p2), Ok(4.));

        let circular = Corridor::circular((0., 1.), (0., -1.), (0., 0., 0.), (2., 1.)).unwrap();
        let arc = circular.distance_between_points(&p1, &p2).unwrap();
        assert!((arc - std::f64::consts::PI).abs() < 1e-12);

        let circular = Corridor::circular((0., 1.), (0., -1.), (0., 0., 0.), (1., 1.)).unwrap();
        assert!(matches!(
            circular.distance_between_points(&p1, &p2),
            Err(GeometryError::ChordExceedsDiameter { .. })
        ));
    }
}
