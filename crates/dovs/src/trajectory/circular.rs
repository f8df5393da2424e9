use dovs_macro_tools::Fields;

use super::metric::arc_length;
use crate::{
    context::GeometryContext,
    error::Result,
    math::{circle::Circle, point::Point, FloatNum},
    meta::{Pose, Velocity},
};

/// Corridor of an obstacle turning at constant `v` and `w`.
///
/// Both extremal points of the footprint circle around the obstacle's turning
/// center, so the boundaries are two concentric circles. Their radii come in
/// whatever order the points give them.
#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[r(copy)]
pub struct CircularCorridor {
    boundary1: Circle,
    boundary2: Circle,
    center: Point,
    // signed `v / w` of the obstacle, not a boundary radius
    turning_radius: FloatNum,
}

impl CircularCorridor {
    pub fn new(
        point1: impl Into<Point>,
        point2: impl Into<Point>,
        position: impl Into<Pose>,
        velocity: impl Into<Velocity>,
    ) -> Result<Self> {
        let velocity = velocity.into();
        let turning_radius = velocity.turning_radius().inspect_err(|err| {
            log::debug!("rejecting circular corridor for {velocity:?}: {err}");
        })?;

        let center = position.into().turning_center(turning_radius);

        let point1 = point1.into();
        let point2 = point2.into();
        let boundary1 = Circle::new(center, center.distance(&point1))?;
        let boundary2 = Circle::new(center, center.distance(&point2))?;

        log::debug!(
            "circular corridor around {center}, turning radius {turning_radius}, boundary radii {} and {}",
            boundary1.radius(),
            boundary2.radius()
        );

        Ok(Self {
            boundary1,
            boundary2,
            center,
            turning_radius,
        })
    }

    pub fn distance_between_points(&self, p1: &Point, p2: &Point) -> Result<FloatNum> {
        self.distance_between_points_with_context(p1, p2, &GeometryContext::default())
    }

    /// arc length along the obstacle's turning circle for the chord `p1 -> p2`
    pub fn distance_between_points_with_context(
        &self,
        p1: &Point,
        p2: &Point,
        context: &GeometryContext,
    ) -> Result<FloatNum> {
        arc_length(p1.distance(p2), self.turning_radius, context.tolerance())
    }
}
