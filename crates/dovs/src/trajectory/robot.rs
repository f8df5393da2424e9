use dovs_macro_tools::Fields;

use crate::{
    error::Result,
    math::{circle::Circle, point::Point, FloatNum},
    meta::{Pose, Velocity},
};

/// The circle the robot's reference point follows at a fixed turning radius.
///
/// `radius` keeps the sign it was given: positive turns left of the heading,
/// negative turns right. The circle itself always has the magnitude as radius.
#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[r(copy)]
pub struct RobotPath {
    radius: FloatNum,
    circle: Circle,
}

impl RobotPath {
    pub fn new(radius: FloatNum, position: impl Into<Pose>) -> Result<Self> {
        let center = position.into().turning_center(radius);
        let circle = Circle::new(center, radius.abs())?;

        log::debug!("robot path around {center} with radius {radius}");

        Ok(Self { radius, circle })
    }

    pub fn from_velocity(velocity: impl Into<Velocity>, position: impl Into<Pose>) -> Result<Self> {
        let radius = velocity.into().turning_radius()?;
        Self::new(radius, position)
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.circle.center()
    }
}
