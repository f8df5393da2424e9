use dovs_macro_tools::Fields;

use crate::{
    error::{GeometryError, Result},
    math::{point::Point, vector::Vector, FloatNum, FRAC_PI_2},
};

pub type Angle = FloatNum;

/// position plus heading, `theta` in radians and not normalized
#[derive(Clone, Copy, Debug, Default, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[r(copy)]
pub struct Pose {
    x: FloatNum,
    y: FloatNum,
    theta: Angle,
}

impl Pose {
    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum, theta: Angle) -> Self {
        Self { x, y, theta }
    }

    #[inline]
    pub fn position(&self) -> Point {
        (self.x, self.y).into()
    }

    /// unit vector pointing to the left of the heading
    #[inline]
    pub fn left_normal(&self) -> Vector {
        Vector::from_angle(self.theta + FRAC_PI_2)
    }

    /// center of the circle followed when turning with `radius`,
    /// a negative radius puts it on the right of the heading
    pub fn turning_center(&self, radius: FloatNum) -> Point {
        self.position() + self.left_normal() * radius
    }
}

impl From<(FloatNum, FloatNum, FloatNum)> for Pose {
    fn from((x, y, theta): (FloatNum, FloatNum, FloatNum)) -> Self {
        Self::new(x, y, theta)
    }
}

impl From<[FloatNum; 3]> for Pose {
    fn from([x, y, theta]: [FloatNum; 3]) -> Self {
        Self::new(x, y, theta)
    }
}

/// linear speed `v` and angular speed `w` of a unicycle model
#[derive(Clone, Copy, Debug, Default, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[r(copy)]
pub struct Velocity {
    v: FloatNum,
    w: FloatNum,
}

impl Velocity {
    #[inline]
    pub const fn new(v: FloatNum, w: FloatNum) -> Self {
        Self { v, w }
    }

    /// signed `v / w`
    pub fn turning_radius(&self) -> Result<FloatNum> {
        if self.w == 0. {
            return Err(GeometryError::DivisionByZero { linear: self.v });
        }
        Ok(self.v / self.w)
    }
}

impl From<(FloatNum, FloatNum)> for Velocity {
    fn from((v, w): (FloatNum, FloatNum)) -> Self {
        Self::new(v, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    #[test]
    fn test_turning_radius() {
        assert_eq!(Velocity::new(2., 0.5).turning_radius(), Ok(4.));
        assert_eq!(Velocity::new(2., -0.5).turning_radius(), Ok(-4.));
    }

    #[test]
    fn test_turning_radius_without_rotation() {
        assert_eq!(
            Velocity::new(1.5, 0.).turning_radius(),
            Err(GeometryError::DivisionByZero { linear: 1.5 })
        );
    }

    #[test]
    fn test_turning_center_is_left_of_heading() {
        let pose = Pose::new(0., 0., 0.);
        assert!(pose.turning_center(3.).is_approx(&Point::new(0., 3.), 1e-12));
        assert!(pose.turning_center(-3.).is_approx(&Point::new(0., -3.), 1e-12));

        let pose: Pose = (1., 1., PI).into();
        assert!(pose.turning_center(2.).is_approx(&Point::new(1., -1.), 1e-12));
    }
}
