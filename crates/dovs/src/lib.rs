pub mod collision;
pub mod context;
pub mod error;
pub mod math;
pub mod meta;
pub mod renderer;
pub mod shape;
pub mod trajectory;

pub mod prelude {
    pub use super::collision::{
        intersect, intersect_all, intersect_with_context, BoundarySide, Intersection,
        IntersectionPair, Intersections,
    };
    pub use super::context::{GeometryContext, GeometryContextBuilder};
    pub use super::error::{GeometryError, Result};
    pub use super::math::{
        circle::Circle, line::Line, point::Point, segment::Segment, vector::Vector, FloatNum,
    };
    pub use super::meta::{Angle, Pose, Velocity};
    pub use super::renderer::{Color, Render, Renderer};
    pub use super::shape::BoundaryCurve;
    pub use super::trajectory::{
        CircularCorridor, Corridor, DistanceMetric, LinearCorridor, RobotPath,
    };
}
