use thiserror::Error;

use crate::math::FloatNum;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// turning radius `v / w` requested with `w == 0`
    #[error("angular velocity is zero, turning radius for linear velocity {linear} is undefined")]
    DivisionByZero { linear: FloatNum },

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// arc length requested for two points that can't both lie on the circle
    #[error("chord {chord} exceeds diameter {diameter}")]
    ChordExceedsDiameter { chord: FloatNum, diameter: FloatNum },
}

impl GeometryError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
