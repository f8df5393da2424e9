use crate::math::{circle::Circle, segment::Segment};

/// one edge of a corridor
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryCurve {
    Segment(Segment),
    Circle(Circle),
}

impl BoundaryCurve {
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Self::Segment(segment) => Some(segment),
            Self::Circle(_) => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(circle) => Some(circle),
            Self::Segment(_) => None,
        }
    }
}

impl From<Segment> for BoundaryCurve {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Circle> for BoundaryCurve {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}
