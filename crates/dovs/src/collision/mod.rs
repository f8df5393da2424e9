mod solver;

use dovs_macro_tools::{Deref, Fields};

use crate::{
    context::GeometryContext,
    math::{circle::Circle, line::Line, num::is_in_range, point::Point, segment::Segment},
    shape::BoundaryCurve,
    trajectory::{Corridor, RobotPath},
};

/// 0, 1 (tangent) or 2 crossing points, in no particular order
#[derive(Clone, Debug, Default, PartialEq, Deref)]
pub struct Intersections {
    #[deref]
    points: Vec<Point>,
}

impl Intersections {
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for Intersections {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl IntoIterator for Intersections {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// crossing points between `self` and another primitive
pub trait Intersection<T: ?Sized> {
    fn intersection(&self, other: &T, context: &GeometryContext) -> Intersections;
}

impl Intersection<Line> for Circle {
    fn intersection(&self, line: &Line, context: &GeometryContext) -> Intersections {
        solver::line_circle_params(line.point(), line.direction(), self, context.tolerance())
            .into_iter()
            .map(|t| line.point_at(t))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Intersection<Segment> for Circle {
    fn intersection(&self, segment: &Segment, context: &GeometryContext) -> Intersections {
        let tolerance = context.tolerance();
        let line = segment.supporting_line();
        let length = segment.length();

        // keep what the bounded segment actually covers
        solver::line_circle_params(line.point(), line.direction(), self, tolerance)
            .into_iter()
            .filter(|&t| is_in_range(t, 0., length, tolerance))
            .map(|t| line.point_at(t))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Intersection<Circle> for Circle {
    fn intersection(&self, circle: &Circle, context: &GeometryContext) -> Intersections {
        solver::circle_circle_points(self, circle, context.tolerance()).into()
    }
}

impl Intersection<BoundaryCurve> for Circle {
    fn intersection(&self, curve: &BoundaryCurve, context: &GeometryContext) -> Intersections {
        match curve {
            BoundaryCurve::Segment(segment) => self.intersection(segment, context),
            BoundaryCurve::Circle(circle) => self.intersection(circle, context),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundarySide {
    First,
    Second,
}

/// where a robot path crosses each boundary of one corridor
#[derive(Clone, Debug, Default, PartialEq, Fields)]
#[r]
pub struct IntersectionPair {
    boundary1: Intersections,
    boundary2: Intersections,
}

impl IntersectionPair {
    pub fn len(&self) -> usize {
        self.boundary1.len() + self.boundary2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoundarySide, &Point)> {
        self.boundary1
            .iter()
            .map(|p| (BoundarySide::First, p))
            .chain(self.boundary2.iter().map(|p| (BoundarySide::Second, p)))
    }

    pub fn into_parts(self) -> (Intersections, Intersections) {
        (self.boundary1, self.boundary2)
    }
}

pub fn intersect(robot_path: &RobotPath, corridor: &Corridor) -> IntersectionPair {
    intersect_with_context(robot_path, corridor, &GeometryContext::default())
}

pub fn intersect_with_context(
    robot_path: &RobotPath,
    corridor: &Corridor,
    context: &GeometryContext,
) -> IntersectionPair {
    let circle = robot_path.circle();
    let (boundary1, boundary2) = corridor.boundaries();

    let pair = IntersectionPair {
        boundary1: circle.intersection(&boundary1, context),
        boundary2: circle.intersection(&boundary2, context),
    };

    log::trace!(
        "robot path centered at {} crosses corridor boundaries at {} + {} points",
        circle.center(),
        pair.boundary1.len(),
        pair.boundary2.len()
    );

    pair
}

/// one result per corridor, in input order
pub fn intersect_all<'a>(
    robot_path: &RobotPath,
    corridors: impl IntoIterator<Item = &'a Corridor>,
    context: &GeometryContext,
) -> Vec<IntersectionPair> {
    corridors
        .into_iter()
        .map(|corridor| intersect_with_context(robot_path, corridor, context))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FloatNum;

    fn context() -> GeometryContext {
        GeometryContext::default()
    }

    fn circle(x: FloatNum, y: FloatNum, r: FloatNum) -> Circle {
        Circle::new((x, y), r).unwrap()
    }

    #[test]
    fn test_circle_line_reports_points_outside_any_segment() {
        let line = Line::through_points((10., 0.), (11., 0.)).unwrap();
        let points = circle(0., 0., 1.).intersection(&line, &context());
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_circle_segment_filters_by_extent() {
        let c = circle(0., 0., 1.);

        let covering = Segment::new((-2., 0.), (2., 0.)).unwrap();
        assert_eq!(c.intersection(&covering, &context()).len(), 2);

        let half = Segment::new((0., 0.), (2., 0.)).unwrap();
        let points = c.intersection(&half, &context());
        assert_eq!(points.len(), 1);
        assert!(points[0].is_approx(&Point::new(1., 0.), 1e-12));

        let away = Segment::new((2., 0.), (3., 0.)).unwrap();
        assert!(c.intersection(&away, &context()).is_empty());
    }

    #[test]
    fn test_segment_endpoint_on_circle_is_kept() {
        let c = circle(0., 0., 1.);
        let segment = Segment::new((1., 0.), (5., 0.)).unwrap();
        let points = c.intersection(&segment, &context());
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_boundary_curve_dispatch() {
        let c = circle(0., 0., 5.);
        let curve: BoundaryCurve = circle(8., 0., 5.).into();
        assert_eq!(c.intersection(&curve, &context()).len(), 2);

        let curve: BoundaryCurve = Segment::new((0., 5.), (1., 5.)).unwrap().into();
        assert_eq!(c.intersection(&curve, &context()).len(), 1);
    }

    #[test]
    fn test_intersection_pair_iter_tags_sides() {
        let pair = IntersectionPair {
            boundary1: vec![Point::new(0., 1.)].into(),
            boundary2: vec![Point::new(2., 3.), Point::new(4., 5.)].into(),
        };

        assert_eq!(pair.len(), 3);
        let sides: Vec<_> = pair.iter().map(|(side, _)| side).collect();
        assert_eq!(
            sides,
            vec![BoundarySide::First, BoundarySide::Second, BoundarySide::Second]
        );
    }
}
