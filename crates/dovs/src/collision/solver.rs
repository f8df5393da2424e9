use crate::math::{
    circle::Circle,
    num::{is_approx_eq, is_approx_zero},
    point::Point,
    vector::Vector,
    FloatNum,
};

/// Parameters `t` where `origin + direction * t` lies on `circle`.
///
/// `direction` must be a unit vector. A tangent line yields one parameter.
pub(crate) fn line_circle_params(
    origin: Point,
    direction: Vector,
    circle: &Circle,
    tolerance: FloatNum,
) -> Vec<FloatNum> {
    let center = circle.center();
    let radius = circle.radius();

    let to_center: Vector = (origin, center).into();
    let foot = to_center * direction;
    let foot_point = origin + direction * foot;
    let distance = foot_point.distance(&center);

    if distance > radius + tolerance {
        return vec![];
    }

    if is_approx_eq(distance, radius, tolerance) {
        return vec![foot];
    }

    let half_chord = (radius * radius - distance * distance).sqrt();
    vec![foot - half_chord, foot + half_chord]
}

/// Isolated crossing points of two circles.
///
/// Concentric circles never produce points, coincident ones included.
pub(crate) fn circle_circle_points(a: &Circle, b: &Circle, tolerance: FloatNum) -> Vec<Point> {
    let center_vector: Vector = (a.center(), b.center()).into();
    let d = center_vector.abs();
    let (r1, r2) = (a.radius(), b.radius());

    if is_approx_zero(d, tolerance) {
        return vec![];
    }

    // apart or nested
    if d > r1 + r2 + tolerance || d < (r1 - r2).abs() - tolerance {
        return vec![];
    }

    let unit = center_vector / d;
    let along = (r1 * r1 - r2 * r2 + d * d) / (2. * d);
    let base = a.center() + unit * along;

    let is_tangent =
        is_approx_eq(d, r1 + r2, tolerance) || is_approx_eq(d, (r1 - r2).abs(), tolerance);
    if is_tangent {
        return vec![base];
    }

    let half_chord = (r1 * r1 - along * along).max(0.).sqrt();
    let normal = !unit;
    vec![base + normal * half_chord, base - normal * half_chord]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: FloatNum = 1e-9;

    fn circle(x: FloatNum, y: FloatNum, r: FloatNum) -> Circle {
        Circle::new((x, y), r).unwrap()
    }

    #[test]
    fn test_line_through_center() {
        let params = line_circle_params(
            (-5., 0.).into(),
            (1., 0.).into(),
            &circle(0., 0., 2.),
            TOLERANCE,
        );
        assert_eq!(params, vec![3., 7.]);
    }

    #[test]
    fn test_tangent_line() {
        let params = line_circle_params(
            (-5., 2.).into(),
            (1., 0.).into(),
            &circle(0., 0., 2.),
            TOLERANCE,
        );
        assert_eq!(params, vec![5.]);
    }

    #[test]
    fn test_line_misses() {
        let params = line_circle_params(
            (-5., 2.5).into(),
            (1., 0.).into(),
            &circle(0., 0., 2.),
            TOLERANCE,
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_circles_cross() {
        let points = circle_circle_points(&circle(0., 0., 5.), &circle(8., 0., 5.), TOLERANCE);
        assert_eq!(points.len(), 2);
        assert!(points.iter().any(|p| p.is_approx(&Point::new(4., 3.), 1e-12)));
        assert!(points.iter().any(|p| p.is_approx(&Point::new(4., -3.), 1e-12)));
    }

    #[test]
    fn test_circles_touch_outside() {
        let points = circle_circle_points(&circle(0., 0., 5.), &circle(10., 0., 5.), TOLERANCE);
        assert_eq!(points, vec![Point::new(5., 0.)]);
    }

    #[test]
    fn test_circles_touch_inside() {
        let points = circle_circle_points(&circle(0., 0., 1.), &circle(-2., 0., 3.), TOLERANCE);
        assert_eq!(points.len(), 1);
        assert!(points[0].is_approx(&Point::new(1., 0.), 1e-12));
    }

    #[test]
    fn test_circles_apart_or_nested() {
        assert!(circle_circle_points(&circle(0., 0., 5.), &circle(11., 0., 5.), TOLERANCE).is_empty());
        assert!(circle_circle_points(&circle(0., 0., 5.), &circle(1., 0., 1.), TOLERANCE).is_empty());
    }

    #[test]
    fn test_concentric_circles() {
        assert!(circle_circle_points(&circle(1., 1., 2.), &circle(1., 1., 2.), TOLERANCE).is_empty());
        assert!(circle_circle_points(&circle(1., 1., 2.), &circle(1., 1., 3.), TOLERANCE).is_empty());
    }
}
