use dovs::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const ROUNDS: usize = 500;

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
}

fn linear_corridor() -> Corridor {
    Corridor::linear((0., 0.), (0., 2.), 0.3).unwrap()
}

#[test]
fn euclidean_distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    let corridor = linear_corridor();

    for _ in 0..ROUNDS {
        let (p1, p2) = (random_point(&mut rng), random_point(&mut rng));
        let d12 = corridor.distance_between_points(&p1, &p2).unwrap();
        let d21 = corridor.distance_between_points(&p2, &p1).unwrap();
        assert_eq!(d12, d21);
        assert!(d12 >= 0.);
    }
}

#[test]
fn euclidean_distance_triangle_inequality() {
    let mut rng = StdRng::seed_from_u64(11);
    let corridor = linear_corridor();

    for _ in 0..ROUNDS {
        let (a, b, c) = (
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );
        let ab = corridor.distance_between_points(&a, &b).unwrap();
        let bc = corridor.distance_between_points(&b, &c).unwrap();
        let ac = corridor.distance_between_points(&a, &c).unwrap();
        assert!(ac <= ab + bc + 1e-9);
    }
}

#[test]
fn arc_length_grows_with_chord() {
    let mut rng = StdRng::seed_from_u64(13);
    let context = GeometryContext::default();

    for _ in 0..ROUNDS {
        let radius: FloatNum = rng.gen_range(0.5..50.0);
        let metric = DistanceMetric::ArcLength { radius };
        let origin = Point::new(0., 0.);

        let mut chords: Vec<FloatNum> = (0..8).map(|_| rng.gen_range(0.0..2. * radius)).collect();
        chords.sort_by(|a, b| a.total_cmp(b));

        let arcs: Vec<FloatNum> = chords
            .iter()
            .map(|&chord| metric.distance(&origin, &Point::new(chord, 0.), &context).unwrap())
            .collect();

        for pair in arcs.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}

#[test]
fn arc_length_of_same_point_is_zero() {
    let mut rng = StdRng::seed_from_u64(17);
    let corridor = Corridor::circular((0., 1.), (0., -1.), (0., 0., 0.), (2., 1.)).unwrap();

    for _ in 0..ROUNDS {
        let p = random_point(&mut rng);
        assert_eq!(corridor.distance_between_points(&p, &p), Ok(0.));
    }
}

#[test]
fn chord_longer_than_diameter_is_rejected() {
    let mut rng = StdRng::seed_from_u64(19);
    let context = GeometryContext::default();

    for _ in 0..ROUNDS {
        let radius: FloatNum = rng.gen_range(0.5..50.0);
        let chord = 2. * radius + rng.gen_range(1e-3..10.0);
        let metric = DistanceMetric::ArcLength { radius };

        let result = metric.distance(&Point::new(0., 0.), &Point::new(chord, 0.), &context);
        assert!(matches!(result, Err(GeometryError::ChordExceedsDiameter { .. })));
    }
}

#[test]
fn robot_path_center_is_radius_away_from_pose() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..ROUNDS {
        let position = Pose::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        let radius: FloatNum = rng.gen_range(0.1..20.0) * if rng.gen_bool(0.5) { 1. } else { -1. };
        let path = RobotPath::new(radius, position).unwrap();

        let offset = path.center().distance(&position.position());
        assert!((offset - radius.abs()).abs() < 1e-9);
        assert!(path.circle().contains_on_edge(&position.position(), 1e-9));
    }
}
