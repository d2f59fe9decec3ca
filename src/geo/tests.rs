use super::{ArcGenerator, GeometryError, GreatCircle, LonLat, Projection, Vec2D, WebMercator};
use rand::Rng;

const EPS: f64 = 1e-6;

#[test]
fn test_equator_arc_is_single_piece() {
    let arc = GreatCircle::default()
        .arc(LonLat::new(0.0, 0.0), LonLat::new(90.0, 0.0))
        .unwrap();
    assert_eq!(arc.len(), 1);
    assert_eq!(arc[0].len(), 101);
    for (i, p) in arc[0].iter().enumerate() {
        assert!(p.lat().abs() < EPS, "point {i} left the equator: {p}");
        assert!((p.lon() - 0.9 * i as f64).abs() < EPS);
    }
}

#[test]
fn test_pacific_arc_is_split_at_antimeridian() {
    // Tokyo to San Francisco
    let from = LonLat::from_lat_lon([35.68, 139.69]).unwrap();
    let to = LonLat::from_lat_lon([37.77, -122.42]).unwrap();
    let pieces = GreatCircle::default().arc(from, to).unwrap();
    assert_eq!(pieces.len(), 2);

    let first_end = *pieces[0].last().unwrap();
    let second_start = pieces[1][0];
    assert!((first_end.lon() - 180.0).abs() < EPS);
    assert!((second_start.lon() + 180.0).abs() < EPS);
    assert!((first_end.lat() - second_start.lat()).abs() < EPS);

    // 101 interpolated points plus the crossing inserted into both pieces
    assert_eq!(pieces[0].len() + pieces[1].len(), 103);
    assert!(pieces[0].iter().all(|p| p.lon() >= 0.0));
    assert!(pieces[1].iter().all(|p| p.lon() <= 0.0));
}

#[test]
fn test_endpoint_on_antimeridian_leaves_no_empty_piece() {
    let pieces = GreatCircle::default()
        .arc(LonLat::new(180.0, 0.0), LonLat::new(-170.0, 10.0))
        .unwrap();
    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[0].len(), 101);
    assert_eq!(pieces[0][0], LonLat::new(-180.0, 0.0));
    assert!(pieces[0].iter().all(|p| p.lon() <= 0.0));

    let pieces = GreatCircle::default()
        .arc(LonLat::new(170.0, 10.0), LonLat::new(-180.0, 0.0))
        .unwrap();
    assert_eq!(pieces.len(), 1);
    assert!(pieces[0].iter().all(|p| p.lon() >= 0.0));
    assert!((pieces[0].last().unwrap().lon() - 180.0).abs() < EPS);
}

#[test]
fn test_identical_endpoints_yield_degenerate_arc() {
    let p = LonLat::new(13.4, 52.5);
    let arc = GreatCircle::new(10).arc(p, p).unwrap();
    assert_eq!(arc, vec![vec![p; 11]]);
}

#[test]
fn test_antipodal_endpoints_are_rejected() {
    let res = GreatCircle::default().arc(LonLat::new(0.0, 0.0), LonLat::new(180.0, 0.0));
    assert_eq!(res, Err(GeometryError::Antipodal));
}

#[test]
fn test_invalid_coordinates() {
    assert!(LonLat::from_lat_lon([91.0, 0.0]).is_none());
    assert!(LonLat::from_lat_lon([0.0, f64::NAN]).is_none());
    let res = GreatCircle::default().arc(LonLat::new(200.0, 0.0), LonLat::new(0.0, 0.0));
    assert_eq!(res, Err(GeometryError::InvalidCoordinate));
}

#[test]
fn test_random_arcs_keep_endpoints_and_continuity() {
    let mut rng = rand::rng();
    let generator = GreatCircle::new(50);
    for _ in 0..200 {
        let from = LonLat::new(rng.random_range(-179.0..179.0), rng.random_range(-60.0..60.0));
        let to = LonLat::new(rng.random_range(-179.0..179.0), rng.random_range(-60.0..60.0));
        let Ok(pieces) = generator.arc(from, to) else { continue };
        assert!(pieces.len() <= 2);
        let first = pieces[0][0];
        let last = *pieces.last().unwrap().last().unwrap();
        assert_eq!(first, from);
        assert_eq!(last, to);
        for piece in &pieces {
            for w in piece.windows(2) {
                assert!((w[1].lon() - w[0].lon()).abs() <= 180.0);
            }
        }
    }
}

#[test]
fn test_web_mercator_projection() {
    let proj = WebMercator;
    let origin = proj.project(LonLat::new(0.0, 0.0));
    assert!(origin.x().abs() < EPS && origin.y().abs() < EPS);

    let east = proj.project(LonLat::new(180.0, 0.0));
    assert!((east.x() - proj.world_width() / 2.0).abs() < 1e-3);

    // Clamped at the poles
    let pole = proj.project(LonLat::new(0.0, 90.0));
    assert!(pole.y().is_finite());
    assert!((pole.y() - proj.world_width() / 2.0).abs() < 1.0);
}

#[test]
fn test_vec2d_ops() {
    let a = Vec2D::new(1.0_f64, 2.0);
    let b = Vec2D::new(3.0_f64, 6.0);
    assert_eq!(a + b, Vec2D::new(4.0, 8.0));
    assert_eq!(b - a, Vec2D::new(2.0, 4.0));
    assert_eq!(a.lerp(b, 0.5), Vec2D::new(2.0, 4.0));
    assert_eq!(a.translate_x(10.0), Vec2D::new(11.0, 2.0));
    assert!((Vec2D::new(3.0_f64, 4.0).abs() - 5.0).abs() < EPS);
    assert!((a.euclid_distance(&b) - 20f64.sqrt()).abs() < EPS);
    assert!(!Vec2D::new(f64::INFINITY, 0.0).is_finite());
}
