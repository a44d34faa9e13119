use super::*;
use nalgebra::vector;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn coefficients_vanish_at_endpoints() {
    let s = Segment::new(vector![1.0, 2.0], vector![4.0, -3.0]);
    let (a, b, c) = s.coefficients();
    for p in [s.a, s.b, s.midpoint()] {
        assert!((a * p.x + b * p.y + c).abs() < 1e-12);
    }
}

#[test]
fn crossing_segments_intersect_at_unique_point() {
    let s = Segment::new(vector![0.0, 0.0], vector![4.0, 4.0]);
    let t = Segment::new(vector![0.0, 4.0], vector![4.0, 0.0]);
    let p = s.intersection(&t).expect("diagonals cross");
    assert!((p - vector![2.0, 2.0]).norm() < 1e-12);
    // Symmetric in its arguments.
    let q = t.intersection(&s).unwrap();
    assert!((p - q).norm() < 1e-12);
}

#[test]
fn intersection_restricted_to_segments() {
    // Supporting lines cross at (5, 5), outside the first segment.
    let s = Segment::new(vector![0.0, 0.0], vector![2.0, 2.0]);
    let t = Segment::new(vector![0.0, 10.0], vector![10.0, 0.0]);
    assert!(s.intersection(&t).is_none());
    // Parallel and collinear never intersect.
    let u = Segment::new(vector![0.0, 1.0], vector![2.0, 3.0]);
    assert!(s.intersection(&u).is_none());
    let v = Segment::new(vector![1.0, 1.0], vector![3.0, 3.0]);
    assert!(s.intersection(&v).is_none());
}

#[test]
fn touching_at_endpoint_counts_as_intersection() {
    let s = Segment::new(vector![0.0, 0.0], vector![0.0, 10.0]);
    let t = Segment::new(vector![0.0, 5.0], vector![7.0, 5.0]);
    let p = s.intersection(&t).unwrap();
    assert!(same_location(p, vector![0.0, 5.0]));
}

#[test]
fn contains_uses_absolute_slack() {
    let s = Segment::new(vector![0.0, 0.0], vector![10.0, 0.0]);
    assert!(s.contains(vector![3.0, 0.0]));
    assert!(s.contains(vector![10.004, 0.0]));
    assert!(!s.contains(vector![10.1, 0.0]));
    assert!(!s.contains(vector![5.0, 1.0]));
}

#[test]
fn closest_point_projects_or_snaps() {
    let s = Segment::new(vector![0.0, 0.0], vector![10.0, 0.0]);
    let foot = s.closest_point(vector![4.0, 3.0]);
    assert!((foot - vector![4.0, 0.0]).norm() < 1e-12);
    let end = s.closest_point(vector![13.0, -2.0]);
    assert_eq!(end, vector![10.0, 0.0]);
    let start = s.closest_point(vector![-1.0, 5.0]);
    assert_eq!(start, vector![0.0, 0.0]);
    // Vertical segment: no slope hacks needed.
    let v = Segment::new(vector![2.0, 0.0], vector![2.0, 8.0]);
    let foot = v.closest_point(vector![5.0, 3.0]);
    assert!((foot - vector![2.0, 3.0]).norm() < 1e-12);
}

#[test]
fn parallel_detection() {
    let s = Segment::new(vector![0.0, 0.0], vector![3.0, 1.0]);
    let t = Segment::new(vector![5.0, 5.0], vector![-1.0, 3.0]);
    assert!(s.is_parallel(&t));
    let u = Segment::new(vector![0.0, 0.0], vector![3.0, 1.1]);
    assert!(!s.is_parallel(&u));
}

#[test]
fn polar_angle_is_monotone_counter_clockwise() {
    let o = vector![1.0, 1.0];
    let ring = [
        vector![2.0, 1.0],
        vector![2.0, 2.0],
        vector![1.0, 2.0],
        vector![0.0, 2.0],
        vector![0.0, 1.0],
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
    ];
    let angles: Vec<f64> = ring.iter().map(|&p| polar_angle(o, p)).collect();
    assert!(angles.windows(2).all(|w| w[0] < w[1]), "{angles:?}");
    assert!((angles[2] - FRAC_PI_2).abs() < 1e-12);
    assert!((angles[6] - (PI + FRAC_PI_2)).abs() < 1e-12);
    assert!(angles.iter().all(|a| (0.0..2.0 * PI).contains(a)));
}

#[test]
fn near_vertical_is_pinned() {
    let o = vector![0.0, 0.0];
    assert_eq!(polar_angle(o, vector![1e-7, 5.0]), FRAC_PI_2);
    assert_eq!(polar_angle(o, vector![-1e-7, -5.0]), PI + FRAC_PI_2);
}

#[test]
fn shoelace_sign_follows_winding() {
    let ccw = [
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 3.0],
        vector![0.0, 3.0],
    ];
    assert!((signed_area(&ccw) - 6.0).abs() < 1e-12);
    let mut cw = ccw;
    cw.reverse();
    assert!((signed_area(&cw) + 6.0).abs() < 1e-12);
    assert_eq!(signed_area(&ccw[..2]), 0.0);
}

#[test]
fn player_and_color_mapping() {
    assert_eq!(PlayerId::One.other(), PlayerId::Two);
    assert_eq!(PlayerId::Two.color(), Color::P2);
    assert_eq!(Color::P1.owner(), Some(PlayerId::One));
    assert_eq!(Color::Neutral.owner(), None);
    assert_eq!(distance(vector![0.0, 0.0], vector![3.0, 4.0]), 5.0);
}
