use std::f64::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::Vector2;

use super::cfg::{SNAP_TOL, VERTICAL_EPS};

#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (p - q).norm()
}

/// Same board location: within `SNAP_TOL` of each other.
#[inline]
pub fn same_location(p: Vector2<f64>, q: Vector2<f64>) -> bool {
    distance(p, q) <= SNAP_TOL
}

/// Angle of `p - origin` in `[0, 2π)`, counter-clockwise from +x.
///
/// Near-vertical directions are pinned to `π/2` / `3π/2` so points straight
/// above or below the origin never land on the wrong side of the cut at 0.
pub fn polar_angle(origin: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let d = p - origin;
    if d.x.abs() < VERTICAL_EPS {
        return if d.y >= 0.0 { FRAC_PI_2 } else { PI + FRAC_PI_2 };
    }
    let theta = d.y.atan2(d.x);
    if theta < 0.0 {
        theta + TAU
    } else {
        theta
    }
}

/// Shoelace area over the cyclic sequence; positive for counter-clockwise order.
pub fn signed_area(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += p.x * q.y - p.y * q.x;
    }
    0.5 * acc
}
