use nalgebra::Vector2;

use super::cfg::{CONTAINS_TOL, PARALLEL_EPS};
use super::util::distance;

/// Closed segment `a → b` with the coefficients of its supporting line
/// `A·x + B·y + C = 0`, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    coef_a: f64,
    coef_b: f64,
    coef_c: f64,
}

impl Segment {
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            a,
            b,
            coef_a: a.y - b.y,
            coef_b: b.x - a.x,
            coef_c: a.x * b.y - b.x * a.y,
        }
    }

    /// `(A, B, C)` of the implicit equation.
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.coef_a, self.coef_b, self.coef_c)
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.a, self.b)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.a + self.b) * 0.5
    }

    /// `dy/dx`; infinite for vertical segments.
    #[inline]
    pub fn slope(&self) -> f64 {
        let d = self.direction();
        d.y / d.x
    }

    /// Point lies on the segment within `CONTAINS_TOL`.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (distance(p, self.a) + distance(p, self.b) - self.length()).abs() <= CONTAINS_TOL
    }

    /// Unique crossing point of two segments, if any.
    ///
    /// Parallel (including collinear) segments never intersect here.
    pub fn intersection(&self, other: &Segment) -> Option<Vector2<f64>> {
        let d = self.coef_a * other.coef_b - self.coef_b * other.coef_a;
        if d == 0.0 {
            return None;
        }
        let x = (self.coef_b * other.coef_c - self.coef_c * other.coef_b) / d;
        let y = (self.coef_c * other.coef_a - self.coef_a * other.coef_c) / d;
        let p = Vector2::new(x, y);
        (self.contains(p) && other.contains(p)).then_some(p)
    }

    /// Directions agree up to sign (relative cross-product test).
    pub fn is_parallel(&self, other: &Segment) -> bool {
        let u = self.direction();
        let v = other.direction();
        let scale = u.norm() * v.norm();
        if scale == 0.0 {
            return true;
        }
        (u.x * v.y - u.y * v.x).abs() <= PARALLEL_EPS * scale
    }

    /// Closest point of the segment to `p`.
    ///
    /// Projects onto the supporting line; a foot outside the segment snaps to
    /// the endpoint nearer to `p`.
    pub fn closest_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return self.a;
        }
        let t = (p - self.a).dot(&d) / len2;
        let foot = self.a + d * t;
        let len = len2.sqrt();
        if distance(foot, self.a) > len || distance(foot, self.b) > len {
            if distance(p, self.a) <= distance(p, self.b) {
                self.a
            } else {
                self.b
            }
        } else {
            foot
        }
    }
}
