//! Scored polygons.
//!
//! An `Area` is an ordered polygon of board points (ids and coordinates), a
//! color and a score fixed at construction. Areas produced by the board are in
//! counter-clockwise order because their vertices are sorted by polar angle.
//!
//! Two containment predicates exist:
//! - `contains`: visibility from every vertex on a live board. This is what
//!   the rules use; it is exact for the convex regions the game produces.
//! - `encloses`: even-odd ray test on the stored coordinates, board-free.

use std::collections::BTreeSet;

use nalgebra::Vector2;

use crate::board::Board;
use crate::geom::{signed_area, Color, LineId, PointId};

#[derive(Clone, Debug, PartialEq)]
pub struct Area {
    vertices: Vec<PointId>,
    coords: Vec<Vector2<f64>>,
    color: Color,
    score: f64,
}

impl Area {
    /// Build from parallel id/coordinate lists; the score is computed here.
    pub fn new(vertices: Vec<PointId>, coords: Vec<Vector2<f64>>, color: Color) -> Self {
        debug_assert_eq!(vertices.len(), coords.len());
        let score = signed_area(&coords).abs();
        Self {
            vertices,
            coords,
            color,
            score,
        }
    }

    /// An area with no vertices; stands for "nothing selected".
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Color::Neutral)
    }

    #[inline]
    pub fn vertices(&self) -> &[PointId] {
        &self.vertices
    }

    #[inline]
    pub fn coords(&self) -> &[Vector2<f64>] {
        &self.coords
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Unsigned polygon area.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Shoelace area with the sign of the stored winding.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.coords)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Copy of this area with another color.
    pub fn recolored(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// Same vertex set, regardless of starting vertex and color.
    pub fn same_region(&self, other: &Area) -> bool {
        let a: BTreeSet<PointId> = self.vertices.iter().copied().collect();
        let b: BTreeSet<PointId> = other.vertices.iter().copied().collect();
        a == b
    }

    /// Every vertex sees `point` on `board` (lines in `ignore` and lines
    /// incident to the vertex do not block).
    pub fn contains(&self, board: &Board, point: Vector2<f64>, ignore: &[LineId]) -> bool {
        self.vertices
            .iter()
            .all(|&v| board.is_visible(point, v, ignore))
    }

    /// Even-odd point-in-polygon on the stored coordinates.
    pub fn encloses(&self, point: Vector2<f64>) -> bool {
        let n = self.coords.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.coords[i];
            let pj = self.coords[j];
            if (pi.y > point.y) != (pj.y > point.y) {
                let x_cross = pj.x + (point.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Vertex average; inside for convex areas.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        if self.coords.is_empty() {
            return None;
        }
        let sum = self
            .coords
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + p);
        Some(sum / self.coords.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square(side: f64) -> Area {
        let coords = vec![
            vector![0.0, 0.0],
            vector![side, 0.0],
            vector![side, side],
            vector![0.0, side],
        ];
        let ids = (0..4).map(PointId).collect();
        Area::new(ids, coords, Color::P1)
    }

    #[test]
    fn score_is_unsigned_and_sign_is_kept_separately() {
        let sq = square(3.0);
        assert!((sq.score() - 9.0).abs() < 1e-12);
        assert!(sq.signed_area() > 0.0);
        let mut ids = sq.vertices().to_vec();
        let mut coords = sq.coords().to_vec();
        ids.reverse();
        coords.reverse();
        let cw = Area::new(ids, coords, Color::P1);
        assert!((cw.score() - 9.0).abs() < 1e-12);
        assert!(cw.signed_area() < 0.0);
        assert!(cw.same_region(&sq));
    }

    #[test]
    fn encloses_interior_only() {
        let sq = square(2.0);
        assert!(sq.encloses(vector![1.0, 1.0]));
        assert!(sq.encloses(vector![0.1, 1.9]));
        assert!(!sq.encloses(vector![2.5, 1.0]));
        assert!(!sq.encloses(vector![-0.1, 1.0]));
        assert!(!Area::empty().encloses(vector![0.0, 0.0]));
    }

    #[test]
    fn centroid_and_recolor() {
        let sq = square(4.0);
        assert_eq!(sq.centroid(), Some(vector![2.0, 2.0]));
        let red = sq.recolored(Color::P2);
        assert_eq!(red.color(), Color::P2);
        assert_eq!(red.score(), sq.score());
        assert!(Area::empty().centroid().is_none());
        assert!(Area::empty().is_empty());
    }
}
