//! Visibility, the region around a point, and the partition along a line.
//!
//! Regions of a Split board are convex: the board starts as a square and every
//! line cuts one convex region into two. So the region around a point is the
//! set of board points visible from it, ordered by polar angle. The partition
//! along a drawn line instead walks the two adjacent faces, which stays exact
//! when a boundary vertex sits almost in line with its neighbors.

use std::collections::BTreeSet;

use nalgebra::Vector2;

use super::{Board, MoveError};
use crate::area::Area;
use crate::geom::{polar_angle, Color, LineId, PointId, Segment};

impl Board {
    /// Straight path `from → to` crosses no line, except lines in `ignore` and
    /// lines ending at `to`.
    pub fn is_visible(&self, from: Vector2<f64>, to: PointId, ignore: &[LineId]) -> bool {
        let target = &self.points[to.0];
        let path = Segment::new(from, target.pos);
        self.lines.iter().all(|(id, line)| {
            ignore.contains(id)
                || target.lines.contains(id)
                || path.intersection(&line.seg).is_none()
        })
    }

    /// Line endpoints visible from `center`, sorted by polar angle around it.
    fn visible_in_angular_order(&self, center: Vector2<f64>, ignore: &[LineId]) -> Vec<PointId> {
        let ends: BTreeSet<PointId> = self
            .lines
            .values()
            .flat_map(|line| line.ends)
            .collect();
        let mut ordered: Vec<(PointId, f64)> = ends
            .into_iter()
            .filter(|&p| self.is_visible(center, p, ignore))
            .map(|p| (p, polar_angle(center, self.points[p.0].pos)))
            .collect();
        ordered.sort_by(|a, b| a.1.total_cmp(&b.1));
        ordered.into_iter().map(|(p, _)| p).collect()
    }

    fn area_from(&self, vertices: Vec<PointId>, color: Color) -> Area {
        let coords = vertices.iter().map(|p| self.points[p.0].pos).collect();
        Area::new(vertices, coords, color)
    }

    /// The two regions on either side of `line`, both colored `color`.
    ///
    /// Each is the face of the line graph left of one direction of `line`, so
    /// together they tile exactly the region the line cut.
    pub fn split_candidates(&self, line: LineId, color: Color) -> Result<[Area; 2], MoveError> {
        let [a, b] = self
            .lines
            .get(&line)
            .ok_or(MoveError::UnknownLine { line })?
            .ends;
        match (
            self.face_left_of(a, b, color),
            self.face_left_of(b, a, color),
        ) {
            (Some(left), Some(right)) => Ok([left, right]),
            _ => Err(MoveError::DegenerateAreaSplit),
        }
    }

    /// Neutral polygon of every board point visible from `probe`, or `None`
    /// with fewer than three.
    pub fn surrounding_area(&self, probe: Vector2<f64>) -> Option<Area> {
        let ordered = self.visible_in_angular_order(probe, &[]);
        (ordered.len() >= 3).then(|| self.area_from(ordered, Color::Neutral))
    }
}
