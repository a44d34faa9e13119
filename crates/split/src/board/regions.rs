//! Face reconstruction of the line graph.
//!
//! Each undirected line gives two half-edges. Walking `u → v` and then leaving
//! `v` along the neighbor that comes next clockwise after `u` traces a face
//! counter-clockwise with the face on the left. Bounded faces come out with
//! positive signed area; the outer face comes out negative and is dropped.

use std::collections::BTreeSet;

use super::Board;
use crate::area::Area;
use crate::geom::cfg::AREA_EPS;
use crate::geom::{signed_area, Color, PointId};

/// Neighbors of every point, sorted counter-clockwise. Indexed by `PointId`.
///
/// Plain `atan2` rather than `polar_angle`: pinning near-vertical directions
/// could tie two distinct neighbors.
type Fans = Vec<Vec<(f64, PointId)>>;

/// Neighbor of `v` preceding `u` in counter-clockwise order around `v`.
fn next_clockwise(fan: &[(f64, PointId)], u: PointId) -> Option<PointId> {
    let k = fan.iter().position(|&(_, p)| p == u)?;
    Some(fan[(k + fan.len() - 1) % fan.len()].1)
}

impl Board {
    fn fans(&self) -> Fans {
        let mut fans: Fans = vec![Vec::new(); self.points.len()];
        for line in self.lines.values() {
            let [p, q] = line.ends;
            let d = self.points[q.0].pos - self.points[p.0].pos;
            fans[p.0].push((d.y.atan2(d.x), q));
            fans[q.0].push(((-d.y).atan2(-d.x), p));
        }
        for fan in &mut fans {
            fan.sort_by(|a, b| a.0.total_cmp(&b.0));
        }
        fans
    }

    /// Vertices of the face left of the half-edge `start`, marking every
    /// half-edge walked in `seen`.
    fn walk_face(
        fans: &Fans,
        start: (PointId, PointId),
        seen: &mut BTreeSet<(PointId, PointId)>,
    ) -> Vec<PointId> {
        let mut cycle = Vec::new();
        let (mut u, mut v) = start;
        while seen.insert((u, v)) {
            cycle.push(u);
            let Some(w) = next_clockwise(&fans[v.0], u) else {
                break;
            };
            (u, v) = (v, w);
        }
        cycle
    }

    /// The bounded face left of `from → to`, colored `color`; `None` for the
    /// outer face or a degenerate cycle.
    pub(super) fn face_left_of(&self, from: PointId, to: PointId, color: Color) -> Option<Area> {
        let cycle = Self::walk_face(&self.fans(), (from, to), &mut BTreeSet::new());
        let coords: Vec<_> = cycle.iter().map(|p| self.points[p.0].pos).collect();
        (cycle.len() >= 3 && signed_area(&coords) > AREA_EPS)
            .then(|| Area::new(cycle, coords, color))
    }

    /// Every bounded region of the current board, neutral-colored, scored or not.
    pub fn regions(&self) -> Vec<Area> {
        let fans = self.fans();
        let mut seen: BTreeSet<(PointId, PointId)> = BTreeSet::new();
        let mut faces = Vec::new();
        for line in self.lines.values() {
            let [p, q] = line.ends;
            for start in [(p, q), (q, p)] {
                if seen.contains(&start) {
                    continue;
                }
                let cycle = Self::walk_face(&fans, start, &mut seen);
                let coords: Vec<_> = cycle.iter().map(|p| self.points[p.0].pos).collect();
                if signed_area(&coords) > AREA_EPS {
                    faces.push(Area::new(cycle, coords, Color::Neutral));
                }
            }
        }
        faces
    }

    /// Bounded regions not covered by a scored area.
    pub fn unfilled_regions(&self) -> Vec<Area> {
        self.regions()
            .into_iter()
            .filter(|face| {
                face.centroid()
                    .is_some_and(|c| !self.areas.iter().any(|a| a.encloses(c)))
            })
            .collect()
    }
}
