//! Move legality. Every check here is read-only.

use nalgebra::Vector2;

use super::{Board, MoveError};
use crate::area::Area;
use crate::geom::{same_location, LineId, Segment};
use crate::moves::Move;

impl Board {
    /// `Ok(())` iff `mv` may be applied now; otherwise the first violated rule.
    pub fn is_legal(&self, mv: &Move) -> Result<(), MoveError> {
        match mv {
            Move::AreaChoice { area } => self.check_area_choice(area),
            Move::LineMove {
                p1,
                p1_line,
                p2,
                p2_line,
            } => self.check_line_move(*p1, *p1_line, *p2, *p2_line),
        }
    }

    fn check_area_choice(&self, area: &Area) -> Result<(), MoveError> {
        let pending = self.pending.as_ref().ok_or(MoveError::InvalidAreaChoice)?;
        if area.is_empty() {
            return Err(MoveError::NoAreaSelected);
        }
        if !pending.candidates.iter().any(|c| c.same_region(area)) {
            return Err(MoveError::InvalidAreaChoice);
        }
        Ok(())
    }

    fn check_line_move(
        &self,
        p1: Vector2<f64>,
        p1_line: LineId,
        p2: Vector2<f64>,
        p2_line: LineId,
    ) -> Result<(), MoveError> {
        if self.pending.is_some() {
            return Err(MoveError::PendingAreaSelection);
        }
        let finite = |p: Vector2<f64>| p.x.is_finite() && p.y.is_finite();
        if !finite(p1) || !finite(p2) {
            return Err(MoveError::MissingEndpoint);
        }
        let l1 = self
            .lines
            .get(&p1_line)
            .ok_or(MoveError::UnknownLine { line: p1_line })?;
        let l2 = self
            .lines
            .get(&p2_line)
            .ok_or(MoveError::UnknownLine { line: p2_line })?;

        let on_existing_endpoint = self.lines.values().any(|line| {
            line.ends.iter().any(|&ep| {
                let pos = self.points[ep.0].pos;
                same_location(p1, pos) || same_location(p2, pos)
            })
        });
        if on_existing_endpoint {
            return Err(MoveError::DuplicateEndpoint);
        }

        let candidate = Segment::new(p1, p2);
        if p1_line == p2_line || candidate.is_parallel(&l1.seg) || candidate.is_parallel(&l2.seg)
        {
            return Err(MoveError::DegenerateSplit);
        }
        if !l1.seg.contains(p1) {
            return Err(MoveError::EndpointOffLine { line: p1_line });
        }
        if !l2.seg.contains(p2) {
            return Err(MoveError::EndpointOffLine { line: p2_line });
        }

        let crosses = self.lines.iter().any(|(&id, line)| {
            id != p1_line && id != p2_line && candidate.intersection(&line.seg).is_some()
        });
        if crosses {
            return Err(MoveError::CrossingExistingLine);
        }

        let mid = candidate.midpoint();
        if self.areas.iter().any(|area| area.encloses(mid)) {
            return Err(MoveError::InsideScoredArea);
        }
        Ok(())
    }
}
