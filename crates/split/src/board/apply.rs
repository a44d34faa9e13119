//! Move application and the turn/fill state machine.

use nalgebra::Vector2;
use tracing::{debug, warn};

use super::{Board, MoveError, PendingSplit, Snapshot};
use crate::area::Area;
use crate::geom::{LineId, PointId};
use crate::moves::Move;

impl Board {
    /// Apply a legal move; an illegal one is rejected and the board is untouched.
    pub fn apply(&mut self, mv: &Move) -> Result<Snapshot, MoveError> {
        self.is_legal(mv)?;
        match mv {
            Move::AreaChoice { area } => self.commit_choice(area)?,
            Move::LineMove {
                p1,
                p1_line,
                p2,
                p2_line,
            } => self.commit_line(*p1, *p1_line, *p2, *p2_line)?,
        }
        Ok(self.snapshot())
    }

    /// Credit the chosen candidate to its pre-assigned color. The turn stays.
    fn commit_choice(&mut self, area: &Area) -> Result<(), MoveError> {
        let chosen = self
            .pending
            .as_ref()
            .and_then(|p| p.candidates.iter().find(|c| c.same_region(area)))
            .cloned()
            .ok_or(MoveError::InvalidAreaChoice)?;
        self.pending = None;
        if let Some(owner) = chosen.color().owner() {
            self.scores[owner.index()] += chosen.score();
        }
        debug!(
            chooser = %self.next_player,
            score = chosen.score(),
            vertices = chosen.len(),
            "area chosen"
        );
        self.areas.push(chosen);
        Ok(())
    }

    fn commit_line(
        &mut self,
        p1: Vector2<f64>,
        p1_line: LineId,
        p2: Vector2<f64>,
        p2_line: LineId,
    ) -> Result<(), MoveError> {
        let mover = self.next_player;
        let own = mover.color();
        let both_own = [p1_line, p2_line]
            .iter()
            .all(|id| self.lines.get(id).is_some_and(|l| l.color == own));

        let a = self.split_line(p1_line, p1)?;
        let b = self.split_line(p2_line, p2)?;
        let drawn = self.add_line(a, b, own);

        match self.split_candidates(drawn, own) {
            Ok(candidates) => {
                let total = candidates[0].score() + candidates[1].score();
                if total <= self.min_score {
                    self.scores[mover.index()] += total;
                    self.areas.extend(candidates);
                    debug!(player = %mover, total, "region auto-filled");
                } else if both_own {
                    debug!(player = %mover, total, "awaiting opponent area choice");
                    self.pending = Some(PendingSplit {
                        line: drawn,
                        candidates,
                    });
                }
            }
            Err(err) => warn!(player = %mover, line = %drawn, %err, "no fill possible"),
        }
        debug!(player = %mover, line = %drawn, lines = self.lines.len(), "line drawn");
        self.next_player = mover.other();
        Ok(())
    }

    /// Replace `old` by two halves meeting at a new point at `pos`.
    fn split_line(&mut self, old: LineId, pos: Vector2<f64>) -> Result<PointId, MoveError> {
        let line = self
            .lines
            .remove(&old)
            .ok_or(MoveError::UnknownLine { line: old })?;
        for ep in line.ends {
            self.points[ep.0].lines.remove(&old);
        }
        let mid = self.add_point(pos);
        for ep in line.ends {
            self.add_line(ep, mid, line.color);
        }
        Ok(mid)
    }
}
