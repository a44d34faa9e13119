//! Moves and their compact record form.
//!
//! `Move` is what the board consumes. `MoveRecord` is the flat shape handed to
//! collaborators that ship moves elsewhere (logs, a relay): coordinates as
//! pairs, lines by id, an area choice by its index in the pending pair.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::board::{Board, MoveError};
use crate::geom::LineId;

#[derive(Clone, Debug, PartialEq)]
pub enum Move {
    /// Draw `p1 → p2`, splitting `p1_line` at `p1` and `p2_line` at `p2`.
    LineMove {
        p1: Vector2<f64>,
        p1_line: LineId,
        p2: Vector2<f64>,
        p2_line: LineId,
    },
    /// Pick one of the two pending candidate areas.
    AreaChoice { area: Area },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Line,
    Area,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub kind: MoveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p1: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p1_line: Option<LineId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2_line: Option<LineId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<usize>,
}

impl Move {
    #[inline]
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::LineMove { .. } => MoveKind::Line,
            Move::AreaChoice { .. } => MoveKind::Area,
        }
    }

    /// Record form; an area choice is encoded as its index among `board`'s
    /// pending candidates (absent if it matches neither).
    pub fn to_record(&self, board: &Board) -> MoveRecord {
        match self {
            Move::LineMove {
                p1,
                p1_line,
                p2,
                p2_line,
            } => MoveRecord {
                kind: MoveKind::Line,
                p1: Some([p1.x, p1.y]),
                p1_line: Some(*p1_line),
                p2: Some([p2.x, p2.y]),
                p2_line: Some(*p2_line),
                area: None,
            },
            Move::AreaChoice { area } => MoveRecord {
                kind: MoveKind::Area,
                p1: None,
                p1_line: None,
                p2: None,
                p2_line: None,
                area: board
                    .pending_candidates()
                    .and_then(|cands| cands.iter().position(|c| c.same_region(area))),
            },
        }
    }
}

impl MoveRecord {
    /// Rebuild the move against `board` (needed to resolve area indices).
    pub fn into_move(self, board: &Board) -> Result<Move, MoveError> {
        match self.kind {
            MoveKind::Line => {
                let (Some(p1), Some(p2)) = (self.p1, self.p2) else {
                    return Err(MoveError::MissingEndpoint);
                };
                let (Some(p1_line), Some(p2_line)) = (self.p1_line, self.p2_line) else {
                    return Err(MoveError::MissingEndpoint);
                };
                Ok(Move::LineMove {
                    p1: Vector2::new(p1[0], p1[1]),
                    p1_line,
                    p2: Vector2::new(p2[0], p2[1]),
                    p2_line,
                })
            }
            MoveKind::Area => {
                let idx = self.area.ok_or(MoveError::NoAreaSelected)?;
                let cands = board
                    .pending_candidates()
                    .ok_or(MoveError::InvalidAreaChoice)?;
                let area = cands.get(idx).cloned().ok_or(MoveError::InvalidAreaChoice)?;
                Ok(Move::AreaChoice { area })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn line_record_json_shape() {
        let board = Board::new_game(10.0, 5.0);
        let mv = Move::LineMove {
            p1: vector![0.0, 2.5],
            p1_line: LineId(0),
            p2: vector![10.0, 2.5],
            p2_line: LineId(2),
        };
        let rec = mv.to_record(&board);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"kind\":\"line\""));
        assert!(!json.contains("area"));
        let parsed: MoveRecord = serde_json::from_str(&json).unwrap();
        let back = parsed.into_move(&board).unwrap();
        assert_eq!(back, mv);
        assert_eq!(back.kind(), MoveKind::Line);
    }

    #[test]
    fn incomplete_records_are_rejected() {
        let board = Board::new_game(10.0, 5.0);
        let rec = MoveRecord {
            kind: MoveKind::Line,
            p1: Some([0.0, 1.0]),
            p1_line: Some(LineId(0)),
            p2: None,
            p2_line: Some(LineId(2)),
            area: None,
        };
        assert_eq!(rec.into_move(&board), Err(MoveError::MissingEndpoint));
        let rec = MoveRecord {
            kind: MoveKind::Area,
            p1: None,
            p1_line: None,
            p2: None,
            p2_line: None,
            area: None,
        };
        assert_eq!(rec.clone().into_move(&board), Err(MoveError::NoAreaSelected));
        let rec = MoveRecord {
            area: Some(0),
            ..rec
        };
        assert_eq!(rec.into_move(&board), Err(MoveError::InvalidAreaChoice));
    }
}
