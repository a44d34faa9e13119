//! Board state and read-only queries.

use std::collections::BTreeMap;

use nalgebra::Vector2;

use crate::area::Area;
use crate::geom::{distance, Color, LineId, PlayerId, Point, PointId, Segment};

/// An active boundary segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub ends: [PointId; 2],
    pub color: Color,
    pub seg: Segment,
}

/// Whose decision the board is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    AreaSelect,
}

/// A drawn line awaiting the opponent's choice between two candidates.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSplit {
    pub line: LineId,
    pub candidates: [Area; 2],
}

/// Turn, mode and scores after an applied move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub next_player: PlayerId,
    pub mode: Mode,
    pub scores: [f64; 2],
}

/// The game state of one match.
///
/// Invariants:
/// - Active lines meet only at shared endpoints (guaranteed by `is_legal`).
/// - `points[i].lines` is exactly the set of active lines ending at point `i`.
/// - `pending` is `Some` iff the board waits for an area choice.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub(super) width: f64,
    pub(super) min_score: f64,
    pub(super) points: Vec<Point>,
    pub(super) lines: BTreeMap<LineId, Line>,
    pub(super) next_line: usize,
    pub(super) areas: Vec<Area>,
    pub(super) scores: [f64; 2],
    pub(super) next_player: PlayerId,
    pub(super) pending: Option<PendingSplit>,
}

impl Board {
    /// Square board `[0, width]²` bounded by four neutral lines; player one moves first.
    pub fn new_game(width: f64, min_score: f64) -> Self {
        let mut board = Self {
            width,
            min_score,
            points: Vec::with_capacity(4),
            lines: BTreeMap::new(),
            next_line: 0,
            areas: Vec::new(),
            scores: [0.0, 0.0],
            next_player: PlayerId::One,
            pending: None,
        };
        let corners = [
            board.add_point(Vector2::new(0.0, 0.0)),
            board.add_point(Vector2::new(0.0, width)),
            board.add_point(Vector2::new(width, width)),
            board.add_point(Vector2::new(width, 0.0)),
        ];
        for k in 0..4 {
            board.add_line(corners[k], corners[(k + 1) % 4], Color::Neutral);
        }
        board
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    #[inline]
    pub fn next_player(&self) -> PlayerId {
        self.next_player
    }

    #[inline]
    pub fn scores(&self) -> [f64; 2] {
        self.scores
    }

    #[inline]
    pub fn score(&self, player: PlayerId) -> f64 {
        self.scores[player.index()]
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        if self.pending.is_some() {
            Mode::AreaSelect
        } else {
            Mode::Normal
        }
    }

    /// The line awaiting an area choice, if any.
    #[inline]
    pub fn area_split_line(&self) -> Option<LineId> {
        self.pending.as_ref().map(|p| p.line)
    }

    /// The two areas offered for selection, if any.
    #[inline]
    pub fn pending_candidates(&self) -> Option<&[Area; 2]> {
        self.pending.as_ref().map(|p| &p.candidates)
    }

    /// Scored areas in the order they were filled.
    #[inline]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> + '_ {
        self.lines.iter().map(|(&id, line)| (id, line))
    }

    #[inline]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.0)
    }

    pub fn points(&self) -> impl Iterator<Item = (PointId, &Point)> + '_ {
        self.points.iter().enumerate().map(|(i, p)| (PointId(i), p))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            next_player: self.next_player,
            mode: self.mode(),
            scores: self.scores,
        }
    }

    /// Active line nearest to `pos`, with its closest point to `pos`.
    pub fn nearest_line(&self, pos: Vector2<f64>) -> Option<(LineId, Vector2<f64>)> {
        self.lines
            .iter()
            .map(|(&id, line)| (id, line.seg.closest_point(pos)))
            .min_by(|(_, p), (_, q)| distance(*p, pos).total_cmp(&distance(*q, pos)))
    }

    pub(super) fn add_point(&mut self, pos: Vector2<f64>) -> PointId {
        self.points.push(Point::new(pos));
        PointId(self.points.len() - 1)
    }

    /// Insert a line and register it with both endpoints.
    pub(super) fn add_line(&mut self, p: PointId, q: PointId, color: Color) -> LineId {
        let id = LineId(self.next_line);
        self.next_line += 1;
        let seg = Segment::new(self.points[p.0].pos, self.points[q.0].pos);
        self.lines.insert(
            id,
            Line {
                ends: [p, q],
                color,
                seg,
            },
        );
        self.points[p.0].lines.insert(id);
        self.points[q.0].lines.insert(id);
        id
    }
}
