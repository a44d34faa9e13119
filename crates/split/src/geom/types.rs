//! Identifiers, colors and the board point record.

use std::collections::BTreeSet;
use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Index of a point in the board's point arena. Points are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub usize);

/// Key of an active line. A split retires the old key and mints two new ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(pub usize);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line#{}", self.0)
    }
}

/// The two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Color of lines and areas owned by this player.
    #[inline]
    pub fn color(self) -> Color {
        match self {
            PlayerId::One => Color::P1,
            PlayerId::Two => Color::P2,
        }
    }

    /// Slot in per-player arrays such as `Board::scores`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// Color tag of lines and areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Neutral,
    P1,
    P2,
}

impl Color {
    /// Owning player, `None` for neutral.
    #[inline]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Color::Neutral => None,
            Color::P1 => Some(PlayerId::One),
            Color::P2 => Some(PlayerId::Two),
        }
    }
}

/// A board point and the lines currently terminating at it.
///
/// `lines` is an adjacency index only; lines are owned by the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub pos: Vector2<f64>,
    pub lines: BTreeSet<LineId>,
}

impl Point {
    #[inline]
    pub fn new(pos: Vector2<f64>) -> Self {
        Self {
            pos,
            lines: BTreeSet::new(),
        }
    }
}
