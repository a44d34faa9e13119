//! Game state: lines, scored areas, scores, turn, and the fill state machine.
//!
//! Purpose
//! - Own every point and line of a game (arena of points addressed by
//!   `PointId`, id-keyed map of active lines addressed by `LineId`).
//! - Check moves without side effects (`is_legal`) and apply them (`apply`).
//! - Partition a region along a freshly drawn line (`split_candidates`) and
//!   answer "which region contains this point" (`surrounding_area`,
//!   `regions`, `unfilled_regions`).
//!
//! State machine
//! - `Mode::Normal`: the player to move draws a line.
//! - `Mode::AreaSelect`: a line joining two of the mover's own lines split a
//!   large region; the opponent, who now holds the turn, picks which of the two
//!   pending candidates is credited to the mover. The turn does not change on
//!   that pick.
//!
//! Module layout: `types.rs` (state and queries), `legality.rs`, `apply.rs`,
//! `split.rs` (visibility and polygon partition), `regions.rs` (face
//! reconstruction).

mod apply;
mod error;
mod legality;
mod regions;
mod split;
mod types;

pub use error::MoveError;
pub use types::{Board, Line, Mode, PendingSplit, Snapshot};
