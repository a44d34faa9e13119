//! Rules engine for Split, a two-player territorial line-drawing game.
//!
//! Players alternately draw straight segments between points on existing
//! segments without crossing any of them. A segment that connects two lines of
//! the mover's own color lets the opponent pick which of the two resulting
//! regions is filled in the mover's color; tiny leftover regions are filled
//! automatically.
//!
//! Layout
//! - `geom`: points, segments, intersection/containment math, polar angles.
//! - `area`: scored polygons and visibility-based containment.
//! - `board`: the game state, legality checks, the turn/fill state machine,
//!   area splitting and region queries.
//! - `moves`: the `Move` sum type and its compact serializable record.
//! - `player`, `session`: player capability trait, random bot, turn driver.

pub mod area;
pub mod board;
pub mod geom;
pub mod moves;
pub mod player;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for callers driving a game.
pub mod prelude {
    pub use crate::area::Area;
    pub use crate::board::{Board, Mode, MoveError, Snapshot};
    pub use crate::geom::{distance, polar_angle, Color, LineId, PlayerId, PointId, Segment};
    pub use crate::moves::{Move, MoveKind, MoveRecord};
    pub use crate::player::{BotCfg, Player, RandomBot};
    pub use crate::session::{Match, MatchCfg, MatchOutcome};
    pub use nalgebra::Vector2 as Vec2;
}
