//! Player capability interface and the random bot.
//!
//! The board depends on none of this; players only read the board and hand
//! back moves. A driver (see `session`) seats two players, asks the one
//! holding the turn for a move and forwards applied moves to the other.

mod random;

pub use random::{BotCfg, RandomBot, ReplayToken};

use crate::board::Board;
use crate::moves::Move;

pub trait Player {
    /// Display name used in logs.
    fn name(&self) -> &str;

    /// Whether to take the first seat (player one, who draws first).
    fn choose_color(&mut self, board: &Board) -> bool;

    /// Next move for the seat holding the turn, `None` if none can be found.
    fn get_move(&mut self, board: &Board) -> Option<Move>;

    /// The opponent's seat decision (`true`: they took the first seat).
    fn update_color_choice(&mut self, _took_first: bool) {}

    /// A move the opponent made, after it was applied.
    fn update_move(&mut self, _mv: &Move) {}
}
