//! Turn driver for two seated players.
//!
//! A `Match` owns the board and two `Player`s. Each step asks the player
//! holding the turn (`Board::next_player`) for a move, applies it and forwards
//! it to the other player. The driver stops when a player has no move, submits
//! an illegal one, or the turn limit is reached. It never declares a winner.

use tracing::{debug, info, warn};

use crate::board::{Board, MoveError};
use crate::geom::PlayerId;
use crate::moves::Move;
use crate::player::Player;

#[derive(Clone, Copy, Debug)]
pub struct MatchCfg {
    /// Moves (line draws and area choices) before the driver stops.
    pub max_turns: usize,
}

impl Default for MatchCfg {
    fn default() -> Self {
        Self { max_turns: 200 }
    }
}

/// Why `Match::run` stopped.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchOutcome {
    TurnLimit,
    NoMove { player: PlayerId },
    Rejected { player: PlayerId, error: MoveError },
}

pub struct Match<'a> {
    board: Board,
    seats: [&'a mut dyn Player; 2],
    history: Vec<Move>,
    cfg: MatchCfg,
}

impl<'a> Match<'a> {
    /// Seat `first` and `second` by letting `first` choose; `second` is told.
    pub fn seat(
        board: Board,
        first: &'a mut dyn Player,
        second: &'a mut dyn Player,
        cfg: MatchCfg,
    ) -> Self {
        let took_first = first.choose_color(&board);
        second.update_color_choice(took_first);
        let seats: [&'a mut dyn Player; 2] = if took_first {
            [first, second]
        } else {
            [second, first]
        };
        debug!(
            p1 = seats[0].name(),
            p2 = seats[1].name(),
            "players seated"
        );
        Self {
            board,
            seats,
            history: Vec::new(),
            cfg,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied so far, in order.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Seat name of `player`.
    pub fn name(&self, player: PlayerId) -> &str {
        self.seats[player.index()].name()
    }

    /// One move by the player holding the turn.
    pub fn step(&mut self) -> Result<(), MatchOutcome> {
        let player = self.board.next_player();
        let mv = self.seats[player.index()]
            .get_move(&self.board)
            .ok_or(MatchOutcome::NoMove { player })?;
        if let Err(error) = self.board.apply(&mv) {
            warn!(%player, %error, "move rejected");
            return Err(MatchOutcome::Rejected { player, error });
        }
        self.seats[player.other().index()].update_move(&mv);
        self.history.push(mv);
        Ok(())
    }

    /// Step until the driver stops; returns why.
    pub fn run(&mut self) -> MatchOutcome {
        let outcome = loop {
            if self.history.len() >= self.cfg.max_turns {
                break MatchOutcome::TurnLimit;
            }
            if let Err(outcome) = self.step() {
                break outcome;
            }
        };
        let [s1, s2] = self.board.scores();
        info!(
            moves = self.history.len(),
            p1_score = s1,
            p2_score = s2,
            outcome = ?outcome,
            "match stopped"
        );
        outcome
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{BotCfg, RandomBot, ReplayToken};

    /// Replays a fixed script and records what it was told.
    struct Scripted {
        moves: Vec<Move>,
        seen: usize,
        told_first: Option<bool>,
    }

    impl Player for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }
        fn choose_color(&mut self, _board: &Board) -> bool {
            false
        }
        fn get_move(&mut self, _board: &Board) -> Option<Move> {
            if self.moves.is_empty() {
                None
            } else {
                Some(self.moves.remove(0))
            }
        }
        fn update_color_choice(&mut self, took_first: bool) {
            self.told_first = Some(took_first);
        }
        fn update_move(&mut self, _mv: &Move) {
            self.seen += 1;
        }
    }

    #[test]
    fn bots_play_until_turn_limit_or_stall() {
        let mut a = RandomBot::new("a", BotCfg::default(), ReplayToken { seed: 1, index: 0 });
        let mut b = RandomBot::new("b", BotCfg::default(), ReplayToken { seed: 1, index: 1 });
        let mut m = Match::seat(
            Board::new_game(10.0, 5.0),
            &mut a,
            &mut b,
            MatchCfg { max_turns: 12 },
        );
        let outcome = m.run();
        assert!(matches!(
            outcome,
            MatchOutcome::TurnLimit | MatchOutcome::NoMove { .. }
        ));
        assert!(m.history().len() <= 12);
        let [s1, s2] = m.board().scores();
        assert!(s1 >= 0.0 && s2 >= 0.0 && s1 + s2 <= 100.0 + 1e-6);
    }

    #[test]
    fn seating_and_notifications() {
        let mut bot = RandomBot::new("bot", BotCfg::default(), ReplayToken { seed: 5, index: 0 });
        let mut script = Scripted {
            moves: Vec::new(),
            seen: 0,
            told_first: None,
        };
        // The scripted player declines the first seat.
        let mut m = Match::seat(
            Board::new_game(10.0, 5.0),
            &mut script,
            &mut bot,
            MatchCfg::default(),
        );
        assert_eq!(m.name(PlayerId::One), "bot");
        assert_eq!(m.name(PlayerId::Two), "scripted");
        m.step().expect("bot moves first");
        // Scripted seat has nothing to play.
        assert_eq!(m.run(), MatchOutcome::NoMove { player: PlayerId::Two });
        assert_eq!(m.history().len(), 1);
        drop(m);
        assert_eq!(script.seen, 1);
        assert_eq!(script.told_first, None);
    }

    #[test]
    fn illegal_move_stops_the_match() {
        let mut first = Scripted {
            moves: Vec::new(),
            seen: 0,
            told_first: None,
        };
        let mut second = Scripted {
            moves: vec![Move::AreaChoice {
                area: crate::area::Area::empty(),
            }],
            seen: 0,
            told_first: None,
        };
        let mut m = Match::seat(
            Board::new_game(10.0, 5.0),
            &mut first,
            &mut second,
            MatchCfg::default(),
        );
        // `first` declined, so `second` holds player one.
        assert_eq!(
            m.run(),
            MatchOutcome::Rejected {
                player: PlayerId::One,
                error: MoveError::InvalidAreaChoice,
            }
        );
        drop(m);
        assert_eq!(second.told_first, Some(false));
    }
}
