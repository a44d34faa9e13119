//! Seeded random-bot batches.
//!
//! Game `g` of a batch seats two bots with replay tokens `(seed, 2g)` and
//! `(seed, 2g + 1)`, so any single game can be replayed from the table row.

use polars::prelude::*;
use serde::Serialize;
use split::moves::MoveRecord;
use split::player::{BotCfg, RandomBot, ReplayToken};
use split::prelude::*;

/// Column order of the results table.
pub const COLUMNS: [&str; 7] = [
    "game",
    "p1",
    "moves",
    "p1_score",
    "p2_score",
    "filled_areas",
    "outcome",
];

pub struct Batch {
    pub games: u32,
    pub seed: u64,
    pub width: f64,
    pub min_score: f64,
    pub max_turns: usize,
}

/// One finished game; serialized whole into the move log.
#[derive(Serialize)]
pub struct GameRow {
    pub game: u32,
    /// Name of the bot that held player one.
    pub p1: String,
    pub moves: u32,
    pub p1_score: f64,
    pub p2_score: f64,
    pub filled_areas: u32,
    pub outcome: String,
    pub records: Vec<MoveRecord>,
}

impl Batch {
    pub fn play(&self) -> Vec<GameRow> {
        (0..self.games).map(|g| self.play_one(g)).collect()
    }

    fn play_one(&self, game: u32) -> GameRow {
        let index = 2 * u64::from(game);
        let mut a = RandomBot::new(
            format!("bot{index}"),
            BotCfg::default(),
            ReplayToken {
                seed: self.seed,
                index,
            },
        );
        let mut b = RandomBot::new(
            format!("bot{}", index + 1),
            BotCfg::default(),
            ReplayToken {
                seed: self.seed,
                index: index + 1,
            },
        );
        let cfg = MatchCfg {
            max_turns: self.max_turns,
        };
        let mut m = Match::seat(
            Board::new_game(self.width, self.min_score),
            &mut a,
            &mut b,
            cfg,
        );
        let outcome = m.run();
        let p1 = m.name(PlayerId::One).to_string();
        let records = records(self.width, self.min_score, m.history());
        let board = m.into_board();
        let [p1_score, p2_score] = board.scores();
        tracing::debug!(game, moves = records.len(), p1_score, p2_score, "game done");
        GameRow {
            game,
            p1,
            moves: records.len() as u32,
            p1_score,
            p2_score,
            filled_areas: board.areas().len() as u32,
            outcome: outcome_label(&outcome),
            records,
        }
    }
}

/// Record form of `history`, replayed on a fresh board so area choices
/// resolve to their candidate index.
fn records(width: f64, min_score: f64, history: &[Move]) -> Vec<MoveRecord> {
    let mut board = Board::new_game(width, min_score);
    let mut out = Vec::with_capacity(history.len());
    for mv in history {
        out.push(mv.to_record(&board));
        if let Err(error) = board.apply(mv) {
            tracing::warn!(%error, "replay diverged");
            break;
        }
    }
    out
}

fn outcome_label(outcome: &MatchOutcome) -> String {
    match outcome {
        MatchOutcome::TurnLimit => "turn_limit".to_string(),
        MatchOutcome::NoMove { player } => format!("no_move ({player})"),
        MatchOutcome::Rejected { player, error } => format!("rejected ({player}): {error}"),
    }
}

pub fn to_frame(rows: &[GameRow]) -> PolarsResult<DataFrame> {
    df!(
        COLUMNS[0] => rows.iter().map(|r| r.game).collect::<Vec<_>>(),
        COLUMNS[1] => rows.iter().map(|r| r.p1.clone()).collect::<Vec<_>>(),
        COLUMNS[2] => rows.iter().map(|r| r.moves).collect::<Vec<_>>(),
        COLUMNS[3] => rows.iter().map(|r| r.p1_score).collect::<Vec<_>>(),
        COLUMNS[4] => rows.iter().map(|r| r.p2_score).collect::<Vec<_>>(),
        COLUMNS[5] => rows.iter().map(|r| r.filled_areas).collect::<Vec<_>>(),
        COLUMNS[6] => rows.iter().map(|r| r.outcome.clone()).collect::<Vec<_>>()
    )
}
