//! Uniform-random legal-move sampler.
//!
//! Model
//! - Sample a point uniformly on the board until it lies outside every scored
//!   area, pick a direction uniformly in `[0, π)`, and cast a ray both ways to
//!   the nearest line. The two hits are the move's endpoints.
//! - Retry on illegal candidates; give up after `BotCfg::move_attempts`.
//! - In area selection, pick one of the two candidates uniformly.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::{PI, SQRT_2};

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::Player;
use crate::board::Board;
use crate::geom::{distance, LineId, Segment};
use crate::moves::Move;

/// Retry budget of the sampler.
#[derive(Clone, Copy, Debug)]
pub struct BotCfg {
    /// Candidate lines tried before giving up.
    pub move_attempts: usize,
    /// Points tried per candidate when looking for unscored space.
    pub point_attempts: usize,
}

impl Default for BotCfg {
    fn default() -> Self {
        Self {
            move_attempts: 100,
            point_attempts: 1000,
        }
    }
}

/// Replay token to make bots reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

pub struct RandomBot {
    name: String,
    cfg: BotCfg,
    rng: StdRng,
}

impl RandomBot {
    pub fn new(name: impl Into<String>, cfg: BotCfg, tok: ReplayToken) -> Self {
        Self {
            name: name.into(),
            cfg,
            rng: tok.to_std_rng(),
        }
    }

    /// Nearest line hit by the ray from `origin` at angle `theta`, and the hit.
    fn cast(board: &Board, origin: Vector2<f64>, theta: f64) -> Option<(LineId, Vector2<f64>)> {
        let reach = board.width() * SQRT_2 + 1.0;
        let ray = Segment::new(origin, origin + Vector2::new(theta.cos(), theta.sin()) * reach);
        board
            .lines()
            .filter_map(|(id, line)| line.seg.intersection(&ray).map(|p| (id, p)))
            .min_by(|(_, p), (_, q)| distance(*p, origin).total_cmp(&distance(*q, origin)))
    }

    fn open_point(&mut self, board: &Board) -> Option<Vector2<f64>> {
        let w = board.width();
        (0..self.cfg.point_attempts).find_map(|_| {
            let p = Vector2::new(self.rng.gen::<f64>() * w, self.rng.gen::<f64>() * w);
            (!board.areas().iter().any(|a| a.encloses(p))).then_some(p)
        })
    }
}

impl Player for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_color(&mut self, _board: &Board) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn get_move(&mut self, board: &Board) -> Option<Move> {
        if let Some(candidates) = board.pending_candidates() {
            let pick = self.rng.gen_range(0..candidates.len());
            return Some(Move::AreaChoice {
                area: candidates[pick].clone(),
            });
        }
        for _ in 0..self.cfg.move_attempts {
            let Some(origin) = self.open_point(board) else {
                continue;
            };
            let theta = self.rng.gen::<f64>() * PI;
            let (Some((p1_line, p1)), Some((p2_line, p2))) = (
                Self::cast(board, origin, theta),
                Self::cast(board, origin, theta - PI),
            ) else {
                continue;
            };
            let mv = Move::LineMove {
                p1,
                p1_line,
                p2,
                p2_line,
            };
            if board.is_legal(&mv).is_ok() {
                return Some(mv);
            }
        }
        debug!(bot = %self.name, "no legal move found");
        None
    }
}
