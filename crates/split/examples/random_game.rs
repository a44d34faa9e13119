//! Play one seeded random-bot game and print every move and the final tally.
//!
//! Usage:
//!   cargo run -p split --example random_game -- [seed] [min_score]

use split::player::ReplayToken;
use split::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let min_score: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5.0);

    let mut a = RandomBot::new("a", BotCfg::default(), ReplayToken { seed, index: 0 });
    let mut b = RandomBot::new("b", BotCfg::default(), ReplayToken { seed, index: 1 });
    let mut m = Match::seat(
        Board::new_game(10.0, min_score),
        &mut a,
        &mut b,
        MatchCfg { max_turns: 60 },
    );
    let outcome = m.run();

    let mut replay = Board::new_game(10.0, min_score);
    for (i, mv) in m.history().iter().enumerate() {
        let mover = replay.next_player();
        let Ok(snap) = replay.apply(mv) else {
            eprintln!("replay diverged at move {i}");
            return;
        };
        match mv {
            Move::LineMove { p1, p2, .. } => println!(
                "{i:3} {mover}: line ({:.2}, {:.2}) -> ({:.2}, {:.2})  [{:.2} | {:.2}]",
                p1.x, p1.y, p2.x, p2.y, snap.scores[0], snap.scores[1]
            ),
            Move::AreaChoice { area } => println!(
                "{i:3} {mover}: fills {:.2} for {:?}  [{:.2} | {:.2}]",
                area.score(),
                area.color(),
                snap.scores[0],
                snap.scores[1]
            ),
        }
    }
    let unfilled: f64 = replay.unfilled_regions().iter().map(Area::score).sum();
    println!(
        "stopped: {outcome:?}; p1 ({}) {:.2}, p2 ({}) {:.2}, unfilled {:.2}",
        m.name(PlayerId::One),
        replay.score(PlayerId::One),
        m.name(PlayerId::Two),
        replay.score(PlayerId::Two),
        unfilled
    );
}
