use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde_json::json;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod selfplay;

use selfplay::Batch;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Self-play runner for the Split rules engine")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Play seeded random-bot games and write one CSV row per game
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10.0)]
        width: f64,
        #[arg(long, default_value_t = 5.0)]
        min_score: f64,
        #[arg(long, default_value_t = 200)]
        max_turns: usize,
        #[arg(long)]
        out: PathBuf,
        /// Optional JSON file with every game's move records
        #[arg(long)]
        moves: Option<PathBuf>,
    },
    /// Summarize a self-play table
    Report {
        #[arg(long)]
        from: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Selfplay {
            games,
            seed,
            width,
            min_score,
            max_turns,
            out,
            moves,
        } => {
            let batch = Batch {
                games,
                seed,
                width,
                min_score,
                max_turns,
            };
            selfplay(&batch, &out, moves.as_deref())
        }
        Action::Report { from } => report(&from),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn selfplay(batch: &Batch, out: &Path, moves: Option<&Path>) -> Result<()> {
    if batch.games == 0 {
        bail!("--games must be positive");
    }
    if !(batch.width.is_finite() && batch.width > 0.0) {
        bail!("--width must be a positive number, got {}", batch.width);
    }
    if batch.min_score.is_nan() || batch.min_score < 0.0 {
        bail!("--min-score must be non-negative, got {}", batch.min_score);
    }
    tracing::info!(
        games = batch.games,
        seed = batch.seed,
        width = batch.width,
        min_score = batch.min_score,
        "selfplay"
    );

    let rows = batch.play();
    let mut df = selfplay::to_frame(&rows)?;

    ensure_parent(out)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(rows = df.height(), out = %out.display(), "wrote results");

    let mut outputs = Vec::new();
    if let Some(path) = moves {
        ensure_parent(path)?;
        std::fs::write(path, serde_json::to_vec_pretty(&rows)?)
            .with_context(|| format!("writing {}", path.display()))?;
        outputs.push(path.to_path_buf());
    }

    let params = json!({
        "games": batch.games,
        "seed": batch.seed,
        "width": batch.width,
        "min_score": batch.min_score,
        "max_turns": batch.max_turns
    });
    let sidecar = provenance::Sidecar::new(params).with_outputs(outputs);
    let prov = provenance::write_sidecar(out, sidecar)?;
    tracing::info!(path = %prov.display(), "wrote provenance");
    Ok(())
}

/// Per-table means plus an outcome histogram.
fn summarize(from: &Path) -> Result<(DataFrame, DataFrame)> {
    let lf = LazyCsvReader::new(from)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", from.display()))?;
    let means = lf
        .clone()
        .select([
            col("game").count().alias("games"),
            col("moves").mean().alias("mean_moves"),
            col("p1_score").mean().alias("mean_p1_score"),
            col("p2_score").mean().alias("mean_p2_score"),
            col("filled_areas").mean().alias("mean_filled_areas"),
        ])
        .collect()?;
    let outcomes = lf
        .group_by([col("outcome")])
        .agg([col("game").count().alias("games")])
        .sort(["outcome"], Default::default())
        .collect()?;
    Ok((means, outcomes))
}

fn report(from: &Path) -> Result<()> {
    let (means, outcomes) = summarize(from)?;
    tracing::info!(rows = means.height(), from = %from.display(), "report");
    println!("{means}");
    println!("{outcomes}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn small_batch() -> Batch {
        Batch {
            games: 3,
            seed: 9,
            width: 10.0,
            min_score: 5.0,
            max_turns: 20,
        }
    }

    #[test]
    fn selfplay_writes_table_moves_and_provenance() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs/results.csv");
        let moves = dir.path().join("runs/moves.json");
        selfplay(&small_batch(), &out, Some(&moves)).unwrap();

        let df = LazyCsvReader::new(&out).finish().unwrap().collect().unwrap();
        assert_eq!(df.height(), 3);
        for name in selfplay::COLUMNS {
            assert!(df.column(name).is_ok(), "missing column {name}");
        }

        let log: Value = serde_json::from_slice(&std::fs::read(&moves).unwrap()).unwrap();
        let games = log.as_array().unwrap();
        assert_eq!(games.len(), 3);
        for (i, game) in games.iter().enumerate() {
            assert_eq!(game["game"], i as u64);
            assert_eq!(
                game["records"].as_array().unwrap().len() as u64,
                game["moves"].as_u64().unwrap()
            );
        }

        let prov = dir.path().join("runs/results.provenance.json");
        let doc: Value = serde_json::from_slice(&std::fs::read(prov).unwrap()).unwrap();
        assert_eq!(doc["params"]["seed"], 9);
        assert_eq!(doc["outputs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn report_counts_games() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("results.csv");
        selfplay(&small_batch(), &out, None).unwrap();
        let (means, outcomes) = summarize(&out).unwrap();
        assert_eq!(means.height(), 1);
        assert!(outcomes.height() >= 1);
    }

    #[test]
    fn selfplay_rejects_bad_arguments() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("results.csv");
        let batch = Batch {
            games: 0,
            ..small_batch()
        };
        assert!(selfplay(&batch, &out, None).is_err());
        let batch = Batch {
            width: -1.0,
            ..small_batch()
        };
        assert!(selfplay(&batch, &out, None).is_err());
        assert!(!out.exists());
    }
}
