// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

mod generate;
mod report;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use generate::GenerateParams;
use plot_alloc_model::prelude::{Roster, RosterConfig, StructuredLoader, TabularIngestor};
use plot_alloc_solver::prelude::{CostMatrixBuilder, OptimizationResult, Optimizer};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser, Debug)]
#[command(name = "plotter", version)]
#[command(about = "Assigns plots to participants so that overall satisfaction is maximal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Optimize a trusted roster config (.json or .toml)
    Optimize {
        /// Path to the roster config
        #[arg(short, long, default_value = "generated.json")]
        input: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Optimize a sheet export (.csv); rows with inconsistent ranks are flagged
    Sheet {
        /// Path to the CSV export
        #[arg(short, long)]
        input: PathBuf,
        /// Smallest accepted rank
        #[arg(long, default_value_t = 1)]
        min_weight: u32,
        /// Largest accepted rank
        #[arg(long, default_value_t = 50)]
        max_weight: u32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate a random roster config
    Generate {
        /// Number of players
        #[arg(short, long, default_value_t = 35)]
        players: usize,
        /// Number of plots
        #[arg(short = 'l', long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
        plots: u32,
        /// Number of ranked plots per player
        #[arg(short, long, default_value_t = 5)]
        weights: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Destination; the extension picks JSON or TOML
        #[arg(short, long, default_value = "generated.json")]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print the result as JSON instead of tables
    #[arg(long)]
    json: bool,
    /// Disable colour codes in the table
    #[arg(long)]
    no_color: bool,
    /// Cost of padding cells in the cost matrix
    #[arg(long, default_value_t = 1000)]
    ghost_cost: i64,
}

#[derive(Serialize)]
struct RunRecord<'a> {
    source: String,
    plots: usize,
    participants: usize,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    #[serde(flatten)]
    result: &'a OptimizationResult,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

fn run_optimizer(
    source: &Path,
    roster: &Roster,
    optimizer: &Optimizer,
    output: &OutputArgs,
) -> Result<()> {
    tracing::info!(
        "Optimizing {} with {} participants and {} plots",
        source.display(),
        roster.len(),
        roster.plot_count()
    );

    let start_ts = Utc::now();
    let t0 = Instant::now();
    let result = optimizer
        .optimize(roster)
        .with_context(|| format!("optimizing {}", source.display()))?;
    let runtime = t0.elapsed();
    let end_ts = Utc::now();

    tracing::info!(
        "Assigned {} participants in {:?} (total score {})",
        result.assignments().len(),
        runtime,
        result.score().total()
    );

    if output.json {
        let record = RunRecord {
            source: source.display().to_string(),
            plots: roster.plot_count(),
            participants: roster.len(),
            start_ts,
            end_ts,
            runtime_ms: runtime.as_millis(),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let happy_range = roster.max_ranked_len().max(1);
    print!(
        "{}",
        report::render_table(
            result.assignments(),
            roster.plot_count(),
            happy_range,
            !output.no_color
        )
    );
    println!();
    print!("{}", report::render_summary(result.score()));
    println!();
    print!("{}", report::render_cheaters(result.score().cheaters()));
    Ok(())
}

fn write_config(cfg: &RosterConfig, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let text = match ext.as_deref() {
        Some("json") => cfg.to_json_string()?,
        Some("toml") => cfg.to_toml_string()?,
        _ => bail!(
            "cannot write {}: expected a .json or .toml file name",
            path.display()
        ),
    };
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    enable_tracing();

    match cli.command {
        Command::Optimize { input, output } => {
            let roster = StructuredLoader::new()
                .from_path(&input)
                .with_context(|| format!("loading {}", input.display()))?;
            let optimizer = Optimizer::new()
                .with_matrix_builder(CostMatrixBuilder::new().ghost_cost(output.ghost_cost));
            run_optimizer(&input, &roster, &optimizer, &output)
        }
        Command::Sheet {
            input,
            min_weight,
            max_weight,
            output,
        } => {
            let ingestor = TabularIngestor::new()
                .min_weight(min_weight)
                .max_weight(max_weight);
            let roster = ingestor
                .from_path(&input)
                .with_context(|| format!("reading sheet {}", input.display()))?;
            let optimizer = Optimizer::new().with_matrix_builder(CostMatrixBuilder::new().ghost_cost(output.ghost_cost));
            run_optimizer(&input, &roster, &optimizer, &output)
        }
        Command::Generate {
            players,
            plots,
            weights,
            seed,
            output,
        } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            tracing::debug!(seed, "Generating roster");
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let params = GenerateParams {
                players,
                plots: plots as usize,
                weights,
            };
            let cfg = generate::generate(params, &mut rng)?;
            write_config(&cfg, &output)?;
            tracing::info!(
                "Wrote {} players over {} plots to {}",
                players,
                plots,
                output.display()
            );
            Ok(())
        }
    }
}
