// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for the run counting library.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use run_count::{queries, McsProfile};
use tracing_subscriber::EnvFilter;

/// Exact counts of permutations by their maximal consecutive runs.
///
/// Results go to stdout. Set RUST_LOG (for example `RUST_LOG=run_count=debug`)
/// to see what the enumerator does on stderr.
#[derive(Parser, Debug)]
#[command(name = "runcount")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Number of permutations of n elements
    Total { n: usize },
    /// Permutations with no consecutive pair at all
    NoRuns { n: usize },
    /// Permutations with exactly the given runs, e.g. "2:1,3:2"
    Profile { n: usize, profile: McsProfile },
    /// Permutations with runs, all of them within [min, max]
    Range { n: usize, min: usize, max: usize },
    /// Permutations with a run of at least min elements
    AtLeast { n: usize, min: usize },
    /// Permutations with exactly COUNT consecutive sequences of LENGTH
    ExactCount {
        n: usize,
        length: usize,
        count: usize,
    },
    /// Distribution by number of adjacent consecutive pairs
    Pairs { n: usize },
    /// Shuffle-play probability of a run of at least x, for x in 2..=n
    Shuffle { n: usize },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("run_count=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "starting");

    match cli.command {
        Commands::Total { n } => {
            let total = queries::number_of_permutations(n).context("counting permutations")?;
            println!("{total}");
        }
        Commands::NoRuns { n } => {
            let total = run_count::no_run_count(n).context("counting run-free permutations")?;
            println!("{total}");
        }
        Commands::Profile { n, profile } => {
            let total = run_count::exact_profile_count(n, &profile)
                .with_context(|| format!("counting profile {{{profile}}} for n = {n}"))?;
            println!("{total}");
        }
        Commands::Range { n, min, max } => {
            let total = queries::at_least_one_run_in_length_range(n, min, max)
                .with_context(|| format!("counting runs in [{min}, {max}] for n = {n}"))?;
            println!("{total}");
        }
        Commands::AtLeast { n, min } => {
            let total = queries::at_least_one_run_at_least(n, min)
                .with_context(|| format!("counting runs of at least {min} for n = {n}"))?;
            println!("{total}");
        }
        Commands::ExactCount { n, length, count } => {
            let total = queries::exact_count_of_runs_of_length(n, length, count)
                .with_context(|| format!("counting {count} sequences of {length} for n = {n}"))?;
            println!("{total}");
        }
        Commands::Pairs { n } => {
            let counts = queries::by_adjacent_pair_count(n).context("counting adjacent pairs")?;
            for (pairs, total) in counts.iter().enumerate() {
                println!("{pairs}\t{total}");
            }
        }
        Commands::Shuffle { n } => shuffle_table(n)?,
    }
    Ok(())
}

/// One line per threshold: the threshold, the exact count and the probability.
fn shuffle_table(n: usize) -> Result<()> {
    for min in 2..=n {
        let total = queries::at_least_one_run_at_least(n, min)
            .with_context(|| format!("counting runs of at least {min} for n = {n}"))?;
        let probability = queries::probability_of_run_at_least(n, min)?;
        println!("{min}\t{total}\t{probability:.6}");
    }
    Ok(())
}
