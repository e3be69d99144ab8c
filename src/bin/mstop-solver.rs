use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use mstop::config::constant::{DEFAULT_MAX_BETA, DEFAULT_MAX_ITER, DEFAULT_MIN_BETA, DEFAULT_NELITES};
use mstop::{bench, Problem};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Solves a Multi-Source Team Orienteering Problem instance.
#[derive(Parser)]
#[command(name = "mstop-solver")]
#[command(about = "Solve a multi-source team orienteering problem instance", long_about = None)]
struct Cli {
    /// Instance file to read.
    instance: PathBuf,

    /// Parse `instance` as a single-source file instead of multi-source.
    #[arg(long)]
    single_source: bool,

    /// Fix alpha instead of running the alpha-tuner sweep.
    #[arg(long)]
    alpha: Option<f64>,

    /// Lower bound of the metaheuristic's randomized beta range.
    #[arg(long, default_value_t = DEFAULT_MIN_BETA)]
    min_beta: f64,

    /// Upper bound of the metaheuristic's randomized beta range.
    #[arg(long, default_value_t = DEFAULT_MAX_BETA)]
    max_beta: f64,

    /// Iterations for the metaheuristic and intensive metaheuristic.
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Elite pool size for the intensive metaheuristic.
    #[arg(long, default_value_t = DEFAULT_NELITES)]
    elites: usize,

    /// PRNG seed; omit for a nondeterministic seed drawn from the OS.
    #[arg(long)]
    seed: Option<u64>,

    /// Write per-phase cost/revenue/elapsed_ms rows to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[tracing::instrument(name = "mstop solve", level = "info", skip(cli))]
fn solve(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut problem = if cli.single_source {
        Problem::from_single_source_file(&cli.instance)?
    } else {
        Problem::from_multi_source_file(&cli.instance)?
    };

    info!(
        sources = problem.n_sources(),
        customers = problem.n_customers(),
        tmax = problem.tmax,
        "instance loaded"
    );

    let seed = cli.seed.unwrap_or_else(|| rand::random());
    info!(seed, "seeding PRNG");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let rows = bench::run(
        &mut problem,
        cli.alpha,
        cli.min_beta,
        cli.max_beta,
        cli.max_iter,
        cli.elites,
        &mut rng,
    );

    for row in &rows {
        println!(
            "{:<24} cost={} revenue={} elapsed_ms={}",
            row.phase.bold(),
            format!("{:.2}", row.cost).cyan(),
            format!("{:.2}", row.revenue).green(),
            row.elapsed_ms
        );
    }

    if let Some(path) = &cli.csv {
        bench::write_csv(&rows, &path.to_string_lossy())?;
        info!(path = %path.display(), "wrote bench rows");
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE))
        .init();

    let cli = Cli::parse();
    solve(&cli)
}
