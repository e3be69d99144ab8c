use std::error::Error;
use std::time::Duration;

use csv::Writer;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::alpha_tuner;
use crate::config::constant::{DEFAULT_MAX_ITER, DEFAULT_NELITES, GREEDY_BETA};
use crate::domain::Problem;
use crate::heuristic;
use crate::metaheuristic;

/// One row of a phase comparison: which phase produced it, and its cost,
/// revenue, and wall-clock time. Mirrors the per-instance comparison table
/// the original solver printed (heuristic vs metaheuristic vs intensive
/// metaheuristic, one column triple per phase).
#[derive(Debug, Clone, Serialize)]
pub struct BenchRow {
    pub phase: String,
    pub cost: f64,
    pub revenue: f64,
    pub elapsed_ms: u128,
}

/// Runs α-tuning, then all three search phases against one already-parsed
/// `Problem`, in order, timing each. `min_beta`/`max_beta` bound the
/// metaheuristic β sampling; `max_iter` and `nelites` are shared by the
/// plain and intensive metaheuristics. `fixed_alpha`, when `Some`, skips
/// the α-tuner entirely and sets savings for that α instead.
pub fn run(
    problem: &mut Problem,
    fixed_alpha: Option<f64>,
    min_beta: f64,
    max_beta: f64,
    max_iter: usize,
    nelites: usize,
    rng: &mut impl Rng,
) -> Vec<BenchRow> {
    let mut rows = Vec::with_capacity(3);

    match fixed_alpha {
        Some(alpha) => {
            crate::savings::set_savings(problem, alpha);
            info!(alpha, "alpha fixed by caller, skipping tuner");
        }
        None => {
            let tuning_start = std::time::Instant::now();
            let alpha = alpha_tuner::optimize_alpha(problem, rng);
            info!(alpha, elapsed_ms = tuning_start.elapsed().as_millis(), "alpha tuned");
        }
    }

    let start = std::time::Instant::now();
    let solution = heuristic::run(problem, GREEDY_BETA, rng);
    rows.push(row("heuristic", &solution, start.elapsed()));

    let start = std::time::Instant::now();
    let solution = metaheuristic::run(problem, min_beta, max_beta, max_iter, rng);
    rows.push(row("metaheuristic", &solution, start.elapsed()));

    let start = std::time::Instant::now();
    let solution =
        metaheuristic::run_intensive(problem, min_beta, max_beta, max_iter, nelites, rng);
    rows.push(row("intensive_metaheuristic", &solution, start.elapsed()));

    rows
}

fn row(phase: &str, solution: &crate::domain::Solution, elapsed: Duration) -> BenchRow {
    BenchRow {
        phase: phase.to_string(),
        cost: solution.cost,
        revenue: solution.revenue,
        elapsed_ms: elapsed.as_millis(),
    }
}

/// Writes bench rows to a CSV file at `path`: `phase, cost, revenue, elapsed_ms`.
pub fn write_csv(rows: &[BenchRow], path: &str) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Default max_iter/nelites for callers that don't want to expose every
/// knob (e.g. a quick one-off bench run).
pub fn defaults() -> (usize, usize) {
    (DEFAULT_MAX_ITER, DEFAULT_NELITES)
}
