use rand::Rng;

use crate::config::constant::GREEDY_BETA;
use crate::domain::Problem;
use crate::heuristic;
use crate::savings;

/// Sweeps α over the integer-stepped grid `{0.0, 0.1, .., 1.0}`, recomputing
/// savings and running one greedy Heuristic pass per α, and returns the α
/// that maximized revenue. Run once before the main search.
///
/// The sweep is over integer tenths rather than a float range so the grid
/// is exhaustive and reproducible regardless of float step accumulation.
pub fn optimize_alpha(problem: &mut Problem, rng: &mut impl Rng) -> f64 {
    let mut best_alpha = 0.0;
    let mut best_revenue = f64::MIN;

    for step in 0..=10 {
        let alpha = step as f64 / 10.0;
        savings::set_savings(problem, alpha);
        let solution = heuristic::run(problem, GREEDY_BETA, rng);
        if solution.revenue > best_revenue {
            best_revenue = solution.revenue;
            best_alpha = alpha;
        }
    }

    savings::set_savings(problem, best_alpha);
    best_alpha
}
