use rand::Rng;

use crate::config::constant::GREEDY_BETA;
use crate::domain::{PjsSolution, Problem, Solution};
use crate::mapper;
use crate::pjs;

/// Runs one full Mapper + PJS pass: partitions customers among sources with
/// `mapper::map(problem, beta, rng)`, then builds each source's routes with
/// PJS at the near-greedy beta, and aggregates the per-source results into
/// a single `Solution`.
///
/// `beta` governs only the Mapper's partitioning draw; PJS itself always
/// runs at `GREEDY_BETA` here, matching the "Heuristic" procedure in the
/// savings-engine write-up (randomization lives in the assignment step, not
/// in the route-building step).
pub fn run(problem: &Problem, beta: f64, rng: &mut impl Rng) -> Solution {
    let mapping = mapper::map(problem, beta, rng);

    let per_source: Vec<PjsSolution> = problem
        .sources
        .iter()
        .map(|&source| {
            let customers = mapping.customers_of(source);
            pjs::build(problem, source, &customers, GREEDY_BETA, rng)
        })
        .collect();

    Solution::from_per_source(mapping, per_source)
}
