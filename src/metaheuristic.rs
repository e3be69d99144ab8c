use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::Rng;

use crate::config::constant::GREEDY_BETA;
use crate::domain::{Problem, Solution};
use crate::heuristic;
use crate::pjs;

/// Repeated Heuristic with randomized β; keeps only the strictly best
/// solution seen. Losing candidates are dropped at the end of each loop
/// iteration — ownership does the freeing the naive C++ port would need a
/// manual `delete` for.
pub fn run(
    problem: &Problem,
    min_beta: f64,
    max_beta: f64,
    max_iter: usize,
    rng: &mut impl Rng,
) -> Solution {
    let mut best = heuristic::run(problem, GREEDY_BETA, rng);
    for _ in 0..max_iter {
        let beta = rng.gen_range(min_beta..max_beta);
        let candidate = heuristic::run(problem, beta, rng);
        if candidate.revenue > best.revenue {
            best = candidate;
        }
    }
    best
}

/// An elite pool entry, ordered solely by revenue so the pool can live in a
/// `BinaryHeap`. Wrapped in `Reverse` by callers so the heap's pop-minimum
/// behavior evicts the worst elite in `O(log nelites)`.
struct Elite {
    revenue: f64,
    solution: Solution,
}

impl PartialEq for Elite {
    fn eq(&self, other: &Self) -> bool {
        self.revenue == other.revenue
    }
}
impl Eq for Elite {}
impl PartialOrd for Elite {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Elite {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.revenue.total_cmp(&other.revenue)
    }
}

/// Phase A builds a bounded elite pool of diverse mappings; Phase B
/// re-optimizes the routing under each elite's frozen mapping via per-source
/// multistart PJS, keeping the best PJS_Solution per source by revenue.
///
/// `nelites` is clamped to at least 1: the pool always keeps the running
/// best mapping for Phase B to intensify, even if the caller passes 0.
pub fn run_intensive(
    problem: &Problem,
    min_beta: f64,
    max_beta: f64,
    max_iter: usize,
    nelites: usize,
    rng: &mut impl Rng,
) -> Solution {
    let mut pool: BinaryHeap<Reverse<Elite>> = BinaryHeap::new();

    let seed = heuristic::run(problem, GREEDY_BETA, rng);
    pool.push(Reverse(Elite {
        revenue: seed.revenue,
        solution: seed,
    }));

    for _ in 0..max_iter {
        let beta = rng.gen_range(min_beta..max_beta);
        let candidate = heuristic::run(problem, beta, rng);
        pool.push(Reverse(Elite {
            revenue: candidate.revenue,
            solution: candidate,
        }));
        // Never evict below one elite, even if the caller passes nelites=0 —
        // Phase B needs at least the running-best mapping to intensify.
        while pool.len() > nelites.max(1) {
            pool.pop();
        }
    }

    let mut best: Option<Solution> = None;
    for Reverse(elite) in pool.into_iter() {
        let mapping = elite.solution.mapping;
        let mut per_source = Vec::with_capacity(problem.sources.len());
        for &source in &problem.sources {
            let customers = mapping.customers_of(source);
            let mut best_pjs = pjs::build(problem, source, &customers, GREEDY_BETA, rng);
            for _ in 0..max_iter {
                let beta = rng.gen_range(min_beta..max_beta);
                let candidate = pjs::build(problem, source, &customers, beta, rng);
                if candidate.revenue > best_pjs.revenue {
                    best_pjs = candidate;
                }
            }
            per_source.push(best_pjs);
        }

        let candidate_solution = Solution::from_per_source(mapping, per_source);
        let promote = best
            .as_ref()
            .map_or(true, |b| candidate_solution.revenue > b.revenue);
        if promote {
            best = Some(candidate_solution);
        }
    }

    best.expect("the seeding elite guarantees the pool is never empty")
}
