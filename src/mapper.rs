use rand::Rng;

use crate::bra::bra;
use crate::domain::{Mapping, NodeId, Problem};

/// Partitions customer nodes among sources via preference-driven
/// round-robin with biased randomized acceptance. Source ids are dense
/// `0..S`, which is exactly the row index used by the returned `Mapping`.
pub fn map(problem: &Problem, beta: f64, rng: &mut impl Rng) -> Mapping {
    let s = problem.n_sources();
    let total_nodes = problem.nodes.len();

    // score(s, c) = dist(s, c) - min(dist(s', c) : s' != s); most negative
    // (relatively closest) sorts first.
    let mut preferences: Vec<Vec<(f64, NodeId)>> = vec![Vec::with_capacity(problem.n_customers()); s];
    for &c in &problem.customers {
        for &source in &problem.sources {
            let absolute = problem.dist[source][c];
            let best_other = problem
                .sources
                .iter()
                .filter(|&&other| other != source)
                .map(|&other| problem.dist[other][c])
                .fold(f64::MAX, f64::min);
            preferences[source].push((absolute - best_other, c));
        }
    }
    for prefs in preferences.iter_mut() {
        prefs.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

    let mut assigned = vec![false; total_nodes];
    let mut mapping = Mapping::new(s, total_nodes);

    let n = problem.n_customers();
    let mut total_assigned = 0;
    let mut cursor = 0;

    // A full round through every source with no new assignment means no
    // source has capacity left to take one — e.g. every source declares
    // n_vehicles=0. Stop rather than spin forever on the remaining
    // customers, who are simply left unassigned.
    let mut rounds_without_progress = 0;

    while total_assigned < n && rounds_without_progress < s {
        let source = problem.sources[cursor];
        let capacity = problem.n_vehicles(source);
        let before_round = total_assigned;
        let mut n_assigned = 0;

        while n_assigned < capacity && total_assigned < n && !preferences[source].is_empty() {
            let idx = bra(preferences[source].len(), beta, rng);
            let (_, picked) = preferences[source].remove(idx);

            if !assigned[picked] {
                assigned[picked] = true;
                n_assigned += 1;
                total_assigned += 1;
                mapping.assign(source, picked);
            }
        }

        rounds_without_progress = if total_assigned == before_round {
            rounds_without_progress + 1
        } else {
            0
        };

        cursor = (cursor + 1) % s;
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constant::GREEDY_BETA;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn two_source_problem() -> Problem {
        let text = "n 5\nm 2\nTmax 50\n\
                     0 0 0 1 1\n\
                     20 0 0 1 1\n\
                     2 0 1 0 0\n\
                     18 0 1 0 0\n\
                     10 0 0\n";
        Problem::from_multi_source_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn scenario_5_partitions_by_proximity() {
        let problem = two_source_problem();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mapping = map(&problem, GREEDY_BETA, &mut rng);

        // customers 2 and 3; source 0 is close to customer 2, source 1 close to 3.
        assert!(mapping.is_assigned(0, 2));
        assert!(mapping.is_assigned(1, 3));
        assert!(!mapping.is_assigned(0, 3));
        assert!(!mapping.is_assigned(1, 2));
    }

    #[test]
    fn every_customer_assigned_exactly_once() {
        let problem = two_source_problem();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mapping = map(&problem, 0.5, &mut rng);
        for &c in &problem.customers {
            let count = (0..mapping.n_sources())
                .filter(|&s| mapping.is_assigned(s, c))
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn zero_capacity_sources_terminate_instead_of_hanging() {
        let text = "n 5\nm 2\nTmax 50\n\
                     0 0 0 1 0\n\
                     20 0 0 1 0\n\
                     2 0 1 0 0\n\
                     18 0 1 0 0\n\
                     10 0 0\n";
        let problem = Problem::from_multi_source_reader(Cursor::new(text)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mapping = map(&problem, GREEDY_BETA, &mut rng);
        for &c in &problem.customers {
            let count = (0..mapping.n_sources())
                .filter(|&s| mapping.is_assigned(s, c))
                .count();
            assert_eq!(count, 0);
        }
    }
}
