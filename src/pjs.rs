use std::collections::HashSet;

use rand::Rng;

use crate::bra::bra;
use crate::domain::{Edge, NodeId, PjsSolution, Problem, Route};
use crate::scratch::Scratch;

/// Parallel Joint Savings: builds feasible routes for one source by
/// savings-driven route merging. `customers` is the set of node ids
/// assigned to this source (from the Mapper's `Mapping`).
pub fn build(
    problem: &Problem,
    source: NodeId,
    customers: &[NodeId],
    beta: f64,
    rng: &mut impl Rng,
) -> PjsSolution {
    let depot = problem.depot;
    let tmax = problem.tmax;
    let n_vehicles = problem.n_vehicles(source);

    let mut scratch = Scratch::new(problem.nodes.len());
    let member: HashSet<NodeId> = customers.iter().copied().collect();

    let mut edges: Vec<&Edge> = problem
        .edges
        .iter()
        .filter(|e| member.contains(&e.inode) && member.contains(&e.jnode))
        .collect();

    let mut slots: Vec<Option<Route>> = Vec::new();
    let mut alive = 0usize;

    for &c in customers {
        let from_source = problem.dist[source][c];
        let to_depot = problem.dist[c][depot];
        let state = scratch.get_mut(c);
        state.from_source = from_source;
        state.to_depot = to_depot;
        state.link_source = true;
        state.link_depot = true;
        state.route = None;

        if from_source + to_depot <= tmax {
            let route = Route::singleton(source, depot, c, problem.nodes[c].revenue, from_source, to_depot);
            let slot = slots.len();
            scratch.get_mut(c).route = Some(slot);
            slots.push(Some(route));
            alive += 1;
        }
    }

    edges.sort_by(|a, b| {
        b.savings_for(source)
            .total_cmp(&a.savings_for(source))
    });

    while !edges.is_empty() && alive > n_vehicles {
        let idx = bra(edges.len(), beta, rng);
        let edge = edges.remove(idx);
        let i = edge.inode;
        let j = edge.jnode;

        let ri = scratch.get(i).route;
        let rj = scratch.get(j).route;

        let (ri, rj) = match (ri, rj) {
            (Some(ri), Some(rj)) if ri != rj => (ri, rj),
            _ => continue,
        };

        if !scratch.get(i).link_depot || !scratch.get(j).link_source {
            continue;
        }

        let i_to_depot = scratch.get(i).to_depot;
        let j_from_source = scratch.get(j).from_source;
        let merged_cost = slots[ri].as_ref().unwrap().cost
            + slots[rj].as_ref().unwrap().cost
            + edge.cost
            - i_to_depot
            - j_from_source;
        if merged_cost > tmax {
            continue;
        }

        let other_nodes = slots[rj].as_ref().unwrap().nodes.clone();
        let other = slots[rj].take().unwrap();
        slots[ri]
            .as_mut()
            .unwrap()
            .merge(other, edge.cost, i_to_depot, j_from_source);
        for nid in other_nodes {
            scratch.get_mut(nid).route = Some(ri);
        }
        scratch.get_mut(i).link_depot = false;
        scratch.get_mut(j).link_source = false;
        alive -= 1;
    }

    let mut routes: Vec<Route> = slots.into_iter().flatten().collect();

    if routes.len() > n_vehicles {
        // Dropped routes' customers are simply not served — this pass
        // never reads scratch again, so there's nothing to clear.
        routes.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
        routes.truncate(n_vehicles);
    }

    PjsSolution::from_routes(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constant::GREEDY_BETA;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn problem_with(text: &str) -> Problem {
        Problem::from_multi_source_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn scenario1_trivial_singleton_feasible() {
        let problem = problem_with("n 3\nm 1\nTmax 10\n0 0 0 1 1\n5 0 7 0 0\n10 0 0\n");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sol = build(&problem, 0, &problem.customers.clone(), GREEDY_BETA, &mut rng);
        assert_eq!(sol.routes.len(), 1);
        assert_eq!(sol.cost, 10.0);
        assert_eq!(sol.revenue, 7.0);
    }

    #[test]
    fn scenario2_infeasible_singleton_yields_nothing() {
        let problem = problem_with("n 3\nm 1\nTmax 9\n0 0 0 1 1\n5 0 7 0 0\n10 0 0\n");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sol = build(&problem, 0, &problem.customers.clone(), GREEDY_BETA, &mut rng);
        assert_eq!(sol.routes.len(), 0);
        assert_eq!(sol.cost, 0.0);
        assert_eq!(sol.revenue, 0.0);
    }

    // source (0,0), depot (20,0); A(5,8) and B(15,-8), both revenue 5, sit
    // off the source-depot line so that joining them is a genuine detour:
    // each singleton costs sqrt(89)+17 =~ 26.434, but the merged route
    // (source -> A -> B -> depot) costs sqrt(89)+17+sqrt(356)+17-17-17
    // =~ 37.736 — longer than either singleton alone.
    const OFF_AXIS_SCENARIO: &str =
        "n 4\nm 1\nTmax 27\n0 0 0 1 1\n5 8 5 0 0\n15 -8 5 0 0\n20 0 0\n";

    #[test]
    fn scenario3_fleet_cap_keeps_higher_revenue_singleton() {
        let mut problem = problem_with(OFF_AXIS_SCENARIO);
        crate::savings::set_savings(&mut problem, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sol = build(&problem, 0, &problem.customers.clone(), GREEDY_BETA, &mut rng);
        assert_eq!(sol.routes.len(), 1);
        assert_eq!(sol.revenue, 5.0);
        assert!((sol.cost - 26.433981132).abs() < 1e-6);
    }

    #[test]
    fn scenario4_merge_feasible_with_wider_tmax() {
        let mut problem = problem_with(
            "n 4\nm 1\nTmax 40\n0 0 0 1 1\n5 8 5 0 0\n15 -8 5 0 0\n20 0 0\n",
        );
        crate::savings::set_savings(&mut problem, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sol = build(&problem, 0, &problem.customers.clone(), GREEDY_BETA, &mut rng);
        assert_eq!(sol.routes.len(), 1);
        assert_eq!(sol.revenue, 10.0);
        assert!((sol.cost - 37.735924555).abs() < 1e-6);
    }

    #[test]
    fn every_route_respects_tmax() {
        let mut problem = problem_with(
            "n 6\nm 2\nTmax 20\n0 0 0 1 2\n1 0 3 0 0\n2 0 3 0 0\n15 0 3 0 0\n16 0 3 0 0\n10 0 0\n",
        );
        crate::savings::set_savings(&mut problem, 0.3);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let sol = build(&problem, 0, &problem.customers.clone(), 0.2, &mut rng);
        for r in &sol.routes {
            assert!(r.cost <= 20.0 + 1e-9);
        }
        assert!(sol.routes.len() <= 2);
    }
}
