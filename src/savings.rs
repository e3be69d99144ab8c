use crate::domain::Problem;

/// For every edge `(i, j)` and every source `s`, sets
/// `savings[s] = (1-a) * (dist(i, depot) + dist(s, j) - edge.cost) + a * (revenue(i) + revenue(j))`.
///
/// `alpha` blends distance savings with revenue attractiveness; values
/// outside `[0, 1]` are clamped. Deterministic — calling this twice with
/// the same alpha yields identical edge savings.
pub fn set_savings(problem: &mut Problem, alpha: f64) {
    let alpha = alpha.clamp(0.0, 1.0);
    let depot = problem.depot;
    let sources = problem.sources.clone();

    for edge in problem.edges.iter_mut() {
        let i = edge.inode;
        let j = edge.jnode;
        let revenue_term = problem.nodes[i].revenue + problem.nodes[j].revenue;
        edge.savings.clear();
        for &s in &sources {
            let distance_term = problem.dist[i][depot] + problem.dist[s][j] - edge.cost;
            let value = (1.0 - alpha) * distance_term + alpha * revenue_term;
            edge.savings.insert(s, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_problem() -> Problem {
        let text = "n 4\nm 1\nTmax 20\n0 0 0 1 1\n3 0 5 0 0\n7 0 5 0 0\n10 0 0\n";
        Problem::from_multi_source_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn idempotent_for_the_same_alpha() {
        let mut p1 = sample_problem();
        let mut p2 = sample_problem();
        set_savings(&mut p1, 0.4);
        set_savings(&mut p2, 0.4);
        for (e1, e2) in p1.edges.iter().zip(p2.edges.iter()) {
            for (&s, &v) in &e1.savings {
                assert_eq!(v, e2.savings[&s]);
            }
        }
    }

    #[test]
    fn clamps_alpha_outside_unit_interval() {
        let mut below = sample_problem();
        let mut clamped = sample_problem();
        set_savings(&mut below, -5.0);
        set_savings(&mut clamped, 0.0);
        for (e1, e2) in below.edges.iter().zip(clamped.edges.iter()) {
            for (&s, &v) in &e1.savings {
                assert_eq!(v, e2.savings[&s]);
            }
        }
    }
}
