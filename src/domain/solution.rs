use super::node::NodeId;
use super::route::Route;

/// Binary `S x (S+N)` matrix: `mapping[s][j] = 1` iff the customer with id
/// `j` is assigned to source `s`. The leading `S` columns are always
/// `false`; they exist purely so the matrix is indexable by raw node id.
#[derive(Debug, Clone)]
pub struct Mapping {
    rows: Vec<Vec<bool>>,
}

impl Mapping {
    pub fn new(n_sources: usize, n_total_nodes: usize) -> Self {
        Mapping {
            rows: vec![vec![false; n_total_nodes]; n_sources],
        }
    }

    pub fn assign(&mut self, source_row: usize, customer_id: NodeId) {
        self.rows[source_row][customer_id] = true;
    }

    pub fn is_assigned(&self, source_row: usize, customer_id: NodeId) -> bool {
        self.rows[source_row][customer_id]
    }

    pub fn n_sources(&self) -> usize {
        self.rows.len()
    }

    /// Customer ids assigned to `source_row`, in ascending id order.
    pub fn customers_of(&self, source_row: usize) -> Vec<NodeId> {
        self.rows[source_row]
            .iter()
            .enumerate()
            .filter_map(|(id, &assigned)| assigned.then_some(id))
            .collect()
    }
}

/// A vector of Routes belonging to a single source, plus aggregates.
#[derive(Debug, Clone, Default)]
pub struct PjsSolution {
    pub routes: Vec<Route>,
    pub cost: f64,
    pub revenue: f64,
}

impl PjsSolution {
    pub fn from_routes(routes: Vec<Route>) -> Self {
        let cost = routes.iter().map(|r| r.cost).sum();
        let revenue = routes.iter().map(|r| r.revenue).sum();
        PjsSolution {
            routes,
            cost,
            revenue,
        }
    }
}

/// A Mapping plus a flat vector of Routes (aggregated across all sources),
/// with overall cost and revenue.
#[derive(Debug, Clone)]
pub struct Solution {
    pub mapping: Mapping,
    pub routes: Vec<Route>,
    pub cost: f64,
    pub revenue: f64,
}

impl Solution {
    pub fn from_per_source(mapping: Mapping, per_source: Vec<PjsSolution>) -> Self {
        let mut routes = Vec::new();
        let mut cost = 0.0;
        let mut revenue = 0.0;
        for pjs in per_source {
            cost += pjs.cost;
            revenue += pjs.revenue;
            routes.extend(pjs.routes);
        }
        Solution {
            mapping,
            routes,
            cost,
            revenue,
        }
    }
}
