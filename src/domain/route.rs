use super::node::NodeId;

/// Ordered bag of customers bound to one source and the depot. The
/// implicit sequence is `source -> nodes[0] -> ... -> nodes[k-1] -> depot`.
/// `nodes` are non-owning references (ids) into the Problem's node arena.
#[derive(Debug, Clone)]
pub struct Route {
    pub source: NodeId,
    pub depot: NodeId,
    pub nodes: Vec<NodeId>,
    pub cost: f64,
    pub revenue: f64,
}

impl Route {
    /// Seed a single-customer route: `source -> starting_node -> depot`.
    pub fn singleton(
        source: NodeId,
        depot: NodeId,
        starting_node: NodeId,
        revenue: f64,
        from_source: f64,
        to_depot: f64,
    ) -> Self {
        Route {
            source,
            depot,
            nodes: vec![starting_node],
            cost: from_source + to_depot,
            revenue,
        }
    }

    /// Merge `other` onto the tail of `self` via the connecting edge.
    /// `i_to_depot` / `j_from_source` are the scratch values for the
    /// edge's endpoints at merge time (the distances the merge removes
    /// from the aggregate cost).
    pub fn merge(&mut self, mut other: Route, edge_cost: f64, i_to_depot: f64, j_from_source: f64) {
        self.cost += other.cost + edge_cost - i_to_depot - j_from_source;
        self.revenue += other.revenue;
        self.nodes.append(&mut other.nodes);
    }
}
