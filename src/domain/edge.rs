use std::collections::HashMap;

use super::node::NodeId;

/// Directed candidate link between two customers. `Problem` builds one of
/// these for every ordered pair of distinct customer ids (never a source
/// or the depot), so a merge can be attempted in either direction.
#[derive(Debug, Clone)]
pub struct Edge {
    pub inode: NodeId,
    pub jnode: NodeId,
    pub cost: f64,
    /// Populated by `set_savings`, keyed by source id.
    pub savings: HashMap<NodeId, f64>,
}

impl Edge {
    pub fn new(inode: NodeId, jnode: NodeId, cost: f64) -> Self {
        Edge {
            inode,
            jnode,
            cost,
            savings: HashMap::new(),
        }
    }

    pub fn savings_for(&self, source_id: NodeId) -> f64 {
        *self.savings.get(&source_id).unwrap_or(&0.0)
    }
}
