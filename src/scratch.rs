use crate::domain::NodeId;

/// Ephemeral per-customer routing state, kept in a side array indexed by
/// node id rather than mutated in place on `Node` — per the design note
/// in the spec about replacing a cyclic node/route graph with indices and
/// parallel scratch tables. A fresh `Scratch` is built at the top of every
/// Mapper/PJS pass, so there's no carry-over state to clear between passes.
#[derive(Debug, Clone, Copy)]
pub struct NodeState {
    pub from_source: f64,
    pub to_depot: f64,
    pub link_source: bool,
    pub link_depot: bool,
    pub route: Option<usize>,
}

impl Default for NodeState {
    fn default() -> Self {
        NodeState {
            from_source: 0.0,
            to_depot: 0.0,
            link_source: false,
            link_depot: false,
            route: None,
        }
    }
}

/// Scratch table sized to the problem's total node count, indexed by raw
/// node id. Only customer slots are ever touched; source and depot slots
/// stay at their default.
#[derive(Debug, Clone)]
pub struct Scratch {
    state: Vec<NodeState>,
}

impl Scratch {
    pub fn new(n_total_nodes: usize) -> Self {
        Scratch {
            state: vec![NodeState::default(); n_total_nodes],
        }
    }

    pub fn get(&self, id: NodeId) -> &NodeState {
        &self.state[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut NodeState {
        &mut self.state[id]
    }
}
