/// Dense integer id assigned at parse time: sources first, then customers,
/// then the depot last, regardless of the node records' order in the
/// instance file — see `Problem::from_multi_source_reader`.
pub type NodeId = usize;

/// Exactly one of these describes a given `Node`; the flags in the original
/// source were mutually exclusive booleans, kept here as a proper enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Source { n_vehicles: usize },
    Customer,
    Depot,
}

impl Role {
    pub fn is_source(&self) -> bool {
        matches!(self, Role::Source { .. })
    }

    pub fn is_depot(&self) -> bool {
        matches!(self, Role::Depot)
    }

    pub fn is_customer(&self) -> bool {
        matches!(self, Role::Customer)
    }

    pub fn n_vehicles(&self) -> Option<usize> {
        match self {
            Role::Source { n_vehicles } => Some(*n_vehicles),
            _ => None,
        }
    }
}

/// Immutable node identity. Lives for the lifetime of the owning `Problem`;
/// never mutated once built. Ephemeral routing state (`from_source`,
/// `link_*`, `route`) is never kept here — it lives in `NodeScratch`,
/// reset at the top of every heuristic pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub revenue: f64,
    pub role: Role,
}

impl Node {
    pub fn is_source(&self) -> bool {
        self.role.is_source()
    }

    pub fn is_depot(&self) -> bool {
        self.role.is_depot()
    }

    pub fn is_customer(&self) -> bool {
        self.role.is_customer()
    }
}
