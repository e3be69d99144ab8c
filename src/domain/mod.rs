pub mod edge;
pub mod node;
pub mod problem;
pub mod route;
pub mod solution;

pub use edge::Edge;
pub use node::{Node, NodeId, Role};
pub use problem::Problem;
pub use route::Route;
pub use solution::{Mapping, PjsSolution, Solution};
