pub mod alpha_tuner;
pub mod bench;
pub mod bra;
pub mod config;
pub mod domain;
pub mod error;
pub mod heuristic;
pub mod mapper;
pub mod metaheuristic;
pub mod pjs;
pub mod savings;
pub mod scratch;

pub use domain::{Edge, Mapping, Node, NodeId, PjsSolution, Problem, Role, Route, Solution};
pub use error::ParseError;
