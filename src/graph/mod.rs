pub mod directed;
pub mod generators;
pub mod serialize;
pub mod traits;

pub use directed::{DirectedGraph, NodeId};
pub use traits::Graph;
