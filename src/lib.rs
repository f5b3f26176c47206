//! pathgraph - identity-keyed directed weighted graphs and Dijkstra shortest paths
//!
//! The crate is built from three layers:
//!
//! - [`data_structures`]: a chained [`HashTable`] and a binary-heap [`PriorityQueue`]
//! - [`graph`]: [`DirectedGraph`], a directed weighted graph whose nodes are identified
//!   by their payload's `Eq + Hash`, with a text adjacency format for string graphs
//! - [`algorithm`]: [`Dijkstra`], single-source shortest paths over any [`graph::Graph`]
//!
//! Edge weights are expected to be non-negative; the search reports
//! [`Error::NegativeWeight`] instead of returning a wrong path.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, find_shortest_path, shortest_path_cost, ShortestPath,
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{HashTable, HeapOrder, PriorityQueue};
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, NodeId};

use std::collections::TryReserveError;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Node not found in graph")]
    NodeNotFound,

    #[error("Priority is NaN")]
    InvalidPriority,

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Node name {0:?} cannot be written: names must be non-empty and contain no whitespace")]
    InvalidName(String),

    #[error("Allocation failed")]
    AllocationFailed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::AllocationFailed
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
