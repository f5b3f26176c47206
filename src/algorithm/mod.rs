pub mod dijkstra;
pub mod traits;

pub use traits::{ShortestPath, ShortestPathAlgorithm, ShortestPathResult};

use std::borrow::Borrow;
use std::hash::Hash;

use log::debug;
use num_traits::Float;

use crate::graph::DirectedGraph;
use dijkstra::Dijkstra;

/// Shortest path between two payloads, as references into `graph`.
///
/// Returns `[start]` when `start == end` and an empty vector when `end` is
/// unreachable, when either endpoint is not in the graph, or when the search
/// fails (negative or NaN weight). Never returns a partial path.
pub fn find_shortest_path<'g, N, W, Q>(graph: &'g DirectedGraph<N, W>, start: &Q, end: &Q) -> Vec<&'g N>
where
    N: Eq + Hash + Clone + Borrow<Q>,
    Q: ?Sized + Hash + Eq,
    W: Float,
{
    let (source, target) = match (graph.node_id(start), graph.node_id(end)) {
        (Some(source), Some(target)) => (source, target),
        _ => {
            debug!("find_shortest_path: endpoint not in graph");
            return Vec::new();
        }
    };

    match Dijkstra::new().shortest_path(graph, source, target) {
        Ok(Some(path)) => path.nodes.into_iter().filter_map(|id| graph.payload(id)).collect(),
        Ok(None) => Vec::new(),
        Err(e) => {
            debug!("find_shortest_path: search failed: {}", e);
            Vec::new()
        }
    }
}

/// Total weight of the shortest path between two payloads, `None` when
/// there is no path
pub fn shortest_path_cost<N, W, Q>(graph: &DirectedGraph<N, W>, start: &Q, end: &Q) -> Option<W>
where
    N: Eq + Hash + Clone + Borrow<Q>,
    Q: ?Sized + Hash + Eq,
    W: Float,
{
    let source = graph.node_id(start)?;
    let target = graph.node_id(end)?;
    match Dijkstra::new().shortest_path(graph, source, target) {
        Ok(path) => path.map(|path| path.cost),
        Err(e) => {
            debug!("shortest_path_cost: search failed: {}", e);
            None
        }
    }
}
