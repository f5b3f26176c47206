use num_traits::Float;

use crate::data_structures::HashTable;
use crate::graph::{Graph, NodeId};
use crate::Result;

/// A single shortest path: node ids from source to target inclusive, and
/// the sum of the edge weights along it
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<W> {
    pub nodes: Vec<NodeId>,
    pub cost: W,
}

/// Result of a shortest path algorithm execution
///
/// Only nodes the search reached have entries. When the search stopped early
/// at a target, distances of nodes it had not yet settled are upper bounds.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W> {
    /// Source node
    pub source: NodeId,

    /// Target the search stopped at, if it was given one and settled it
    pub settled_target: Option<NodeId>,

    /// Best known distance from the source
    pub(crate) distances: HashTable<NodeId, W>,

    /// Predecessor in the shortest path tree; the source maps to `None`
    pub(crate) predecessors: HashTable<NodeId, Option<NodeId>>,
}

impl<W> ShortestPathResult<W>
where
    W: Float,
{
    pub fn distance(&self, node: NodeId) -> Option<W> {
        self.distances.get(&node).copied()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied().flatten()
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.predecessors.contains_key(&node)
    }

    /// Number of nodes the search reached, source included
    pub fn reached_count(&self) -> usize {
        self.predecessors.len()
    }

    /// Walks predecessors back from `target` until a node with none.
    ///
    /// Returns `[source]` when `target` is the source and an empty vector when
    /// `target` was never reached.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        if !self.is_reached(target) {
            return path;
        }

        let mut current = Some(target);
        while let Some(node) = current {
            path.push(node);
            // Safety check - a chain longer than the tree is a cycle
            if path.len() > self.predecessors.len() {
                log::warn!("Cycle detected in path reconstruction at {:?}", node);
                return Vec::new();
            }
            current = self.predecessor(node);
        }

        path.reverse();
        path
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float,
    G: Graph<W>,
{
    /// Compute shortest paths from a source node to every reachable node
    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>>;

    /// Compute the shortest path from `source` to `target`, stopping as soon
    /// as `target` is settled. `Ok(None)` means unreachable.
    fn shortest_path(&self, graph: &G, source: NodeId, target: NodeId) -> Result<Option<ShortestPath<W>>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<W>, target: NodeId) -> Option<ShortestPath<W>> {
        let cost = result.distance(target)?;
        let nodes = result.path_to(target);
        if nodes.is_empty() {
            return None;
        }
        Some(ShortestPath { nodes, cost })
    }
}
