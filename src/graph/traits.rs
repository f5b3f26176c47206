use num_traits::Float;

use crate::graph::directed::NodeId;

/// Trait representing a weighted directed graph addressed by [`NodeId`]
///
/// This is the view the shortest-path engine needs: it never looks at node
/// payloads, only at ids and outgoing edges.
pub trait Graph<W>
where
    W: Float,
{
    /// Returns the number of live nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a node.
    /// Empty if the node does not exist.
    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: NodeId) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edge_weight(from, to).is_some()
    }
}
