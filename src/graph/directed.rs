use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;

use num_traits::Float;
use slotmap::SlotMap;

use crate::data_structures::hash_table::{HashTable, DEFAULT_BUCKETS, MAX_LOAD_PERCENT};
use crate::graph::traits::Graph;
use crate::{Error, Result};

slotmap::new_key_type! {
    /// Stable handle to a node. Once the node is removed the id is stale and
    /// every lookup through it reports "not found", even if the slot is reused.
    pub struct NodeId;
}

/// Hook receiving each payload as its node leaves the graph
pub type Destructor<N> = Box<dyn FnMut(N) + Send + Sync>;

#[derive(Debug, Clone, Copy)]
struct Edge<W> {
    target: NodeId,
    weight: W,
}

struct Node<N, W> {
    payload: N,
    edges: Vec<Edge<W>>,
}

/// A directed weighted graph whose nodes are identified by their payload.
///
/// Two payloads that compare equal are the same node: adding an equal
/// payload again is a no-op. Each ordered `(source, destination)` pair has at
/// most one edge. Nodes live in a generational arena and edges refer to
/// their destination by [`NodeId`], so removing a node can sweep every edge
/// pointing at it.
///
/// Identity lookups go through a hashed index and are O(1) expected. Edge
/// lookups scan the source's outgoing list, O(out-degree).
pub struct DirectedGraph<N, W = f64> {
    nodes: SlotMap<NodeId, Node<N, W>>,
    index: HashTable<N, NodeId>,
    destructor: Option<Destructor<N>>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: Float,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: SlotMap::with_key(),
            index: HashTable::new(),
            destructor: None,
        }
    }

    /// Creates an empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        let buckets = (nodes * 100 / MAX_LOAD_PERCENT + 1).max(DEFAULT_BUCKETS);
        DirectedGraph {
            nodes: SlotMap::with_capacity_and_key(nodes),
            index: HashTable::with_buckets(buckets),
            destructor: None,
        }
    }

    /// Creates a graph that hands every payload to `destroy` when its node is
    /// removed or the graph is dropped. Without one, payloads are dropped.
    pub fn with_destructor<F>(destroy: F) -> Self
    where
        F: FnMut(N) + Send + Sync + 'static,
    {
        let mut graph = Self::new();
        graph.destructor = Some(Box::new(destroy));
        graph
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_id<Q>(&self, payload: &Q) -> Option<NodeId>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.get(payload).copied()
    }

    pub fn payload(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id).map(|node| &node.payload)
    }

    pub fn contains<Q>(&self, payload: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains_key(payload)
    }

    /// Adds a node for `payload`, or returns the id of the node already
    /// holding an equal payload (in which case `payload` is dropped).
    pub fn add_node(&mut self, payload: N) -> Result<NodeId> {
        if let Some(id) = self.node_id(&payload) {
            return Ok(id);
        }

        let key = payload.clone();
        let id = self.nodes.insert(Node {
            payload,
            edges: Vec::new(),
        });
        if let Err(e) = self.index.set(key, id) {
            self.nodes.remove(id);
            return Err(e);
        }
        Ok(id)
    }

    /// Removes the node holding `payload` along with its outgoing edges and
    /// every edge from other nodes that targets it.
    ///
    /// Costs O(V + E): all adjacency lists are swept.
    pub fn remove_node<Q>(&mut self, payload: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.node_id(payload) {
            Some(id) => self.remove_node_by_id(id),
            None => false,
        }
    }

    pub fn remove_node_by_id(&mut self, id: NodeId) -> bool {
        let node = match self.nodes.remove(id) {
            Some(node) => node,
            None => return false,
        };
        self.index.remove(&node.payload);

        for other in self.nodes.values_mut() {
            other.edges.retain(|edge| edge.target != id);
        }

        match self.destructor.as_mut() {
            Some(destroy) => destroy(node.payload),
            None => drop(node),
        }
        true
    }

    /// Adds an edge, or overwrites the weight of the existing `src -> dst`
    /// edge. Fails with [`Error::NodeNotFound`] if either endpoint is missing.
    pub fn add_edge<Q>(&mut self, src: &Q, dst: &Q, weight: W) -> Result<()>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match (self.node_id(src), self.node_id(dst)) {
            (Some(from), Some(to)) => self.add_edge_by_id(from, to, weight),
            _ => Err(Error::NodeNotFound),
        }
    }

    pub fn add_edge_by_id(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        if !self.nodes.contains_key(to) {
            return Err(Error::NodeNotFound);
        }
        let node = self.nodes.get_mut(from).ok_or(Error::NodeNotFound)?;

        if let Some(edge) = node.edges.iter_mut().find(|edge| edge.target == to) {
            edge.weight = weight;
            return Ok(());
        }
        node.edges.try_reserve(1)?;
        node.edges.push(Edge { target: to, weight });
        Ok(())
    }

    pub fn remove_edge<Q>(&mut self, src: &Q, dst: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match (self.node_id(src), self.node_id(dst)) {
            (Some(from), Some(to)) => self.remove_edge_by_id(from, to),
            _ => false,
        }
    }

    pub fn remove_edge_by_id(&mut self, from: NodeId, to: NodeId) -> bool {
        match self.nodes.get_mut(from) {
            Some(node) => {
                let before = node.edges.len();
                node.edges.retain(|edge| edge.target != to);
                node.edges.len() < before
            }
            None => false,
        }
    }

    /// Weight of the `src -> dst` edge; `None` if the edge or either endpoint
    /// is missing
    pub fn get_edge_weight<Q>(&self, src: &Q, dst: &Q) -> Option<W>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let from = self.node_id(src)?;
        let to = self.node_id(dst)?;
        self.edge_weight(from, to)
    }

    /// Number of outgoing edges; 0 for a missing node
    pub fn outdegree<Q>(&self, payload: &Q) -> usize
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.node_id(payload)
            .and_then(|id| self.nodes.get(id))
            .map_or(0, |node| node.edges.len())
    }

    /// Number of incoming edges; 0 for a missing node.
    ///
    /// No reverse adjacency is kept, so this scans every edge: O(V + E).
    pub fn indegree<Q>(&self, payload: &Q) -> usize
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = match self.node_id(payload) {
            Some(id) => id,
            None => return 0,
        };
        self.nodes
            .values()
            .flat_map(|node| node.edges.iter())
            .filter(|edge| edge.target == id)
            .count()
    }

    /// Iterates over node payloads. Order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.values().map(|node| &node.payload)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes.iter().map(|(id, node)| (id, &node.payload))
    }

    /// Iterates over `(neighbor, weight)` for each outgoing edge of the node
    /// holding `payload`; empty if there is no such node.
    pub fn neighbors<Q>(&self, payload: &Q) -> impl Iterator<Item = (&N, W)> + '_
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let edges: &[Edge<W>] = match self.node_id(payload).and_then(|id| self.nodes.get(id)) {
            Some(node) => &node.edges,
            None => &[],
        };
        edges.iter().filter_map(move |edge| {
            self.nodes
                .get(edge.target)
                .map(|target| (&target.payload, edge.weight))
        })
    }

    pub fn for_each_node<F>(&self, mut visit: F)
    where
        F: FnMut(&N),
    {
        for payload in self.nodes() {
            visit(payload);
        }
    }

    pub fn for_each_neighbor<Q, F>(&self, payload: &Q, mut visit: F)
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnMut(&N, W),
    {
        for (neighbor, weight) in self.neighbors(payload) {
            visit(neighbor, weight);
        }
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<W> for DirectedGraph<N, W>
where
    W: Float,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.edges.len()).sum()
    }

    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        match self.nodes.get(node) {
            Some(node) => Box::new(node.edges.iter().map(|edge| (edge.target, edge.weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }
}

impl<N, W> Drop for DirectedGraph<N, W> {
    fn drop(&mut self) {
        if let Some(destroy) = self.destructor.as_mut() {
            for (_, node) in self.nodes.drain() {
                destroy(node.payload);
            }
        }
    }
}

impl<N: Debug, W: Debug + Copy> Debug for DirectedGraph<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.nodes.values().map(|node| {
                let edges: Vec<(&N, W)> = node
                    .edges
                    .iter()
                    .filter_map(|edge| {
                        self.nodes
                            .get(edge.target)
                            .map(|target| (&target.payload, edge.weight))
                    })
                    .collect();
                (&node.payload, edges)
            }))
            .finish()
    }
}
