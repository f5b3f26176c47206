use log::debug;
use num_traits::Float;

use crate::algorithm::{ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{HashTable, HeapOrder, PriorityQueue};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Edge weights must be non-negative. A negative weight met during the
/// search fails it with [`Error::NegativeWeight`]; a NaN weight fails it with
/// [`Error::InvalidPriority`]. No path is returned in either case.
///
/// The open set has no decrease-key: an improved distance is pushed as a new
/// entry and the outdated one is skipped when it surfaces. With hashed
/// identity lookups a search costs O((V + E) log V).
///
/// `Dijkstra` holds no state; every call builds its own [`SearchState`], so
/// any number of searches may run at once over a shared graph.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    fn search<W, G>(&self, graph: &G, source: NodeId, target: Option<NodeId>) -> Result<ShortestPathResult<W>>
    where
        W: Float,
        G: Graph<W>,
    {
        if !graph.has_node(source) || target.map_or(false, |t| !graph.has_node(t)) {
            return Err(Error::NodeNotFound);
        }

        let mut state = SearchState::new(source)?;
        let mut settled = 0usize;
        let mut settled_target = None;

        while let Some((node, distance)) = state.open.dequeue() {
            if state.is_stale(node, distance) {
                continue;
            }
            settled += 1;

            if Some(node) == target {
                settled_target = Some(node);
                break;
            }

            for (neighbor, weight) in graph.outgoing_edges(node) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
                }
                state.relax(node, distance + weight, neighbor)?;
            }
        }

        debug!(
            "dijkstra from {:?}: settled {} nodes, reached {}, {} entries left in open set",
            source,
            settled,
            state.predecessors.len(),
            state.open.len()
        );

        Ok(ShortestPathResult {
            source,
            settled_target,
            distances: state.distances,
            predecessors: state.predecessors,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>> {
        self.search(graph, source, None)
    }

    fn shortest_path(&self, graph: &G, source: NodeId, target: NodeId) -> Result<Option<ShortestPath<W>>> {
        let result = self.search(graph, source, Some(target))?;
        if result.settled_target.is_none() {
            return Ok(None);
        }
        Ok(<Self as ShortestPathAlgorithm<W, G>>::get_path(self, &result, target))
    }
}

/// Everything one search mutates
struct SearchState<W>
where
    W: Float,
{
    /// Discovered but not yet settled nodes by tentative distance
    open: PriorityQueue<NodeId, W>,
    predecessors: HashTable<NodeId, Option<NodeId>>,
    distances: HashTable<NodeId, W>,
}

impl<W> SearchState<W>
where
    W: Float,
{
    fn new(source: NodeId) -> Result<Self> {
        let mut state = SearchState {
            open: PriorityQueue::new(HeapOrder::Min),
            predecessors: HashTable::new(),
            distances: HashTable::new(),
        };
        state.open.enqueue(W::zero(), source)?;
        state.predecessors.set(source, None)?;
        state.distances.set(source, W::zero())?;
        Ok(state)
    }

    /// An entry is stale when a strictly shorter distance was recorded after
    /// it was queued
    fn is_stale(&self, node: NodeId, distance: W) -> bool {
        self.distances.get(&node).map_or(false, |best| distance > *best)
    }

    /// Records `candidate` for `neighbor` if it has never been reached or the
    /// candidate strictly improves its distance. Predecessors and distances
    /// are always written together, so one lookup covers both conditions.
    fn relax(&mut self, from: NodeId, candidate: W, neighbor: NodeId) -> Result<()> {
        let improves = match self.distances.get(&neighbor) {
            Some(best) => candidate < *best,
            None => true,
        };
        if !improves {
            return Ok(());
        }

        self.open.enqueue(candidate, neighbor)?;
        self.predecessors.set(neighbor, Some(from))?;
        self.distances.set(neighbor, candidate)?;
        Ok(())
    }
}
