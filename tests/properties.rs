use std::collections::HashMap;
use std::io::Cursor;

use pathgraph::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use pathgraph::graph::Graph;
use pathgraph::{DirectedGraph, Error, HashTable, HeapOrder, PriorityQueue};
use proptest::prelude::*;

// Plain Bellman-Ford over an edge list; distances indexed by node number
fn bellman_ford(nodes: usize, edges: &[(usize, usize, f64)], source: usize) -> Vec<Option<f64>> {
    let mut dist = vec![None; nodes];
    dist[source] = Some(0.0);
    for _ in 0..nodes {
        let mut changed = false;
        for &(u, v, w) in edges {
            if let Some(du) = dist[u] {
                let candidate = du + w;
                if dist[v].map_or(true, |dv| candidate < dv) {
                    dist[v] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn edge_list() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (2usize..16).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n, 0u16..50), 0..60)
            .prop_map(|raw| raw.into_iter().map(|(u, v, w)| (u, v, w as f64)).collect::<Vec<_>>());
        (Just(n), edges)
    })
}

// Mostly plain names, sometimes empty or carrying a space or tab
fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-z][a-z0-9_]{0,3}",
        1 => Just(String::new()),
        1 => "[a-z]{1,3}[ \t][a-z]{1,3}",
    ]
}

proptest! {
    #[test]
    fn prop_dequeue_is_monotone(priorities in proptest::collection::vec(-1e6f64..1e6, 0..200), max in any::<bool>()) {
        let order = if max { HeapOrder::Max } else { HeapOrder::Min };
        let mut queue = PriorityQueue::new(order);
        for (i, p) in priorities.iter().enumerate() {
            queue.enqueue(*p, i).unwrap();
        }
        prop_assert_eq!(queue.len(), priorities.len());

        let mut previous: Option<f64> = None;
        let mut seen = vec![false; priorities.len()];
        while let Some((i, p)) = queue.dequeue() {
            prop_assert_eq!(p, priorities[i]);
            prop_assert!(!seen[i]);
            seen[i] = true;
            if let Some(prev) = previous {
                match order {
                    HeapOrder::Min => { prop_assert!(prev <= p); }
                    HeapOrder::Max => { prop_assert!(prev >= p); }
                }
            }
            previous = Some(p);
        }
        prop_assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn prop_hash_table_matches_model(ops in proptest::collection::vec((0u8..3, 0u16..300, any::<u32>()), 1..400)) {
        let mut table: HashTable<u16, u32> = HashTable::with_buckets(1);
        let mut model: HashMap<u16, u32> = HashMap::new();

        for (op, key, value) in ops {
            match op {
                0 => { prop_assert_eq!(table.set(key, value).unwrap(), model.insert(key, value)); }
                1 => { prop_assert_eq!(table.remove(&key), model.remove(&key)); }
                _ => { prop_assert_eq!(table.get(&key), model.get(&key)); }
            }
            prop_assert_eq!(table.len(), model.len());
            prop_assert!(table.load_factor() <= 0.7);
        }
        for (key, value) in &model {
            prop_assert_eq!(table.get(key), Some(value));
        }
    }

    #[test]
    fn prop_dijkstra_matches_bellman_ford((n, edges) in edge_list(), source_pick in any::<usize>()) {
        let mut graph: DirectedGraph<usize> = DirectedGraph::new();
        for i in 0..n {
            graph.add_node(i).unwrap();
        }
        // the graph keeps the last weight written for a repeated pair
        let mut last: HashMap<(usize, usize), f64> = HashMap::new();
        for &(u, v, w) in &edges {
            graph.add_edge(&u, &v, w).unwrap();
            last.insert((u, v), w);
        }
        let effective: Vec<_> = last.into_iter().map(|((u, v), w)| (u, v, w)).collect();

        let source = source_pick % n;
        let expected = bellman_ford(n, &effective, source);
        let result = Dijkstra::new()
            .compute_shortest_paths(&graph, graph.node_id(&source).unwrap())
            .unwrap();

        for (node, want) in expected.iter().enumerate() {
            let id = graph.node_id(&node).unwrap();
            prop_assert_eq!(result.distance(id), *want);

            let path = result.path_to(id);
            match want {
                Some(cost) => {
                    prop_assert_eq!(path.first().copied(), graph.node_id(&source));
                    prop_assert_eq!(path.last().copied(), Some(id));
                    let walked: f64 = path
                        .windows(2)
                        .map(|pair| graph.edge_weight(pair[0], pair[1]).unwrap())
                        .sum();
                    prop_assert_eq!(walked, *cost);
                }
                None => { prop_assert!(path.is_empty()); }
            }
        }
    }

    #[test]
    fn prop_serialize_round_trip(edges in proptest::collection::vec((name(), name(), 0.0f64..1e3), 0..40)) {
        let mut graph: DirectedGraph<String> = DirectedGraph::new();
        for (u, v, w) in &edges {
            graph.add_node(u.clone()).unwrap();
            graph.add_node(v.clone()).unwrap();
            graph.add_edge(u.as_str(), v.as_str(), *w).unwrap();
        }

        let mut buffer = Vec::new();
        let written = graph.serialize(&mut buffer);

        let unwritable = graph.nodes().any(|n| n.is_empty() || n.chars().any(char::is_whitespace));
        if unwritable {
            prop_assert!(matches!(written, Err(Error::InvalidName(_))));
            prop_assert!(buffer.is_empty());
            return Ok(());
        }
        prop_assert!(written.is_ok());

        let restored: DirectedGraph<String> = DirectedGraph::deserialize(Cursor::new(buffer)).unwrap();

        prop_assert_eq!(restored.node_count(), graph.node_count());
        prop_assert_eq!(restored.edge_count(), graph.edge_count());
        for name in graph.nodes() {
            prop_assert!(restored.contains(name.as_str()));
            for (neighbor, weight) in graph.neighbors(name.as_str()) {
                prop_assert_eq!(restored.get_edge_weight(name.as_str(), neighbor.as_str()), Some(weight));
            }
        }
    }
}
