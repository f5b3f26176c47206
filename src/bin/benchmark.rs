use std::time::{Duration, Instant};

use log::info;
use pathgraph::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use pathgraph::graph::generators::{generate_grid, generate_random};
use pathgraph::graph::{DirectedGraph, Graph, NodeId};
use rand::Rng;
use rayon::prelude::*;

// Usage: benchmark [SIZES] [QUERIES]
//   SIZES    comma-separated node counts (default 1000,10000,50000,100000)
//   QUERIES  independent point-to-point queries per graph (default 64)
fn parse_args() -> (Vec<usize>, usize) {
    let mut args = std::env::args().skip(1);
    let sizes = args
        .next()
        .map(|s| s.split(',').filter_map(|n| n.trim().parse().ok()).collect::<Vec<_>>())
        .filter(|sizes| !sizes.is_empty())
        .unwrap_or_else(|| vec![1_000, 10_000, 50_000, 100_000]);
    let queries = args.next().and_then(|q| q.parse().ok()).unwrap_or(64);
    (sizes, queries)
}

// Function to benchmark a full single-source search on a graph
fn benchmark_full<N>(name: &str, graph: &DirectedGraph<N>, source: NodeId) -> Duration
where
    N: Eq + std::hash::Hash + Clone,
{
    println!("Running Dijkstra on {} graph with {} nodes...", name, graph.node_count());

    let start = Instant::now();
    let result = match Dijkstra::new().compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(e) => {
            println!("  - search failed: {}", e);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    println!("  - Reached {} nodes in {:?}", result.reached_count(), duration);
    duration
}

// Runs independent queries sequentially and then in parallel over the same
// shared graph; both runs must agree
fn benchmark_queries<N>(graph: &DirectedGraph<N>, pairs: &[(NodeId, NodeId)]) -> (Duration, Duration)
where
    N: Eq + std::hash::Hash + Clone + Send + Sync,
{
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let sequential: Vec<Option<f64>> = pairs
        .iter()
        .map(|&(s, t)| dijkstra.shortest_path(graph, s, t).ok().flatten().map(|p| p.cost))
        .collect();
    let sequential_time = start.elapsed();

    let start = Instant::now();
    let parallel: Vec<Option<f64>> = pairs
        .par_iter()
        .map(|&(s, t)| dijkstra.shortest_path(graph, s, t).ok().flatten().map(|p| p.cost))
        .collect();
    let parallel_time = start.elapsed();

    if sequential != parallel {
        println!("  ! sequential and parallel results differ");
    }
    let found = sequential.iter().filter(|c| c.is_some()).count();
    println!(
        "  - {} queries ({} with a path): sequential {:?}, parallel {:?}",
        pairs.len(),
        found,
        sequential_time,
        parallel_time
    );
    (sequential_time, parallel_time)
}

fn random_pairs<N, R: Rng>(graph: &DirectedGraph<N>, count: usize, rng: &mut R) -> Vec<(NodeId, NodeId)>
where
    N: Eq + std::hash::Hash + Clone,
{
    let ids: Vec<NodeId> = graph.node_ids().map(|(id, _)| id).collect();
    if ids.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| (ids[rng.gen_range(0..ids.len())], ids[rng.gen_range(0..ids.len())]))
        .collect()
}

fn main() -> pathgraph::Result<()> {
    env_logger::init();
    let (graph_sizes, queries) = parse_args();

    // Edge factor: average number of edges per node
    let edge_factor = 2.0;
    let mut rng = rand::thread_rng();

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random and grid graphs");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    // Results storage
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let random = generate_random(size, edge_factor, &mut rng)?;
        info!("random graph: {} nodes, {} edges", random.node_count(), random.edge_count());

        let side = (size as f64).sqrt().ceil() as usize;
        println!("Generating {}x{} grid...", side, side);
        // every 7th cell is a wall, the rest cost 1..=3
        let grid = generate_grid(side, side, |x, y| {
            let cell = y * side + x;
            if cell % 7 == 3 {
                None
            } else {
                Some(1.0 + (cell % 3) as f64)
            }
        })?;

        let random_time = match random.node_id(&0) {
            Some(source) => benchmark_full("random", &random, source),
            None => Duration::ZERO,
        };
        let grid_time = match grid.node_id(&(0, 0)) {
            Some(source) => benchmark_full("grid", &grid, source),
            None => Duration::ZERO,
        };

        let pairs = random_pairs(&grid, queries, &mut rng);
        let (sequential, parallel) = benchmark_queries(&grid, &pairs);

        results.push((size, random_time, grid_time, sequential, parallel));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<15} | {:<15}",
        "Nodes", "Random (ms)", "Grid (ms)", "Queries seq (ms)", "Queries par (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, random_time, grid_time, sequential, parallel) in &results {
        println!(
            "{:<10} | {:<12} | {:<12} | {:<15} | {:<15}",
            size,
            random_time.as_millis(),
            grid_time.as_millis(),
            sequential.as_millis(),
            parallel.as_millis()
        );
    }
    Ok(())
}
