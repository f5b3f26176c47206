use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use log::info;
use pathgraph::graph::Graph;
use pathgraph::{Dijkstra, DirectedGraph, ShortestPathAlgorithm};

// Usage: graph_path <ADJACENCY_FILE> <START> <END>
fn run(path: &str, start: &str, end: &str) -> pathgraph::Result<bool> {
    let reader = BufReader::new(File::open(path)?);
    let graph: DirectedGraph<String> = DirectedGraph::deserialize(reader)?;
    info!("loaded {}: {} nodes, {} edges", path, graph.node_count(), graph.edge_count());

    let (source, target) = match (graph.node_id(start), graph.node_id(end)) {
        (Some(source), Some(target)) => (source, target),
        (None, _) => return missing(start, path),
        (_, None) => return missing(end, path),
    };

    let found = match Dijkstra::new().shortest_path(&graph, source, target)? {
        Some(found) => found,
        None => {
            println!("No path from {} to {}", start, end);
            return Ok(false);
        }
    };

    let names: Vec<&str> = found
        .nodes
        .iter()
        .filter_map(|&id| graph.payload(id).map(String::as_str))
        .collect();
    println!("{}", names.join(" -> "));
    println!("cost: {}", found.cost);
    Ok(true)
}

fn missing(name: &str, path: &str) -> pathgraph::Result<bool> {
    eprintln!("Node '{}' is not in {}", name, path);
    Ok(false)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        let program = args.first().map(String::as_str).unwrap_or("graph_path");
        eprintln!("Usage: {} <ADJACENCY_FILE> <START> <END>", program);
        return ExitCode::from(2);
    }

    match run(&args[1], &args[2], &args[3]) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
