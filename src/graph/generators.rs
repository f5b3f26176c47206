use crate::graph::DirectedGraph;
use crate::Result;
use rand::Rng;

/// Grid cell coordinate `(x, y)`
pub type Cell = (usize, usize);

/// Generates a 4-connected `width * height` grid.
///
/// `cost(x, y)` is the price of stepping onto a cell, or `None` for a wall.
/// Walls get no node; every open cell gets an edge to each open orthogonal
/// neighbor weighted by that neighbor's cost. Fails only if an allocation
/// fails.
pub fn generate_grid<F>(width: usize, height: usize, cost: F) -> Result<DirectedGraph<Cell>>
where
    F: Fn(usize, usize) -> Option<f64>,
{
    let mut graph = DirectedGraph::with_capacity(width * height);
    let mut ids = vec![None; width * height];

    for y in 0..height {
        for x in 0..width {
            if cost(x, y).is_some() {
                ids[y * width + x] = Some(graph.add_node((x, y))?);
            }
        }
    }

    // Connect neighbors (4-connectivity)
    let directions: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
    for y in 0..height {
        for x in 0..width {
            let from = match ids[y * width + x] {
                Some(id) => id,
                None => continue,
            };
            for (dx, dy) in directions {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if let (Some(to), Some(weight)) = (ids[ny * width + nx], cost(nx, ny)) {
                    graph.add_edge_by_id(from, to, weight)?;
                }
            }
        }
    }

    Ok(graph)
}

/// Generates a random directed graph on nodes `0..num_nodes` with roughly
/// `edge_factor * num_nodes` edges, weights in `1.0..100.0`, no self-loops.
pub fn generate_random<R: Rng>(num_nodes: usize, edge_factor: f64, rng: &mut R) -> Result<DirectedGraph<usize>> {
    let mut graph = DirectedGraph::with_capacity(num_nodes);
    let ids = (0..num_nodes)
        .map(|n| graph.add_node(n))
        .collect::<Result<Vec<_>>>()?;
    if ids.len() < 2 {
        return Ok(graph);
    }

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * num_nodes as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..ids.len());
        let v = rng.gen_range(0..ids.len());
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge_by_id(ids[u], ids[v], weight)?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn grid_skips_walls() {
        // column 1 is a wall except at the bottom row
        let graph = generate_grid(3, 3, |x, y| if x == 1 && y < 2 { None } else { Some(1.0) }).unwrap();
        assert_eq!(graph.len(), 7);
        assert!(!graph.contains(&(1, 0)));
        assert_eq!(graph.outdegree(&(0, 0)), 1);
        assert_eq!(graph.get_edge_weight(&(1, 2), &(2, 2)), Some(1.0));
    }

    #[test]
    fn open_grid_has_every_cell_and_edge() {
        let graph = generate_grid(4, 4, |_, _| Some(2.0)).unwrap();
        assert_eq!(graph.node_count(), 16);
        // 3 horizontal and 3 vertical neighbor pairs per row/column, both ways
        assert_eq!(graph.edge_count(), 48);
        assert_eq!(graph.outdegree(&(1, 1)), 4);
        assert_eq!(graph.outdegree(&(0, 0)), 2);
    }

    #[test]
    fn random_graph_is_seeded() {
        let a = generate_random(50, 3.0, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_random(50, 3.0, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.node_count(), 50);
        assert_eq!(a.edge_count(), b.edge_count());
    }
}
