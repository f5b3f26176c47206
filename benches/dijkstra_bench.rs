use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathgraph::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use pathgraph::find_shortest_path;
use pathgraph::graph::generators::{generate_grid, generate_random};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn bench_full_search_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra::full_random");
    for &size in &[1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = generate_random(size, 2.0, &mut rng).unwrap();
        let source = match graph.node_id(&0) {
            Some(id) => id,
            None => continue,
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
                black_box(result.reached_count())
            })
        });
    }
    group.finish();
}

fn bench_point_query_grid(c: &mut Criterion) {
    let side = 100;
    // vertical walls with a gap that alternates between top and bottom
    let graph = generate_grid(side, side, |x, y| {
        let gap = if (x / 10) % 2 == 0 { side - 1 } else { 0 };
        if x % 10 == 5 && y != gap {
            None
        } else {
            Some(1.0)
        }
    })
    .unwrap();
    let end = (side - 1, side - 1);
    c.bench_function("dijkstra::grid_corner_to_corner_100x100", |b| {
        b.iter(|| black_box(find_shortest_path(&graph, &(0, 0), &end).len()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_full_search_random, bench_point_query_grid
}
criterion_main!(benches);
