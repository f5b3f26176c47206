use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pathgraph::{HashTable, HeapOrder, PriorityQueue};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_table_insert_100k(c: &mut Criterion) {
    c.bench_function("table::insert_fresh_100k", |b| {
        b.iter_batched(
            HashTable::<String, u64>::new,
            |mut t| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    t.set(key(x), i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_table_get_hit_100k(c: &mut Criterion) {
    let keys: Vec<String> = lcg(7).take(100_000).map(key).collect();
    let mut table = HashTable::new();
    for (i, k) in keys.iter().enumerate() {
        table.set(k.clone(), i as u64).unwrap();
    }
    c.bench_function("table::get_hit_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for k in &keys {
                sum = sum.wrapping_add(*table.get(k.as_str()).unwrap());
            }
            black_box(sum)
        })
    });
}

fn bench_queue_push_pop_100k(c: &mut Criterion) {
    let priorities: Vec<f64> = lcg(11).take(100_000).map(|x| (x >> 11) as f64).collect();
    c.bench_function("queue::min_push_pop_100k", |b| {
        b.iter(|| {
            let mut q = PriorityQueue::new(HeapOrder::Min);
            for (i, &p) in priorities.iter().enumerate() {
                q.enqueue(p, i).unwrap();
            }
            let mut last = 0;
            while let Some((v, _)) = q.dequeue() {
                last = v;
            }
            black_box(last)
        })
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
    targets = bench_table_insert_100k, bench_table_get_hit_100k, bench_queue_push_pop_100k
}
criterion_main!(benches);
