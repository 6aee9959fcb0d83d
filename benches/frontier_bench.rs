use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_dijkstra::graph::generators::{generate_grid, generate_random_graph};
use lazy_dijkstra::{Dijkstra, FrontierKind, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    let mut rng = StdRng::seed_from_u64(1);

    for &size in &[500usize, 2_000] {
        let graph = generate_random_graph(size, 4.0, &mut rng);
        for kind in [FrontierKind::BinaryHeap, FrontierKind::SortedList] {
            let dijkstra = Dijkstra::new().with_frontier(kind);
            group.bench_with_input(BenchmarkId::new(format!("{:?}", kind), size), &graph, |b, graph| {
                b.iter(|| dijkstra.compute_shortest_paths(black_box(graph), 0))
            });
        }
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(64, 64);
    let dijkstra = Dijkstra::new();
    c.bench_function("grid_64x64_heap", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(black_box(&graph), 0))
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
