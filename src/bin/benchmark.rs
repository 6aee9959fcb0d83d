use lazy_dijkstra::graph::generators::generate_random_graph;
use lazy_dijkstra::{Dijkstra, DirectedGraph, FrontierKind, Graph, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

// Function to benchmark one frontier on a graph
fn benchmark_frontier(kind: FrontierKind, graph: &DirectedGraph<f64>, source: usize) -> Duration {
    println!("Running {:?} frontier on graph with {} vertices...", kind, graph.vertex_count());

    let dijkstra = Dijkstra::new().with_frontier(kind);
    let start = Instant::now();
    let result = match dijkstra.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - failed: {}", err);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?} (peak frontier {}, {} stale entries)",
        result.reachable_count(),
        duration,
        result.stats.max_frontier_len,
        result.stats.stale_entries
    );

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 5_000, 10_000, 50_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let mut rng = StdRng::seed_from_u64(7);

    println!("=====================================================");
    println!("Benchmark: binary heap vs sorted list frontier");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let heap_time = benchmark_frontier(FrontierKind::BinaryHeap, &graph, 0);
        let list_time = benchmark_frontier(FrontierKind::SortedList, &graph, 0);
        results.push((size, heap_time, list_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Heap (ms)", "Sorted (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, heap_time, list_time) in &results {
        let speedup = list_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            heap_time.as_millis(),
            list_time.as_millis(),
            speedup
        );
    }
}
