use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;

/// Edge list of the five-vertex graph used by the demo binary
pub const REFERENCE_EDGES: [(usize, usize, f64); 10] = [
    (0, 1, 6.0),
    (0, 3, 1.0),
    (1, 2, 5.0),
    (1, 3, 2.0),
    (1, 4, 2.0),
    (2, 1, 1.0),
    (3, 2, 1.0),
    (3, 4, 4.0),
    (4, 0, 2.0),
    (4, 2, 8.0),
];

/// Builds the five-vertex reference graph
pub fn reference_graph() -> DirectedGraph<f64> {
    DirectedGraph::from_edges(5, REFERENCE_EDGES)
}

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Weights are drawn uniformly from `[1, 100)`. Self-loops are skipped and a
/// repeated pair keeps the last weight drawn.
pub fn generate_random_graph<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> DirectedGraph<f64> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1.0..100.0));
        }
    }

    graph
}

/// Generates a `width * height` grid with 8-connectivity.
///
/// Cardinal moves cost 1.0, diagonal moves 1.4. Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<f64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let directions = [
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, cost);
                }
            }
        }
    }

    graph
}
