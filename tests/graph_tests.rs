use lazy_dijkstra::graph::generators::{generate_grid, reference_graph};
use lazy_dijkstra::graph::{DirectedGraph, Graph, MutableGraph};
use lazy_dijkstra::{add_edge, create_graph, Error};

#[test]
fn test_create_graph_rejects_negative_size() {
    let result = create_graph::<f64>(-1);
    assert_eq!(result.unwrap_err(), Error::InvalidSize(-1));
}

#[test]
fn test_create_graph_starts_without_edges() {
    let graph = create_graph::<f64>(4).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 0);
    for v in 0..4 {
        assert_eq!(graph.outgoing_edges(v).count(), 0);
    }

    let empty = create_graph::<f64>(0).unwrap();
    assert_eq!(empty.vertex_count(), 0);
}

#[test]
fn test_later_edge_overwrites_earlier_one() {
    let mut graph = DirectedGraph::with_capacity(3);
    assert!(graph.add_edge(0, 1, 7.0));
    assert!(graph.add_edge(0, 1, 2.5));

    assert_eq!(graph.edge_count(), 1, "Parallel edges should not accumulate");
    assert_eq!(graph.get_edge_weight(0, 1), Some(2.5));
    assert_eq!(graph.get_edge_weight(1, 0), None, "Edges are directed");
}

#[test]
fn test_out_of_range_edges_are_ignored() {
    let mut graph = create_graph::<f64>(3).unwrap();
    add_edge(&mut graph, 0, 3, 1.0);
    add_edge(&mut graph, 5, 0, 1.0);
    assert!(!graph.add_edge(3, 3, 1.0));

    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.has_edge(0, 3));
    assert_eq!(graph.outgoing_edges(5).count(), 0);
}

#[test]
fn test_non_finite_weight_means_no_edge() {
    let mut graph = DirectedGraph::with_capacity(2);
    graph.add_edge(0, 1, f64::INFINITY);
    assert!(!graph.has_edge(0, 1));

    graph.add_edge(0, 1, 4.0);
    graph.add_edge(0, 1, f64::INFINITY);
    assert!(!graph.has_edge(0, 1), "An infinite weight should clear the edge");

    graph.add_edge(1, 0, f64::NAN);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_self_loops_are_stored() {
    let mut graph = DirectedGraph::with_capacity(2);
    graph.add_edge(1, 1, 3.0);
    assert_eq!(graph.get_edge_weight(1, 1), Some(3.0));
    assert_eq!(graph.outgoing_edges(1).collect::<Vec<_>>(), vec![(1, 3.0)]);
}

#[test]
fn test_neighbors_are_restartable_and_ordered() {
    let mut graph = DirectedGraph::with_capacity(5);
    graph.add_edge(2, 4, 1.0);
    graph.add_edge(2, 0, 2.0);
    graph.add_edge(2, 3, 3.0);

    let first: Vec<_> = graph.outgoing_edges(2).collect();
    let second: Vec<_> = graph.outgoing_edges(2).collect();
    assert_eq!(first, vec![(0, 2.0), (3, 3.0), (4, 1.0)]);
    assert_eq!(first, second);

    // A fresh iterator reflects later insertions
    graph.add_edge(2, 1, 9.0);
    assert_eq!(graph.outgoing_edges(2).count(), 4);
}

#[test]
fn test_reference_graph_shape() {
    let graph = reference_graph();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 10);
    assert_eq!(graph.get_edge_weight(4, 2), Some(8.0));
    assert!(graph.validate_non_negative());
}

#[test]
fn test_validate_non_negative_reports_negative_weights() {
    let mut graph = DirectedGraph::with_capacity(2);
    graph.add_edge(0, 1, -1.0);
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_grid_connectivity() {
    let graph = generate_grid(3, 3);
    // Centre vertex reaches all 8 neighbours
    assert_eq!(graph.outgoing_edges(4).count(), 8);
    // Corners reach 3
    assert_eq!(graph.outgoing_edges(0).count(), 3);
    assert_eq!(graph.get_edge_weight(0, 4), Some(1.4));
}
