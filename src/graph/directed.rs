use crate::graph::traits::{Graph, MutableGraph};
use num_traits::Float;
use std::fmt::Debug;

/// A directed graph with a fixed vertex count, stored as adjacency lists
///
/// Each ordered pair of vertices holds at most one weight. Rows are kept sorted
/// by destination so neighbors come out in vertex order.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from an edge list, applying the same rules as `add_edge`
    pub fn from_edges<I>(vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_capacity(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        let edges = self.outgoing_edges.get(from)?;
        edges
            .binary_search_by_key(&to, |(target, _)| *target)
            .ok()
            .map(|idx| edges[idx].1)
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        let outgoing = &mut self.outgoing_edges[from];
        match outgoing.binary_search_by_key(&to, |(target, _)| *target) {
            // Later insertions overwrite, they never accumulate
            Ok(idx) if weight.is_finite() => outgoing[idx].1 = weight,
            Ok(idx) => {
                outgoing.remove(idx);
            }
            Err(idx) if weight.is_finite() => outgoing.insert(idx, (to, weight)),
            Err(_) => {}
        }

        true
    }
}
