use num_traits::Float;
use std::fmt::Debug;

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the present outgoing edges from a vertex.
    ///
    /// The iterator is rebuilt from the current store on every call. A vertex
    /// outside the graph has no outgoing edges.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Sets the weight of the directed edge `from -> to`.
    ///
    /// Returns false, without touching the store, when either endpoint is out of
    /// range. A non-finite weight means "no edge" and clears any stored weight.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;
}
