//! Lazy Dijkstra - single-source shortest paths over weighted directed graphs
//!
//! The engine finalizes vertices in order of tentative distance using a priority
//! frontier that tolerates duplicate entries. Stale entries are discarded when
//! they are extracted instead of being decreased in place.
//!
//! Edge weights must be non-negative. Negative weights are not rejected, but the
//! greedy finalization step assumes they never occur and results are undefined
//! when they do.
//!
//! Distances are summed in `W`. A sum of finite weights that overflows to infinity
//! is indistinguishable from the sentinel, so the vertex is reported unreachable.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;

use num_traits::Float;
use std::fmt::Debug;

pub use algorithm::{
    dijkstra::{Dijkstra, FrontierKind},
    reconstruct_path, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{BinaryHeapFrontier, Frontier, SortedListFrontier};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid graph size: {0}")]
    InvalidSize(i64),

    #[error("Source vertex {0} is outside the graph")]
    InvalidSource(usize),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Extraction from an empty frontier")]
    EmptyFrontier,

    #[error("Vertex {0} is unreachable from the source")]
    Unreachable(usize),

    #[error("Predecessor chain loops at vertex {0}")]
    PredecessorCycle(usize),

    #[error("Unknown frontier kind: {0}")]
    UnknownFrontier(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Creates a graph with `vertex_count` vertices and no edges.
///
/// Fails with [`Error::InvalidSize`] when the count is negative.
pub fn create_graph<W>(vertex_count: i64) -> Result<DirectedGraph<W>>
where
    W: Float + Debug + Copy,
{
    let n = usize::try_from(vertex_count).map_err(|_| Error::InvalidSize(vertex_count))?;
    Ok(DirectedGraph::with_capacity(n))
}

/// Sets the directed weight from `source` to `destination`.
///
/// Out-of-range endpoints are ignored rather than reported, so callers can probe
/// edges without checking bounds first. A non-finite weight clears the edge.
pub fn add_edge<W>(graph: &mut DirectedGraph<W>, source: usize, destination: usize, weight: W)
where
    W: Float + Debug + Copy,
{
    graph.add_edge(source, destination, weight);
}

/// Runs the default engine from `source`.
pub fn shortest_paths<W>(graph: &DirectedGraph<W>, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Float + Debug + Copy,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}
