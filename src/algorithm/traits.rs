use log::warn;
use num_traits::Float;
use serde::Serialize;
use std::fmt::{Debug, Display};

use crate::graph::Graph;
use crate::{Error, Result};

/// Counters collected while a single traversal runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices whose distance was finalized
    pub vertices_settled: usize,

    /// Relaxations that improved a tentative distance
    pub edges_relaxed: usize,

    /// Frontier entries discarded because their vertex was already settled
    pub stale_entries: usize,

    /// Entries pushed onto the frontier, the initial source entry included
    pub frontier_pushes: usize,

    /// Largest number of entries the frontier held at once
    pub max_frontier_len: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Distances from source to each vertex, infinite when unreachable
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Counters from the traversal that produced this result
    pub stats: SearchStats,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Distance to `vertex`, or `None` if the vertex is outside the graph
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Vertices on the shortest path from the source to `target`, in travel order
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy + Display,
{
    /// One `Vertex s to v: Distance: d, Path: ...` line per vertex other than the source.
    ///
    /// Unreachable vertices read `Distance: Infinity, Path: unreachable`.
    pub fn path_lines(&self) -> Vec<String> {
        (0..self.distances.len())
            .filter(|&vertex| vertex != self.source)
            .map(|vertex| {
                let distance = match self.distances[vertex] {
                    d if d.is_finite() => d.to_string(),
                    _ => "Infinity".to_string(),
                };
                let path = match self.path_to(vertex) {
                    Ok(path) => path
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(" -> "),
                    Err(_) => "unreachable".to_string(),
                };
                format!(
                    "Vertex {} to {}: Distance: {}, Path: {}",
                    self.source, vertex, distance, path
                )
            })
            .collect()
    }
}

/// Follows predecessor links back from `target` to `source`.
///
/// Returns the path in source-to-target order. A target with no predecessor that
/// is not the source is reported as [`Error::Unreachable`].
pub fn reconstruct_path(
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> Result<Vec<usize>> {
    if source >= predecessors.len() {
        return Err(Error::InvalidSource(source));
    }
    if target >= predecessors.len() {
        return Err(Error::InvalidVertex(target));
    }

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        current = match predecessors[current] {
            Some(pred) => pred,
            None => return Err(Error::Unreachable(target)),
        };
        path.push(current);

        // A simple path never visits more vertices than the graph has
        if path.len() > predecessors.len() {
            warn!("predecessor chain from {} never reaches {}", target, source);
            return Err(Error::PredecessorCycle(current));
        }
    }

    path.reverse();
    Ok(path)
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Vec<usize>> {
        result.path_to(target)
    }
}
