use log::{debug, trace};
use num_traits::Float;
use rayon::prelude::*;
use std::fmt::Debug;
use std::str::FromStr;

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeapFrontier, Frontier, SortedListFrontier};
use crate::graph::Graph;
use crate::{Error, Result};

/// Which frontier the engine drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierKind {
    /// Binary heap, O(log k) per operation
    #[default]
    BinaryHeap,
    /// Insertion-sorted list, O(k) per push
    SortedList,
}

impl FromStr for FrontierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "heap" | "binary-heap" => Ok(FrontierKind::BinaryHeap),
            "sorted" | "sorted-list" => Ok(FrontierKind::SortedList),
            _ => Err(Error::UnknownFrontier(s.to_string())),
        }
    }
}

/// Dijkstra's algorithm with lazy deletion
///
/// The frontier may hold several entries for one vertex. Entries for vertices
/// that are already settled are dropped when popped, so no decrease-key is
/// needed. Requires non-negative edge weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra {
    frontier: FrontierKind,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the binary-heap frontier
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Selects the frontier implementation
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Returns the selected frontier implementation
    pub fn frontier(&self) -> FrontierKind {
        self.frontier
    }

    /// Runs one independent traversal per source in parallel.
    ///
    /// Every traversal owns its frontier and arrays; the graph is only read.
    /// Results come back in the order of `sources`.
    pub fn compute_from_sources<W, G>(
        &self,
        graph: &G,
        sources: &[usize],
    ) -> Result<Vec<ShortestPathResult<W>>>
    where
        W: Float + Debug + Copy + Send + Sync,
        G: Graph<W> + Sync,
    {
        sources
            .par_iter()
            .map(|&source| self.compute_shortest_paths(graph, source))
            .collect()
    }

    fn run<W, G, F>(graph: &G, source: usize, mut frontier: F) -> ShortestPathResult<W>
    where
        W: Float + Debug + Copy,
        G: Graph<W>,
        F: Frontier<W>,
    {
        let n = graph.vertex_count();

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut stats = SearchStats::default();

        distances[source] = W::zero();
        frontier.push(source, W::zero());
        stats.frontier_pushes = 1;
        stats.max_frontier_len = 1;

        while let Some((u, _)) = frontier.pop_min() {
            if visited[u] {
                stats.stale_entries += 1;
                continue;
            }

            visited[u] = true;
            stats.vertices_settled += 1;
            trace!("settled vertex {} at distance {:?}", u, distances[u]);

            for (v, weight) in graph.outgoing_edges(u) {
                if visited[v] {
                    continue;
                }

                let candidate = distances[u] + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);

                    stats.edges_relaxed += 1;
                    stats.frontier_pushes += 1;
                    stats.max_frontier_len = stats.max_frontier_len.max(frontier.len());
                }
            }
        }

        debug!(
            "dijkstra from {}: settled {}/{} vertices, {} relaxations, {} stale entries, peak frontier {}",
            source,
            stats.vertices_settled,
            n,
            stats.edges_relaxed,
            stats.stale_entries,
            stats.max_frontier_len
        );

        ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let result = match self.frontier {
            FrontierKind::BinaryHeap => {
                Self::run(graph, source, BinaryHeapFrontier::with_capacity(graph.vertex_count()))
            }
            FrontierKind::SortedList => Self::run(graph, source, SortedListFrontier::new()),
        };

        Ok(result)
    }
}
