pub mod traits;
pub mod dijkstra;

pub use traits::{reconstruct_path, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
