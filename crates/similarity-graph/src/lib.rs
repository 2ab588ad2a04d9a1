//! # Similarity Graph Crate
//!
//! Directed weighted graph with the classic traversals, used to hold
//! pairwise record similarities (`weight = 1 - similarity`).
//!
//! ## Main Components
//!
//! - **graph**: `WeightedGraph` and `Edge`; vertices are addressed by dense
//!   insertion-order indices
//! - **search**: DFS / BFS producing a `SearchTree`
//! - **mst**: Prim's minimum spanning tree
//! - **shortest_path**: Dijkstra single-source shortest paths
//! - **error**: `GraphError` (bad index, missing edge, bad weight)

pub mod error;
pub mod graph;
pub mod mst;
pub mod search;
pub mod shortest_path;

pub use error::{GraphError, Result};
pub use graph::{Edge, WeightedGraph};
pub use mst::MinimumSpanningTree;
pub use search::SearchTree;
pub use shortest_path::ShortestPathTree;
