//! Classical graph algorithms over generic weighted graphs.
//!
//! The crate provides breadth-first search, depth-first search, Dijkstra's
//! single-source shortest paths and Prim's minimum spanning tree, all
//! operating on an explicitly-built [`Graph`] supplied by the caller.
//!
//! Vertices carry caller data and are identified by it: two vertices wrapping
//! equal data are the same vertex wherever a vertex is used as a map key or
//! set member. Edge weights are non-negative integers ([`Distance`]), which
//! is what Dijkstra's correctness relies on; the weight type enforces this
//! rather than a runtime check.
//!
//! ```
//! use graph_algos::{bfs, shortest_paths, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! graph.add_undirected_edge(&a, &b, 3);
//!
//! let order = bfs(&a, &graph).unwrap();
//! assert_eq!(order, vec![a.clone(), b.clone()]);
//!
//! let distances = shortest_paths(&a, &graph).unwrap();
//! assert_eq!(distances[&b], 3);
//! ```
//!
//! All algorithms run synchronously on the calling thread, allocate only
//! call-local working state and never mutate the graph they are given, so a
//! single graph can serve concurrent read-only invocations.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{bfs, dfs, minimum_spanning_tree, shortest_paths};
/// Re-export main types for convenient use
pub use graph::{Distance, Edge, Graph, Vertex, VertexDistance, INFINITY};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("start vertex {0} not found in graph")]
    StartNotFound(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
