pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::shortest_paths;
pub use prim::minimum_spanning_tree;

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Checks that `start` is a vertex of `graph` before any traversal work.
///
/// Every algorithm in this module shares the same precondition and surfaces
/// the same error for it.
pub(crate) fn ensure_start<T>(start: &Vertex<T>, graph: &Graph<T>) -> Result<()>
where
    T: Clone + Eq + Hash + Debug,
{
    if graph.contains(start) {
        Ok(())
    } else {
        Err(Error::StartNotFound(format!("{:?}", start.data())))
    }
}
