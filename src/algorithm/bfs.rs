use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::algorithm::ensure_start;
use crate::graph::{Graph, Vertex};
use crate::Result;

/// Breadth-first search from `start`, returning vertices in visitation order.
///
/// The traversal explores the graph in layers behind a FIFO frontier: `start`
/// is visited first, then for each dequeued vertex its neighbors are examined
/// in adjacency-list order and every not-yet-visited one is appended to the
/// output and enqueued. The result covers exactly the vertices reachable from
/// `start`, each once, in non-decreasing hop distance.
///
/// Fails with [`Error::StartNotFound`](crate::Error::StartNotFound) when
/// `start` is not a vertex of `graph`.
pub fn bfs<T>(start: &Vertex<T>, graph: &Graph<T>) -> Result<Vec<Vertex<T>>>
where
    T: Clone + Eq + Hash + Debug,
{
    ensure_start(start, graph)?;

    let mut frontier = VecDeque::new();
    frontier.push_back(start.clone());

    let mut seen: HashSet<Vertex<T>> = HashSet::new();
    seen.insert(start.clone());

    let mut order = vec![start.clone()];

    while let Some(current) = frontier.pop_front() {
        // The closed-vertex-set invariant guarantees an adjacency entry.
        if let Some(neighbors) = graph.neighbors(&current) {
            for pair in neighbors {
                if seen.insert(pair.vertex.clone()) {
                    order.push(pair.vertex.clone());
                    frontier.push_back(pair.vertex.clone());
                }
            }
        }
    }

    debug!(
        "bfs visited {} of {} vertices",
        order.len(),
        graph.vertex_count()
    );
    Ok(order)
}
