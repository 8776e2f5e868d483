use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::algorithm::ensure_start;
use crate::graph::{Graph, Vertex};
use crate::Result;

/// Depth-first search from `start`, returning vertices in pre-order.
///
/// A vertex is appended to the output when it is first reached, then its
/// not-yet-visited neighbors are explored one at a time in adjacency-list
/// order, each fully before the next. Uses an explicit stack rather than
/// recursion, so the call stack does not bound the length of the longest
/// simple path the traversal can follow.
///
/// Fails with [`Error::StartNotFound`](crate::Error::StartNotFound) when
/// `start` is not a vertex of `graph`.
pub fn dfs<T>(start: &Vertex<T>, graph: &Graph<T>) -> Result<Vec<Vertex<T>>>
where
    T: Clone + Eq + Hash + Debug,
{
    ensure_start(start, graph)?;

    let mut stack = vec![start.clone()];
    let mut seen: HashSet<Vertex<T>> = HashSet::new();
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if !seen.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());

        if let Some(neighbors) = graph.neighbors(&current) {
            // Pushed in reverse so the first-listed neighbor is explored
            // first, matching the recursive pre-order.
            for pair in neighbors.iter().rev() {
                if !seen.contains(&pair.vertex) {
                    stack.push(pair.vertex.clone());
                }
            }
        }
    }

    debug!(
        "dfs visited {} of {} vertices",
        order.len(),
        graph.vertex_count()
    );
    Ok(order)
}
