use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::algorithm::ensure_start;
use crate::data_structures::MinQueue;
use crate::graph::{Distance, Graph, Vertex, VertexDistance, INFINITY};
use crate::Result;

/// Dijkstra's single-source shortest paths from `start`.
///
/// Returns a map covering every vertex in the graph: `start` maps to 0,
/// reachable vertices map to the minimum sum of edge weights along any path
/// from `start`, and unreachable vertices keep the [`INFINITY`] sentinel.
///
/// Correctness relies on non-negative weights, which the [`Distance`] type
/// guarantees; no runtime weight validation is performed.
///
/// Fails with [`Error::StartNotFound`](crate::Error::StartNotFound) when
/// `start` is not a vertex of `graph`.
pub fn shortest_paths<T>(
    start: &Vertex<T>,
    graph: &Graph<T>,
) -> Result<HashMap<Vertex<T>, Distance>>
where
    T: Clone + Eq + Hash + Debug,
{
    ensure_start(start, graph)?;

    let mut settled: HashMap<Vertex<T>, Distance> = graph
        .vertices()
        .map(|vertex| (vertex.clone(), INFINITY))
        .collect();
    settled.insert(start.clone(), 0);

    let mut queue = MinQueue::new();
    queue.push(VertexDistance::new(start.clone(), 0));

    while let Some(pair) = queue.pop() {
        // Stale entry: a shorter path to this vertex was already settled.
        if pair.distance > settled[&pair.vertex] {
            continue;
        }

        if let Some(neighbors) = graph.neighbors(&pair.vertex) {
            for edge in neighbors {
                let candidate = pair.distance.saturating_add(edge.distance);
                if candidate < settled[&edge.vertex] {
                    settled.insert(edge.vertex.clone(), candidate);
                    queue.push(VertexDistance::new(edge.vertex.clone(), candidate));
                }
            }
        }
    }

    debug!(
        "shortest_paths settled {} vertices ({} unreachable)",
        settled.len(),
        settled.values().filter(|d| **d == INFINITY).count()
    );
    Ok(settled)
}
