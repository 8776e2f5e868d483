use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::algorithm::ensure_start;
use crate::data_structures::MinQueue;
use crate::graph::{Edge, Graph, Vertex};
use crate::Result;

/// Prim's minimum spanning tree grown from `start`.
///
/// Edges are drawn from the graph's flat edge set and treated as undirected:
/// an edge may join the tree in either orientation. The tree grows by
/// repeatedly taking the lowest-weight edge that connects a tree vertex to a
/// vertex outside the tree, until every vertex is included.
///
/// Returns `Some(edges)` with exactly |V|-1 edges when the graph is
/// connected, `None` when it is not (never a partial tree).
///
/// Fails with [`Error::StartNotFound`](crate::Error::StartNotFound) when
/// `start` is not a vertex of `graph`.
pub fn minimum_spanning_tree<T>(
    start: &Vertex<T>,
    graph: &Graph<T>,
) -> Result<Option<HashSet<Edge<T>>>>
where
    T: Clone + Eq + Hash + Debug,
{
    ensure_start(start, graph)?;

    // Incident edges per vertex, independent of edge orientation.
    let mut incident: HashMap<&Vertex<T>, Vec<&Edge<T>>> = HashMap::new();
    for edge in graph.edges() {
        incident.entry(&edge.u).or_default().push(edge);
        if edge.v != edge.u {
            incident.entry(&edge.v).or_default().push(edge);
        }
    }

    let mut in_tree: HashSet<&Vertex<T>> = HashSet::new();
    in_tree.insert(start);

    let mut queue: MinQueue<&Edge<T>> = MinQueue::new();
    if let Some(edges) = incident.get(start) {
        queue.extend(edges.iter().copied());
    }

    let mut tree: HashSet<Edge<T>> = HashSet::new();

    while let Some(edge) = queue.pop() {
        // At least one endpoint is inside: edges enter the queue only when an
        // endpoint joins the tree.
        let outside = if in_tree.contains(&edge.u) {
            if in_tree.contains(&edge.v) {
                continue;
            }
            &edge.v
        } else {
            &edge.u
        };

        in_tree.insert(outside);
        tree.insert(edge.clone());
        if let Some(edges) = incident.get(outside) {
            queue.extend(edges.iter().copied());
        }
        if in_tree.len() == graph.vertex_count() {
            break;
        }
    }

    if in_tree.len() < graph.vertex_count() {
        debug!(
            "no spanning tree: {} of {} vertices reachable from start",
            in_tree.len(),
            graph.vertex_count()
        );
        return Ok(None);
    }

    debug!("spanning tree complete with {} edges", tree.len());
    Ok(Some(tree))
}
