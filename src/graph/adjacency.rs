use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::graph::types::{Distance, Edge, Vertex, VertexDistance};

/// A graph represented as an adjacency map plus a flat edge set.
///
/// `adjacency` maps every vertex in the graph to its outgoing neighbors in
/// insertion order; a vertex with no neighbors still has an (empty) entry.
/// `edges` is the flat, unordered collection of all edges, used by algorithms
/// that consider edges independent of adjacency direction.
///
/// The builder methods keep the vertex set closed: any vertex referenced by an
/// edge is inserted into the adjacency map if not already present, so
/// algorithms can look up any reachable vertex's neighbors without a missing
/// key. Duplicate-data vertices collapse to one adjacency entry.
///
/// Algorithms take the graph by shared reference and never mutate it.
#[derive(Debug, Clone)]
pub struct Graph<T>
where
    T: Clone + Eq + Hash,
{
    adjacency: HashMap<Vertex<T>, Vec<VertexDistance<T>>>,
    edges: HashSet<Edge<T>>,
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
            edges: HashSet::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            adjacency: HashMap::with_capacity(vertices),
            edges: HashSet::new(),
        }
    }

    /// Adds a vertex wrapping `data` and returns it.
    ///
    /// A vertex with equal data that is already present is left untouched;
    /// its neighbors are kept.
    pub fn add_vertex(&mut self, data: T) -> Vertex<T> {
        let vertex = Vertex::new(data);
        self.adjacency.entry(vertex.clone()).or_default();
        vertex
    }

    /// Adds a directed edge from `u` to `v` with the given weight.
    ///
    /// Both endpoints are inserted into the vertex set if missing. The edge is
    /// appended to `u`'s adjacency list and recorded in the flat edge set.
    pub fn add_edge(&mut self, u: &Vertex<T>, v: &Vertex<T>, weight: Distance) {
        self.adjacency.entry(v.clone()).or_default();
        self.adjacency
            .entry(u.clone())
            .or_default()
            .push(VertexDistance::new(v.clone(), weight));
        self.edges.insert(Edge::new(u.clone(), v.clone(), weight));
    }

    /// Adds an undirected edge between `u` and `v` with the given weight.
    ///
    /// Both adjacency lists gain an entry; the flat edge set records the edge
    /// once, in the `u` -> `v` orientation.
    pub fn add_undirected_edge(&mut self, u: &Vertex<T>, v: &Vertex<T>, weight: Distance) {
        self.adjacency
            .entry(v.clone())
            .or_default()
            .push(VertexDistance::new(u.clone(), weight));
        self.adjacency
            .entry(u.clone())
            .or_default()
            .push(VertexDistance::new(v.clone(), weight));
        self.edges.insert(Edge::new(u.clone(), v.clone(), weight));
    }

    /// Returns true if the vertex exists in the graph
    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the neighbors of `vertex` in insertion order, or `None` if the
    /// vertex is not in the graph.
    pub fn neighbors(&self, vertex: &Vertex<T>) -> Option<&[VertexDistance<T>]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns an iterator over every vertex in the graph
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.adjacency.keys()
    }

    /// Returns the full adjacency mapping
    pub fn adjacency(&self) -> &HashMap<Vertex<T>, Vec<VertexDistance<T>>> {
        &self.adjacency
    }

    /// Returns the flat edge set
    pub fn edges(&self) -> &HashSet<Edge<T>> {
        &self.edges
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<T> Default for Graph<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Graph::new()
    }
}
