use std::cmp::Ordering;

/// Edge weights and path distances are non-negative integers.
pub type Distance = u64;

/// Sentinel distance for vertices not (yet) reached from the source.
///
/// Relaxation arithmetic uses `saturating_add` so the sentinel never wraps.
pub const INFINITY: Distance = Distance::MAX;

/// A node in the graph, identified by the data it wraps.
///
/// Equality and hashing delegate to the wrapped data, so two vertices built
/// from equal data collapse to a single entry in any map or set keyed by
/// vertex. The data is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex<T> {
    data: T,
}

impl<T> Vertex<T> {
    pub fn new(data: T) -> Self {
        Vertex { data }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the vertex and returns the wrapped data.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// A weighted connection from vertex `u` to vertex `v`.
///
/// Ordering is by weight alone so edges can sit directly in a min-priority
/// queue; equality and hashing cover both endpoints and the weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<T> {
    pub u: Vertex<T>,
    pub v: Vertex<T>,
    pub weight: Distance,
}

impl<T> Edge<T> {
    pub fn new(u: Vertex<T>, v: Vertex<T>, weight: Distance) -> Self {
        Edge { u, v, weight }
    }
}

impl<T: Eq> PartialOrd for Edge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Eq> Ord for Edge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

/// An adjacency-list entry: an edge of weight `distance` leads to `vertex`.
///
/// Doubles as the priority-queue element in Dijkstra's algorithm, ordered by
/// distance ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexDistance<T> {
    pub vertex: Vertex<T>,
    pub distance: Distance,
}

impl<T> VertexDistance<T> {
    pub fn new(vertex: Vertex<T>, distance: Distance) -> Self {
        VertexDistance { vertex, distance }
    }
}

impl<T: Eq> PartialOrd for VertexDistance<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Eq> Ord for VertexDistance<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}
