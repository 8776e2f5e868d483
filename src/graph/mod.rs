pub mod adjacency;
pub mod types;

pub use adjacency::Graph;
pub use types::{Distance, Edge, Vertex, VertexDistance, INFINITY};
