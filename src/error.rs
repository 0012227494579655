use thiserror::Error;

use crate::vertex::VertexId;

/// Errors returned by the fallible (`try_*`) variants of graph operations.
///
/// The infallible variants panic with the same message instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of bounds for a graph with {len} vertices")]
    VertexOutOfBounds { vertex: VertexId, len: usize },

    #[error("graph contains a cycle and has no topological order")]
    ContainsCycle,

    #[error("matrix was computed at graph revision {matrix} but the graph is at revision {graph}")]
    StaleMatrix { matrix: u64, graph: u64 },
}
