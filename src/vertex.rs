/*!
# Vertex Representation

Vertices are identified by a dense `VertexId = u32` equal to their position in the owning
[`Digraph`](crate::repr::Digraph). IDs are reassigned whenever the graph reorders its vertices
(see [`Digraph::sort_roots`](crate::repr::Digraph::sort_roots)), so they must never be treated
as stable across such a reordering.

Apart from its ID, a [`Vertex`] owns a user-supplied payload and the ordered list of its
outgoing [`Edge`]s.
*/

use std::num::NonZero;

use crate::edge::{Arc, Edge};

/// Vertices are numbered from `0` to `VertexId::MAX - 1`
pub type VertexId = u32;

/// Vertex-Value that is considered invalid
pub const INVALID_VERTEX: VertexId = VertexId::MAX;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = VertexId;

/// As `Option<VertexId>` uses additional bytes for padding, it can be inefficient
/// since search results store one predecessor per vertex. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalVertexImpl<const N: VertexId>(NonZero<VertexId>);

/// `INVALID_VERTEX` is safe to pick as the `None`-Value
pub type OptionalVertex = OptionalVertexImpl<INVALID_VERTEX>;

impl<const N: VertexId> OptionalVertexImpl<N> {
    /// Returns `Some(OptionalVertexImpl)` if `v != N` and `None` otherwise
    pub const fn new(v: VertexId) -> Option<Self> {
        match NonZero::new(v ^ N) {
            Some(inner) => Some(OptionalVertexImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying VertexId
    pub const fn get(&self) -> VertexId {
        self.0.get() ^ N
    }
}

/// A vertex of a [`Digraph`](crate::repr::Digraph) together with its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<V, E, W> {
    pub(crate) id: VertexId,
    pub(crate) value: V,
    pub(crate) edges: Vec<Edge<E, W>>,
}

impl<V, E, W> Vertex<V, E, W> {
    pub(crate) fn new(id: VertexId, value: V) -> Self {
        Self {
            id,
            value,
            edges: Vec::new(),
        }
    }

    /// Returns the position of this vertex in its graph.
    ///
    /// Only valid until the graph reorders its vertices.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the payload of this vertex
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the outgoing edges in their current order
    #[inline]
    pub fn edges(&self) -> &[Edge<E, W>] {
        &self.edges
    }

    /// Returns the number of outgoing edges (parallel edges are counted individually)
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all outgoing arcs `(self, target)`
    pub fn arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.edges.iter().map(|e| Arc(self.id, e.target()))
    }

    /// Returns *true* if there is at least one edge `(self, self)`
    pub fn has_self_loop(&self) -> bool {
        self.edges.iter().any(|e| e.target() == self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_vertex() {
        assert!(OptionalVertex::new(INVALID_VERTEX).is_none());
        for v in [0, 1, 17, INVALID_VERTEX - 1] {
            assert_eq!(OptionalVertex::new(v).map(|x| x.get()), Some(v));
        }

        assert_eq!(
            std::mem::size_of::<Option<OptionalVertex>>(),
            std::mem::size_of::<VertexId>()
        );
    }
}
