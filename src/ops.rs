/*!
# Graph Access Traits

The search algorithms in [`algo`](crate::algo) are written against these traits instead of the
concrete [`Digraph`](crate::repr::Digraph), mirroring how the store exposes its structure:
vertex order, edge order, the structural revision, and (indexed, weighted) out-neighborhoods.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, vertex::*, weight::Weight};

/// Monotone counter identifying a structural state of a graph
pub type Revision = u64;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphVertexOrder {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns a range over all vertex IDs.
    /// In contrast to an iterator over vertices, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<VertexId> {
        0..self.number_of_vertices()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph, parallel edges counted individually
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the structural revision of a graph.
///
/// Every structural change yields a new revision; anything computed from an older revision
/// (matrices, search results, topological orders) is stale.
pub trait GraphRevision {
    /// Returns the current revision
    fn revision(&self) -> Revision;
}

/// Traits pertaining getters for out-neighborhoods
pub trait AdjacencyList: GraphVertexOrder + GraphRevision + Sized {
    /// Returns an iterator over the targets of all outgoing edges of `u` in edge order.
    /// Targets of parallel edges are repeated.
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_;

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: VertexId) -> NumEdges;

    /// Returns the target of the `i`-th (0-indexed) outgoing edge of `u`
    /// ** Panics if `u >= n || i >= deg(u)` **
    fn ith_out_neighbor(&self, u: VertexId, i: NumEdges) -> VertexId;

    /// Returns an iterator over the out-degrees of all vertices
    fn out_degrees(&self) -> impl Iterator<Item = NumEdges> + '_ {
        self.vertices_range().map(|u| self.out_degree_of(u))
    }

    /// Computes the in-degree of every vertex with a single pass over all edges
    fn in_degrees(&self) -> Vec<NumEdges> {
        let mut in_degs = vec![0; self.len()];
        for v in self.vertices_range().flat_map(|u| self.out_neighbors_of(u)) {
            in_degs[v as usize] += 1;
        }
        in_degs
    }

    /// Returns an iterator over all outgoing arcs of `u`
    /// ** Panics if `u >= n` **
    fn arcs_of(&self, u: VertexId) -> impl Iterator<Item = Arc> + '_ {
        self.out_neighbors_of(u).map(move |v| Arc(u, v))
    }

    /// Returns an iterator over all arcs in the graph, grouped by source
    fn arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.vertices_range().flat_map(move |u| self.arcs_of(u))
    }

    /// Returns all arcs in sorted order
    fn ordered_arcs(&self) -> Vec<Arc> {
        self.arcs().sorted().collect_vec()
    }
}

/// Out-neighborhoods together with edge weights
pub trait WeightedAdjacencyList: AdjacencyList {
    /// Weight type of the edges
    type Weight: Weight;

    /// Returns an iterator over `(target, weight)` for all outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn weighted_out_neighbors_of(
        &self,
        u: VertexId,
    ) -> impl Iterator<Item = (VertexId, Self::Weight)> + '_;
}
