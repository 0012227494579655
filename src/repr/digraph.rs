/*!
# Digraph Store

[`Digraph`] owns its vertices in a dense vector; the vertex at position `i` always has ID `i`.
Each vertex owns its outgoing edges in insertion order (or the order established by
[`Digraph::sort_edges`]). Multigraphs and self-loops are permitted.

Every structural mutation bumps the graph's [`Revision`]; see the [module docs](super)
for what that means for previously computed matrices and search results.
*/

use std::{
    cmp::Ordering,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
};

use fxhash::FxHashSet;
use log::debug;

use crate::{
    edge::*,
    error::GraphError,
    ops::*,
    reduce::EdgeWeightReducer,
    repr::{AdjacencyMatrix, WeightedAdjacencyMatrix},
    vertex::*,
    weight::*,
};

/// Source of revisions for all graphs of the process; `0` is never handed out and marks
/// matrices that have not been computed yet.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

#[inline]
fn fresh_revision() -> Revision {
    NEXT_REVISION.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A directed (multi-)graph with vertex payloads `V`, edge payloads `E` and edge weights `W`.
///
/// # Examples
/// ```
/// use digraphs::prelude::*;
///
/// let mut g: Digraph<&str, &str, u32> = Digraph::new();
/// let home = g.add_vertex("home");
/// let work = g.add_vertex("work");
/// g.add_weighted_edge(home, work, "bus", 35);
/// g.add_weighted_edge(home, work, "bike", 20);
///
/// assert_eq!(g.number_of_edges(), 2);
/// assert_eq!(g.find_edge_filtered(home, work, |mode| *mode == "bike").unwrap().weight(), 20);
///
/// let weights = g.weighted_adjacency_matrix(&MinimumReducer);
/// assert_eq!(g.weighted_adjacency(&weights, home, work), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Digraph<V, E = (), W = NoWeight> {
    vertices: Vec<Vertex<V, E, W>>,
    num_edges: NumEdges,
    revision: Revision,
}

impl<V, E, W> Default for Digraph<V, E, W> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            num_edges: 0,
            revision: fresh_revision(),
        }
    }
}

impl<V, E, W> GraphVertexOrder for Digraph<V, E, W> {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len() as NumVertices
    }
}

impl<V, E, W> GraphEdgeOrder for Digraph<V, E, W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<V, E, W> GraphRevision for Digraph<V, E, W> {
    fn revision(&self) -> Revision {
        self.revision
    }
}

impl<V, E, W> AdjacencyList for Digraph<V, E, W> {
    fn out_neighbors_of(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[u as usize].edges.iter().map(|e| e.target)
    }

    fn out_degree_of(&self, u: VertexId) -> NumEdges {
        self.vertices[u as usize].edges.len() as NumEdges
    }

    fn ith_out_neighbor(&self, u: VertexId, i: NumEdges) -> VertexId {
        self.vertices[u as usize].edges[i as usize].target
    }
}

impl<V, E, W: Weight> WeightedAdjacencyList for Digraph<V, E, W> {
    type Weight = W;

    fn weighted_out_neighbors_of(&self, u: VertexId) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.vertices[u as usize]
            .edges
            .iter()
            .map(|e| (e.target, e.weight))
    }
}

impl<V, E, W> Digraph<V, E, W> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with space for `n` vertices
    pub fn with_capacity(n: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    #[inline]
    fn touch(&mut self) {
        self.revision = fresh_revision();
    }

    /// Returns `Ok` if `u` is a vertex of this graph
    pub fn check_vertex(&self, u: VertexId) -> Result<(), GraphError> {
        if (u as usize) < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: u,
                len: self.vertices.len(),
            })
        }
    }

    /// Returns `Ok` if something computed at `revision` still matches the graph
    pub fn check_current(&self, revision: Revision) -> Result<(), GraphError> {
        if revision == self.revision {
            Ok(())
        } else {
            Err(GraphError::StaleMatrix {
                matrix: revision,
                graph: self.revision,
            })
        }
    }

    fn assert_current(&self, revision: Revision) {
        if let Err(e) = self.check_current(revision) {
            panic!("{e}");
        }
    }

    /// Adds a new vertex and returns its ID, which equals the previous number of vertices.
    /// ** Panics if the graph already holds `INVALID_VERTEX` vertices **
    pub fn add_vertex(&mut self, value: V) -> VertexId {
        let id = self.vertices.len();
        assert!(id < INVALID_VERTEX as usize, "too many vertices");

        self.vertices.push(Vertex::new(id as VertexId, value));
        self.touch();
        id as VertexId
    }

    /// Returns the vertex with ID `u`
    /// ** Panics if `u >= n` **
    pub fn vertex(&self, u: VertexId) -> &Vertex<V, E, W> {
        &self.vertices[u as usize]
    }

    /// Returns an iterator over all vertices in ID order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V, E, W>> + '_ {
        self.vertices.iter()
    }

    /// Returns the payload of `u`
    /// ** Panics if `u >= n` **
    pub fn value(&self, u: VertexId) -> &V {
        &self.vertices[u as usize].value
    }

    /// Returns a mutable reference to the payload of `u`.
    /// Counts as a structural change.
    /// ** Panics if `u >= n` **
    pub fn value_mut(&mut self, u: VertexId) -> &mut V {
        self.touch();
        &mut self.vertices[u as usize].value
    }

    /// Returns the outgoing edges of `u`
    /// ** Panics if `u >= n` **
    pub fn edges_of(&self, u: VertexId) -> &[Edge<E, W>] {
        &self.vertices[u as usize].edges
    }

    /// Returns the outgoing edges of `u` for mutating payloads and weights.
    /// Counts as a structural change.
    /// ** Panics if `u >= n` **
    pub fn edges_of_mut(&mut self, u: VertexId) -> &mut [Edge<E, W>] {
        self.touch();
        &mut self.vertices[u as usize].edges
    }

    /// Adds the edge `(u, v)` with the given payload and weight.
    /// Returns an error if `u` or `v` is not a vertex of the graph.
    pub fn try_add_weighted_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        value: E,
        weight: W,
    ) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        assert!(self.num_edges < NumEdges::MAX, "too many edges");

        self.vertices[u as usize]
            .edges
            .push(Edge::new(v, value, weight));
        self.num_edges += 1;
        self.touch();
        Ok(())
    }

    /// Adds the edge `(u, v)` with the given payload and weight.
    /// Parallel edges and self-loops are allowed.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_weighted_edge(&mut self, u: VertexId, v: VertexId, value: E, weight: W) {
        if let Err(e) = self.try_add_weighted_edge(u, v, value, weight) {
            panic!("{e}");
        }
    }

    /// Adds the edge `(u, v)` unless there already is an edge `(u, v)` whose payload is equal
    /// to `value` according to `eq(existing, &value)`. Weights are ignored in the comparison.
    /// Returns *true* exactly if the edge was inserted.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_unique_weighted_edge_by<F>(
        &mut self,
        u: VertexId,
        v: VertexId,
        value: E,
        weight: W,
        eq: F,
    ) -> bool
    where
        F: Fn(&E, &E) -> bool,
    {
        if self.find_edge_filtered(u, v, |e| eq(e, &value)).is_some() {
            return false;
        }

        self.add_weighted_edge(u, v, value, weight);
        true
    }

    /// Returns an arbitrary edge `(u, v)` whose payload satisfies `predicate`
    /// ** Panics if `u >= n` **
    pub fn find_edge_filtered<F>(
        &self,
        u: VertexId,
        v: VertexId,
        predicate: F,
    ) -> Option<&Edge<E, W>>
    where
        F: Fn(&E) -> bool,
    {
        self.vertices[u as usize]
            .edges
            .iter()
            .find(|e| e.target == v && predicate(&e.value))
    }

    /// Returns an arbitrary edge `(u, v)`
    /// ** Panics if `u >= n` **
    pub fn find_edge(&self, u: VertexId, v: VertexId) -> Option<&Edge<E, W>> {
        self.find_edge_filtered(u, v, |_| true)
    }

    /// Returns *true* if there is at least one edge `(u, v)`
    /// ** Panics if `u >= n` **
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.find_edge(u, v).is_some()
    }

    /// Returns *true* if the graph has a self-loop
    pub fn contains_loops(&self) -> bool {
        self.vertices.iter().any(|v| v.has_self_loop())
    }

    /// Returns *true* if the graph has neither self-loops nor parallel edges
    pub fn is_simple(&self) -> bool {
        let mut targets = FxHashSet::default();
        self.vertices.iter().all(|vertex| {
            targets.clear();
            vertex
                .edges
                .iter()
                .all(|e| e.target != vertex.id && targets.insert(e.target))
        })
    }

    /// Stable-sorts the outgoing edges of every vertex by `cmp`.
    ///
    /// Depth-first search follows edges in this order, so sorting edges makes
    /// traversal results deterministic.
    pub fn sort_edges<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Edge<E, W>, &Edge<E, W>) -> Ordering,
    {
        for vertex in &mut self.vertices {
            vertex.edges.sort_by(&mut cmp);
        }
        self.touch();
    }

    /// Stable-sorts the vertices such that all vertices with in-degree zero come first,
    /// ordered among themselves by `cmp`. Vertices with positive in-degree keep their relative
    /// order. Afterwards all IDs are reassigned to match the new positions and edge targets are
    /// remapped accordingly.
    ///
    /// Every previously obtained [`VertexId`] is invalid afterwards.
    pub fn sort_roots<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Vertex<V, E, W>, &Vertex<V, E, W>) -> Ordering,
    {
        let in_degs = self.in_degrees();
        let is_root = |v: &Vertex<V, E, W>| in_degs[v.id as usize] == 0;

        self.vertices.sort_by(|a, b| match (is_root(a), is_root(b)) {
            (true, true) => cmp(a, b),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        });

        let mut new_ids = vec![INVALID_VERTEX; self.vertices.len()];
        for (pos, vertex) in self.vertices.iter_mut().enumerate() {
            new_ids[vertex.id as usize] = pos as VertexId;
            vertex.id = pos as VertexId;
        }

        for edge in self.vertices.iter_mut().flat_map(|v| v.edges.iter_mut()) {
            edge.target = new_ids[edge.target as usize];
        }

        debug!(
            "sorted {} roots to the front of {} vertices",
            in_degs.iter().filter(|&&d| d == 0).count(),
            self.vertices.len()
        );
        self.touch();
    }

    /// Computes the edge-count matrix of the graph
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::new();
        self.adjacency_matrix_into(&mut matrix);
        matrix
    }

    /// Computes the edge-count matrix into an existing buffer, reusing its allocation
    pub fn adjacency_matrix_into(&self, matrix: &mut AdjacencyMatrix) {
        self.adjacency_matrix_filtered_into(|_| true, matrix);
    }

    /// Computes the edge-count matrix over all edges whose payload satisfies `predicate`
    pub fn adjacency_matrix_filtered<F>(&self, predicate: F) -> AdjacencyMatrix
    where
        F: FnMut(&E) -> bool,
    {
        let mut matrix = AdjacencyMatrix::new();
        self.adjacency_matrix_filtered_into(predicate, &mut matrix);
        matrix
    }

    /// Computes the edge-count matrix over all edges whose payload satisfies `predicate` into
    /// an existing buffer
    pub fn adjacency_matrix_filtered_into<F>(
        &self,
        mut predicate: F,
        matrix: &mut AdjacencyMatrix,
    ) where
        F: FnMut(&E) -> bool,
    {
        matrix.reset(self.len(), self.revision);
        for vertex in &self.vertices {
            for edge in vertex.edges.iter().filter(|e| predicate(&e.value)) {
                matrix.increment(vertex.id, edge.target);
            }
        }
    }

    /// Number of edges `(u, v)` according to `matrix`
    /// ** Panics if `matrix` was computed for another revision of the graph **
    pub fn adjacency(&self, matrix: &AdjacencyMatrix, u: VertexId, v: VertexId) -> NumEdges {
        self.assert_current(matrix.revision());
        matrix.get(u, v)
    }

    /// Number of edges into `v` according to `matrix`
    /// ** Panics if `matrix` was computed for another revision of the graph **
    pub fn indegree(&self, matrix: &AdjacencyMatrix, v: VertexId) -> NumEdges {
        self.assert_current(matrix.revision());
        matrix.indegree(v)
    }

    /// Number of edges out of `u` according to `matrix`
    /// ** Panics if `matrix` was computed for another revision of the graph **
    pub fn outdegree(&self, matrix: &AdjacencyMatrix, u: VertexId) -> NumEdges {
        self.assert_current(matrix.revision());
        matrix.outdegree(u)
    }
}

impl<V, E, W: Weight> Digraph<V, E, W> {
    /// Adds the edge `(u, v)` with weight zero
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, value: E) {
        self.add_weighted_edge(u, v, value, W::zero());
    }

    /// Adds the edge `(u, v)` with weight zero.
    /// Returns an error if `u` or `v` is not a vertex of the graph.
    pub fn try_add_edge(&mut self, u: VertexId, v: VertexId, value: E) -> Result<(), GraphError> {
        self.try_add_weighted_edge(u, v, value, W::zero())
    }

    /// Like [`Digraph::add_unique_weighted_edge_by`] with weight zero
    pub fn add_unique_edge_by<F>(&mut self, u: VertexId, v: VertexId, value: E, eq: F) -> bool
    where
        F: Fn(&E, &E) -> bool,
    {
        self.add_unique_weighted_edge_by(u, v, value, W::zero(), eq)
    }

    /// Computes the reduced-weight matrix of the graph
    pub fn weighted_adjacency_matrix<R>(&self, reducer: &R) -> WeightedAdjacencyMatrix<W>
    where
        R: EdgeWeightReducer<W>,
    {
        let mut matrix = WeightedAdjacencyMatrix::new();
        self.weighted_adjacency_matrix_into(reducer, &mut matrix);
        matrix
    }

    /// Computes the reduced-weight matrix into an existing buffer, reusing its allocation
    pub fn weighted_adjacency_matrix_into<R>(
        &self,
        reducer: &R,
        matrix: &mut WeightedAdjacencyMatrix<W>,
    ) where
        R: EdgeWeightReducer<W>,
    {
        self.weighted_adjacency_matrix_filtered_into(reducer, |_| true, matrix);
    }

    /// Computes the reduced-weight matrix over all edges whose payload satisfies `predicate`
    pub fn weighted_adjacency_matrix_filtered<R, F>(
        &self,
        reducer: &R,
        predicate: F,
    ) -> WeightedAdjacencyMatrix<W>
    where
        R: EdgeWeightReducer<W>,
        F: FnMut(&E) -> bool,
    {
        let mut matrix = WeightedAdjacencyMatrix::new();
        self.weighted_adjacency_matrix_filtered_into(reducer, predicate, &mut matrix);
        matrix
    }

    /// Computes the reduced-weight matrix over all edges whose payload satisfies `predicate`
    /// into an existing buffer.
    ///
    /// Every cell starts at `+inf`. The first qualifying edge of a pair is seeded with
    /// `reduce(identity, w)`, further edges are folded in with `reduce(cell, w)`.
    pub fn weighted_adjacency_matrix_filtered_into<R, F>(
        &self,
        reducer: &R,
        mut predicate: F,
        matrix: &mut WeightedAdjacencyMatrix<W>,
    ) where
        R: EdgeWeightReducer<W>,
        F: FnMut(&E) -> bool,
    {
        matrix.reset(self.len(), self.revision);
        for vertex in &self.vertices {
            for edge in vertex.edges.iter().filter(|e| predicate(&e.value)) {
                matrix.fold(reducer, vertex.id, edge.target, edge.weight);
            }
        }
    }

    /// Reduced weight of the edges `(u, v)` according to `matrix`, `+inf` if there are none
    /// ** Panics if `matrix` was computed for another revision of the graph **
    pub fn weighted_adjacency(
        &self,
        matrix: &WeightedAdjacencyMatrix<W>,
        u: VertexId,
        v: VertexId,
    ) -> W {
        self.assert_current(matrix.revision());
        matrix.get(u, v)
    }
}

impl<V, E: PartialEq, W> Digraph<V, E, W> {
    /// Adds the edge `(u, v)` unless an edge `(u, v)` with an equal payload exists.
    /// Returns *true* exactly if the edge was inserted.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_unique_weighted_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        value: E,
        weight: W,
    ) -> bool {
        self.add_unique_weighted_edge_by(u, v, value, weight, |a, b| a == b)
    }
}

impl<V, E: PartialEq, W: Weight> Digraph<V, E, W> {
    /// Adds the edge `(u, v)` with weight zero unless an edge `(u, v)` with an equal payload
    /// exists. Returns *true* exactly if the edge was inserted.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_unique_edge(&mut self, u: VertexId, v: VertexId, value: E) -> bool {
        self.add_unique_edge_by(u, v, value, |a, b| a == b)
    }
}

impl<V: Default, E: Default, W: Weight> Digraph<V, E, W> {
    /// Creates a graph with `n` default-valued vertices and the given arcs (weight zero)
    pub fn from_arcs<I>(n: NumVertices, arcs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc>,
    {
        Self::from_weighted_arcs(
            n,
            arcs.into_iter().map(|a| {
                let Arc(u, v) = a.into();
                (u, v, W::zero())
            }),
        )
    }

    /// Creates a graph with `n` default-valued vertices and the given weighted arcs
    pub fn from_weighted_arcs<I>(n: NumVertices, arcs: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, W)>,
    {
        let mut graph = Self::with_capacity(n as usize);
        for _ in 0..n {
            graph.add_vertex(V::default());
        }
        for (u, v, w) in arcs {
            graph.add_weighted_edge(u, v, E::default(), w);
        }
        graph
    }
}
