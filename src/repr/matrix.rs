/*!
# Adjacency Matrices

Dense `n x n` matrices computed from a [`Digraph`](super::Digraph):
- [`AdjacencyMatrix`] counts the edges between every ordered pair (multigraph aware),
- [`WeightedAdjacencyMatrix`] holds the reduced weight of all edges between every ordered pair,
  or `+inf` if there is none.

Both record the graph revision they were computed at. The graph-level queries
([`Digraph::indegree`](super::Digraph::indegree), ...) refuse matrices from another revision.
Querying a matrix directly with a vertex outside its width panics.
*/

use crate::{
    edge::NumEdges, ops::Revision, reduce::EdgeWeightReducer, utils::ResetBuffer,
    vertex::VertexId, weight::Weight,
};

#[inline]
fn cell_index(width: usize, u: VertexId, v: VertexId) -> usize {
    let (u, v) = (u as usize, v as usize);
    assert!(
        u < width && v < width,
        "cell ({u}, {v}) is outside of a {width}x{width} matrix; was the graph modified?"
    );
    u * width + v
}

/// Edge-count matrix: cell `[u][v]` is the number of (qualifying) edges `u -> v`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    width: usize,
    cells: Vec<NumEdges>,
    revision: Revision,
}

impl AdjacencyMatrix {
    /// Creates an empty `0 x 0` matrix to be filled by one of the `*_into` builders
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (= columns), i.e. the number of vertices at construction time
    pub fn width(&self) -> usize {
        self.width
    }

    /// Graph revision this matrix was computed at
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Number of edges `u -> v`
    /// ** Panics if `u` or `v` is outside the matrix **
    pub fn get(&self, u: VertexId, v: VertexId) -> NumEdges {
        self.cells[cell_index(self.width, u, v)]
    }

    /// Row of `u`, i.e. the edge counts from `u` to every vertex
    pub fn row(&self, u: VertexId) -> &[NumEdges] {
        let start = cell_index(self.width, u, 0);
        &self.cells[start..start + self.width]
    }

    /// Sum of row `u`
    pub fn outdegree(&self, u: VertexId) -> NumEdges {
        self.row(u).iter().sum()
    }

    /// Sum of column `v`
    pub fn indegree(&self, v: VertexId) -> NumEdges {
        assert!((v as usize) < self.width, "column {v} is outside of the matrix");
        self.cells
            .iter()
            .skip(v as usize)
            .step_by(self.width)
            .sum()
    }

    pub(crate) fn reset(&mut self, width: usize, revision: Revision) {
        self.width = width;
        self.revision = revision;
        self.cells.reset_to(width * width, 0);
    }

    pub(crate) fn increment(&mut self, u: VertexId, v: VertexId) {
        self.cells[cell_index(self.width, u, v)] += 1;
    }
}

/// Reduced-weight matrix: cell `[u][v]` is the reduction of the weights of all (qualifying)
/// edges `u -> v`, or `+inf` if there is no such edge.
///
/// Whether a cell holds a reduction is tracked apart from its value, so a reduction that
/// equals `+inf` is kept as such.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedAdjacencyMatrix<W> {
    width: usize,
    cells: Vec<W>,
    seeded: Vec<bool>,
    revision: Revision,
}

impl<W> Default for WeightedAdjacencyMatrix<W> {
    fn default() -> Self {
        Self {
            width: 0,
            cells: Vec::new(),
            seeded: Vec::new(),
            revision: 0,
        }
    }
}

impl<W: Weight> WeightedAdjacencyMatrix<W> {
    /// Creates an empty `0 x 0` matrix to be filled by one of the `*_into` builders
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (= columns), i.e. the number of vertices at construction time
    pub fn width(&self) -> usize {
        self.width
    }

    /// Graph revision this matrix was computed at
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Reduced weight of all edges `u -> v`
    /// ** Panics if `u` or `v` is outside the matrix **
    pub fn get(&self, u: VertexId, v: VertexId) -> W {
        self.cells[cell_index(self.width, u, v)]
    }

    /// Returns *true* if at least one qualifying edge `u -> v` was reduced into the cell
    pub fn has_entry(&self, u: VertexId, v: VertexId) -> bool {
        self.seeded[cell_index(self.width, u, v)]
    }

    pub(crate) fn reset(&mut self, width: usize, revision: Revision) {
        self.width = width;
        self.revision = revision;
        self.cells.reset_to(width * width, W::positive_infinity());
        self.seeded.reset_to(width * width, false);
    }

    /// Seeds the cell `[u][v]` with `reduce(identity, weight)` on its first edge and folds
    /// `weight` into it afterwards
    pub(crate) fn fold<R>(&mut self, reducer: &R, u: VertexId, v: VertexId, weight: W)
    where
        R: EdgeWeightReducer<W>,
    {
        let idx = cell_index(self.width, u, v);
        let acc = if self.seeded[idx] {
            self.cells[idx]
        } else {
            reducer.identity()
        };
        self.cells[idx] = reducer.reduce(acc, weight);
        self.seeded[idx] = true;
    }
}
