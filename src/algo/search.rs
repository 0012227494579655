/*!
Annotations shared by the shortest-path style searches ([`BreadthFirstSearch`] and
[`DagSearch`]) and the [`SearchTree`] trait answering distance, predecessor and path queries
on them.
*/

use super::*;

/// Distance in number of edges
pub type Distance = u32;

/// Edge distance of vertices not reached by a search
pub const INFINITE_DISTANCE: Distance = Distance::MAX;

/// Visitation state of a vertex during a search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not reached (yet)
    #[default]
    Undiscovered,
    /// Reached, but not all of its outgoing edges have been processed
    Discovered,
    /// Reached and all of its outgoing edges have been processed
    Finished,
}

/// Per-vertex result of a shortest-path style search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathAnnotation<W> {
    vertex: VertexId,
    predecessor: Option<OptionalVertex>,
    distance: Distance,
    weighted_distance: W,
    color: Color,
}

impl<W: Weight> PathAnnotation<W> {
    fn unreached(vertex: VertexId) -> Self {
        Self {
            vertex,
            predecessor: None,
            distance: INFINITE_DISTANCE,
            weighted_distance: W::positive_infinity(),
            color: Color::Undiscovered,
        }
    }

    /// The annotated vertex
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Predecessor on the search tree; `None` for the start and for unreached vertices
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor.map(|p| p.get())
    }

    /// Number of edges on the found path, [`INFINITE_DISTANCE`] if unreached
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Total weight of the found path, `+inf` if unreached
    pub fn weighted_distance(&self) -> W {
        self.weighted_distance
    }

    /// Visitation state at the end of the search
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns *true* if the search reached this vertex
    pub fn is_reached(&self) -> bool {
        self.distance != INFINITE_DISTANCE
    }

    /// ** Panics if the weighted distance via `pred` has no finite value in `W` **
    pub(crate) fn reach_from(&mut self, pred: &PathAnnotation<W>, weight: W) {
        self.predecessor = OptionalVertex::new(pred.vertex);
        self.distance = pred.distance.saturating_add(1);
        self.weighted_distance = pred.weighted_distance.infinite_sum(weight);
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Re-initializes `annotations` for a search over `n` vertices starting at `start`
/// ** Panics if `start >= n` **
pub(crate) fn reset_annotations<W: Weight>(
    annotations: &mut Vec<PathAnnotation<W>>,
    n: usize,
    start: VertexId,
) {
    assert!(
        (start as usize) < n,
        "start vertex {start} is out of bounds for a graph with {n} vertices"
    );

    annotations.reset_with(n, |u| PathAnnotation::unreached(u as VertexId));

    let s = &mut annotations[start as usize];
    s.distance = 0;
    s.weighted_distance = W::zero();
    s.color = Color::Discovered;
}

/// Outcome of offering the edge `(u, v)` to the annotation of `v`
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Offer<W> {
    /// `v` keeps its annotation
    Kept,
    /// Reaching `v` via `u` yields the smaller weighted distance
    Improves(W),
    /// The weighted distance via `u` has no finite value in `W` and is not known to be
    /// worse than that of `v`
    OutOfRange,
}

/// Compares the path to `v` via the edge `(u, v)` of weight `w` with the current one.
///
/// Reachability is decided by the edge distance, so weights that compare equal (such as
/// [`NoWeight`]) still reach every vertex. Only two reached vertices compare weights.
pub(crate) fn offer<W: Weight>(
    annotations: &[PathAnnotation<W>],
    u: VertexId,
    v: VertexId,
    w: W,
) -> Offer<W> {
    let (from, to) = (&annotations[u as usize], &annotations[v as usize]);
    if !from.is_reached() {
        return Offer::Kept;
    }

    match from.weighted_distance.checked_infinite_sum(w) {
        Some(candidate) if !to.is_reached() => {
            if candidate.is_positive_infinity() {
                Offer::Kept
            } else {
                Offer::Improves(candidate)
            }
        }
        Some(candidate) if candidate.is_less_than(&to.weighted_distance) => {
            Offer::Improves(candidate)
        }
        Some(_) => Offer::Kept,
        // above the range, so worse than any reached finite distance
        None if to.is_reached() && !w.is_less_than(&W::zero()) => Offer::Kept,
        None => Offer::OutOfRange,
    }
}

/// Offers the edge `(u, v)` of weight `w` to `v` and applies an improvement
pub(crate) fn relax<W: Weight>(
    annotations: &mut [PathAnnotation<W>],
    u: VertexId,
    v: VertexId,
    w: W,
) -> Offer<W> {
    let outcome = offer(annotations, u, v, w);
    if let Offer::Improves(candidate) = outcome {
        let pred = annotations[u as usize];
        let target = &mut annotations[v as usize];
        target.predecessor = OptionalVertex::new(pred.vertex);
        target.distance = pred.distance.saturating_add(1);
        target.weighted_distance = candidate;
        target.color = Color::Discovered;
    }
    outcome
}

/// Marks every reached vertex as finished
pub(crate) fn finish_reached<W: Weight>(annotations: &mut [PathAnnotation<W>]) {
    for a in annotations.iter_mut().filter(|a| a.is_reached()) {
        a.color = Color::Finished;
    }
}

/// Queries on the annotated result of a single-source search.
///
/// Results are indexed by [`VertexId`] and describe the graph revision they were computed
/// at; see [`SearchTree::is_current`].
pub trait SearchTree {
    /// Weight type of the searched graph
    type Weight: Weight;

    /// Vertex the search started at
    fn start(&self) -> VertexId;

    /// All annotations, indexed by [`VertexId`]
    fn annotations(&self) -> &[PathAnnotation<Self::Weight>];

    /// Graph revision the search was computed at
    fn revision(&self) -> Revision;

    /// Returns *true* if `graph` has not been modified since the search was computed
    fn is_current<G: GraphRevision>(&self, graph: &G) -> bool {
        graph.revision() == self.revision()
    }

    /// Annotation of `v`
    /// ** Panics if `v` is outside the searched graph **
    fn annotation(&self, v: VertexId) -> &PathAnnotation<Self::Weight> {
        &self.annotations()[v as usize]
    }

    /// See [`PathAnnotation::distance`]
    fn distance(&self, v: VertexId) -> Distance {
        self.annotation(v).distance()
    }

    /// See [`PathAnnotation::weighted_distance`]
    fn weighted_distance(&self, v: VertexId) -> Self::Weight {
        self.annotation(v).weighted_distance()
    }

    /// See [`PathAnnotation::predecessor`].
    ///
    /// `None` is returned both for the start and for unreached vertices; use
    /// [`SearchTree::is_reachable`] to tell them apart.
    fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.annotation(v).predecessor()
    }

    /// See [`PathAnnotation::color`]
    fn color(&self, v: VertexId) -> Color {
        self.annotation(v).color()
    }

    /// Returns *true* if `v` was reached from the start
    fn is_reachable(&self, v: VertexId) -> bool {
        self.annotation(v).is_reached()
    }

    /// Returns the path `start, ..., v` along the predecessor links.
    ///
    /// The path is `[start]` for `v == start` and empty if `v` is unreachable.
    fn shortest_path(&self, v: VertexId) -> Vec<VertexId> {
        let mut path = Vec::new();
        self.shortest_path_into(v, &mut path);
        path
    }

    /// Like [`SearchTree::shortest_path`] but writes into an existing buffer
    /// ** Panics if the predecessor links contain a cycle, which can only happen for a general
    /// search that reported a negative-weight cycle **
    fn shortest_path_into(&self, v: VertexId, path: &mut Vec<VertexId>) {
        path.clear();
        if !self.is_reachable(v) {
            return;
        }

        path.push(v);
        let mut u = v;
        while let Some(p) = self.predecessor(u) {
            assert!(
                path.len() <= self.annotations().len(),
                "predecessor links of vertex {v} contain a cycle"
            );
            path.push(p);
            u = p;
        }

        debug_assert_eq!(u, self.start());
        path.reverse();
    }
}
