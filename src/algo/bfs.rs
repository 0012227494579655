/*!
# Breadth-First and General Weighted Search

Two single-source searches sharing the [`BreadthFirstSearch`] result type:

- [`BreadthFirst::breadth_first_search`] explores vertices in FIFO order and finds paths with
  the fewest edges. The weighted distance of a vertex is the total weight along that path,
  which is in general *not* the minimum weight.
- [`BreadthFirst::breadth_first_search_weighted_general`] finds minimum-weight paths with
  arbitrary (also negative) edge weights by repeated relaxation of all edges
  (Bellman-Ford). It reports whether a negative-weight cycle is reachable from the start.

Both are also available through [`BreadthFirstSearchBuilder`], which adds a depth limit and a
visitor callback to the plain breadth-first search.
*/

use std::collections::VecDeque;

use log::{debug, trace};

use super::*;

/// Result of a single-source search from [`BreadthFirst`]; see [`SearchTree`] for queries.
///
/// The struct doubles as a reusable buffer for the `*_into` variants.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch<W> {
    start: VertexId,
    annotations: Vec<PathAnnotation<W>>,
    revision: Revision,
    queue: VecDeque<VertexId>,
}

impl<W> Default for BreadthFirstSearch<W> {
    fn default() -> Self {
        Self {
            start: 0,
            annotations: Vec::new(),
            revision: 0,
            queue: VecDeque::new(),
        }
    }
}

impl<W: Weight> BreadthFirstSearch<W> {
    /// Creates an empty result to be filled by one of the `*_into` searches
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, n: usize, start: VertexId, revision: Revision) {
        reset_annotations(&mut self.annotations, n, start);
        self.start = start;
        self.revision = revision;
        self.queue.clear();
    }
}

impl<W: Weight> SearchTree for BreadthFirstSearch<W> {
    type Weight = W;

    fn start(&self) -> VertexId {
        self.start
    }

    fn annotations(&self) -> &[PathAnnotation<W>] {
        &self.annotations
    }

    fn revision(&self) -> Revision {
        self.revision
    }
}

/// Configures a breadth-first search; obtained from [`BreadthFirst::bfs`].
///
/// # Examples
/// ```
/// use digraphs::{prelude::*, algo::*};
///
/// let g: Digraph<(), ()> = Digraph::from_arcs(4, [(0, 1), (1, 2), (2, 3)]);
///
/// let mut visited = Vec::new();
/// let search = g.bfs(0).max_depth(2).on_visit(|u| visited.push(u)).run();
///
/// assert_eq!(visited, vec![0, 1, 2]);
/// assert_eq!(search.distance(2), 2);
/// assert!(!search.is_reachable(3));
/// ```
pub struct BreadthFirstSearchBuilder<'a, G, F> {
    graph: &'a G,
    start: VertexId,
    max_depth: Option<Distance>,
    visitor: F,
}

impl<'a, G: WeightedAdjacencyList> BreadthFirstSearchBuilder<'a, G, fn(VertexId)> {
    /// Search from `start` without depth limit or visitor
    pub fn new(graph: &'a G, start: VertexId) -> Self {
        Self {
            graph,
            start,
            max_depth: None,
            visitor: |_| {},
        }
    }
}

impl<'a, G, F> BreadthFirstSearchBuilder<'a, G, F>
where
    G: WeightedAdjacencyList,
    F: FnMut(VertexId),
{
    /// Vertices at distance `depth` are still visited, but their out-edges are not explored
    pub fn max_depth(mut self, depth: Distance) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Calls `visitor` once for every reached vertex, in the order they leave the queue
    pub fn on_visit<F2>(self, visitor: F2) -> BreadthFirstSearchBuilder<'a, G, F2>
    where
        F2: FnMut(VertexId),
    {
        BreadthFirstSearchBuilder {
            graph: self.graph,
            start: self.start,
            max_depth: self.max_depth,
            visitor,
        }
    }

    /// Runs the search
    /// ** Panics if the start vertex is outside the graph **
    pub fn run(self) -> BreadthFirstSearch<G::Weight> {
        let mut search = BreadthFirstSearch::new();
        self.run_into(&mut search);
        search
    }

    /// Runs the search reusing the buffers of `search`
    /// ** Panics if the start vertex is outside the graph **
    pub fn run_into(mut self, search: &mut BreadthFirstSearch<G::Weight>) {
        let graph = self.graph;
        search.reset(graph.len(), self.start, graph.revision());
        search.queue.push_back(self.start);

        while let Some(u) = search.queue.pop_front() {
            (self.visitor)(u);

            search.annotations[u as usize].set_color(Color::Finished);
            let current = search.annotations[u as usize];
            if self.max_depth.is_some_and(|d| current.distance() >= d) {
                continue;
            }

            for (v, w) in graph.weighted_out_neighbors_of(u) {
                let next = &mut search.annotations[v as usize];
                if next.color() == Color::Undiscovered {
                    next.reach_from(&current, w);
                    next.set_color(Color::Discovered);
                    search.queue.push_back(v);
                }
            }
        }

        trace!(
            "breadth-first search from {} reached {} of {} vertices",
            self.start,
            search.annotations.iter().filter(|a| a.is_reached()).count(),
            graph.len()
        );
    }
}

/// Single-source searches on weighted adjacency lists; see the [module docs](self).
pub trait BreadthFirst: WeightedAdjacencyList {
    /// Returns a builder for a breadth-first search from `start`
    fn bfs(&self, start: VertexId) -> BreadthFirstSearchBuilder<'_, Self, fn(VertexId)> {
        BreadthFirstSearchBuilder::new(self, start)
    }

    /// Breadth-first search from `start` without depth limit.
    ///
    /// The weighted distance of a vertex is the weight of its search-tree path, not the
    /// minimum weight.
    ///
    /// ** Panics if `start` is outside the graph, or if the weight of a search-tree path has
    /// no finite value in the weight type **
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g: Digraph<(), (), u32> =
    ///     Digraph::from_weighted_arcs(4, [(0, 1, 1), (1, 3, 1), (0, 2, 10), (2, 3, 10)]);
    /// let bfs = g.breadth_first_search(0);
    ///
    /// assert_eq!(bfs.distance(3), 2);
    /// assert_eq!(bfs.shortest_path(3), vec![0, 1, 3]);
    /// assert_eq!(bfs.weighted_distance(3), 2);
    /// ```
    fn breadth_first_search(&self, start: VertexId) -> BreadthFirstSearch<Self::Weight> {
        self.bfs(start).run()
    }

    /// Like [`BreadthFirst::breadth_first_search`] but reuses the buffers of `search`
    fn breadth_first_search_into(
        &self,
        start: VertexId,
        search: &mut BreadthFirstSearch<Self::Weight>,
    ) {
        self.bfs(start).run_into(search)
    }

    /// Minimum-weight search from `start` allowing negative edge weights.
    ///
    /// Returns the result together with an *ok* flag which is *false* iff a negative-weight
    /// cycle is reachable from `start` or the minimum weight of some reachable vertex has no
    /// finite value in the weight type; the distances and paths are meaningless in that case.
    /// On graphs without weights ([`NoWeight`]) this finds the same vertices as
    /// [`BreadthFirst::breadth_first_search`].
    ///
    /// ** Panics if `start` is outside the graph **
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g: Digraph<(), (), i32> =
    ///     Digraph::from_weighted_arcs(3, [(0, 1, 4), (0, 2, 1), (2, 1, -2)]);
    /// let (search, ok) = g.breadth_first_search_weighted_general(0);
    ///
    /// assert!(ok);
    /// assert_eq!(search.weighted_distance(1), -1);
    /// assert_eq!(search.shortest_path(1), vec![0, 2, 1]);
    /// ```
    fn breadth_first_search_weighted_general(
        &self,
        start: VertexId,
    ) -> (BreadthFirstSearch<Self::Weight>, bool) {
        let mut search = BreadthFirstSearch::new();
        let ok = self.breadth_first_search_weighted_general_into(start, &mut search);
        (search, ok)
    }

    /// Like [`BreadthFirst::breadth_first_search_weighted_general`] but reuses the buffers of
    /// `search`; returns the *ok* flag
    fn breadth_first_search_weighted_general_into(
        &self,
        start: VertexId,
        search: &mut BreadthFirstSearch<Self::Weight>,
    ) -> bool {
        search.reset(self.len(), start, self.revision());

        let mut rounds = 0;
        for _ in 1..self.len() {
            rounds += 1;
            let mut changed = false;
            for u in self.vertices_range() {
                for (v, w) in self.weighted_out_neighbors_of(u) {
                    let outcome = relax(&mut search.annotations, u, v, w);
                    changed |= matches!(outcome, Offer::Improves(_));
                }
            }

            if !changed {
                break;
            }
        }

        let ok = self.vertices_range().all(|u| {
            self.weighted_out_neighbors_of(u)
                .all(|(v, w)| offer(&search.annotations, u, v, w) == Offer::Kept)
        });
        finish_reached(&mut search.annotations);

        if ok {
            trace!("weighted search from {start} settled after {rounds} rounds");
        } else {
            debug!("negative-weight cycle or out-of-range distance reachable from {start}");
        }
        ok
    }
}

impl<G: WeightedAdjacencyList> BreadthFirst for G {}
