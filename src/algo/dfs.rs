/*!
# Depth-First Search

A full depth-first search visits every vertex: roots are tried in ID order and each root's
out-edges are explored in stored order. The result ([`DepthFirstSearch`]) records discovery
and finishing times for every vertex, from which edges can be classified and a topological
order derived.

Times are drawn from a single counter starting at `1`, so the intervals
`[discovered, finished]` of any two vertices are either disjoint or nested.
*/

use log::{debug, trace};

use super::*;

/// Timestamp of a depth-first search
pub type Time = u64;

/// Class of an edge `(u, v)` with respect to a depth-first forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// `v` was discovered through this edge
    Tree,
    /// `v` is an ancestor of `u` (or `u == v`); closes a cycle
    Back,
    /// `v` is a proper descendant of `u` that was discovered through another edge
    Forward,
    /// `u` and `v` are not related in the forest
    Cross,
}

/// Per-vertex result of a depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfsAnnotation {
    predecessor: Option<OptionalVertex>,
    discovered: Time,
    finished: Time,
    color: Color,
}

impl DfsAnnotation {
    const UNDISCOVERED: Self = Self {
        predecessor: None,
        discovered: 0,
        finished: 0,
        color: Color::Undiscovered,
    };

    /// Predecessor in the depth-first forest; `None` for roots
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor.map(|p| p.get())
    }

    /// Time the vertex was first reached
    pub fn discovered(&self) -> Time {
        self.discovered
    }

    /// Time all out-edges of the vertex had been explored
    pub fn finished(&self) -> Time {
        self.finished
    }

    /// Always [`Color::Finished`] after a completed search
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Result of a full depth-first search; see the [module docs](self).
///
/// The struct doubles as a reusable buffer for [`DepthFirst::depth_first_search_into`].
#[derive(Debug, Clone, Default)]
pub struct DepthFirstSearch {
    annotations: Vec<DfsAnnotation>,
    back_edges: usize,
    revision: Revision,
    stack: Vec<(VertexId, NumEdges)>,
}

impl DepthFirstSearch {
    /// Creates an empty result to be filled by [`DepthFirst::depth_first_search_into`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices covered by the search
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Returns *true* if the searched graph had no vertices
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Graph revision the search was computed at
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Returns *true* if `graph` has not been modified since the search was computed
    pub fn is_current<G: GraphRevision>(&self, graph: &G) -> bool {
        graph.revision() == self.revision
    }

    /// All annotations, indexed by [`VertexId`]
    pub fn annotations(&self) -> &[DfsAnnotation] {
        &self.annotations
    }

    /// Annotation of `u`
    /// ** Panics if `u` is outside the searched graph **
    pub fn annotation(&self, u: VertexId) -> &DfsAnnotation {
        &self.annotations[u as usize]
    }

    /// Discovery time of `u`
    pub fn discovery_time(&self, u: VertexId) -> Time {
        self.annotation(u).discovered
    }

    /// Finishing time of `u`
    pub fn finish_time(&self, u: VertexId) -> Time {
        self.annotation(u).finished
    }

    /// Color of `u`; [`Color::Finished`] for every vertex of a completed search
    pub fn color(&self, u: VertexId) -> Color {
        self.annotation(u).color
    }

    /// Predecessor of `u` in the depth-first forest
    pub fn predecessor(&self, u: VertexId) -> Option<VertexId> {
        self.annotation(u).predecessor()
    }

    /// Returns *true* if the search encountered an edge into a vertex that was still being
    /// explored, i.e. if the graph has a directed cycle (self-loops included)
    pub fn contains_cycles(&self) -> bool {
        self.back_edges > 0
    }

    /// Number of back edges encountered during the search
    pub fn number_of_back_edges(&self) -> usize {
        self.back_edges
    }

    /// Classifies the edge `(u, v)` by comparing the discovery/finishing intervals of its
    /// endpoints.
    ///
    /// ** Panics if `(u, v)` cannot be an edge of the searched graph **
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g: Digraph<(), ()> = Digraph::from_arcs(3, [(0, 1), (1, 2), (2, 0), (0, 2)]);
    /// let dfs = g.depth_first_search();
    ///
    /// assert_eq!(dfs.classify_edge(0, 1), EdgeClass::Tree);
    /// assert_eq!(dfs.classify_edge(2, 0), EdgeClass::Back);
    /// assert_eq!(dfs.classify_edge(0, 2), EdgeClass::Forward);
    /// ```
    pub fn classify_edge(&self, u: VertexId, v: VertexId) -> EdgeClass {
        if u == v {
            return EdgeClass::Back;
        }

        let (a, b) = (self.annotation(u), self.annotation(v));
        let (du, fu, dv, fv) = (a.discovered, a.finished, b.discovered, b.finished);

        if du < dv && dv < fv && fv < fu {
            if b.predecessor() == Some(u) {
                EdgeClass::Tree
            } else {
                EdgeClass::Forward
            }
        } else if dv < du && du < fu && fu < fv {
            EdgeClass::Back
        } else if dv < fv && fv < du && du < fu {
            EdgeClass::Cross
        } else {
            panic!("({u}, {v}) cannot be an edge of the searched graph: [{du}, {fu}] [{dv}, {fv}]")
        }
    }

    /// Returns all vertices by decreasing finishing time, i.e. a topological order of the
    /// searched graph.
    ///
    /// ** Panics if the graph contains a cycle **
    pub fn topological_sort(&self) -> Vec<VertexId> {
        let mut order = Vec::new();
        self.topological_sort_into(&mut order);
        order
    }

    /// Like [`DepthFirstSearch::topological_sort`] but writes into an existing buffer
    /// ** Panics if the graph contains a cycle **
    pub fn topological_sort_into(&self, order: &mut Vec<VertexId>) {
        if let Err(e) = self.try_topological_sort_into(order) {
            panic!("cannot sort topologically: {e}");
        }
    }

    /// Non-panicking version of [`DepthFirstSearch::topological_sort`]
    pub fn try_topological_sort(&self) -> Result<Vec<VertexId>, GraphError> {
        let mut order = Vec::new();
        self.try_topological_sort_into(&mut order)?;
        Ok(order)
    }

    /// Non-panicking version of [`DepthFirstSearch::topological_sort_into`];
    /// `order` is left empty on error
    pub fn try_topological_sort_into(&self, order: &mut Vec<VertexId>) -> Result<(), GraphError> {
        order.clear();
        if self.contains_cycles() {
            debug!("refusing topological sort: {} back edges", self.back_edges);
            return Err(GraphError::ContainsCycle);
        }

        order.extend(0..self.len() as VertexId);
        order.sort_by(|&a, &b| self.finish_time(b).cmp(&self.finish_time(a)));
        Ok(())
    }

    fn compute<G: AdjacencyList>(&mut self, graph: &G) {
        self.annotations.reset_to(graph.len(), DfsAnnotation::UNDISCOVERED);
        self.back_edges = 0;
        self.revision = graph.revision();
        self.stack.clear();

        let mut time: Time = 0;
        for root in graph.vertices_range() {
            if self.annotations[root as usize].color != Color::Undiscovered {
                continue;
            }

            time += 1;
            self.discover(root, None, time);

            while let Some(&(u, i)) = self.stack.last() {
                if i == graph.out_degree_of(u) {
                    time += 1;
                    let a = &mut self.annotations[u as usize];
                    a.finished = time;
                    a.color = Color::Finished;
                    self.stack.pop();
                    continue;
                }

                let top = self.stack.len() - 1;
                self.stack[top].1 += 1;

                let v = graph.ith_out_neighbor(u, i);
                match self.annotations[v as usize].color {
                    Color::Undiscovered => {
                        time += 1;
                        self.discover(v, Some(u), time);
                    }
                    Color::Discovered => self.back_edges += 1,
                    Color::Finished => {}
                }
            }
        }

        trace!(
            "depth-first search over {} vertices: {} back edges",
            graph.len(),
            self.back_edges
        );
    }

    fn discover(&mut self, u: VertexId, predecessor: Option<VertexId>, time: Time) {
        self.annotations[u as usize] = DfsAnnotation {
            predecessor: predecessor.and_then(OptionalVertex::new),
            discovered: time,
            finished: 0,
            color: Color::Discovered,
        };
        self.stack.push((u, 0));
    }
}

/// Depth-first search and the queries derived from it
pub trait DepthFirst: AdjacencyList {
    /// Runs a full depth-first search over all vertices.
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g: Digraph<(), ()> = Digraph::from_arcs(3, [(0, 1), (1, 2)]);
    /// let dfs = g.depth_first_search();
    ///
    /// assert_eq!(dfs.discovery_time(0), 1);
    /// assert_eq!(dfs.finish_time(0), 6);
    /// assert_eq!(dfs.predecessor(2), Some(1));
    /// ```
    fn depth_first_search(&self) -> DepthFirstSearch {
        let mut search = DepthFirstSearch::new();
        self.depth_first_search_into(&mut search);
        search
    }

    /// Like [`DepthFirst::depth_first_search`] but reuses the buffers of `search`
    fn depth_first_search_into(&self, search: &mut DepthFirstSearch) {
        search.compute(self);
    }

    /// Returns *true* if the graph has a directed cycle; self-loops count as cycles
    fn contains_cycles(&self) -> bool {
        self.depth_first_search().contains_cycles()
    }

    /// Returns the vertices in topological order, i.e. for every edge `(u, v)`, `u` comes
    /// before `v`.
    ///
    /// ** Panics if the graph contains a cycle **
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g: Digraph<(), ()> = Digraph::from_arcs(3, [(2, 0), (0, 1)]);
    /// assert_eq!(g.topological_sort(), vec![2, 0, 1]);
    /// ```
    fn topological_sort(&self) -> Vec<VertexId> {
        self.depth_first_search().topological_sort()
    }

    /// Non-panicking version of [`DepthFirst::topological_sort`]
    fn try_topological_sort(&self) -> Result<Vec<VertexId>, GraphError> {
        self.depth_first_search().try_topological_sort()
    }
}

impl<G: AdjacencyList> DepthFirst for G {}
