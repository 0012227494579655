/*!
# Shortest Paths in Acyclic Graphs

Given a topological order of an acyclic graph, minimum-weight paths from a single source can
be found with a single relaxation pass over the out-edges of the vertices in that order.
Negative edge weights are fine. The last vertex of a topological order has no out-edges into
vertices processed later, so it is skipped.
*/

use log::trace;

use super::*;

/// Result of [`DagShortestPaths::dag_search`]; see [`SearchTree`] for queries.
#[derive(Debug, Clone)]
pub struct DagSearch<W> {
    start: VertexId,
    annotations: Vec<PathAnnotation<W>>,
    revision: Revision,
}

impl<W> Default for DagSearch<W> {
    fn default() -> Self {
        Self {
            start: 0,
            annotations: Vec::new(),
            revision: 0,
        }
    }
}

impl<W: Weight> DagSearch<W> {
    /// Creates an empty result to be filled by [`DagShortestPaths::dag_search_into`]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: Weight> SearchTree for DagSearch<W> {
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

/// Single-source minimum-weight paths in directed acyclic graphs
pub trait DagShortestPaths: WeightedAdjacencyList {
    /// Computes minimum-weight paths from `start` processing vertices in `order`.
    ///
    /// `order` must be a topological order of all vertices of the graph, e.g. as returned by
    /// [`DepthFirst::topological_sort`]. For any other order the result is unspecified.
    ///
    /// ** Panics if `start` or a vertex of `order` is outside the graph, or if the minimum
    /// weight of a reachable vertex has no finite value in the weight type **
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g: Digraph<(), (), i32> =
    ///     Digraph::from_weighted_arcs(4, [(0, 1, 5), (0, 2, 3), (2, 1, -4), (1, 3, 1)]);
    /// let order = g.topological_sort();
    /// let search = g.dag_search(&order, 0);
    ///
    /// assert_eq!(search.weighted_distance(3), 0);
    /// assert_eq!(search.shortest_path(3), vec![0, 2, 1, 3]);
    /// ```
    fn dag_search(&self, order: &[VertexId], start: VertexId) -> DagSearch<Self::Weight> {
        let mut search = DagSearch::new();
        self.dag_search_into(order, start, &mut search);
        search
    }

    /// Like [`DagShortestPaths::dag_search`] but reuses the buffers of `search`
    fn dag_search_into(
        &self,
        order: &[VertexId],
        start: VertexId,
        search: &mut DagSearch<Self::Weight>,
    ) {
        debug_assert_eq!(order.len(), self.len(), "order does not cover the graph");

        reset_annotations(&mut search.annotations, self.len(), start);
        search.start = start;
        search.revision = self.revision();

        let head = order.split_last().map_or(&[][..], |(_, head)| head);
        let mut out_of_range = false;
        for &u in head {
            for (v, w) in self.weighted_out_neighbors_of(u) {
                out_of_range |= relax(&mut search.annotations, u, v, w) == Offer::OutOfRange;
            }
        }

        // an edge beyond the range may have been superseded by a later, lighter one
        if out_of_range {
            for &u in head {
                for (v, w) in self.weighted_out_neighbors_of(u) {
                    if offer(&search.annotations, u, v, w) == Offer::OutOfRange {
                        panic!("minimum weight of vertex {v} has no finite value");
                    }
                }
            }
        }
        finish_reached(&mut search.annotations);

        trace!("acyclic search from {start} over {} vertices", self.len());
    }
}

impl<G: WeightedAdjacencyList> DagShortestPaths for G {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn matches_general_search() {
        let rng = &mut Pcg64Mcg::seed_from_u64(77);
        let mut dag = DagSearch::new();
        let mut general = BreadthFirstSearch::new();

        for _ in 0..40 {
            let n = rng.random_range(1..40);
            let mut g: Digraph<(), (), i32> = Digraph::random_dag(rng, n, 0.15);
            g.randomize_weights(rng, -50..50);
            let order = g.topological_sort();

            for s in g.vertices_range() {
                g.dag_search_into(&order, s, &mut dag);
                assert!(g.breadth_first_search_weighted_general_into(s, &mut general));
                assert!(dag.is_current(&g));

                for v in g.vertices_range() {
                    assert_eq!(dag.is_reachable(v), general.is_reachable(v));
                    assert_eq!(dag.weighted_distance(v), general.weighted_distance(v));
                    assert_eq!(
                        dag.shortest_path(v).first().copied(),
                        dag.is_reachable(v).then_some(s)
                    );
                }
            }
        }
    }

    #[test]
    fn matches_reference_on_shuffled_ids() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for _ in 0..20 {
            // sorting roots by a random key scatters the acyclic structure over the IDs
            let mut g: Digraph<u32, (), i32> = Digraph::random_dag(rng, 30, 0.1);
            for u in g.vertices_range() {
                *g.value_mut(u) = rng.random();
            }
            g.sort_roots(|a, b| a.value().cmp(b.value()));
            g.randomize_weights(rng, -10..10);

            let order = g.topological_sort();
            let reference = naive_weighted_distances(&g);
            let search = g.dag_search(&order, 0);

            for v in g.vertices_range() {
                let found = search
                    .is_reachable(v)
                    .then(|| search.weighted_distance(v) as i64);
                assert_eq!(found, reference[0][v as usize]);
            }
        }
    }

    #[test]
    fn clothing_weights() {
        let (g, names) = clothing();
        let mut minutes: Digraph<&str, (), u32> = {
            let mut h = Digraph::new();
            for u in g.vertices_range() {
                h.add_vertex(*g.value(u));
            }
            for Arc(u, v) in g.ordered_arcs() {
                h.add_weighted_edge(u, v, (), 2);
            }
            h
        };
        let undershorts = names.iter().position(|&x| x == "undershorts").unwrap() as VertexId;
        let jacket = names.iter().position(|&x| x == "jacket").unwrap() as VertexId;
        let watch = names.iter().position(|&x| x == "watch").unwrap() as VertexId;

        let order = minutes.topological_sort();
        let search = minutes.dag_search(&order, undershorts);
        // undershorts -> pants -> belt -> jacket
        assert_eq!(search.weighted_distance(jacket), 6);
        assert_eq!(search.distance(jacket), 3);
        assert!(!search.is_reachable(watch));
        assert!(search.weighted_distance(watch).is_positive_infinity());

        assert!(search.is_current(&minutes));
        minutes.add_weighted_edge(watch, jacket, (), 1);
        assert!(!search.is_current(&minutes));
    }

    #[test]
    fn unweighted_reaches_descendants() {
        let g: Digraph<(), ()> = Digraph::from_arcs(4, [(0, 1), (1, 2), (3, 2)]);
        let order = g.topological_sort();
        let search = g.dag_search(&order, 0);

        assert!(search.is_reachable(2));
        assert_eq!(search.distance(2), 2);
        assert_eq!(search.shortest_path(2), vec![0, 1, 2]);
        assert!(!search.is_reachable(3));
        assert!(search.shortest_path(3).is_empty());
    }

    #[test]
    fn heavy_edge_superseded() {
        let g: Digraph<(), (), u8> =
            Digraph::from_weighted_arcs(4, [(0, 1, 200), (1, 3, 100), (0, 2, 1), (2, 3, 1)]);
        let order = g.topological_sort();
        let search = g.dag_search(&order, 0);

        assert_eq!(search.weighted_distance(3), 2);
        assert_eq!(search.shortest_path(3), vec![0, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn minimum_weight_below_range() {
        let g: Digraph<(), (), i8> = Digraph::from_weighted_arcs(3, [(0, 1, -100), (1, 2, -100)]);
        let order = g.topological_sort();
        g.dag_search(&order, 0);
    }

    #[test]
    fn single_vertex_order() {
        let g: Digraph<(), (), i32> = Digraph::from_arcs(1, std::iter::empty::<Arc>());
        let search = g.dag_search(&[0], 0);
        assert_eq!(search.shortest_path(0), vec![0]);
        assert_eq!(search.weighted_distance(0), 0);
    }
}
