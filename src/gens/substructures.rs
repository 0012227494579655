/*!
# Substructure Generators

Adds **paths** and **cycles** between existing vertices of a [`Digraph`]; handy to plant
known structure into random instances.

# Example

```rust
use digraphs::{prelude::*, gens::*};

let mut g: Digraph<(), (), u32> = Digraph::from_arcs(5, std::iter::empty::<Arc>());
g.connect_path([0, 1, 2], 1);
g.connect_cycle([2, 3, 4], 5);

assert_eq!(
    g.ordered_arcs(),
    vec![Arc(0, 1), Arc(1, 2), Arc(2, 3), Arc(3, 4), Arc(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Creates additional substructures inside an already existing graph.
pub trait GeneratorSubstructures<W> {
    /// Connects consecutive vertices by an edge of weight `weight`
    /// ** Panics if a vertex is outside the graph **
    fn connect_path<P>(&mut self, vertices_on_path: P, weight: W)
    where
        P: IntoIterator<Item = VertexId>;

    /// Like [`GeneratorSubstructures::connect_path`] and additionally connects the last vertex
    /// back to the first one. A single vertex gets a self-loop.
    /// ** Panics if a vertex is outside the graph **
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C, weight: W)
    where
        C: IntoIterator<Item = VertexId>;
}

impl<V, E, W> GeneratorSubstructures<W> for Digraph<V, E, W>
where
    E: Default,
    W: Weight,
{
    fn connect_path<P>(&mut self, vertices_on_path: P, weight: W)
    where
        P: IntoIterator<Item = VertexId>,
    {
        for (u, v) in vertices_on_path.into_iter().tuple_windows() {
            self.add_weighted_edge(u, v, E::default(), weight);
        }
    }

    fn connect_cycle<C>(&mut self, vertices_in_cycle: C, weight: W)
    where
        C: IntoIterator<Item = VertexId>,
    {
        let mut iter = vertices_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_weighted_edge(prev, cur, E::default(), weight);
                prev = cur;
            }

            self.add_weighted_edge(prev, first, E::default(), weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::*;

    #[test]
    fn planted_cycle_is_found() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        for _ in 0..10 {
            let mut g: Digraph<(), (), i32> = Digraph::random_dag(rng, 25, 0.1);
            assert!(!g.contains_cycles());

            g.connect_path([3, 9, 17], 2);
            assert!(!g.contains_cycles());

            g.connect_cycle([20, 5, 11], -1);
            let dfs = g.depth_first_search();
            assert!(dfs.contains_cycles());
            assert!(
                [(20, 5), (5, 11), (11, 20)]
                    .iter()
                    .any(|&(u, v)| dfs.classify_edge(u, v) == EdgeClass::Back)
            );

            let (_, ok) = g.breadth_first_search_weighted_general(20);
            assert!(!ok);
        }
    }

    #[test]
    fn single_vertex_cycle() {
        let mut g: Digraph<(), ()> = Digraph::from_arcs(2, std::iter::empty::<Arc>());
        g.connect_cycle([1], NoWeight);
        g.connect_cycle(std::iter::empty(), NoWeight);
        assert_eq!(g.ordered_arcs(), vec![Arc(1, 1)]);
    }
}
