/*!
# Graph Generators

Random digraphs for tests and benchmarks.

[`Gnp`] is a builder-style `G(n,p)` arc generator: configure it (e.g. `.vertices(n).prob(p)`)
and then draw arcs via [`ArcGenerator::generate`] or [`ArcGenerator::stream`].
[`RandomDigraph`] wraps it into ready-made constructors for [`Digraph`]s,
[`RandomWeights`] assigns uniformly random weights to an existing graph, and
[`GeneratorSubstructures`] adds paths and cycles to it.

```rust
use digraphs::{prelude::*, gens::*, algo::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let mut g: Digraph<(), (), i32> = Digraph::random_dag(rng, 20, 0.2);
g.randomize_weights(rng, -5..10);

assert!(!g.contains_cycles());
```
*/

use std::ops::Range;

use rand::{Rng, distr::uniform::SampleUniform};

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Generators that allow setting the number of vertices
pub trait NumVerticesGen {
    /// Sets the number of vertices
    fn vertices(self, n: NumVertices) -> Self;
}

/// Generators that allow setting the expected average out-degree
pub trait AverageDegreeGen {
    /// Sets the expected average out-degree
    fn avg_deg(self, deg: f64) -> Self;
}

/// A configurable random arc generator.
pub trait ArcGenerator {
    /// Collects all arcs of [`ArcGenerator::stream`]
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Arc> {
        self.stream(rng).collect()
    }

    /// Lazily draws the arcs of one random instance
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Arc>;
}

/// Constructors for random [`Digraph`]s with default payloads and zero weights.
pub trait RandomDigraph: Sized {
    /// `G(n,p)` digraph: every arc (including self-loops) is present independently with
    /// probability `p`
    fn gnp<R: Rng>(rng: &mut R, n: NumVertices, p: f64) -> Self;

    /// Like [`RandomDigraph::gnp`] but without self-loops
    fn gnp_no_loops<R: Rng>(rng: &mut R, n: NumVertices, p: f64) -> Self;

    /// Acyclic `G(n,p)` digraph: each arc `(u, v)` with `u < v` is present independently
    /// with probability `p`
    fn random_dag<R: Rng>(rng: &mut R, n: NumVertices, p: f64) -> Self;
}

impl<V, E, W> RandomDigraph for Digraph<V, E, W>
where
    V: Default,
    E: Default,
    W: Weight,
{
    fn gnp<R: Rng>(rng: &mut R, n: NumVertices, p: f64) -> Self {
        Digraph::from_arcs(n, Gnp::new().vertices(n).prob(p).stream(rng))
    }

    fn gnp_no_loops<R: Rng>(rng: &mut R, n: NumVertices, p: f64) -> Self {
        Digraph::from_arcs(n, Gnp::new().vertices(n).prob(p).no_loops().stream(rng))
    }

    fn random_dag<R: Rng>(rng: &mut R, n: NumVertices, p: f64) -> Self {
        Digraph::from_arcs(n, Gnp::new().vertices(n).prob(p).acyclic().stream(rng))
    }
}

/// Random edge weights
pub trait RandomWeights<W> {
    /// Replaces every edge weight by a value drawn uniformly from `range`
    /// ** Panics if `range` is empty **
    fn randomize_weights<R: Rng>(&mut self, rng: &mut R, range: Range<W>);
}

impl<V, E, W> RandomWeights<W> for Digraph<V, E, W>
where
    W: Weight + SampleUniform,
{
    fn randomize_weights<R: Rng>(&mut self, rng: &mut R, range: Range<W>) {
        for u in self.vertices_range() {
            for edge in self.edges_of_mut(u) {
                edge.set_weight(rng.random_range(range.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::*;

    #[test]
    fn random_dags_are_acyclic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);
        for n in [1, 2, 10, 50] {
            for p in [0.0, 0.3, 1.0] {
                let g: Digraph<(), ()> = Digraph::random_dag(rng, n, p);
                assert_eq!(g.len(), n as usize);
                assert!(g.arcs().all(|a| a.is_forward()));
                assert!(!g.contains_cycles());
            }
        }

        let complete: Digraph<(), ()> = Digraph::random_dag(rng, 10, 1.0);
        assert_eq!(complete.number_of_edges(), 45);
    }

    #[test]
    fn no_loops() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let g: Digraph<(), ()> = Digraph::gnp_no_loops(rng, 30, 0.9);
        assert!(!g.contains_loops());
        assert!(g.is_simple());

        let full: Digraph<(), ()> = Digraph::gnp(rng, 12, 1.0);
        assert_eq!(full.number_of_edges(), 144);
        assert!(full.contains_loops());
    }

    #[test]
    fn weights_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let mut g: Digraph<(), (), f64> = Digraph::gnp(rng, 20, 0.3);
        g.randomize_weights(rng, -1.5..2.5);

        let weights = g
            .vertices()
            .flat_map(|v| v.edges().iter().map(|e| e.weight()))
            .collect_vec();
        assert_eq!(weights.len(), g.number_of_edges() as usize);
        assert!(weights.iter().all(|w| (-1.5..2.5).contains(w)));
        assert!(weights.iter().any(|&w| w < 0.0));
    }
}
