/*!
`digraphs` is a directed multigraph library with payload-carrying vertices and edges and
numeric edge weights, together with the classical search algorithms on top of it.

# Representation

Vertices are identified by [`VertexId`](crate::vertex::VertexId)s (`u32`) in the range `0..n`;
the ID of a vertex always equals its position in the graph. A [`Digraph<V, E, W>`](repr::Digraph)
owns its vertices (payload `V`) and every vertex owns its outgoing edges (payload `E`,
weight `W`). Parallel edges and self-loops are allowed.

Weights implement [`Weight`](crate::weight::Weight), which provides `+inf`/`-inf` sentinels
for every numeric type and an overflow-aware [`infinite_sum`](crate::weight::Weight::infinite_sum).
Graphs without weights use the zero-sized [`NoWeight`](crate::weight::NoWeight).

From a graph one can compute dense [adjacency matrices](repr::AdjacencyMatrix) and
[weighted adjacency matrices](repr::WeightedAdjacencyMatrix) whose cells are combined by an
[`EdgeWeightReducer`](crate::reduce::EdgeWeightReducer). Every structural change of the graph
bumps its [revision](ops::GraphRevision) and invalidates previously computed matrices and
search results.

# Usage

- [`prelude`] includes vertices, edges, weights, reducers, errors, the adjacency traits and
  the graph representation,
- [`algo`] includes depth-first search (edge classification, cycle detection, topological
  sort), breadth-first search, a general weighted search tolerating negative weights and
  shortest paths in acyclic graphs,
- [`gens`] includes random digraph generators and substructures (paths, cycles),
- [`utils`] includes small helpers such as reusable buffers.

In most use-cases, `use digraphs::{prelude::*, algo::*};` suffices.

```rust
use digraphs::{prelude::*, algo::*};

let mut g: Digraph<&str, (), u32> = Digraph::new();
let a = g.add_vertex("a");
let b = g.add_vertex("b");
let c = g.add_vertex("c");
g.add_edge(a, b, ());
g.add_weighted_edge(b, c, (), 7);

assert_eq!(g.topological_sort(), vec![a, b, c]);
assert_eq!(g.breadth_first_search(a).shortest_path(c), vec![a, b, c]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod ops;
pub mod reduce;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod vertex;
pub mod weight;

/// `digraphs::prelude` includes definitions for vertices, edges and weights, the reducers, the
/// error type, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, reduce::*, repr::*, vertex::*, weight::*};
}
