/*!
# Graph Algorithms

Searches on anything implementing the adjacency traits of [`ops`](crate::ops), most notably
[`Digraph`](crate::repr::Digraph). All algorithms are re-exported at the top level of this
module, so you can simply do:
```rust
use digraphs::algo::*;
```

- [`DepthFirst`]: full depth-first search with discovery/finishing times, edge
  classification, cycle detection and topological sorting,
- [`BreadthFirst`]: breadth-first search (fewest edges) and a general minimum-weight search
  that tolerates negative weights and reports negative cycles,
- [`DagShortestPaths`]: minimum-weight paths in acyclic graphs along a topological order.

Results are plain, reusable buffers indexed by [`VertexId`]; every search has an `*_into`
variant that refills an existing result instead of allocating a new one.
*/

mod bfs;
mod dag;
mod dfs;
mod search;

use crate::{prelude::*, utils::*};

pub use bfs::*;
pub use dag::*;
pub use dfs::*;
pub use search::*;
