/*!
# Graph Representation

[`Digraph`] is the single graph representation of this crate: an ordered vector of owned
vertices, each owning its outgoing edges. Alongside it live the dense matrices that can be
computed from it ([`AdjacencyMatrix`], [`WeightedAdjacencyMatrix`]).

## Revisions and staleness

A matrix or search result describes one structural state of the graph. Adding vertices or
edges, sorting, or taking mutable access to payloads and weights yields a new
[`Revision`](crate::ops::Revision); anything computed before is stale from then on.
Revisions are drawn from a counter shared by all graphs, so a matrix computed for one graph
(or for a diverged clone of it) is stale for every other:

- graph-level matrix queries ([`Digraph::indegree`], [`Digraph::outdegree`],
  [`Digraph::adjacency`], [`Digraph::weighted_adjacency`]) panic on a stale matrix,
- search results can be checked with their `is_current` method; querying a stale result is
  a caller error and yields meaningless (though memory-safe) data.
*/

mod digraph;
mod matrix;

pub use digraph::*;
pub use matrix::*;
