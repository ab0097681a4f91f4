/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : Every edge carries a signed integer weight
- undirected : `Edge(u, v, w)` is treated as equivalent to `Edge(v, u, w)`
- simple : No self-loops, and at most one edge per vertex pair

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node, Weight)` with `Weight = i64`.

Graphs are stored as adjacency lists: one neighborhood per vertex, with every edge mirrored
in both endpoint neighborhoods. See the [`repr`] module for the available storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)

# Design

Construction and mutation return [`Result`](errors::Result)s instead of panicking:
adding an edge with an out-of-range endpoint, adding a self-loop, or removing an absent
edge all surface a typed [`GraphError`](errors::GraphError). Negative weights may be
*stored* freely; only algorithms whose correctness depends on non-negativity
(currently Dijkstra) reject them at call time.

All algorithms are implemented via traits on the graph itself, so after

```rust
use wgraphs::{prelude::*, algo::*};
```

you can directly call `graph.bfs_tree(s)`, `graph.dfs_forest(s)`, `graph.dijkstra_tree(s)`,
`graph.prim_mst()` and `graph.kruskal_mst()`. Each returns a freshly built graph holding
the computed tree or forest.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all standard graph representations,
- [`algo`] includes the algorithm traits implemented on graphs itself (traversals, shortest paths, spanning trees),
- [`gens`] includes random weighted-graph generators for fuzzing and benchmarks,
- [`io`] includes handlers for reading and writing graphs in the supported file formats,
- [`utils`] includes the supporting data structures (FIFO queue, edge priority queue, union-find).

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod errors;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use errors::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, errors::*, node::*, ops::*, repr::*};
}
