/*!
# Graph Algorithms

This module provides the tree-building algorithms of this crate. All of them
are exposed as traits implemented directly on the graph representations, so
you can simply do:
```rust
use wgraphs::{prelude::*, algo::*};
```
and call `graph.bfs_tree(0)`, `graph.prim_mst()`, etc.

Each algorithm treats its input graph as read-only, allocates its own local
working state ([queue](crate::utils::VertexQueue),
[priority queue](crate::utils::EdgeQueue),
[union-find](crate::utils::UnionFind), vertex-indexed arrays) and returns a
freshly constructed graph of the same vertex count representing the computed
tree or forest. Nothing is retained between calls.
*/

mod mst;
mod shortest_path;
mod traversal;

use crate::{prelude::*, utils::*};

pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;

/// Defensive entry check shared by all algorithms: construction already
/// forbids zero-vertex graphs, so this only fires on a violated invariant.
pub(crate) fn ensure_nonempty<G: GraphNodeOrder>(graph: &G) -> Result<()> {
    if graph.is_empty() {
        Err(GraphError::EmptyGraph)
    } else {
        Ok(())
    }
}

pub(crate) fn ensure_vertex<G: GraphNodeOrder>(graph: &G, u: Node) -> Result<()> {
    if u < graph.number_of_nodes() {
        Ok(())
    } else {
        Err(GraphError::InvalidVertex(u))
    }
}
