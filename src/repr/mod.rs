/*!
# Graph Representations

A graph is a `Vec` of per-vertex neighborhoods plus an edge counter. The
[`Neighborhood`] trait abstracts over the container storing one vertex's
adjacency records, so representations only differ in their memory layout:

- [`AdjArrayUndir`]: each neighborhood is a plain `Vec<Neighbor>`,
- [`SparseAdjArrayUndir`]: each neighborhood is a `SmallVec`, keeping
  low-degree vertices inline without a heap allocation.

Both store every undirected edge twice (once per endpoint) with identical
weights. Records are appended in insertion order; removals swap in the last
record, so the per-vertex order is stable only in the absence of deletions.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood for a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all records in the Neighborhood, in a stable order
    fn neighbors(&self) -> impl Iterator<Item = Neighbor> + '_;

    /// Returns the stored weight towards `v`, if `v` is a neighbor
    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.neighbors().find(|nb| nb.node == v).map(|nb| nb.weight)
    }

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_to(v).is_some()
    }

    /// Adds a record to the Neighborhood without checking if this neighbor
    /// exists beforehand. Unchecked use can lead to Multi-Edges.
    fn add_neighbor(&mut self, v: Node, w: Weight);

    /// Overwrites the weight towards `v` if `v` is already a neighbor.
    /// Returns *true* exactly if a record was updated.
    fn set_weight(&mut self, v: Node, w: Weight) -> bool;

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, v: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}
