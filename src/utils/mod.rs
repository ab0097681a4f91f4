/*!
# Utilities

Provides the algorithm-local working structures:
- [`VertexQueue`]: the FIFO frontier used by breadth-first traversal,
- [`EdgeQueue`]: the min-priority edge queue used by Dijkstra, Prim and Kruskal,
- [`UnionFind`]: the disjoint-set structure used by Kruskal's cycle check,

plus the [`Probability`] helper used when validating generator parameters.

All three structures are rebuilt fresh for every algorithm invocation and are
never shared between calls.
*/

use num::{One, Zero};

pub mod pqueue;
pub mod queue;
pub mod union_find;

pub use pqueue::EdgeQueue;
pub use queue::VertexQueue;
pub use union_find::UnionFind;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
