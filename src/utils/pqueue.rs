use itertools::Itertools;

use crate::Edge;

/// A min-priority multiset of edges, keyed by weight.
///
/// Backed by an unsorted growable array: [`EdgeQueue::push`] appends in
/// amortized O(1), [`EdgeQueue::pop_min`] scans all live entries for the
/// smallest weight and removes it by swapping with the last element.
///
/// Ties between equally light edges resolve to an arbitrary minimal entry.
/// Consumers must not rely on a specific tie choice.
///
/// Popping an empty queue yields `None` rather than a fabricated edge.
#[derive(Debug, Default, Clone)]
pub struct EdgeQueue {
    edges: Vec<Edge>,
}

impl EdgeQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with pre-allocated room for `cap` edges
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            edges: Vec::with_capacity(cap),
        }
    }

    /// Appends an edge in amortized O(1)
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Removes and returns an edge of minimum weight, or `None` if the queue
    /// is empty
    pub fn pop_min(&mut self) -> Option<Edge> {
        let pos = self.edges.iter().position_min_by_key(|e| e.weight())?;
        Some(self.edges.swap_remove(pos))
    }

    /// Returns *true* if the queue holds no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the number of queued edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }
}
