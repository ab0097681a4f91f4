use std::collections::VecDeque;

use crate::Node;

/// A FIFO queue of vertices.
///
/// Used as the frontier of breadth-first traversal: vertices are pushed at
/// the tail when first discovered and popped at the head, so each vertex is
/// enqueued at most once per traversal.
///
/// Popping an empty queue yields `None` rather than a sentinel vertex, so
/// callers cannot mistake "queue drained" for a legitimate value.
#[derive(Debug, Default, Clone)]
pub struct VertexQueue {
    items: VecDeque<Node>,
}

impl VertexQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex at the tail in O(1)
    pub fn push(&mut self, u: Node) {
        self.items.push_back(u);
    }

    /// Removes and returns the vertex at the head, or `None` if the queue is empty
    pub fn pop(&mut self) -> Option<Node> {
        self.items.pop_front()
    }

    /// Returns *true* if the queue holds no vertices
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of queued vertices
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = VertexQueue::new();
        assert!(queue.is_empty());

        for u in [3, 1, 4, 1, 5] {
            queue.push(u);
        }
        assert_eq!(queue.len(), 5);

        let drained: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(drained, vec![3, 1, 4, 1, 5]);
    }

    #[test]
    fn pop_on_empty() {
        let mut queue = VertexQueue::new();
        assert_eq!(queue.pop(), None);

        queue.push(7);
        assert_eq!(queue.pop(), Some(7));
        assert_eq!(queue.pop(), None);
    }
}
