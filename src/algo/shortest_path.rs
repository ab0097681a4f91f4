/*!
Single-source shortest paths (Dijkstra), materialized as a tree.

The implementation uses the lazy-deletion pattern: instead of decreasing the
key of a queued vertex, every improvement pushes a fresh entry keyed by the
new tentative distance, and entries whose destination is already finalized
are discarded on extraction.
*/

use bitvector::BitVector;

use super::*;

/// Provides Dijkstra's single-source shortest-path tree on graph representations.
pub trait ShortestPaths: AdjacencyList + GraphEdgeEditing {
    /// Computes the shortest-path tree from `start`.
    ///
    /// Tentative distances start at `Weight::MAX` ("unreached") except for
    /// `start` at `0`. The [`EdgeQueue`] acts as an event queue keyed by
    /// tentative distance and is seeded with a self-entry for `start`;
    /// extracting the global minimum finalizes its destination, after which
    /// every incident edge is relaxed and strict improvements are pushed as
    /// new entries.
    ///
    /// In the returned tree, each reached non-start vertex `v` hangs off its
    /// parent `p` with weight `dist[v] - dist[p]`, i.e. the weight of the
    /// input edge that achieved `v`'s shortest distance. Summing the weights
    /// from `start` to `v` therefore reproduces `v`'s shortest-path
    /// distance. Unreachable vertices remain isolated.
    ///
    /// Fails with [`GraphError::EmptyGraph`] on a zero-vertex input,
    /// [`GraphError::InvalidVertex`] if `start >= n`, and
    /// [`GraphError::NegativeWeight`] if any stored edge weight is negative.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 2)]).unwrap();
    /// let tree = g.dijkstra_tree(0).unwrap();
    ///
    /// // 0 -> 2 -> 1 is shorter than the direct edge 0 -> 1
    /// assert_eq!(tree.weight_of(0, 2), Some(1));
    /// assert_eq!(tree.weight_of(2, 1), Some(2));
    /// assert!(!tree.has_edge(0, 1));
    /// ```
    fn dijkstra_tree(&self, start: Node) -> Result<Self> {
        ensure_nonempty(self)?;
        ensure_vertex(self, start)?;
        if self.has_negative_weights() {
            return Err(GraphError::NegativeWeight);
        }

        let n = self.len();
        let mut dist = vec![Weight::MAX; n];
        let mut parent = vec![INVALID_NODE; n];
        let mut finalized = BitVector::new(n);
        let mut queue = EdgeQueue::new();

        dist[start as usize] = 0;
        queue.push(Edge(start, start, 0));

        while let Some(Edge(_, u, _)) = queue.pop_min() {
            if finalized.contains(u as usize) {
                continue; // stale entry, a shorter one was extracted earlier
            }
            finalized.insert(u as usize);

            let du = dist[u as usize];
            for Neighbor { node: v, weight } in self.neighbors_of(u) {
                if finalized.contains(v as usize) {
                    continue;
                }
                let candidate = du.saturating_add(weight);
                if candidate < dist[v as usize] {
                    dist[v as usize] = candidate;
                    parent[v as usize] = u;
                    queue.push(Edge(u, v, candidate));
                }
            }
        }

        let mut tree = Self::new(self.number_of_nodes())?;
        for v in self.vertices() {
            let p = parent[v as usize];
            if p != INVALID_NODE {
                tree.add_edge(p, v, dist[v as usize] - dist[p as usize])?;
            }
        }

        Ok(tree)
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList + GraphEdgeEditing {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sums tree-edge weights from `start` down to every vertex
    fn tree_distances(tree: &AdjArrayUndir, start: Node) -> Vec<Option<Weight>> {
        let mut dist = vec![None; tree.len()];
        dist[start as usize] = Some(0);

        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            let du = dist[u as usize].unwrap();
            for Neighbor { node: v, weight } in tree.neighbors_of(u) {
                if dist[v as usize].is_none() {
                    dist[v as usize] = Some(du + weight);
                    stack.push(v);
                }
            }
        }

        dist
    }

    fn weighted_example() -> AdjArrayUndir {
        AdjArrayUndir::from_edges(
            5,
            [(0, 1, 4), (0, 2, 1), (0, 3, 3), (1, 2, 2), (1, 4, 6), (3, 4, 5)],
        )
        .unwrap()
    }

    #[test]
    fn distances_from_zero() {
        let graph = weighted_example();
        let tree = graph.dijkstra_tree(0).unwrap();

        let dist = tree_distances(&tree, 0);
        assert_eq!(
            dist,
            vec![Some(0), Some(3), Some(1), Some(3), Some(8)]
        );
    }

    #[test]
    fn picks_indirect_shorter_path() {
        let graph = weighted_example();
        let tree = graph.dijkstra_tree(0).unwrap();

        // vertex 1 is reached over 2 (1 + 2 = 3 < 4)
        assert!(tree.has_edge(2, 1));
        assert!(!tree.has_edge(0, 1));
        assert_eq!(tree.weight_of(2, 1), Some(2));
    }

    #[test]
    fn unreachable_vertices_stay_isolated() {
        let mut graph = AdjArrayUndir::new(5).unwrap();
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(3, 4, 1).unwrap();

        let tree = graph.dijkstra_tree(0).unwrap();
        assert_eq!(tree.number_of_edges(), 1);
        assert_eq!(tree.weight_of(0, 1), Some(2));
        for u in [2, 3, 4] {
            assert_eq!(tree.degree_of(u), 0);
        }
    }

    #[test]
    fn rejects_negative_weights() {
        let mut graph = AdjArrayUndir::new(3).unwrap();
        graph.add_edge(0, 1, -4).unwrap(); // storing is fine
        graph.add_edge(1, 2, 2).unwrap();

        assert!(graph.has_negative_weights());
        assert_eq!(
            graph.dijkstra_tree(0).unwrap_err(),
            GraphError::NegativeWeight
        );
    }

    #[test]
    fn rejects_invalid_start() {
        let graph = weighted_example();
        assert_eq!(
            graph.dijkstra_tree(5).unwrap_err(),
            GraphError::InvalidVertex(5)
        );
    }

    #[test]
    fn start_choice_changes_tree() {
        let graph = weighted_example();
        let tree = graph.dijkstra_tree(4).unwrap();

        let dist = tree_distances(&tree, 4);
        // 4 -> 3 -> 0 (5 + 3) beats 4 -> 1 -> 0 (6 + 4)
        assert_eq!(dist[0], Some(8));
        assert_eq!(dist[3], Some(5));
    }

    #[test]
    fn zero_weight_edges_are_valid() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1, 0), (1, 2, 0)]).unwrap();
        let tree = graph.dijkstra_tree(0).unwrap();

        assert_eq!(tree_distances(&tree, 0), vec![Some(0), Some(0), Some(0)]);
    }
}
