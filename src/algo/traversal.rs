/*!
Breadth- and depth-first traversal, materialized as tree edges.

Both traversals copy every edge that first discovers a vertex into the output
graph, keeping the original weight. They differ in their frontier (FIFO queue
vs. recursion stack) and in their coverage: BFS stays inside the start
vertex's component, DFS restarts on every still-unvisited vertex and thus
spans the whole graph as a forest.
*/

use bitvector::BitVector;

use super::*;

/// Provides tree-building traversals on graph representations.
pub trait Traversal: AdjacencyList + GraphEdgeEditing {
    /// Runs a breadth-first search from `start` and returns its tree.
    ///
    /// Vertices are discovered level by level through a FIFO
    /// [`VertexQueue`]; the edge over which a vertex is first seen becomes a
    /// tree edge with its original weight. Vertices outside `start`'s
    /// component remain isolated in the output.
    ///
    /// Fails with [`GraphError::EmptyGraph`] on a zero-vertex input and
    /// [`GraphError::InvalidVertex`] if `start >= n`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1, 4), (1, 2, 2)]).unwrap();
    /// let tree = g.bfs_tree(0).unwrap();
    ///
    /// assert_eq!(tree.weight_of(0, 1), Some(4));
    /// assert_eq!(tree.weight_of(1, 2), Some(2));
    /// ```
    fn bfs_tree(&self, start: Node) -> Result<Self> {
        ensure_nonempty(self)?;
        ensure_vertex(self, start)?;

        let mut tree = Self::new(self.number_of_nodes())?;
        let mut discovered = BitVector::new(self.len());
        let mut queue = VertexQueue::new();

        discovered.insert(start as usize);
        queue.push(start);

        while let Some(u) = queue.pop() {
            for Neighbor { node: v, weight } in self.neighbors_of(u) {
                if !discovered.contains(v as usize) {
                    discovered.insert(v as usize);
                    tree.add_edge(u, v, weight)?;
                    queue.push(v);
                }
            }
        }

        Ok(tree)
    }

    /// Runs a depth-first search from `start` and returns its spanning forest.
    ///
    /// After the component containing `start` is exhausted, the search
    /// restarts from every still-unvisited vertex in increasing index order,
    /// so the output covers *all* vertices, one tree per component.
    ///
    /// Fails with [`GraphError::EmptyGraph`] on a zero-vertex input and
    /// [`GraphError::InvalidVertex`] if `start >= n`.
    fn dfs_forest(&self, start: Node) -> Result<Self> {
        ensure_nonempty(self)?;
        ensure_vertex(self, start)?;

        let mut forest = Self::new(self.number_of_nodes())?;
        let mut visited = BitVector::new(self.len());

        dfs_visit(self, &mut forest, start, &mut visited)?;
        for u in self.vertices() {
            if !visited.contains(u as usize) {
                dfs_visit(self, &mut forest, u, &mut visited)?;
            }
        }

        Ok(forest)
    }
}

impl<G> Traversal for G where G: AdjacencyList + GraphEdgeEditing {}

/// Recursive visit: every edge leading to a first-seen neighbor becomes a
/// forest edge before descending into that neighbor.
fn dfs_visit<G: Traversal>(
    graph: &G,
    forest: &mut G,
    u: Node,
    visited: &mut BitVector,
) -> Result<()> {
    visited.insert(u as usize);

    for Neighbor { node: v, weight } in graph.neighbors_of(u) {
        if !visited.contains(v as usize) {
            forest.add_edge(u, v, weight)?;
            dfs_visit(graph, forest, v, visited)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn diamond() -> AdjArrayUndir {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        AdjArrayUndir::from_edges(
            6,
            [(1, 2, 3), (1, 0, 1), (4, 3, 2), (0, 5, 7), (2, 4, 5), (5, 4, 4)],
        )
        .unwrap()
    }

    #[test]
    fn bfs_tree_structure() {
        let graph = diamond();
        let tree = graph.bfs_tree(1).unwrap();

        assert_eq!(tree.number_of_nodes(), 6);
        assert_eq!(tree.number_of_edges(), 5); // spanning tree of one component

        // every tree edge keeps its input weight
        for Edge(u, v, w) in tree.edges(true) {
            assert_eq!(graph.weight_of(u, v), Some(w));
        }

        // direct neighbors of the root hang off the root
        assert!(tree.has_edge(1, 0));
        assert!(tree.has_edge(1, 2));
        // vertex 3 is two hops away, reached over 4
        assert!(tree.has_edge(4, 3));
    }

    #[test]
    fn bfs_covers_only_start_component() {
        let mut graph = AdjArrayUndir::new(4).unwrap();
        graph.add_edge(0, 1, 2).unwrap();

        let tree = graph.bfs_tree(0).unwrap();
        assert_eq!(tree.number_of_nodes(), 4);
        assert_eq!(tree.number_of_edges(), 1);
        assert_eq!(tree.weight_of(0, 1), Some(2));
        assert_eq!(tree.degree_of(2), 0);
        assert_eq!(tree.degree_of(3), 0);
    }

    #[test]
    fn bfs_from_non_central_vertex() {
        let graph = diamond();
        let tree = graph.bfs_tree(5).unwrap();

        assert_eq!(tree.number_of_edges(), 5);
        assert!(tree.has_edge(5, 0));
        assert!(tree.has_edge(5, 4));
    }

    #[test]
    fn dfs_spans_all_components() {
        let mut graph = AdjArrayUndir::new(4).unwrap();
        graph.add_edge(0, 1, 9).unwrap();

        let forest = graph.dfs_forest(0).unwrap();
        assert_eq!(forest.number_of_nodes(), 4);
        // isolated vertices stay present but edge-free
        assert_eq!(forest.number_of_edges(), 1);
        assert_eq!(forest.weight_of(0, 1), Some(9));
        assert_eq!(forest.degree_of(2), 0);
        assert_eq!(forest.degree_of(3), 0);
    }

    #[test]
    fn dfs_forest_has_one_tree_per_component() {
        // components {0,1,2}, {3,4}, {5}
        let graph =
            AdjArrayUndir::from_edges(6, [(0, 1, 1), (1, 2, 1), (0, 2, 1), (3, 4, 6)]).unwrap();

        let forest = graph.dfs_forest(0).unwrap();
        // trees have (component size - 1) edges each
        assert_eq!(forest.number_of_edges(), 3);
        assert!(forest.has_edge(3, 4));
        assert_eq!(forest.degree_of(5), 0);

        // forest edges are a subset of the input edges, weights preserved
        for Edge(u, v, w) in forest.edges(true) {
            assert_eq!(graph.weight_of(u, v), Some(w));
        }
    }

    #[test]
    fn traversals_reject_invalid_start() {
        let graph = diamond();
        assert_eq!(graph.bfs_tree(6).unwrap_err(), GraphError::InvalidVertex(6));
        assert_eq!(
            graph.dfs_forest(17).unwrap_err(),
            GraphError::InvalidVertex(17)
        );
    }

    #[test]
    fn traversal_output_is_acyclic() {
        let graph = diamond();
        for tree in [graph.bfs_tree(0).unwrap(), graph.dfs_forest(0).unwrap()] {
            // n vertices, one component reachable from 0, so exactly n-1 edges
            assert_eq!(tree.number_of_edges(), 5);
            let distinct = tree.edges(true).map(|e| e.normalized()).unique().count();
            assert_eq!(distinct, 5);
        }
    }
}
