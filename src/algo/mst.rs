/*!
Minimum spanning trees via Prim's and Kruskal's algorithms.

Both operate on the [`EdgeQueue`], extracting a minimum-weight edge per round.
On disconnected inputs they yield a minimum spanning forest, one tree per
connected component. Among equal-weight edges the choice is arbitrary, so two
runs may return different (equally light) trees.
*/

use bitvector::BitVector;

use super::*;

/// Provides minimum-spanning-tree construction on graph representations.
pub trait SpanningTree: AdjacencyList + GraphEdgeEditing {
    /// Computes a minimum spanning tree with Prim's algorithm, grown from
    /// vertex `0`.
    ///
    /// Each queue entry `Edge(p, u, w)` records that `u` can be attached to
    /// the current tree over `p` at cost `w`. Extracting the minimum inserts
    /// `u` (if still outside) together with the edge `p -- u`, then relaxes
    /// `u`'s neighbors. The seed entry attaches `0` to itself and adds no
    /// edge.
    ///
    /// Vertices not reachable from `0` remain isolated in the output.
    /// Fails with [`GraphError::EmptyGraph`] on a zero-vertex input.
    fn prim_mst(&self) -> Result<Self> {
        ensure_nonempty(self)?;

        let n = self.len();
        let mut key = vec![Weight::MAX; n];
        let mut in_tree = BitVector::new(n);
        let mut queue = EdgeQueue::new();
        let mut mst = Self::new(self.number_of_nodes())?;

        key[0] = 0;
        queue.push(Edge(0, 0, 0));

        while let Some(Edge(p, u, w)) = queue.pop_min() {
            if in_tree.contains(u as usize) {
                continue;
            }
            in_tree.insert(u as usize);
            if p != u {
                mst.add_edge(p, u, w)?;
            }

            for Neighbor { node: v, weight } in self.neighbors_of(u) {
                if !in_tree.contains(v as usize) && weight < key[v as usize] {
                    key[v as usize] = weight;
                    queue.push(Edge(u, v, weight));
                }
            }
        }

        Ok(mst)
    }

    /// Computes a minimum spanning forest with Kruskal's algorithm.
    ///
    /// All edges are enqueued once (in normalized orientation) and extracted
    /// in order of increasing weight. An edge is kept iff its endpoints lie
    /// in different [`UnionFind`] components; kept edges are oriented with
    /// the smaller component root first.
    ///
    /// Unlike [`prim_mst`](SpanningTree::prim_mst), this spans every
    /// component of a disconnected input. Fails with
    /// [`GraphError::EmptyGraph`] on a zero-vertex input.
    fn kruskal_mst(&self) -> Result<Self> {
        ensure_nonempty(self)?;

        let mut queue = EdgeQueue::with_capacity(self.number_of_edges() as usize);
        for edge in self.edges(true) {
            queue.push(edge);
        }

        let mut components = UnionFind::new(self.number_of_nodes());
        let mut mst = Self::new(self.number_of_nodes())?;

        while let Some(Edge(u, v, w)) = queue.pop_min() {
            let ru = components.find(u);
            let rv = components.find(v);
            if ru == rv {
                continue;
            }

            if ru < rv {
                mst.add_edge(u, v, w)?;
            } else {
                mst.add_edge(v, u, w)?;
            }
            components.union(ru, rv);
        }

        Ok(mst)
    }
}

impl<G> SpanningTree for G where G: AdjacencyList + GraphEdgeEditing {}
