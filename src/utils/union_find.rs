use crate::{Node, NumNodes};

/// A disjoint-set structure over the vertices `0..n`.
///
/// Supports near-constant amortized `find`/`union` via full path compression
/// (every vertex visited while chasing parent pointers is re-attached
/// directly to the discovered root) and union-by-rank (the shallower tree is
/// attached under the deeper one; equal ranks pick an arbitrary winner whose
/// rank then grows by one).
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates `n` singleton sets, each vertex its own root with rank 0
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
        }
    }

    /// Returns the root of the set containing `x`.
    ///
    /// Compresses the visited path: a second pass re-attaches every vertex
    /// on it directly to the root.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut cur = x;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y` by rank.
    /// Returns *true* exactly if two distinct sets were merged.
    /// ** Panics if `x >= n || y >= n` **
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx as usize].cmp(&self.rank[ry as usize]) {
            std::cmp::Ordering::Less => self.parent[rx as usize] = ry,
            std::cmp::Ordering::Greater => self.parent[ry as usize] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry as usize] = rx;
                self.rank[rx as usize] += 1;
            }
        }
        true
    }

    /// Returns *true* if `x` and `y` currently belong to the same set
    pub fn same_set(&mut self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(5);
        for u in 0..5 {
            assert_eq!(uf.find(u), u);
        }
        assert!(!uf.same_set(0, 4));
    }

    #[test]
    fn union_merges_and_reports() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.same_set(0, 2));

        assert!(uf.union(1, 3));
        assert!(uf.same_set(0, 2));

        // repeated unions on the same set are no-ops
        assert!(!uf.union(0, 3));
    }

    #[test]
    fn path_compression_flattens() {
        let mut uf = UnionFind::new(8);
        for u in 0..7 {
            uf.union(u, u + 1);
        }

        let root = uf.find(0);
        for u in 0..8 {
            assert_eq!(uf.find(u), root);
            // after a find, every vertex points at the root directly
            assert_eq!(uf.parent[u as usize], root);
        }
    }

    #[test]
    fn components_match_partition() {
        let mut uf = UnionFind::new(10);
        for (u, v) in [(0, 1), (1, 2), (4, 5), (7, 8), (8, 9)] {
            uf.union(u, v);
        }

        let roots = (0..10).map(|u| uf.find(u)).collect_vec();
        assert_eq!(roots.iter().unique().count(), 5); // {0,1,2} {3} {4,5} {6} {7,8,9}
        assert_eq!(roots[0], roots[2]);
        assert_eq!(roots[7], roots[9]);
        assert_ne!(roots[3], roots[6]);
    }
}
