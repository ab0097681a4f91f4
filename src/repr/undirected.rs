use super::*;

/// An undirected weighted graph representation.
///
/// Stores one [`Neighborhood`] per vertex; an edge `{u, v}` is recorded in
/// both neighborhoods with the same weight. The vertex count is fixed at
/// construction time.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    fn ensure_vertex(&self, u: Node) -> Result<()> {
        if (u as usize) < self.nbs.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(u))
        }
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        })
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Neighbor> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.nbs[u as usize].weight_to(v)
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<bool> {
        self.ensure_vertex(u)?;
        self.ensure_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        if self.nbs[u as usize].set_weight(v, w) {
            // existing edge: both copies must be present by the symmetry invariant
            let mirrored = self.nbs[v as usize].set_weight(u, w);
            debug_assert!(mirrored);
            Ok(false)
        } else {
            self.nbs[u as usize].add_neighbor(v, w);
            self.nbs[v as usize].add_neighbor(u, w);
            self.num_edges += 1;
            Ok(true)
        }
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.ensure_vertex(u)?;
        self.ensure_vertex(v)?;

        if !self.nbs[u as usize].try_remove_neighbor(v) {
            return Err(GraphError::MissingEdge(u, v));
        }
        let mirrored = self.nbs[v as usize].try_remove_neighbor(u);
        debug_assert!(mirrored);
        self.num_edges -= 1;
        Ok(())
    }
}

crate::testing::test_graph_ops!(test_adj_array_undir, AdjArrayUndir);
crate::testing::test_graph_ops!(test_sparse_adj_array_undir, SparseAdjArrayUndir);
