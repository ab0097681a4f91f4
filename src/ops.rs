use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    ///
    /// The returned range does not borrow `self` and hence may be used where
    /// additional mutable references of self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex,
    /// yielding `(neighbor, weight)` records in a stable per-vertex order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Neighbor> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |nb| Edge(u, nb.node, nb.weight))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, each undirected edge is reported exactly once as
    /// `(u, v)` with `u <= v`; otherwise both stored orientations are yielded.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges.into_iter()
    }

    /// Returns *true* if any stored edge has a negative weight.
    ///
    /// A single scan over one stored copy of each edge suffices since both
    /// copies carry the same weight.
    fn has_negative_weights(&self) -> bool {
        self.edges(true).any(|e| e.weight() < 0)
    }

    /// Returns the sum of all edge weights, counting each undirected edge once
    fn total_weight(&self) -> Weight {
        self.edges(true).map(|e| e.weight()).sum()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the edge `(u, v)` if it exists.
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the edge `(u, v)` exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with `n` singleton nodes.
    /// Fails with [`GraphError::EmptyGraph`] for `n == 0`.
    fn new(n: NumNodes) -> Result<Self>;
}

/// Provides functions to insert/delete edges.
///
/// All edits keep the undirected invariant: an edge is recorded in both
/// endpoint lists with the same weight, or not at all.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge `{u, v}` with weight `w` to the graph.
    ///
    /// If the edge already exists, its weight is overwritten on both sides
    /// and `Ok(false)` is returned; a newly inserted edge yields `Ok(true)`.
    ///
    /// Fails with [`GraphError::InvalidVertex`] if `u >= n || v >= n` and
    /// with [`GraphError::SelfLoop`] if `u == v`.
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<bool>;

    /// Adds the edge `{u, v}` with the default weight `1`
    fn add_unit_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.add_edge(u, v, 1)
    }

    /// Adds all edges in the collection; the first failure aborts the bulk insert
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Removes the edge `{u, v}` from both endpoint lists.
    ///
    /// Fails with [`GraphError::InvalidVertex`] if `u >= n || v >= n` and
    /// with [`GraphError::MissingEdge`] if no such edge exists; a failed
    /// removal has no observable effect.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<()>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut graph = Self::new(n)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
