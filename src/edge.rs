use std::fmt::{Debug, Display};

use crate::Node;

/// Edge weights are signed: negative weights may be *stored* freely and are
/// only rejected by algorithms whose correctness depends on non-negativity
/// (see [`ShortestPaths`](crate::algo::ShortestPaths)).
pub type Weight = i64;

/// An edge is defined by two endpoints and a weight.
/// The graph representations in this crate are undirected, so `Edge(u, v, w)`
/// and `Edge(v, u, w)` describe the same edge; iteration and storage pick one
/// orientation per context.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node, pub Weight);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0, self.2)
    }
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge(value.0, value.1, value.2)
    }
}

/// Unweighted pairs default to weight `1`
impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1, 1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A single adjacency record: the far endpoint of an incident edge and the
/// edge's weight. Each undirected edge `{u, v}` appears as a `Neighbor` in
/// both `u`'s and `v`'s list, with identical weight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Neighbor {
    pub node: Node,
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(node: Node, weight: Weight) -> Self {
        Self { node, weight }
    }
}

impl From<Neighbor> for (Node, Weight) {
    fn from(value: Neighbor) -> Self {
        (value.node, value.weight)
    }
}
