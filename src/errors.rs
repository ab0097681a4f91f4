/*!
# Error Types

All fallible operations on graphs return [`GraphError`] instead of panicking
or handing back sentinel values. Construction and mutation either fully
succeed or fully fail; a rejected edit leaves the graph untouched on both
endpoints.
*/

use thiserror::Error;

use crate::Node;

/// Failure conditions raised by graph construction, mutation, and the
/// algorithms operating on graphs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A graph must have at least one vertex. Raised at construction and,
    /// defensively, at every algorithm entry point.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    /// A vertex index outside `[0, n)` was passed to a mutation or as an
    /// algorithm's start vertex.
    #[error("vertex {0} is out of range")]
    InvalidVertex(Node),

    /// Self-loops are not representable: the graphs are simple.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(Node),

    /// `remove_edge` was called for a pair without an edge.
    #[error("no edge between {0} and {1}")]
    MissingEdge(Node, Node),

    /// Dijkstra requires all stored weights to be non-negative.
    #[error("graph contains negative edge weights")]
    NegativeWeight,
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GraphError>;
