/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve far less than `2^32` vertices.
This saves space compared to `usize`/`u64` and keeps algorithm-internal arrays
(parents, distances, keys) compact.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// Algorithm-internal parent arrays use it as the "no parent yet" marker,
/// so a graph may have at most `Node::MAX - 1` vertices.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
