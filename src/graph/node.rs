//! Node and edge value types
//!
//! This module defines the vertex wrapper and the edge descriptions used by
//! the directed graph. A node is identified by the value it wraps: equality
//! and hashing delegate straight to the value, so two nodes carrying equal
//! values are the same vertex.
//!
//! # Design Decision
//!
//! The wrapped value is the identity rather than a separate id because:
//! 1. Callers address vertices by the data they already hold
//! 2. No id allocation or bookkeeping is needed on insert
//! 3. Lookups work with freshly constructed `Node::new(value)` keys

use std::fmt;
use std::hash::{Hash, Hasher};

/// A vertex in a directed graph, identified by the value it wraps
///
/// # Examples
///
/// ```
/// use hodos::Node;
///
/// let node = Node::new("compile");
/// assert_eq!(node.value(), &"compile");
/// assert_eq!(node, Node::new("compile"));
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T> {
    /// The wrapped value; doubles as the vertex identity
    value: T,
}

impl<T> Node<T> {
    /// Creates a node wrapping the given value
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the wrapped value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the node and returns the wrapped value
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", self.value)
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::new(value)
    }
}

/// A directed weighted edge between two nodes
///
/// Plain data: the fields are public and the edge carries no graph state.
/// Weights may be negative.
///
/// # Examples
///
/// ```
/// use hodos::{Edge, Node};
///
/// let unit = Edge::new(Node::new("a"), Node::new("b"));
/// assert_eq!(unit.weight, 1);
///
/// let edge = Edge::weighted(Node::new("a"), Node::new("b"), -4);
/// assert_eq!(edge.weight, -4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<T> {
    /// The node the edge leaves from
    pub source: Node<T>,
    /// The node the edge points at
    pub destination: Node<T>,
    /// Edge weight; negative values are allowed
    pub weight: i64,
}

impl<T> Edge<T> {
    /// Creates an edge with the default weight of 1
    pub fn new(source: Node<T>, destination: Node<T>) -> Self {
        Self {
            source,
            destination,
            weight: 1,
        }
    }

    /// Creates an edge with an explicit weight
    pub fn weighted(source: Node<T>, destination: Node<T>, weight: i64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

/// One outgoing-edge record: the destination node and the edge weight
///
/// Stored per source node inside the graph's adjacency list. Callers only
/// ever read these (via [`DirectedGraph::neighbors`]); construction happens
/// when an edge is registered.
///
/// [`DirectedGraph::neighbors`]: crate::DirectedGraph::neighbors
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacentNode<T> {
    node: Node<T>,
    weight: i64,
}

impl<T> AdjacentNode<T> {
    pub(crate) fn new(node: Node<T>, weight: i64) -> Self {
        Self { node, weight }
    }

    /// Returns the destination node of this edge record
    pub fn node(&self) -> &Node<T> {
        &self.node
    }

    /// Returns the weight of this edge record
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(42);
        assert_eq!(node.value(), &42);
        assert_eq!(node.into_value(), 42);
    }

    #[test]
    fn test_node_equality_is_value_equality() {
        let first = Node::new("station");
        let second = Node::new("station");
        let other = Node::new("depot");

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_node_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Node::new("a"));
        set.insert(Node::new("b"));
        set.insert(Node::new("a")); // duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_display_and_debug() {
        let node = Node::new("hub");
        assert_eq!(format!("{}", node), "hub");
        assert_eq!(format!("{:?}", node), "Node(\"hub\")");
    }

    #[test]
    fn test_node_from_value() {
        let node: Node<i32> = 7.into();
        assert_eq!(node, Node::new(7));
    }

    #[test]
    fn test_edge_default_weight() {
        let edge = Edge::new(Node::new("a"), Node::new("b"));
        assert_eq!(edge.source, Node::new("a"));
        assert_eq!(edge.destination, Node::new("b"));
        assert_eq!(edge.weight, 1);
    }

    #[test]
    fn test_edge_explicit_weight() {
        let edge = Edge::weighted(Node::new("a"), Node::new("b"), -4);
        assert_eq!(edge.weight, -4);
    }

    #[test]
    fn test_adjacent_node_accessors() {
        let adjacent = AdjacentNode::new(Node::new("b"), 9);
        assert_eq!(adjacent.node(), &Node::new("b"));
        assert_eq!(adjacent.weight(), 9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_value_types_serde_round_trip() {
        let node = Node::new("hub".to_string());
        let json = serde_json::to_string(&node).unwrap();
        let back: Node<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);

        let edge = Edge::weighted(Node::new(1), Node::new(2), -3);
        let json = serde_json::to_string(&edge).unwrap();
        let back: Edge<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);

        let adjacent = AdjacentNode::new(Node::new('x'), 7);
        let json = serde_json::to_string(&adjacent).unwrap();
        let back: AdjacentNode<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, adjacent);
    }
}
