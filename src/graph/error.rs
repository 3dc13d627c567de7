//! Error types for graph operations
//!
//! This module hides error representation details and provides
//! a unified error type for all graph operations. The variants carry the
//! offending nodes so callers can report exactly which value misbehaved.

use crate::Node;
use thiserror::Error;

/// Result type for graph operations
///
/// `V` is the success value, `T` the node value type of the graph.
pub type GraphResult<V, T> = Result<V, GraphError<T>>;

/// Errors that can occur during graph operations
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum GraphError<T> {
    /// A node with an equal value is already registered
    #[error("node already present in the graph: {node:?}")]
    DuplicateNode {
        /// The node that was offered twice
        node: Node<T>,
    },

    /// An edge referenced an endpoint that is not registered
    #[error("edge endpoints must be registered nodes: {source_node:?} -> {destination:?}")]
    InvalidEdge {
        /// The source endpoint of the rejected edge
        ///
        /// Not named `source` because thiserror would treat such a field
        /// as the error's cause and require `Node<T>: Error`.
        source_node: Node<T>,
        /// The destination endpoint of the rejected edge
        destination: Node<T>,
    },

    /// A query named a node that is not in the graph
    #[error("node not found in the graph: {node:?}")]
    NodeNotFound {
        /// The node the query asked for
        node: Node<T>,
    },

    /// An ordering was requested for a graph that contains a cycle
    #[error("graph contains a cycle - no linear ordering exists")]
    CyclicGraph,
}

impl<T> GraphError<T> {
    /// Creates a duplicate node error
    pub fn duplicate_node(node: Node<T>) -> Self {
        Self::DuplicateNode { node }
    }

    /// Creates an invalid edge error
    pub fn invalid_edge(source: Node<T>, destination: Node<T>) -> Self {
        Self::InvalidEdge {
            source_node: source,
            destination,
        }
    }

    /// Creates a node not found error
    pub fn node_not_found(node: Node<T>) -> Self {
        Self::NodeNotFound { node }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_nodes() {
        let error: GraphError<&str> = GraphError::duplicate_node(Node::new("a"));
        assert_eq!(
            error.to_string(),
            "node already present in the graph: Node(\"a\")"
        );

        let error: GraphError<&str> = GraphError::invalid_edge(Node::new("a"), Node::new("b"));
        assert_eq!(
            error.to_string(),
            "edge endpoints must be registered nodes: Node(\"a\") -> Node(\"b\")"
        );

        let error: GraphError<i32> = GraphError::node_not_found(Node::new(9));
        assert_eq!(error.to_string(), "node not found in the graph: Node(9)");
    }

    #[test]
    fn test_cyclic_graph_message() {
        let error: GraphError<&str> = GraphError::CyclicGraph;
        assert_eq!(
            error.to_string(),
            "graph contains a cycle - no linear ordering exists"
        );
    }
}
