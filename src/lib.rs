//! Hodos: Directed Weighted Graphs for Rust
//!
//! `hodos` (ὁδός, Greek for "way" or "path") is a generic in-memory directed
//! graph container with the classic path queries: reachability search,
//! topological ordering, and single-source shortest paths on DAGs.
//!
//! # Features
//!
//! - **Value-identified nodes**: a vertex *is* its value; no id bookkeeping
//! - **Weighted directed edges**: weights default to 1 and may be negative
//! - **Reachability**: breadth-first and depth-first search, cycle-safe
//! - **Topological ordering**: deterministic, insertion-order driven
//! - **DAG shortest paths**: one relaxation sweep in topological order
//! - **Fail-fast errors**: typed errors naming the offending nodes
//!
//! # Quick Start
//!
//! ```
//! use hodos::prelude::*;
//!
//! let mut graph = DirectedGraph::new();
//!
//! graph.add_nodes([Node::new("home"), Node::new("office"), Node::new("gym")]).unwrap();
//! graph.add_edges([
//!     Edge::weighted(Node::new("home"), Node::new("office"), 9),
//!     Edge::weighted(Node::new("home"), Node::new("gym"), 3),
//!     Edge::weighted(Node::new("gym"), Node::new("office"), 4),
//! ]).unwrap();
//!
//! assert!(graph.bfs(&Node::new("home"), &Node::new("office")).unwrap());
//!
//! let distances = graph.dag_shortest_paths(&Node::new("home")).unwrap();
//! assert_eq!(distances[&Node::new("office")], 7); // via the gym
//! ```
//!
//! # Module Organization
//!
//! Following Parnas's information hiding principles, the single domain
//! module hides the design decisions likely to change:
//!
//! - [`graph`]: the container and its algorithms (hides the adjacency
//!   representation and the traversal bookkeeping)
//!
//! # Design Principles
//!
//! This library follows Dave Cheney's practical programming wisdom:
//! - **Simplicity**: Simple, focused APIs that do one thing well
//! - **Clarity**: Explicit over implicit, readable over clever
//! - **Safety**: Hard to misuse, defaults prevent common mistakes
//!
//! Graphs are built first and queried afterwards: mutation takes
//! `&mut self`, queries take `&self`, and the borrow checker enforces the
//! separation without any internal locking.

pub mod graph;

// Re-export commonly used types for convenience
pub use graph::{AdjacentNode, DirectedGraph, Edge, GraphError, GraphResult, Node};

// Re-export dependencies used in public API
// This ensures users don't have version mismatch errors (Effective Rust Item 24)
#[cfg(feature = "serde")]
pub use serde;

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use hodos::prelude::*;
///
/// let graph: DirectedGraph<i32> = DirectedGraph::new();
/// assert!(graph.is_empty());
/// ```
pub mod prelude {
    pub use crate::graph::{AdjacentNode, DirectedGraph, Edge, GraphError, GraphResult, Node};
}
