//! Directed Weighted Graph over Arbitrary Values
//!
//! This module provides the graph data structure and the algorithms built
//! on top of it. It enables:
//!
//! - Registering value-identified nodes and weighted directed edges
//! - Reachability queries, breadth-first and depth-first
//! - Topological ordering with deterministic output
//! - Cycle inspection
//! - Single-source shortest paths on acyclic graphs
//!
//! # Design Principles
//!
//! Following Parnas's information hiding principles:
//! - This module hides the graph representation (adjacency list vs matrix)
//! - Exposes only abstract operations: add_node, add_edge, bfs,
//!   topological_sort, etc.

mod directed;
mod error;
mod node;

pub use directed::DirectedGraph;
pub use error::{GraphError, GraphResult};
pub use node::{AdjacentNode, Edge, Node};
