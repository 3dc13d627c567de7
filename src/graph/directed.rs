//! DirectedGraph - adjacency-list container with traversal and ordering
//!
//! This module provides the core data structure for representing a directed
//! weighted graph over arbitrary values, together with the queries built on
//! it: reachability search (breadth-first and depth-first), topological
//! ordering, cycle inspection, and shortest paths on acyclic graphs.
//!
//! # Design
//!
//! The graph is an adjacency list: every registered node maps to the list
//! of its outgoing edge records. A separate insertion-order vector makes
//! all whole-graph iteration deterministic, so repeated runs over an
//! unmodified graph produce identical sequences.
//!
//! Traversals that follow edges to arbitrary depth (depth-first search,
//! topological ordering, cycle inspection) run on explicit heap stacks
//! holding `(node, next-child-index)` frames, so input depth is bounded by
//! available memory rather than by the host call stack.

use super::error::{GraphError, GraphResult};
use super::{AdjacentNode, Edge, Node};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

/// A directed weighted graph over values of type `T`
///
/// Nodes are identified by the values they wrap, so a value can be
/// registered once and every query addresses it by a fresh
/// [`Node::new`] key. The graph is built up front and then queried;
/// nodes and edges are never removed.
///
/// # Example
///
/// ```
/// use hodos::{DirectedGraph, Edge, Node};
///
/// let mut graph = DirectedGraph::new();
///
/// graph.add_node(Node::new("fetch")).unwrap();
/// graph.add_node(Node::new("build")).unwrap();
/// graph.add_node(Node::new("test")).unwrap();
///
/// graph.add_edge(Edge::new(Node::new("fetch"), Node::new("build"))).unwrap();
/// graph.add_edge(Edge::new(Node::new("build"), Node::new("test"))).unwrap();
///
/// assert!(graph.bfs(&Node::new("fetch"), &Node::new("test")).unwrap());
///
/// let order = graph.topological_sort();
/// assert_eq!(
///     order,
///     vec![Node::new("fetch"), Node::new("build"), Node::new("test")]
/// );
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de> + Eq + Hash"))
)]
pub struct DirectedGraph<T> {
    /// Map from node to its outgoing edge records
    adjacency: HashMap<Node<T>, Vec<AdjacentNode<T>>>,
    /// Insertion order for deterministic iteration
    insertion_order: Vec<Node<T>>,
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> DirectedGraph<T> {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by running `populate` against a fresh instance
    ///
    /// Returns the populated graph, or the first error the closure hits.
    ///
    /// # Example
    ///
    /// ```
    /// use hodos::{DirectedGraph, Edge, Node};
    ///
    /// let graph = DirectedGraph::build(|g| {
    ///     g.add_nodes([Node::new("a"), Node::new("b")])?;
    ///     g.add_edge(Edge::weighted(Node::new("a"), Node::new("b"), 3))
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn build<F>(populate: F) -> GraphResult<Self, T>
    where
        F: FnOnce(&mut Self) -> GraphResult<(), T>,
    {
        let mut graph = Self::new();
        populate(&mut graph)?;
        Ok(graph)
    }

    /// Returns the number of registered nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of registered edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Registers a node in the graph
    ///
    /// Returns an error if a node with an equal value already exists.
    pub fn add_node(&mut self, node: Node<T>) -> GraphResult<(), T> {
        if self.adjacency.contains_key(&node) {
            return Err(GraphError::duplicate_node(node));
        }

        self.insertion_order.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        Ok(())
    }

    /// Registers several nodes in iteration order
    ///
    /// Stops at the first duplicate; nodes registered before the failure
    /// stay registered.
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node<T>>) -> GraphResult<(), T> {
        for node in nodes {
            self.add_node(node)?;
        }
        Ok(())
    }

    /// Registers a directed weighted edge
    ///
    /// Both endpoints must already be registered nodes, otherwise the edge
    /// is rejected and nothing is recorded. Registering the exact same
    /// `(destination, weight)` record twice for one source is a no-op;
    /// the same destination under a different weight is a distinct
    /// parallel edge.
    pub fn add_edge(&mut self, edge: Edge<T>) -> GraphResult<(), T> {
        let Edge {
            source,
            destination,
            weight,
        } = edge;

        if !self.adjacency.contains_key(&source) || !self.adjacency.contains_key(&destination) {
            return Err(GraphError::invalid_edge(source, destination));
        }

        let record = AdjacentNode::new(destination, weight);
        if let Some(outgoing) = self.adjacency.get_mut(&source) {
            if !outgoing.contains(&record) {
                outgoing.push(record);
            }
        }
        Ok(())
    }

    /// Registers several edges in iteration order
    ///
    /// Stops at the first invalid edge; edges registered before the
    /// failure stay registered.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge<T>>) -> GraphResult<(), T> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Returns true if the node is registered
    pub fn contains(&self, node: &Node<T>) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns an iterator over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.insertion_order.iter()
    }

    /// Returns the outgoing edge records of a node, or `None` if the node
    /// is not registered
    pub fn neighbors(&self, node: &Node<T>) -> Option<&[AdjacentNode<T>]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Returns the out-degree of a node, or `None` if the node is not
    /// registered
    pub fn out_degree(&self, node: &Node<T>) -> Option<usize> {
        self.adjacency.get(node).map(Vec::len)
    }

    /// Outgoing records of a node, empty for unknown nodes
    fn outgoing(&self, node: &Node<T>) -> &[AdjacentNode<T>] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Breadth-first reachability: is `target` reachable from `source`?
    ///
    /// Explores the graph level by level from `source` with a FIFO
    /// frontier. Nodes may be enqueued more than once; a node is skipped
    /// at dequeue time if it has already been processed. The target test
    /// happens when a node is dequeued, so `bfs(s, s)` is true even
    /// without a self-loop. Cycles are safe: every node is processed at
    /// most once.
    ///
    /// Returns an error if `source` is not registered. An unregistered
    /// `target` is simply unreachable.
    pub fn bfs(&self, source: &Node<T>, target: &Node<T>) -> GraphResult<bool, T> {
        if !self.adjacency.contains_key(source) {
            return Err(GraphError::node_not_found(source.clone()));
        }

        let mut visited: HashSet<&Node<T>> = HashSet::new();
        let mut frontier: VecDeque<&Node<T>> = VecDeque::new();
        frontier.push_back(source);

        while let Some(node) = frontier.pop_front() {
            if visited.contains(node) {
                continue;
            }
            if node == target {
                return Ok(true);
            }
            visited.insert(node);

            for adjacent in self.outgoing(node) {
                frontier.push_back(adjacent.node());
            }
        }

        Ok(false)
    }

    /// Depth-first reachability: is `target` reachable from `source`?
    ///
    /// Descends along outgoing edges in their registration order and
    /// short-circuits on the first hit. One visited set spans the whole
    /// search, so subtrees shared between siblings are explored once and
    /// cycles terminate.
    ///
    /// Returns an error if `source` is not registered. An unregistered
    /// `target` is simply unreachable.
    pub fn dfs(&self, source: &Node<T>, target: &Node<T>) -> GraphResult<bool, T> {
        if !self.adjacency.contains_key(source) {
            return Err(GraphError::node_not_found(source.clone()));
        }

        let mut visited: HashSet<&Node<T>> = HashSet::new();
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();

        visited.insert(source);
        if source == target {
            return Ok(true);
        }
        stack.push((source, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let adjacent = self.outgoing(node);
            if frame.1 >= adjacent.len() {
                stack.pop();
                continue;
            }

            let next = adjacent[frame.1].node();
            frame.1 += 1;

            if visited.contains(next) {
                continue;
            }
            visited.insert(next);
            if next == target {
                return Ok(true);
            }
            stack.push((next, 0));
        }

        Ok(false)
    }

    /// Detects whether the graph contains a directed cycle
    ///
    /// Walks the graph depth-first with three-colour marking:
    /// - White (not visited): in neither set
    /// - Gray (being explored): in `on_stack`
    /// - Black (fully explored): in `visited` but not `on_stack`
    ///
    /// An edge into a gray node is a back edge, which is exactly a cycle.
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<&Node<T>> = HashSet::new();
        let mut on_stack: HashSet<&Node<T>> = HashSet::new();

        for start in &self.insertion_order {
            if visited.contains(start) {
                continue;
            }
            visited.insert(start);
            on_stack.insert(start);
            let mut stack: Vec<(&Node<T>, usize)> = vec![(start, 0)];

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                let adjacent = self.outgoing(node);
                if frame.1 >= adjacent.len() {
                    on_stack.remove(node);
                    stack.pop();
                    continue;
                }

                let next = adjacent[frame.1].node();
                frame.1 += 1;

                if on_stack.contains(next) {
                    // Back edge found - cycle detected
                    return true;
                }
                if visited.contains(next) {
                    continue;
                }
                visited.insert(next);
                on_stack.insert(next);
                stack.push((next, 0));
            }
        }

        false
    }

    /// Returns a topological ordering of all registered nodes
    ///
    /// Runs a post-order depth-first walk initiated from every
    /// not-yet-visited node in insertion order; a node is recorded once
    /// all of its descendants are complete, and the recorded sequence is
    /// reversed. For acyclic graphs the result places the source of every
    /// edge before its destination. The ordering is deterministic:
    /// repeated calls on an unmodified graph return the same sequence.
    ///
    /// Cyclic graphs still yield a full-length sequence, but no valid
    /// linear ordering exists for them; use
    /// [`checked_topological_sort`](Self::checked_topological_sort) when
    /// that distinction matters.
    pub fn topological_sort(&self) -> Vec<Node<T>> {
        let mut visited: HashSet<&Node<T>> = HashSet::new();
        let mut finished: Vec<&Node<T>> = Vec::with_capacity(self.insertion_order.len());

        for start in &self.insertion_order {
            if visited.contains(start) {
                continue;
            }
            visited.insert(start);
            let mut stack: Vec<(&Node<T>, usize)> = vec![(start, 0)];

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                let adjacent = self.outgoing(node);
                if frame.1 >= adjacent.len() {
                    finished.push(node);
                    stack.pop();
                    continue;
                }

                let next = adjacent[frame.1].node();
                frame.1 += 1;

                if visited.contains(next) {
                    continue;
                }
                visited.insert(next);
                stack.push((next, 0));
            }
        }

        finished.into_iter().rev().cloned().collect()
    }

    /// Returns a topological ordering, or an error for cyclic graphs
    ///
    /// The same ordering as [`topological_sort`](Self::topological_sort),
    /// fronted by a cycle check so callers get a guarantee instead of a
    /// silently meaningless sequence.
    pub fn checked_topological_sort(&self) -> GraphResult<Vec<Node<T>>, T> {
        if self.has_cycle() {
            return Err(GraphError::CyclicGraph);
        }
        Ok(self.topological_sort())
    }

    /// Computes shortest-path distances from `source` on an acyclic graph
    ///
    /// Processes nodes in topological order starting at the source's
    /// position and relaxes every outgoing edge of each reached node:
    /// a shorter route to a destination replaces the recorded distance.
    /// Because every path runs forward through the order, one sweep is
    /// enough, and negative edge weights are handled exactly like
    /// positive ones.
    ///
    /// The result maps each node reachable from `source` to its distance
    /// (the source itself maps to 0). Unreachable nodes have no entry.
    /// Order entries without a recorded distance are unreachable and are
    /// skipped, so disconnected regions of the graph never disturb the
    /// sweep.
    ///
    /// The graph must be acyclic; this is a precondition, not a checked
    /// property. Returns an error if `source` is not registered.
    ///
    /// # Example
    ///
    /// ```
    /// use hodos::{DirectedGraph, Edge, Node};
    ///
    /// let mut graph = DirectedGraph::new();
    /// graph
    ///     .add_nodes([Node::new('a'), Node::new('b'), Node::new('c')])
    ///     .unwrap();
    /// graph
    ///     .add_edges([
    ///         Edge::weighted(Node::new('a'), Node::new('b'), 5),
    ///         Edge::weighted(Node::new('b'), Node::new('c'), -2),
    ///     ])
    ///     .unwrap();
    ///
    /// let distances = graph.dag_shortest_paths(&Node::new('a')).unwrap();
    /// assert_eq!(distances[&Node::new('c')], 3);
    /// ```
    pub fn dag_shortest_paths(&self, source: &Node<T>) -> GraphResult<HashMap<Node<T>, i64>, T> {
        if !self.adjacency.contains_key(source) {
            return Err(GraphError::node_not_found(source.clone()));
        }

        let order = self.topological_sort();

        let mut distances: HashMap<&Node<T>, i64> = HashMap::new();
        distances.insert(source, 0);

        // Everything before the source in the order cannot lie on a path
        // out of the source, so the sweep starts at the source itself.
        for node in order.iter().skip_while(|node| *node != source) {
            let distance = match distances.get(node) {
                Some(&distance) => distance,
                // No recorded distance: not reachable from the source.
                None => continue,
            };

            for adjacent in self.outgoing(node) {
                let candidate = distance + adjacent.weight();
                match distances.get(adjacent.node()) {
                    Some(&existing) if existing <= candidate => {}
                    _ => {
                        distances.insert(adjacent.node(), candidate);
                    }
                }
            }
        }

        Ok(distances
            .into_iter()
            .map(|(node, distance)| (node.clone(), distance))
            .collect())
    }

    /// Renders the graph in Graphviz DOT format
    ///
    /// Nodes appear in insertion order and every edge carries its weight
    /// as a label. Quotes and backslashes in rendered node text are
    /// escaped. The output can be written to a file and rendered with
    /// `dot -Tpng graph.dot -o graph.png`.
    pub fn to_dot(&self) -> String
    where
        T: fmt::Display,
    {
        use std::fmt::Write as _;

        let mut dot = String::from("digraph {\n");
        for node in &self.insertion_order {
            let _ = writeln!(dot, "    \"{}\"", dot_escaped(node));
        }
        for node in &self.insertion_order {
            for adjacent in self.outgoing(node) {
                let _ = writeln!(
                    dot,
                    "    \"{}\" -> \"{}\" [ label = \"{}\" ]",
                    dot_escaped(node),
                    dot_escaped(adjacent.node()),
                    adjacent.weight()
                );
            }
        }
        dot.push_str("}\n");
        dot
    }
}

/// Escapes text for a double-quoted DOT string; Graphviz treats `"` as
/// the terminator and `\` as the escape introducer.
fn dot_escaped(value: impl fmt::Display) -> String {
    let text = value.to_string();
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
