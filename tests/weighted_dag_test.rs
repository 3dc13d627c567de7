//! End-to-end checks for a weighted routing network
//!
//! This test verifies that:
//! 1. Batch construction registers every stop and leg exactly once
//! 2. Breadth-first and depth-first reachability agree on every pair
//! 3. The topological order places the start of every leg before its end
//! 4. Shortest-path distances match hand-computed values, negative legs included
//! 5. Construction and query errors name the offending nodes
//! 6. Chains far deeper than any call stack traverse and order cleanly

use hodos::{DirectedGraph, Edge, GraphError, Node};

/// Legs of the routing network: (from, to, cost). The network is acyclic
/// and every stop is reachable from 'a'.
const LEGS: [(char, char, i64); 13] = [
    ('c', 'd', 8),
    ('c', 'g', 11),
    ('a', 'b', 3),
    ('a', 'c', 6),
    ('b', 'd', 4),
    ('b', 'c', 4),
    ('b', 'e', 11),
    ('d', 'e', -4),
    ('d', 'f', 5),
    ('d', 'g', 2),
    ('e', 'h', 9),
    ('f', 'h', 1),
    ('g', 'h', 2),
];

fn routing_graph() -> DirectedGraph<char> {
    DirectedGraph::build(|g| {
        g.add_nodes(('a'..='h').map(Node::new))?;
        g.add_edges(
            LEGS.iter()
                .map(|&(from, to, cost)| Edge::weighted(Node::new(from), Node::new(to), cost)),
        )
    })
    .expect("routing graph builds")
}

#[test]
fn test_construction_counts() {
    let graph = routing_graph();
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 13);

    let stops: Vec<char> = graph.nodes().map(|n| *n.value()).collect();
    assert_eq!(stops, ('a'..='h').collect::<Vec<_>>());
}

#[test]
fn test_reachability_agrees_between_searches() {
    let graph = routing_graph();

    for source in 'a'..='h' {
        for target in 'a'..='h' {
            let by_bfs = graph.bfs(&Node::new(source), &Node::new(target)).unwrap();
            let by_dfs = graph.dfs(&Node::new(source), &Node::new(target)).unwrap();
            assert_eq!(
                by_bfs, by_dfs,
                "searches disagree for {} -> {}",
                source, target
            );
        }
    }

    // Spot checks along and against the leg direction.
    assert!(graph.bfs(&Node::new('a'), &Node::new('h')).unwrap());
    assert!(graph.dfs(&Node::new('c'), &Node::new('e')).unwrap());
    assert!(!graph.bfs(&Node::new('h'), &Node::new('a')).unwrap());
    assert!(!graph.dfs(&Node::new('e'), &Node::new('f')).unwrap());
}

#[test]
fn test_topological_order_respects_every_leg() {
    let graph = routing_graph();

    let order = graph.topological_sort();
    assert_eq!(order.len(), 8);

    let pos = |stop: char| order.iter().position(|n| *n.value() == stop).unwrap();
    for (from, to, _) in LEGS {
        assert!(pos(from) < pos(to), "{} must precede {}", from, to);
    }

    // The graph is acyclic, so the checked variant returns the same order.
    assert!(!graph.has_cycle());
    assert_eq!(graph.checked_topological_sort().unwrap(), order);

    // Construction is deterministic: an identically built graph orders
    // its stops identically.
    assert_eq!(routing_graph().topological_sort(), order);
}

#[test]
fn test_shortest_routes_from_a() {
    let graph = routing_graph();
    let distances = graph.dag_shortest_paths(&Node::new('a')).unwrap();

    let expected = [
        ('a', 0),
        ('b', 3),
        ('c', 6),
        ('d', 7),
        ('e', 3), // b -> d -> e undercuts the direct 11-cost leg
        ('f', 12),
        ('g', 9),
        ('h', 11),
    ];
    assert_eq!(distances.len(), expected.len());
    for (stop, cost) in expected {
        assert_eq!(distances[&Node::new(stop)], cost, "distance to {}", stop);
    }

    // Relaxation is complete: no leg can still improve a recorded cost.
    for (from, to, cost) in LEGS {
        if let Some(&reached) = distances.get(&Node::new(from)) {
            assert!(
                distances[&Node::new(to)] <= reached + cost,
                "leg {} -> {} still relaxable",
                from,
                to
            );
        }
    }
}

#[test]
fn test_shortest_routes_from_interior_stop() {
    let graph = routing_graph();
    let distances = graph.dag_shortest_paths(&Node::new('d')).unwrap();

    assert_eq!(distances[&Node::new('d')], 0);
    assert_eq!(distances[&Node::new('e')], -4);
    assert_eq!(distances[&Node::new('h')], 4); // d -> g -> h beats d -> e -> h
    // Stops upstream of 'd' are not reachable and carry no distance.
    assert!(!distances.contains_key(&Node::new('a')));
    assert!(!distances.contains_key(&Node::new('b')));
    assert!(!distances.contains_key(&Node::new('c')));
}

#[test]
fn test_error_surface() {
    let mut graph = routing_graph();

    let result = graph.add_node(Node::new('a'));
    assert!(matches!(result, Err(GraphError::DuplicateNode { .. })));

    let result = graph.add_edge(Edge::new(Node::new('a'), Node::new('z')));
    assert!(matches!(result, Err(GraphError::InvalidEdge { .. })));

    let result = graph.bfs(&Node::new('z'), &Node::new('a'));
    assert!(matches!(result, Err(GraphError::NodeNotFound { .. })));
    let result = graph.dfs(&Node::new('z'), &Node::new('a'));
    assert!(matches!(result, Err(GraphError::NodeNotFound { .. })));
    let result = graph.dag_shortest_paths(&Node::new('z'));
    assert!(matches!(result, Err(GraphError::NodeNotFound { .. })));

    // Failed operations leave the graph untouched.
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 13);
}

#[test]
fn test_cyclic_network_is_searchable_but_not_orderable() {
    let graph = DirectedGraph::build(|g| {
        g.add_nodes([Node::new("x"), Node::new("y"), Node::new("z"), Node::new("off")])?;
        g.add_edges([
            Edge::new(Node::new("x"), Node::new("y")),
            Edge::new(Node::new("y"), Node::new("z")),
            Edge::new(Node::new("z"), Node::new("x")),
        ])
    })
    .unwrap();

    assert!(graph.has_cycle());
    assert!(matches!(
        graph.checked_topological_sort(),
        Err(GraphError::CyclicGraph)
    ));

    // Searches terminate despite the cycle.
    assert!(graph.bfs(&Node::new("y"), &Node::new("x")).unwrap());
    assert!(graph.dfs(&Node::new("y"), &Node::new("x")).unwrap());
    assert!(!graph.bfs(&Node::new("x"), &Node::new("off")).unwrap());
}

#[test]
fn test_deep_chain_traversals_complete() {
    // Well beyond call-stack depth; traversal state lives on heap stacks.
    const STOPS: usize = 100_000;

    let graph = DirectedGraph::build(|g| {
        g.add_nodes((0..STOPS).map(Node::new))?;
        g.add_edges((1..STOPS).map(|stop| Edge::new(Node::new(stop - 1), Node::new(stop))))
    })
    .expect("chain builds");

    let first = Node::new(0);
    let last = Node::new(STOPS - 1);

    assert!(graph.bfs(&first, &last).unwrap());
    assert!(graph.dfs(&first, &last).unwrap());
    assert!(!graph.has_cycle());

    let order = graph.topological_sort();
    assert_eq!(order.len(), STOPS);
    assert_eq!(order.first(), Some(&first));
    assert_eq!(order.last(), Some(&last));

    let distances = graph.dag_shortest_paths(&first).unwrap();
    assert_eq!(distances[&last], (STOPS - 1) as i64);
}

#[test]
fn test_dot_export_labels_costs() {
    let graph = routing_graph();
    let dot = graph.to_dot();

    assert!(dot.starts_with("digraph {"));
    for stop in 'a'..='h' {
        assert!(dot.contains(&format!("\"{}\"", stop)));
    }
    assert!(dot.contains("\"d\" -> \"e\" [ label = \"-4\" ]"));
}
