//! Cheapest-route lookup over a weighted delivery network
//!
//! This example demonstrates:
//! - Building a graph with the closure-based builder
//! - Reachability checks before committing to a route
//! - One shortest-path sweep answering every destination at once
//!
//! ## Scenario
//! Eight depots ('a' through 'h') are connected by thirteen one-way legs
//! with mixed costs; one leg is negative (a subsidized transfer). We
//! compute the cheapest cost from the hub 'a' to every other depot.
//!
//! ## Run with
//! ```bash
//! cargo run --example shortest_path
//! ```

use hodos::{DirectedGraph, Edge, Node};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hodos Shortest Path Example ===\n");

    let legs = [
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

    let graph = DirectedGraph::build(|g| {
        g.add_nodes(('a'..='h').map(Node::new))?;
        g.add_edges(
            legs.iter()
                .map(|&(from, to, cost)| Edge::weighted(Node::new(from), Node::new(to), cost)),
        )
    })?;

    println!(
        "1. Network: {} depots, {} legs\n",
        graph.node_count(),
        graph.edge_count()
    );

    let hub = Node::new('a');

    println!("2. Reachability from the hub:");
    for depot in 'b'..='h' {
        let reachable = graph.bfs(&hub, &Node::new(depot))?;
        println!(
            "   {} -> {}: {}",
            hub,
            depot,
            if reachable { "reachable" } else { "unreachable" }
        );
    }

    println!("\n3. Cheapest cost from the hub:");
    let distances = graph.dag_shortest_paths(&hub)?;
    for depot in 'a'..='h' {
        match distances.get(&Node::new(depot)) {
            Some(cost) => println!("   {}: {}", depot, cost),
            None => println!("   {}: unreachable", depot),
        }
    }

    Ok(())
}
