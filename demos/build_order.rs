//! Task ordering for a small build pipeline
//!
//! This example demonstrates:
//! - Topological ordering of dependent tasks
//! - Catching cycles with the checked ordering
//! - DOT export for visualizing the pipeline
//!
//! ## Scenario
//! Seven build tasks depend on each other through one-way edges. We derive
//! a valid execution order, render the pipeline as Graphviz DOT, then wire
//! in a circular dependency and watch the checked ordering reject it.
//!
//! ## Run with
//! ```bash
//! cargo run --example build_order
//! ```

use hodos::{DirectedGraph, Edge, Node};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hodos Build Order Example ===\n");

    let mut graph = DirectedGraph::build(|g| {
        g.add_nodes(
            ["fetch", "codegen", "compile", "lint", "test", "package", "publish"].map(Node::new),
        )?;
        g.add_edges([
            Edge::new(Node::new("fetch"), Node::new("codegen")),
            Edge::new(Node::new("fetch"), Node::new("lint")),
            Edge::new(Node::new("codegen"), Node::new("compile")),
            Edge::new(Node::new("compile"), Node::new("test")),
            Edge::new(Node::new("lint"), Node::new("test")),
            Edge::new(Node::new("test"), Node::new("package")),
            Edge::new(Node::new("package"), Node::new("publish")),
        ])
    })?;

    println!("1. Execution order:");
    for (index, task) in graph.checked_topological_sort()?.iter().enumerate() {
        println!("   {}. {}", index + 1, task);
    }

    println!("\n2. Pipeline as Graphviz DOT:\n");
    println!("{}", graph.to_dot());

    // A deploy task that depends on publish but also gates the tests makes
    // the pipeline circular.
    graph.add_node(Node::new("deploy"))?;
    graph.add_edges([
        Edge::new(Node::new("publish"), Node::new("deploy")),
        Edge::new(Node::new("deploy"), Node::new("test")),
    ])?;

    println!("3. After wiring 'deploy' back into 'test':");
    match graph.checked_topological_sort() {
        Ok(_) => println!("   unexpectedly ordered a cyclic pipeline"),
        Err(error) => println!("   {}", error),
    }

    Ok(())
}
