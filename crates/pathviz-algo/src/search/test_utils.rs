// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph fixtures shared by unit tests, integration tests and benches.

use pathviz_common::graph::builder::GraphBuilder;
use pathviz_common::graph::model::Graph;

/// Directed chain `a0 → a1 → ... → a{n-1}` with unit weights.
pub fn line_graph(n: usize) -> Graph {
    let mut b = GraphBuilder::new();
    for i in 0..n {
        b = b.node(format!("a{i}"), (i as f64 * 100.0, 0.0));
    }
    for i in 1..n {
        b = b.edge(format!("e{i}"), format!("a{}", i - 1), format!("a{i}"), 1.0);
    }
    b.build()
}

/// Diamond where hop count and cost disagree: `a→b→d` is 2 hops at cost 9,
/// `a→c→d` is 2 hops at cost 5. Breadth-first discovers via `b` first;
/// cost-ordered search must route via `c`.
pub fn diamond_graph() -> Graph {
    GraphBuilder::new()
        .node("a", (0.0, 0.0))
        .node("b", (100.0, -50.0))
        .node("c", (100.0, 50.0))
        .node("d", (200.0, 0.0))
        .edge("ab", "a", "b", 1.0)
        .edge("ac", "a", "c", 4.0)
        .edge("bd", "b", "d", 8.0)
        .edge("cd", "c", "d", 1.0)
        .build()
}

/// Six-node demo graph with two routes from `n0` to `n5`: the long cheap
/// detour `n0→n1→n2→n4→n5` (cost 17) and the short `n0→n3→n5` (cost 10).
pub fn weighted_demo_graph() -> Graph {
    GraphBuilder::new()
        .node("n0", (150.0, 150.0))
        .node("n1", (300.0, 100.0))
        .node("n2", (450.0, 150.0))
        .node("n3", (150.0, 300.0))
        .node("n4", (450.0, 300.0))
        .node("n5", (300.0, 400.0))
        .edge("e1", "n0", "n1", 2.0)
        .edge("e2", "n1", "n2", 3.0)
        .edge("e3", "n0", "n3", 4.0)
        .edge("e4", "n2", "n4", 5.0)
        .edge("e5", "n3", "n5", 6.0)
        .edge("e6", "n4", "n5", 7.0)
        .build()
}
