// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Fluent construction of graph snapshots.
//!
//! The builder numbers auto-labels from its own counter, so two builders
//! never contend and a rebuilt graph restarts at "Node 1". Nothing here
//! validates; call [`Graph::validate`] on the result when the input is
//! untrusted.

use crate::core::id::{EdgeId, NodeId};
use crate::geometry::Point;
use crate::graph::model::{Edge, EdgeKind, Graph, Node, NodeRole};

/// Builds a [`Graph`] snapshot incrementally.
#[must_use = "builders do nothing until .build() is called"]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    /// Display-label counter, scoped to this builder.
    next_label: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with an auto-generated `"Node N"` label.
    pub fn node(mut self, id: impl Into<NodeId>, position: impl Into<Point>) -> Self {
        self.next_label += 1;
        let label = format!("Node {}", self.next_label);
        let mut node = Node::new(id, position);
        node.label = Some(label);
        self.graph.add_node(node);
        self
    }

    /// Adds a node with an explicit label and role.
    pub fn labeled_node(
        mut self,
        id: impl Into<NodeId>,
        position: impl Into<Point>,
        label: impl Into<String>,
        role: NodeRole,
    ) -> Self {
        let mut node = Node::new(id, position);
        node.label = Some(label.into());
        node.role = role;
        self.graph.add_node(node);
        self
    }

    /// Adds a directed edge.
    pub fn edge(
        mut self,
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        weight: f64,
    ) -> Self {
        self.graph.add_edge(Edge::new(id, source, target, weight));
        self
    }

    /// Adds an undirected edge.
    pub fn undirected_edge(
        mut self,
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        weight: f64,
    ) -> Self {
        self.graph
            .add_edge(Edge::undirected(id, source, target, weight));
        self
    }

    /// Adds an edge with an explicit kind.
    pub fn edge_with_kind(
        mut self,
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        weight: f64,
        kind: EdgeKind,
    ) -> Self {
        let mut edge = Edge::new(id, source, target, weight);
        edge.kind = kind;
        self.graph.add_edge(edge);
        self
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}
