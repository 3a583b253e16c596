// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph snapshot model shared between the editor, the engine and playback.
//!
//! Nodes and edges live in insertion-ordered vectors. That order is the
//! deterministic substrate for everything downstream: neighbor expansion,
//! duplicate-edge resolution and queue tie-breaking all resolve in edge
//! order. Lookups return `Option` instead of panicking; snapshots arrive
//! from an interactive editor and may reference ids that no longer exist.

use crate::api::error::{PathvizError, Result};
use crate::core::id::{EdgeId, NodeId};
use crate::geometry::Point;
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Presentation role of a node.
///
/// Written by the visualization layer while replaying a run; the engine
/// itself never reads roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    #[default]
    Default,
    Start,
    Goal,
    Visited,
    Path,
}

/// A node on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub role: NodeRole,
    /// Renderer hint (circle, square, ...). Cosmetic only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, position: impl Into<Point>) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
            label: None,
            role: NodeRole::Default,
            shape: None,
        }
    }
}

/// Traversal semantics of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Default,
    /// Cosmetic marker for edges on a found path; traverses like `Default`.
    Path,
    /// Walkable in both directions.
    Undirected,
}

impl EdgeKind {
    #[inline]
    pub fn is_directed(self) -> bool {
        !matches!(self, EdgeKind::Undirected)
    }
}

/// A weighted connection between two nodes.
///
/// `weight` must be positive and finite for search results to be meaningful;
/// the engine does not validate this (see [`Graph::validate`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    #[serde(default)]
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            weight,
            kind: EdgeKind::Default,
        }
    }

    pub fn undirected(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        weight: f64,
    ) -> Self {
        Self {
            kind: EdgeKind::Undirected,
            ..Self::new(id, source, target, weight)
        }
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }
}

/// One traversal step out of a node: the neighbor reached, the edge used
/// and that edge's weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub node: NodeId,
    pub edge: EdgeId,
    pub weight: f64,
}

/// An in-memory graph snapshot.
///
/// Plain data with public fields: the editor owns mutation semantics, the
/// engine only reads. Node and edge vectors keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Looks up a node by id. O(n) scan; the engine builds its own dense
    /// index per run instead of relying on this.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id.as_str() == id)
    }

    /// Finds the edge connecting `source` to `target`: either a directed (or
    /// undirected) edge stored source→target, or an undirected edge stored
    /// target→source. Under duplicates the first match in edge order wins,
    /// in a single pass over both orientations.
    pub fn find_edge(&self, source: &str, target: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| {
            (e.source.as_str() == source && e.target.as_str() == target)
                || (!e.is_directed() && e.source.as_str() == target && e.target.as_str() == source)
        })
    }

    /// Collects every traversal step available from `id`, in edge order:
    /// edges where `id` is the source, plus undirected edges where it is the
    /// target. Recomputed on every call; nothing is cached on the graph.
    pub fn neighbors(&self, id: &str) -> Vec<Neighbor> {
        let mut out = Vec::new();
        for edge in &self.edges {
            if edge.source.as_str() == id {
                out.push(Neighbor {
                    node: edge.target.clone(),
                    edge: edge.id.clone(),
                    weight: edge.weight,
                });
            } else if !edge.is_directed() && edge.target.as_str() == id {
                out.push(Neighbor {
                    node: edge.source.clone(),
                    edge: edge.id.clone(),
                    weight: edge.weight,
                });
            }
        }
        out
    }

    /// Checks the invariants a well-formed snapshot satisfies: unique node
    /// and edge ids, edge endpoints that exist, positive finite weights.
    ///
    /// Opt-in. The engine tolerates malformed snapshots (it skips edges with
    /// missing endpoints and treats missing start/goal as an empty result),
    /// so validation is a courtesy to the editor, not a precondition.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in node order then edge order.
    pub fn validate(&self) -> Result<()> {
        let mut node_ids: FxHashSet<&str> = FxHashSet::default();
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(PathvizError::DuplicateNode {
                    node: node.id.to_string(),
                });
            }
        }

        let mut edge_ids: FxHashSet<&str> = FxHashSet::default();
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(PathvizError::DuplicateEdge {
                    edge: edge.id.to_string(),
                });
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(PathvizError::DanglingEdge {
                        edge: edge.id.to_string(),
                        node: endpoint.to_string(),
                    });
                }
            }
            if !edge.weight.is_finite() || edge.weight <= 0.0 {
                return Err(PathvizError::InvalidWeight {
                    edge: edge.id.to_string(),
                    weight: edge.weight,
                });
            }
        }
        Ok(())
    }
}
