// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Per-run dense view of a graph snapshot.
//!
//! Search needs array-indexable state; snapshots carry sparse string ids.
//! A `GraphIndex` is built once per run and provides:
//! - Dense node slots (0..V) assigned in node order, edge slots in edge order
//! - An adjacency table built in one pass over the edge list
//! - Slot-to-id materialization for steps and results
//!
//! The index borrows the snapshot; nothing is copied except slot numbers.

use fxhash::FxHashMap;
use pathviz_common::core::id::{EdgeId, NodeId};
use pathviz_common::geometry::Point;
use pathviz_common::graph::model::Graph;

/// One outgoing adjacency entry: the neighbor reached, the edge used and
/// that edge's weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborEntry {
    pub node: u32,
    pub edge: u32,
    pub weight: f64,
}

/// Dense, read-only traversal view of one [`Graph`] snapshot.
#[derive(Debug)]
pub struct GraphIndex<'g> {
    /// Slot -> node id, in node order.
    node_ids: Vec<&'g NodeId>,
    /// Slot -> canvas position.
    positions: Vec<Point>,
    /// Node id -> slot. First occurrence wins under duplicate ids.
    slots: FxHashMap<&'g str, u32>,
    /// Edge slot -> edge id, in edge order.
    edge_ids: Vec<&'g EdgeId>,
    /// Per-slot adjacency, each list in edge order.
    adjacency: Vec<Vec<NeighborEntry>>,
}

impl<'g> GraphIndex<'g> {
    /// Builds the index in one pass over nodes and one over edges.
    ///
    /// An edge whose endpoint is missing from the node list contributes no
    /// adjacency entries; a malformed snapshot degrades to unreachability
    /// instead of failing.
    pub fn build(graph: &'g Graph) -> Self {
        let mut slots = FxHashMap::default();
        let mut node_ids = Vec::with_capacity(graph.nodes.len());
        let mut positions = Vec::with_capacity(graph.nodes.len());

        for node in &graph.nodes {
            if !slots.contains_key(node.id.as_str()) {
                let slot = node_ids.len() as u32;
                slots.insert(node.id.as_str(), slot);
                node_ids.push(&node.id);
                positions.push(node.position);
            }
        }

        let mut adjacency: Vec<Vec<NeighborEntry>> = vec![Vec::new(); node_ids.len()];
        let mut edge_ids = Vec::with_capacity(graph.edges.len());

        for edge in &graph.edges {
            let edge_slot = edge_ids.len() as u32;
            edge_ids.push(&edge.id);

            let (Some(&src), Some(&dst)) = (
                slots.get(edge.source.as_str()),
                slots.get(edge.target.as_str()),
            ) else {
                continue;
            };

            adjacency[src as usize].push(NeighborEntry {
                node: dst,
                edge: edge_slot,
                weight: edge.weight,
            });
            if !edge.is_directed() && src != dst {
                adjacency[dst as usize].push(NeighborEntry {
                    node: src,
                    edge: edge_slot,
                    weight: edge.weight,
                });
            }
        }

        Self {
            node_ids,
            positions,
            slots,
            edge_ids,
            adjacency,
        }
    }

    /// Number of distinct nodes in the index.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Slot for a node id, if the id exists in the snapshot.
    #[inline]
    pub fn slot(&self, id: &str) -> Option<u32> {
        self.slots.get(id).copied()
    }

    /// Node id for a slot. Slots must come from this index.
    #[inline]
    pub fn node_id(&self, slot: u32) -> &'g NodeId {
        self.node_ids[slot as usize]
    }

    /// Edge id for an edge slot. Slots must come from this index.
    #[inline]
    pub fn edge_id(&self, slot: u32) -> &'g EdgeId {
        self.edge_ids[slot as usize]
    }

    /// Canvas position for a slot.
    #[inline]
    pub fn position(&self, slot: u32) -> Point {
        self.positions[slot as usize]
    }

    /// Outgoing adjacency of a slot, in edge order.
    #[inline]
    pub fn neighbors(&self, slot: u32) -> &[NeighborEntry] {
        &self.adjacency[slot as usize]
    }

    /// Materializes a slot sequence into owned node ids.
    pub fn node_path(&self, slots: &[u32]) -> Vec<NodeId> {
        slots.iter().map(|&s| self.node_id(s).clone()).collect()
    }

    /// Materializes an edge-slot sequence into owned edge ids.
    pub fn edge_path(&self, slots: &[u32]) -> Vec<EdgeId> {
        slots.iter().map(|&s| self.edge_id(s).clone()).collect()
    }
}
