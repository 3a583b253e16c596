// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Breadth-First Search.
//!
//! Explores in discovery order, layer by layer. BFS is weight-agnostic: it
//! minimizes hop count, not cost, and its result's `path_cost` is simply
//! the weight sum along the hop-minimal path it happened to find.

use crate::search::algorithms::Algorithm;
use crate::search::driver::{ExpandPolicy, run_with_frontier};
use crate::search::frontier::FifoFrontier;
use crate::search::result::AlgorithmResult;
use crate::search::step::StepSink;
use pathviz_common::core::id::NodeId;
use pathviz_common::graph::model::Graph;

pub struct Bfs;

#[derive(Debug, Clone)]
pub struct BfsConfig {
    pub start: NodeId,
    pub goal: NodeId,
}

impl BfsConfig {
    pub fn new(start: impl Into<NodeId>, goal: impl Into<NodeId>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

impl Algorithm for Bfs {
    type Config = BfsConfig;

    fn name() -> &'static str {
        "bfs"
    }

    fn run(graph: &Graph, config: Self::Config, sink: &mut dyn StepSink) -> AlgorithmResult {
        run_with_frontier(
            graph,
            config.start.as_str(),
            config.goal.as_str(),
            FifoFrontier::new(),
            ExpandPolicy::UnvisitedOnly,
            |_, _, _, cost| cost,
            sink,
        )
    }
}
