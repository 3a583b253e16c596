// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Depth-First Search.
//!
//! Dives along the most recently discovered edge before backtracking.
//! Finds *a* path, with no optimality claim of any kind; useful in the
//! visualizer precisely because its exploration looks so different from
//! the cost-ordered algorithms.

use crate::search::algorithms::Algorithm;
use crate::search::driver::{ExpandPolicy, run_with_frontier};
use crate::search::frontier::LifoFrontier;
use crate::search::result::AlgorithmResult;
use crate::search::step::StepSink;
use pathviz_common::core::id::NodeId;
use pathviz_common::graph::model::Graph;

pub struct Dfs;

#[derive(Debug, Clone)]
pub struct DfsConfig {
    pub start: NodeId,
    pub goal: NodeId,
}

impl DfsConfig {
    pub fn new(start: impl Into<NodeId>, goal: impl Into<NodeId>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

impl Algorithm for Dfs {
    type Config = DfsConfig;

    fn name() -> &'static str {
        "dfs"
    }

    fn run(graph: &Graph, config: Self::Config, sink: &mut dyn StepSink) -> AlgorithmResult {
        run_with_frontier(
            graph,
            config.start.as_str(),
            config.goal.as_str(),
            LifoFrontier::new(),
            ExpandPolicy::UnvisitedOnly,
            |_, _, _, cost| cost,
            sink,
        )
    }
}
