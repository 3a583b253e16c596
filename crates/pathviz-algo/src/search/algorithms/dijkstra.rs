// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dijkstra's Shortest Path Algorithm.
//!
//! Settles nodes in ascending order of accumulated cost, which makes the
//! first settle of any node its cheapest. Optimal for non-negative weights;
//! behavior with negative or zero weights is undefined and unvalidated.

use crate::search::algorithms::Algorithm;
use crate::search::driver::{ExpandPolicy, run_with_frontier};
use crate::search::frontier::PriorityFrontier;
use crate::search::result::AlgorithmResult;
use crate::search::step::StepSink;
use pathviz_common::core::id::NodeId;
use pathviz_common::graph::model::Graph;

pub struct Dijkstra;

#[derive(Debug, Clone)]
pub struct DijkstraConfig {
    pub start: NodeId,
    pub goal: NodeId,
}

impl DijkstraConfig {
    pub fn new(start: impl Into<NodeId>, goal: impl Into<NodeId>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

impl Algorithm for Dijkstra {
    type Config = DijkstraConfig;

    fn name() -> &'static str {
        "dijkstra"
    }

    fn run(graph: &Graph, config: Self::Config, sink: &mut dyn StepSink) -> AlgorithmResult {
        run_with_frontier(
            graph,
            config.start.as_str(),
            config.goal.as_str(),
            PriorityFrontier::new(),
            ExpandPolicy::CostRelax,
            |_, _, _, cost| cost,
            sink,
        )
    }
}
