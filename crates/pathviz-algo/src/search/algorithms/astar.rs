// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! A* Search Algorithm.
//!
//! Best-first search ordered by `accumulated cost + heuristic(node, goal)`,
//! where the heuristic is a distance metric over canvas positions,
//! recomputed per discovered neighbor. With an admissible heuristic the
//! returned cost equals Dijkstra's; an inadmissible one (weights out of
//! scale with the geometry) trades optimality for fewer settles.

use crate::search::algorithms::Algorithm;
use crate::search::driver::{ExpandPolicy, run_with_frontier};
use crate::search::frontier::PriorityFrontier;
use crate::search::result::AlgorithmResult;
use crate::search::step::StepSink;
use pathviz_common::core::id::NodeId;
use pathviz_common::geometry::DistanceMetric;
use pathviz_common::graph::model::Graph;

pub struct AStar;

#[derive(Debug, Clone)]
pub struct AStarConfig {
    pub start: NodeId,
    pub goal: NodeId,
    /// Remaining-cost estimate; Euclidean unless the caller says otherwise.
    pub heuristic: DistanceMetric,
}

impl AStarConfig {
    pub fn new(start: impl Into<NodeId>, goal: impl Into<NodeId>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            heuristic: DistanceMetric::default(),
        }
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: DistanceMetric) -> Self {
        self.heuristic = heuristic;
        self
    }
}

impl Algorithm for AStar {
    type Config = AStarConfig;

    fn name() -> &'static str {
        "astar"
    }

    fn run(graph: &Graph, config: Self::Config, sink: &mut dyn StepSink) -> AlgorithmResult {
        let metric = config.heuristic;
        run_with_frontier(
            graph,
            config.start.as_str(),
            config.goal.as_str(),
            PriorityFrontier::new(),
            ExpandPolicy::CostRelax,
            move |index, node, goal, cost| {
                cost + metric.between(index.position(node), index.position(goal))
            },
            sink,
        )
    }
}
