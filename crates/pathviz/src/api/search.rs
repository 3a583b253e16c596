// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use tracing::warn;

use pathviz_algo::search::step::{DiscardSteps, StepLog, StepSink};
use pathviz_algo::search::{AlgorithmKind, AlgorithmResult, SearchRequest, dispatch};
use pathviz_common::core::id::NodeId;
use pathviz_common::geometry::DistanceMetric;
use pathviz_common::graph::model::Graph;

/// Entry point for running a search over a graph snapshot.
///
/// # Example
///
/// ```
/// use pathviz::{AlgorithmKind, GraphBuilder, Search};
///
/// let graph = GraphBuilder::new()
///     .node("a", (0.0, 0.0))
///     .node("b", (100.0, 0.0))
///     .edge("e1", "a", "b", 1.0)
///     .build();
///
/// let result = Search::on(&graph)
///     .algorithm(AlgorithmKind::Dijkstra)
///     .from("a")
///     .to("b")
///     .run();
///
/// assert!(result.is_found());
/// ```
pub struct Search;

impl Search {
    /// Starts configuring a search over `graph`. Defaults to BFS with a
    /// Euclidean heuristic.
    pub fn on(graph: &Graph) -> SearchBuilder<'_> {
        SearchBuilder::new(graph)
    }
}

#[must_use = "builders do nothing until .run() is called"]
pub struct SearchBuilder<'a> {
    graph: &'a Graph,
    algorithm: AlgorithmKind,
    start: Option<NodeId>,
    goal: Option<NodeId>,
    heuristic: DistanceMetric,
}

impl<'a> SearchBuilder<'a> {
    fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            algorithm: AlgorithmKind::Bfs,
            start: None,
            goal: None,
            heuristic: DistanceMetric::default(),
        }
    }

    pub fn algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn from(mut self, start: impl Into<NodeId>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn to(mut self, goal: impl Into<NodeId>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    /// Remaining-cost estimate for A*; other algorithms ignore it.
    pub fn heuristic(mut self, heuristic: DistanceMetric) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Runs the search, discarding steps.
    pub fn run(self) -> AlgorithmResult {
        self.run_with(&mut DiscardSteps)
    }

    /// Runs the search, recording every step for later inspection or replay.
    pub fn run_recorded(self) -> (AlgorithmResult, StepLog) {
        let mut log = StepLog::new();
        let result = self.run_with(&mut log);
        (result, log)
    }

    /// Runs the search, streaming steps into `sink` as nodes settle.
    ///
    /// A builder missing `.from()` or `.to()` yields the empty result and
    /// emits nothing.
    pub fn run_with(self, sink: &mut dyn StepSink) -> AlgorithmResult {
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            warn!("Search missing start or goal, returning empty result");
            return AlgorithmResult::empty();
        };
        let request = SearchRequest::new(self.algorithm, start, goal).with_heuristic(self.heuristic);
        dispatch(self.graph, &request, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_algo::search::test_utils::weighted_demo_graph;

    #[test]
    fn test_builder_runs_selected_algorithm() {
        let g = weighted_demo_graph();
        let result = Search::on(&g)
            .algorithm(AlgorithmKind::Dijkstra)
            .from("n0")
            .to("n5")
            .run();

        let path: Vec<&str> = result.path.iter().map(|n| n.as_str()).collect();
        assert_eq!(path, ["n0", "n3", "n5"]);
        assert_eq!(result.path_cost, 10.0);
    }

    #[test]
    fn test_builder_defaults_to_bfs() {
        let g = weighted_demo_graph();
        let (result, log) = Search::on(&g).from("n0").to("n5").run_recorded();

        assert!(result.is_found());
        // BFS settles in discovery order, breadth first
        assert_eq!(log.len(), result.nodes_visited + 1);
        assert!(log.is_complete());
    }

    #[test]
    fn test_builder_without_endpoints_is_empty() {
        let g = weighted_demo_graph();
        let mut log = StepLog::new();
        let result = Search::on(&g).algorithm(AlgorithmKind::Bfs).run_with(&mut log);

        assert!(!result.is_found());
        assert_eq!(result.nodes_visited, 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_run_recorded_matches_run() {
        let g = weighted_demo_graph();
        let plain = Search::on(&g)
            .algorithm(AlgorithmKind::AStar)
            .from("n0")
            .to("n5")
            .run();
        let (recorded, log) = Search::on(&g)
            .algorithm(AlgorithmKind::AStar)
            .from("n0")
            .to("n5")
            .run_recorded();

        assert_eq!(plain.path, recorded.path);
        assert_eq!(plain.path_cost, recorded.path_cost);
        assert_eq!(log.len(), recorded.nodes_visited + 1);
    }
}
