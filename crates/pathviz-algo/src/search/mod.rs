// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Search Execution Engine
//!
//! This module runs pathfinding algorithms over graph snapshots and
//! narrates them step by step for visualization consumers.
//!
//! # Architecture
//!
//! Every algorithm is the same loop with a different frontier:
//!
//! - **[`frontier`]**: FIFO (BFS), LIFO (DFS) and priority (Dijkstra, A*)
//!   frontiers behind one trait.
//! - **[`driver`]**: the shared settle/expand loop. Pops, settles, emits a
//!   step, expands neighbors per the admission policy.
//! - **[`index`]**: slot-compressed adjacency built once per run, so the
//!   loop works on `u32` slots instead of string ids.
//!
//! [`dispatch`] routes a typed [`SearchRequest`]; [`dispatch_named`] accepts
//! untrusted string names and degrades to an empty result instead of
//! erroring, so a stale UI request can never poison a session.

pub mod algorithms;
pub mod driver;
pub mod frontier;
pub mod index;
pub mod result;
pub mod step;

pub mod test_utils;

pub use algorithms::{
    AStar, AStarConfig, Algorithm, Bfs, BfsConfig, Dfs, DfsConfig, Dijkstra, DijkstraConfig,
};
pub use driver::{ExpandPolicy, run_with_frontier};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, QueueItem};
pub use index::GraphIndex;
pub use result::AlgorithmResult;
pub use step::{DiscardSteps, SinkFn, StepLog, StepResult, StepSink, sink_fn};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use pathviz_common::api::error::PathvizError;
use pathviz_common::core::id::NodeId;
use pathviz_common::geometry::DistanceMetric;
use pathviz_common::graph::model::Graph;

/// Closed set of algorithms the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl AlgorithmKind {
    /// Wire name, matching what [`FromStr`] accepts.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = PathvizError;

    /// Names are lowercase and exact; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" => Ok(Self::AStar),
            other => Err(PathvizError::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// A fully-specified search, ready to dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub algorithm: AlgorithmKind,
    pub start: NodeId,
    pub goal: NodeId,
    /// Consulted by A* only; other algorithms ignore it. (default: euclidean)
    #[serde(default)]
    pub heuristic: DistanceMetric,
}

impl SearchRequest {
    pub fn new(algorithm: AlgorithmKind, start: impl Into<NodeId>, goal: impl Into<NodeId>) -> Self {
        Self {
            algorithm,
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

/// Runs the requested algorithm against `graph`, emitting steps into `sink`.
#[instrument(skip(graph, sink), level = "debug")]
pub fn dispatch(graph: &Graph, request: &SearchRequest, sink: &mut dyn StepSink) -> AlgorithmResult {
    debug!(
        algorithm = %request.algorithm,
        start = %request.start,
        goal = %request.goal,
        "Dispatching search"
    );
    metrics::counter!("pathviz_search_runs_total").increment(1);

    let result = match request.algorithm {
        AlgorithmKind::Bfs => Bfs::run(
            graph,
            BfsConfig::new(request.start.clone(), request.goal.clone()),
            sink,
        ),
        AlgorithmKind::Dfs => Dfs::run(
            graph,
            DfsConfig::new(request.start.clone(), request.goal.clone()),
            sink,
        ),
        AlgorithmKind::Dijkstra => Dijkstra::run(
            graph,
            DijkstraConfig::new(request.start.clone(), request.goal.clone()),
            sink,
        ),
        AlgorithmKind::AStar => AStar::run(
            graph,
            AStarConfig::new(request.start.clone(), request.goal.clone())
                .with_heuristic(request.heuristic),
            sink,
        ),
    };

    metrics::counter!("pathviz_search_settled_total").increment(result.nodes_visited as u64);
    result
}

/// [`dispatch`] for untrusted string names, e.g. straight off a UI control.
///
/// An unknown algorithm or heuristic name is logged and answered with an
/// empty result; the sink sees nothing. A missing heuristic means Euclidean.
#[instrument(skip(graph, sink), level = "debug")]
pub fn dispatch_named(
    graph: &Graph,
    start: &str,
    goal: &str,
    algorithm: &str,
    heuristic: Option<&str>,
    sink: &mut dyn StepSink,
) -> AlgorithmResult {
    let Ok(kind) = algorithm.parse::<AlgorithmKind>() else {
        warn!(algorithm, "Unknown algorithm requested, returning empty result");
        return AlgorithmResult::empty();
    };
    let metric = match heuristic {
        None => DistanceMetric::default(),
        Some(name) => match name.parse::<DistanceMetric>() {
            Ok(metric) => metric,
            Err(_) => {
                warn!(
                    heuristic = name,
                    "Unknown heuristic requested, returning empty result"
                );
                return AlgorithmResult::empty();
            }
        },
    };

    let request = SearchRequest::new(kind, start, goal).with_heuristic(metric);
    dispatch(graph, &request, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_utils::weighted_demo_graph;

    #[test]
    fn test_algorithm_kind_parses_exact_names() {
        assert_eq!("bfs".parse::<AlgorithmKind>().ok(), Some(AlgorithmKind::Bfs));
        assert_eq!("dfs".parse::<AlgorithmKind>().ok(), Some(AlgorithmKind::Dfs));
        assert_eq!(
            "dijkstra".parse::<AlgorithmKind>().ok(),
            Some(AlgorithmKind::Dijkstra)
        );
        assert_eq!(
            "astar".parse::<AlgorithmKind>().ok(),
            Some(AlgorithmKind::AStar)
        );
    }

    #[test]
    fn test_algorithm_kind_rejects_unknown_and_cased_names() {
        assert!(matches!(
            "BFS".parse::<AlgorithmKind>(),
            Err(PathvizError::UnknownAlgorithm { name }) if name == "BFS"
        ));
        assert!(matches!(
            "bellman-ford".parse::<AlgorithmKind>(),
            Err(PathvizError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_dispatch_routes_every_kind() {
        let g = weighted_demo_graph();
        for kind in [
            AlgorithmKind::Bfs,
            AlgorithmKind::Dfs,
            AlgorithmKind::Dijkstra,
            AlgorithmKind::AStar,
        ] {
            let request = SearchRequest::new(kind, "n0", "n5");
            let result = dispatch(&g, &request, &mut DiscardSteps);
            assert!(result.is_found(), "{kind} found no path");
            assert_eq!(result.path.first().map(|n| n.as_str()), Some("n0"));
            assert_eq!(result.path.last().map(|n| n.as_str()), Some("n5"));
        }
    }

    #[test]
    fn test_dispatch_named_unknown_algorithm_is_silent() {
        let g = weighted_demo_graph();
        let mut log = StepLog::new();
        let result = dispatch_named(&g, "n0", "n5", "bellman-ford", None, &mut log);

        assert!(!result.is_found());
        assert_eq!(result.nodes_visited, 0);
        // No steps leak out of a rejected request
        assert!(log.is_empty());
    }

    #[test]
    fn test_dispatch_named_unknown_heuristic_is_silent_for_any_algorithm() {
        let g = weighted_demo_graph();
        let mut log = StepLog::new();
        // BFS would not consult the heuristic, but a bad name still rejects
        let result = dispatch_named(&g, "n0", "n5", "bfs", Some("chebyshev"), &mut log);

        assert!(!result.is_found());
        assert!(log.is_empty());
    }

    #[test]
    fn test_dispatch_named_defaults_heuristic_to_euclidean() {
        let g = weighted_demo_graph();
        let defaulted = dispatch_named(&g, "n0", "n5", "astar", None, &mut DiscardSteps);
        let explicit = dispatch_named(&g, "n0", "n5", "astar", Some("euclidean"), &mut DiscardSteps);

        assert_eq!(defaulted.path, explicit.path);
        assert_eq!(defaulted.path_cost, explicit.path_cost);
    }

    #[test]
    fn test_search_request_serde_defaults_heuristic() {
        let json = r#"{"algorithm":"astar","start":"n0","goal":"n5"}"#;
        let request: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm, AlgorithmKind::AStar);
        assert_eq!(request.heuristic, DistanceMetric::Euclidean);

        let manhattan = r#"{"algorithm":"bfs","start":"a","goal":"b","heuristic":"manhattan"}"#;
        let request: SearchRequest = serde_json::from_str(manhattan).unwrap();
        assert_eq!(request.heuristic, DistanceMetric::Manhattan);
    }
}
