// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod search;

pub use search::algorithms::{
    AStar, AStarConfig, Algorithm, Bfs, BfsConfig, Dfs, DfsConfig, Dijkstra, DijkstraConfig,
};
pub use search::result::AlgorithmResult;
pub use search::step::{DiscardSteps, SinkFn, StepLog, StepResult, StepSink, sink_fn};
pub use search::{AlgorithmKind, SearchRequest, dispatch, dispatch_named};
