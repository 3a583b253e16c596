// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and the four search implementations.

use crate::search::result::AlgorithmResult;
use crate::search::step::StepSink;
use pathviz_common::graph::model::Graph;

/// Core trait for all search algorithms.
pub trait Algorithm: Send + Sync {
    /// Algorithm parameters.
    type Config: Clone + Send + 'static;

    /// Algorithm identifier, as spelled at the dispatch boundary.
    fn name() -> &'static str;

    /// Execute one run against a graph snapshot, emitting steps into `sink`.
    fn run(graph: &Graph, config: Self::Config, sink: &mut dyn StepSink) -> AlgorithmResult;
}

mod bfs;
pub use bfs::{Bfs, BfsConfig};

mod dfs;
pub use dfs::{Dfs, DfsConfig};

mod dijkstra;
pub use dijkstra::{Dijkstra, DijkstraConfig};

mod astar;
pub use astar::{AStar, AStarConfig};
