// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! # Pathviz - Pathfinding Visualization Engine
//!
//! Pathviz runs BFS, DFS, Dijkstra and A* over 2D graph snapshots, narrating
//! every run as a replayable step sequence for visualization frontends.

pub mod api;
pub mod playback;

pub use api::search::{Search, SearchBuilder};
pub use playback::{PlaybackController, PlaybackHooks, PlaybackState};

// Re-exports from internal crates
pub use pathviz_algo::{
    AlgorithmKind, AlgorithmResult, DiscardSteps, SearchRequest, StepLog, StepResult, StepSink,
    dispatch, dispatch_named, sink_fn,
};
pub use pathviz_common::{
    DistanceMetric, Edge, EdgeId, EdgeKind, Graph, GraphBuilder, Neighbor, Node, NodeId, NodeRole,
    PathvizError, PlaybackConfig, Point, Result,
};

// Re-export crates
pub use pathviz_algo as algo;
pub use pathviz_common as common;
