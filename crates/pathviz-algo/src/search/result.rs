// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use pathviz_common::core::id::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Final summary of one search run.
///
/// Every recoverable failure (unreachable goal, missing start or goal,
/// unknown algorithm kind) is expressed as an empty path here, never as an
/// error value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Node ids from start to goal inclusive; empty when no path was found.
    pub path: Vec<NodeId>,
    /// Edge ids walked by `path`, one fewer than its nodes.
    pub path_edges: Vec<EdgeId>,
    /// Number of nodes on `path`.
    pub path_length: usize,
    /// Sum of edge weights along `path`; 0 when no path was found.
    pub path_cost: f64,
    /// Nodes settled before termination.
    pub nodes_visited: usize,
    /// Wall time of the run, including index construction.
    pub elapsed: Duration,
}

impl AlgorithmResult {
    /// The zero value returned for every recoverable failure.
    pub fn empty() -> Self {
        Self {
            path: Vec::new(),
            path_edges: Vec::new(),
            path_length: 0,
            path_cost: 0.0,
            nodes_visited: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Whether a path from start to goal was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

impl Default for AlgorithmResult {
    fn default() -> Self {
        Self::empty()
    }
}
