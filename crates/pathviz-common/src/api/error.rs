// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PathvizError {
    /// Algorithm kind string not in the supported set
    #[error("Unknown algorithm '{name}': expected one of bfs, dfs, dijkstra, astar")]
    UnknownAlgorithm { name: String },

    /// Heuristic kind string not in the supported set
    #[error("Unknown heuristic '{name}': expected one of euclidean, manhattan")]
    UnknownHeuristic { name: String },

    /// Edge endpoint does not exist in the node list
    #[error("Edge '{edge}' references missing node '{node}'")]
    DanglingEdge { edge: String, node: String },

    /// Node id appears more than once in a snapshot
    #[error("Duplicate node id '{node}'")]
    DuplicateNode { node: String },

    /// Edge id appears more than once in a snapshot
    #[error("Duplicate edge id '{edge}'")]
    DuplicateEdge { edge: String },

    /// Edge weight is not a positive finite number
    #[error("Edge '{edge}' has invalid weight {weight}: weights must be positive and finite")]
    InvalidWeight { edge: String, weight: f64 },
}

pub type Result<T> = std::result::Result<T, PathvizError>;
