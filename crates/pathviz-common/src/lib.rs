// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;
pub mod geometry;

pub mod core {
    pub mod id;
}

pub mod graph {
    pub mod builder;
    pub mod model;
}

// Re-exports for convenience
pub use api::error::{PathvizError, Result};
pub use config::PlaybackConfig;
pub use core::id::{EdgeId, NodeId};
pub use geometry::{DistanceMetric, Point};
pub use graph::builder::GraphBuilder;
pub use graph::model::{Edge, EdgeKind, Graph, Neighbor, Node, NodeRole};
