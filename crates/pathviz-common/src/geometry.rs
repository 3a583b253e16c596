// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::api::error::PathvizError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A position on the 2D canvas.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Distance metric over canvas positions, used as the A* heuristic.
///
/// Both metrics return non-negative finite values for finite inputs. Whether
/// a metric is admissible (never overestimates the true remaining cost)
/// depends on the edge weights of the graph it is applied to; A* optimality
/// holds only when it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Straight-line distance: sqrt(dx^2 + dy^2).
    #[default]
    Euclidean,
    /// Taxicab distance: |dx| + |dy|.
    Manhattan,
}

impl DistanceMetric {
    /// Distance between two points under this metric.
    pub fn between(self, a: Point, b: Point) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        match self {
            DistanceMetric::Euclidean => (dx * dx + dy * dy).sqrt(),
            DistanceMetric::Manhattan => dx.abs() + dy.abs(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = PathvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(DistanceMetric::Euclidean),
            "manhattan" => Ok(DistanceMetric::Manhattan),
            other => Err(PathvizError::UnknownHeuristic {
                name: other.to_string(),
            }),
        }
    }
}
