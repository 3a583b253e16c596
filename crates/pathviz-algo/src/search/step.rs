// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Step emission protocol.
//!
//! A run reports its progress as a sequence of [`StepResult`] values: one
//! per settled node, then exactly one terminal step. Steps flow into a
//! [`StepSink`] synchronously during the run; [`StepLog`] is the collected
//! form a caller can inspect, iterate and replay with no UI attached.

use pathviz_common::core::id::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One observable unit of search progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Node settled by this step; `None` on the terminal step.
    pub current: Option<NodeId>,
    /// Every node settled so far, in settle order.
    pub visited: Vec<NodeId>,
    /// Best-known path to the settled node; on the terminal step, the final
    /// path (empty when the goal was unreachable).
    pub path: Vec<NodeId>,
    /// Edges of `path`, one fewer than its nodes.
    pub path_edges: Vec<EdgeId>,
    /// Nodes queued in the frontier, deduplicated, in node order.
    pub frontier: Vec<NodeId>,
    /// Set on exactly the last step of a run.
    pub complete: bool,
}

impl StepResult {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.complete
    }
}

/// Receiver for steps as the run produces them.
///
/// Called synchronously from inside the run loop; implementations should
/// not block.
pub trait StepSink {
    fn emit(&mut self, step: StepResult);
}

/// Adapts a closure into a [`StepSink`].
pub fn sink_fn<F: FnMut(StepResult)>(f: F) -> SinkFn<F> {
    SinkFn(f)
}

/// A [`StepSink`] backed by a closure. Built with [`sink_fn`].
#[derive(Clone, Copy, Debug)]
pub struct SinkFn<F>(F);

impl<F: FnMut(StepResult)> StepSink for SinkFn<F> {
    fn emit(&mut self, step: StepResult) {
        (self.0)(step)
    }
}

/// Sink that drops every step, for callers that only want the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSteps;

impl StepSink for DiscardSteps {
    fn emit(&mut self, _step: StepResult) {}
}

/// An owned, ordered, replayable record of a completed run's steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepLog {
    steps: Vec<StepResult>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn steps(&self) -> &[StepResult] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&StepResult> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&StepResult> {
        self.steps.last()
    }

    /// Whether the log ends with a terminal step, i.e. records a full run.
    pub fn is_complete(&self) -> bool {
        self.last().is_some_and(|s| s.complete)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepResult> {
        self.steps.iter()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl StepSink for StepLog {
    fn emit(&mut self, step: StepResult) {
        self.steps.push(step);
    }
}

impl Index<usize> for StepLog {
    type Output = StepResult;

    fn index(&self, index: usize) -> &StepResult {
        &self.steps[index]
    }
}

impl IntoIterator for StepLog {
    type Item = StepResult;
    type IntoIter = std::vec::IntoIter<StepResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a StepResult;
    type IntoIter = std::slice::Iter<'a, StepResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl FromIterator<StepResult> for StepLog {
    fn from_iter<I: IntoIterator<Item = StepResult>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
