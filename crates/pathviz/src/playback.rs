// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Step Playback
//!
//! Replays a recorded [`StepLog`] against visualization hooks at a paced
//! cadence. Cooperative and single-threaded: the host pumps
//! [`PlaybackController::tick`] from its frame loop and the controller
//! delivers at most one due step per pump. No timers, no threads.
//!
//! Each delivered step schedules the next one `delay` later. Pausing keeps
//! the position; resuming re-arms a full delay from the resume. Stopping
//! returns to [`PlaybackState::Idle`] without touching the visualization,
//! so the last rendered frame stays on screen.

use std::time::{Duration, Instant};

use tracing::debug;

use pathviz_algo::search::step::StepLog;
use pathviz_common::config::PlaybackConfig;
use pathviz_common::core::id::{EdgeId, NodeId};

/// Visualization callbacks driven by playback.
///
/// All methods default to no-ops so a consumer can implement just the ones
/// its renderer needs.
pub trait PlaybackHooks {
    /// Clear any visited/path styling from a previous replay.
    fn reset(&mut self) {}

    /// A node was settled by the recorded search.
    fn visit_node(&mut self, _node: &NodeId) {}

    /// A node lies on the final path.
    fn mark_path_node(&mut self, _node: &NodeId) {}

    /// An edge lies on the final path.
    fn mark_path_edge(&mut self, _edge: &EdgeId) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No replay in progress.
    Idle,
    /// Steps are being delivered as they come due.
    Running,
    /// Replay halted mid-log; position is retained.
    Paused,
    /// Every step has been delivered.
    Completed,
}

/// Tick-driven replay of a [`StepLog`].
pub struct PlaybackController<H: PlaybackHooks> {
    log: StepLog,
    hooks: H,
    delay: Duration,
    state: PlaybackState,
    position: usize,
    /// Due time of the next step; `None` unless running.
    next_fire: Option<Instant>,
}

impl<H: PlaybackHooks> PlaybackController<H> {
    pub fn new(log: StepLog, hooks: H) -> Self {
        Self::with_config(log, hooks, PlaybackConfig::default())
    }

    pub fn with_config(log: StepLog, hooks: H, config: PlaybackConfig) -> Self {
        Self {
            log,
            hooks,
            delay: config.step_delay,
            state: PlaybackState::Idle,
            position: 0,
            next_fire: None,
        }
    }

    /// Starts a replay from the beginning. Only valid from [`PlaybackState::Idle`].
    ///
    /// Fires [`PlaybackHooks::reset`] and arms the first step one delay out.
    /// An empty log completes immediately. Returns whether the transition
    /// happened.
    pub fn play(&mut self) -> bool {
        if self.state != PlaybackState::Idle {
            return false;
        }
        self.hooks.reset();
        self.position = 0;
        if self.log.is_empty() {
            debug!("Playback of empty step log, completing immediately");
            self.state = PlaybackState::Completed;
            self.next_fire = None;
        } else {
            debug!(
                steps = self.log.len(),
                delay_ms = self.delay.as_millis() as u64,
                "Playback started"
            );
            self.state = PlaybackState::Running;
            self.next_fire = Some(Instant::now() + self.delay);
        }
        true
    }

    /// Halts delivery, retaining the position. Returns whether the
    /// transition happened.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        debug!(position = self.position, "Playback paused");
        self.state = PlaybackState::Paused;
        self.next_fire = None;
        true
    }

    /// Resumes a paused replay, re-arming a full current delay from now.
    /// A delay changed while paused takes effect here. Returns whether the
    /// transition happened.
    pub fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        debug!(position = self.position, "Playback resumed");
        self.state = PlaybackState::Running;
        self.next_fire = Some(Instant::now() + self.delay);
        true
    }

    /// Aborts the replay from any non-idle state. The visualization is left
    /// as-is; no hook fires. Returns whether the transition happened.
    pub fn stop(&mut self) -> bool {
        if self.state == PlaybackState::Idle {
            return false;
        }
        debug!(position = self.position, "Playback stopped");
        self.state = PlaybackState::Idle;
        self.next_fire = None;
        true
    }

    /// Changes the inter-step delay.
    ///
    /// Takes effect at the next scheduling boundary: an already-armed step
    /// keeps its due time, and every arming after it uses the new delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Delivers the armed step if it is due, then arms the next one.
    ///
    /// Returns whether a step was delivered. A delivered step's callbacks
    /// always run to completion; cancellation is only observed between
    /// deliveries.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        let Some(due) = self.next_fire else {
            return false;
        };
        if now < due {
            return false;
        }
        let Some(step) = self.log.get(self.position) else {
            self.state = PlaybackState::Completed;
            self.next_fire = None;
            return false;
        };

        if step.is_terminal() {
            for node in &step.path {
                self.hooks.mark_path_node(node);
            }
            for edge in &step.path_edges {
                self.hooks.mark_path_edge(edge);
            }
        } else if let Some(current) = &step.current {
            self.hooks.visit_node(current);
        }

        self.position += 1;
        if self.position >= self.log.len() {
            debug!(steps = self.log.len(), "Playback completed");
            self.state = PlaybackState::Completed;
            self.next_fire = None;
        } else {
            self.next_fire = Some(now + self.delay);
        }
        true
    }

    /// [`Self::tick_at`] against the wall clock.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the next step to deliver.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Consumes the controller, handing the hooks back.
    pub fn into_hooks(self) -> H {
        self.hooks
    }
}
