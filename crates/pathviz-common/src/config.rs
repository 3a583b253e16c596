// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use std::time::Duration;

/// Configuration for step replay pacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between delivered steps (default: 500ms)
    pub step_delay: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(500),
        }
    }
}

impl PlaybackConfig {
    /// Shorthand for a config with the given delay.
    #[must_use]
    pub fn with_delay(step_delay: Duration) -> Self {
        Self { step_delay }
    }
}
