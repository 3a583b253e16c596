// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Fluent entry points over the search engine.

pub mod search;

pub use search::{Search, SearchBuilder};
