// ABOUTME: Main library entry point for the Skywatch condition scoring engine
// ABOUTME: Re-exports the scoring API and adds logging setup and JSON input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

#![deny(unsafe_code)]

//! # Skywatch
//!
//! Turns weather, astronomical and geomagnetic measurements into "is it worth
//! going outside or looking up tonight" answers: a bounded 0-100 score, a
//! qualitative rating, and the best contiguous viewing windows of a forecast.
//!
//! ## Architecture
//!
//! - **`skywatch-core`**: models, constants and the unified error type
//! - **`skywatch-intelligence`**: factor curves, aggregation, window finding, moon phases
//! - **this crate**: re-exports, logging setup and JSON input loading for the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use skywatch::models::{ConditionsSnapshot, Rating, ScoreVariant};
//!
//! let snapshot = ConditionsSnapshot {
//!     cloud_cover: Some(10.0),
//!     humidity: Some(40.0),
//!     visibility: Some(10_000.0),
//!     wind_speed: Some(2.0),
//!     moon_phase: Some(0.1),
//!     ..ConditionsSnapshot::default()
//! };
//! let result = skywatch::score_conditions(ScoreVariant::Sky, &snapshot);
//! assert_eq!(result.score, 91);
//! assert_eq!(result.rating, Rating::Excellent);
//! ```

/// Reading snapshots and hourly series from JSON files or stdin
pub mod input;
/// Structured logging setup
pub mod logging;

pub use skywatch_core::{constants, errors, models};
pub use skywatch_intelligence::{
    aggregator, config, factors, find_window, min_kp_for_latitude, moon_phase_info,
    score_conditions, ConfigError, EngineConfig, ScoringEngine, WindowConfig,
};
