// ABOUTME: Condition scoring and viewing-window detection engine
// ABOUTME: Factor curves, weighted aggregation, aurora latitude thresholds, window finding, moon phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

#![deny(unsafe_code)]

//! # Skywatch Intelligence
//!
//! Converts environmental measurements into bounded 0-100 suitability scores
//! and finds the best contiguous viewing windows in an hourly forecast.
//!
//! Everything here is a pure function of its inputs. No function returns an
//! error: missing, `NaN` or infinite measurements are replaced by documented
//! defaults before any arithmetic. Only [`EngineConfig::load`] can fail.
//!
//! The free functions use [`EngineConfig::default`]; build a
//! [`ScoringEngine`] to score with loaded or custom settings.

/// Weighted-sum aggregation, override caps and rating tables
pub mod aggregator;
/// Parallel batch scoring
pub mod batch;
/// Engine configuration and environment overrides
pub mod config;
/// Scoring engine with explicit configuration
pub mod engine;
/// Per-factor scoring curves
pub mod factors;
/// Aurora latitude threshold model
pub mod latitude;
/// Moon phase naming and illumination
pub mod moon;
/// Sky, aurora and outdoor scoring variants
pub mod variants;
/// Clear-sky and aurora window detection
pub mod window_finder;

pub use config::{ConfigError, EngineConfig, WindowConfig};
pub use engine::ScoringEngine;
pub use latitude::min_kp_for_latitude;
pub use moon::moon_phase_info;

use config::ScoringConfig;
use skywatch_core::models::{
    ConditionsSnapshot, HourSample, ScoreResult, ScoreVariant, WindowOutcome, WindowVariant,
};
use window_finder::find_window_with;

/// Score one snapshot with the default configuration
#[must_use]
pub fn score_conditions(variant: ScoreVariant, snapshot: &ConditionsSnapshot) -> ScoreResult {
    let scoring = ScoringConfig::default();
    let validated = snapshot.with_defaults(scoring.wind_unit);
    variants::score_validated(variant, &validated, &scoring)
}

/// Find viewing windows with the default scoring configuration
///
/// `config` overrides the variant's window defaults.
#[must_use]
pub fn find_window(
    variant: WindowVariant,
    hours: &[HourSample],
    config: Option<&WindowConfig>,
) -> WindowOutcome {
    find_window_with(variant, hours, config, &ScoringConfig::default())
}
