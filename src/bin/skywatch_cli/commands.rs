// ABOUTME: Command implementations for the Skywatch CLI
// ABOUTME: Loads input, runs the engine and renders results as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use serde::Serialize;
use serde_json::json;
use skywatch::errors::AppResult;
use skywatch::input::{self, InputSource};
use skywatch::models::{ScoreVariant, WindowVariant};
use skywatch::{min_kp_for_latitude, moon_phase_info, ScoringEngine, WindowConfig};
use std::path::Path;
use tracing::info;

/// Command-line overrides of the engine's window settings
pub struct WindowOverrides {
    pub threshold: Option<f64>,
    pub min_minutes: Option<i64>,
    pub max_windows: Option<usize>,
}

impl WindowOverrides {
    fn apply(&self, base: &WindowConfig) -> WindowConfig {
        WindowConfig {
            threshold: self.threshold.unwrap_or(base.threshold),
            min_duration_minutes: self.min_minutes.unwrap_or(base.min_duration_minutes),
            max_windows: self.max_windows.unwrap_or(base.max_windows),
            slot_minutes: base.slot_minutes,
        }
    }
}

fn render<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn score(engine: &ScoringEngine, variant: ScoreVariant, path: Option<&Path>) -> AppResult<String> {
    let snapshot = input::load_snapshot(&InputSource::from_arg(path))?;
    let result = engine.score_conditions(variant, &snapshot);
    info!(variant = %variant, score = result.score, rating = %result.rating, "scored snapshot");
    render(&result)
}

pub fn window(
    engine: &ScoringEngine,
    variant: WindowVariant,
    path: Option<&Path>,
    overrides: &WindowOverrides,
) -> AppResult<String> {
    let hours = input::load_hours(&InputSource::from_arg(path))?;
    let config = overrides.apply(engine.config().windows.for_variant(variant));
    config.validate()?;
    let outcome = engine.find_window(variant, &hours, Some(&config));
    info!(variant = %variant, hours = hours.len(), "searched windows");
    render(&outcome)
}

pub fn moon(phase: f64) -> AppResult<String> {
    render(&moon_phase_info(phase))
}

pub fn latitude(latitude: f64) -> AppResult<String> {
    render(&json!({
        "latitude": latitude,
        "minKp": min_kp_for_latitude(latitude),
    }))
}

pub fn batch(engine: &ScoringEngine, variant: ScoreVariant, path: Option<&Path>) -> AppResult<String> {
    let snapshots = input::load_snapshot_batch(&InputSource::from_arg(path))?;
    render(&engine.score_batch(variant, &snapshots))
}

pub fn batch_window(
    engine: &ScoringEngine,
    variant: WindowVariant,
    path: Option<&Path>,
) -> AppResult<String> {
    let series = input::load_series_batch(&InputSource::from_arg(path))?;
    render(&engine.find_windows_batch(variant, &series))
}
