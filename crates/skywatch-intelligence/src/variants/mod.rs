// ABOUTME: Scoring variants built on the shared aggregator
// ABOUTME: Dispatches a validated snapshot to the sky, aurora or outdoor scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! Scoring variants
//!
//! Each variant supplies its factor breakdown, override caps, rating table,
//! reasons and recommendation. The aggregation arithmetic itself lives in
//! [`crate::aggregator`].

/// Aurora watching
pub mod aurora;
/// General outdoor activity
pub mod outdoor;
/// Stargazing
pub mod sky;

use crate::config::ScoringConfig;
use skywatch_core::constants::scoring::MAX_REASONS;
use skywatch_core::models::{ScoreResult, ScoreVariant, ValidatedSnapshot};
use tracing::debug;

/// Score a snapshot whose defaults have already been substituted
#[must_use]
pub fn score_validated(
    variant: ScoreVariant,
    snapshot: &ValidatedSnapshot,
    config: &ScoringConfig,
) -> ScoreResult {
    let result = match variant {
        ScoreVariant::Sky => sky::score(snapshot, config),
        ScoreVariant::Aurora => aurora::score(snapshot, config),
        ScoreVariant::Outdoor => outdoor::score(snapshot, config),
    };
    debug!(
        variant = %variant,
        score = result.score,
        rating = %result.rating,
        capped = !result.applied_caps.is_empty(),
        "scored conditions"
    );
    result
}

/// Keep the first reasons, up to the per-result limit
fn limit_reasons(mut reasons: Vec<String>) -> Vec<String> {
    reasons.truncate(MAX_REASONS);
    reasons
}
