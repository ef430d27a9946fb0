// ABOUTME: Parallel batch scoring across many locations using rayon
// ABOUTME: Order-preserving fan-out of snapshot scoring and window searches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use crate::engine::ScoringEngine;
use rayon::prelude::*;
use skywatch_core::models::{
    ConditionsSnapshot, HourSample, ScoreResult, ScoreVariant, WindowOutcome, WindowVariant,
};
use tracing::debug;

impl ScoringEngine {
    /// Score many snapshots in parallel
    ///
    /// Results are in input order.
    #[must_use]
    pub fn score_batch(
        &self,
        variant: ScoreVariant,
        snapshots: &[ConditionsSnapshot],
    ) -> Vec<ScoreResult> {
        debug!(variant = %variant, count = snapshots.len(), "scoring batch");
        snapshots
            .par_iter()
            .map(|snapshot| self.score_conditions(variant, snapshot))
            .collect()
    }

    /// Run a window search for many locations in parallel
    ///
    /// Each element of `series` is one location's ordered hourly samples.
    /// Outcomes are in input order and use the engine's window settings.
    #[must_use]
    pub fn find_windows_batch(
        &self,
        variant: WindowVariant,
        series: &[Vec<HourSample>],
    ) -> Vec<WindowOutcome> {
        debug!(variant = %variant, locations = series.len(), "finding windows for batch");
        series
            .par_iter()
            .map(|hours| self.find_window(variant, hours, None))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_matches_sequential_scoring_in_order() {
        let engine = ScoringEngine::default();
        let snapshots: Vec<ConditionsSnapshot> = (0..=20)
            .map(|step| ConditionsSnapshot {
                cloud_cover: Some(f64::from(step) * 5.0),
                ..ConditionsSnapshot::default()
            })
            .collect();

        let batch = engine.score_batch(ScoreVariant::Sky, &snapshots);
        let sequential: Vec<ScoreResult> = snapshots
            .iter()
            .map(|snapshot| engine.score_conditions(ScoreVariant::Sky, snapshot))
            .collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_empty_batches() {
        let engine = ScoringEngine::default();
        assert!(engine.score_batch(ScoreVariant::Outdoor, &[]).is_empty());
        assert!(engine
            .find_windows_batch(WindowVariant::ClearSky, &[])
            .is_empty());
    }
}
