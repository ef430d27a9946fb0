// ABOUTME: Integration tests for parallel batch scoring and window searches
// ABOUTME: Batch results must match sequential calls in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{clear_dark_night, cloud_series, kp_series, threshold_aurora_night};
use skywatch::models::{ConditionsSnapshot, ScoreVariant, WindowVariant};
use skywatch::ScoringEngine;

#[test]
fn test_batch_scores_match_sequential_scores() {
    let engine = ScoringEngine::default();
    let snapshots: Vec<ConditionsSnapshot> = (0..64)
        .map(|index| ConditionsSnapshot {
            kp_index: Some(f64::from(index % 10)),
            cloud_cover: Some(f64::from(index * 3 % 101)),
            latitude: Some(f64::from(index) - 32.0),
            ..threshold_aurora_night()
        })
        .collect();

    for variant in ScoreVariant::ALL {
        let batch = engine.score_batch(variant, &snapshots);
        let sequential: Vec<_> = snapshots
            .iter()
            .map(|snapshot| engine.score_conditions(variant, snapshot))
            .collect();
        assert_eq!(batch, sequential, "{variant}");
    }
}

#[test]
fn test_window_batch_keeps_location_order() {
    let engine = ScoringEngine::default();
    let series = vec![
        cloud_series(&[10.0, 10.0, 10.0]),
        Vec::new(),
        cloud_series(&[90.0, 90.0]),
    ];

    let outcomes = engine.find_windows_batch(WindowVariant::ClearSky, &series);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].windows().len(), 1);
    assert!(outcomes[1].windows().is_empty());
    assert!(outcomes[2].windows().is_empty());

    let aurora = engine.find_windows_batch(WindowVariant::Aurora, &[kp_series(&[7.0, 7.0])]);
    assert_eq!(aurora[0].windows()[0].hours, 2);
}

#[test]
fn test_empty_batch() {
    let engine = ScoringEngine::default();
    assert!(engine.score_batch(ScoreVariant::Sky, &[]).is_empty());
    assert!(engine
        .find_windows_batch(WindowVariant::Aurora, &[])
        .is_empty());
    assert_eq!(
        engine.score_batch(ScoreVariant::Sky, &[clear_dark_night()])[0].score,
        91
    );
}
