// ABOUTME: Integration tests for the general outdoor activity score
// ABOUTME: Default conditions, temperature band edges and the heavy-rain cap boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use skywatch::models::{CapKind, ConditionsSnapshot, FactorKind, Rating, ScoreVariant};
use skywatch::score_conditions;

fn calm_clear_day(temperature: f64, rain: f64) -> ConditionsSnapshot {
    ConditionsSnapshot {
        temperature: Some(temperature),
        precipitation_probability: Some(rain),
        wind_speed: Some(1.0),
        cloud_cover: Some(0.0),
        ..ConditionsSnapshot::default()
    }
}

#[test]
fn test_unknown_conditions_use_defaults() {
    init_test_logging();
    let result = score_conditions(ScoreVariant::Outdoor, &ConditionsSnapshot::default());
    // 100*0.35 + 80*0.30 + 73*0.20 + 75*0.15
    assert_eq!(result.score, 85);
    assert_eq!(result.rating, Rating::Excellent);
    assert_eq!(
        result.factor(FactorKind::Temperature).and_then(|f| f.value),
        Some(15.0)
    );
}

#[test]
fn test_freezing_day_is_fair_at_best() {
    let result = score_conditions(ScoreVariant::Outdoor, &calm_clear_day(-5.0, 10.0));
    // 0 + 90*0.30 + 100*0.20 + 100*0.15
    assert_eq!(result.score, 62);
    assert_eq!(result.rating, Rating::Fair);
    assert_eq!(result.reasons[0], "Freezing (-5°C)");
}

#[test]
fn test_heavy_rain_cap_starts_at_eighty_percent() {
    let below = score_conditions(ScoreVariant::Outdoor, &calm_clear_day(20.0, 79.0));
    assert_eq!(below.score, 76);
    assert_eq!(below.rating, Rating::Good);
    assert!(below.applied_caps.is_empty());

    let at = score_conditions(ScoreVariant::Outdoor, &calm_clear_day(20.0, 80.0));
    assert_eq!(at.score, 35);
    assert_eq!(at.rating, Rating::Poor);
    assert!(at.was_capped_by(CapKind::HeavyRain));
}

#[test]
fn test_temperature_sub_score_peaks_in_comfort_band() {
    let sub_score = |celsius: f64| {
        score_conditions(ScoreVariant::Outdoor, &calm_clear_day(celsius, 0.0))
            .factor(FactorKind::Temperature)
            .map(|factor| factor.sub_score)
            .unwrap()
    };
    assert_eq!(sub_score(0.0), 0);
    assert_eq!(sub_score(7.5), 50);
    assert_eq!(sub_score(15.0), 100);
    assert_eq!(sub_score(25.0), 100);
    assert_eq!(sub_score(31.5), 50);
    assert_eq!(sub_score(38.0), 0);
    assert_eq!(sub_score(45.0), 0);
}

#[test]
fn test_strong_wind_reason() {
    let snapshot = ConditionsSnapshot {
        wind_speed: Some(15.0),
        ..calm_clear_day(20.0, 0.0)
    };
    let result = score_conditions(ScoreVariant::Outdoor, &snapshot);
    assert!(result.reasons.iter().any(|reason| reason == "Strong wind (54 km/h)"));
    assert_eq!(
        result.factor(FactorKind::Wind).map(|factor| factor.sub_score),
        Some(0)
    );
}
