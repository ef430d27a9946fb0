// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup plus snapshot and hourly series builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `skywatch`

use chrono::{DateTime, Duration, TimeZone, Utc};
use skywatch::models::{ConditionsSnapshot, HourSample};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, defaulting to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 18:00 UTC on a winter evening, the start of every fixture series
pub fn evening_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 18, 0, 0).single().unwrap()
}

/// The stargazing reference night: clear, dry, calm, thin crescent moon
pub fn clear_dark_night() -> ConditionsSnapshot {
    ConditionsSnapshot {
        cloud_cover: Some(10.0),
        humidity: Some(40.0),
        visibility: Some(10_000.0),
        wind_speed: Some(2.0),
        moon_phase: Some(0.1),
        ..ConditionsSnapshot::default()
    }
}

/// The aurora reference night: Kp at the threshold for 53.3°N, dark and clear
pub fn threshold_aurora_night() -> ConditionsSnapshot {
    ConditionsSnapshot {
        kp_index: Some(5.0),
        latitude: Some(53.3),
        cloud_cover: Some(15.0),
        sun_altitude: Some(-25.0),
        is_dark: Some(true),
        ..ConditionsSnapshot::default()
    }
}

/// Hourly series with the given cloud cover per hour
pub fn cloud_series(clouds: &[f64]) -> Vec<HourSample> {
    clouds
        .iter()
        .zip(0_i64..)
        .map(|(&cloud, offset)| {
            HourSample::new(
                evening_start() + Duration::hours(offset),
                ConditionsSnapshot {
                    cloud_cover: Some(cloud),
                    ..ConditionsSnapshot::default()
                },
            )
        })
        .collect()
}

/// Hourly aurora series at 53.3°N with the given Kp per hour, dark and clear throughout
pub fn kp_series(kps: &[f64]) -> Vec<HourSample> {
    kps.iter()
        .zip(0_i64..)
        .map(|(&kp, offset)| {
            HourSample::new(
                evening_start() + Duration::hours(offset),
                ConditionsSnapshot {
                    kp_index: Some(kp),
                    ..threshold_aurora_night()
                },
            )
        })
        .collect()
}
