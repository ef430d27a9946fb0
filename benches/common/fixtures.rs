// ABOUTME: Benchmark fixtures generating deterministic snapshots and hourly forecasts
// ABOUTME: Varied cloud, Kp and darkness patterns so window runs open and close realistically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! Benchmark fixtures for reproducible performance measurements.

use chrono::{DateTime, Duration, TimeZone, Utc};
use skywatch::models::{ConditionsSnapshot, HourSample};

/// Predefined forecast lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ForecastLength {
    /// One night (12 hours)
    Night,
    /// Two days (48 hours), a typical hourly forecast
    TwoDays,
    /// Ten days (240 hours), the longest common forecast horizon
    TenDays,
}

impl ForecastLength {
    #[must_use]
    pub const fn hours(self) -> usize {
        match self {
            Self::Night => 12,
            Self::TwoDays => 48,
            Self::TenDays => 240,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::TwoDays => "two_days",
            Self::TenDays => "ten_days",
        }
    }
}

fn forecast_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Snapshot number `index` of a deterministic pseudo-random sequence
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_snapshot(index: usize) -> ConditionsSnapshot {
    let hour_of_day = index % 24;
    let sun_altitude = if (6..18).contains(&hour_of_day) { 20.0 } else { -24.0 };
    ConditionsSnapshot {
        cloud_cover: Some(((index * 37) % 101) as f64),
        humidity: Some(40.0 + ((index * 13) % 50) as f64),
        wind_speed: Some(((index * 7) % 15) as f64),
        visibility: Some(2_000.0 + ((index * 997) % 18_000) as f64),
        kp_index: Some(((index * 3) % 10) as f64),
        sun_altitude: Some(sun_altitude),
        moon_phase: Some(((index * 29) % 100) as f64 / 100.0),
        latitude: Some(45.0 + ((index * 11) % 25) as f64),
        is_dark: None,
        temperature: Some(-5.0 + ((index * 17) % 40) as f64),
        precipitation_probability: Some(((index * 23) % 101) as f64),
    }
}

/// Hourly forecast of the given length
#[must_use]
pub fn generate_forecast(length: ForecastLength) -> Vec<HourSample> {
    (0..length.hours())
        .zip(0_i64..)
        .map(|(index, offset)| {
            HourSample::new(
                forecast_start() + Duration::hours(offset),
                generate_snapshot(index),
            )
        })
        .collect()
}

/// `count` snapshots for batch scoring
#[must_use]
pub fn generate_snapshots(count: usize) -> Vec<ConditionsSnapshot> {
    (0..count).map(generate_snapshot).collect()
}
