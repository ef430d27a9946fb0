// ABOUTME: Input measurement records and the single default-substitution transform
// ABOUTME: ConditionsSnapshot, ValidatedSnapshot, HourSample and wind speed units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use crate::constants::{defaults, ranges, twilight, units::MS_TO_KMH_FACTOR};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of the wind speed supplied by a call site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindUnit {
    /// Meters per second
    #[default]
    MetersPerSecond,
    /// Kilometers per hour
    KilometersPerHour,
}

impl WindUnit {
    /// Convert a speed in this unit to km/h
    #[must_use]
    pub fn to_kmh(self, speed: f64) -> f64 {
        match self {
            Self::MetersPerSecond => speed * MS_TO_KMH_FACTOR,
            Self::KilometersPerHour => speed,
        }
    }

    /// Convert a speed in km/h to this unit
    #[must_use]
    pub fn in_unit(self, speed_kmh: f64) -> f64 {
        match self {
            Self::MetersPerSecond => speed_kmh / MS_TO_KMH_FACTOR,
            Self::KilometersPerHour => speed_kmh,
        }
    }
}

impl FromStr for WindUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ms" | "m/s" | "mps" | "meters_per_second" => Ok(Self::MetersPerSecond),
            "kmh" | "km/h" | "kph" | "kilometers_per_hour" => Ok(Self::KilometersPerHour),
            other => Err(format!("unknown wind unit '{other}'")),
        }
    }
}

impl fmt::Display for WindUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MetersPerSecond => f.write_str("m/s"),
            Self::KilometersPerHour => f.write_str("km/h"),
        }
    }
}

/// Raw measurements for a single point in time
///
/// Every field is optional: providers routinely omit values, and JSON cannot
/// carry `NaN`. Nothing reads these fields directly for arithmetic; scoring
/// always goes through [`ConditionsSnapshot::with_defaults`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionsSnapshot {
    /// Cloud cover (percent)
    #[serde(default, alias = "cloudCover", alias = "clouds")]
    pub cloud_cover: Option<f64>,
    /// Relative humidity (percent)
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Wind speed in the call site's `WindUnit`
    #[serde(default, alias = "windSpeed")]
    pub wind_speed: Option<f64>,
    /// Horizontal visibility (meters)
    #[serde(default)]
    pub visibility: Option<f64>,
    /// Planetary Kp index (0-9)
    #[serde(default, alias = "kpIndex", alias = "kp")]
    pub kp_index: Option<f64>,
    /// Sun altitude (degrees, negative below the horizon)
    #[serde(default, alias = "sunAltitude")]
    pub sun_altitude: Option<f64>,
    /// Lunar phase fraction (0 and 1 new, 0.5 full)
    #[serde(default, alias = "moonPhase")]
    pub moon_phase: Option<f64>,
    /// Observer latitude (signed degrees)
    #[serde(default, alias = "lat")]
    pub latitude: Option<f64>,
    /// Whether it is dark at the observer
    #[serde(default, alias = "isDark")]
    pub is_dark: Option<bool>,
    /// Air temperature (Celsius)
    #[serde(default, alias = "temp")]
    pub temperature: Option<f64>,
    /// Probability of precipitation (percent)
    #[serde(default, alias = "precipitationProbability", alias = "rain")]
    pub precipitation_probability: Option<f64>,
}

/// Fully-populated, range-clamped measurements consumed by the factor curves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedSnapshot {
    /// Cloud cover in [0, 100]
    pub cloud_cover: f64,
    /// Humidity in [0, 100]
    pub humidity: f64,
    /// Wind speed in km/h, [0, 400]
    pub wind_speed_kmh: f64,
    /// Visibility in meters, [0, 100 000]
    pub visibility_meters: f64,
    /// Kp index in [0, 9]
    pub kp_index: f64,
    /// Sun altitude in [-90, 90]
    pub sun_altitude: f64,
    /// Lunar phase in [0, 1)
    pub moon_phase: f64,
    /// Latitude in [-90, 90]
    pub latitude: f64,
    /// Darkness flag (caller-supplied or derived from sun altitude)
    pub is_dark: bool,
    /// Temperature in [-90, 60] Celsius
    pub temperature: f64,
    /// Precipitation probability in [0, 100]
    pub precipitation_probability: f64,
}

/// Keep a value only if it is a usable number
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn clamped_or(value: Option<f64>, default: f64, min: f64, max: f64) -> f64 {
    usable(value).unwrap_or(default).clamp(min, max)
}

impl ConditionsSnapshot {
    /// Substitute documented defaults for missing, `NaN` or infinite fields and
    /// clamp every value to its physical range
    ///
    /// This is the only path from raw input to scoring arithmetic.
    #[must_use]
    pub fn with_defaults(&self, wind_unit: WindUnit) -> ValidatedSnapshot {
        let sun_altitude = usable(self.sun_altitude).map_or_else(
            || {
                if self.is_dark == Some(false) {
                    defaults::SUN_ALTITUDE_DAY_DEG
                } else {
                    defaults::SUN_ALTITUDE_NIGHT_DEG
                }
            },
            |altitude| altitude.clamp(-ranges::DEGREES_MAX, ranges::DEGREES_MAX),
        );

        let wind_speed_kmh = usable(self.wind_speed)
            .map_or_else(
                || WindUnit::MetersPerSecond.to_kmh(defaults::WIND_SPEED_MS),
                |speed| wind_unit.to_kmh(speed),
            )
            .clamp(0.0, ranges::WIND_KMH_MAX);

        ValidatedSnapshot {
            cloud_cover: clamped_or(
                self.cloud_cover,
                defaults::CLOUD_COVER_PERCENT,
                ranges::PERCENT_MIN,
                ranges::PERCENT_MAX,
            ),
            humidity: clamped_or(
                self.humidity,
                defaults::HUMIDITY_PERCENT,
                ranges::PERCENT_MIN,
                ranges::PERCENT_MAX,
            ),
            wind_speed_kmh,
            visibility_meters: clamped_or(
                self.visibility,
                defaults::VISIBILITY_METERS,
                0.0,
                ranges::VISIBILITY_METERS_MAX,
            ),
            kp_index: clamped_or(
                self.kp_index,
                defaults::KP_INDEX,
                ranges::KP_MIN,
                ranges::KP_MAX,
            ),
            sun_altitude,
            moon_phase: usable(self.moon_phase)
                .unwrap_or(defaults::MOON_PHASE)
                .rem_euclid(1.0),
            latitude: clamped_or(
                self.latitude,
                defaults::LATITUDE_DEG,
                -ranges::DEGREES_MAX,
                ranges::DEGREES_MAX,
            ),
            is_dark: self
                .is_dark
                .unwrap_or(sun_altitude <= twilight::CIVIL_DEG),
            temperature: clamped_or(
                self.temperature,
                defaults::TEMPERATURE_CELSIUS,
                ranges::TEMPERATURE_MIN_CELSIUS,
                ranges::TEMPERATURE_MAX_CELSIUS,
            ),
            precipitation_probability: clamped_or(
                self.precipitation_probability,
                defaults::PRECIPITATION_PERCENT,
                ranges::PERCENT_MIN,
                ranges::PERCENT_MAX,
            ),
        }
    }

    /// A snapshot with every field set to its documented default, expressed in `wind_unit`
    #[must_use]
    pub fn documented_defaults(wind_unit: WindUnit) -> Self {
        let wind_kmh = WindUnit::MetersPerSecond.to_kmh(defaults::WIND_SPEED_MS);
        Self {
            cloud_cover: Some(defaults::CLOUD_COVER_PERCENT),
            humidity: Some(defaults::HUMIDITY_PERCENT),
            wind_speed: Some(wind_unit.in_unit(wind_kmh)),
            visibility: Some(defaults::VISIBILITY_METERS),
            kp_index: Some(defaults::KP_INDEX),
            sun_altitude: Some(defaults::SUN_ALTITUDE_NIGHT_DEG),
            moon_phase: Some(defaults::MOON_PHASE),
            latitude: Some(defaults::LATITUDE_DEG),
            is_dark: Some(defaults::SUN_ALTITUDE_NIGHT_DEG <= twilight::CIVIL_DEG),
            temperature: Some(defaults::TEMPERATURE_CELSIUS),
            precipitation_probability: Some(defaults::PRECIPITATION_PERCENT),
        }
    }
}

/// One hour of conditions, the unit processed by the window finder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourSample {
    /// Start of the hour this sample describes
    #[serde(alias = "time", alias = "dt")]
    pub timestamp: DateTime<Utc>,
    /// Conditions during the hour
    #[serde(flatten)]
    pub conditions: ConditionsSnapshot,
}

impl HourSample {
    /// Pair a timestamp with its conditions
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, conditions: ConditionsSnapshot) -> Self {
        Self {
            timestamp,
            conditions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_takes_every_default() {
        let validated = ConditionsSnapshot::default().with_defaults(WindUnit::MetersPerSecond);
        assert!((validated.cloud_cover - 50.0).abs() < f64::EPSILON);
        assert!((validated.humidity - 70.0).abs() < f64::EPSILON);
        assert!((validated.wind_speed_kmh - 18.0).abs() < 1e-9);
        assert!((validated.visibility_meters - 10_000.0).abs() < f64::EPSILON);
        assert!((validated.moon_phase - 0.5).abs() < f64::EPSILON);
        assert!((validated.sun_altitude + 18.0).abs() < f64::EPSILON);
        assert!(validated.is_dark);
    }

    #[test]
    fn test_nan_and_infinite_values_are_replaced_not_clamped() {
        let snapshot = ConditionsSnapshot {
            cloud_cover: Some(f64::NAN),
            humidity: Some(f64::INFINITY),
            visibility: Some(f64::NEG_INFINITY),
            ..ConditionsSnapshot::default()
        };
        let validated = snapshot.with_defaults(WindUnit::MetersPerSecond);
        assert!((validated.cloud_cover - 50.0).abs() < f64::EPSILON);
        assert!((validated.humidity - 70.0).abs() < f64::EPSILON);
        assert!((validated.visibility_meters - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let snapshot = ConditionsSnapshot {
            cloud_cover: Some(140.0),
            humidity: Some(-5.0),
            kp_index: Some(12.0),
            latitude: Some(-120.0),
            ..ConditionsSnapshot::default()
        };
        let validated = snapshot.with_defaults(WindUnit::MetersPerSecond);
        assert!((validated.cloud_cover - 100.0).abs() < f64::EPSILON);
        assert!(validated.humidity.abs() < f64::EPSILON);
        assert!((validated.kp_index - 9.0).abs() < f64::EPSILON);
        assert!((validated.latitude + 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_darkness_follows_sun_altitude_unless_supplied() {
        let dusk = ConditionsSnapshot {
            sun_altitude: Some(-3.0),
            ..ConditionsSnapshot::default()
        };
        assert!(!dusk.with_defaults(WindUnit::MetersPerSecond).is_dark);

        let civil_edge = ConditionsSnapshot {
            sun_altitude: Some(twilight::CIVIL_DEG),
            ..ConditionsSnapshot::default()
        };
        assert!(civil_edge.with_defaults(WindUnit::MetersPerSecond).is_dark);

        let daytime = ConditionsSnapshot {
            is_dark: Some(false),
            ..ConditionsSnapshot::default()
        };
        let validated = daytime.with_defaults(WindUnit::MetersPerSecond);
        assert!(!validated.is_dark);
        assert!(validated.sun_altitude.abs() < f64::EPSILON);
    }

    #[test]
    fn test_wind_unit_conversion() {
        let snapshot = ConditionsSnapshot {
            wind_speed: Some(36.0),
            ..ConditionsSnapshot::default()
        };
        let kmh = snapshot.with_defaults(WindUnit::KilometersPerHour);
        let ms = snapshot.with_defaults(WindUnit::MetersPerSecond);
        assert!((kmh.wind_speed_kmh - 36.0).abs() < 1e-9);
        assert!((ms.wind_speed_kmh - 129.6).abs() < 1e-9);
        assert_eq!("km/h".parse::<WindUnit>(), Ok(WindUnit::KilometersPerHour));
        assert!("knots".parse::<WindUnit>().is_err());
    }

    #[test]
    fn test_phase_wraps_into_unit_interval() {
        let snapshot = ConditionsSnapshot {
            moon_phase: Some(1.25),
            ..ConditionsSnapshot::default()
        };
        let validated = snapshot.with_defaults(WindUnit::MetersPerSecond);
        assert!((validated.moon_phase - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_documented_defaults_match_empty_snapshot() {
        for unit in [WindUnit::MetersPerSecond, WindUnit::KilometersPerHour] {
            let from_empty = ConditionsSnapshot::default().with_defaults(unit);
            let from_defaults = ConditionsSnapshot::documented_defaults(unit).with_defaults(unit);
            assert!((from_empty.wind_speed_kmh - from_defaults.wind_speed_kmh).abs() < 1e-9);
            assert_eq!(from_empty.is_dark, from_defaults.is_dark);
            assert!((from_empty.cloud_cover - from_defaults.cloud_cover).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_hour_sample_accepts_camel_case_fields() {
        let sample: HourSample = serde_json::from_str(
            r#"{"timestamp":"2025-01-15T22:00:00Z","cloudCover":15,"kpIndex":5,"isDark":true}"#,
        )
        .unwrap();
        assert_eq!(sample.conditions.cloud_cover, Some(15.0));
        assert_eq!(sample.conditions.kp_index, Some(5.0));
        assert_eq!(sample.conditions.is_dark, Some(true));
    }
}
