// ABOUTME: Per-factor scoring curves mapping one validated measurement to a 0-100 sub-score
// ABOUTME: Cloud, humidity, wind, visibility, moon, Kp, darkness, temperature and rain curves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! Factor curves
//!
//! Every curve takes a value that has already been through
//! `ConditionsSnapshot::with_defaults`, clamps its output to [0, 100] and is
//! monotonic in the intuitive direction. Bucketed aurora curves read their
//! breakpoints from `skywatch_core::constants::aurora`.

use skywatch_core::constants::{aurora, curves, scoring::MAX_SCORE};

/// Round and clamp a raw curve value into a sub-score
#[inline]
fn to_sub_score(value: f64) -> u8 {
    // NaN casts to 0
    value.round().clamp(0.0, MAX_SCORE) as u8
}

/// 100 at or below `ideal`, 0 at or above `worst`, linear between
fn falling_linear(value: f64, ideal: f64, worst: f64) -> f64 {
    if value <= ideal {
        MAX_SCORE
    } else if value >= worst {
        0.0
    } else {
        MAX_SCORE * (worst - value) / (worst - ideal)
    }
}

/// First bucket whose bound satisfies `matches` wins, otherwise 0
fn bucket(table: &[(f64, u8)], matches: impl Fn(f64) -> bool) -> u8 {
    table
        .iter()
        .find(|(bound, _)| matches(*bound))
        .map_or(0, |&(_, sub_score)| sub_score)
}

/// Stargazing cloud cover: `100 - cloud`
#[must_use]
pub fn sky_cloud(cloud_percent: f64) -> u8 {
    to_sub_score(MAX_SCORE - cloud_percent)
}

/// Humidity: 100 up to 50 %, 0 from 90 %
#[must_use]
pub fn humidity(humidity_percent: f64) -> u8 {
    to_sub_score(falling_linear(
        humidity_percent,
        curves::HUMIDITY_IDEAL_PERCENT,
        curves::HUMIDITY_WORST_PERCENT,
    ))
}

/// Wind: 100 up to 10 km/h, 0 from 40 km/h
#[must_use]
pub fn wind(speed_kmh: f64) -> u8 {
    to_sub_score(falling_linear(
        speed_kmh,
        curves::WIND_IDEAL_KMH,
        curves::WIND_WORST_KMH,
    ))
}

/// Visibility: 100 from 10 km, 0 at or below 1 km
#[must_use]
pub fn visibility(visibility_meters: f64) -> u8 {
    let ideal = curves::VISIBILITY_IDEAL_METERS;
    let worst = curves::VISIBILITY_WORST_METERS;
    let raw = if visibility_meters >= ideal {
        MAX_SCORE
    } else if visibility_meters <= worst {
        0.0
    } else {
        MAX_SCORE * (visibility_meters - worst) / (ideal - worst)
    };
    to_sub_score(raw)
}

/// Moon darkness: distance from full moon, 100 at new moon and 0 at full
#[must_use]
pub fn moon(phase: f64) -> u8 {
    to_sub_score((phase - 0.5).abs() * 200.0)
}

/// Illuminated fraction of the lunar disc in [0, 1]
#[must_use]
pub fn illumination_fraction(phase: f64) -> f64 {
    let waxing = if phase <= 0.5 { phase } else { 1.0 - phase };
    (waxing * 2.0).clamp(0.0, 1.0)
}

/// Kp surplus over the latitude threshold
///
/// `kp - min_kp` of 2 or more scores 100, 1 scores 90, 0 scores 70, -1
/// scores 40 and anything weaker scores 0.
#[must_use]
pub fn kp_versus_latitude(kp_index: f64, min_kp: f64) -> u8 {
    let difference = kp_index - min_kp;
    bucket(&aurora::KP_DIFFERENCE_SUBSCORES, |bound| difference >= bound)
}

/// Darkness by sun altitude: astronomical 100, nautical 80, civil 40, else 0
#[must_use]
pub fn darkness(sun_altitude_deg: f64) -> u8 {
    bucket(&aurora::DARKNESS_SUBSCORES, |bound| sun_altitude_deg <= bound)
}

/// Aurora cloud cover, bucketed
#[must_use]
pub fn aurora_cloud(cloud_percent: f64) -> u8 {
    bucket(&aurora::CLOUD_SUBSCORES, |bound| cloud_percent <= bound)
}

/// Aurora viewing conditions; carries its weight without penalizing
#[must_use]
pub const fn viewing() -> u8 {
    100
}

/// Outdoor temperature: 100 between 15 and 25 °C, 0 at or below 0 °C and at or above 38 °C
#[must_use]
pub fn temperature(celsius: f64) -> u8 {
    let raw = if celsius <= curves::TEMPERATURE_COLD_LIMIT_CELSIUS
        || celsius >= curves::TEMPERATURE_HOT_LIMIT_CELSIUS
    {
        0.0
    } else if celsius < curves::TEMPERATURE_IDEAL_MIN_CELSIUS {
        MAX_SCORE * (celsius - curves::TEMPERATURE_COLD_LIMIT_CELSIUS)
            / (curves::TEMPERATURE_IDEAL_MIN_CELSIUS - curves::TEMPERATURE_COLD_LIMIT_CELSIUS)
    } else if celsius > curves::TEMPERATURE_IDEAL_MAX_CELSIUS {
        falling_linear(
            celsius,
            curves::TEMPERATURE_IDEAL_MAX_CELSIUS,
            curves::TEMPERATURE_HOT_LIMIT_CELSIUS,
        )
    } else {
        MAX_SCORE
    };
    to_sub_score(raw)
}

/// Outdoor rain: `100 - precipitation probability`
#[must_use]
pub fn rain(precipitation_percent: f64) -> u8 {
    to_sub_score(MAX_SCORE - precipitation_percent)
}

/// Outdoor cloud cover: `100 - cloud / 2`, overcast still scores 50
#[must_use]
pub fn outdoor_cloud(cloud_percent: f64) -> u8 {
    to_sub_score(MAX_SCORE - cloud_percent / curves::OUTDOOR_CLOUD_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_curves_hit_their_breakpoints() {
        assert_eq!(humidity(40.0), 100);
        assert_eq!(humidity(70.0), 50);
        assert_eq!(humidity(95.0), 0);
        assert_eq!(wind(7.2), 100);
        assert_eq!(wind(25.0), 50);
        assert_eq!(wind(40.0), 0);
        assert_eq!(visibility(10_000.0), 100);
        assert_eq!(visibility(5_500.0), 50);
        assert_eq!(visibility(800.0), 0);
    }

    #[test]
    fn test_moon_is_symmetric_around_full() {
        assert_eq!(moon(0.5), 0);
        assert_eq!(moon(0.0), 100);
        assert_eq!(moon(0.1), 80);
        for step in 0..=50 {
            let x = f64::from(step) / 100.0;
            assert_eq!(moon(0.5 - x), moon(0.5 + x));
        }
    }

    #[test]
    fn test_illumination() {
        assert!(illumination_fraction(0.0).abs() < f64::EPSILON);
        assert!((illumination_fraction(0.5) - 1.0).abs() < f64::EPSILON);
        assert!((illumination_fraction(0.75) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_kp_buckets() {
        assert_eq!(kp_versus_latitude(7.0, 5.0), 100);
        assert_eq!(kp_versus_latitude(6.0, 5.0), 90);
        assert_eq!(kp_versus_latitude(5.0, 5.0), 70);
        assert_eq!(kp_versus_latitude(4.0, 5.0), 40);
        assert_eq!(kp_versus_latitude(3.9, 5.0), 0);
    }

    #[test]
    fn test_darkness_and_cloud_buckets() {
        assert_eq!(darkness(-25.0), 100);
        assert_eq!(darkness(-18.0), 100);
        assert_eq!(darkness(-15.0), 80);
        assert_eq!(darkness(-8.0), 40);
        assert_eq!(darkness(-2.0), 0);
        assert_eq!(aurora_cloud(15.0), 100);
        assert_eq!(aurora_cloud(35.0), 80);
        assert_eq!(aurora_cloud(55.0), 50);
        assert_eq!(aurora_cloud(75.0), 20);
        assert_eq!(aurora_cloud(95.0), 0);
    }

    #[test]
    fn test_outdoor_curves() {
        assert_eq!(temperature(20.0), 100);
        assert_eq!(temperature(7.5), 50);
        assert_eq!(temperature(-3.0), 0);
        assert_eq!(temperature(31.5), 50);
        assert_eq!(temperature(40.0), 0);
        assert_eq!(rain(30.0), 70);
        assert_eq!(outdoor_cloud(100.0), 50);
        assert_eq!(outdoor_cloud(0.0), 100);
    }

    #[test]
    fn test_sky_cloud_is_monotonic() {
        let mut previous = u8::MAX;
        for cloud in 0..=100 {
            let current = sky_cloud(f64::from(cloud));
            assert!(current <= previous);
            previous = current;
        }
    }
}
