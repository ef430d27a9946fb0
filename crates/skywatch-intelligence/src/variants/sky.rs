// ABOUTME: Stargazing score from cloud cover, moon brightness, humidity, wind and visibility
// ABOUTME: Builds the sky factor breakdown, rating and human-readable reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use super::limit_reasons;
use crate::aggregator::{aggregate, RatingTable};
use crate::config::ScoringConfig;
use crate::factors;
use skywatch_core::constants::units::METERS_PER_KM;
use skywatch_core::models::{
    FactorKind, FactorResult, Rating, ScoreResult, ScoreVariant, ValidatedSnapshot,
};

const CLEAR_CLOUD_PERCENT: f64 = 20.0;
const PARTLY_CLOUDY_PERCENT: f64 = 50.0;
const DARK_MOON_PERCENT: f64 = 25.0;
const BRIGHT_MOON_PERCENT: f64 = 75.0;
const DRY_HUMIDITY_PERCENT: f64 = 50.0;
const DEW_HUMIDITY_PERCENT: f64 = 80.0;
const UNSTEADY_WIND_KMH: f64 = 25.0;
const HAZY_VISIBILITY_METERS: f64 = 5_000.0;

/// Stargazing score
#[must_use]
pub fn score(snapshot: &ValidatedSnapshot, config: &ScoringConfig) -> ScoreResult {
    let weights = &config.sky;
    let factors = vec![
        FactorResult::new(
            FactorKind::CloudCover,
            Some(snapshot.cloud_cover),
            factors::sky_cloud(snapshot.cloud_cover),
            weights.clouds,
        ),
        FactorResult::new(
            FactorKind::Moon,
            Some(snapshot.moon_phase),
            factors::moon(snapshot.moon_phase),
            weights.moon,
        ),
        FactorResult::new(
            FactorKind::Humidity,
            Some(snapshot.humidity),
            factors::humidity(snapshot.humidity),
            weights.humidity,
        ),
        FactorResult::new(
            FactorKind::Wind,
            Some(snapshot.wind_speed_kmh),
            factors::wind(snapshot.wind_speed_kmh),
            weights.wind,
        ),
        FactorResult::new(
            FactorKind::Visibility,
            Some(snapshot.visibility_meters),
            factors::visibility(snapshot.visibility_meters),
            weights.visibility,
        ),
    ];

    let table = RatingTable::standard(&config.ratings);
    let aggregate = aggregate(&factors, &[], &table, None);

    ScoreResult {
        variant: ScoreVariant::Sky,
        score: aggregate.score,
        rating: aggregate.rating,
        factors,
        reasons: reasons(snapshot),
        recommendation: Some(recommendation(aggregate.rating).to_owned()),
        applied_caps: aggregate.applied_caps,
    }
}

fn reasons(snapshot: &ValidatedSnapshot) -> Vec<String> {
    let mut reasons = Vec::with_capacity(5);

    let cloud = snapshot.cloud_cover;
    reasons.push(if cloud <= CLEAR_CLOUD_PERCENT {
        format!("Clear skies ({cloud:.0}% cloud cover)")
    } else if cloud <= PARTLY_CLOUDY_PERCENT {
        format!("Partly cloudy ({cloud:.0}% cloud cover)")
    } else {
        format!("Mostly cloudy ({cloud:.0}% cloud cover)")
    });

    let illumination = factors::illumination_fraction(snapshot.moon_phase) * 100.0;
    reasons.push(if illumination <= DARK_MOON_PERCENT {
        format!("Dark sky, moon {illumination:.0}% illuminated")
    } else if illumination >= BRIGHT_MOON_PERCENT {
        format!("Bright moon washes out faint objects ({illumination:.0}% illuminated)")
    } else {
        format!("Moon {illumination:.0}% illuminated")
    });

    let humidity = snapshot.humidity;
    if humidity >= DEW_HUMIDITY_PERCENT {
        reasons.push(format!("High humidity ({humidity:.0}%) may cause haze and dew"));
    } else if humidity <= DRY_HUMIDITY_PERCENT {
        reasons.push(format!("Dry air ({humidity:.0}% humidity)"));
    }

    let wind = snapshot.wind_speed_kmh;
    if wind > UNSTEADY_WIND_KMH {
        reasons.push(format!("Windy ({wind:.0} km/h), unsteady for telescopes"));
    }

    if snapshot.visibility_meters < HAZY_VISIBILITY_METERS {
        let km = snapshot.visibility_meters / METERS_PER_KM;
        reasons.push(format!("Reduced visibility ({km:.1} km)"));
    }

    limit_reasons(reasons)
}

const fn recommendation(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "Excellent night for stargazing. Head somewhere dark and look up.",
        Rating::Good => "Good stargazing conditions. Most deep-sky objects should be visible.",
        Rating::Fair | Rating::Possible => {
            "Fair conditions. Stick to the Moon, planets and bright stars."
        }
        Rating::Poor | Rating::Unlikely => {
            "Poor conditions. Only the brightest objects are likely to show."
        }
        Rating::Bad | Rating::NotVisible => "Not a night for stargazing.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_core::models::{ConditionsSnapshot, WindUnit};

    #[test]
    fn test_clear_dark_night_is_excellent() {
        let snapshot = ConditionsSnapshot {
            cloud_cover: Some(10.0),
            humidity: Some(40.0),
            visibility: Some(10_000.0),
            wind_speed: Some(2.0),
            moon_phase: Some(0.1),
            ..ConditionsSnapshot::default()
        }
        .with_defaults(WindUnit::MetersPerSecond);

        let result = score(&snapshot, &ScoringConfig::default());
        let sub_scores: Vec<u8> = result.factors.iter().map(|f| f.sub_score).collect();
        assert_eq!(sub_scores, vec![90, 80, 100, 100, 100]);
        assert_eq!(result.score, 91);
        assert_eq!(result.rating, Rating::Excellent);
        assert!(result.reasons[0].starts_with("Clear skies"));
    }

    #[test]
    fn test_reasons_never_exceed_limit() {
        let snapshot = ConditionsSnapshot {
            cloud_cover: Some(90.0),
            humidity: Some(95.0),
            visibility: Some(500.0),
            wind_speed: Some(20.0),
            moon_phase: Some(0.5),
            ..ConditionsSnapshot::default()
        }
        .with_defaults(WindUnit::MetersPerSecond);

        let result = score(&snapshot, &ScoringConfig::default());
        assert_eq!(result.reasons.len(), 4);
        assert_eq!(result.rating, Rating::Bad);
    }
}
