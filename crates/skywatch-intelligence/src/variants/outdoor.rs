// ABOUTME: Outdoor activity score from temperature, rain probability, wind and cloud cover
// ABOUTME: Applies the heavy-rain cap on top of the weighted sum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use super::limit_reasons;
use crate::aggregator::{aggregate, CapRule, RatingTable};
use crate::config::ScoringConfig;
use crate::factors;
use skywatch_core::constants::{curves, outdoor};
use skywatch_core::models::{
    CapKind, FactorKind, FactorResult, Rating, ScoreResult, ScoreVariant, ValidatedSnapshot,
};

const POSSIBLE_RAIN_PERCENT: f64 = 40.0;
const BREEZY_WIND_KMH: f64 = 25.0;
const SUNNY_CLOUD_PERCENT: f64 = 20.0;
const OVERCAST_CLOUD_PERCENT: f64 = 80.0;

/// Outdoor activity score
#[must_use]
pub fn score(snapshot: &ValidatedSnapshot, config: &ScoringConfig) -> ScoreResult {
    let weights = &config.outdoor;
    let factors = vec![
        FactorResult::new(
            FactorKind::Temperature,
            Some(snapshot.temperature),
            factors::temperature(snapshot.temperature),
            weights.temperature,
        ),
        FactorResult::new(
            FactorKind::Rain,
            Some(snapshot.precipitation_probability),
            factors::rain(snapshot.precipitation_probability),
            weights.rain,
        ),
        FactorResult::new(
            FactorKind::Wind,
            Some(snapshot.wind_speed_kmh),
            factors::wind(snapshot.wind_speed_kmh),
            weights.wind,
        ),
        FactorResult::new(
            FactorKind::CloudCover,
            Some(snapshot.cloud_cover),
            factors::outdoor_cloud(snapshot.cloud_cover),
            weights.cloud,
        ),
    ];

    let caps = [CapRule::new(
        CapKind::HeavyRain,
        outdoor::HEAVY_RAIN_CAP,
        snapshot.precipitation_probability >= outdoor::HEAVY_RAIN_PERCENT,
    )];

    let table = RatingTable::standard(&config.ratings);
    let aggregate = aggregate(&factors, &caps, &table, None);

    ScoreResult {
        variant: ScoreVariant::Outdoor,
        score: aggregate.score,
        rating: aggregate.rating,
        factors,
        reasons: reasons(snapshot),
        recommendation: Some(recommendation(aggregate.rating).to_owned()),
        applied_caps: aggregate.applied_caps,
    }
}

fn reasons(snapshot: &ValidatedSnapshot) -> Vec<String> {
    let mut reasons = Vec::with_capacity(4);

    let temperature = snapshot.temperature;
    reasons.push(if temperature <= curves::TEMPERATURE_COLD_LIMIT_CELSIUS {
        format!("Freezing ({temperature:.0}°C)")
    } else if temperature < curves::TEMPERATURE_IDEAL_MIN_CELSIUS {
        format!("Cool ({temperature:.0}°C)")
    } else if temperature <= curves::TEMPERATURE_IDEAL_MAX_CELSIUS {
        format!("Comfortable temperature ({temperature:.0}°C)")
    } else if temperature < curves::TEMPERATURE_HOT_LIMIT_CELSIUS {
        format!("Warm ({temperature:.0}°C)")
    } else {
        format!("Extreme heat ({temperature:.0}°C)")
    });

    let rain = snapshot.precipitation_probability;
    reasons.push(if rain >= outdoor::HEAVY_RAIN_PERCENT {
        format!("Rain very likely ({rain:.0}%)")
    } else if rain >= POSSIBLE_RAIN_PERCENT {
        format!("Chance of rain ({rain:.0}%)")
    } else {
        format!("Low chance of rain ({rain:.0}%)")
    });

    let wind = snapshot.wind_speed_kmh;
    if wind >= curves::WIND_WORST_KMH {
        reasons.push(format!("Strong wind ({wind:.0} km/h)"));
    } else if wind > BREEZY_WIND_KMH {
        reasons.push(format!("Breezy ({wind:.0} km/h)"));
    }

    let cloud = snapshot.cloud_cover;
    if cloud <= SUNNY_CLOUD_PERCENT {
        reasons.push("Mostly sunny".to_owned());
    } else if cloud >= OVERCAST_CLOUD_PERCENT {
        reasons.push(format!("Overcast ({cloud:.0}% cloud cover)"));
    }

    limit_reasons(reasons)
}

const fn recommendation(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "Great conditions to be outside.",
        Rating::Good => "Good conditions for outdoor plans.",
        Rating::Fair | Rating::Possible => "Acceptable conditions, dress for the weather.",
        Rating::Poor | Rating::Unlikely => "Consider shorter outings or a backup plan.",
        Rating::Bad | Rating::NotVisible => "Better to stay in or pick another time.",
    }
}
