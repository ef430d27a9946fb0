// ABOUTME: Aurora visibility score from Kp versus latitude, darkness, cloud cover and viewing
// ABOUTME: Applies the weak-activity and daylight caps and the Kp-margin rating table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use super::limit_reasons;
use crate::aggregator::{aggregate, CapRule, RatingTable};
use crate::config::ScoringConfig;
use crate::factors;
use crate::latitude::min_kp_for_latitude;
use skywatch_core::constants::{aurora, twilight};
use skywatch_core::models::{
    CapKind, FactorKind, FactorResult, Rating, ScoreResult, ScoreVariant, ValidatedSnapshot,
};

const CLEAR_CLOUD_PERCENT: f64 = 20.0;
const OVERCAST_CLOUD_PERCENT: f64 = 80.0;

/// Aurora visibility score
#[must_use]
pub fn score(snapshot: &ValidatedSnapshot, config: &ScoringConfig) -> ScoreResult {
    let weights = &config.aurora;
    let min_kp = min_kp_for_latitude(snapshot.latitude);
    let kp_margin = snapshot.kp_index - min_kp;
    let kp_sub_score = factors::kp_versus_latitude(snapshot.kp_index, min_kp);

    let factors = vec![
        FactorResult::new(
            FactorKind::KpLatitude,
            Some(snapshot.kp_index),
            kp_sub_score,
            weights.kp,
        ),
        FactorResult::new(
            FactorKind::Darkness,
            Some(snapshot.sun_altitude),
            factors::darkness(snapshot.sun_altitude),
            weights.darkness,
        ),
        FactorResult::new(
            FactorKind::CloudCover,
            Some(snapshot.cloud_cover),
            factors::aurora_cloud(snapshot.cloud_cover),
            weights.cloud,
        ),
        FactorResult::new(FactorKind::Viewing, None, factors::viewing(), weights.viewing),
    ];

    let caps = [
        CapRule::new(
            CapKind::WeakGeomagneticActivity,
            aurora::WEAK_ACTIVITY_CAP,
            snapshot.kp_index < min_kp - aurora::WEAK_ACTIVITY_MARGIN,
        ),
        CapRule::new(
            CapKind::Daylight,
            aurora::DAYLIGHT_CAP,
            snapshot.sun_altitude > twilight::CIVIL_DEG,
        ),
    ];

    let table = RatingTable::aurora(&config.aurora_ratings);
    let aggregate = aggregate(&factors, &caps, &table, Some(kp_margin));

    ScoreResult {
        variant: ScoreVariant::Aurora,
        score: aggregate.score,
        rating: aggregate.rating,
        factors,
        reasons: reasons(snapshot, kp_margin >= 0.0, kp_sub_score),
        recommendation: Some(recommendation(aggregate.rating, snapshot.latitude)),
        applied_caps: aggregate.applied_caps,
    }
}

fn reasons(snapshot: &ValidatedSnapshot, kp_sufficient: bool, kp_sub_score: u8) -> Vec<String> {
    let kp = snapshot.kp_index;
    let mut reasons = Vec::with_capacity(4);

    reasons.push(if kp_sufficient {
        format!("Geomagnetic activity strong enough (Kp {kp:.1}, sub-score {kp_sub_score})")
    } else {
        format!("Geomagnetic activity too weak (Kp {kp:.1}, sub-score {kp_sub_score})")
    });

    let altitude = snapshot.sun_altitude;
    reasons.push(if altitude <= twilight::ASTRONOMICAL_DEG {
        "Fully dark sky".to_owned()
    } else if altitude <= twilight::NAUTICAL_DEG {
        "Nautical twilight, sky nearly dark".to_owned()
    } else if altitude <= twilight::CIVIL_DEG {
        "Civil twilight, sky still bright".to_owned()
    } else {
        format!("Sun too high ({altitude:.0}° altitude)")
    });

    let cloud = snapshot.cloud_cover;
    reasons.push(if cloud <= CLEAR_CLOUD_PERCENT {
        format!("Clear skies ({cloud:.0}% cloud cover)")
    } else if cloud > OVERCAST_CLOUD_PERCENT {
        format!("Overcast ({cloud:.0}% cloud cover)")
    } else {
        format!("{cloud:.0}% cloud cover may block the view")
    });

    limit_reasons(reasons)
}

fn recommendation(rating: Rating, latitude: f64) -> String {
    let horizon = if latitude < 0.0 { "southern" } else { "northern" };
    match rating {
        Rating::Excellent => {
            format!("Strong aurora expected. Get away from city lights and watch the {horizon} sky.")
        }
        Rating::Good => format!("Aurora likely. Find a dark spot with a clear {horizon} horizon."),
        Rating::Fair | Rating::Possible => {
            format!("Aurora possible. Check the {horizon} horizon periodically.")
        }
        Rating::Poor | Rating::Unlikely => "Aurora unlikely tonight.".to_owned(),
        Rating::Bad | Rating::NotVisible => "Aurora not expected to be visible.".to_owned(),
    }
}
