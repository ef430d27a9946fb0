// ABOUTME: Generic weighted-sum score aggregator with override caps and ordered rating tables
// ABOUTME: Every scoring variant supplies factors, caps and rating bands to the same engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! # Score Aggregator
//!
//! Computes `Σ sub_score × weight / 100` over a variant's factors, lowers the
//! sum with any override caps whose condition holds, fails closed to a
//! neutral 50 when the result is not finite, then clamps to [0, 100] and
//! rounds. The rating is the first band, top-down, whose minimum score and
//! optional Kp margin are met.

use crate::config::{AuroraRatingThresholds, RatingThresholds};
use skywatch_core::constants::{aurora, scoring};
use skywatch_core::models::{CapKind, FactorResult, OverrideCap, Rating};
use tracing::warn;

/// A ceiling imposed on the weighted sum when a domain rule holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapRule {
    /// Which rule this is
    pub kind: CapKind,
    /// Highest composite allowed while the rule holds
    pub ceiling: f64,
    /// Whether the rule holds for the snapshot being scored
    pub active: bool,
}

impl CapRule {
    /// Build a cap rule
    #[must_use]
    pub const fn new(kind: CapKind, ceiling: f64, active: bool) -> Self {
        Self {
            kind,
            ceiling,
            active,
        }
    }
}

/// One row of a rating table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBand {
    /// Lowest composite score in the band
    pub min_score: u8,
    /// Rating assigned by the band
    pub rating: Rating,
    /// Kp surplus over the latitude threshold the band additionally requires
    pub min_kp_margin: Option<f64>,
}

/// Ordered rating bands plus the rating used when none matches
#[derive(Debug, Clone, PartialEq)]
pub struct RatingTable {
    bands: Vec<RatingBand>,
    floor: Rating,
}

impl RatingTable {
    /// Excellent / Good / Fair / Poor / Bad
    #[must_use]
    pub fn standard(thresholds: &RatingThresholds) -> Self {
        let band = |min_score, rating| RatingBand {
            min_score,
            rating,
            min_kp_margin: None,
        };
        Self {
            bands: vec![
                band(thresholds.excellent, Rating::Excellent),
                band(thresholds.good, Rating::Good),
                band(thresholds.fair, Rating::Fair),
                band(thresholds.poor, Rating::Poor),
            ],
            floor: Rating::Bad,
        }
    }

    /// Excellent / Good / Possible / Unlikely / Not Visible, with Kp margins on the top two
    #[must_use]
    pub fn aurora(thresholds: &AuroraRatingThresholds) -> Self {
        Self {
            bands: vec![
                RatingBand {
                    min_score: thresholds.excellent,
                    rating: Rating::Excellent,
                    min_kp_margin: Some(aurora::EXCELLENT_KP_MARGIN),
                },
                RatingBand {
                    min_score: thresholds.good,
                    rating: Rating::Good,
                    min_kp_margin: Some(aurora::GOOD_KP_MARGIN),
                },
                RatingBand {
                    min_score: thresholds.possible,
                    rating: Rating::Possible,
                    min_kp_margin: None,
                },
                RatingBand {
                    min_score: thresholds.unlikely,
                    rating: Rating::Unlikely,
                    min_kp_margin: None,
                },
            ],
            floor: Rating::NotVisible,
        }
    }

    /// First band whose requirements `score` and `kp_margin` meet
    ///
    /// A band that needs a Kp margin never matches when `kp_margin` is `None`.
    #[must_use]
    pub fn rate(&self, score: u8, kp_margin: Option<f64>) -> Rating {
        self.bands
            .iter()
            .find(|band| {
                score >= band.min_score
                    && band
                        .min_kp_margin
                        .is_none_or(|required| kp_margin.is_some_and(|margin| margin >= required))
            })
            .map_or(self.floor, |band| band.rating)
    }
}

/// Composite score, rating and the caps that lowered it
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Composite score in [0, 100]
    pub score: u8,
    /// Rating from the table
    pub rating: Rating,
    /// Caps that actually lowered the weighted sum
    pub applied_caps: Vec<OverrideCap>,
}

/// Weighted sum of factor sub-scores, in points out of 100
#[must_use]
pub fn weighted_sum(factors: &[FactorResult]) -> f64 {
    factors.iter().map(FactorResult::weighted_points).sum()
}

/// Clamp and round a capped composite, failing closed to the neutral score when it is not finite
#[must_use]
pub fn finalize_composite(composite: f64) -> u8 {
    if !composite.is_finite() {
        warn!(
            composite,
            "composite score is not finite, using neutral score"
        );
        return scoring::NEUTRAL_SCORE;
    }
    composite.clamp(0.0, scoring::MAX_SCORE).round() as u8
}

/// Combine factors, caps and a rating table into a composite
#[must_use]
pub fn aggregate(
    factors: &[FactorResult],
    caps: &[CapRule],
    table: &RatingTable,
    kp_margin: Option<f64>,
) -> Aggregate {
    let mut composite = weighted_sum(factors);
    let mut applied_caps = Vec::new();

    for cap in caps.iter().filter(|cap| cap.active) {
        if composite > cap.ceiling {
            composite = cap.ceiling;
            applied_caps.push(OverrideCap {
                kind: cap.kind,
                ceiling: cap.ceiling.round().clamp(0.0, scoring::MAX_SCORE) as u8,
            });
        }
    }

    let score = finalize_composite(composite);
    Aggregate {
        score,
        rating: table.rate(score, kp_margin),
        applied_caps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_core::models::FactorKind;

    fn factors(sub_scores: &[(u8, u8)]) -> Vec<FactorResult> {
        sub_scores
            .iter()
            .map(|&(sub_score, weight)| {
                FactorResult::new(FactorKind::CloudCover, None, sub_score, weight)
            })
            .collect()
    }

    #[test]
    fn test_weighted_sum_rounds_half_up() {
        let table = RatingTable::standard(&RatingThresholds::default());
        let result = aggregate(&factors(&[(91, 50), (90, 50)]), &[], &table, None);
        assert_eq!(result.score, 91);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_only_active_caps_that_lower_the_score_are_reported() {
        let table = RatingTable::standard(&RatingThresholds::default());
        let caps = [
            CapRule::new(CapKind::HeavyRain, 35.0, true),
            CapRule::new(CapKind::Daylight, 25.0, false),
            CapRule::new(CapKind::WeakGeomagneticActivity, 90.0, true),
        ];
        let result = aggregate(&factors(&[(80, 100)]), &caps, &table, None);
        assert_eq!(result.score, 35);
        assert_eq!(result.rating, Rating::Poor);
        assert_eq!(result.applied_caps.len(), 1);
        assert_eq!(result.applied_caps[0].kind, CapKind::HeavyRain);
    }

    #[test]
    fn test_non_finite_composite_fails_closed() {
        assert_eq!(finalize_composite(f64::NAN), 50);
        assert_eq!(finalize_composite(f64::INFINITY), 50);
        assert_eq!(finalize_composite(f64::NEG_INFINITY), 50);
        assert_eq!(finalize_composite(-4.0), 0);
        assert_eq!(finalize_composite(140.0), 100);
        assert_eq!(finalize_composite(87.5), 88);
    }

    #[test]
    fn test_no_factors_scores_zero() {
        let table = RatingTable::standard(&RatingThresholds::default());
        let empty = aggregate(&[], &[], &table, None);
        assert_eq!(empty.score, 0);
        assert_eq!(empty.rating, Rating::Bad);
    }

    #[test]
    fn test_aurora_bands_require_kp_margin() {
        let table = RatingTable::aurora(&AuroraRatingThresholds::default());
        assert_eq!(table.rate(88, Some(0.0)), Rating::Good);
        assert_eq!(table.rate(88, Some(1.0)), Rating::Excellent);
        assert_eq!(table.rate(88, Some(-0.5)), Rating::Possible);
        assert_eq!(table.rate(88, None), Rating::Possible);
        assert_eq!(table.rate(30, Some(3.0)), Rating::Unlikely);
        assert_eq!(table.rate(29, Some(3.0)), Rating::NotVisible);
    }
}
