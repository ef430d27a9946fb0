// ABOUTME: Scoring configuration for the sky, aurora and outdoor variants
// ABOUTME: Factor weight tables, rating thresholds and the wind speed unit of the call site
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! Scoring Configuration
//!
//! Weights are expressed in percentage points and every table must sum to 100.
//! Rating thresholds are the lower bounds of each bucket, best first.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use skywatch_core::constants::{ratings, weights};
use skywatch_core::models::WindUnit;

/// Scoring Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Unit of the wind speed in incoming snapshots
    pub wind_unit: WindUnit,
    /// Stargazing weights
    pub sky: SkyWeights,
    /// Aurora weights
    pub aurora: AuroraWeights,
    /// Outdoor activity weights
    pub outdoor: OutdoorWeights,
    /// Rating thresholds shared by the sky and outdoor variants
    pub ratings: RatingThresholds,
    /// Aurora rating thresholds
    pub aurora_ratings: AuroraRatingThresholds,
}

/// Stargazing factor weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkyWeights {
    /// Cloud cover
    pub clouds: u8,
    /// Moon brightness
    pub moon: u8,
    /// Humidity
    pub humidity: u8,
    /// Wind
    pub wind: u8,
    /// Visibility
    pub visibility: u8,
}

/// Aurora factor weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuroraWeights {
    /// Kp relative to the latitude threshold
    pub kp: u8,
    /// Darkness
    pub darkness: u8,
    /// Cloud cover
    pub cloud: u8,
    /// Viewing conditions
    pub viewing: u8,
}

/// Outdoor activity factor weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdoorWeights {
    /// Temperature
    pub temperature: u8,
    /// Rain probability
    pub rain: u8,
    /// Wind
    pub wind: u8,
    /// Cloud cover
    pub cloud: u8,
}

/// Lower bounds of the Excellent, Good, Fair and Poor buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingThresholds {
    /// Excellent lower bound
    pub excellent: u8,
    /// Good lower bound
    pub good: u8,
    /// Fair lower bound
    pub fair: u8,
    /// Poor lower bound
    pub poor: u8,
}

/// Lower bounds of the aurora rating buckets
///
/// Excellent and Good additionally require Kp to clear the latitude
/// threshold by a margin; those margins are fixed domain rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuroraRatingThresholds {
    /// Excellent lower bound
    pub excellent: u8,
    /// Good lower bound
    pub good: u8,
    /// Possible lower bound
    pub possible: u8,
    /// Unlikely lower bound
    pub unlikely: u8,
}

fn weight_total(table: &[u8]) -> u32 {
    table.iter().copied().map(u32::from).sum()
}

fn strictly_descending(bounds: &[u8]) -> bool {
    bounds.windows(2).all(|pair| pair[0] > pair[1])
}

impl SkyWeights {
    /// Weights in factor order: clouds, moon, humidity, wind, visibility
    #[must_use]
    pub const fn as_array(&self) -> [u8; 5] {
        [
            self.clouds,
            self.moon,
            self.humidity,
            self.wind,
            self.visibility,
        ]
    }
}

impl AuroraWeights {
    /// Weights in factor order: kp, darkness, cloud, viewing
    #[must_use]
    pub const fn as_array(&self) -> [u8; 4] {
        [self.kp, self.darkness, self.cloud, self.viewing]
    }
}

impl OutdoorWeights {
    /// Weights in factor order: temperature, rain, wind, cloud
    #[must_use]
    pub const fn as_array(&self) -> [u8; 4] {
        [self.temperature, self.rain, self.wind, self.cloud]
    }
}

impl ScoringConfig {
    /// Check weight totals and threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when a weight table does not sum
    /// to 100 and `ConfigError::InvalidRange` when rating thresholds are not
    /// strictly descending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if weight_total(&self.sky.as_array()) != weights::TOTAL {
            return Err(ConfigError::InvalidWeights("sky weights must sum to 100"));
        }
        if weight_total(&self.aurora.as_array()) != weights::TOTAL {
            return Err(ConfigError::InvalidWeights(
                "aurora weights must sum to 100",
            ));
        }
        if weight_total(&self.outdoor.as_array()) != weights::TOTAL {
            return Err(ConfigError::InvalidWeights(
                "outdoor weights must sum to 100",
            ));
        }

        let sky_bounds = [
            self.ratings.excellent,
            self.ratings.good,
            self.ratings.fair,
            self.ratings.poor,
        ];
        if !strictly_descending(&sky_bounds) || self.ratings.excellent > 100 {
            return Err(ConfigError::InvalidRange(
                "rating thresholds must satisfy 100 >= excellent > good > fair > poor",
            ));
        }

        let aurora_bounds = [
            self.aurora_ratings.excellent,
            self.aurora_ratings.good,
            self.aurora_ratings.possible,
            self.aurora_ratings.unlikely,
        ];
        if !strictly_descending(&aurora_bounds) || self.aurora_ratings.excellent > 100 {
            return Err(ConfigError::InvalidRange(
                "aurora rating thresholds must satisfy 100 >= excellent > good > possible > unlikely",
            ));
        }

        Ok(())
    }
}

impl Default for SkyWeights {
    fn default() -> Self {
        Self {
            clouds: weights::SKY_CLOUDS,
            moon: weights::SKY_MOON,
            humidity: weights::SKY_HUMIDITY,
            wind: weights::SKY_WIND,
            visibility: weights::SKY_VISIBILITY,
        }
    }
}

impl Default for AuroraWeights {
    fn default() -> Self {
        Self {
            kp: weights::AURORA_KP,
            darkness: weights::AURORA_DARKNESS,
            cloud: weights::AURORA_CLOUD,
            viewing: weights::AURORA_VIEWING,
        }
    }
}

impl Default for OutdoorWeights {
    fn default() -> Self {
        Self {
            temperature: weights::OUTDOOR_TEMPERATURE,
            rain: weights::OUTDOOR_RAIN,
            wind: weights::OUTDOOR_WIND,
            cloud: weights::OUTDOOR_CLOUD,
        }
    }
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            excellent: ratings::EXCELLENT,
            good: ratings::GOOD,
            fair: ratings::FAIR,
            poor: ratings::POOR,
        }
    }
}

impl Default for AuroraRatingThresholds {
    fn default() -> Self {
        Self {
            excellent: ratings::AURORA_EXCELLENT,
            good: ratings::AURORA_GOOD,
            possible: ratings::AURORA_POSSIBLE,
            unlikely: ratings::AURORA_UNLIKELY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one_hundred() {
        let mut config = ScoringConfig::default();
        config.outdoor.rain = 31;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_rating_thresholds_must_descend() {
        let mut config = ScoringConfig::default();
        config.ratings.fair = config.ratings.good;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
