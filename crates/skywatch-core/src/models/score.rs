// ABOUTME: Scoring result types shared by every scoring variant
// ABOUTME: ScoreVariant, Rating, FactorKind, FactorResult, override caps and ScoreResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which activity a snapshot is graded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreVariant {
    /// Stargazing: dark, clear, steady sky
    Sky,
    /// Aurora watching: geomagnetic activity relative to latitude
    Aurora,
    /// General outdoor activity: temperature, rain, wind
    Outdoor,
}

impl ScoreVariant {
    /// All variants, in display order
    pub const ALL: [Self; 3] = [Self::Sky, Self::Aurora, Self::Outdoor];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sky => "sky",
            Self::Aurora => "aurora",
            Self::Outdoor => "outdoor",
        }
    }
}

impl fmt::Display for ScoreVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sky" | "stargazing" => Ok(Self::Sky),
            "aurora" => Ok(Self::Aurora),
            "outdoor" | "outdoors" => Ok(Self::Outdoor),
            other => Err(format!("unknown score variant '{other}'")),
        }
    }
}

/// Qualitative rating derived from the composite score
///
/// Sky and outdoor results use Excellent, Good, Fair, Poor and Bad. Aurora
/// results use Excellent, Good, Possible, Unlikely and Not Visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Best tier
    Excellent,
    /// Second tier
    Good,
    /// Middle tier (sky, outdoor)
    Fair,
    /// Middle tier (aurora)
    Possible,
    /// Fourth tier (sky, outdoor)
    Poor,
    /// Fourth tier (aurora)
    Unlikely,
    /// Lowest tier (sky, outdoor)
    Bad,
    /// Lowest tier (aurora)
    NotVisible,
}

impl Rating {
    /// Position in its scale, 4 for the best tier and 0 for the lowest
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::Excellent => 4,
            Self::Good => 3,
            Self::Fair | Self::Possible => 2,
            Self::Poor | Self::Unlikely => 1,
            Self::Bad | Self::NotVisible => 0,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Possible => "Possible",
            Self::Poor => "Poor",
            Self::Unlikely => "Unlikely",
            Self::Bad => "Bad",
            Self::NotVisible => "Not Visible",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of one scoring factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    /// Cloud cover
    CloudCover,
    /// Moon brightness
    Moon,
    /// Relative humidity
    Humidity,
    /// Wind speed
    Wind,
    /// Horizontal visibility
    Visibility,
    /// Kp index measured against the latitude threshold
    KpLatitude,
    /// Sun depression below the horizon
    Darkness,
    /// Light pollution and moon interference for aurora (never penalizes)
    Viewing,
    /// Air temperature
    Temperature,
    /// Precipitation probability
    Rain,
}

impl FactorKind {
    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CloudCover => "Cloud cover",
            Self::Moon => "Moon",
            Self::Humidity => "Humidity",
            Self::Wind => "Wind",
            Self::Visibility => "Visibility",
            Self::KpLatitude => "Kp vs latitude",
            Self::Darkness => "Darkness",
            Self::Viewing => "Viewing",
            Self::Temperature => "Temperature",
            Self::Rain => "Rain",
        }
    }
}

/// One factor's contribution to a composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    /// Which factor this is
    pub kind: FactorKind,
    /// Input value after default substitution, `None` for input-less factors
    pub value: Option<f64>,
    /// Sub-score in [0, 100]
    pub sub_score: u8,
    /// Weight in percentage points
    pub weight: u8,
}

impl FactorResult {
    /// Build a factor result
    #[must_use]
    pub const fn new(kind: FactorKind, value: Option<f64>, sub_score: u8, weight: u8) -> Self {
        Self {
            kind,
            value,
            sub_score,
            weight,
        }
    }

    /// Points this factor adds to the weighted sum
    #[must_use]
    pub fn weighted_points(&self) -> f64 {
        f64::from(self.sub_score) * f64::from(self.weight) / 100.0
    }
}

/// Domain rule that lowered a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapKind {
    /// Kp more than one point below the latitude threshold
    WeakGeomagneticActivity,
    /// Sun above civil twilight
    Daylight,
    /// Precipitation very likely
    HeavyRain,
}

impl CapKind {
    /// Why the cap exists, phrased for display
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::WeakGeomagneticActivity => "geomagnetic activity too weak for this latitude",
            Self::Daylight => "sky not dark enough",
            Self::HeavyRain => "rain very likely",
        }
    }
}

/// A cap that was applied to a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideCap {
    /// Which rule fired
    pub kind: CapKind,
    /// Score ceiling the rule imposes
    pub ceiling: u8,
}

/// Composite score for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Variant that produced this result
    pub variant: ScoreVariant,
    /// Composite score in [0, 100]
    pub score: u8,
    /// Qualitative rating
    pub rating: Rating,
    /// Factor breakdown, in weight-table order
    pub factors: Vec<FactorResult>,
    /// Short explanations derived from the factor values
    pub reasons: Vec<String>,
    /// Suggested action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Caps that lowered the weighted sum
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_caps: Vec<OverrideCap>,
}

impl ScoreResult {
    /// Look up one factor of the breakdown
    #[must_use]
    pub fn factor(&self, kind: FactorKind) -> Option<&FactorResult> {
        self.factors.iter().find(|factor| factor.kind == kind)
    }

    /// Whether a given cap lowered this score
    #[must_use]
    pub fn was_capped_by(&self, kind: CapKind) -> bool {
        self.applied_caps.iter().any(|cap| cap.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("Sky".parse::<ScoreVariant>(), Ok(ScoreVariant::Sky));
        assert_eq!("aurora".parse::<ScoreVariant>(), Ok(ScoreVariant::Aurora));
        assert!("tides".parse::<ScoreVariant>().is_err());
    }

    #[test]
    fn test_rating_tiers_line_up_across_scales() {
        assert_eq!(Rating::Fair.tier(), Rating::Possible.tier());
        assert_eq!(Rating::Bad.tier(), Rating::NotVisible.tier());
        assert!(Rating::Excellent.tier() > Rating::Good.tier());
        assert_eq!(Rating::NotVisible.to_string(), "Not Visible");
    }

    #[test]
    fn test_weighted_points() {
        let factor = FactorResult::new(FactorKind::CloudCover, Some(10.0), 90, 40);
        assert!((factor.weighted_points() - 36.0).abs() < f64::EPSILON);
    }
}
