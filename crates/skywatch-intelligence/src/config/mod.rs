// ABOUTME: Engine configuration with environment variable overrides and validation
// ABOUTME: EngineConfig bundles scoring weights, rating thresholds and window search defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! Engine Configuration
//!
//! Environment-only configuration: start from the documented defaults, apply
//! `SKYWATCH_*` overrides, then validate. There is no global instance; callers
//! load a config once and hand it to a `ScoringEngine`.

/// Configuration error types
pub mod error;
/// Weight tables and rating thresholds
pub mod scoring;
/// Window search parameters
pub mod windows;

pub use error::ConfigError;
pub use scoring::{
    AuroraRatingThresholds, AuroraWeights, OutdoorWeights, RatingThresholds, ScoringConfig,
    SkyWeights,
};
pub use windows::{WindowConfig, WindowsConfig};

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use tracing::{debug, warn};

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scoring weights, thresholds and wind unit
    pub scoring: ScoringConfig,
    /// Window search defaults
    pub windows: WindowsConfig,
}

impl EngineConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the resulting
    /// configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            wind_unit = %config.scoring.wind_unit,
            "engine configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first weight, threshold or window violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.windows.validate()
    }

    /// Apply environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(error) => return Err(error.into()),
        };
        *target = val.trim().parse().map_err(|_| {
            warn!(variable = env_var_name, value = %val, "rejected configuration override");
            ConfigError::Parse(format!("Invalid {env_var_name}"))
        })?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("SKYWATCH_WIND_UNIT", &mut self.scoring.wind_unit)?;

        let sky = &mut self.scoring.sky;
        Self::apply_env_var("SKYWATCH_SKY_WEIGHT_CLOUDS", &mut sky.clouds)?;
        Self::apply_env_var("SKYWATCH_SKY_WEIGHT_MOON", &mut sky.moon)?;
        Self::apply_env_var("SKYWATCH_SKY_WEIGHT_HUMIDITY", &mut sky.humidity)?;
        Self::apply_env_var("SKYWATCH_SKY_WEIGHT_WIND", &mut sky.wind)?;
        Self::apply_env_var("SKYWATCH_SKY_WEIGHT_VISIBILITY", &mut sky.visibility)?;

        let aurora = &mut self.scoring.aurora;
        Self::apply_env_var("SKYWATCH_AURORA_WEIGHT_KP", &mut aurora.kp)?;
        Self::apply_env_var("SKYWATCH_AURORA_WEIGHT_DARKNESS", &mut aurora.darkness)?;
        Self::apply_env_var("SKYWATCH_AURORA_WEIGHT_CLOUD", &mut aurora.cloud)?;
        Self::apply_env_var("SKYWATCH_AURORA_WEIGHT_VIEWING", &mut aurora.viewing)?;

        let outdoor = &mut self.scoring.outdoor;
        Self::apply_env_var(
            "SKYWATCH_OUTDOOR_WEIGHT_TEMPERATURE",
            &mut outdoor.temperature,
        )?;
        Self::apply_env_var("SKYWATCH_OUTDOOR_WEIGHT_RAIN", &mut outdoor.rain)?;
        Self::apply_env_var("SKYWATCH_OUTDOOR_WEIGHT_WIND", &mut outdoor.wind)?;
        Self::apply_env_var("SKYWATCH_OUTDOOR_WEIGHT_CLOUD", &mut outdoor.cloud)?;

        Self::apply_env_var(
            "SKYWATCH_CLEAR_SKY_MAX_CLOUD",
            &mut self.windows.clear_sky.threshold,
        )?;
        Self::apply_env_var(
            "SKYWATCH_CLEAR_SKY_MIN_MINUTES",
            &mut self.windows.clear_sky.min_duration_minutes,
        )?;
        Self::apply_env_var(
            "SKYWATCH_AURORA_WINDOW_MIN_SCORE",
            &mut self.windows.aurora.threshold,
        )?;
        Self::apply_env_var(
            "SKYWATCH_AURORA_WINDOW_MIN_MINUTES",
            &mut self.windows.aurora.min_duration_minutes,
        )?;
        Self::apply_env_var(
            "SKYWATCH_AURORA_MAX_WINDOWS",
            &mut self.windows.aurora.max_windows,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_window_section_fails_validation() {
        let mut config = EngineConfig::default();
        config.windows.aurora.min_duration_minutes = -5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
