// ABOUTME: Window finder configuration for clear-sky and aurora searches
// ABOUTME: Qualification threshold, minimum duration, window count and slot length per variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use skywatch_core::constants::{ranges, scoring, windows};
use skywatch_core::models::WindowVariant;

/// Parameters of one window search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Clear-sky: maximum cloud cover of a qualifying hour.
    /// Aurora: minimum aurora score of a qualifying hour.
    pub threshold: f64,
    /// Shortest run reported, in minutes
    pub min_duration_minutes: i64,
    /// Most windows returned
    pub max_windows: usize,
    /// Minutes covered by each hourly sample
    pub slot_minutes: i64,
}

impl WindowConfig {
    /// Clear-sky defaults: cloud at most 30 % for at least two hours
    #[must_use]
    pub const fn clear_sky() -> Self {
        Self {
            threshold: windows::CLEAR_SKY_MAX_CLOUD_PERCENT,
            min_duration_minutes: windows::CLEAR_SKY_MIN_DURATION_MINUTES,
            max_windows: windows::CLEAR_SKY_MAX_WINDOWS,
            slot_minutes: windows::SLOT_MINUTES,
        }
    }

    /// Aurora defaults: score at least 60 while dark, top three windows
    #[must_use]
    pub const fn aurora() -> Self {
        Self {
            threshold: windows::AURORA_MIN_SCORE,
            min_duration_minutes: windows::AURORA_MIN_DURATION_MINUTES,
            max_windows: windows::AURORA_MAX_WINDOWS,
            slot_minutes: windows::SLOT_MINUTES,
        }
    }

    /// Defaults for a variant
    #[must_use]
    pub const fn for_variant(variant: WindowVariant) -> Self {
        match variant {
            WindowVariant::ClearSky => Self::clear_sky(),
            WindowVariant::Aurora => Self::aurora(),
        }
    }

    /// Check that the search can produce meaningful windows
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-finite or out-of-range
    /// threshold, a non-positive duration or slot length, or a zero window count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite()
            || self.threshold < ranges::PERCENT_MIN
            || self.threshold > scoring::MAX_SCORE
        {
            return Err(ConfigError::ValueOutOfRange(
                "window threshold must be between 0 and 100",
            ));
        }
        if self.min_duration_minutes <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum window duration must be positive",
            ));
        }
        if self.slot_minutes <= 0 || self.slot_minutes > windows::MAX_SLOT_MINUTES {
            return Err(ConfigError::ValueOutOfRange(
                "slot length must be between 1 and 1440 minutes",
            ));
        }
        if self.max_windows == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "at least one window must be returned",
            ));
        }
        Ok(())
    }
}

/// Window defaults for both searches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowsConfig {
    /// Clear-sky search
    pub clear_sky: WindowConfig,
    /// Aurora search
    pub aurora: WindowConfig,
}

impl WindowsConfig {
    /// Configuration for a variant
    #[must_use]
    pub const fn for_variant(&self, variant: WindowVariant) -> &WindowConfig {
        match variant {
            WindowVariant::ClearSky => &self.clear_sky,
            WindowVariant::Aurora => &self.aurora,
        }
    }

    /// Validate both searches
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by either search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clear_sky.validate()?;
        self.aurora.validate()
    }
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            clear_sky: WindowConfig::clear_sky(),
            aurora: WindowConfig::aurora(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults() {
        let clear = WindowConfig::for_variant(WindowVariant::ClearSky);
        assert_eq!(clear.min_duration_minutes, 120);
        assert_eq!(clear.max_windows, 1);

        let aurora = WindowConfig::for_variant(WindowVariant::Aurora);
        assert_eq!(aurora.min_duration_minutes, 30);
        assert_eq!(aurora.max_windows, 3);
        assert!((aurora.threshold - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_window_configs_are_rejected() {
        let zero_slot = WindowConfig {
            slot_minutes: 0,
            ..WindowConfig::clear_sky()
        };
        assert!(zero_slot.validate().is_err());

        let no_windows = WindowConfig {
            max_windows: 0,
            ..WindowConfig::aurora()
        };
        assert!(no_windows.validate().is_err());

        let nan_threshold = WindowConfig {
            threshold: f64::NAN,
            ..WindowConfig::aurora()
        };
        assert!(nan_threshold.validate().is_err());
    }
}
