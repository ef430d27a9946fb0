// ABOUTME: Scoring engine carrying an explicit configuration
// ABOUTME: Entry points for scoring snapshots and finding windows with caller-owned settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use crate::config::{ConfigError, EngineConfig, WindowConfig};
use crate::variants::score_validated;
use crate::window_finder::find_window_with;
use skywatch_core::models::{
    ConditionsSnapshot, HourSample, ScoreResult, ScoreVariant, WindowOutcome, WindowVariant,
};

/// Condition scoring and window detection with a fixed configuration
///
/// The engine holds no state besides its configuration, so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    /// Create an engine from an already validated configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine from `SKYWATCH_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        EngineConfig::load().map(Self::new)
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one snapshot
    ///
    /// Missing or invalid measurements take their documented defaults, so this
    /// always returns a result.
    #[must_use]
    pub fn score_conditions(
        &self,
        variant: ScoreVariant,
        snapshot: &ConditionsSnapshot,
    ) -> ScoreResult {
        let validated = snapshot.with_defaults(self.config.scoring.wind_unit);
        score_validated(variant, &validated, &self.config.scoring)
    }

    /// Find viewing windows over ordered hourly samples
    ///
    /// When `window_config` is `None` the engine's window settings for the
    /// variant apply.
    #[must_use]
    pub fn find_window(
        &self,
        variant: WindowVariant,
        hours: &[HourSample],
        window_config: Option<&WindowConfig>,
    ) -> WindowOutcome {
        let config = window_config.unwrap_or_else(|| self.config.windows.for_variant(variant));
        find_window_with(variant, hours, Some(config), &self.config.scoring)
    }
}
