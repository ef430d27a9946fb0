// ABOUTME: Viewing window result types produced by the window finder
// ABOUTME: Window, clear-sky search result with its fallback hour, and the variant outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which window search to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowVariant {
    /// Lowest-cloud run of hours with cloud cover under the threshold
    ClearSky,
    /// Dark hours whose aurora score clears the threshold
    Aurora,
}

impl fmt::Display for WindowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClearSky => f.write_str("clear_sky"),
            Self::Aurora => f.write_str("aurora"),
        }
    }
}

impl FromStr for WindowVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sky" | "clear-sky" | "clear_sky" | "clearsky" => Ok(Self::ClearSky),
            "aurora" => Ok(Self::Aurora),
            other => Err(format!("unknown window variant '{other}'")),
        }
    }
}

/// A maximal contiguous run of qualifying hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Start of the first hour
    pub start: DateTime<Utc>,
    /// End of the last hour's slot
    pub end: DateTime<Utc>,
    /// `end - start` in minutes
    pub duration_minutes: i64,
    /// Number of hourly samples in the run
    pub hours: usize,
    /// Highest hourly score
    pub peak_score: u8,
    /// Rounded mean of the hourly scores
    pub average_score: u8,
    /// Timestamp of the first hour reaching the peak score
    pub peak_time: DateTime<Utc>,
    /// Mean cloud cover over the run (percent)
    pub average_cloud_cover: f64,
    /// Highest Kp index in the run (aurora windows only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_kp_index: Option<f64>,
}

/// The clearest single hour of an input, reported when no window qualifies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearestHour {
    /// Start of the hour
    pub timestamp: DateTime<Utc>,
    /// Cloud cover during the hour (percent)
    pub cloud_cover: f64,
    /// Sky score of the hour
    pub score: u8,
}

/// Outcome of a clear-sky window search over non-empty input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearSkyResult {
    /// Whether a qualifying window exists
    pub found: bool,
    /// The best window when `found`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<Window>,
    /// Lowest-cloud hour of the whole input
    pub clearest_hour: ClearestHour,
    /// Explanation suitable for display
    pub message: String,
}

/// Result of `find_window`, shaped by the variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", content = "result", rename_all = "snake_case")]
pub enum WindowOutcome {
    /// Single best clear-sky window or fallback; `None` for empty input
    ClearSky(Option<ClearSkyResult>),
    /// Up to the configured number of aurora windows, best first
    Aurora(Vec<Window>),
}

impl WindowOutcome {
    /// Windows contained in the outcome, best first
    #[must_use]
    pub fn windows(&self) -> Vec<&Window> {
        match self {
            Self::ClearSky(result) => result
                .as_ref()
                .and_then(|found| found.window.as_ref())
                .into_iter()
                .collect(),
            Self::Aurora(windows) => windows.iter().collect(),
        }
    }
}
