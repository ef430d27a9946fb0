// ABOUTME: Viewing-window detection over ordered hourly samples
// ABOUTME: Scores each hour, then reduces qualifying runs to clear-sky or aurora windows in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! # Window Finder
//!
//! Each sample stands for one slot (60 minutes by default) starting at its
//! timestamp. A run is a maximal sequence of qualifying samples with no gap
//! between consecutive slots; its window ends where the last slot ends, so a
//! single hourly sample is a 60-minute window. Runs shorter than the minimum
//! duration are dropped. Runs still open at the end of the input are closed
//! with the same rule.

use crate::config::{ScoringConfig, WindowConfig};
use crate::variants::score_validated;
use chrono::{DateTime, Duration, Utc};
use skywatch_core::constants::windows::MAX_SLOT_MINUTES;
use skywatch_core::models::{
    ClearSkyResult, ClearestHour, HourSample, ScoreVariant, Window, WindowOutcome, WindowVariant,
};
use tracing::debug;

/// One sample after default substitution and scoring
#[derive(Debug, Clone, Copy)]
struct ScoredHour {
    timestamp: DateTime<Utc>,
    cloud_cover: f64,
    kp_index: f64,
    score: u8,
    qualifies: bool,
}

/// End of the slot starting at `start`, saturating at the latest representable instant
fn slot_end(start: DateTime<Utc>, slot: Duration) -> DateTime<Utc> {
    start
        .checked_add_signed(slot)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Accumulator for the run currently open
#[derive(Debug, Clone, Copy)]
struct OpenRun {
    start: DateTime<Utc>,
    last: DateTime<Utc>,
    hours: usize,
    score_total: u32,
    cloud_total: f64,
    peak_score: u8,
    peak_time: DateTime<Utc>,
    max_kp: f64,
}

impl OpenRun {
    fn open(hour: &ScoredHour) -> Self {
        Self {
            start: hour.timestamp,
            last: hour.timestamp,
            hours: 1,
            score_total: u32::from(hour.score),
            cloud_total: hour.cloud_cover,
            peak_score: hour.score,
            peak_time: hour.timestamp,
            max_kp: hour.kp_index,
        }
    }

    fn extend(&mut self, hour: &ScoredHour) {
        self.last = hour.timestamp;
        self.hours += 1;
        self.score_total += u32::from(hour.score);
        self.cloud_total += hour.cloud_cover;
        if hour.score > self.peak_score {
            self.peak_score = hour.score;
            self.peak_time = hour.timestamp;
        }
        self.max_kp = self.max_kp.max(hour.kp_index);
    }

    /// Close the run, keeping it only if it lasts at least the minimum duration
    fn close(self, slot: Duration, min_duration_minutes: i64, report_kp: bool) -> Option<Window> {
        let end = slot_end(self.last, slot);
        let duration_minutes = (end - self.start).num_minutes();
        if duration_minutes < min_duration_minutes {
            return None;
        }
        let hours = self.hours as f64;
        Some(Window {
            start: self.start,
            end,
            duration_minutes,
            hours: self.hours,
            peak_score: self.peak_score,
            average_score: (f64::from(self.score_total) / hours).round() as u8,
            peak_time: self.peak_time,
            average_cloud_cover: self.cloud_total / hours,
            max_kp_index: report_kp.then_some(self.max_kp),
        })
    }
}

/// Single left-to-right pass collecting every qualifying run
fn collect_runs(hours: &[ScoredHour], config: &WindowConfig, report_kp: bool) -> Vec<Window> {
    let slot = Duration::minutes(config.slot_minutes.clamp(1, MAX_SLOT_MINUTES));
    let mut windows = Vec::new();
    let mut open: Option<OpenRun> = None;

    for hour in hours {
        if !hour.qualifies {
            if let Some(run) = open.take() {
                windows.extend(run.close(slot, config.min_duration_minutes, report_kp));
            }
            continue;
        }
        open = match open.take() {
            Some(mut run) if hour.timestamp > run.last && hour.timestamp <= slot_end(run.last, slot) => {
                run.extend(hour);
                Some(run)
            }
            Some(run) => {
                windows.extend(run.close(slot, config.min_duration_minutes, report_kp));
                Some(OpenRun::open(hour))
            }
            None => Some(OpenRun::open(hour)),
        };
    }
    if let Some(run) = open {
        windows.extend(run.close(slot, config.min_duration_minutes, report_kp));
    }
    windows
}

fn score_hours(
    hours: &[HourSample],
    variant: ScoreVariant,
    scoring: &ScoringConfig,
    qualifies: impl Fn(f64, u8, bool) -> bool,
) -> Vec<ScoredHour> {
    hours
        .iter()
        .map(|sample| {
            let validated = sample.conditions.with_defaults(scoring.wind_unit);
            let score = score_validated(variant, &validated, scoring).score;
            ScoredHour {
                timestamp: sample.timestamp,
                cloud_cover: validated.cloud_cover,
                kp_index: validated.kp_index,
                score,
                qualifies: qualifies(validated.cloud_cover, score, validated.is_dark),
            }
        })
        .collect()
}

/// Best clear-sky window, or the clearest single hour when none qualifies
///
/// Returns `None` only for empty input.
#[must_use]
pub fn find_clear_sky_window(
    hours: &[HourSample],
    config: &WindowConfig,
    scoring: &ScoringConfig,
) -> Option<ClearSkyResult> {
    let max_cloud = config.threshold;
    let scored = score_hours(hours, ScoreVariant::Sky, scoring, |cloud, _, _| {
        cloud <= max_cloud
    });

    let clearest = scored.iter().fold(None, |best: Option<&ScoredHour>, hour| {
        match best {
            Some(current) if current.cloud_cover <= hour.cloud_cover => Some(current),
            _ => Some(hour),
        }
    })?;
    let clearest_hour = ClearestHour {
        timestamp: clearest.timestamp,
        cloud_cover: clearest.cloud_cover,
        score: clearest.score,
    };

    let best = collect_runs(&scored, config, false)
        .into_iter()
        .fold(None, |best: Option<Window>, window| match best {
            Some(current) if current.average_cloud_cover <= window.average_cloud_cover => {
                Some(current)
            }
            _ => Some(window),
        });

    debug!(
        hours = hours.len(),
        found = best.is_some(),
        "clear-sky window search complete"
    );

    Some(match best {
        Some(window) => ClearSkyResult {
            found: true,
            message: format!(
                "Clear for {} hour(s) from {} ({:.0}% average cloud cover)",
                window.hours,
                window.start.format("%Y-%m-%d %H:%M UTC"),
                window.average_cloud_cover
            ),
            window: Some(window),
            clearest_hour,
        },
        None => ClearSkyResult {
            found: false,
            window: None,
            message: format!(
                "No clear window of at least {} minutes; clearest hour is {} with {:.0}% cloud cover",
                config.min_duration_minutes,
                clearest_hour.timestamp.format("%Y-%m-%d %H:%M UTC"),
                clearest_hour.cloud_cover
            ),
            clearest_hour,
        },
    })
}

/// Aurora windows ranked by peak score, best first
#[must_use]
pub fn find_aurora_windows(
    hours: &[HourSample],
    config: &WindowConfig,
    scoring: &ScoringConfig,
) -> Vec<Window> {
    let min_score = config.threshold;
    let scored = score_hours(hours, ScoreVariant::Aurora, scoring, |_, score, is_dark| {
        is_dark && f64::from(score) >= min_score
    });

    let mut windows = collect_runs(&scored, config, true);
    windows.sort_by(|a, b| b.peak_score.cmp(&a.peak_score));
    windows.truncate(config.max_windows);

    debug!(
        hours = hours.len(),
        windows = windows.len(),
        "aurora window search complete"
    );
    windows
}

/// Run the window search for `variant`, using its defaults when `config` is `None`
#[must_use]
pub fn find_window_with(
    variant: WindowVariant,
    hours: &[HourSample],
    config: Option<&WindowConfig>,
    scoring: &ScoringConfig,
) -> WindowOutcome {
    let defaults = WindowConfig::for_variant(variant);
    let config = config.unwrap_or(&defaults);
    match variant {
        WindowVariant::ClearSky => {
            WindowOutcome::ClearSky(find_clear_sky_window(hours, config, scoring))
        }
        WindowVariant::Aurora => WindowOutcome::Aurora(find_aurora_windows(hours, config, scoring)),
    }
}
