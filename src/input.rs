// ABOUTME: JSON input loading for snapshots and hourly series from files or stdin
// ABOUTME: Converts IO and decoding failures into AppError with file context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! JSON input loading
//!
//! Accepted shapes:
//!
//! - snapshot: one JSON object with optional measurement fields
//! - hourly series: an array of samples, or an object with an `hours` array
//! - batches: an array of snapshots, or an array of hourly series

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use skywatch_core::errors::{AppError, AppResult};
use skywatch_core::models::{ConditionsSnapshot, HourSample};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where to read JSON from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// A file when `path` is given and is not `-`, otherwise stdin
    #[must_use]
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_owned(),
        }
    }

    /// Read the whole input as text
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing file, `StorageError` for other
    /// read failures and `InvalidInput` for empty input
    pub fn read_to_string(&self) -> AppResult<String> {
        let text = match self {
            Self::File(path) => fs::read_to_string(path).map_err(|error| {
                AppError::from(error).with_details(json!({ "source": self.describe() }))
            })?,
            Self::Stdin => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };
        if text.trim().is_empty() {
            return Err(AppError::invalid_input(format!(
                "no JSON found in {}",
                self.describe()
            )));
        }
        debug!(source = %self.describe(), bytes = text.len(), "read input");
        Ok(text)
    }
}

/// Hourly series wrapped in an object, as forecast payloads usually are
#[derive(Deserialize)]
#[serde(untagged)]
enum HourSeries {
    Bare(Vec<HourSample>),
    Wrapped { hours: Vec<HourSample> },
}

impl From<HourSeries> for Vec<HourSample> {
    fn from(series: HourSeries) -> Self {
        match series {
            HourSeries::Bare(hours) | HourSeries::Wrapped { hours } => hours,
        }
    }
}

fn parse<T: DeserializeOwned>(text: &str, what: &str) -> AppResult<T> {
    serde_json::from_str(text).map_err(|error| {
        let mut app_error = AppError::from(error);
        app_error.message = format!("{what}: {}", app_error.message);
        app_error
    })
}

/// Parse one snapshot
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not a snapshot object
pub fn parse_snapshot(text: &str) -> AppResult<ConditionsSnapshot> {
    parse(text, "invalid conditions snapshot")
}

/// Parse an hourly series, bare or wrapped in `{"hours": [...]}`
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not an hourly series
pub fn parse_hours(text: &str) -> AppResult<Vec<HourSample>> {
    parse::<HourSeries>(text, "invalid hourly series").map(Vec::from)
}

/// Parse an array of snapshots
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not an array of snapshot objects
pub fn parse_snapshot_batch(text: &str) -> AppResult<Vec<ConditionsSnapshot>> {
    parse(text, "invalid snapshot batch")
}

/// Parse an array of hourly series
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not an array of hourly series
pub fn parse_series_batch(text: &str) -> AppResult<Vec<Vec<HourSample>>> {
    parse::<Vec<HourSeries>>(text, "invalid series batch")
        .map(|batch| batch.into_iter().map(Vec::from).collect())
}

/// Load one snapshot
///
/// # Errors
///
/// Returns an error if the source cannot be read or decoded
pub fn load_snapshot(source: &InputSource) -> AppResult<ConditionsSnapshot> {
    parse_snapshot(&source.read_to_string()?)
}

/// Load an hourly series
///
/// # Errors
///
/// Returns an error if the source cannot be read or decoded
pub fn load_hours(source: &InputSource) -> AppResult<Vec<HourSample>> {
    parse_hours(&source.read_to_string()?)
}

/// Load a batch of snapshots
///
/// # Errors
///
/// Returns an error if the source cannot be read or decoded
pub fn load_snapshot_batch(source: &InputSource) -> AppResult<Vec<ConditionsSnapshot>> {
    parse_snapshot_batch(&source.read_to_string()?)
}

/// Load a batch of hourly series
///
/// # Errors
///
/// Returns an error if the source cannot be read or decoded
pub fn load_series_batch(source: &InputSource) -> AppResult<Vec<Vec<HourSample>>> {
    parse_series_batch(&source.read_to_string()?)
}
