// ABOUTME: Core data models for the Skywatch scoring engine
// ABOUTME: Re-exports snapshots, hourly samples, score results, windows and moon phase types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! # Data Models
//!
//! Every model is a value object: constructed fresh per invocation, never
//! mutated after construction, with no persisted identity.
//!
//! ## Core Models
//!
//! - `ConditionsSnapshot`: raw, partially-populated measurements for one instant
//! - `ValidatedSnapshot`: fully-populated, range-clamped measurements
//! - `HourSample`: a snapshot plus its timestamp
//! - `ScoreResult`: composite score, rating, factor breakdown and reasons
//! - `Window`: a contiguous run of favorable hours

mod conditions;
mod moon;
mod score;
mod window;

pub use conditions::{ConditionsSnapshot, HourSample, ValidatedSnapshot, WindUnit};
pub use moon::{MoonPhaseInfo, MoonPhaseName};
pub use score::{CapKind, FactorKind, FactorResult, OverrideCap, Rating, ScoreResult, ScoreVariant};
pub use window::{ClearSkyResult, ClearestHour, Window, WindowOutcome, WindowVariant};
