// ABOUTME: Unit conversion constants for wind speed and distance measurements
// ABOUTME: Shared by snapshot validation and reason formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

/// Meters per second to kilometers per hour
pub const MS_TO_KMH_FACTOR: f64 = 3.6;

/// Meters in one kilometer
pub const METERS_PER_KM: f64 = 1000.0;
