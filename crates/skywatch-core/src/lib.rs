// ABOUTME: Core types and constants for the Skywatch condition scoring engine
// ABOUTME: Foundation crate with models, scoring constants, and unified error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

#![deny(unsafe_code)]

//! # Skywatch Core
//!
//! Foundation crate providing shared types and constants for the Skywatch
//! condition scoring engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Input snapshots, hourly samples, score results, windows, moon phases
//! - **constants**: Curve breakpoints, default values, weights and thresholds by domain
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring constants organized by domain
pub mod constants;

/// Core data models (snapshots, samples, results, windows)
pub mod models;
