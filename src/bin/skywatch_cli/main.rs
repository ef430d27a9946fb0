// ABOUTME: Skywatch CLI - score conditions and find viewing windows from JSON input
// ABOUTME: Thin adapter around the scoring engine; reads files or stdin, prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors
//!
//! Usage:
//! ```bash
//! # Score a snapshot for stargazing
//! skywatch-cli score --variant sky --input tonight.json
//!
//! # Score aurora chances from stdin
//! echo '{"kpIndex":5,"lat":53.3,"cloudCover":15,"sunAltitude":-25}' | skywatch-cli score --variant aurora
//!
//! # Best clear-sky window over an hourly forecast
//! skywatch-cli window --variant clear-sky --input forecast.json
//!
//! # Moon phase name and illumination
//! skywatch-cli moon 0.27
//!
//! # Minimum Kp for aurora at a latitude
//! skywatch-cli latitude -- -45.9
//!
//! # Score many locations at once
//! skywatch-cli batch --variant outdoor --input locations.json
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skywatch::logging::LoggingConfig;
use skywatch::models::{ScoreVariant, WindowVariant};
use skywatch::ScoringEngine;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skywatch-cli",
    about = "Skywatch condition scoring CLI",
    long_about = "Scores stargazing, aurora and outdoor conditions and finds the best viewing windows in an hourly forecast. Input is JSON from a file or stdin; output is JSON on stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score one conditions snapshot
    Score {
        /// Scoring variant (sky, aurora, outdoor)
        #[arg(long, default_value = "sky")]
        variant: ScoreVariant,

        /// JSON file with the snapshot (stdin when omitted or `-`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Find viewing windows in an hourly series
    Window {
        /// Window search (clear-sky, aurora)
        #[arg(long, default_value = "clear-sky")]
        variant: WindowVariant,

        /// JSON file with the hourly series (stdin when omitted or `-`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Qualification threshold override (max cloud % or min aurora score)
        #[arg(long)]
        threshold: Option<f64>,

        /// Minimum window duration override, in minutes
        #[arg(long)]
        min_minutes: Option<i64>,

        /// Maximum number of windows override
        #[arg(long)]
        max_windows: Option<usize>,
    },

    /// Name and illumination of a lunar phase fraction
    Moon {
        /// Phase fraction (0 and 1 new, 0.5 full)
        phase: f64,
    },

    /// Minimum Kp index for aurora visibility at a latitude
    Latitude {
        /// Signed latitude in degrees
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
    },

    /// Score an array of snapshots in parallel
    Batch {
        /// Scoring variant (sky, aurora, outdoor)
        #[arg(long, default_value = "sky")]
        variant: ScoreVariant,

        /// JSON file with an array of snapshots (stdin when omitted or `-`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Find windows for an array of hourly series in parallel
    BatchWindow {
        /// Window search (clear-sky, aurora)
        #[arg(long, default_value = "clear-sky")]
        variant: WindowVariant,

        /// JSON file with an array of hourly series (stdin when omitted or `-`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.verbose().init()?;
    } else {
        logging.init()?;
    }

    let engine = ScoringEngine::from_env()?;

    let output = match cli.command {
        Command::Score { variant, input } => {
            commands::score(&engine, variant, input.as_deref())?
        }
        Command::Window {
            variant,
            input,
            threshold,
            min_minutes,
            max_windows,
        } => {
            let overrides = commands::WindowOverrides {
                threshold,
                min_minutes,
                max_windows,
            };
            commands::window(&engine, variant, input.as_deref(), &overrides)?
        }
        Command::Moon { phase } => commands::moon(phase)?,
        Command::Latitude { latitude } => commands::latitude(latitude)?,
        Command::Batch { variant, input } => {
            commands::batch(&engine, variant, input.as_deref())?
        }
        Command::BatchWindow { variant, input } => {
            commands::batch_window(&engine, variant, input.as_deref())?
        }
    };

    println!("{output}");
    Ok(())
}
