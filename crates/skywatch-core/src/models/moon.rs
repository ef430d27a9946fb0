// ABOUTME: Moon phase naming and illumination value types
// ABOUTME: MoonPhaseName enum and the MoonPhaseInfo record returned by the moon model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named lunar phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhaseName {
    /// Phase near 0 or 1
    NewMoon,
    /// Growing sliver
    WaxingCrescent,
    /// Half lit, growing
    FirstQuarter,
    /// More than half lit, growing
    WaxingGibbous,
    /// Phase near 0.5
    FullMoon,
    /// More than half lit, shrinking
    WaningGibbous,
    /// Half lit, shrinking
    LastQuarter,
    /// Shrinking sliver
    WaningCrescent,
}

impl MoonPhaseName {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display information for one phase fraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseInfo {
    /// Phase fraction after default substitution, in [0, 1)
    pub phase: f64,
    /// Named phase
    pub name: MoonPhaseName,
    /// Illuminated fraction of the disc (percent)
    pub illumination_percent: u8,
}
