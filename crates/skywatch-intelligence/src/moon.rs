// ABOUTME: Moon phase model converting a phase fraction into a named phase and illumination
// ABOUTME: Ordered phase-name table over [0, 1) with invalid phases treated as full moon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use crate::factors::illumination_fraction;
use skywatch_core::constants::{defaults, moon_phases};
use skywatch_core::models::{MoonPhaseInfo, MoonPhaseName};

/// Upper bounds of the named phases between the two new-moon edges, evaluated in order
const PHASE_TABLE: [(f64, MoonPhaseName); 7] = [
    (moon_phases::WAXING_CRESCENT, MoonPhaseName::WaxingCrescent),
    (moon_phases::FIRST_QUARTER, MoonPhaseName::FirstQuarter),
    (moon_phases::WAXING_GIBBOUS, MoonPhaseName::WaxingGibbous),
    (moon_phases::FULL_MOON, MoonPhaseName::FullMoon),
    (moon_phases::WANING_GIBBOUS, MoonPhaseName::WaningGibbous),
    (moon_phases::LAST_QUARTER, MoonPhaseName::LastQuarter),
    (moon_phases::NEW_MOON_UPPER, MoonPhaseName::WaningCrescent),
];

/// Normalize a phase into [0, 1), using full moon for non-finite input
#[must_use]
pub fn normalize_phase(phase: f64) -> f64 {
    if phase.is_finite() {
        phase.rem_euclid(1.0)
    } else {
        defaults::MOON_PHASE
    }
}

/// Name of the phase
#[must_use]
pub fn phase_name(phase: f64) -> MoonPhaseName {
    let phase = normalize_phase(phase);
    if phase < moon_phases::NEW_MOON_LOWER || phase > moon_phases::NEW_MOON_UPPER {
        return MoonPhaseName::NewMoon;
    }
    PHASE_TABLE
        .iter()
        .find(|(upper, _)| phase < *upper)
        .map_or(MoonPhaseName::WaningCrescent, |&(_, name)| name)
}

/// Named phase and illuminated percentage for a phase fraction
#[must_use]
pub fn moon_phase_info(phase: f64) -> MoonPhaseInfo {
    let phase = normalize_phase(phase);
    MoonPhaseInfo {
        phase,
        name: phase_name(phase),
        illumination_percent: (illumination_fraction(phase) * 100.0).round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_table_edges() {
        let cases = [
            (0.0, MoonPhaseName::NewMoon),
            (0.029, MoonPhaseName::NewMoon),
            (0.03, MoonPhaseName::WaxingCrescent),
            (0.22, MoonPhaseName::FirstQuarter),
            (0.25, MoonPhaseName::FirstQuarter),
            (0.3, MoonPhaseName::WaxingGibbous),
            (0.5, MoonPhaseName::FullMoon),
            (0.6, MoonPhaseName::WaningGibbous),
            (0.75, MoonPhaseName::LastQuarter),
            (0.9, MoonPhaseName::WaningCrescent),
            (0.97, MoonPhaseName::WaningCrescent),
            (0.98, MoonPhaseName::NewMoon),
        ];
        for (phase, expected) in cases {
            assert_eq!(phase_name(phase), expected, "phase {phase}");
        }
    }

    #[test]
    fn test_invalid_phase_is_full_moon() {
        let info = moon_phase_info(f64::NAN);
        assert_eq!(info.name, MoonPhaseName::FullMoon);
        assert_eq!(info.illumination_percent, 100);
        assert!((info.phase - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_illumination_percent() {
        assert_eq!(moon_phase_info(0.0).illumination_percent, 0);
        assert_eq!(moon_phase_info(0.25).illumination_percent, 50);
        assert_eq!(moon_phase_info(0.75).illumination_percent, 50);
        assert_eq!(moon_phase_info(1.0).illumination_percent, 0);
    }
}
