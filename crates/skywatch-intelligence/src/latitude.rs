// ABOUTME: Latitude threshold model for aurora visibility
// ABOUTME: Maps absolute latitude to the minimum Kp index at which aurora is typically visible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

use skywatch_core::constants::{aurora, defaults, ranges};

/// Minimum Kp index for aurora to be visible at `latitude`
///
/// Both hemispheres map identically. A non-finite latitude is treated as the
/// equator.
#[must_use]
pub fn min_kp_for_latitude(latitude: f64) -> f64 {
    let latitude = if latitude.is_finite() {
        latitude
    } else {
        defaults::LATITUDE_DEG
    };
    let magnitude = latitude.abs().min(ranges::DEGREES_MAX);

    aurora::LATITUDE_KP_STEPS
        .iter()
        .find(|(min_latitude, _)| magnitude >= *min_latitude)
        .map_or(aurora::LOW_LATITUDE_KP, |&(_, min_kp)| min_kp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_boundaries() {
        let cases = [
            (70.0, 1.0),
            (66.0, 1.0),
            (65.9, 2.0),
            (62.0, 2.0),
            (60.0, 3.0),
            (55.0, 4.0),
            (53.3, 5.0),
            (50.0, 6.0),
            (45.0, 7.0),
            (44.9, 8.0),
            (0.0, 8.0),
        ];
        for (latitude, expected) in cases {
            assert!(
                (min_kp_for_latitude(latitude) - expected).abs() < f64::EPSILON,
                "latitude {latitude}"
            );
        }
    }

    #[test]
    fn test_hemispheres_are_symmetric() {
        for latitude in [10.0, 47.5, 53.3, 64.0, 89.0] {
            assert!(
                (min_kp_for_latitude(latitude) - min_kp_for_latitude(-latitude)).abs()
                    < f64::EPSILON
            );
        }
    }

    #[test]
    fn test_non_finite_latitude_uses_equator() {
        assert!((min_kp_for_latitude(f64::NAN) - 8.0).abs() < f64::EPSILON);
        assert!((min_kp_for_latitude(f64::INFINITY) - 8.0).abs() < f64::EPSILON);
    }
}
