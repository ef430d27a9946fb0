// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Curve breakpoints, input defaults, weights and rating thresholds for scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skywatch Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Every value here is a documented default; the tunable subset is
//! mirrored by `EngineConfig` in the intelligence crate.

/// Unit conversion and measurement constants
pub mod units;

/// Service identification used by logging
pub mod service_names {
    /// Service name reported in structured logs
    pub const SKYWATCH: &str = "skywatch";
}

/// Values substituted for missing, NaN or infinite snapshot fields
pub mod defaults {
    /// Cloud cover assumed when unknown (percent)
    pub const CLOUD_COVER_PERCENT: f64 = 50.0;
    /// Relative humidity assumed when unknown (percent)
    pub const HUMIDITY_PERCENT: f64 = 70.0;
    /// Wind speed assumed when unknown, in meters per second
    pub const WIND_SPEED_MS: f64 = 5.0;
    /// Horizontal visibility assumed when unknown (meters)
    pub const VISIBILITY_METERS: f64 = 10_000.0;
    /// Quiet geomagnetic conditions
    pub const KP_INDEX: f64 = 2.0;
    /// Sun altitude assumed when unknown and darkness is not denied (astronomical night)
    pub const SUN_ALTITUDE_NIGHT_DEG: f64 = -18.0;
    /// Sun altitude assumed when unknown and the caller says it is not dark
    pub const SUN_ALTITUDE_DAY_DEG: f64 = 0.0;
    /// Full moon
    pub const MOON_PHASE: f64 = 0.5;
    /// Latitude assumed when unknown (degrees)
    pub const LATITUDE_DEG: f64 = 0.0;
    /// Air temperature assumed when unknown (Celsius)
    pub const TEMPERATURE_CELSIUS: f64 = 15.0;
    /// Precipitation probability assumed when unknown (percent)
    pub const PRECIPITATION_PERCENT: f64 = 20.0;
}

/// Physical clamping ranges applied after default substitution
pub mod ranges {
    /// Percent quantities (cloud, humidity, precipitation)
    pub const PERCENT_MIN: f64 = 0.0;
    /// Upper bound for percent quantities
    pub const PERCENT_MAX: f64 = 100.0;
    /// Highest wind speed accepted (km/h)
    pub const WIND_KMH_MAX: f64 = 400.0;
    /// Farthest visibility accepted (meters)
    pub const VISIBILITY_METERS_MAX: f64 = 100_000.0;
    /// Kp index lower bound
    pub const KP_MIN: f64 = 0.0;
    /// Kp index upper bound
    pub const KP_MAX: f64 = 9.0;
    /// Altitude and latitude magnitude bound (degrees)
    pub const DEGREES_MAX: f64 = 90.0;
    /// Coldest temperature accepted (Celsius)
    pub const TEMPERATURE_MIN_CELSIUS: f64 = -90.0;
    /// Hottest temperature accepted (Celsius)
    pub const TEMPERATURE_MAX_CELSIUS: f64 = 60.0;
}

/// Breakpoints of the piecewise-linear factor curves
pub mod curves {
    /// Humidity at or below this scores 100
    pub const HUMIDITY_IDEAL_PERCENT: f64 = 50.0;
    /// Humidity at or above this scores 0
    pub const HUMIDITY_WORST_PERCENT: f64 = 90.0;
    /// Wind at or below this scores 100 (km/h)
    pub const WIND_IDEAL_KMH: f64 = 10.0;
    /// Wind at or above this scores 0 (km/h)
    pub const WIND_WORST_KMH: f64 = 40.0;
    /// Visibility at or above this scores 100 (meters)
    pub const VISIBILITY_IDEAL_METERS: f64 = 10_000.0;
    /// Visibility at or below this scores 0 (meters)
    pub const VISIBILITY_WORST_METERS: f64 = 1_000.0;
    /// Lower edge of the ideal outdoor temperature band (Celsius)
    pub const TEMPERATURE_IDEAL_MIN_CELSIUS: f64 = 15.0;
    /// Upper edge of the ideal outdoor temperature band (Celsius)
    pub const TEMPERATURE_IDEAL_MAX_CELSIUS: f64 = 25.0;
    /// Temperature at or below this scores 0 (Celsius)
    pub const TEMPERATURE_COLD_LIMIT_CELSIUS: f64 = 0.0;
    /// Temperature at or above this scores 0 (Celsius)
    pub const TEMPERATURE_HOT_LIMIT_CELSIUS: f64 = 38.0;
    /// Outdoor cloud penalty divisor (overcast still scores 50)
    pub const OUTDOOR_CLOUD_DIVISOR: f64 = 2.0;
}

/// Sun altitude thresholds (degrees below the horizon)
pub mod twilight {
    /// Civil twilight ends
    pub const CIVIL_DEG: f64 = -6.0;
    /// Nautical twilight ends
    pub const NAUTICAL_DEG: f64 = -12.0;
    /// Astronomical twilight ends
    pub const ASTRONOMICAL_DEG: f64 = -18.0;
}

/// Aurora scoring tables
pub mod aurora {
    /// Latitude step function: (minimum absolute latitude, minimum Kp), evaluated top-down
    pub const LATITUDE_KP_STEPS: [(f64, f64); 7] = [
        (66.0, 1.0),
        (62.0, 2.0),
        (58.0, 3.0),
        (55.0, 4.0),
        (52.0, 5.0),
        (48.0, 6.0),
        (45.0, 7.0),
    ];
    /// Kp required below the lowest latitude step
    pub const LOW_LATITUDE_KP: f64 = 8.0;

    /// Kp surplus over the latitude threshold mapped to a sub-score, evaluated top-down
    pub const KP_DIFFERENCE_SUBSCORES: [(f64, u8); 4] =
        [(2.0, 100), (1.0, 90), (0.0, 70), (-1.0, 40)];
    /// Darkness: (maximum sun altitude, sub-score), evaluated top-down
    pub const DARKNESS_SUBSCORES: [(f64, u8); 3] = [(-18.0, 100), (-12.0, 80), (-6.0, 40)];
    /// Cloud: (maximum cloud percent, sub-score), evaluated top-down
    pub const CLOUD_SUBSCORES: [(f64, u8); 4] =
        [(20.0, 100), (40.0, 80), (60.0, 50), (80.0, 20)];

    /// Ceiling when Kp is more than one point below the latitude threshold
    pub const WEAK_ACTIVITY_CAP: f64 = 30.0;
    /// Ceiling when the sun is above civil twilight
    pub const DAYLIGHT_CAP: f64 = 25.0;
    /// Kp margin below the threshold beyond which the activity cap applies
    pub const WEAK_ACTIVITY_MARGIN: f64 = 1.0;

    /// Kp margin over the threshold required for an Excellent rating
    pub const EXCELLENT_KP_MARGIN: f64 = 1.0;
    /// Kp margin over the threshold required for a Good rating
    pub const GOOD_KP_MARGIN: f64 = 0.0;
}

/// Outdoor scoring tables
pub mod outdoor {
    /// Precipitation probability at or above which the rain cap applies (percent)
    pub const HEAVY_RAIN_PERCENT: f64 = 80.0;
    /// Ceiling when heavy rain is likely
    pub const HEAVY_RAIN_CAP: f64 = 35.0;
}

/// Default factor weights (percentage points, each table sums to 100)
pub mod weights {
    /// Sky: cloud cover
    pub const SKY_CLOUDS: u8 = 40;
    /// Sky: moon brightness
    pub const SKY_MOON: u8 = 25;
    /// Sky: humidity
    pub const SKY_HUMIDITY: u8 = 15;
    /// Sky: wind
    pub const SKY_WIND: u8 = 10;
    /// Sky: visibility
    pub const SKY_VISIBILITY: u8 = 10;

    /// Aurora: Kp relative to the latitude threshold
    pub const AURORA_KP: u8 = 40;
    /// Aurora: darkness
    pub const AURORA_DARKNESS: u8 = 25;
    /// Aurora: cloud cover
    pub const AURORA_CLOUD: u8 = 25;
    /// Aurora: viewing conditions (placeholder, never penalizes)
    pub const AURORA_VIEWING: u8 = 10;

    /// Outdoor: temperature
    pub const OUTDOOR_TEMPERATURE: u8 = 35;
    /// Outdoor: rain probability
    pub const OUTDOOR_RAIN: u8 = 30;
    /// Outdoor: wind
    pub const OUTDOOR_WIND: u8 = 20;
    /// Outdoor: cloud cover
    pub const OUTDOOR_CLOUD: u8 = 15;

    /// Required total of every weight table
    pub const TOTAL: u32 = 100;
}

/// Rating bucket lower bounds
pub mod ratings {
    /// Excellent lower bound (sky and outdoor)
    pub const EXCELLENT: u8 = 80;
    /// Good lower bound (sky and outdoor)
    pub const GOOD: u8 = 65;
    /// Fair lower bound (sky and outdoor)
    pub const FAIR: u8 = 50;
    /// Poor lower bound (sky and outdoor)
    pub const POOR: u8 = 35;

    /// Aurora Excellent lower bound
    pub const AURORA_EXCELLENT: u8 = 80;
    /// Aurora Good lower bound
    pub const AURORA_GOOD: u8 = 70;
    /// Aurora Possible lower bound
    pub const AURORA_POSSIBLE: u8 = 50;
    /// Aurora Unlikely lower bound
    pub const AURORA_UNLIKELY: u8 = 30;
}

/// Score aggregation limits
pub mod scoring {
    /// Composite used when the weighted sum is not a finite number
    pub const NEUTRAL_SCORE: u8 = 50;
    /// Maximum number of reason strings in a result
    pub const MAX_REASONS: usize = 4;
    /// Upper bound of every score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Window finder defaults
pub mod windows {
    /// Clear-sky: maximum cloud cover for an hour to qualify (percent)
    pub const CLEAR_SKY_MAX_CLOUD_PERCENT: f64 = 30.0;
    /// Clear-sky: minimum window duration (two hourly slots)
    pub const CLEAR_SKY_MIN_DURATION_MINUTES: i64 = 120;
    /// Clear-sky: a single best window is reported
    pub const CLEAR_SKY_MAX_WINDOWS: usize = 1;
    /// Aurora: minimum composite score for an hour to qualify
    pub const AURORA_MIN_SCORE: f64 = 60.0;
    /// Aurora: minimum window duration
    pub const AURORA_MIN_DURATION_MINUTES: i64 = 30;
    /// Aurora: number of windows returned
    pub const AURORA_MAX_WINDOWS: usize = 3;
    /// Length of the slot each hourly sample represents
    pub const SLOT_MINUTES: i64 = 60;
    /// Longest slot a sample may stand for (one day)
    pub const MAX_SLOT_MINUTES: i64 = 24 * 60;
}

/// Exclusive upper bounds of the named moon phases, evaluated in order
pub mod moon_phases {
    /// Phases below this (or above `NEW_MOON_UPPER`) are a new moon
    pub const NEW_MOON_LOWER: f64 = 0.03;
    /// Phases above this are a new moon
    pub const NEW_MOON_UPPER: f64 = 0.97;
    /// Waxing crescent upper bound
    pub const WAXING_CRESCENT: f64 = 0.22;
    /// First quarter upper bound
    pub const FIRST_QUARTER: f64 = 0.28;
    /// Waxing gibbous upper bound
    pub const WAXING_GIBBOUS: f64 = 0.47;
    /// Full moon upper bound
    pub const FULL_MOON: f64 = 0.53;
    /// Waning gibbous upper bound
    pub const WANING_GIBBOUS: f64 = 0.72;
    /// Last quarter upper bound
    pub const LAST_QUARTER: f64 = 0.78;
}
