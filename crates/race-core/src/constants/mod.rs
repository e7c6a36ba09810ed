// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Riegel model constants, canonical race distances, and unit conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Unit conversion and measurement constants
pub mod units;

/// Riegel race time model
pub mod riegel {
    /// Fatigue exponent in `T2 = T1 * (D2 / D1) ^ 1.06`
    pub const RIEGEL_EXPONENT: f64 = 1.06;

    /// Predictions faster than this (3.5 minutes) fall outside the accurate band
    pub const ACCURATE_MIN_SECONDS: f64 = 210.0;

    /// Predictions slower than this (4 hours) fall outside the accurate band
    pub const ACCURATE_MAX_SECONDS: f64 = 14_400.0;
}

/// Canonical race distances in meters
pub mod race_distances {
    /// 5 kilometers
    pub const DISTANCE_5K: f64 = 5_000.0;
    /// 10 kilometers
    pub const DISTANCE_10K: f64 = 10_000.0;
    /// Half marathon (13.1 miles)
    pub const DISTANCE_HALF_MARATHON: f64 = 21_097.5;
    /// Marathon (26.2 miles)
    pub const DISTANCE_MARATHON: f64 = 42_195.0;

    /// Slack allowed when matching a meter value to a canonical distance
    pub const DISTANCE_MATCH_TOLERANCE_METERS: f64 = 0.5;
}

/// Defaults for predictor configuration
pub mod defaults {
    /// Days of history considered when no window is given
    pub const DEFAULT_WINDOW_DAYS: i64 = 90;
    /// Longest configurable history window (about a century)
    pub const MAX_WINDOW_DAYS: i64 = 36_500;
}

/// Environment variable names read by the predictor
pub mod env_config {
    /// Whether walking workouts are eligible reference performances
    pub const INCLUDE_WALKING: &str = "RACE_PREDICTOR_INCLUDE_WALKING";
    /// Reference selection policy
    pub const SELECTION_POLICY: &str = "RACE_PREDICTOR_SELECTION_POLICY";
    /// Display unit for pace
    pub const PACE_UNIT: &str = "RACE_PREDICTOR_PACE_UNIT";
    /// Default history window length in days
    pub const WINDOW_DAYS: &str = "RACE_PREDICTOR_WINDOW_DAYS";
}
