// ABOUTME: Pure distance and pace conversions shared by the selector and the predictor
// ABOUTME: Meters to miles, per-mile to per-kilometer pace, and race names to canonical meters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{KM_PER_MILE, MILES_PER_METER, SECONDS_PER_MINUTE};
use crate::errors::{AppError, AppResult};
use crate::models::RaceDistance;

/// Convert meters to miles
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_PER_METER
}

/// Convert a per-mile pace into the equivalent per-kilometer pace
#[must_use]
pub fn per_mile_to_per_km(minutes_per_mile: f64) -> f64 {
    minutes_per_mile / KM_PER_MILE
}

/// Minutes per mile needed to cover `distance_meters` in `time_seconds`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the distance is not strictly positive
/// or the time is negative or not finite.
pub fn pace_minutes_per_mile(time_seconds: f64, distance_meters: f64) -> AppResult<f64> {
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Pace distance must be positive, got {distance_meters} m"
        )));
    }
    if !time_seconds.is_finite() || time_seconds < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Pace time must be non-negative, got {time_seconds} s"
        )));
    }

    Ok((time_seconds / SECONDS_PER_MINUTE) / meters_to_miles(distance_meters))
}

/// Resolve a race name ("5K", "10K", "Half Marathon", "Marathon") to meters
///
/// # Errors
///
/// Returns `AppError::UnknownDistance` for any other name.
pub fn race_distance_meters(name: &str) -> AppResult<f64> {
    name.parse::<RaceDistance>().map(RaceDistance::meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_miles() {
        let miles = meters_to_miles(5000.0);
        assert!((miles - 3.106_855).abs() < 1e-9);
    }

    #[test]
    fn test_pace_per_mile_for_30_minute_5k() {
        let pace = pace_minutes_per_mile(1800.0, 5000.0).unwrap();
        assert!((pace - 9.656_067).abs() < 1e-5, "got {pace}");
        let per_km = per_mile_to_per_km(pace);
        assert!((per_km - 6.0).abs() < 1e-3, "got {per_km}");
    }

    #[test]
    fn test_pace_rejects_zero_distance() {
        assert!(matches!(
            pace_minutes_per_mile(1800.0, 0.0),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_race_name_is_an_error() {
        assert_eq!(race_distance_meters("Marathon").unwrap(), 42_195.0);
        assert_eq!(
            race_distance_meters("50K"),
            Err(AppError::unknown_distance("50K"))
        );
    }
}
