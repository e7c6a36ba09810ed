// ABOUTME: Race time prediction using Riegel's formula plus required pace derivation
// ABOUTME: Converts a reference performance into a predicted time and pace for a target distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use race_core::formatting;
use tracing::warn;

use crate::constants::riegel::{ACCURATE_MAX_SECONDS, ACCURATE_MIN_SECONDS, RIEGEL_EXPONENT};
use crate::errors::{AppError, AppResult};
use crate::models::{Pace, PaceUnit, ReferencePerformance};

/// Performance prediction engine
pub struct PerformancePredictor;

impl PerformancePredictor {
    /// Predict race time using Riegel formula
    ///
    /// Riegel's formula: Time2 = Time1 × (Distance2 / Distance1)^1.06
    ///
    /// # Arguments
    /// * `known_distance` - Distance of the known performance in meters
    /// * `known_time` - Time of the known performance in seconds
    /// * `target_distance` - Target race distance in meters
    ///
    /// # Errors
    /// Returns `AppError::InvalidReference` if the known distance or time is not
    /// strictly positive or the extrapolation overflows, and
    /// `AppError::InvalidInput` if the target distance is not
    pub fn predict_time_riegel(
        known_distance: f64,
        known_time: f64,
        target_distance: f64,
    ) -> AppResult<f64> {
        if !(known_distance.is_finite() && known_time.is_finite())
            || known_distance <= 0.0
            || known_time <= 0.0
        {
            return Err(AppError::InvalidReference {
                distance_meters: known_distance,
                duration_seconds: known_time,
            });
        }

        if !target_distance.is_finite() || target_distance <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Target distance must be positive, got {target_distance} m"
            )));
        }

        let distance_ratio = target_distance / known_distance;
        let predicted = known_time * distance_ratio.powf(RIEGEL_EXPONENT);
        if !predicted.is_finite() {
            return Err(AppError::InvalidReference {
                distance_meters: known_distance,
                duration_seconds: known_time,
            });
        }
        Ok(predicted)
    }

    /// Predict the time to cover `target_meters` from a reference performance
    ///
    /// # Errors
    /// Returns `AppError::InvalidReference` for a reference with non-positive
    /// distance or duration
    pub fn predict_time(reference: &ReferencePerformance, target_meters: f64) -> AppResult<f64> {
        let predicted = Self::predict_time_riegel(
            reference.distance_meters,
            reference.duration_seconds,
            target_meters,
        )?;

        if !Self::is_within_accurate_range(predicted) {
            warn!(
                reference = %reference.identifier,
                predicted_seconds = predicted,
                "Prediction outside Riegel's accurate range (3.5 min to 4 h), treat as approximate"
            );
        }

        Ok(predicted)
    }

    /// Whether a predicted time lies in the band where Riegel's model holds up
    #[must_use]
    pub fn is_within_accurate_range(predicted_seconds: f64) -> bool {
        (ACCURATE_MIN_SECONDS..=ACCURATE_MAX_SECONDS).contains(&predicted_seconds)
    }

    /// Pace needed to run `target_meters` in `predicted_seconds`
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` if the target distance is not positive
    pub fn required_pace(
        predicted_seconds: f64,
        target_meters: f64,
        unit: PaceUnit,
    ) -> AppResult<Pace> {
        Pace::from_time_and_distance(predicted_seconds, target_meters, unit)
    }

    /// Format time in seconds as `H:MM:SS` or `MM:SS`
    #[must_use]
    pub fn format_time(seconds: f64) -> String {
        formatting::format_time(seconds)
    }

    /// Format a decimal-minute pace as `M:SS`
    #[must_use]
    pub fn format_pace(minutes_per_unit: f64) -> String {
        formatting::format_pace(minutes_per_unit)
    }
}
