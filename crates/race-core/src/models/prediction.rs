// ABOUTME: Reference performance, pace, and prediction result models
// ABOUTME: Immutable values produced once per prediction request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{RaceDistance, WorkoutRecord};
use crate::errors::{AppError, AppResult};
use crate::formatting::{format_pace, format_time};
use crate::units::{pace_minutes_per_mile, per_mile_to_per_km};

/// The workout chosen as the basis for extrapolation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePerformance {
    /// Identifier of the source workout
    pub identifier: String,
    /// Elapsed time in seconds
    pub duration_seconds: f64,
    /// Covered distance in meters
    pub distance_meters: f64,
    /// When the source workout began
    pub start_date: DateTime<Utc>,
}

impl ReferencePerformance {
    /// Reference built directly from measurements
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        duration_seconds: f64,
        distance_meters: f64,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            duration_seconds,
            distance_meters,
            start_date,
        }
    }
}

impl From<&WorkoutRecord> for ReferencePerformance {
    fn from(workout: &WorkoutRecord) -> Self {
        Self {
            identifier: workout.identifier.clone(),
            duration_seconds: workout.duration_seconds,
            distance_meters: workout.distance_meters,
            start_date: workout.start_date,
        }
    }
}

/// Distance unit a pace is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceUnit {
    /// Minutes per mile
    #[default]
    Mile,
    /// Minutes per kilometer
    Kilometer,
}

impl PaceUnit {
    /// Short suffix used when displaying a pace
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Mile => "/mi",
            Self::Kilometer => "/km",
        }
    }
}

impl FromStr for PaceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mile" | "miles" | "mi" => Ok(Self::Mile),
            "kilometer" | "kilometers" | "kilometre" | "km" => Ok(Self::Kilometer),
            other => Err(AppError::invalid_input(format!("Unknown pace unit: {other}"))),
        }
    }
}

/// Time per unit distance, in decimal minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pace {
    /// Decimal minutes per `unit`
    pub minutes_per_unit: f64,
    /// Unit the pace is expressed in
    pub unit: PaceUnit,
}

impl Pace {
    /// Pace needed to cover `distance_meters` in `time_seconds`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the distance is not positive.
    pub fn from_time_and_distance(
        time_seconds: f64,
        distance_meters: f64,
        unit: PaceUnit,
    ) -> AppResult<Self> {
        let per_mile = pace_minutes_per_mile(time_seconds, distance_meters)?;
        let minutes_per_unit = match unit {
            PaceUnit::Mile => per_mile,
            PaceUnit::Kilometer => per_mile_to_per_km(per_mile),
        };
        Ok(Self {
            minutes_per_unit,
            unit,
        })
    }

    /// `M:SS` without the unit suffix
    #[must_use]
    pub fn formatted(&self) -> String {
        format_pace(self.minutes_per_unit)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted(), self.unit.suffix())
    }
}

/// Outcome of one prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Race the prediction is for
    pub target: RaceDistance,
    /// Estimated finish time in seconds
    pub predicted_seconds: f64,
    /// Workout the estimate was extrapolated from
    pub reference: ReferencePerformance,
    /// Pace required to run `predicted_seconds` over the target distance
    pub required_pace: Pace,
    /// Prediction falls outside Riegel's accurate band (3.5 min to 4 h)
    pub approximate: bool,
}

impl PredictionResult {
    /// Predicted time as `H:MM:SS` or `MM:SS`
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_time(self.predicted_seconds)
    }

    /// Required pace as `M:SS /mi` or `M:SS /km`
    #[must_use]
    pub fn formatted_pace(&self) -> String {
        self.required_pace.to_string()
    }
}
