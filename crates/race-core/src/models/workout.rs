// ABOUTME: Workout record supplied by the host health store
// ABOUTME: Duration, distance, start time, and activity kind of one historical workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ActivityKind;

/// One historical workout as delivered by the data source
///
/// Records are taken as-is: a zero or negative duration or distance is not an
/// error, the record is just never eligible as evidence.
///
/// # Examples
///
/// ```rust
/// use race_core::models::{ActivityKind, WorkoutRecord};
/// use chrono::Utc;
///
/// let run = WorkoutRecord::new("run-1", ActivityKind::Running, Utc::now(), 1800.0, 5000.0);
/// assert!(run.has_positive_measurements());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Opaque unique token from the host, used for logging only
    pub identifier: String,
    /// Elapsed time in seconds
    pub duration_seconds: f64,
    /// Covered distance in meters
    pub distance_meters: f64,
    /// When the workout began
    pub start_date: DateTime<Utc>,
    /// Activity tag
    pub activity_kind: ActivityKind,
}

impl WorkoutRecord {
    /// Create a workout record
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        activity_kind: ActivityKind,
        start_date: DateTime<Utc>,
        duration_seconds: f64,
        distance_meters: f64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            duration_seconds,
            distance_meters,
            start_date,
            activity_kind,
        }
    }

    /// Both duration and distance are finite and strictly positive
    #[must_use]
    pub fn has_positive_measurements(&self) -> bool {
        self.duration_seconds.is_finite()
            && self.distance_meters.is_finite()
            && self.duration_seconds > 0.0
            && self.distance_meters > 0.0
    }
}
