// ABOUTME: In-memory synthetic workout source for development, demos, and testing
// ABOUTME: Holds injectable workout records and an access switch without any real health store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Synthetic Workout Source
//!
//! Pre-loaded, mutable workout history for tests and demonstrations. All data
//! access is protected by `RwLock`, so one instance can be shared between
//! concurrent prediction requests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::core::WorkoutSource;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityKind, PredictionWindow, WorkoutRecord};

/// Workout source backed by an in-memory list
///
/// # Examples
///
/// ```rust,no_run
/// use race_time_predictor::providers::{SyntheticWorkoutSource, WorkoutSource};
/// use race_time_predictor::models::PredictionWindow;
/// use chrono::Utc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let workouts = SyntheticWorkoutSource::generate_workouts(30, Utc::now());
/// let source = SyntheticWorkoutSource::with_workouts(workouts);
/// let window = PredictionWindow::trailing_days(90, Utc::now())?;
/// let fetched = source.fetch_running_workouts(&window).await?;
/// # Ok(())
/// # }
/// ```
pub struct SyntheticWorkoutSource {
    workouts: RwLock<Vec<WorkoutRecord>>,
    access_granted: AtomicBool,
}

impl SyntheticWorkoutSource {
    /// Source pre-loaded with `workouts`, access granted
    #[must_use]
    pub fn with_workouts(workouts: Vec<WorkoutRecord>) -> Self {
        Self {
            workouts: RwLock::new(workouts),
            access_granted: AtomicBool::new(true),
        }
    }

    /// Empty source, access granted
    #[must_use]
    pub fn new() -> Self {
        Self::with_workouts(Vec::new())
    }

    /// Source whose access request always fails
    #[must_use]
    pub fn denied() -> Self {
        let source = Self::new();
        source.set_access_granted(false);
        source
    }

    /// Grant or revoke access
    pub fn set_access_granted(&self, granted: bool) {
        self.access_granted.store(granted, Ordering::SeqCst);
    }

    /// Append a workout
    ///
    /// # Errors
    ///
    /// Returns `AppError::DataSource` if the internal `RwLock` is poisoned.
    pub fn add_workout(&self, workout: WorkoutRecord) -> AppResult<()> {
        self.workouts
            .write()
            .map_err(|_| AppError::data_source("RwLock poisoned: workouts lock"))?
            .push(workout);
        Ok(())
    }

    /// Number of stored workouts
    ///
    /// # Errors
    ///
    /// Returns `AppError::DataSource` if the internal `RwLock` is poisoned.
    pub fn workout_count(&self) -> AppResult<usize> {
        Ok(self
            .workouts
            .read()
            .map_err(|_| AppError::data_source("RwLock poisoned: workouts lock"))?
            .len())
    }

    /// Generate a deterministic mixed history of `count` workouts, one every two days back from `base_date`
    ///
    /// Every fourth workout is a ride and every seventh a walk; runs get a
    /// slowly varying pace between roughly 4:30 and 6:00 per kilometer.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn generate_workouts(count: usize, base_date: DateTime<Utc>) -> Vec<WorkoutRecord> {
        (0..count)
            .map(|index| {
                let kind = if index % 4 == 3 {
                    ActivityKind::Cycling
                } else if index % 7 == 6 {
                    ActivityKind::Walking
                } else {
                    ActivityKind::Running
                };
                let distance_meters = 3000.0 + ((index * 1733) % 18_000) as f64;
                let seconds_per_km = 270.0 + ((index * 37) % 90) as f64;
                let duration_seconds = distance_meters / 1000.0 * seconds_per_km;
                let start_date = base_date - Duration::days((index * 2) as i64);

                WorkoutRecord::new(
                    format!("synthetic_{index}"),
                    kind,
                    start_date,
                    duration_seconds,
                    distance_meters,
                )
            })
            .collect()
    }
}

impl Default for SyntheticWorkoutSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkoutSource for SyntheticWorkoutSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn request_data_access(&self) -> AppResult<()> {
        if self.access_granted.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::access_denied("synthetic source access revoked"))
        }
    }

    async fn fetch_running_workouts(
        &self,
        window: &PredictionWindow,
    ) -> AppResult<Vec<WorkoutRecord>> {
        let workouts = self
            .workouts
            .read()
            .map_err(|_| AppError::data_source("RwLock poisoned: workouts lock"))?;

        Ok(workouts
            .iter()
            .filter(|workout| window.contains(workout.start_date))
            .cloned()
            .collect())
    }
}
