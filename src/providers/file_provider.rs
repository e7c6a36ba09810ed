// ABOUTME: Workout source reading a JSON export of workout records from disk
// ABOUTME: Backs the command-line front end; maps I/O failures to access and data source errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::core::WorkoutSource;
use crate::errors::{AppError, AppResult};
use crate::models::{PredictionWindow, WorkoutRecord};

/// Workout source backed by a JSON array of `WorkoutRecord`s
///
/// ```json
/// [
///   {
///     "identifier": "run-2024-03-02",
///     "duration_seconds": 1500,
///     "distance_meters": 5000,
///     "start_date": "2024-03-02T07:30:00Z",
///     "activity_kind": "running"
///   }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileWorkoutSource {
    path: PathBuf,
}

impl JsonFileWorkoutSource {
    /// Source reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the export
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, error: &IoError) -> AppError {
        match error.kind() {
            ErrorKind::PermissionDenied => {
                AppError::access_denied(format!("{}: {error}", self.path.display()))
            }
            _ => AppError::data_source(format!("{}: {error}", self.path.display())),
        }
    }
}

#[async_trait]
impl WorkoutSource for JsonFileWorkoutSource {
    fn name(&self) -> &'static str {
        "json_file"
    }

    async fn request_data_access(&self) -> AppResult<()> {
        let metadata = fs::metadata(&self.path)
            .await
            .map_err(|e| self.io_error(&e))?;
        if metadata.is_file() {
            Ok(())
        } else {
            Err(AppError::data_source(format!(
                "{} is not a file",
                self.path.display()
            )))
        }
    }

    async fn fetch_running_workouts(
        &self,
        window: &PredictionWindow,
    ) -> AppResult<Vec<WorkoutRecord>> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io_error(&e))?;
        let workouts: Vec<WorkoutRecord> = serde_json::from_str(&contents).map_err(|e| {
            AppError::data_source(format!("{}: invalid workout JSON: {e}", self.path.display()))
        })?;

        let total = workouts.len();
        let in_window: Vec<WorkoutRecord> = workouts
            .into_iter()
            .filter(|workout| window.contains(workout.start_date))
            .collect();
        debug!(
            path = %self.path.display(),
            total,
            in_window = in_window.len(),
            "Loaded workout export"
        );

        Ok(in_window)
    }
}
