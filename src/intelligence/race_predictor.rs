// ABOUTME: Race prediction engine combining reference selection and Riegel prediction
// ABOUTME: Synchronous core entry points plus async orchestration over a workout source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Race Predictor
//!
//! `get_prediction` is the single synchronous entry point the presentation
//! layer calls: it selects a reference performance from the workouts it is
//! handed, extrapolates it to the target distance, and derives the pace.
//! The engine holds only immutable configuration, so one instance can be
//! shared across threads freely.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use super::performance_prediction::PerformancePredictor;
use super::performance_selector::{PerformanceSelector, SelectionCriteria};
use crate::config::PredictorConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{
    PredictionResult, PredictionWindow, RaceDistance, ReferencePerformance, WorkoutRecord,
};
use crate::providers::WorkoutSource;

/// Per-distance outcome of a multi-distance prediction
pub type DistancePrediction = (RaceDistance, AppResult<PredictionResult>);

/// Prediction engine
#[derive(Debug, Clone, Default)]
pub struct RacePredictor {
    config: PredictorConfig,
}

impl RacePredictor {
    /// Create an engine with explicit configuration
    #[must_use]
    pub const fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    /// Create an engine configured from environment variables
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the environment holds malformed values
    pub fn from_env() -> AppResult<Self> {
        PredictorConfig::from_env().map(Self::new)
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Selection criteria this engine applies for `target` over `window`
    #[must_use]
    pub fn criteria(&self, target: RaceDistance, window: PredictionWindow) -> SelectionCriteria {
        SelectionCriteria::new(target.meters(), window)
            .with_walking(self.config.include_walking)
            .with_policy(self.config.selection_policy)
    }

    /// Window of `default_window_days` days ending at `now`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the window start is not representable
    pub fn default_window(&self, now: DateTime<Utc>) -> AppResult<PredictionWindow> {
        PredictionWindow::trailing_days(self.config.default_window_days, now)
    }

    /// Predict the finish time for `target` from the workouts inside `window`
    ///
    /// # Errors
    ///
    /// Returns `AppError::NoEligibleWorkouts` when no workout qualifies as a reference
    #[instrument(skip(self, window, workouts), fields(workouts = workouts.len()))]
    pub fn get_prediction(
        &self,
        target: RaceDistance,
        window: &PredictionWindow,
        workouts: &[WorkoutRecord],
    ) -> AppResult<PredictionResult> {
        let criteria = self.criteria(target, *window);
        let reference = PerformanceSelector::select_reference(workouts, &criteria).ok_or(
            AppError::NoEligibleWorkouts {
                target_meters: target.meters(),
            },
        )?;

        let result = self.predict_from_reference(target, reference)?;
        info!(
            target = %result.target,
            reference = %result.reference.identifier,
            predicted = %result.formatted_time(),
            pace = %result.formatted_pace(),
            approximate = result.approximate,
            "Race prediction computed"
        );
        Ok(result)
    }

    /// Predict using a race name such as "Half Marathon"
    ///
    /// # Errors
    ///
    /// Returns `AppError::UnknownDistance` for names outside the canonical
    /// set, otherwise as [`Self::get_prediction`]
    pub fn get_prediction_for_name(
        &self,
        name: &str,
        window: &PredictionWindow,
        workouts: &[WorkoutRecord],
    ) -> AppResult<PredictionResult> {
        let target: RaceDistance = name.parse()?;
        self.get_prediction(target, window, workouts)
    }

    /// Build the full result for an already chosen reference
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidReference` if the reference has non-positive
    /// distance or duration
    pub fn predict_from_reference(
        &self,
        target: RaceDistance,
        reference: ReferencePerformance,
    ) -> AppResult<PredictionResult> {
        let predicted_seconds = PerformancePredictor::predict_time(&reference, target.meters())?;
        let required_pace = PerformancePredictor::required_pace(
            predicted_seconds,
            target.meters(),
            self.config.pace_unit,
        )?;

        Ok(PredictionResult {
            target,
            predicted_seconds,
            reference,
            required_pace,
            approximate: !PerformancePredictor::is_within_accurate_range(predicted_seconds),
        })
    }

    /// Predict every canonical distance from the same history
    ///
    /// Each distance is reported separately so one failure does not hide the others.
    #[must_use]
    pub fn predict_all_distances(
        &self,
        window: &PredictionWindow,
        workouts: &[WorkoutRecord],
    ) -> Vec<DistancePrediction> {
        RaceDistance::ALL
            .into_iter()
            .map(|target| (target, self.get_prediction(target, window, workouts)))
            .collect()
    }

    /// Gate on data access, fetch the window's workouts, then predict
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` or `AppError::DataSource` from the
    /// source, otherwise as [`Self::get_prediction`]
    pub async fn predict_from_source<S>(
        &self,
        source: &S,
        target: RaceDistance,
        window: PredictionWindow,
    ) -> AppResult<PredictionResult>
    where
        S: WorkoutSource + ?Sized,
    {
        let workouts = Self::load_workouts(source, &window).await?;
        self.get_prediction(target, &window, &workouts)
    }

    /// Like [`Self::predict_from_source`] for every canonical distance
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` or `AppError::DataSource` from the source
    pub async fn predict_all_from_source<S>(
        &self,
        source: &S,
        window: PredictionWindow,
    ) -> AppResult<Vec<DistancePrediction>>
    where
        S: WorkoutSource + ?Sized,
    {
        let workouts = Self::load_workouts(source, &window).await?;
        Ok(self.predict_all_distances(&window, &workouts))
    }

    async fn load_workouts<S>(source: &S, window: &PredictionWindow) -> AppResult<Vec<WorkoutRecord>>
    where
        S: WorkoutSource + ?Sized,
    {
        source.request_data_access().await?;
        let workouts = source.fetch_running_workouts(window).await?;
        debug!(
            source = source.name(),
            fetched = workouts.len(),
            "Workouts fetched from source"
        );
        Ok(workouts)
    }
}

/// Predict with the default configuration from a target given in meters
///
/// # Errors
///
/// Returns `AppError::UnknownDistance` if `target_distance_meters` is not a
/// canonical race distance and `AppError::NoEligibleWorkouts` if no workout
/// qualifies
pub fn get_prediction(
    target_distance_meters: f64,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    workouts: &[WorkoutRecord],
) -> AppResult<PredictionResult> {
    let target = RaceDistance::from_meters(target_distance_meters)?;
    RacePredictor::default().get_prediction(
        target,
        &PredictionWindow::new(window_start, window_end),
        workouts,
    )
}
