// ABOUTME: Workout source trait for the host health store collaborator
// ABOUTME: Access gate plus windowed workout fetch, resolved before the synchronous core runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Source Contract
//!
//! The prediction core never talks to a health store itself. A host wires in
//! a `WorkoutSource`, the engine awaits access and the fetched records, and
//! from then on the computation is synchronous.
//!
//! ## Example: Adding a New Source
//!
//! ```rust,no_run
//! use race_time_predictor::errors::AppResult;
//! use race_time_predictor::models::{PredictionWindow, WorkoutRecord};
//! use race_time_predictor::providers::WorkoutSource;
//! use async_trait::async_trait;
//!
//! pub struct HealthStoreSource;
//!
//! #[async_trait]
//! impl WorkoutSource for HealthStoreSource {
//!     fn name(&self) -> &'static str {
//!         "health_store"
//!     }
//!
//!     async fn request_data_access(&self) -> AppResult<()> {
//!         // Ask the platform for read permission on workouts
//!         Ok(())
//!     }
//!
//!     async fn fetch_running_workouts(
//!         &self,
//!         _window: &PredictionWindow,
//!     ) -> AppResult<Vec<WorkoutRecord>> {
//!         // Query the store and map samples to WorkoutRecord
//!         Ok(vec![])
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{PredictionWindow, WorkoutRecord};

/// Source of historical workout records
#[async_trait]
pub trait WorkoutSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &'static str;

    /// Ask for permission to read workout data
    ///
    /// The engine is never run when this fails; surfacing the denial to the
    /// user is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` when the user or platform refuses access
    async fn request_data_access(&self) -> AppResult<()>;

    /// Fetch workouts that started inside `window`
    ///
    /// Sources may return other activity kinds or malformed records; the
    /// selector filters them out.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DataSource` when the records cannot be loaded
    async fn fetch_running_workouts(&self, window: &PredictionWindow)
        -> AppResult<Vec<WorkoutRecord>>;
}
