// ABOUTME: Main library entry point for the race time predictor
// ABOUTME: Selects a reference workout and predicts 5K to marathon finish times with Riegel's formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Race Time Predictor
//!
//! Estimates a runner's finish time for a target race distance (5K, 10K,
//! half marathon, marathon) from their historical workouts.
//!
//! ## Architecture
//!
//! - **Intelligence**: the performance selector and the Riegel predictor
//! - **Providers**: the `WorkoutSource` seam to the host's health data
//! - **Models**: workout records, race distances, prediction results
//! - **Config**: environment configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use race_time_predictor::intelligence::RacePredictor;
//! use race_time_predictor::models::{ActivityKind, PredictionWindow, RaceDistance, WorkoutRecord};
//!
//! let now = Utc::now();
//! let workouts = vec![WorkoutRecord::new(
//!     "tempo-10k",
//!     ActivityKind::Running,
//!     now - Duration::days(3),
//!     3600.0,
//!     10_000.0,
//! )];
//!
//! let predictor = RacePredictor::default();
//! let window = PredictionWindow::trailing_days(90, now).unwrap();
//! let result = predictor
//!     .get_prediction(RaceDistance::HalfMarathon, &window, &workouts)
//!     .unwrap();
//! assert_eq!(result.formatted_time(), "2:12:23");
//! ```

/// Environment configuration
pub mod config;

/// Constants re-exported from `race-core`
pub mod constants;

/// Error types re-exported from `race-core`
pub mod errors;

/// Reference selection, Riegel prediction, and the combined engine
pub mod intelligence;

/// Logging setup
pub mod logging;

/// Data models re-exported from `race-core`
pub mod models;

/// Workout sources feeding the engine
pub mod providers;

pub use race_core::formatting;
pub use race_core::units;
