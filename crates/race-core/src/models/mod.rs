// ABOUTME: Core data models for race time prediction
// ABOUTME: Workout records, activity kinds, race distances, windows, and prediction results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models consumed and produced by the prediction engine. None of them
//! are persisted: they are built per request and dropped after the result
//! is returned.

mod activity_kind;
mod prediction;
mod race_distance;
mod window;
mod workout;

pub use activity_kind::ActivityKind;
pub use prediction::{Pace, PaceUnit, PredictionResult, ReferencePerformance};
pub use race_distance::RaceDistance;
pub use window::PredictionWindow;
pub use workout::WorkoutRecord;
