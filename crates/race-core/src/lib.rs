// ABOUTME: Core types and constants for race time prediction from workout history
// ABOUTME: Foundation crate with error handling, workout models, race distances, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Race Core
//!
//! Foundation crate providing shared types and constants for the race time
//! predictor. Everything here is pure data and pure functions; the selection
//! and prediction engine lives in the `race_time_predictor` crate.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `AppResult` alias
//! - **constants**: Riegel constants, unit factors, and canonical race distances
//! - **models**: Workout records, race distances, reference performances, predictions
//! - **units**: Distance and pace conversions
//! - **formatting**: `H:MM:SS` times and `M:SS` paces

/// Unified error handling with stable error codes
pub mod errors;

/// Physiological and unit conversion constants
pub mod constants;

/// Core data models (`WorkoutRecord`, `RaceDistance`, `PredictionResult`, etc.)
pub mod models;

/// Pure distance and pace conversions
pub mod units;

/// Clock-style time and pace formatting
pub mod formatting;
