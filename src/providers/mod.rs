// ABOUTME: Workout source module for the external health data collaborator
// ABOUTME: Defines the WorkoutSource trait with synthetic and JSON file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// The `WorkoutSource` trait
pub mod core;
/// JSON export reader
pub mod file_provider;
/// In-memory synthetic source
pub mod synthetic_provider;

pub use self::core::WorkoutSource;
pub use file_provider::JsonFileWorkoutSource;
pub use synthetic_provider::SyntheticWorkoutSource;
