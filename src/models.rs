// ABOUTME: Core data models re-exported from race-core
// ABOUTME: Re-exports WorkoutRecord, RaceDistance, PredictionResult and related structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutRecord`: one historical workout supplied by the host
//! - `ActivityKind`: activity tag deciding eligibility
//! - `RaceDistance`: the four canonical target distances
//! - `PredictionWindow`: inclusive date bounds on usable evidence
//! - `ReferencePerformance`: the workout chosen for extrapolation
//! - `PredictionResult`, `Pace`, `PaceUnit`: the computed answer

pub use race_core::models::*;
