// ABOUTME: Benchmark fixtures generating realistic workout histories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating workout histories.
//!
//! Histories mix runs with rides, walks, and a sprinkling of records with
//! missing measurements, so the selector's filters do real work.

use chrono::{DateTime, Duration, Utc};
use race_time_predictor::models::{ActivityKind, PredictionWindow, WorkoutRecord};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum WorkoutBatchSize {
    /// One season of light training (30 workouts)
    Small,
    /// A year of regular training (365 workouts)
    Medium,
    /// Several years of exported history (5000 workouts)
    Large,
}

impl WorkoutBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 30,
            Self::Medium => 365,
            Self::Large => 5000,
        }
    }
}

fn determine_kind(index: usize) -> ActivityKind {
    match index % 5 {
        3 => ActivityKind::Cycling,
        4 if index % 10 == 9 => ActivityKind::Walking,
        _ => ActivityKind::Running,
    }
}

#[allow(clippy::cast_precision_loss)]
fn calculate_distance(index: usize) -> f64 {
    // Every 50th record lost its GPS track
    if index % 50 == 49 {
        0.0
    } else {
        2000.0 + ((index * 2713) % 40_000) as f64
    }
}

#[allow(clippy::cast_precision_loss)]
fn calculate_duration(index: usize, distance_meters: f64) -> f64 {
    let seconds_per_km = 240.0 + ((index * 53) % 150) as f64;
    distance_meters / 1000.0 * seconds_per_km
}

/// Generate a deterministic history of `size` workouts ending at `base_date`
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn generate_workouts(size: WorkoutBatchSize, base_date: DateTime<Utc>) -> Vec<WorkoutRecord> {
    (0..size.count())
        .map(|index| {
            let distance_meters = calculate_distance(index);
            WorkoutRecord::new(
                format!("bench_workout_{index}"),
                determine_kind(index),
                base_date - Duration::hours((index * 20) as i64),
                calculate_duration(index, distance_meters),
                distance_meters,
            )
        })
        .collect()
}

/// 90-day window ending at `base_date`
#[must_use]
#[allow(clippy::expect_used)]
pub fn default_window(base_date: DateTime<Utc>) -> PredictionWindow {
    PredictionWindow::trailing_days(90, base_date).expect("90-day window is representable")
}
