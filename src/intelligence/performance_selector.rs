// ABOUTME: Reference performance selection from a runner's workout history
// ABOUTME: Filters workouts by kind, window, and measurements, then ranks them for a target distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Performance Selector
//!
//! Picks the single workout a prediction is extrapolated from. Selection is a
//! pure fold over the workouts passed to one call; nothing is remembered
//! between calls.
//!
//! A workout is *eligible* when its activity kind is running (or walking,
//! when enabled), its start falls inside the inclusive window, and both its
//! duration and distance are strictly positive. Ineligible records are
//! dropped silently: they count as absent data, not as errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::performance_prediction::PerformancePredictor;
use crate::errors::AppError;
use crate::models::{PredictionWindow, ReferencePerformance, WorkoutRecord};

/// How the reference performance is ranked among eligible workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Workout whose Riegel extrapolation to the target is fastest, whatever its own distance
    #[default]
    FastestExtrapolated,
    /// Longest workout strictly shorter than the target (earlier releases)
    LongestBelowTarget,
}

impl SelectionPolicy {
    /// Configuration name of the policy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FastestExtrapolated => "fastest_extrapolated",
            Self::LongestBelowTarget => "longest_below_target",
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fastest_extrapolated" | "fastest" => Ok(Self::FastestExtrapolated),
            "longest_below_target" | "longest_below" | "closest" => Ok(Self::LongestBelowTarget),
            other => Err(AppError::invalid_input(format!(
                "Unknown selection policy: {other}"
            ))),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionCriteria {
    /// Target race distance in meters
    pub target_meters: f64,
    /// Inclusive window on workout start time
    pub window: PredictionWindow,
    /// Accept walking workouts as evidence
    pub include_walking: bool,
    /// Ranking policy
    pub policy: SelectionPolicy,
}

impl SelectionCriteria {
    /// Running-only criteria with the default policy
    #[must_use]
    pub fn new(target_meters: f64, window: PredictionWindow) -> Self {
        Self {
            target_meters,
            window,
            include_walking: false,
            policy: SelectionPolicy::default(),
        }
    }

    /// Toggle walking eligibility
    #[must_use]
    pub const fn with_walking(mut self, include_walking: bool) -> Self {
        self.include_walking = include_walking;
        self
    }

    /// Use a different ranking policy
    #[must_use]
    pub const fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Selected reference plus filtering diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionOutcome {
    /// The chosen reference, if any workout qualified
    pub reference: Option<ReferencePerformance>,
    /// Workouts passed in
    pub considered: usize,
    /// Workouts that passed every filter
    pub eligible: usize,
    /// Dropped for activity kind
    pub rejected_activity: usize,
    /// Dropped for starting outside the window
    pub rejected_window: usize,
    /// Dropped for zero, negative, or non-finite duration or distance
    pub rejected_measurements: usize,
}

/// Why a workout was not eligible
enum Rejection {
    Activity,
    Window,
    Measurements,
}

/// An eligible workout with its extrapolated time to the target
struct Candidate<'a> {
    workout: &'a WorkoutRecord,
    extrapolated_seconds: f64,
}

/// Reference performance selector
pub struct PerformanceSelector;

impl PerformanceSelector {
    /// Select the reference performance for `criteria`
    ///
    /// Returns `None` when no workout is eligible.
    #[must_use]
    pub fn select_reference(
        workouts: &[WorkoutRecord],
        criteria: &SelectionCriteria,
    ) -> Option<ReferencePerformance> {
        Self::select_with_outcome(workouts, criteria).reference
    }

    /// Select the reference performance and report how many workouts each filter dropped
    #[must_use]
    pub fn select_with_outcome(
        workouts: &[WorkoutRecord],
        criteria: &SelectionCriteria,
    ) -> SelectionOutcome {
        let mut outcome = SelectionOutcome {
            considered: workouts.len(),
            ..SelectionOutcome::default()
        };

        let mut eligible = Vec::with_capacity(workouts.len());
        for workout in workouts {
            match Self::check_eligibility(workout, criteria) {
                Ok(()) => eligible.push(workout),
                Err(Rejection::Activity) => outcome.rejected_activity += 1,
                Err(Rejection::Window) => outcome.rejected_window += 1,
                Err(Rejection::Measurements) => outcome.rejected_measurements += 1,
            }
        }
        outcome.eligible = eligible.len();

        let chosen = match criteria.policy {
            SelectionPolicy::FastestExtrapolated => {
                Self::fastest_extrapolated(&eligible, criteria.target_meters)
            }
            SelectionPolicy::LongestBelowTarget => {
                Self::longest_below_target(&eligible, criteria.target_meters)
            }
        };
        outcome.reference = chosen.map(ReferencePerformance::from);

        debug!(
            policy = %criteria.policy,
            target_meters = criteria.target_meters,
            considered = outcome.considered,
            eligible = outcome.eligible,
            rejected_activity = outcome.rejected_activity,
            rejected_window = outcome.rejected_window,
            rejected_measurements = outcome.rejected_measurements,
            reference = outcome
                .reference
                .as_ref()
                .map_or("none", |r| r.identifier.as_str()),
            "Reference performance selection finished"
        );

        outcome
    }

    /// Whether a single workout qualifies as evidence under `criteria`
    #[must_use]
    pub fn is_eligible(workout: &WorkoutRecord, criteria: &SelectionCriteria) -> bool {
        Self::check_eligibility(workout, criteria).is_ok()
    }

    fn check_eligibility(
        workout: &WorkoutRecord,
        criteria: &SelectionCriteria,
    ) -> Result<(), Rejection> {
        if !workout.activity_kind.is_eligible(criteria.include_walking) {
            return Err(Rejection::Activity);
        }
        if !criteria.window.contains(workout.start_date) {
            return Err(Rejection::Window);
        }
        if !workout.has_positive_measurements() {
            return Err(Rejection::Measurements);
        }
        Ok(())
    }

    /// Minimum extrapolated time wins; equal times go to the later start
    fn fastest_extrapolated<'a>(
        eligible: &[&'a WorkoutRecord],
        target_meters: f64,
    ) -> Option<&'a WorkoutRecord> {
        eligible
            .iter()
            .copied()
            .filter_map(|workout| {
                PerformancePredictor::predict_time_riegel(
                    workout.distance_meters,
                    workout.duration_seconds,
                    target_meters,
                )
                .ok()
                .map(|extrapolated_seconds| Candidate {
                    workout,
                    extrapolated_seconds,
                })
            })
            .min_by(|a, b| {
                a.extrapolated_seconds
                    .total_cmp(&b.extrapolated_seconds)
                    .then_with(|| later_first(a.workout.start_date, b.workout.start_date))
            })
            .map(|candidate| candidate.workout)
    }

    /// Largest distance strictly below the target wins; equal distances go to the later start
    fn longest_below_target<'a>(
        eligible: &[&'a WorkoutRecord],
        target_meters: f64,
    ) -> Option<&'a WorkoutRecord> {
        eligible
            .iter()
            .copied()
            .filter(|workout| workout.distance_meters < target_meters)
            .min_by(|a, b| {
                b.distance_meters
                    .total_cmp(&a.distance_meters)
                    .then_with(|| later_first(a.start_date, b.start_date))
            })
    }
}

/// Orders the later instant first
fn later_first(a: DateTime<Utc>, b: DateTime<Utc>) -> Ordering {
    b.cmp(&a)
}

/// Select a reference performance with the canonical running-only policy
///
/// Convenience over [`PerformanceSelector::select_reference`] taking the
/// window bounds directly.
#[must_use]
pub fn select_reference(
    workouts: &[WorkoutRecord],
    target_meters: f64,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Option<ReferencePerformance> {
    let criteria =
        SelectionCriteria::new(target_meters, PredictionWindow::new(window_start, window_end));
    PerformanceSelector::select_reference(workouts, &criteria)
}
