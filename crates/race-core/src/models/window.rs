// ABOUTME: Inclusive date window bounding which workouts count as evidence
// ABOUTME: Built from explicit bounds or as a trailing number of days ending at a given instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Inclusive `[start, end]` window over workout start timestamps
///
/// An inverted window (start after end) is representable; it simply
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionWindow {
    /// First instant included
    pub start: DateTime<Utc>,
    /// Last instant included
    pub end: DateTime<Utc>,
}

impl PredictionWindow {
    /// Window with explicit bounds
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window with explicit bounds, rejecting `start > end`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `start` is after `end`.
    pub fn checked(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if start > end {
            return Err(AppError::invalid_input(format!(
                "Window start {start} is after window end {end}"
            )));
        }
        Ok(Self::new(start, end))
    }

    /// The `days` days ending at `end`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `days` is negative or the start
    /// falls outside the representable date range.
    pub fn trailing_days(days: i64, end: DateTime<Utc>) -> AppResult<Self> {
        let start = Duration::try_days(days)
            .and_then(|span| end.checked_sub_signed(span))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Window of {days} days ending at {end} is out of range"
                ))
            })?;
        Self::checked(start, end)
    }

    /// Whether `instant` falls inside the window, bounds included
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
