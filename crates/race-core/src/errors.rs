// ABOUTME: Unified error types for workout selection and race time prediction
// ABOUTME: Maps every failure to a stable error code so callers get an unambiguous signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! All core failures are returned as explicit `AppError` values. Nothing in
//! the prediction path falls back to a zero distance, a zero time, or `NaN`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used throughout the predictor
pub type AppResult<T> = Result<T, AppError>;

/// Standard error codes exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authorization (1000-1999)
    #[serde(rename = "ACCESS_DENIED")]
    AccessDenied = 1004,

    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "UNKNOWN_DISTANCE")]
    UnknownDistance = 3004,
    #[serde(rename = "INVALID_REFERENCE")]
    InvalidReference = 3005,

    // Data availability (4000-4999)
    #[serde(rename = "NO_ELIGIBLE_WORKOUTS")]
    NoEligibleWorkouts = 4004,

    // External collaborators (5000-5999)
    #[serde(rename = "DATA_SOURCE_ERROR")]
    DataSourceError = 5000,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Machine-readable name of the code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccessDenied => "ACCESS_DENIED",
            Self::InvalidInput => "INVALID_INPUT",
            Self::UnknownDistance => "UNKNOWN_DISTANCE",
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::NoEligibleWorkouts => "NO_ELIGIBLE_WORKOUTS",
            Self::DataSourceError => "DATA_SOURCE_ERROR",
            Self::ConfigInvalid => "CONFIG_INVALID",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the selector, the predictor, and their collaborators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// No workout survived activity, window, and positivity filtering
    #[error("No eligible workouts to predict a {target_meters} m race")]
    NoEligibleWorkouts {
        /// Target distance the prediction was requested for
        target_meters: f64,
    },

    /// A reference performance with non-positive distance or duration reached the predictor
    #[error(
        "Invalid reference performance: distance {distance_meters} m, duration {duration_seconds} s"
    )]
    InvalidReference {
        /// Distance of the rejected reference in meters
        distance_meters: f64,
        /// Duration of the rejected reference in seconds
        duration_seconds: f64,
    },

    /// Target distance is not one of the canonical race distances
    #[error("Unknown race distance: {name}")]
    UnknownDistance {
        /// The name or value that failed to resolve
        name: String,
    },

    /// Caller supplied malformed input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Environment configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// The workout data source refused access
    #[error("Access to workout data denied: {0}")]
    AccessDenied(String),

    /// The workout data source failed to deliver records
    #[error("Workout data source error: {0}")]
    DataSource(String),
}

impl AppError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an access denied error
    #[must_use]
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied(message.into())
    }

    /// Create a data source error
    #[must_use]
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource(message.into())
    }

    /// Create an unknown distance error
    #[must_use]
    pub fn unknown_distance(name: impl Into<String>) -> Self {
        Self::UnknownDistance { name: name.into() }
    }

    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NoEligibleWorkouts { .. } => ErrorCode::NoEligibleWorkouts,
            Self::InvalidReference { .. } => ErrorCode::InvalidReference,
            Self::UnknownDistance { .. } => ErrorCode::UnknownDistance,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::AccessDenied(_) => ErrorCode::AccessDenied,
            Self::DataSource(_) => ErrorCode::DataSourceError,
        }
    }

    /// True when the failure means "no data", as opposed to a denial or a bug
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoEligibleWorkouts { .. })
    }

    /// Serializable view of this error for machine-readable output
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Wire shape of an error for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable description
    pub message: String,
}
