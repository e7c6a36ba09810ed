// ABOUTME: Environment configuration for the race time predictor
// ABOUTME: Parses walking eligibility, selection policy, pace unit, and default window from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based predictor configuration

use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

use crate::constants::defaults::{DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use crate::intelligence::SelectionPolicy;
use crate::models::PaceUnit;

/// Predictor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Accept walking workouts as reference performances
    pub include_walking: bool,
    /// How the reference performance is ranked
    pub selection_policy: SelectionPolicy,
    /// Unit the required pace is reported in
    pub pace_unit: PaceUnit,
    /// Days of history used when the caller gives no window
    pub default_window_days: i64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            include_walking: false,
            selection_policy: SelectionPolicy::default(),
            pace_unit: PaceUnit::default(),
            default_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl PredictorConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults; set but malformed variables are errors.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable fails to parse or the
    /// resulting configuration is invalid
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let include_walking = match env_var(env_config::INCLUDE_WALKING) {
            Some(value) => parse_bool(env_config::INCLUDE_WALKING, &value)?,
            None => defaults.include_walking,
        };

        let selection_policy = match env_var(env_config::SELECTION_POLICY) {
            Some(value) => value
                .parse()
                .map_err(|e| config_error(env_config::SELECTION_POLICY, &e))?,
            None => defaults.selection_policy,
        };

        let pace_unit = match env_var(env_config::PACE_UNIT) {
            Some(value) => value
                .parse()
                .map_err(|e| config_error(env_config::PACE_UNIT, &e))?,
            None => defaults.pace_unit,
        };

        let default_window_days = match env_var(env_config::WINDOW_DAYS) {
            Some(value) => value.trim().parse::<i64>().map_err(|e| {
                AppError::config(format!("{}: {e}", env_config::WINDOW_DAYS))
            })?,
            None => defaults.default_window_days,
        };

        let config = Self {
            include_walking,
            selection_policy,
            pace_unit,
            default_window_days,
        };
        config.validate()?;

        info!(
            include_walking = config.include_walking,
            selection_policy = %config.selection_policy,
            pace_unit = ?config.pace_unit,
            default_window_days = config.default_window_days,
            "Predictor configuration loaded"
        );

        Ok(config)
    }

    /// Check invariants not expressible in the types
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the default window is not between one
    /// day and `MAX_WINDOW_DAYS`
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_WINDOW_DAYS).contains(&self.default_window_days) {
            return Err(AppError::config(format!(
                "{} must be between 1 and {MAX_WINDOW_DAYS}, got {}",
                env_config::WINDOW_DAYS,
                self.default_window_days
            )));
        }
        Ok(())
    }
}

/// Non-empty value of an environment variable
fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}

fn config_error(key: &str, source: &AppError) -> AppError {
    AppError::config(format!("{key}: {source}"))
}
