// ABOUTME: Canonical race distances a prediction can target
// ABOUTME: Resolves race names and meter values, rejecting anything outside the canonical set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::race_distances::{
    DISTANCE_10K, DISTANCE_5K, DISTANCE_HALF_MARATHON, DISTANCE_MARATHON,
    DISTANCE_MATCH_TOLERANCE_METERS,
};
use crate::errors::{AppError, AppResult};

/// A target race distance, always expressed in meters internally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceDistance {
    /// 5000 m
    FiveK,
    /// 10000 m
    TenK,
    /// 21097.5 m
    HalfMarathon,
    /// 42195 m
    Marathon,
}

impl RaceDistance {
    /// Every canonical distance, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Distance in meters
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::FiveK => DISTANCE_5K,
            Self::TenK => DISTANCE_10K,
            Self::HalfMarathon => DISTANCE_HALF_MARATHON,
            Self::Marathon => DISTANCE_MARATHON,
        }
    }

    /// Display name ("5K", "10K", "Half Marathon", "Marathon")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }

    /// Resolve a meter value to a canonical distance
    ///
    /// # Errors
    ///
    /// Returns `AppError::UnknownDistance` unless `meters` is within half a
    /// meter of one of the four canonical distances.
    pub fn from_meters(meters: f64) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|distance| (distance.meters() - meters).abs() <= DISTANCE_MATCH_TOLERANCE_METERS)
            .ok_or_else(|| AppError::unknown_distance(format!("{meters} m")))
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        match normalized.as_str() {
            "5k" | "fivek" => Ok(Self::FiveK),
            "10k" | "tenk" => Ok(Self::TenK),
            "halfmarathon" | "half" | "21k" => Ok(Self::HalfMarathon),
            "marathon" | "full" | "42k" => Ok(Self::Marathon),
            _ => Err(AppError::unknown_distance(s.trim())),
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
