// ABOUTME: Activity kind tag attached to each workout record
// ABOUTME: Parses host-supplied activity tags and decides which kinds count as running evidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of activity a workout record describes
///
/// Hosts tag workouts with free-form strings; the common ones map to named
/// variants and everything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    /// Running, on road, track, trail, or treadmill
    Running,
    /// Walking
    Walking,
    /// Cycling
    Cycling,
    /// Swimming
    Swimming,
    /// Hiking
    Hiking,
    /// Any other activity tag
    Other(String),
}

impl ActivityKind {
    /// Parse a host activity tag, case-insensitively
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "running" | "run" | "trail_running" | "treadmill" | "virtual_run" => Self::Running,
            "walking" | "walk" => Self::Walking,
            "cycling" | "ride" | "bike" | "biking" => Self::Cycling,
            "swimming" | "swim" => Self::Swimming,
            "hiking" | "hike" => Self::Hiking,
            _ => Self::Other(tag.trim().to_owned()),
        }
    }

    /// Canonical tag for this kind
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Hiking => "hiking",
            Self::Other(tag) => tag,
        }
    }

    /// Whether a workout of this kind may serve as a reference performance
    #[must_use]
    pub const fn is_eligible(&self, include_walking: bool) -> bool {
        match self {
            Self::Running => true,
            Self::Walking => include_walking,
            _ => false,
        }
    }
}

impl From<String> for ActivityKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.as_tag().to_owned()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
