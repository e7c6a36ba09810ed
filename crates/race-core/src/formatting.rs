// ABOUTME: Display formatting for predicted race times and paces
// ABOUTME: Renders H:MM:SS or MM:SS clock times and M:SS paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Clock-style formatting shared by every caller that shows a prediction.

use crate::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Format a duration in seconds as `H:MM:SS` (one hour or more) or `MM:SS`
///
/// Fractional seconds are truncated, so 3599.9 s is still `59:59`. Negative
/// or non-finite input renders as `N/A`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "N/A".to_owned();
    }

    let whole = seconds.trunc();
    let hours = (whole / SECONDS_PER_HOUR).trunc();
    let minutes = ((whole - hours * SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).trunc();
    let secs = whole - hours * SECONDS_PER_HOUR - minutes * SECONDS_PER_MINUTE;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (hours, minutes, secs) = (hours as u64, minutes as u64, secs as u64);

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Format a pace in decimal minutes per unit as `M:SS`
///
/// Seconds are rounded half-up; a remainder that rounds to 60 carries into
/// the minutes.
#[must_use]
pub fn format_pace(minutes_per_unit: f64) -> String {
    if !minutes_per_unit.is_finite() || minutes_per_unit < 0.0 {
        return "N/A".to_owned();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut minutes = minutes_per_unit.trunc() as u64;
    let remainder = (minutes_per_unit - minutes_per_unit.trunc()) * SECONDS_PER_MINUTE;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut seconds = (remainder + 0.5).trunc() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }

    format!("{minutes}:{seconds:02}")
}
