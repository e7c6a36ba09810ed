// ABOUTME: Unit conversion constants for distance, time, and pace
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Miles per meter
pub const MILES_PER_METER: f64 = 0.000_621_371;

/// Kilometers per mile, used to turn a per-mile pace into a per-kilometer pace
pub const KM_PER_MILE: f64 = 1.609_34;

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;
