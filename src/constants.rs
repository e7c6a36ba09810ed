// ABOUTME: Application constants re-exported from race-core
// ABOUTME: Riegel model constants, race distances, unit factors, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use race_core::constants::*;
