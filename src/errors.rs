// ABOUTME: Error types for race time prediction re-exported from race-core
// ABOUTME: Keeps `crate::errors` import paths stable for the engine, providers, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use race_core::errors::*;
