// ABOUTME: Configuration management module for predictor settings
// ABOUTME: Environment-only configuration of eligibility, selection policy, pace unit, and window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration comes from environment variables only; there is no config
//! file. See [`environment::PredictorConfig::from_env`].

/// Predictor configuration loaded from environment variables
pub mod environment;

pub use environment::PredictorConfig;
