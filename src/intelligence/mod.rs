// ABOUTME: Intelligence module for reference selection and race time prediction
// ABOUTME: Re-exports the selector, the Riegel predictor, and the combined prediction engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Two stages run in sequence: the performance selector picks one reference
//! workout, and the performance predictor scales it to the target distance.
//! `race_predictor` ties them together.

/// Riegel race time prediction and pace derivation
pub mod performance_prediction;
/// Reference performance selection
pub mod performance_selector;
/// Combined prediction engine
pub mod race_predictor;

pub use performance_prediction::PerformancePredictor;
pub use performance_selector::{
    select_reference, PerformanceSelector, SelectionCriteria, SelectionOutcome, SelectionPolicy,
};
pub use race_predictor::{get_prediction, DistancePrediction, RacePredictor};
