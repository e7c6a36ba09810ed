// ABOUTME: Integration tests for the race prediction engine
// ABOUTME: Covers end-to-end predictions, error outcomes, and async workout sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;

use chrono::{DateTime, Duration, TimeZone, Utc};
use race_time_predictor::config::PredictorConfig;
use race_time_predictor::errors::{AppError, ErrorCode};
use race_time_predictor::intelligence::{get_prediction, RacePredictor, SelectionPolicy};
use race_time_predictor::models::{
    ActivityKind, PaceUnit, PredictionWindow, RaceDistance, ReferencePerformance, WorkoutRecord,
};
use race_time_predictor::providers::{JsonFileWorkoutSource, SyntheticWorkoutSource, WorkoutSource};
use tempfile::{tempdir, NamedTempFile};

fn window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn window_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap()
}

fn window() -> PredictionWindow {
    PredictionWindow::new(window_start(), window_end())
}

fn run(id: &str, days_in: i64, duration: f64, distance: f64) -> WorkoutRecord {
    WorkoutRecord::new(
        id,
        ActivityKind::Running,
        window_start() + Duration::days(days_in),
        duration,
        distance,
    )
}

#[test]
fn test_prediction_from_single_10k() {
    let workouts = vec![run("tempo", 10, 3600.0, 10_000.0)];

    let result = get_prediction(21_097.5, window_start(), window_end(), &workouts).unwrap();
    assert_eq!(result.target, RaceDistance::HalfMarathon);
    assert!((result.predicted_seconds - 7943.05).abs() < 0.01);
    assert_eq!(result.formatted_time(), "2:12:23");
    assert_eq!(result.reference.identifier, "tempo");
    assert!(!result.approximate);
}

#[test]
fn test_prediction_picks_fastest_extrapolation() {
    let workouts = vec![
        run("A", 10, 1800.0, 5000.0),
        run("B", 20, 3000.0, 8000.0),
    ];

    let result = get_prediction(10_000.0, window_start(), window_end(), &workouts).unwrap();
    assert_eq!(result.reference.identifier, "A");
    assert!((result.predicted_seconds - 3752.88).abs() < 0.01);
    assert_eq!(result.formatted_time(), "1:02:32");
}

#[test]
fn test_marathon_by_name_with_pace() {
    let workouts = vec![run("fast_10k", 5, 2400.0, 10_000.0)];

    let result = RacePredictor::default()
        .get_prediction_for_name("marathon", &window(), &workouts)
        .unwrap();
    assert_eq!(result.formatted_time(), "3:04:00");
    assert_eq!(result.required_pace.unit, PaceUnit::Mile);
    assert!(result.formatted_pace().ends_with(" /mi"));
}

#[test]
fn test_unknown_distance_is_rejected() {
    let workouts = vec![run("tempo", 10, 3600.0, 10_000.0)];

    let by_meters = get_prediction(50_000.0, window_start(), window_end(), &workouts);
    assert!(matches!(by_meters, Err(AppError::UnknownDistance { .. })));

    let by_name = RacePredictor::default().get_prediction_for_name("50K", &window(), &workouts);
    let error = by_name.unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnknownDistance);
}

#[test]
fn test_no_eligible_workouts() {
    let workouts = vec![WorkoutRecord::new(
        "ride",
        ActivityKind::Cycling,
        window_start() + Duration::days(1),
        3600.0,
        30_000.0,
    )];

    let result = get_prediction(5000.0, window_start(), window_end(), &workouts);
    let error = result.unwrap_err();
    assert!(error.is_no_data());
    assert_eq!(error.code(), ErrorCode::NoEligibleWorkouts);

    let empty = get_prediction(5000.0, window_start(), window_end(), &[]);
    assert!(matches!(empty, Err(AppError::NoEligibleWorkouts { .. })));
}

#[test]
fn test_kilometer_pace_config() {
    let config = PredictorConfig {
        pace_unit: PaceUnit::Kilometer,
        ..PredictorConfig::default()
    };
    let workouts = vec![run("5k", 3, 1800.0, 5000.0)];

    let result = RacePredictor::new(config)
        .get_prediction(RaceDistance::FiveK, &window(), &workouts)
        .unwrap();
    assert_eq!(result.formatted_pace(), "6:00 /km");
}

#[test]
fn test_walking_config_allows_walks() {
    let workouts = vec![WorkoutRecord::new(
        "walk",
        ActivityKind::Walking,
        window_start() + Duration::days(1),
        3000.0,
        5000.0,
    )];

    let default_result =
        RacePredictor::default().get_prediction(RaceDistance::FiveK, &window(), &workouts);
    assert!(matches!(default_result, Err(AppError::NoEligibleWorkouts { .. })));

    let config = PredictorConfig {
        include_walking: true,
        ..PredictorConfig::default()
    };
    let result = RacePredictor::new(config)
        .get_prediction(RaceDistance::FiveK, &window(), &workouts)
        .unwrap();
    assert_eq!(result.reference.identifier, "walk");
}

#[test]
fn test_long_predictions_are_flagged_approximate() {
    // Slow 5K scaled to a marathon lands well past four hours
    let workouts = vec![run("easy", 2, 3000.0, 5000.0)];

    let result = RacePredictor::default()
        .get_prediction(RaceDistance::Marathon, &window(), &workouts)
        .unwrap();
    assert!(result.predicted_seconds > 14_400.0);
    assert!(result.approximate);
}

#[test]
fn test_predict_from_invalid_reference() {
    let reference = ReferencePerformance::new("broken", 0.0, 5000.0, window_start());
    let result = RacePredictor::default().predict_from_reference(RaceDistance::TenK, reference);
    assert!(matches!(result, Err(AppError::InvalidReference { .. })));
}

#[test]
fn test_degenerate_reference_distance_never_yields_infinite_time() {
    let workouts = vec![run("glitch", 3, 1.0, 1e-300)];

    // Fastest-extrapolated ranking drops the record as unusable evidence
    let result =
        RacePredictor::default().get_prediction(RaceDistance::Marathon, &window(), &workouts);
    assert!(
        matches!(result, Err(AppError::NoEligibleWorkouts { .. })),
        "got {result:?}"
    );

    // Longest-below-target picks it and the predictor rejects it
    let config = PredictorConfig {
        selection_policy: SelectionPolicy::LongestBelowTarget,
        ..PredictorConfig::default()
    };
    let result =
        RacePredictor::new(config).get_prediction(RaceDistance::Marathon, &window(), &workouts);
    assert!(
        matches!(result, Err(AppError::InvalidReference { .. })),
        "got {result:?}"
    );
}

#[test]
fn test_predict_all_distances() {
    let workouts = vec![run("tempo", 10, 3600.0, 10_000.0)];

    let predictions = RacePredictor::default().predict_all_distances(&window(), &workouts);
    assert_eq!(predictions.len(), 4);

    let targets: Vec<_> = predictions.iter().map(|(target, _)| *target).collect();
    assert_eq!(targets, RaceDistance::ALL.to_vec());

    let times: Vec<f64> = predictions
        .iter()
        .map(|(_, result)| result.as_ref().unwrap().predicted_seconds)
        .collect();
    assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_predict_from_synthetic_source() {
    let source = SyntheticWorkoutSource::with_workouts(vec![
        run("A", 10, 1800.0, 5000.0),
        run("B", 20, 3000.0, 8000.0),
    ]);

    let result = RacePredictor::default()
        .predict_from_source(&source, RaceDistance::TenK, window())
        .await
        .unwrap();
    assert_eq!(result.reference.identifier, "A");
}

#[tokio::test]
async fn test_denied_source_access() {
    let source = SyntheticWorkoutSource::denied();
    source.add_workout(run("A", 10, 1800.0, 5000.0)).unwrap();

    let result = RacePredictor::default()
        .predict_from_source(&source, RaceDistance::TenK, window())
        .await;
    assert!(matches!(result, Err(AppError::AccessDenied(_))));

    source.set_access_granted(true);
    let result = RacePredictor::default()
        .predict_from_source(&source, RaceDistance::TenK, window())
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_generated_history_yields_all_predictions() {
    let workouts = SyntheticWorkoutSource::generate_workouts(40, window_end());
    let source = SyntheticWorkoutSource::with_workouts(workouts);
    assert_eq!(source.workout_count().unwrap(), 40);

    let predictions = RacePredictor::default()
        .predict_all_from_source(&source, window())
        .await
        .unwrap();
    assert_eq!(predictions.len(), 4);
    assert!(predictions.iter().all(|(_, result)| result.is_ok()));
}

#[tokio::test]
async fn test_json_file_source() {
    let workouts = vec![
        run("A", 10, 1800.0, 5000.0),
        WorkoutRecord::new(
            "ride",
            ActivityKind::Cycling,
            window_start() + Duration::days(2),
            1200.0,
            20_000.0,
        ),
    ];
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&workouts).unwrap().as_bytes())
        .unwrap();

    let source = JsonFileWorkoutSource::new(file.path());
    let result = RacePredictor::default()
        .predict_from_source(&source, RaceDistance::TenK, window())
        .await
        .unwrap();
    assert_eq!(result.reference.identifier, "A");
}

#[tokio::test]
async fn test_json_file_source_accepts_host_tags() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"identifier":"hk-1","duration_seconds":1500.0,"distance_meters":5000.0,"start_date":"2024-02-01T07:30:00Z","activity_kind":"Run"}}]"#
    )
    .unwrap();

    let source = JsonFileWorkoutSource::new(file.path());
    let result = RacePredictor::default()
        .predict_from_source(&source, RaceDistance::FiveK, window())
        .await
        .unwrap();
    assert_eq!(result.reference.identifier, "hk-1");
    assert_eq!(result.formatted_time(), "25:00");
}

#[tokio::test]
async fn test_json_file_source_errors() {
    let missing = JsonFileWorkoutSource::new("/nonexistent/race-predictor/workouts.json");
    let result = RacePredictor::default()
        .predict_from_source(&missing, RaceDistance::FiveK, window())
        .await;
    assert!(matches!(result, Err(AppError::DataSource(_))), "got {result:?}");

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();
    let malformed = JsonFileWorkoutSource::new(file.path());
    let result = RacePredictor::default()
        .predict_from_source(&malformed, RaceDistance::FiveK, window())
        .await;
    assert!(matches!(result, Err(AppError::DataSource(_))));
}

#[tokio::test]
async fn test_json_file_source_rejects_directory() {
    let dir = tempdir().unwrap();
    let source = JsonFileWorkoutSource::new(dir.path());

    match source.request_data_access().await {
        Err(AppError::DataSource(message)) => assert!(message.contains("is not a file")),
        other => panic!("expected DataSource error, got {other:?}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_json_file_source_unreadable_file_is_access_denied() {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let file = NamedTempFile::new().unwrap();
    fs::set_permissions(file.path(), Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through mode bits
    if fs::read(file.path()).is_ok() {
        return;
    }

    let source = JsonFileWorkoutSource::new(file.path());
    let result = RacePredictor::default()
        .predict_from_source(&source, RaceDistance::FiveK, window())
        .await;
    assert!(matches!(result, Err(AppError::AccessDenied(_))), "got {result:?}");

    fs::set_permissions(file.path(), Permissions::from_mode(0o600)).unwrap();
}
