// ABOUTME: race-predictor CLI - predicts race finish times from a JSON workout export
// ABOUTME: Wires the JSON file source, environment configuration, and logging to the prediction engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Predict a half marathon from the last 90 days of runs
//! race-predictor predict --distance "Half Marathon" --workouts workouts.json
//!
//! # Explicit window, per-kilometer pace, JSON output
//! race-predictor predict -d 10K --workouts workouts.json \
//!     --start 2024-01-01 --end 2024-03-31 --unit km --json
//!
//! # All four distances, counting walks as evidence
//! race-predictor table --workouts workouts.json --include-walking
//! ```

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use race_time_predictor::config::PredictorConfig;
use race_time_predictor::constants::units::METERS_PER_KM;
use race_time_predictor::errors::{AppError, AppResult};
use race_time_predictor::formatting::format_time;
use race_time_predictor::intelligence::{DistancePrediction, RacePredictor};
use race_time_predictor::logging::LoggingConfig;
use race_time_predictor::models::{PredictionResult, PredictionWindow, RaceDistance};
use race_time_predictor::providers::JsonFileWorkoutSource;

#[derive(Parser)]
#[command(
    name = "race-predictor",
    about = "Race time predictor",
    long_about = "Predicts 5K, 10K, half marathon, and marathon finish times from historical running workouts using Riegel's formula."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Predict the finish time for one race distance
    Predict {
        /// Race distance: 5K, 10K, "Half Marathon", or Marathon
        #[arg(long, short = 'd')]
        distance: String,

        #[command(flatten)]
        history: HistoryArgs,
    },

    /// Predict all four race distances
    Table {
        #[command(flatten)]
        history: HistoryArgs,
    },
}

#[derive(Args)]
struct HistoryArgs {
    /// JSON file holding an array of workout records
    #[arg(long, short = 'w')]
    workouts: PathBuf,

    /// First day of the history window (YYYY-MM-DD, inclusive)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the history window (YYYY-MM-DD, inclusive)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Count walking workouts as evidence
    #[arg(long)]
    include_walking: bool,

    /// Selection policy: `fastest_extrapolated` or `longest_below_target`
    #[arg(long)]
    policy: Option<String>,

    /// Pace unit: mile or km
    #[arg(long)]
    unit: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl HistoryArgs {
    fn predictor_config(&self) -> AppResult<PredictorConfig> {
        let mut config = PredictorConfig::from_env()?;
        if self.include_walking {
            config.include_walking = true;
        }
        if let Some(policy) = &self.policy {
            config.selection_policy = policy.parse()?;
        }
        if let Some(unit) = &self.unit {
            config.pace_unit = unit.parse()?;
        }
        Ok(config)
    }

    fn window(&self, predictor: &RacePredictor, now: DateTime<Utc>) -> AppResult<PredictionWindow> {
        let end = match self.end {
            Some(date) => end_of_day(date)?,
            None => now,
        };
        match self.start {
            Some(date) => PredictionWindow::checked(start_of_day(date), end),
            None => PredictionWindow::trailing_days(predictor.config().default_window_days, end),
        }
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> AppResult<DateTime<Utc>> {
    date.and_hms_opt(23, 59, 59)
        .map(|moment| moment.and_utc())
        .ok_or_else(|| AppError::invalid_input(format!("Invalid end date {date}")))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let json = match &cli.command {
        Command::Predict { history, .. } | Command::Table { history } => history.json,
    };

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e, json),
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Predict { distance, history } => {
            let target: RaceDistance = distance.parse()?;
            let predictor = RacePredictor::new(history.predictor_config()?);
            let window = history.window(&predictor, Utc::now())?;
            let source = JsonFileWorkoutSource::new(&history.workouts);
            debug!(target = %target, path = %source.path().display(), "Running prediction");

            let result = predictor
                .predict_from_source(&source, target, window)
                .await?;
            if history.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_prediction(&result);
            }
        }
        Command::Table { history } => {
            let predictor = RacePredictor::new(history.predictor_config()?);
            let window = history.window(&predictor, Utc::now())?;
            let source = JsonFileWorkoutSource::new(&history.workouts);

            let predictions = predictor.predict_all_from_source(&source, window).await?;
            if history.json {
                let rows: Vec<_> = predictions
                    .iter()
                    .map(|(target, outcome)| match outcome {
                        Ok(result) => serde_json::json!({ "target": target, "prediction": result }),
                        Err(e) => serde_json::json!({ "target": target, "error": e.to_response() }),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_table(&predictions);
            }
        }
    }
    Ok(())
}

fn print_prediction(result: &PredictionResult) {
    println!(
        "You are predicted to run a {} in {}",
        result.target,
        result.formatted_time()
    );
    println!("Required pace: {}", result.formatted_pace());
    println!(
        "Based on: {} ({:.2} km in {}, {})",
        result.reference.identifier,
        result.reference.distance_meters / METERS_PER_KM,
        format_time(result.reference.duration_seconds),
        result.reference.start_date.format("%Y-%m-%d")
    );
    if result.approximate {
        println!("Note: outside the 3.5 minute to 4 hour range where Riegel's formula is accurate");
    }
}

fn print_table(predictions: &[DistancePrediction]) {
    println!("{:<14} {:>9} {:>12}  reference", "distance", "time", "pace");
    for (target, outcome) in predictions {
        match outcome {
            Ok(result) => println!(
                "{:<14} {:>9} {:>12}  {}{}",
                target.name(),
                result.formatted_time(),
                result.formatted_pace(),
                result.reference.identifier,
                if result.approximate { " (approx.)" } else { "" }
            ),
            Err(e) => println!("{:<14} {e}", target.name()),
        }
    }
}

fn report_failure(error: &anyhow::Error, json: bool) -> ExitCode {
    let app_error = error.downcast_ref::<AppError>();

    if json {
        let response = app_error.map_or_else(
            || AppError::invalid_input(error.to_string()).to_response(),
            AppError::to_response,
        );
        match serde_json::to_string_pretty(&response) {
            Ok(body) => println!("{body}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    } else {
        eprintln!("Error: {error}");
    }

    match app_error {
        Some(e) if e.is_no_data() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
