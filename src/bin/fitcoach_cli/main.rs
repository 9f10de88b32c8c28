// ABOUTME: FitCoach CLI - runs the recommendation engine over a JSON snapshot of logged facts
// ABOUTME: Prints recommendations, daily dashboards, BMI, and weigh-in history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors
//!
//! Usage:
//! ```bash
//! # Recommendation for the snapshot's first goal
//! fitcoach-cli --input snapshot.json recommend
//!
//! # Recommendation for an explicit goal, as JSON
//! fitcoach-cli --input snapshot.json --json recommend --goal "build muscle"
//!
//! # Totals for a given day
//! fitcoach-cli --input snapshot.json dashboard --date 2025-06-01
//!
//! # Record a weigh-in (saved back to the snapshot) and show the history
//! fitcoach-cli --input snapshot.json progress --weight 79.5
//!
//! # Standalone BMI
//! fitcoach-cli bmi --weight 80 --height 180
//! ```

mod commands;
mod helpers;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use fitcoach::logging::LoggingConfig;
use fitcoach::storage::Snapshot;
use std::path::{Path, PathBuf};
use tracing::debug;

use commands::Session;

#[derive(Parser)]
#[command(
    name = "fitcoach-cli",
    about = "FitCoach recommendation and dashboard CLI",
    long_about = "Runs the FitCoach recommendation engine over a JSON snapshot of a user's profile, goals, workouts, meals, and weigh-ins."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot file with the user's logged facts
    #[arg(long, short = 'i', global = true)]
    input: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Workout plan, diet plan, and progress narrative
    Recommend {
        /// Goal description; defaults to the snapshot's first goal
        #[arg(long)]
        goal: Option<String>,
    },

    /// Calories consumed and burned plus macros for one day
    Dashboard {
        /// Day to summarize (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Record a weigh-in (optional) and list weigh-in history
    Progress {
        /// Weight in kilograms to record
        #[arg(long)]
        weight: Option<f64>,

        /// Day of the weigh-in (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Body mass index from weight and height
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,
    },
}

fn load_session(input: Option<&Path>) -> Result<Session> {
    let Some(path) = input else {
        bail!("--input <SNAPSHOT> is required for this command");
    };
    let snapshot = Snapshot::from_path(path)?;
    debug!(path = %path.display(), user_id = %snapshot.user_id, "Snapshot loaded");
    Ok(Session::new(snapshot, path.to_path_buf()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let today = Local::now().date_naive();

    match cli.command {
        Command::Recommend { goal } => {
            let session = load_session(cli.input.as_deref())?;
            commands::coaching::recommend(&session, goal.as_deref(), cli.json).await?;
        }
        Command::Dashboard { date } => {
            let session = load_session(cli.input.as_deref())?;
            commands::coaching::dashboard(&session, date.unwrap_or(today), cli.json).await?;
        }
        Command::Progress { weight, date } => {
            let session = load_session(cli.input.as_deref())?;
            commands::progress::run(&session, weight, date.unwrap_or(today), cli.json).await?;
        }
        Command::Bmi { weight, height } => {
            commands::progress::bmi(weight, height, cli.json)?;
        }
    }

    Ok(())
}
