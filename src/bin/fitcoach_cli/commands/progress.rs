// ABOUTME: Weigh-in and BMI commands for fitcoach-cli
// ABOUTME: Records progress entries, saves them back to the snapshot, and prints history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use anyhow::Result;
use chrono::NaiveDate;
use fitcoach::intelligence::body_metrics;
use fitcoach::storage::Snapshot;
use serde_json::json;
use tracing::info;

use super::Session;
use crate::helpers::display::{display_bmi, display_progress_history, print_json};

/// Optionally record a weigh-in, then print the weigh-in history
///
/// A recorded weigh-in is written back to the snapshot file the session was loaded from.
pub async fn run(
    session: &Session,
    weight: Option<f64>,
    date: NaiveDate,
    json: bool,
) -> Result<()> {
    let recorded = match weight {
        Some(weight_kg) => Some(
            session
                .service
                .record_progress(session.user_id, date, weight_kg)
                .await?,
        ),
        None => None,
    };

    let history = session.service.progress_history(session.user_id).await?;

    if let Some(entry) = recorded {
        let updated = Snapshot {
            progress: history.clone(),
            ..session.snapshot.clone()
        };
        updated.write_to_path(&session.source)?;
        info!(
            path = %session.source.display(),
            date = %entry.date,
            "Weigh-in saved to snapshot"
        );
    }

    if json {
        return print_json(&history);
    }
    display_progress_history(&history);
    Ok(())
}

/// Print the BMI for a weight and height
pub fn bmi(weight_kg: f64, height_cm: f64, json: bool) -> Result<()> {
    let bmi = body_metrics::calculate_bmi(weight_kg, height_cm)?;
    if json {
        return print_json(&json!({
            "weight_kg": weight_kg,
            "height_cm": height_cm,
            "bmi": bmi,
        }));
    }
    display_bmi(weight_kg, height_cm, bmi);
    Ok(())
}
