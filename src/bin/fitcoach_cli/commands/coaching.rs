// ABOUTME: Recommendation and dashboard commands for fitcoach-cli
// ABOUTME: Runs the coaching service and prints text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use anyhow::Result;
use chrono::NaiveDate;
use fitcoach::services::RecommendationOutcome;
use tracing::info;

use super::Session;
use crate::helpers::display::{
    display_bundle, display_dashboard, display_no_goal, print_json,
};

/// Print a recommendation for an explicit goal or the snapshot's first goal
pub async fn recommend(session: &Session, goal: Option<&str>, json: bool) -> Result<()> {
    if let Some(goal) = goal {
        info!(goal, "Recommending for explicit goal");
        let bundle = session
            .service
            .recommend_with_goal(session.user_id, Some(goal))
            .await?;
        if json {
            return print_json(&bundle);
        }
        display_bundle(goal, None, &bundle);
        return Ok(());
    }

    let outcome = session.service.recommend_for_user(session.user_id).await?;
    if json {
        return print_json(&outcome);
    }
    match outcome {
        RecommendationOutcome::NoGoalSet => display_no_goal(),
        RecommendationOutcome::Ready {
            goal_description,
            goal_remaining_percent,
            bundle,
        } => display_bundle(&goal_description, Some(goal_remaining_percent), &bundle),
    }
    Ok(())
}

/// Print the totals for one day
pub async fn dashboard(session: &Session, date: NaiveDate, json: bool) -> Result<()> {
    let dashboard = session
        .service
        .dashboard_for_user(session.user_id, date)
        .await?;
    if json {
        return print_json(&dashboard);
    }
    display_dashboard(&dashboard);
    Ok(())
}
