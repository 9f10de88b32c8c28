// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors
// ABOUTME: Output formatting helpers for fitcoach-cli
// ABOUTME: Provides consistent display functions for recommendations, dashboards, and progress

use anyhow::Result;
use fitcoach::intelligence::RecommendationBundle;
use fitcoach::models::ProgressEntry;
use fitcoach::services::DailyDashboard;
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a recommendation bundle under its goal description
pub fn display_bundle(
    goal_description: &str,
    remaining_percent: Option<f64>,
    bundle: &RecommendationBundle,
) {
    println!("\nRecommendation for goal: {goal_description}");
    println!("{}", "=".repeat(80));
    println!("Goal category: {}", bundle.goal);
    if let Some(remaining) = remaining_percent {
        println!("Remaining to target: {remaining:.1}%");
    }
    println!(
        "Targets: {} kcal/day (maintenance {} kcal), {} g protein",
        bundle.energy.target_kcal, bundle.energy.maintenance_kcal, bundle.energy.protein_g
    );

    println!("\nWORKOUT PLAN:");
    println!("{}", bundle.workout_plan);

    println!("\nDIET PLAN:");
    println!("{}", bundle.diet_plan);

    println!("\nPROGRESS:");
    println!("{}", bundle.progress_narrative);
}

/// Prompt shown when the user has no goals
pub fn display_no_goal() {
    println!("No goal set yet. Add a goal to get personalized workout and diet recommendations.");
}

/// Display one day's totals
pub fn display_dashboard(dashboard: &DailyDashboard) {
    let totals = &dashboard.totals;
    println!("\nDashboard for {}", dashboard.date);
    println!("{}", "=".repeat(80));
    println!("   Calories consumed: {:.0} kcal", totals.calories_consumed);
    println!(
        "   Calories burned:   {:.0} kcal ({} workout(s))",
        totals.calories_burned, totals.workout_count
    );
    println!("   Net calories:      {:.0} kcal", totals.net_calories());
    println!(
        "   Macros:            {:.1} g protein, {:.1} g carbs, {:.1} g fat",
        totals.protein_g, totals.carbs_g, totals.fat_g
    );
}

/// Display weigh-in history, newest first
pub fn display_progress_history(history: &[ProgressEntry]) {
    if history.is_empty() {
        println!("No weigh-ins recorded yet.");
        return;
    }
    println!("\nWeigh-in history");
    println!("{}", "=".repeat(80));
    for entry in history {
        println!(
            "   {}  {:>6.1} kg  BMI {:.1}",
            entry.date, entry.weight_kg, entry.bmi
        );
    }
}

/// Display a standalone BMI calculation
pub fn display_bmi(weight_kg: f64, height_cm: f64, bmi: f64) {
    println!("BMI for {weight_kg} kg at {height_cm} cm: {bmi:.1}");
}
