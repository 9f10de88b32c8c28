// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors
// ABOUTME: Integration tests for the fitcoach-cli binary
// ABOUTME: Runs recommend, dashboard, progress, and bmi against a snapshot file

//! Integration tests for the fitcoach-cli binary.
//!
//! These tests verify command structure, JSON output, and error handling.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcoach::storage::Snapshot;
use serde_json::Value;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"{
    "profile": { "age": 30, "sex": "male", "height_cm": 180.0, "weight_kg": 80.0 },
    "goals": [{ "description": "build muscle", "target_value": 85.0, "current_value": 80.0 }],
    "workouts": [
        { "date": "2025-06-01", "workout_type": "Bench Press", "sets": 4, "reps": 8, "weight_kg": 70.0, "calories_burned": 120.0 },
        { "date": "2025-06-01", "workout_type": "Running", "duration_minutes": 25, "calories_burned": 280.0 }
    ],
    "meals": [
        { "date": "2025-06-01", "food_item": "Chicken and rice", "calories": 650.0, "protein_g": 45.0, "carbs_g": 70.0, "fat_g": 12.0 }
    ]
}"#;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fitcoach-cli"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn snapshot_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();
    file
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["recommend", "dashboard", "progress", "bmi"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_recommend_json_uses_first_goal() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap();
    let (exit_code, stdout, stderr) = run_cli(&["--input", path, "--json", "recommend"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let outcome: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(outcome["status"], "ready");
    assert_eq!(outcome["goal_description"], "build muscle");
    assert_eq!(outcome["bundle"]["goal"], "muscle_gain");
    assert_eq!(outcome["bundle"]["energy"]["target_kcal"], 2080);
    let remaining = outcome["goal_remaining_percent"].as_f64().unwrap();
    assert!((remaining - 500.0 / 85.0).abs() < 1e-9);
}

#[test]
fn test_recommend_text_shows_remaining_percent() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap();
    let (exit_code, stdout, stderr) = run_cli(&["--input", path, "recommend"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Recommendation for goal: build muscle"));
    assert!(stdout.contains("Remaining to target: 5.9%"));
}

#[test]
fn test_recommend_text_with_explicit_goal() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap();
    let (exit_code, stdout, _stderr) =
        run_cli(&["--input", path, "recommend", "--goal", "lose weight"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("around 1380 kcal per day"));
    assert!(stdout.contains("You've logged 2 workout(s), burning a total of 400 calories."));
}

#[test]
fn test_dashboard_for_date() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap();
    let (exit_code, stdout, _stderr) = run_cli(&[
        "--input",
        path,
        "--json",
        "dashboard",
        "--date",
        "2025-06-01",
    ]);

    assert_eq!(exit_code, 0);
    let dashboard: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(dashboard["date"], "2025-06-01");
    assert_eq!(dashboard["totals"]["workout_count"], 2);
    assert_eq!(dashboard["totals"]["calories_consumed"], 650.0);
    assert_eq!(dashboard["totals"]["calories_burned"], 400.0);
}

#[test]
fn test_progress_records_weigh_in() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap();
    let (exit_code, stdout, _stderr) = run_cli(&[
        "--input",
        path,
        "--json",
        "progress",
        "--weight",
        "81",
        "--date",
        "2025-06-03",
    ]);

    assert_eq!(exit_code, 0);
    let history: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["date"], "2025-06-03");

    let saved = Snapshot::from_path(file.path()).unwrap();
    assert_eq!(saved.progress.len(), 1);
    assert_eq!(saved.progress[0].date.to_string(), "2025-06-03");
    assert!((saved.progress[0].weight_kg - 81.0).abs() < f64::EPSILON);
    assert_eq!(saved.goals[0].description, "build muscle");
    assert_eq!(saved.workouts.len(), 2);
}

#[test]
fn test_progress_weigh_ins_accumulate_across_runs() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap();
    for (weight, day) in [("81", "2025-06-03"), ("80.5", "2025-06-10")] {
        let (exit_code, _stdout, stderr) =
            run_cli(&["--input", path, "progress", "--weight", weight, "--date", day]);
        assert_eq!(exit_code, 0, "stderr: {stderr}");
    }

    let (exit_code, stdout, _stderr) = run_cli(&["--input", path, "--json", "progress"]);
    assert_eq!(exit_code, 0);
    let history: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 2);
    assert_eq!(history[0]["date"], "2025-06-10");
    assert_eq!(history[1]["date"], "2025-06-03");
}

#[test]
fn test_progress_without_weight_leaves_snapshot_untouched() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap();
    let (exit_code, _stdout, _stderr) = run_cli(&["--input", path, "progress"]);

    assert_eq!(exit_code, 0);
    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), SNAPSHOT);
}

#[test]
fn test_bmi_does_not_need_snapshot() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["--json", "bmi", "--weight", "80", "--height", "200"]);

    assert_eq!(exit_code, 0);
    let result: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["bmi"], 20.0);
}

#[test]
fn test_bmi_zero_height_fails() {
    let (exit_code, _stdout, stderr) = run_cli(&["bmi", "--weight", "80", "--height", "0"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("BMI is undefined"));
}

#[test]
fn test_store_command_without_input_fails() {
    let (exit_code, _stdout, stderr) = run_cli(&["recommend"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("--input"));
}
