// ABOUTME: Tests for workout and nutrition aggregation and daily dashboard totals
// ABOUTME: Covers empty inputs, additive sums, and net calorie derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcoach::intelligence::{
    DailyTotals, DashboardSummarizer, NutritionAggregator, NutritionTotals, WorkoutAggregator,
    WorkoutSummary,
};
use fitcoach::models::WorkoutRecord;

mod common;

use common::{meal, workouts_burning};

// ============================================================================
// WORKOUTS
// ============================================================================

#[test]
fn test_empty_workout_history() {
    assert_eq!(WorkoutAggregator::summarize(&[]), WorkoutSummary::default());
    let summary = WorkoutAggregator::summarize(&[]);
    assert_eq!(summary.count, 0);
    assert!(summary.total_calories_burned.abs() < f64::EPSILON);
}

#[test]
fn test_workout_sum_and_count() {
    let summary = WorkoutAggregator::summarize(&workouts_burning(&[100.0, 150.0, 250.0]));
    assert_eq!(summary.count, 3);
    assert!((summary.total_calories_burned - 500.0).abs() < f64::EPSILON);
}

#[test]
fn test_strength_and_cardio_both_count() {
    let history = vec![
        WorkoutRecord::strength("Bench Press", 4, 8, 60.0, 120.0),
        WorkoutRecord::cardio("Rowing", 20, 180.0),
    ];
    let summary = WorkoutAggregator::summarize(&history);
    assert_eq!(summary.count, 2);
    assert!((summary.total_calories_burned - 300.0).abs() < f64::EPSILON);
    assert!(history[0].is_strength());
    assert!(!history[1].is_strength());
}

// ============================================================================
// NUTRITION
// ============================================================================

#[test]
fn test_empty_meals_are_zero() {
    assert_eq!(
        NutritionAggregator::summarize_daily(&[]),
        NutritionTotals::default()
    );
}

#[test]
fn test_meal_fields_sum_independently() {
    let meals = vec![
        meal("Oatmeal", 350.0, 12.0, 60.0, 6.0),
        meal("Chicken salad", 450.0, 40.0, 15.0, 22.0),
        meal("Apple", 95.0, 0.5, 25.0, 0.3),
    ];
    let totals = NutritionAggregator::summarize_daily(&meals);
    assert!((totals.calories - 895.0).abs() < 1e-9);
    assert!((totals.protein_g - 52.5).abs() < 1e-9);
    assert!((totals.carbs_g - 100.0).abs() < 1e-9);
    assert!((totals.fat_g - 28.3).abs() < 1e-9);
}

#[test]
fn test_empty_plus_single_meal_is_that_meal() {
    let record = meal("Greek yogurt", 150.0, 15.0, 8.0, 4.0);
    let totals = NutritionAggregator::summarize_daily(&[])
        + NutritionAggregator::summarize_daily(std::slice::from_ref(&record));
    assert_eq!(totals, NutritionTotals::from(&record));
    assert!((totals.protein_g - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_nutrition_totals_are_additive() {
    let first = vec![meal("Eggs", 200.0, 14.0, 2.0, 15.0)];
    let second = vec![meal("Toast", 150.0, 5.0, 28.0, 2.0)];
    let both: Vec<_> = first.iter().chain(second.iter()).cloned().collect();

    let combined = NutritionAggregator::summarize_daily(&first)
        + NutritionAggregator::summarize_daily(&second);
    assert_eq!(combined, NutritionAggregator::summarize_daily(&both));
}

// ============================================================================
// DASHBOARD
// ============================================================================

#[test]
fn test_dashboard_with_nothing_logged_is_all_zero() {
    assert_eq!(DashboardSummarizer::summarize(&[], &[]), DailyTotals::default());
}

#[test]
fn test_dashboard_combines_both_aggregates() {
    let workouts = workouts_burning(&[300.0, 200.0]);
    let meals = vec![
        meal("Oatmeal", 350.0, 12.0, 60.0, 6.0),
        meal("Pasta", 700.0, 25.0, 110.0, 15.0),
    ];

    let totals = DashboardSummarizer::summarize(&workouts, &meals);
    assert_eq!(totals.workout_count, 2);
    assert!((totals.calories_burned - 500.0).abs() < 1e-9);
    assert!((totals.calories_consumed - 1050.0).abs() < 1e-9);
    assert!((totals.protein_g - 37.0).abs() < 1e-9);
    assert!((totals.carbs_g - 170.0).abs() < 1e-9);
    assert!((totals.fat_g - 21.0).abs() < 1e-9);
    assert!((totals.net_calories() - 550.0).abs() < 1e-9);
}
