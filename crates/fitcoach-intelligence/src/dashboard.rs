// ABOUTME: Daily dashboard statistics combining workout and nutrition aggregates
// ABOUTME: DashboardSummarizer and DailyTotals (consumed, burned, macros)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Daily dashboard totals
//!
//! Pure composition of the workout and nutrition aggregators. Callers pass records already
//! filtered to "today"; no date logic lives here.

use crate::nutrition_aggregator::{NutritionAggregator, NutritionTotals};
use crate::workout_aggregator::{WorkoutAggregator, WorkoutSummary};
use fitcoach_core::models::{MealRecord, WorkoutRecord};
use serde::{Deserialize, Serialize};

/// Statistics for one day; all zeros when nothing was logged
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Calories consumed from meals
    pub calories_consumed: f64,
    /// Calories burned in workouts
    pub calories_burned: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Number of workouts logged
    pub workout_count: u64,
}

impl DailyTotals {
    /// Calories consumed minus calories burned
    #[must_use]
    pub fn net_calories(&self) -> f64 {
        self.calories_consumed - self.calories_burned
    }
}

/// Builds the daily statistics view
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardSummarizer;

impl DashboardSummarizer {
    /// Aggregate today's workouts and meals
    #[must_use]
    pub fn summarize(
        todays_workouts: &[WorkoutRecord],
        todays_meals: &[MealRecord],
    ) -> DailyTotals {
        Self::from_parts(
            WorkoutAggregator::summarize(todays_workouts),
            NutritionAggregator::summarize_daily(todays_meals),
        )
    }

    /// Combine aggregates produced elsewhere, e.g. nutrition sums computed by the store
    #[must_use]
    pub const fn from_parts(workouts: WorkoutSummary, nutrition: NutritionTotals) -> DailyTotals {
        DailyTotals {
            calories_consumed: nutrition.calories,
            calories_burned: workouts.total_calories_burned,
            protein_g: nutrition.protein_g,
            carbs_g: nutrition.carbs_g,
            fat_g: nutrition.fat_g,
            workout_count: workouts.count,
        }
    }
}
