// ABOUTME: Reduces a workout history into frequency and energy statistics
// ABOUTME: WorkoutAggregator and WorkoutSummary (count and total calories burned)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use fitcoach_core::models::WorkoutRecord;
use serde::{Deserialize, Serialize};

/// Frequency and energy statistics over a set of workouts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Number of workouts
    pub count: u64,
    /// Sum of energy burned across workouts (kcal)
    pub total_calories_burned: f64,
}

/// Reduces workout records; order of records is irrelevant
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutAggregator;

impl WorkoutAggregator {
    /// Count the records and sum their energy burned
    ///
    /// An empty slice yields a zero count and a total of 0.0.
    #[must_use]
    pub fn summarize(records: &[WorkoutRecord]) -> WorkoutSummary {
        records
            .iter()
            .fold(WorkoutSummary::default(), |summary, record| WorkoutSummary {
                count: summary.count + 1,
                total_calories_burned: summary.total_calories_burned + record.calories_burned,
            })
    }
}
