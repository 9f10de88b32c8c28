// ABOUTME: Logged workout session model
// ABOUTME: WorkoutRecord with duration, sets, reps, resistance weight, and energy burned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// One logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Workout label (e.g. "Squat", "Running")
    pub workout_type: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration_minutes: u32,
    /// Number of sets
    #[serde(default)]
    pub sets: u32,
    /// Repetitions per set
    #[serde(default)]
    pub reps: u32,
    /// Resistance weight in kilograms (0 for cardio)
    #[serde(default)]
    pub weight_kg: f64,
    /// Energy burned in kcal
    #[serde(default)]
    pub calories_burned: f64,
}

impl WorkoutRecord {
    /// Create a timed session with no resistance component
    pub fn cardio(
        workout_type: impl Into<String>,
        duration_minutes: u32,
        calories_burned: f64,
    ) -> Self {
        Self {
            workout_type: workout_type.into(),
            duration_minutes,
            sets: 0,
            reps: 0,
            weight_kg: 0.0,
            calories_burned,
        }
    }

    /// Create a resistance session
    pub fn strength(
        workout_type: impl Into<String>,
        sets: u32,
        reps: u32,
        weight_kg: f64,
        calories_burned: f64,
    ) -> Self {
        Self {
            workout_type: workout_type.into(),
            duration_minutes: 0,
            sets,
            reps,
            weight_kg,
            calories_burned,
        }
    }

    /// Resistance weight marks a strength session
    #[must_use]
    pub fn is_strength(&self) -> bool {
        self.weight_kg > 0.0
    }
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_strength() {
            write!(
                f,
                "{} - Sets: {}, Reps: {}, Weight: {} kg",
                self.workout_type, self.sets, self.reps, self.weight_kg
            )
        } else {
            write!(
                f,
                "{} - {} mins, {} kcal",
                self.workout_type, self.duration_minutes, self.calories_burned
            )
        }
    }
}
