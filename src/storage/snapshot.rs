// ABOUTME: JSON snapshot of one user's logged facts for seeding a record store
// ABOUTME: Profile, goals, and dated workouts, meals, and weigh-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use chrono::NaiveDate;
use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{
    GoalRecord, MealRecord, ProfileFacts, ProgressEntry, UserId, WorkoutRecord,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// A workout with the day it was performed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatedWorkout {
    /// Day of the workout
    pub date: NaiveDate,
    /// Workout fields
    #[serde(flatten)]
    pub workout: WorkoutRecord,
}

/// A meal with the day it was eaten
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatedMeal {
    /// Day of the meal
    pub date: NaiveDate,
    /// Meal fields
    #[serde(flatten)]
    pub meal: MealRecord,
}

/// One user's logged facts
///
/// Goals and progress entries are listed newest first, matching what the store returns.
///
/// ```json
/// {
///   "profile": { "age": 25, "sex": "female", "height_cm": 165.0, "weight_kg": 60.0 },
///   "goals": [{ "description": "lose weight", "target_value": 55.0, "current_value": 60.0 }],
///   "workouts": [{ "date": "2025-06-01", "workout_type": "Running", "duration_minutes": 30, "calories_burned": 300.0 }],
///   "meals": [{ "date": "2025-06-01", "food_item": "Oatmeal", "calories": 350.0, "protein_g": 12.0 }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// User the facts belong to; a fresh id when omitted
    #[serde(default = "Uuid::new_v4")]
    pub user_id: UserId,
    /// Profile facts, absent for a user who never filled them in
    #[serde(default)]
    pub profile: Option<ProfileFacts>,
    /// Goals, newest first
    #[serde(default)]
    pub goals: Vec<GoalRecord>,
    /// Workouts with their dates
    #[serde(default)]
    pub workouts: Vec<DatedWorkout>,
    /// Meals with their dates
    #[serde(default)]
    pub meals: Vec<DatedMeal>,
    /// Weigh-ins, newest first
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the JSON does not match the snapshot shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the file cannot be read and `SerializationError` if it
    /// does not parse
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read snapshot {}: {e}", path.display()))
                .with_source(e)
        })?;
        Self::from_json(&json)
    }

    /// Pretty-printed JSON text of the snapshot
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if a record cannot be encoded
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be written and `SerializationError` if
    /// the snapshot cannot be encoded
    pub fn write_to_path(&self, path: &Path) -> AppResult<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| {
            AppError::storage(format!("Cannot write snapshot {}: {e}", path.display()))
                .with_source(e)
        })
    }
}
