// ABOUTME: Record store abstraction the coaching service reads logged facts from
// ABOUTME: Async TrackerStore trait covering profile, workout, nutrition, goal, and progress rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Record store abstraction
//!
//! The intelligence engine never touches storage. Whatever backs the tracker implements
//! [`TrackerStore`]; the service layer fetches records through it and hands them to the
//! engine. Listing methods return rows newest first. "Today" is always an explicit date
//! argument rather than ambient state.

/// In-memory store backed by concurrent maps
pub mod memory;

/// JSON snapshot format for seeding a store
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use fitcoach_core::models::{
    GoalRecord, MealRecord, ProfileFacts, ProgressEntry, UserId, WorkoutRecord,
};
use fitcoach_intelligence::NutritionTotals;

/// Core record store trait
///
/// All store implementations must implement this trait to provide a consistent
/// interface for the service layer.
#[async_trait]
pub trait TrackerStore: Send + Sync {
    // ================================
    // Profiles
    // ================================

    /// Create or replace a user's profile facts
    async fn upsert_profile(&self, user_id: UserId, profile: ProfileFacts) -> Result<()>;

    /// Get a user's profile facts, `None` when the user is unknown
    async fn get_profile(&self, user_id: UserId) -> Result<Option<ProfileFacts>>;

    // ================================
    // Workouts
    // ================================

    /// Log a workout performed on `date`
    async fn add_workout(&self, user_id: UserId, date: NaiveDate, workout: WorkoutRecord)
        -> Result<()>;

    /// All-time workouts, newest first
    async fn list_workouts(&self, user_id: UserId) -> Result<Vec<WorkoutRecord>>;

    /// Workouts performed on `date`
    async fn list_workouts_on(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<Vec<WorkoutRecord>>;

    // ================================
    // Nutrition
    // ================================

    /// Log a meal eaten on `date`
    async fn add_meal(&self, user_id: UserId, date: NaiveDate, meal: MealRecord) -> Result<()>;

    /// All-time meals, newest first
    async fn list_meals(&self, user_id: UserId) -> Result<Vec<MealRecord>>;

    /// Meals eaten on `date`
    async fn list_meals_on(&self, user_id: UserId, date: NaiveDate) -> Result<Vec<MealRecord>>;

    /// Per-field sums of the meals eaten on `date`; zeros when there are none
    async fn sum_nutrition_on(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<NutritionTotals>;

    // ================================
    // Goals
    // ================================

    /// Record a goal
    async fn add_goal(&self, user_id: UserId, goal: GoalRecord) -> Result<()>;

    /// Goals, newest first
    async fn list_goals(&self, user_id: UserId) -> Result<Vec<GoalRecord>>;

    // ================================
    // Progress
    // ================================

    /// Record a weigh-in
    async fn add_progress_entry(&self, user_id: UserId, entry: ProgressEntry) -> Result<()>;

    /// Weigh-ins, newest first
    async fn list_progress(&self, user_id: UserId) -> Result<Vec<ProgressEntry>>;
}
