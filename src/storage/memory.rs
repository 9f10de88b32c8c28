// ABOUTME: In-memory TrackerStore implementation using lock-sharded concurrent maps
// ABOUTME: Keeps every workout and meal with the date it was logged for day filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use super::snapshot::Snapshot;
use super::TrackerStore;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use fitcoach_core::models::{
    GoalRecord, MealRecord, ProfileFacts, ProgressEntry, UserId, WorkoutRecord,
};
use fitcoach_intelligence::{NutritionAggregator, NutritionTotals};
use std::sync::Arc;
use tracing::debug;

/// A record paired with the day it was logged
#[derive(Debug, Clone)]
struct Dated<T> {
    date: NaiveDate,
    record: T,
}

#[derive(Debug, Default)]
struct UserRecords {
    profile: Option<ProfileFacts>,
    workouts: Vec<Dated<WorkoutRecord>>,
    meals: Vec<Dated<MealRecord>>,
    goals: Vec<GoalRecord>,
    progress: Vec<ProgressEntry>,
}

/// Newest first: latest date wins, later insertion breaks ties
fn newest_first<T: Clone>(rows: &[Dated<T>]) -> Vec<T> {
    let mut ordered: Vec<&Dated<T>> = rows.iter().rev().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered.into_iter().map(|row| row.record.clone()).collect()
}

fn on_date<T: Clone>(rows: &[Dated<T>], date: NaiveDate) -> Vec<T> {
    rows.iter()
        .filter(|row| row.date == date)
        .map(|row| row.record.clone())
        .collect()
}

/// Thread-safe in-memory record store
///
/// Cloning is cheap and clones share the same underlying maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<UserId, UserRecords>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding one user's snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let store = Self::new();
        let mut records = UserRecords {
            profile: snapshot.profile,
            ..UserRecords::default()
        };
        records.workouts = snapshot
            .workouts
            .iter()
            .map(|entry| Dated {
                date: entry.date,
                record: entry.workout.clone(),
            })
            .collect();
        records.meals = snapshot
            .meals
            .iter()
            .map(|entry| Dated {
                date: entry.date,
                record: entry.meal.clone(),
            })
            .collect();
        // Snapshot goals and progress are listed newest first; storage keeps insertion order
        records.goals = snapshot.goals.iter().rev().cloned().collect();
        records.progress = snapshot.progress.iter().rev().copied().collect();

        debug!(
            user_id = %snapshot.user_id,
            workouts = records.workouts.len(),
            meals = records.meals.len(),
            goals = records.goals.len(),
            "Loaded snapshot into memory store"
        );
        store.users.insert(snapshot.user_id, records);
        store
    }
}

#[async_trait]
impl TrackerStore for MemoryStore {
    async fn upsert_profile(&self, user_id: UserId, profile: ProfileFacts) -> Result<()> {
        self.users.entry(user_id).or_default().profile = Some(profile);
        Ok(())
    }

    async fn get_profile(&self, user_id: UserId) -> Result<Option<ProfileFacts>> {
        Ok(self.users.get(&user_id).and_then(|records| records.profile))
    }

    async fn add_workout(
        &self,
        user_id: UserId,
        date: NaiveDate,
        workout: WorkoutRecord,
    ) -> Result<()> {
        self.users
            .entry(user_id)
            .or_default()
            .workouts
            .push(Dated {
                date,
                record: workout,
            });
        Ok(())
    }

    async fn list_workouts(&self, user_id: UserId) -> Result<Vec<WorkoutRecord>> {
        Ok(self
            .users
            .get(&user_id)
            .map(|records| newest_first(&records.workouts))
            .unwrap_or_default())
    }

    async fn list_workouts_on(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<Vec<WorkoutRecord>> {
        Ok(self
            .users
            .get(&user_id)
            .map(|records| on_date(&records.workouts, date))
            .unwrap_or_default())
    }

    async fn add_meal(&self, user_id: UserId, date: NaiveDate, meal: MealRecord) -> Result<()> {
        self.users
            .entry(user_id)
            .or_default()
            .meals
            .push(Dated { date, record: meal });
        Ok(())
    }

    async fn list_meals(&self, user_id: UserId) -> Result<Vec<MealRecord>> {
        Ok(self
            .users
            .get(&user_id)
            .map(|records| newest_first(&records.meals))
            .unwrap_or_default())
    }

    async fn list_meals_on(&self, user_id: UserId, date: NaiveDate) -> Result<Vec<MealRecord>> {
        Ok(self
            .users
            .get(&user_id)
            .map(|records| on_date(&records.meals, date))
            .unwrap_or_default())
    }

    async fn sum_nutrition_on(&self, user_id: UserId, date: NaiveDate) -> Result<NutritionTotals> {
        let meals = self.list_meals_on(user_id, date).await?;
        Ok(NutritionAggregator::summarize_daily(&meals))
    }

    async fn add_goal(&self, user_id: UserId, goal: GoalRecord) -> Result<()> {
        self.users.entry(user_id).or_default().goals.push(goal);
        Ok(())
    }

    async fn list_goals(&self, user_id: UserId) -> Result<Vec<GoalRecord>> {
        Ok(self
            .users
            .get(&user_id)
            .map(|records| records.goals.iter().rev().cloned().collect())
            .unwrap_or_default())
    }

    async fn add_progress_entry(&self, user_id: UserId, entry: ProgressEntry) -> Result<()> {
        self.users.entry(user_id).or_default().progress.push(entry);
        Ok(())
    }

    async fn list_progress(&self, user_id: UserId) -> Result<Vec<ProgressEntry>> {
        Ok(self
            .users
            .get(&user_id)
            .map(|records| {
                let mut entries: Vec<ProgressEntry> =
                    records.progress.iter().rev().copied().collect();
                entries.sort_by(|a, b| b.date.cmp(&a.date));
                entries
            })
            .unwrap_or_default())
    }
}
