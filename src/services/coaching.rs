// ABOUTME: Coaching service wiring the record store to the recommendation engine
// ABOUTME: Recommendations from the first goal, daily dashboards, and progress weigh-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Coaching service
//!
//! Fetches a user's records from a [`TrackerStore`] and hands them to the pure engine.
//! Every call takes the user id (and, where relevant, the date) explicitly.
//!
//! Only the first goal the store lists (the newest) drives a recommendation; any other
//! goals are ignored. A user with no goals gets [`RecommendationOutcome::NoGoalSet`]
//! rather than an error so the presentation layer can prompt for one.

use crate::storage::TrackerStore;
use chrono::NaiveDate;
use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{ProgressEntry, UserId};
use fitcoach_intelligence::body_metrics;
use fitcoach_intelligence::{
    DailyTotals, DashboardSummarizer, GoalClassifier, KeywordGoalClassifier,
    RecommendationBundle, RecommendationEngine, WorkoutAggregator,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Result of asking for a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    /// The user has no goals yet
    NoGoalSet,
    /// A recommendation built from the user's first goal
    Ready {
        /// Description of the goal the recommendation is based on
        goal_description: String,
        /// Distance still to cover on that goal, as a percentage of its target
        goal_remaining_percent: f64,
        /// Workout plan, diet plan, and progress narrative
        bundle: RecommendationBundle,
    },
}

/// Dashboard statistics for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyDashboard {
    /// Day the totals cover
    pub date: NaiveDate,
    /// Calories consumed and burned plus macros
    pub totals: DailyTotals,
}

/// Domain service over a record store
pub struct CoachingService<S: TrackerStore, C: GoalClassifier = KeywordGoalClassifier> {
    store: Arc<S>,
    engine: RecommendationEngine<C>,
}

impl<S: TrackerStore> CoachingService<S> {
    /// Create a service with the default engine
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_engine(store, RecommendationEngine::new())
    }
}

impl<S: TrackerStore, C: GoalClassifier> CoachingService<S, C> {
    /// Create a service with a custom engine
    #[must_use]
    pub const fn with_engine(store: Arc<S>, engine: RecommendationEngine<C>) -> Self {
        Self { store, engine }
    }

    /// Recommendation for the user's first goal
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails, `InvalidInput` if the user has goals but
    /// no profile, and `DegenerateInput` if the profile's height or weight is not positive
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn recommend_for_user(&self, user_id: UserId) -> AppResult<RecommendationOutcome> {
        let goals = self.store.list_goals(user_id).await?;
        let Some(goal) = goals.into_iter().next() else {
            info!("No goal set; skipping recommendation");
            return Ok(RecommendationOutcome::NoGoalSet);
        };

        let profile = self.store.get_profile(user_id).await?;
        let workouts = self.store.list_workouts(user_id).await?;
        let bundle = self
            .engine
            .recommend(profile.as_ref(), Some(&goal.description), &workouts)?;

        info!(goal = %bundle.goal, workouts = workouts.len(), "Recommendation generated");
        Ok(RecommendationOutcome::Ready {
            goal_remaining_percent: goal.remaining_percent(),
            goal_description: goal.description,
            bundle,
        })
    }

    /// Recommendation for an explicit goal description, bypassing stored goals
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails, `InvalidInput` if the user has no
    /// profile, and `DegenerateInput` if the profile's height or weight is not positive
    #[instrument(skip(self, goal_description), fields(user_id = %user_id))]
    pub async fn recommend_with_goal(
        &self,
        user_id: UserId,
        goal_description: Option<&str>,
    ) -> AppResult<RecommendationBundle> {
        let profile = self.store.get_profile(user_id).await?;
        let workouts = self.store.list_workouts(user_id).await?;
        self.engine
            .recommend(profile.as_ref(), goal_description, &workouts)
    }

    /// Daily totals for `date`
    ///
    /// Nutrition uses the store's per-field sums; burned calories come from the day's
    /// workout records.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn dashboard_for_user(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> AppResult<DailyDashboard> {
        let workouts = self.store.list_workouts_on(user_id, date).await?;
        let nutrition = self.store.sum_nutrition_on(user_id, date).await?;
        let totals =
            DashboardSummarizer::from_parts(WorkoutAggregator::summarize(&workouts), nutrition);

        debug!(
            calories_consumed = totals.calories_consumed,
            calories_burned = totals.calories_burned,
            "Dashboard totals computed"
        );
        Ok(DailyDashboard { date, totals })
    }

    /// Record a weigh-in, computing BMI from the stored profile height
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has no profile, `DegenerateInput` if the
    /// profile height is not positive, and `StorageError` if the store fails
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn record_progress(
        &self,
        user_id: UserId,
        date: NaiveDate,
        weight_kg: f64,
    ) -> AppResult<ProgressEntry> {
        let profile = self
            .store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;

        let entry = body_metrics::progress_entry(date, weight_kg, &profile)?;
        self.store.add_progress_entry(user_id, entry).await?;

        info!(weight_kg, bmi = entry.bmi, "Progress recorded");
        Ok(entry)
    }

    /// Weigh-in history, newest first
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails
    pub async fn progress_history(&self, user_id: UserId) -> AppResult<Vec<ProgressEntry>> {
        Ok(self.store.list_progress(user_id).await?)
    }
}
