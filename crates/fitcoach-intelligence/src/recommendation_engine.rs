// ABOUTME: Recommendation engine producing personalized workout, diet, and progress coaching
// ABOUTME: Orchestrates goal classification, energy targets, and workout aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors
//! Recommendation engine for personalized coaching text
//!
//! The engine is a pure function of its inputs: it performs no I/O, keeps no per-user
//! state, and can be shared freely across threads. A call either returns a fully
//! populated [`RecommendationBundle`] or fails with a documented argument error.

use crate::config::intelligence::{
    IntelligenceConfig, RecommendationConfig, RecommendationThresholds,
};
use crate::energy_model::{EnergyModel, EnergyTargets};
use crate::goal_classifier::{FitnessGoal, GoalClassifier, KeywordGoalClassifier};
use crate::workout_aggregator::{WorkoutAggregator, WorkoutSummary};
use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{ProfileFacts, WorkoutRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The three coaching texts plus the figures they were derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    /// Goal the description classified to
    pub goal: FitnessGoal,
    /// Workout plan for the goal
    pub workout_plan: String,
    /// Diet plan with calorie and protein targets
    pub diet_plan: String,
    /// Narrative assessment of the workout history
    pub progress_narrative: String,
    /// Energy figures interpolated into the diet plan
    pub energy: EnergyTargets,
}

/// Workout-frequency band used for progress feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyBand {
    /// Fewer workouts than the low threshold
    Low,
    /// Between the thresholds, both inclusive
    Good,
    /// More workouts than the high threshold
    High,
}

impl ConsistencyBand {
    /// Band a workout count; both thresholds belong to the middle band
    #[must_use]
    pub const fn from_count(count: u64, thresholds: &RecommendationThresholds) -> Self {
        if count < thresholds.consistency_low_threshold {
            Self::Low
        } else if count <= thresholds.consistency_high_threshold {
            Self::Good
        } else {
            Self::High
        }
    }
}

/// Fixed workout plan for a goal
#[must_use]
pub const fn workout_plan(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::WeightLoss => "For weight loss, prioritize cardiovascular exercise (running, cycling) 3-4 times a week to maximize calorie burn. Complement this with 2 days of full-body strength training to preserve muscle mass.",
        FitnessGoal::MuscleGain => "To build muscle, focus on a strength training split (e.g., Push/Pull/Legs) 4-5 times a week. Emphasize compound lifts like squats, deadlifts, and bench presses with progressive overload.",
        FitnessGoal::GeneralFitness => "For general fitness, a balanced routine is optimal. Aim for 3 days of total-body strength training and 2 days of moderate-intensity cardio (like jogging or swimming) to improve overall health.",
    }
}

/// Diet plan for a goal with its calorie and protein targets interpolated
#[must_use]
pub fn diet_plan(goal: FitnessGoal, energy: &EnergyTargets) -> String {
    let calories = energy.target_kcal;
    let protein = energy.protein_g;
    match goal {
        FitnessGoal::WeightLoss => format!(
            "To lose weight, aim for a consistent calorie deficit of around {calories} kcal per day. Prioritize high-protein foods (approx. {protein}g/day) and fiber to promote satiety."
        ),
        FitnessGoal::MuscleGain => format!(
            "For muscle gain, a slight calorie surplus is needed. Aim for {calories} kcal per day, with a high protein intake of about {protein}g to fuel muscle repair and growth."
        ),
        FitnessGoal::GeneralFitness => format!(
            "For general wellness, focus on a balanced diet of whole foods at maintenance calories (approx. {calories} kcal/day). Ensure a consistent protein intake of around {protein}g/day."
        ),
    }
}

/// Progress narrative for a workout history
///
/// An empty history yields the fixed prompt to start logging, with no figures in it.
#[must_use]
pub fn progress_narrative(
    workout_history: &[WorkoutRecord],
    config: &RecommendationConfig,
) -> String {
    if workout_history.is_empty() {
        return config.messages.no_workouts.clone();
    }

    let WorkoutSummary {
        count,
        total_calories_burned,
    } = WorkoutAggregator::summarize(workout_history);

    let messages = &config.messages;
    let feedback = match ConsistencyBand::from_count(count, &config.thresholds) {
        ConsistencyBand::Low => &messages.low_consistency,
        ConsistencyBand::Good => &messages.good_consistency,
        ConsistencyBand::High => &messages.high_dedication,
    };

    // f64::round rounds halves away from zero
    let burned = total_calories_burned.round();
    format!("You've logged {count} workout(s), burning a total of {burned:.0} calories. {feedback}")
}

/// Recommendation engine with a pluggable goal classifier
pub struct RecommendationEngine<C: GoalClassifier = KeywordGoalClassifier> {
    classifier: C,
    energy_model: EnergyModel,
    config: RecommendationConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with keyword classification and the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_classifier(KeywordGoalClassifier)
    }
}

impl<C: GoalClassifier> RecommendationEngine<C> {
    /// Create an engine with a custom classifier and the global configuration
    #[must_use]
    pub fn with_classifier(classifier: C) -> Self {
        Self::with_config(classifier, IntelligenceConfig::global())
    }

    /// Create with custom configuration
    #[must_use]
    pub fn with_config(classifier: C, config: &IntelligenceConfig) -> Self {
        Self {
            classifier,
            energy_model: EnergyModel::with_config(config.energy.clone()),
            config: config.recommendation.clone(),
        }
    }

    /// Bind a profile and goal description, resolving the goal and energy targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `profile` is absent or has a zero age, and
    /// `DegenerateInput` if its height or weight is not positive
    pub fn for_profile(
        &self,
        profile: Option<&ProfileFacts>,
        goal_description: Option<&str>,
    ) -> AppResult<RecommendationContext<'_, C>> {
        let profile = profile.ok_or_else(|| AppError::invalid_input("Profile cannot be absent"))?;
        profile.validate()?;

        let goal = self.classifier.classify(goal_description);
        let energy = self.energy_model.targets(profile, goal)?;

        Ok(RecommendationContext {
            engine: self,
            goal,
            energy,
        })
    }

    /// Produce the workout plan, diet plan, and progress narrative in one call
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `profile` is absent or has a zero age, and
    /// `DegenerateInput` if its height or weight is not positive
    pub fn recommend(
        &self,
        profile: Option<&ProfileFacts>,
        goal_description: Option<&str>,
        workout_history: &[WorkoutRecord],
    ) -> AppResult<RecommendationBundle> {
        let context = self.for_profile(profile, goal_description)?;
        debug!(
            goal = %context.goal,
            workouts = workout_history.len(),
            target_kcal = context.energy.target_kcal,
            "Generating recommendation bundle"
        );
        Ok(context.bundle(workout_history))
    }
}

/// A profile and goal bound to an engine; every text method is infallible
pub struct RecommendationContext<'a, C: GoalClassifier> {
    engine: &'a RecommendationEngine<C>,
    goal: FitnessGoal,
    energy: EnergyTargets,
}

impl<C: GoalClassifier> RecommendationContext<'_, C> {
    /// Classified goal
    #[must_use]
    pub const fn goal(&self) -> FitnessGoal {
        self.goal
    }

    /// Energy targets for the bound profile and goal
    #[must_use]
    pub const fn energy(&self) -> EnergyTargets {
        self.energy
    }

    /// Workout plan for the bound goal
    #[must_use]
    pub const fn suggest_workout_plan(&self) -> &'static str {
        workout_plan(self.goal)
    }

    /// Diet plan for the bound goal and profile
    #[must_use]
    pub fn suggest_diet_plan(&self) -> String {
        diet_plan(self.goal, &self.energy)
    }

    /// Progress narrative for a workout history
    #[must_use]
    pub fn analyze_progress(&self, workout_history: &[WorkoutRecord]) -> String {
        progress_narrative(workout_history, &self.engine.config)
    }

    /// All three texts as a bundle
    #[must_use]
    pub fn bundle(&self, workout_history: &[WorkoutRecord]) -> RecommendationBundle {
        RecommendationBundle {
            goal: self.goal,
            workout_plan: self.suggest_workout_plan().to_owned(),
            diet_plan: self.suggest_diet_plan(),
            progress_narrative: self.analyze_progress(workout_history),
            energy: self.energy,
        }
    }
}
