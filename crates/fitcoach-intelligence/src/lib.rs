// ABOUTME: Recommendation and aggregation engine for the FitCoach tracker
// ABOUTME: Turns logged profile, workout, meal, and goal facts into targets and coaching text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

#![deny(unsafe_code)]

//! # FitCoach Intelligence
//!
//! The only place where domain rules, numeric derivation, and multi-record aggregation
//! combine. Everything here is synchronous and side-effect free: callers fetch records
//! from their own stores and pass them in explicitly.
//!
//! ## Components
//!
//! - **goal_classifier**: free-text goal description to [`FitnessGoal`]
//! - **energy_model**: Mifflin-St Jeor maintenance calories, goal targets, protein target
//! - **workout_aggregator** / **nutrition_aggregator**: record-set reductions
//! - **recommendation_engine**: workout plan, diet plan, and progress narrative
//! - **dashboard**: daily totals for the dashboard view
//! - **body_metrics**: BMI for profiles and weigh-ins

/// BMI calculation
pub mod body_metrics;

/// Intelligence configuration with environment overrides
pub mod config;

/// Daily dashboard statistics
pub mod dashboard;

/// Maintenance calories and macro targets
pub mod energy_model;

/// Goal classification behind a replaceable trait
pub mod goal_classifier;

/// Meal record summation
pub mod nutrition_aggregator;

/// Coaching text generation
pub mod recommendation_engine;

/// Workout history reduction
pub mod workout_aggregator;

pub use config::IntelligenceConfig;
pub use dashboard::{DailyTotals, DashboardSummarizer};
pub use energy_model::{EnergyModel, EnergyTargets};
pub use goal_classifier::{FitnessGoal, GoalClassifier, KeywordGoalClassifier};
pub use nutrition_aggregator::{NutritionAggregator, NutritionTotals};
pub use recommendation_engine::{
    ConsistencyBand, RecommendationBundle, RecommendationContext, RecommendationEngine,
};
pub use workout_aggregator::{WorkoutAggregator, WorkoutSummary};
