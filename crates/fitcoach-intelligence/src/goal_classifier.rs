// ABOUTME: Maps free-text goal descriptions onto the closed set of fitness objectives
// ABOUTME: GoalClassifier trait with keyword-containment and structured-selection implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Goal classification
//!
//! The engine depends on the [`GoalClassifier`] trait rather than on keyword matching, so
//! a structured goal picker can replace the free-text path: a [`FitnessGoal`] is itself a
//! classifier that always answers with its own variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Closed set of fitness objectives the engine reasons about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit with cardio emphasis
    WeightLoss,
    /// Caloric surplus with strength emphasis
    MuscleGain,
    /// Maintenance calories with a balanced routine
    #[default]
    GeneralFitness,
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::GeneralFitness => "General Fitness",
        };
        f.write_str(label)
    }
}

/// Strategy for turning a goal description into a [`FitnessGoal`]
///
/// Classification is total: every input, including an absent one, resolves to a goal.
pub trait GoalClassifier: Send + Sync {
    /// Classify an optional goal description
    fn classify(&self, description: Option<&str>) -> FitnessGoal;
}

/// Keywords that select [`FitnessGoal::WeightLoss`]; checked first
const WEIGHT_LOSS_KEYWORDS: [&str; 3] = ["lose weight", "cardio", "burn fat"];

/// Keywords that select [`FitnessGoal::MuscleGain`]
const MUSCLE_GAIN_KEYWORDS: [&str; 3] = ["build muscle", "strength", "bulk"];

/// Case-insensitive substring matcher over free text
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordGoalClassifier;

impl GoalClassifier for KeywordGoalClassifier {
    fn classify(&self, description: Option<&str>) -> FitnessGoal {
        let Some(description) = description else {
            return FitnessGoal::GeneralFitness;
        };
        let lowered = description.to_lowercase();

        // Order matters: a description mentioning both groups is a weight-loss goal
        let goal = if contains_any(&lowered, &WEIGHT_LOSS_KEYWORDS) {
            FitnessGoal::WeightLoss
        } else if contains_any(&lowered, &MUSCLE_GAIN_KEYWORDS) {
            FitnessGoal::MuscleGain
        } else {
            FitnessGoal::GeneralFitness
        };

        debug!(goal = %goal, "Classified goal description");
        goal
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

impl GoalClassifier for FitnessGoal {
    fn classify(&self, _description: Option<&str>) -> FitnessGoal {
        *self
    }
}
