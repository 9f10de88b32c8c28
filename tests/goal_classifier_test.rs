// ABOUTME: Tests for keyword goal classification and classifier substitution
// ABOUTME: Covers case folding, keyword precedence, absent descriptions, and fixed classifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcoach::intelligence::{FitnessGoal, GoalClassifier, KeywordGoalClassifier};

fn classify(description: Option<&str>) -> FitnessGoal {
    KeywordGoalClassifier.classify(description)
}

#[test]
fn test_weight_loss_keywords() {
    assert_eq!(classify(Some("I want to lose weight")), FitnessGoal::WeightLoss);
    assert_eq!(classify(Some("more CARDIO")), FitnessGoal::WeightLoss);
    assert_eq!(classify(Some("Burn Fat by June")), FitnessGoal::WeightLoss);
}

#[test]
fn test_muscle_gain_keywords() {
    assert_eq!(classify(Some("Build Muscle")), FitnessGoal::MuscleGain);
    assert_eq!(classify(Some("strength training")), FitnessGoal::MuscleGain);
    assert_eq!(classify(Some("winter bulk")), FitnessGoal::MuscleGain);
    assert_eq!(
        classify(Some("I want to build muscle and bulk")),
        FitnessGoal::MuscleGain
    );
}

#[test]
fn test_keywords_match_as_substrings() {
    assert_eq!(classify(Some("strengthen my core")), FitnessGoal::MuscleGain);
}

#[test]
fn test_weight_loss_takes_precedence() {
    assert_eq!(
        classify(Some("build muscle but also do cardio")),
        FitnessGoal::WeightLoss
    );
}

#[test]
fn test_unmatched_and_absent_descriptions_are_general() {
    assert_eq!(classify(None), FitnessGoal::GeneralFitness);
    assert_eq!(classify(Some("")), FitnessGoal::GeneralFitness);
    assert_eq!(classify(Some("run a marathon")), FitnessGoal::GeneralFitness);
}

#[test]
fn test_fixed_goal_ignores_description() {
    assert_eq!(
        FitnessGoal::MuscleGain.classify(Some("lose weight")),
        FitnessGoal::MuscleGain
    );
    assert_eq!(FitnessGoal::WeightLoss.classify(None), FitnessGoal::WeightLoss);
}

#[test]
fn test_goal_display_labels() {
    assert_eq!(FitnessGoal::WeightLoss.to_string(), "Weight Loss");
    assert_eq!(FitnessGoal::MuscleGain.to_string(), "Muscle Gain");
    assert_eq!(FitnessGoal::GeneralFitness.to_string(), "General Fitness");
}
