// ABOUTME: Recommendation engine configuration for progress feedback
// ABOUTME: Configures workout-frequency banding thresholds and feedback message templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Recommendation Engine Configuration
//!
//! Provides the consistency bands used by the progress narrative. A workout count below
//! `consistency_low_threshold` is the low band; counts from the low threshold up to and
//! including `consistency_high_threshold` are the middle band; anything above is high.

use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Threshold values for the consistency bands
    pub thresholds: RecommendationThresholds,
    /// Feedback sentence per band
    pub messages: RecommendationMessages,
}

/// Thresholds for workout-frequency banding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Smallest workout count in the middle band
    pub consistency_low_threshold: u64,
    /// Largest workout count in the middle band
    pub consistency_high_threshold: u64,
}

/// Feedback sentences appended to the progress narrative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Feedback for fewer workouts than the low threshold
    pub low_consistency: String,
    /// Feedback for the middle band
    pub good_consistency: String,
    /// Feedback above the high threshold
    pub high_dedication: String,
    /// Narrative shown when no workouts have been logged
    pub no_workouts: String,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            consistency_low_threshold: 3,
            consistency_high_threshold: 5,
        }
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            low_consistency:
                "Consistency is key; try to schedule at least 3 sessions per week.".to_owned(),
            good_consistency: "You're showing great consistency. Keep up the momentum!"
                .to_owned(),
            high_dedication:
                "Incredible dedication! Ensure you are also scheduling adequate rest and recovery."
                    .to_owned(),
            no_workouts: "Log some workouts to see your progress analysis here!".to_owned(),
        }
    }
}
