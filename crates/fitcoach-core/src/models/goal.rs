// ABOUTME: User goal records with free-text description and tracking status
// ABOUTME: GoalRecord, GoalStatus, and remaining-distance progress calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tracking status of a goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Actively being worked on
    #[default]
    InProgress,
    /// Reached
    Completed,
    /// Recorded but not started
    NotStarted,
}

impl GoalStatus {
    /// Parse status from its display label or snake-case name
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "completed" => Self::Completed,
            "not_started" => Self::NotStarted,
            _ => Self::InProgress,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::NotStarted => "Not Started",
        }
    }
}

/// A user goal
///
/// Only `description` feeds the recommendation engine; the numeric fields drive
/// [`GoalRecord::remaining_percent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Unique goal identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Free-text description (e.g. "lose weight before summer")
    pub description: String,
    /// Target value of the tracked quantity
    #[serde(default)]
    pub target_value: f64,
    /// Current value of the tracked quantity
    #[serde(default)]
    pub current_value: f64,
    /// Tracking status
    #[serde(default)]
    pub status: GoalStatus,
}

impl GoalRecord {
    /// Create an in-progress goal with a fresh identifier
    pub fn new(description: impl Into<String>, target_value: f64, current_value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            target_value,
            current_value,
            status: GoalStatus::InProgress,
        }
    }

    /// Distance still to cover, as a percentage of the target
    ///
    /// Formula: `|target - current| / target * 100`; 0 when the target is not positive.
    #[must_use]
    pub fn remaining_percent(&self) -> f64 {
        if self.target_value <= 0.0 {
            return 0.0;
        }
        (self.target_value - self.current_value).abs() / self.target_value * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_percent() {
        let goal = GoalRecord::new("run 100 km", 100.0, 25.0);
        assert!((goal.remaining_percent() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remaining_percent_without_target() {
        let goal = GoalRecord::new("feel better", 0.0, 10.0);
        assert!(goal.remaining_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_from_label() {
        assert_eq!(GoalStatus::from_str_lossy("Not Started"), GoalStatus::NotStarted);
        assert_eq!(GoalStatus::from_str_lossy("completed"), GoalStatus::Completed);
        assert_eq!(GoalStatus::from_str_lossy("whatever"), GoalStatus::InProgress);
    }
}
