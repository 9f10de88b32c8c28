// ABOUTME: Domain service layer combining the record store with the intelligence engine
// ABOUTME: Entry points reused by the CLI and any future presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Domain service layer
//!
//! Services fetch records from a [`crate::storage::TrackerStore`], pass them to the pure
//! engine in `fitcoach_intelligence`, and persist anything the engine derives.

/// Recommendations, dashboards, and progress tracking for one user at a time
pub mod coaching;

pub use coaching::{CoachingService, DailyDashboard, RecommendationOutcome};
