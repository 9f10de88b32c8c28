// ABOUTME: Data models for the facts a user logs in the tracker
// ABOUTME: Re-exports ProfileFacts, WorkoutRecord, MealRecord, GoalRecord, and ProgressEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! # Data Models
//!
//! Plain records owned by the caller's record store. The intelligence engine treats every
//! one of them as read-only input and never mutates or persists them.
//!
//! ## Core Models
//!
//! - `ProfileFacts`: physiological snapshot (age, sex, height, weight)
//! - `WorkoutRecord`: one logged workout session
//! - `MealRecord`: one logged meal with its macros
//! - `GoalRecord`: a user goal with free-text description and status
//! - `ProgressEntry`: a dated body-weight measurement with its BMI

mod goal;
mod nutrition;
mod profile;
mod progress;
mod workout;

pub use goal::{GoalRecord, GoalStatus};
pub use nutrition::MealRecord;
pub use profile::{ProfileFacts, Sex};
pub use progress::ProgressEntry;
pub use workout::WorkoutRecord;

/// Identifier of a tracker user
pub type UserId = uuid::Uuid;
