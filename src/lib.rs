// ABOUTME: Main library entry point for the FitCoach tracker backend
// ABOUTME: Record storage, coaching services, and logging around the intelligence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

#![deny(unsafe_code)]

//! # FitCoach
//!
//! Personalized workout and diet recommendations plus daily aggregation for a fitness
//! tracker. The numeric and text-generation rules live in the `fitcoach-intelligence`
//! crate; this crate supplies the collaborators around them.
//!
//! ## Architecture
//!
//! - **storage**: the `TrackerStore` trait and an in-memory implementation
//! - **services**: `CoachingService`, which fetches records and runs the engine
//! - **logging**: `tracing` subscriber configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitcoach::models::{GoalRecord, ProfileFacts, Sex};
//! use fitcoach::services::{CoachingService, RecommendationOutcome};
//! use fitcoach::storage::{MemoryStore, TrackerStore};
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//! let user_id = Uuid::new_v4();
//! store.upsert_profile(user_id, ProfileFacts::new(30, Sex::Male, 180.0, 80.0)?).await?;
//! store.add_goal(user_id, GoalRecord::new("lose weight", 75.0, 80.0)).await?;
//!
//! let service = CoachingService::new(store);
//! let outcome = service.recommend_for_user(user_id).await?;
//! if let RecommendationOutcome::Ready { bundle, .. } = outcome {
//!     println!("{}", bundle.diet_plan);
//! }
//! # Ok(())
//! # }
//! ```

/// Structured logging configuration
pub mod logging;

/// Domain services over a record store
pub mod services;

/// Record store trait and implementations
pub mod storage;

pub use fitcoach_core::{errors, models};
pub use fitcoach_intelligence as intelligence;
