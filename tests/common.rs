// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus profile, workout, meal, and store builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitcoach`
//!
//! This module provides common fixtures to reduce duplication across integration tests.

use chrono::NaiveDate;
use fitcoach::models::{MealRecord, ProfileFacts, Sex, UserId, WorkoutRecord};
use fitcoach::storage::MemoryStore;
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Male, 30 years, 180 cm, 80 kg (maintenance 1780 kcal)
pub fn male_profile() -> ProfileFacts {
    ProfileFacts {
        age: 30,
        sex: Sex::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
    }
}

/// Female, 25 years, 165 cm, 60 kg (maintenance 1345 kcal)
pub fn female_profile() -> ProfileFacts {
    ProfileFacts {
        age: 25,
        sex: Sex::Female,
        height_cm: 165.0,
        weight_kg: 60.0,
    }
}

/// Cardio sessions with the given burns
pub fn workouts_burning(burns: &[f64]) -> Vec<WorkoutRecord> {
    burns
        .iter()
        .map(|&calories| WorkoutRecord::cardio("Running", 30, calories))
        .collect()
}

/// `count` identical 200 kcal sessions
pub fn workouts(count: usize) -> Vec<WorkoutRecord> {
    vec![WorkoutRecord::cardio("Cycling", 45, 200.0); count]
}

pub fn meal(food: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> MealRecord {
    MealRecord::new(food, calories, protein, carbs, fat)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Empty shared store plus a fresh user id
pub fn create_test_store() -> (Arc<MemoryStore>, UserId) {
    init_test_logging();
    (Arc::new(MemoryStore::new()), Uuid::new_v4())
}
