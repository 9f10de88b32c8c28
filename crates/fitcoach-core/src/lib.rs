// ABOUTME: Core types for the FitCoach fitness tracker
// ABOUTME: Foundation crate with error handling and the logged-fact data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

#![deny(unsafe_code)]

//! # FitCoach Core
//!
//! Foundation crate providing shared types for the FitCoach fitness tracker. This crate
//! is designed to change infrequently, enabling incremental compilation benefits in the
//! workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Profile, workout, meal, goal, and progress records

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (profile facts, workouts, meals, goals, progress)
pub mod models;
