// ABOUTME: Configuration module for fitcoach-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

/// Intelligence module configuration (energy targets, recommendation banding)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
