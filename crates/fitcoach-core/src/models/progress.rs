// ABOUTME: Dated body-weight measurements for progress history
// ABOUTME: ProgressEntry pairing a weigh-in with its BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated weigh-in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Day of the measurement
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body mass index at that weight
    pub bmi: f64,
}
