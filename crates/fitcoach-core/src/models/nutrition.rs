// ABOUTME: Logged meal model for food intake tracking
// ABOUTME: MealRecord with calories and protein/carbohydrate/fat grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use serde::{Deserialize, Serialize};

/// One logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Food item label
    pub food_item: String,
    /// Calories consumed
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat in grams
    #[serde(default)]
    pub fat_g: f64,
}

impl MealRecord {
    /// Create a meal record
    pub fn new(
        food_item: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
    ) -> Self {
        Self {
            food_item: food_item.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }
}
