// ABOUTME: Sums a day's meal records into energy and macronutrient totals
// ABOUTME: NutritionAggregator and the additive NutritionTotals value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use fitcoach_core::models::MealRecord;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Summed calories and macros
///
/// Forms a monoid under `+` with [`NutritionTotals::default`] (all zeros) as identity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Calories consumed
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl From<&MealRecord> for NutritionTotals {
    fn from(meal: &MealRecord) -> Self {
        Self {
            calories: meal.calories,
            protein_g: meal.protein_g,
            carbs_g: meal.carbs_g,
            fat_g: meal.fat_g,
        }
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
        }
    }
}

impl Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Sums whatever meal records it is given
///
/// Restricting the records to a single day is the record store's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionAggregator;

impl NutritionAggregator {
    /// Sum calories, protein, carbs, and fat across the records
    #[must_use]
    pub fn summarize_daily(records: &[MealRecord]) -> NutritionTotals {
        records.iter().map(NutritionTotals::from).sum()
    }
}
