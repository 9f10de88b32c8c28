// ABOUTME: User profile facts used as input to energy and body-metric calculations
// ABOUTME: ProfileFacts and Sex definitions with degenerate-metric validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Sex used for the Mifflin-St Jeor offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
    /// Any other value; takes the non-male offset
    Other,
}

impl Sex {
    /// Parse sex from string, falling back to `Other` for unrecognized values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }

    /// Whether the male BMR offset applies
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}

/// Immutable snapshot of a user's physiological attributes
///
/// Supplied per call and owned by the caller. Fields are public so records can be
/// deserialized from a store; call [`ProfileFacts::validate`] (or construct through
/// [`ProfileFacts::new`]) before handing one to an energy calculation.
///
/// # Examples
///
/// ```rust
/// use fitcoach_core::models::{ProfileFacts, Sex};
///
/// let profile = ProfileFacts::new(30, Sex::Male, 180.0, 80.0).unwrap();
/// assert!(profile.sex.is_male());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileFacts {
    /// Age in years
    pub age: u32,
    /// Sex used for the BMR offset
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl ProfileFacts {
    /// Create validated profile facts
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero age and `DegenerateInput` when height or weight
    /// is not strictly positive and finite
    pub fn new(age: u32, sex: Sex, height_cm: f64, weight_kg: f64) -> AppResult<Self> {
        let profile = Self {
            age,
            sex,
            height_cm,
            weight_kg,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the documented invariants
    ///
    /// Non-finite heights and weights are rejected along with non-positive ones.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero age and `DegenerateInput` when height or weight
    /// is not strictly positive and finite
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_input("Age must be greater than 0 years"));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::degenerate_input(format!(
                "Height must be positive, got {} cm",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::degenerate_input(format!(
                "Weight must be positive, got {} kg",
                self.weight_kg
            )));
        }
        Ok(())
    }
}
