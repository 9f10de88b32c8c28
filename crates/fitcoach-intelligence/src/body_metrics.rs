// ABOUTME: Body-mass-index calculation for profiles and weigh-ins
// ABOUTME: Rejects degenerate heights instead of reporting a zero BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

use chrono::NaiveDate;
use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{ProfileFacts, ProgressEntry};

/// Calculate body mass index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
///
/// # Errors
///
/// Returns `DegenerateInput` if height is not positive, or `InvalidInput` if weight is
/// negative or not finite
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::degenerate_input(format!(
            "BMI is undefined for height {height_cm} cm"
        )));
    }
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must not be negative, got {weight_kg} kg"
        )));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// BMI of a profile at its recorded weight
///
/// # Errors
///
/// Returns `DegenerateInput` if the profile height is not positive
pub fn profile_bmi(profile: &ProfileFacts) -> AppResult<f64> {
    calculate_bmi(profile.weight_kg, profile.height_cm)
}

/// Build a dated progress entry for a weigh-in, using the profile's height
///
/// # Errors
///
/// Returns `DegenerateInput` if the profile height is not positive
pub fn progress_entry(
    date: NaiveDate,
    weight_kg: f64,
    profile: &ProfileFacts,
) -> AppResult<ProgressEntry> {
    let bmi = calculate_bmi(weight_kg, profile.height_cm)?;
    Ok(ProgressEntry {
        date,
        weight_kg,
        bmi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcoach_core::errors::ErrorCode;

    #[test]
    fn test_bmi_typical() {
        let bmi = calculate_bmi(80.0, 200.0).unwrap();
        assert!((bmi - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_zero_height_is_degenerate() {
        let err = calculate_bmi(70.0, 0.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateInput);
    }

    #[test]
    fn test_bmi_rejects_non_finite_metrics() {
        let err = calculate_bmi(70.0, f64::INFINITY).unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateInput);
        let err = calculate_bmi(f64::NAN, 175.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
