// ABOUTME: Energy model deriving maintenance calories and macro targets from body metrics
// ABOUTME: Mifflin-St Jeor BMR, goal-adjusted calorie targets, and protein targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Energy Model
//!
//! Maintenance calories are the Mifflin-St Jeor BMR used directly, with no activity
//! multiplier and no minimum floor. Integer results are truncated toward zero.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::intelligence::{BmrConfig, EnergyConfig, IntelligenceConfig};
use crate::goal_classifier::FitnessGoal;
use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{ProfileFacts, Sex};
use serde::{Deserialize, Serialize};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Everyone else: -161
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `sex` - Sex for the constant offset
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `DegenerateInput` if height or weight is not positive and finite
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::degenerate_input(
            "Height must be positive to estimate BMR",
        ));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::degenerate_input(
            "Weight must be positive to estimate BMR",
        ));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = if sex.is_male() {
        config.msj_male_constant
    } else {
        config.msj_female_constant
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Energy targets derived for one profile and goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyTargets {
    /// Maintenance calories (kcal/day)
    pub maintenance_kcal: i32,
    /// Goal-adjusted calorie target (kcal/day)
    pub target_kcal: i32,
    /// Daily protein target (grams)
    pub protein_g: i32,
}

/// Computes maintenance energy expenditure and macro targets from profile facts
#[derive(Debug, Clone)]
pub struct EnergyModel {
    config: EnergyConfig,
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EnergyModel {
    /// Create an energy model from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().energy.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: EnergyConfig) -> Self {
        Self { config }
    }

    /// Maintenance calories (BMR) truncated to whole kcal
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if height or weight is not positive and finite, or the
    /// BMR does not fit in whole kcal
    pub fn maintenance_calories(&self, profile: &ProfileFacts) -> AppResult<i32> {
        let bmr = calculate_mifflin_st_jeor(
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            profile.sex,
            &self.config.bmr,
        )?;
        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&bmr) {
            return Err(AppError::degenerate_input(format!(
                "BMR of {bmr} kcal is outside the representable range"
            )));
        }
        Ok(bmr as i32)
    }

    /// Daily protein target truncated to whole grams
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if weight is not positive
    pub fn protein_target_grams(&self, profile: &ProfileFacts) -> AppResult<i32> {
        if !profile.weight_kg.is_finite() || profile.weight_kg <= 0.0 {
            return Err(AppError::degenerate_input(
                "Weight must be positive to derive a protein target",
            ));
        }
        Ok((profile.weight_kg * self.config.targets.protein_g_per_kg) as i32)
    }

    /// Calorie target for a goal: deficit, surplus, or maintenance
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if height or weight is not positive and finite
    pub fn goal_calorie_target(&self, profile: &ProfileFacts, goal: FitnessGoal) -> AppResult<i32> {
        let maintenance = self.maintenance_calories(profile)?;
        Ok(self.adjust_for_goal(maintenance, goal))
    }

    /// All three targets in one pass
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if height or weight is not positive and finite
    pub fn targets(&self, profile: &ProfileFacts, goal: FitnessGoal) -> AppResult<EnergyTargets> {
        let maintenance_kcal = self.maintenance_calories(profile)?;
        Ok(EnergyTargets {
            maintenance_kcal,
            target_kcal: self.adjust_for_goal(maintenance_kcal, goal),
            protein_g: self.protein_target_grams(profile)?,
        })
    }

    fn adjust_for_goal(&self, maintenance: i32, goal: FitnessGoal) -> i32 {
        let targets = &self.config.targets;
        match goal {
            FitnessGoal::WeightLoss => {
                maintenance.saturating_sub(targets.weight_loss_deficit_kcal)
            }
            FitnessGoal::MuscleGain => {
                maintenance.saturating_add(targets.muscle_gain_surplus_kcal)
            }
            FitnessGoal::GeneralFitness => maintenance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_adjustment_saturates_at_i32_bounds() {
        let model = EnergyModel::with_config(EnergyConfig::default());
        assert_eq!(model.adjust_for_goal(i32::MIN, FitnessGoal::WeightLoss), i32::MIN);
        assert_eq!(model.adjust_for_goal(i32::MAX, FitnessGoal::MuscleGain), i32::MAX);
    }
}
