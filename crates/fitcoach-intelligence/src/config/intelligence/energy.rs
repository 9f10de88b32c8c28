// ABOUTME: Energy model configuration for maintenance calories and macro targets
// ABOUTME: Configures Mifflin-St Jeor coefficients, goal calorie offsets, and protein factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Energy Model Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use serde::{Deserialize, Serialize};

/// Energy model configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Goal-specific calorie adjustments and macro factors
    pub targets: EnergyTargetsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor constant for every non-male profile (-161)
    pub msj_female_constant: f64,
}

/// Calorie offsets and protein factor applied on top of maintenance calories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyTargetsConfig {
    /// Daily deficit subtracted from maintenance for weight loss (kcal)
    pub weight_loss_deficit_kcal: i32,
    /// Daily surplus added to maintenance for muscle gain (kcal)
    pub muscle_gain_surplus_kcal: i32,
    /// Protein target per kilogram of body weight (g/kg)
    pub protein_g_per_kg: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for EnergyTargetsConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: 400,
            muscle_gain_surplus_kcal: 300,
            protein_g_per_kg: 1.6,
        }
    }
}
