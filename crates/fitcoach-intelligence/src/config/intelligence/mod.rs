// ABOUTME: Intelligence module configuration for energy targets and coaching feedback
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Intelligence Configuration Module
//!
//! # Module Structure
//!
//! - `energy` - Mifflin-St Jeor coefficients, goal calorie offsets, protein factor
//! - `recommendation` - Consistency banding thresholds and feedback messages
//!
//! Defaults reproduce the tracker's documented constants. A handful of numeric values can
//! be overridden from the environment; see [`IntelligenceConfig::load`].

pub mod energy;
pub mod error;
pub mod recommendation;

pub use energy::{BmrConfig, EnergyConfig, EnergyTargetsConfig};
pub use error::ConfigError;
pub use recommendation::{RecommendationConfig, RecommendationMessages, RecommendationThresholds};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Environment variable overriding the weight-loss deficit (kcal)
pub const ENV_WEIGHT_LOSS_DEFICIT: &str = "FITCOACH_WEIGHT_LOSS_DEFICIT_KCAL";
/// Environment variable overriding the muscle-gain surplus (kcal)
pub const ENV_MUSCLE_GAIN_SURPLUS: &str = "FITCOACH_MUSCLE_GAIN_SURPLUS_KCAL";
/// Environment variable overriding the protein factor (g/kg)
pub const ENV_PROTEIN_G_PER_KG: &str = "FITCOACH_PROTEIN_G_PER_KG";
/// Environment variable overriding the lower consistency threshold
pub const ENV_CONSISTENCY_LOW: &str = "FITCOACH_CONSISTENCY_LOW_THRESHOLD";
/// Environment variable overriding the upper consistency threshold
pub const ENV_CONSISTENCY_HIGH: &str = "FITCOACH_CONSISTENCY_HIGH_THRESHOLD";

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for maintenance calories and macro targets
    pub energy: EnergyConfig,
    /// Configuration for the recommendation engine's progress feedback
    pub recommendation: RecommendationConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the consistency bands are inverted, a calorie offset is
    /// negative, or the protein factor is outside 0.5-3.0 g/kg
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.recommendation.thresholds;
        if thresholds.consistency_low_threshold > thresholds.consistency_high_threshold {
            return Err(ConfigError::InvalidRange(
                "consistency_low_threshold must be <= consistency_high_threshold",
            ));
        }

        let targets = &self.energy.targets;
        if targets.weight_loss_deficit_kcal < 0 || targets.muscle_gain_surplus_kcal < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie deficit and surplus must not be negative",
            ));
        }

        if !(0.5..=3.0).contains(&targets.protein_g_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein target must be between 0.5 and 3.0 g/kg",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            ENV_WEIGHT_LOSS_DEFICIT,
            &mut self.energy.targets.weight_loss_deficit_kcal,
        )?;
        Self::apply_env_var(
            ENV_MUSCLE_GAIN_SURPLUS,
            &mut self.energy.targets.muscle_gain_surplus_kcal,
        )?;
        Self::apply_env_var(
            ENV_PROTEIN_G_PER_KG,
            &mut self.energy.targets.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            ENV_CONSISTENCY_LOW,
            &mut self.recommendation.thresholds.consistency_low_threshold,
        )?;
        Self::apply_env_var(
            ENV_CONSISTENCY_HIGH,
            &mut self.recommendation.thresholds.consistency_high_threshold,
        )?;
        Ok(self)
    }
}
