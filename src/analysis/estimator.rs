use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::direct::DirectModel;
use super::integration::{IntegrationModel, DEFAULT_MAX_AGE};
use crate::error::AgeError;
use crate::models::{GrowthQuery, GrowthResult, ModelVariant};

/// A growth model that turns a query into an age estimate.
pub trait AgeEstimator {
    fn variant(&self) -> ModelVariant;

    fn estimate(&self, query: &GrowthQuery) -> Result<GrowthResult, AgeError>;
}

/// Knobs shared by the integration models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    /// Upper bound on the number of years stepped back
    pub max_age: u32,
    /// Calendar year the integration starts from; the system clock when `None`
    pub current_year: Option<i32>,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            current_year: None,
        }
    }
}

impl EstimatorSettings {
    /// Validate settings. Returns `AgeError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), AgeError> {
        if self.max_age == 0 {
            return Err(AgeError::ValidationError(
                "max_age must be at least 1 year".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolved_year(&self) -> i32 {
        self.current_year.unwrap_or_else(current_calendar_year)
    }
}

/// The current calendar year in local time.
pub fn current_calendar_year() -> i32 {
    chrono::Local::now().year()
}

/// Build the estimator for a model variant.
pub fn build_estimator(
    variant: ModelVariant,
    settings: &EstimatorSettings,
) -> Result<Box<dyn AgeEstimator>, AgeError> {
    settings.validate()?;
    match IntegrationModel::new(variant, settings.resolved_year(), settings.max_age) {
        Some(model) => Ok(Box::new(model)),
        None => Ok(Box::new(DirectModel::default())),
    }
}

/// Estimate a tree's age with the given model variant.
pub fn estimate_age(
    variant: ModelVariant,
    query: &GrowthQuery,
    settings: &EstimatorSettings,
) -> Result<GrowthResult, AgeError> {
    if !variant.uses_site_conditions() {
        debug!(model = %variant, "site conditions are accepted but not used by this model");
    }
    build_estimator(variant, settings)?.estimate(query)
}
