use tracing::{debug, info};

use super::estimator::AgeEstimator;
use crate::error::AgeError;
use crate::models::{
    CalibrationWindow, GrowthQuery, GrowthResult, IntegrationProfile, IntegrationTable, ModelVariant,
};

/// Default cap on the number of years the integration may step back.
pub const DEFAULT_MAX_AGE: u32 = 500;

/// Outcome of a backward integration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackwardIntegration {
    pub age_years: u32,
    pub planting_year: i32,
    pub cumulative_area: f64,
}

/// Step back from `current_year` one year at a time, summing the species'
/// growth rate until the accumulated basal area reaches `target_area`.
///
/// A target of zero is met before the first step. Fails with
/// `AgeError::ModelDivergence` once `max_age` years have been summed
/// without reaching the target, and with `AgeError::ValidationError` if
/// the working year would step below `i32::MIN`.
pub fn integrate_backward(
    profile: &IntegrationProfile,
    window: CalibrationWindow,
    target_area: f64,
    current_year: i32,
    max_age: u32,
) -> Result<BackwardIntegration, AgeError> {
    let mut year = current_year;
    let mut age: u32 = 0;
    let mut cumulative = 0.0;

    while cumulative < target_area {
        if age >= max_age {
            return Err(AgeError::ModelDivergence {
                species: profile.species.to_string(),
                max_age,
                cumulative,
                target: target_area,
            });
        }
        cumulative += profile.growth_rate(year, window);
        year = year.checked_sub(1).ok_or_else(|| {
            AgeError::ValidationError(format!(
                "current year {current_year} is too far in the past to count back {} years",
                age + 1
            ))
        })?;
        age += 1;
    }

    debug!(
        species = profile.species,
        age, cumulative, target_area, "backward integration reached target"
    );
    Ok(BackwardIntegration {
        age_years: age,
        planting_year: year,
        cumulative_area: cumulative,
    })
}

/// Backward growth-curve integration over one calibration table.
#[derive(Debug, Clone, Copy)]
pub struct IntegrationModel {
    variant: ModelVariant,
    table: &'static IntegrationTable,
    current_year: i32,
    max_age: u32,
}

impl IntegrationModel {
    /// Build the model for an integration variant; `None` for the direct model.
    pub fn new(variant: ModelVariant, current_year: i32, max_age: u32) -> Option<Self> {
        let table = variant.integration_table()?;
        Some(Self {
            variant,
            table,
            current_year,
            max_age,
        })
    }
}

impl AgeEstimator for IntegrationModel {
    fn variant(&self) -> ModelVariant {
        self.variant
    }

    fn estimate(&self, query: &GrowthQuery) -> Result<GrowthResult, AgeError> {
        query.validate()?;
        let profile = self
            .table
            .find(&query.species)
            .ok_or_else(|| AgeError::UnknownSpecies(query.species.clone()))?;

        info!(table = self.table.label, species = profile.species, "integrating growth curve");
        let run = integrate_backward(
            profile,
            self.table.window,
            query.basal_area_cm2(),
            self.current_year,
            self.max_age,
        )?;

        Ok(GrowthResult {
            model: self.variant,
            species: query.species.clone(),
            circumference_cm: query.circumference_cm,
            age_years: run.age_years,
            planting_year: Some(run.planting_year),
            growth_rate: None,
            cumulative_area: Some(run.cumulative_area),
        })
    }
}
