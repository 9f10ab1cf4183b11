use tracing::debug;

use super::adjustment::adjust_growth_rate;
use super::estimator::AgeEstimator;
use crate::error::AgeError;
use crate::models::{
    find_direct_profile, DiameterClass, DirectProfile, GrowthQuery, GrowthResult, ModelVariant,
    DIRECT_PROFILES,
};

/// Direct model: `age = r² / adjusted_rate`.
#[derive(Debug, Clone, Copy)]
pub struct DirectModel<'a> {
    profiles: &'a [DirectProfile],
}

impl Default for DirectModel<'static> {
    fn default() -> Self {
        Self {
            profiles: DIRECT_PROFILES,
        }
    }
}

impl<'a> DirectModel<'a> {
    /// Use a custom rate table instead of the built-in one.
    pub fn with_profiles(profiles: &'a [DirectProfile]) -> Self {
        Self { profiles }
    }

    /// Adjusted growth rate for a query, in cm²/year.
    pub fn adjusted_rate(&self, query: &GrowthQuery) -> Result<f64, AgeError> {
        let profile = find_direct_profile(self.profiles, &query.species)
            .ok_or_else(|| AgeError::UnknownSpecies(query.species.clone()))?;

        let class = DiameterClass::from_diameter(query.diameter_cm());
        let base_rate = profile
            .rate_for(class)
            .ok_or_else(|| AgeError::UnknownDiameterClass {
                species: query.species.clone(),
                class,
            })?;
        debug!(species = %query.species, %class, base_rate, "selected base growth rate");

        Ok(adjust_growth_rate(base_rate, &query.site))
    }
}

impl AgeEstimator for DirectModel<'_> {
    fn variant(&self) -> ModelVariant {
        ModelVariant::Direct
    }

    fn estimate(&self, query: &GrowthQuery) -> Result<GrowthResult, AgeError> {
        query.validate()?;
        let rate = self.adjusted_rate(query)?;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(AgeError::NonPositiveGrowthRate {
                species: query.species.clone(),
                rate,
            });
        }

        let age = (query.radius_cm().powi(2) / rate).floor();
        if !(age.is_finite() && age <= f64::from(u32::MAX)) {
            return Err(AgeError::ValidationError(format!(
                "circumference {} cm is too large to estimate an age for",
                query.circumference_cm
            )));
        }
        Ok(GrowthResult {
            model: ModelVariant::Direct,
            species: query.species.clone(),
            circumference_cm: query.circumference_cm,
            age_years: age as u32,
            planting_year: None,
            growth_rate: Some(rate),
            cumulative_area: None,
        })
    }
}
