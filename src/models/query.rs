use serde::{Deserialize, Serialize};

use super::site::SiteConditions;
use super::variant::ModelVariant;

/// A single age estimation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthQuery {
    /// Species name, matched exactly against the active table
    pub species: String,
    /// Trunk circumference at breast height in centimeters
    pub circumference_cm: f64,
    pub site: SiteConditions,
}

impl GrowthQuery {
    pub fn new(species: impl Into<String>, circumference_cm: f64) -> Self {
        Self {
            species: species.into(),
            circumference_cm,
            site: SiteConditions::default(),
        }
    }

    pub fn with_site(mut self, site: SiteConditions) -> Self {
        self.site = site;
        self
    }

    /// Radius in cm, from `C = 2πr`.
    pub fn radius_cm(&self) -> f64 {
        self.circumference_cm / (2.0 * std::f64::consts::PI)
    }

    pub fn diameter_cm(&self) -> f64 {
        2.0 * self.radius_cm()
    }

    /// Basal area in cm².
    pub fn basal_area_cm2(&self) -> f64 {
        std::f64::consts::PI * self.radius_cm().powi(2)
    }

    /// Validate the query inputs. Returns `AgeError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), crate::error::AgeError> {
        if !self.circumference_cm.is_finite() || self.circumference_cm <= 0.0 {
            return Err(crate::error::AgeError::ValidationError(format!(
                "circumference must be a positive number of centimeters, got {}",
                self.circumference_cm
            )));
        }
        Ok(())
    }
}

/// Outcome of an age estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub model: ModelVariant,
    pub species: String,
    pub circumference_cm: f64,
    /// Estimated age in whole years
    pub age_years: u32,
    /// Estimated planting year (integration models only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting_year: Option<i32>,
    /// Adjusted rate the basal area was divided by (direct model only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    /// Basal area accumulated when the integration stopped (integration models only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_area: Option<f64>,
}
