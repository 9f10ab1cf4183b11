use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{EstimatorSettings, DEFAULT_MAX_AGE};
use crate::error::AgeError;
use crate::models::{ModelVariant, SiteConditions, SoilType};

/// Settings read from a TOML file. Every key is optional; missing keys fall
/// back to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub model: Option<ModelVariant>,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub integration: IntegrationConfig,
}

/// `[site]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub winter_temp: Option<f64>,
    pub summer_temp: Option<f64>,
    pub elevation: Option<f64>,
    pub soil_type: Option<SoilType>,
    pub tree_age: Option<u32>,
}

/// `[integration]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationConfig {
    pub max_age: Option<u32>,
    pub current_year: Option<i32>,
}

impl Config {
    /// Site conditions with unset keys taken from `SiteConditions::default()`.
    pub fn site_conditions(&self) -> SiteConditions {
        let defaults = SiteConditions::default();
        SiteConditions {
            winter_temp: self.site.winter_temp.unwrap_or(defaults.winter_temp),
            summer_temp: self.site.summer_temp.unwrap_or(defaults.summer_temp),
            elevation: self.site.elevation.unwrap_or(defaults.elevation),
            tree_age: self.site.tree_age.or(defaults.tree_age),
            soil_type: self.site.soil_type.unwrap_or(defaults.soil_type),
        }
    }

    pub fn estimator_settings(&self) -> EstimatorSettings {
        EstimatorSettings {
            max_age: self.integration.max_age.unwrap_or(DEFAULT_MAX_AGE),
            current_year: self.integration.current_year,
        }
    }

    pub fn model_variant(&self) -> ModelVariant {
        self.model.unwrap_or_default()
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config, AgeError> {
    Ok(toml::from_str(content)?)
}

/// Read configuration from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, AgeError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}
