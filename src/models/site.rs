use serde::{Deserialize, Serialize};

/// Soil type around the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    #[default]
    Loamy,
    Sandy,
    Rocky,
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Loamy => write!(f, "loamy"),
            SoilType::Sandy => write!(f, "sandy"),
            SoilType::Rocky => write!(f, "rocky"),
        }
    }
}

impl std::str::FromStr for SoilType {
    type Err = crate::error::AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loamy" => Ok(SoilType::Loamy),
            "sandy" => Ok(SoilType::Sandy),
            "rocky" => Ok(SoilType::Rocky),
            _ => Err(crate::error::AgeError::ParseError(format!(
                "Unknown soil type: '{s}' (expected loamy, sandy, or rocky)"
            ))),
        }
    }
}

/// Environmental covariates for the site where the tree grows.
///
/// Only the direct model reads these; the integration models accept them
/// and ignore them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConditions {
    /// Average winter temperature in °C
    pub winter_temp: f64,
    /// Average summer temperature in °C
    pub summer_temp: f64,
    /// Elevation in meters
    pub elevation: f64,
    /// Known or estimated age in years, if any
    pub tree_age: Option<u32>,
    pub soil_type: SoilType,
}

impl Default for SiteConditions {
    fn default() -> Self {
        Self {
            winter_temp: -2.0,
            summer_temp: 21.0,
            elevation: 56.0,
            tree_age: None,
            soil_type: SoilType::Loamy,
        }
    }
}
