use serde::{Deserialize, Serialize};

use super::species::{IntegrationTable, BAI_1900_TABLE, BAI_1950_TABLE, DIRECT_PROFILES};

/// Selectable growth model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelVariant {
    /// Diameter-class base rate adjusted for site conditions.
    #[default]
    #[serde(rename = "direct")]
    Direct,
    /// Backward integration, 1900-1980 calibration.
    #[serde(rename = "bai-1900")]
    Bai1900,
    /// Backward integration, 1950-1980 calibration.
    #[serde(rename = "bai-1950")]
    Bai1950,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 3] = [ModelVariant::Direct, ModelVariant::Bai1900, ModelVariant::Bai1950];

    /// The integration calibration this variant uses, if any.
    pub fn integration_table(&self) -> Option<&'static IntegrationTable> {
        match self {
            ModelVariant::Direct => None,
            ModelVariant::Bai1900 => Some(&BAI_1900_TABLE),
            ModelVariant::Bai1950 => Some(&BAI_1950_TABLE),
        }
    }

    /// Species names known to this variant, in table order.
    pub fn species_names(&self) -> Vec<&'static str> {
        match self.integration_table() {
            Some(table) => table.species_names(),
            None => DIRECT_PROFILES.iter().map(|p| p.species).collect(),
        }
    }

    pub fn uses_site_conditions(&self) -> bool {
        matches!(self, ModelVariant::Direct)
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelVariant::Direct => write!(f, "direct"),
            ModelVariant::Bai1900 => write!(f, "bai-1900"),
            ModelVariant::Bai1950 => write!(f, "bai-1950"),
        }
    }
}

impl std::str::FromStr for ModelVariant {
    type Err = crate::error::AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(ModelVariant::Direct),
            "bai-1900" | "bai1900" | "1900" => Ok(ModelVariant::Bai1900),
            "bai-1950" | "bai1950" | "1950" => Ok(ModelVariant::Bai1950),
            _ => Err(crate::error::AgeError::ParseError(format!(
                "Unknown growth model: '{s}' (expected direct, bai-1900, or bai-1950)"
            ))),
        }
    }
}
