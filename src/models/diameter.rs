use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the small diameter class, in cm.
pub const SMALL_CLASS_LIMIT_CM: f64 = 20.0;
/// Upper bound (exclusive) of the medium diameter class, in cm.
pub const MEDIUM_CLASS_LIMIT_CM: f64 = 40.0;

/// Coarse diameter bucket used to select a base growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiameterClass {
    Small,
    Medium,
    Large,
}

impl DiameterClass {
    /// Classify a trunk diameter in centimeters.
    ///
    /// Small is `< 20`, medium is `20..40`, large is everything else.
    pub fn from_diameter(diameter_cm: f64) -> Self {
        if diameter_cm < SMALL_CLASS_LIMIT_CM {
            DiameterClass::Small
        } else if diameter_cm < MEDIUM_CLASS_LIMIT_CM {
            DiameterClass::Medium
        } else {
            DiameterClass::Large
        }
    }
}

impl std::fmt::Display for DiameterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiameterClass::Small => write!(f, "small"),
            DiameterClass::Medium => write!(f, "medium"),
            DiameterClass::Large => write!(f, "large"),
        }
    }
}

impl std::str::FromStr for DiameterClass {
    type Err = crate::error::AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" | "s" => Ok(DiameterClass::Small),
            "medium" | "m" => Ok(DiameterClass::Medium),
            "large" | "l" => Ok(DiameterClass::Large),
            _ => Err(crate::error::AgeError::ParseError(format!(
                "Unknown diameter class: '{s}'"
            ))),
        }
    }
}
