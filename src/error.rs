use thiserror::Error;

use crate::models::DiameterClass;

/// Errors that can occur while estimating tree age.
#[derive(Error, Debug)]
pub enum AgeError {
    #[error("Species '{0}' not found in growth rates data.")]
    UnknownSpecies(String),

    #[error("Diameter class '{class}' not found for species '{species}'.")]
    UnknownDiameterClass {
        species: String,
        class: DiameterClass,
    },

    #[error("Adjusted growth rate for species '{species}' is not positive ({rate}); age is undefined.")]
    NonPositiveGrowthRate { species: String, rate: f64 },

    #[error(
        "Growth model for species '{species}' did not reach the target basal area within {max_age} years \
         (accumulated {cumulative:.2} of {target:.2} cm²)."
    )]
    ModelDivergence {
        species: String,
        max_age: u32,
        cumulative: f64,
        target: f64,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Analysis error: {0}")]
    AnalysisError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AgeError {
    /// Whether this error is a failure of the estimate itself, reported to
    /// the user as a plain message rather than a process failure.
    pub fn is_estimation_failure(&self) -> bool {
        matches!(
            self,
            AgeError::UnknownSpecies(_)
                | AgeError::UnknownDiameterClass { .. }
                | AgeError::NonPositiveGrowthRate { .. }
                | AgeError::ModelDivergence { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_species_display() {
        let err = AgeError::UnknownSpecies("Douglas Fir".to_string());
        assert_eq!(
            err.to_string(),
            "Species 'Douglas Fir' not found in growth rates data."
        );
    }

    #[test]
    fn test_unknown_diameter_class_display() {
        let err = AgeError::UnknownDiameterClass {
            species: "Red Spruce".to_string(),
            class: DiameterClass::Large,
        };
        assert_eq!(
            err.to_string(),
            "Diameter class 'large' not found for species 'Red Spruce'."
        );
    }

    #[test]
    fn test_non_positive_rate_display() {
        let err = AgeError::NonPositiveGrowthRate {
            species: "Sugar Maple".to_string(),
            rate: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Sugar Maple"));
        assert!(msg.contains("not positive"));
    }

    #[test]
    fn test_model_divergence_display() {
        let err = AgeError::ModelDivergence {
            species: "Red maple".to_string(),
            max_age: 500,
            cumulative: 0.0,
            target: 314.159,
        };
        let msg = err.to_string();
        assert!(msg.contains("within 500 years"));
        assert!(msg.contains("314.16"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = AgeError::ValidationError("circumference must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: circumference must be positive"
        );
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing config");
        let err: AgeError = io_err.into();
        assert!(matches!(err, AgeError::Io(_)));
        assert!(err.to_string().contains("missing config"));
    }

    #[test]
    fn test_config_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("model = ").unwrap_err();
        let err: AgeError = toml_err.into();
        assert!(matches!(err, AgeError::Config(_)));
        assert!(err.to_string().starts_with("Config error"));
    }

    #[test]
    fn test_estimation_failure_kinds() {
        assert!(AgeError::UnknownSpecies("x".into()).is_estimation_failure());
        assert!(AgeError::ModelDivergence {
            species: "x".into(),
            max_age: 1,
            cumulative: 0.0,
            target: 1.0,
        }
        .is_estimation_failure());
        assert!(!AgeError::ValidationError("x".into()).is_estimation_failure());
        assert!(!AgeError::ParseError("x".into()).is_estimation_failure());
    }
}
