use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::AgeError;
use crate::models::IntegrationProfile;

/// Confidence interval for a species' mean basal area increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub mean: f64,
    pub std_error: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence_level: f64,
    pub sample_size: u32,
    pub sampling_error_percent: f64,
}

/// Student-t confidence interval for the calibration mean BAI of a profile,
/// from its sample size and standard deviation.
pub fn mean_bai_interval(
    profile: &IntegrationProfile,
    confidence: f64,
) -> Result<ConfidenceInterval, AgeError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(AgeError::ValidationError(format!(
            "confidence level must be in (0, 1), got {confidence}"
        )));
    }
    let n = profile.sample_size;
    if n < 2 {
        return Err(AgeError::AnalysisError(format!(
            "{}: need at least 2 sampled trees, got {n}",
            profile.species
        )));
    }

    let mean = profile.mean_bai;
    let std_error = profile.std_dev / f64::from(n).sqrt();

    let df = f64::from(n - 1);
    let alpha = 1.0 - confidence;
    let t_dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| AgeError::AnalysisError(e.to_string()))?;
    let t_value = t_dist.inverse_cdf(1.0 - alpha / 2.0);

    let margin = t_value * std_error;
    let sampling_error_percent = if mean.abs() > f64::EPSILON {
        (margin / mean) * 100.0
    } else {
        0.0
    };

    Ok(ConfidenceInterval {
        mean,
        std_error,
        lower: mean - margin,
        upper: mean + margin,
        confidence_level: confidence,
        sample_size: n,
        sampling_error_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Weighting, BAI_1950_TABLE};

    fn profile(n: u32, sd: f64) -> IntegrationProfile {
        IntegrationProfile {
            species: "Test",
            mean_bai: 10.0,
            linear: 0.0,
            curvature: 0.0,
            sample_size: n,
            std_dev: sd,
            weighting: Weighting::HarmonicMean,
        }
    }

    #[test]
    fn test_interval_contains_mean() {
        let ci = mean_bai_interval(&profile(30, 3.0), 0.95).unwrap();
        assert!(ci.lower < ci.mean && ci.mean < ci.upper);
        assert!((ci.upper - ci.mean - (ci.mean - ci.lower)).abs() < 1e-9);
    }

    #[test]
    fn test_known_t_value() {
        // n = 10, df = 9, t(0.975) = 2.262; SE = 3 / sqrt(10) = 0.9487
        let ci = mean_bai_interval(&profile(10, 3.0), 0.95).unwrap();
        assert!((ci.std_error - 0.9487).abs() < 1e-3);
        assert!((ci.upper - (10.0 + 2.262 * 0.9487)).abs() < 0.01);
    }

    #[test]
    fn test_higher_confidence_wider_interval() {
        let p = profile(20, 2.0);
        let ci90 = mean_bai_interval(&p, 0.90).unwrap();
        let ci99 = mean_bai_interval(&p, 0.99).unwrap();
        assert!(ci99.upper - ci99.lower > ci90.upper - ci90.lower);
    }

    #[test]
    fn test_zero_std_dev_collapses_interval() {
        let ci = mean_bai_interval(&profile(20, 0.0), 0.95).unwrap();
        assert_eq!(ci.lower, ci.upper);
        assert_eq!(ci.sampling_error_percent, 0.0);
    }

    #[test]
    fn test_insufficient_sample() {
        let err = mean_bai_interval(&profile(1, 3.0), 0.95).unwrap_err();
        assert!(matches!(err, AgeError::AnalysisError(_)));
    }

    #[test]
    fn test_invalid_confidence() {
        assert!(mean_bai_interval(&profile(10, 3.0), 1.0).is_err());
        assert!(mean_bai_interval(&profile(10, 3.0), 0.0).is_err());
        assert!(mean_bai_interval(&profile(10, 3.0), f64::NAN).is_err());
    }

    #[test]
    fn test_builtin_profiles_have_intervals() {
        for p in BAI_1950_TABLE.profiles {
            let ci = mean_bai_interval(p, 0.95).unwrap();
            assert!(ci.sampling_error_percent > 0.0, "{}", p.species);
        }
    }
}
