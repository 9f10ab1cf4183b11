use serde::Serialize;

use super::diameter::DiameterClass;

/// Base growth rates for one species in the direct model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DirectProfile {
    /// Species name, matched case-sensitively
    pub species: &'static str,
    /// Basal area increment in cm²/year, per diameter class
    pub rates: &'static [(DiameterClass, f64)],
}

impl DirectProfile {
    /// Base growth rate for a diameter class, if the table has one.
    pub fn rate_for(&self, class: DiameterClass) -> Option<f64> {
        self.rates
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, rate)| *rate)
    }
}

/// How the weighting factor `W` of an integration profile is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Weighting {
    /// Harmonic-mean average of `1 / mean_bai` over the `n` sampled trees.
    HarmonicMean,
    /// Literal weight fixed at calibration time.
    Fixed(f64),
}

impl Weighting {
    /// Resolve the weighting factor for a profile.
    pub fn factor(&self, mean_bai: f64, sample_size: u32) -> f64 {
        match self {
            Weighting::HarmonicMean => {
                if mean_bai <= 0.0 {
                    return 0.0;
                }
                let n = sample_size.max(1);
                let sum: f64 = (0..n).map(|_| 1.0 / mean_bai).sum();
                sum / f64::from(n)
            }
            Weighting::Fixed(w) => *w,
        }
    }
}

/// Inclusive year range a growth-rate polynomial was fitted over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalibrationWindow {
    pub start: i32,
    pub end: i32,
}

impl CalibrationWindow {
    /// Clamp a year into the window; years outside reuse the nearest boundary.
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.start, self.end)
    }
}

/// Year-dependent growth curve for one species in the integration models.
///
/// `rate(year) = max(0, mean_bai + W * (linear * t + curvature * t²))`
/// where `t` is the clamped year minus the window start.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IntegrationProfile {
    pub species: &'static str,
    /// Mean basal area increment in cm²/year
    pub mean_bai: f64,
    pub linear: f64,
    pub curvature: f64,
    /// Sample size the weighting and confidence interval are computed from
    pub sample_size: u32,
    /// Standard deviation of BAI in cm²/year
    pub std_dev: f64,
    pub weighting: Weighting,
}

impl IntegrationProfile {
    pub fn weighting_factor(&self) -> f64 {
        self.weighting.factor(self.mean_bai, self.sample_size)
    }

    /// Growth rate in cm²/year for a calendar year, floored at zero.
    pub fn growth_rate(&self, year: i32, window: CalibrationWindow) -> f64 {
        let t = f64::from(window.clamp(year) - window.start);
        let rate = self.mean_bai + self.weighting_factor() * (self.linear * t + self.curvature * t * t);
        // NaN from degenerate coefficients counts as no growth
        if rate.is_nan() {
            0.0
        } else {
            rate.max(0.0)
        }
    }
}

/// A labeled calibration of the integration model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IntegrationTable {
    pub label: &'static str,
    pub window: CalibrationWindow,
    pub profiles: &'static [IntegrationProfile],
}

impl IntegrationTable {
    pub fn find(&self, species: &str) -> Option<&IntegrationProfile> {
        self.profiles.iter().find(|p| p.species == species)
    }

    pub fn species_names(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.species).collect()
    }
}

/// Look up a direct profile by exact species name.
pub fn find_direct_profile<'a>(profiles: &'a [DirectProfile], species: &str) -> Option<&'a DirectProfile> {
    profiles.iter().find(|p| p.species == species)
}

/// Base basal area increments (cm²/year) by diameter class.
pub static DIRECT_PROFILES: &[DirectProfile] = &[
    DirectProfile {
        species: "Red Spruce",
        rates: &[
            (DiameterClass::Small, 1.5),
            (DiameterClass::Medium, 2.5),
            (DiameterClass::Large, 1.8),
        ],
    },
    DirectProfile {
        species: "Sugar Maple",
        rates: &[
            (DiameterClass::Small, 10.0),
            (DiameterClass::Medium, 11.0),
            (DiameterClass::Large, 9.0),
        ],
    },
    DirectProfile {
        species: "Yellow Birch",
        rates: &[
            (DiameterClass::Small, 10.5),
            (DiameterClass::Medium, 11.5),
            (DiameterClass::Large, 12.0),
        ],
    },
    DirectProfile {
        species: "American Beech",
        rates: &[
            (DiameterClass::Small, 9.0),
            (DiameterClass::Medium, 9.5),
            (DiameterClass::Large, 10.0),
        ],
    },
    DirectProfile {
        species: "Eastern Hemlock",
        rates: &[
            (DiameterClass::Small, 11.0),
            (DiameterClass::Medium, 12.0),
            (DiameterClass::Large, 13.0),
        ],
    },
    DirectProfile {
        species: "Eastern White Pine",
        rates: &[
            (DiameterClass::Small, 17.0),
            (DiameterClass::Medium, 19.0),
            (DiameterClass::Large, 22.0),
        ],
    },
    DirectProfile {
        species: "Northern Red Oak",
        rates: &[
            (DiameterClass::Small, 10.0),
            (DiameterClass::Medium, 12.0),
            (DiameterClass::Large, 13.0),
        ],
    },
    DirectProfile {
        species: "Balsam Fir",
        rates: &[
            (DiameterClass::Small, 9.0),
            (DiameterClass::Medium, 10.0),
            (DiameterClass::Large, 14.0),
        ],
    },
    DirectProfile {
        species: "White Ash",
        rates: &[
            (DiameterClass::Small, 11.0),
            (DiameterClass::Medium, 12.0),
            (DiameterClass::Large, 13.0),
        ],
    },
    DirectProfile {
        species: "Red Maple",
        rates: &[
            (DiameterClass::Small, 9.0),
            (DiameterClass::Medium, 10.0),
            (DiameterClass::Large, 11.0),
        ],
    },
];

/// Early calibration (1900-1980). Weights are the harmonic mean of the
/// per-tree `1 / mean_bai` terms.
///
/// The coefficients are illustrative placeholders, not a published
/// calibration. Replace them with fitted values before relying on ages or
/// the confidence intervals derived from them.
pub static BAI_1900_TABLE: IntegrationTable = IntegrationTable {
    label: "BAI calibration 1900-1980 (harmonic-mean weights, illustrative coefficients)",
    window: CalibrationWindow {
        start: 1900,
        end: 1980,
    },
    profiles: &[
        IntegrationProfile {
            species: "Red maple",
            mean_bai: 10.4,
            linear: 0.62,
            curvature: -0.0041,
            sample_size: 48,
            std_dev: 3.1,
            weighting: Weighting::HarmonicMean,
        },
        IntegrationProfile {
            species: "Sugar maple",
            mean_bai: 11.2,
            linear: 0.48,
            curvature: -0.0032,
            sample_size: 52,
            std_dev: 3.4,
            weighting: Weighting::HarmonicMean,
        },
        IntegrationProfile {
            species: "Yellow birch",
            mean_bai: 11.8,
            linear: 0.55,
            curvature: -0.0047,
            sample_size: 37,
            std_dev: 3.9,
            weighting: Weighting::HarmonicMean,
        },
        IntegrationProfile {
            species: "American beech",
            mean_bai: 9.6,
            linear: 0.31,
            curvature: -0.0019,
            sample_size: 41,
            std_dev: 2.8,
            weighting: Weighting::HarmonicMean,
        },
        IntegrationProfile {
            species: "Eastern hemlock",
            mean_bai: 12.4,
            linear: 0.44,
            curvature: -0.0025,
            sample_size: 45,
            std_dev: 4.2,
            weighting: Weighting::HarmonicMean,
        },
        IntegrationProfile {
            species: "Red spruce",
            mean_bai: 2.1,
            linear: 0.09,
            curvature: -0.0009,
            sample_size: 33,
            std_dev: 0.9,
            weighting: Weighting::HarmonicMean,
        },
        IntegrationProfile {
            species: "Balsam fir",
            mean_bai: 10.1,
            linear: 0.71,
            curvature: -0.0079,
            sample_size: 29,
            std_dev: 3.6,
            weighting: Weighting::HarmonicMean,
        },
    ],
};

/// Later calibration (1950-1980) with weights revised per species.
///
/// Illustrative placeholder coefficients, like [`BAI_1900_TABLE`].
pub static BAI_1950_TABLE: IntegrationTable = IntegrationTable {
    label: "BAI calibration 1950-1980 (fixed weights, illustrative coefficients)",
    window: CalibrationWindow {
        start: 1950,
        end: 1980,
    },
    profiles: &[
        IntegrationProfile {
            species: "Red maple",
            mean_bai: 9.8,
            linear: 0.85,
            curvature: -0.011,
            sample_size: 61,
            std_dev: 2.9,
            weighting: Weighting::Fixed(0.087),
        },
        IntegrationProfile {
            species: "Sugar maple",
            mean_bai: 10.9,
            linear: 0.66,
            curvature: -0.0094,
            sample_size: 58,
            std_dev: 3.2,
            weighting: Weighting::Fixed(0.081),
        },
        IntegrationProfile {
            species: "Yellow birch",
            mean_bai: 11.5,
            linear: 0.74,
            curvature: -0.012,
            sample_size: 40,
            std_dev: 3.7,
            weighting: Weighting::Fixed(0.079),
        },
        IntegrationProfile {
            species: "American beech",
            mean_bai: 9.1,
            linear: 0.42,
            curvature: -0.0061,
            sample_size: 47,
            std_dev: 2.6,
            weighting: Weighting::Fixed(0.102),
        },
        IntegrationProfile {
            species: "Eastern hemlock",
            mean_bai: 12.1,
            linear: 0.58,
            curvature: -0.0077,
            sample_size: 50,
            std_dev: 4.0,
            weighting: Weighting::Fixed(0.074),
        },
        IntegrationProfile {
            species: "Red spruce",
            mean_bai: 2.4,
            linear: 0.12,
            curvature: -0.0021,
            sample_size: 36,
            std_dev: 1.0,
            weighting: Weighting::Fixed(0.35),
        },
        IntegrationProfile {
            species: "Eastern white pine",
            mean_bai: 18.6,
            linear: 1.10,
            curvature: -0.018,
            sample_size: 44,
            std_dev: 5.1,
            weighting: Weighting::Fixed(0.052),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_direct_profile_exact_match() {
        let profile = find_direct_profile(DIRECT_PROFILES, "Sugar Maple").unwrap();
        assert_eq!(profile.rate_for(DiameterClass::Medium), Some(11.0));
    }

    #[test]
    fn test_find_direct_profile_is_case_sensitive() {
        assert!(find_direct_profile(DIRECT_PROFILES, "sugar maple").is_none());
        assert!(find_direct_profile(DIRECT_PROFILES, "Douglas Fir").is_none());
    }

    #[test]
    fn test_direct_table_is_complete() {
        for profile in DIRECT_PROFILES {
            for class in [DiameterClass::Small, DiameterClass::Medium, DiameterClass::Large] {
                assert!(
                    profile.rate_for(class).map_or(false, |r| r > 0.0),
                    "{} missing positive {class} rate",
                    profile.species
                );
            }
        }
    }

    #[test]
    fn test_rate_for_missing_class() {
        let profile = DirectProfile {
            species: "Partial",
            rates: &[(DiameterClass::Small, 4.0)],
        };
        assert_eq!(profile.rate_for(DiameterClass::Small), Some(4.0));
        assert_eq!(profile.rate_for(DiameterClass::Large), None);
    }

    #[test]
    fn test_harmonic_weight_reduces_to_reciprocal_mean() {
        let w = Weighting::HarmonicMean.factor(10.4, 48);
        assert!((w - 1.0 / 10.4).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_weight_degenerate_inputs() {
        assert_eq!(Weighting::HarmonicMean.factor(0.0, 10), 0.0);
        assert!((Weighting::HarmonicMean.factor(4.0, 0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_weight_ignores_mean() {
        assert_eq!(Weighting::Fixed(0.087).factor(9.8, 61), 0.087);
    }

    #[test]
    fn test_late_weights_differ_from_harmonic_reduction() {
        for profile in BAI_1950_TABLE.profiles {
            let harmonic = Weighting::HarmonicMean.factor(profile.mean_bai, profile.sample_size);
            assert!((profile.weighting_factor() - harmonic).abs() > 1e-4);
        }
    }

    #[test]
    fn test_window_clamp() {
        let window = CalibrationWindow {
            start: 1900,
            end: 1980,
        };
        assert_eq!(window.clamp(1850), 1900);
        assert_eq!(window.clamp(1942), 1942);
        assert_eq!(window.clamp(2026), 1980);
    }

    #[test]
    fn test_growth_rate_reuses_boundary_years() {
        let table = &BAI_1900_TABLE;
        let profile = table.find("Red maple").unwrap();
        let at_start = profile.growth_rate(1900, table.window);
        assert_eq!(profile.growth_rate(1899, table.window), at_start);
        assert_eq!(profile.growth_rate(1700, table.window), at_start);
        let at_end = profile.growth_rate(1980, table.window);
        assert_eq!(profile.growth_rate(2026, table.window), at_end);
    }

    #[test]
    fn test_growth_rate_at_window_start_is_mean_bai() {
        let table = &BAI_1950_TABLE;
        let profile = table.find("Sugar maple").unwrap();
        assert_eq!(profile.growth_rate(1950, table.window), profile.mean_bai);
    }

    #[test]
    fn test_growth_rate_floored_at_zero() {
        let profile = IntegrationProfile {
            species: "Declining",
            mean_bai: 1.0,
            linear: -1.0,
            curvature: 0.0,
            sample_size: 10,
            std_dev: 0.5,
            weighting: Weighting::Fixed(1.0),
        };
        let window = CalibrationWindow {
            start: 1950,
            end: 1980,
        };
        assert_eq!(profile.growth_rate(1980, window), 0.0);
    }

    #[test]
    fn test_builtin_rates_positive_across_windows() {
        for table in [&BAI_1900_TABLE, &BAI_1950_TABLE] {
            for profile in table.profiles {
                for year in table.window.start..=table.window.end {
                    assert!(
                        profile.growth_rate(year, table.window) > 0.0,
                        "{} ({}) non-positive in {year}",
                        profile.species,
                        table.label
                    );
                }
            }
        }
    }

    #[test]
    fn test_species_names_in_table_order() {
        let names = BAI_1950_TABLE.species_names();
        assert_eq!(names.first(), Some(&"Red maple"));
        assert!(names.contains(&"Eastern white pine"));
        assert!(!BAI_1900_TABLE.species_names().contains(&"Eastern white pine"));
    }

    #[test]
    fn test_integration_tables_are_labeled_illustrative() {
        for table in [&BAI_1900_TABLE, &BAI_1950_TABLE] {
            assert!(table.label.contains("illustrative"));
        }
    }
}
