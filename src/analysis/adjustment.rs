use tracing::debug;

use crate::models::{SiteConditions, SoilType};

/// Scale a base growth rate for site conditions.
///
/// Multipliers compound in a fixed order: winter temperature, summer
/// temperature, elevation, known age, soil. Each covariate contributes at
/// most one tier, except age where both the >50 and >100 factors apply.
pub fn adjust_growth_rate(base_rate: f64, site: &SiteConditions) -> f64 {
    let mut rate = base_rate;

    if site.winter_temp > -5.0 {
        rate *= 1.05;
    } else if site.winter_temp < -10.0 {
        rate *= 0.95;
    }

    if site.summer_temp > 25.0 {
        rate *= 0.9;
    } else if site.summer_temp < 15.0 {
        rate *= 1.05;
    }

    if site.elevation > 800.0 {
        rate *= 0.85;
    } else if site.elevation < 400.0 {
        rate *= 1.05;
    }

    if let Some(age) = site.tree_age {
        if age > 50 {
            rate *= 0.9;
        }
        if age > 100 {
            rate *= 0.8;
        }
    }

    match site.soil_type {
        SoilType::Sandy => rate *= 0.9,
        SoilType::Rocky => rate *= 0.85,
        SoilType::Loamy => {}
    }

    debug!(base_rate, adjusted_rate = rate, "adjusted growth rate for site");
    rate
}
