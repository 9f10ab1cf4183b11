use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::analysis::mean_bai_interval;
use crate::error::AgeError;
use crate::models::{DiameterClass, GrowthResult, IntegrationTable, ModelVariant, DIRECT_PROFILES};

/// Format an estimate as the human-readable result lines.
pub fn format_estimate(result: &GrowthResult) -> String {
    let mut output = format!(
        "The estimated age of the {} tree is approximately {} years.",
        result.species, result.age_years
    );
    if let Some(year) = result.planting_year {
        output.push_str(&format!("\nEstimated planting year: {year}."));
    }
    output
}

/// Print an estimate.
pub fn print_estimate(result: &GrowthResult) {
    println!("{}", format_estimate(result).bold());
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_string(), |r| format!("{r:.1}"))
}

fn direct_table() -> Table {
    let mut table = new_table(vec!["Species", "Small (<20 cm)", "Medium (20-40 cm)", "Large (>=40 cm)"]);
    for profile in DIRECT_PROFILES {
        table.add_row(vec![
            Cell::new(profile.species),
            Cell::new(format_rate(profile.rate_for(DiameterClass::Small))),
            Cell::new(format_rate(profile.rate_for(DiameterClass::Medium))),
            Cell::new(format_rate(profile.rate_for(DiameterClass::Large))),
        ]);
    }
    table
}

fn integration_table(calibration: &IntegrationTable, confidence: f64) -> Result<Table, AgeError> {
    let ci_header = format!("{:.0}% CI", confidence * 100.0);
    let mut table = new_table(vec![
        "Species",
        "Mean BAI",
        "Linear",
        "Curvature",
        "W",
        "n",
        "SD",
        ci_header.as_str(),
    ]);
    for profile in calibration.profiles {
        let ci = mean_bai_interval(profile, confidence)?;
        table.add_row(vec![
            Cell::new(profile.species),
            Cell::new(format!("{:.2}", profile.mean_bai)),
            Cell::new(format!("{:.4}", profile.linear)),
            Cell::new(format!("{:.4}", profile.curvature)),
            Cell::new(format!("{:.4}", profile.weighting_factor())),
            Cell::new(profile.sample_size),
            Cell::new(format!("{:.2}", profile.std_dev)),
            Cell::new(format!("{:.2} - {:.2}", ci.lower, ci.upper)),
        ]);
    }
    Ok(table)
}

/// Format the species catalogue of a model variant as a string.
///
/// Integration variants include a confidence interval on mean BAI at the
/// given level.
pub fn format_species_table(variant: ModelVariant, confidence: f64) -> Result<String, AgeError> {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("Species Catalogue ({variant})").bold().green()
    ));

    let table = match variant.integration_table() {
        Some(calibration) => {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "{} | years {}-{}; growth in cm²/year",
                    calibration.label, calibration.window.start, calibration.window.end
                )
                .dimmed()
            ));
            integration_table(calibration, confidence)?
        }
        None => {
            output.push_str(&format!("{}\n", "Base growth in cm²/year by diameter class".dimmed()));
            direct_table()
        }
    };
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{table}\n"));
    Ok(output)
}

/// Print the species catalogue of a model variant.
pub fn print_species_table(variant: ModelVariant, confidence: f64) -> Result<(), AgeError> {
    print!("{}", format_species_table(variant, confidence)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_result() -> GrowthResult {
        GrowthResult {
            model: ModelVariant::Direct,
            species: "Sugar Maple".to_string(),
            circumference_cm: 63.0,
            age_years: 8,
            planting_year: None,
            growth_rate: Some(11.55),
            cumulative_area: None,
        }
    }

    #[test]
    fn test_format_direct_estimate() {
        assert_eq!(
            format_estimate(&direct_result()),
            "The estimated age of the Sugar Maple tree is approximately 8 years."
        );
    }

    #[test]
    fn test_format_integration_estimate_has_planting_year() {
        let result = GrowthResult {
            model: ModelVariant::Bai1950,
            species: "Red maple".to_string(),
            circumference_cm: 62.8,
            age_years: 29,
            planting_year: Some(1995),
            growth_rate: None,
            cumulative_area: Some(320.0),
        };
        let text = format_estimate(&result);
        assert!(text.contains("approximately 29 years"));
        assert!(text.ends_with("Estimated planting year: 1995."));
    }

    #[test]
    fn test_direct_species_table() {
        let text = format_species_table(ModelVariant::Direct, 0.95).unwrap();
        assert!(text.contains("Species Catalogue"));
        assert!(text.contains("Eastern White Pine"));
        assert!(text.contains("22.0"));
    }

    #[test]
    fn test_integration_species_table() {
        let text = format_species_table(ModelVariant::Bai1900, 0.95).unwrap();
        assert!(text.contains("Red maple"));
        assert!(text.contains("95% CI"));
        assert!(text.contains("1900-1980"));
    }

    #[test]
    fn test_species_table_invalid_confidence() {
        assert!(format_species_table(ModelVariant::Bai1950, 1.5).is_err());
        // The direct catalogue has no interval column
        assert!(format_species_table(ModelVariant::Direct, 1.5).is_ok());
    }

    #[test]
    fn test_format_rate_missing() {
        assert_eq!(format_rate(None), "-");
        assert_eq!(format_rate(Some(9.5)), "9.5");
    }
}
