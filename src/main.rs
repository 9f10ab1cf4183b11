use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tree_age_estimator::{
    analysis::{estimate_age, EstimatorSettings},
    io::{self, Config},
    models::{GrowthQuery, ModelVariant, SiteConditions, SoilType},
    visualization::{print_estimate, print_species_table},
};

#[derive(Parser)]
#[command(
    name = "tree-age",
    about = "Tree Age Estimator - estimate the age of a tree from its species, circumference, and site conditions",
    version,
    author
)]
struct Cli {
    /// Species of the tree (e.g. 'Sugar Maple'; integration models use names like 'Red maple')
    #[arg(required_unless_present = "list_species")]
    species: Option<String>,

    /// Circumference of the tree in centimeters
    #[arg(required_unless_present = "list_species", allow_negative_numbers = true)]
    circumference: Option<f64>,

    /// Growth model: direct, bai-1900, or bai-1950 [default: direct]
    #[arg(short, long)]
    model: Option<ModelVariant>,

    /// Average winter temperature in °C [default: -2]
    #[arg(long, alias = "winter_temp", allow_negative_numbers = true)]
    winter_temp: Option<f64>,

    /// Average summer temperature in °C [default: 21]
    #[arg(long, alias = "summer_temp", allow_negative_numbers = true)]
    summer_temp: Option<f64>,

    /// Elevation in meters [default: 56]
    #[arg(long, allow_negative_numbers = true)]
    elevation: Option<f64>,

    /// Soil type around the tree: loamy, sandy, or rocky [default: loamy]
    #[arg(long, alias = "soil_type")]
    soil_type: Option<SoilType>,

    /// Known or estimated age of the tree, if applicable (affects growth rate adjustment)
    #[arg(long, alias = "tree_age")]
    tree_age: Option<u32>,

    /// Calendar year the integration models count back from [default: this year]
    #[arg(long)]
    current_year: Option<i32>,

    /// Maximum age in years before the integration models give up [default: 500]
    #[arg(long)]
    max_age: Option<u32>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the estimate as JSON
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// List the species known to the selected model and exit
    #[arg(long)]
    list_species: bool,

    /// Confidence level for the mean BAI interval in the species list (0.0-1.0)
    #[arg(long, default_value = "0.95")]
    confidence: f64,
}

impl Cli {
    /// Site conditions: command-line flags over the config file's values.
    fn site_conditions(&self, base: SiteConditions) -> SiteConditions {
        SiteConditions {
            winter_temp: self.winter_temp.unwrap_or(base.winter_temp),
            summer_temp: self.summer_temp.unwrap_or(base.summer_temp),
            elevation: self.elevation.unwrap_or(base.elevation),
            tree_age: self.tree_age.or(base.tree_age),
            soil_type: self.soil_type.unwrap_or(base.soil_type),
        }
    }

    fn estimator_settings(&self, base: EstimatorSettings) -> EstimatorSettings {
        EstimatorSettings {
            max_age: self.max_age.unwrap_or(base.max_age),
            current_year: self.current_year.or(base.current_year),
        }
    }

    fn has_site_flags(&self) -> bool {
        self.winter_temp.is_some()
            || self.summer_temp.is_some()
            || self.elevation.is_some()
            || self.soil_type.is_some()
            || self.tree_age.is_some()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => io::load_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => Config::default(),
    };
    let variant = cli.model.unwrap_or_else(|| config.model_variant());

    if cli.list_species {
        print_species_table(variant, cli.confidence)?;
        return Ok(());
    }

    let (Some(species), Some(circumference)) = (cli.species.clone(), cli.circumference) else {
        anyhow::bail!("Both SPECIES and CIRCUMFERENCE are required");
    };

    if !variant.uses_site_conditions() && cli.has_site_flags() {
        warn!(model = %variant, "site condition flags do not affect this model");
    }

    let query = GrowthQuery::new(species, circumference)
        .with_site(cli.site_conditions(config.site_conditions()));
    let settings = cli.estimator_settings(config.estimator_settings());

    match estimate_age(variant, &query, &settings) {
        Ok(result) => {
            if cli.json {
                println!("{}", io::result_to_json(&result, cli.pretty)?);
            } else {
                print_estimate(&result);
            }
        }
        // Estimation failures are reported as a message, not a crash
        Err(e) if e.is_estimation_failure() => println!("{e}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
