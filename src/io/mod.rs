mod config;
mod json_io;

pub use config::{load_config, parse_config, Config, IntegrationConfig, SiteConfig};
pub use json_io::{result_from_json, result_to_json};
