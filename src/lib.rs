pub mod analysis;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use analysis::{estimate_age, AgeEstimator, DirectModel, EstimatorSettings, IntegrationModel};
pub use error::AgeError;
pub use models::{DiameterClass, GrowthQuery, GrowthResult, ModelVariant, SiteConditions, SoilType};
