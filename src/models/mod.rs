mod diameter;
mod query;
mod site;
mod species;
mod variant;

pub use diameter::{DiameterClass, MEDIUM_CLASS_LIMIT_CM, SMALL_CLASS_LIMIT_CM};
pub use query::{GrowthQuery, GrowthResult};
pub use site::{SiteConditions, SoilType};
pub use species::{
    find_direct_profile, CalibrationWindow, DirectProfile, IntegrationProfile, IntegrationTable,
    Weighting, BAI_1900_TABLE, BAI_1950_TABLE, DIRECT_PROFILES,
};
pub use variant::ModelVariant;
