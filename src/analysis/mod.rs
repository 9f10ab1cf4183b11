mod adjustment;
mod direct;
mod estimator;
mod integration;
mod statistics;

pub use adjustment::adjust_growth_rate;
pub use direct::DirectModel;
pub use estimator::{build_estimator, current_calendar_year, estimate_age, AgeEstimator, EstimatorSettings};
pub use integration::{integrate_backward, BackwardIntegration, IntegrationModel, DEFAULT_MAX_AGE};
pub use statistics::{mean_bai_interval, ConfidenceInterval};
