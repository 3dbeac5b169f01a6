mod app;
mod config;
mod http;
mod metrics;
mod validation;
mod verb;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use metrics::MetricsError;
pub use validation::ValidationError;
pub use verb::UnsupportedVerbError;
