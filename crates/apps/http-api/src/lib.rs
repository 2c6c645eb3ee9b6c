pub mod config;
pub mod response;

pub use config::{ApiConfig, ConfigError, Environment};
pub use response::{status_for, ApiError, ErrorBody};
