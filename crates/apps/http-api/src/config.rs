use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid APP_ENV value: {0}")]
    InvalidEnvironment(String),
}

/// Deployment environment the API runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

/// Settings that shape error responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApiConfig {
    pub environment: Environment,
}

impl ApiConfig {
    pub fn new(environment: Environment) -> Self {
        ApiConfig { environment }
    }

    /// Load from `APP_ENV`, reading a `.env` file first when one exists
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        Ok(ApiConfig { environment })
    }

    /// Unsafe messages are replaced with generic ones in strict mode
    pub fn is_strict(&self) -> bool {
        self.environment == Environment::Production
    }
}
