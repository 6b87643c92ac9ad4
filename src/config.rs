use crate::error::{config::ConfigError, AppError};

const RAWG_API_URL: &str = "https://api.rawg.io/api/games";
const DEFAULT_PORT: u16 = 3000;

/// Deployment mode, derived from the `APP_ENV` environment variable.
///
/// Anything other than "production" is treated as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub run_mode: RunMode,

    pub admin_email: String,
    pub admin_password: String,

    pub rawg_api_url: String,
    pub rawg_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: std::env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            run_mode: RunMode::from_env(),
            admin_email: std::env::var("ADMIN_EMAIL")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_EMAIL".to_string()))?,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()))?,
            rawg_api_url: std::env::var("RAWG_API_URL").unwrap_or_else(|_| RAWG_API_URL.to_string()),
            rawg_api_key: std::env::var("RAWG_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("RAWG_API_KEY".to_string()))?,
        })
    }

    /// Full listing URL for the external game-data API, key included.
    pub fn seed_url(&self) -> String {
        format!("{}?key={}", self.rawg_api_url, self.rawg_api_key)
    }
}
