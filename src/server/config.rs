use std::str::FromStr;

use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_UPLOADS_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

/// Deployment environment, controlling cookie security and error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err("expected 'development' or 'production'".to_string()),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub uploads_dir: String,
    pub environment: Environment,
    /// Origins allowed to make credentialed cross-origin requests.
    pub allowed_origins: Vec<HeaderValue>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: parse_var("PORT")?.unwrap_or(DEFAULT_PORT),
            uploads_dir: std::env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOADS_DIR.to_string()),
            environment: parse_var("APP_ENV")?.unwrap_or(Environment::Development),
            allowed_origins: allowed_origins()?,
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES")?.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    let Ok(value) = std::env::var(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
}

fn allowed_origins() -> Result<Vec<HeaderValue>, ConfigError> {
    let Ok(value) = std::env::var("ALLOWED_ORIGINS") else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "ALLOWED_ORIGINS".to_string(),
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
