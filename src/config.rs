use std::{env, fmt::Display, str::FromStr};

use log::info;
use thiserror::Error;

use crate::ingest::DATASET_URL;

const DEFAULT_DATABASE_URL: &str = "nutrition.db";
const DEFAULT_DATABASE_NAME: &str = "cloud-project-db";
const DEFAULT_SEASONAL_SELECTOR: &str = "ul li";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
    pub dataset_url: String,
    pub seasonal_url: Option<String>,
    pub seasonal_selector: String,
}

impl Config {
    /// Reads `.env`, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: database_url(&lookup),
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: try_load(&lookup, "PORT", 8080)?,
            pool_size: try_load(&lookup, "POOL_SIZE", 10)?,
            dataset_url: lookup("DATASET_URL").unwrap_or_else(|| DATASET_URL.to_string()),
            seasonal_url: lookup("SEASONAL_URL").filter(|url| !url.is_empty()),
            seasonal_selector: lookup("SEASONAL_SELECTOR")
                .unwrap_or_else(|| DEFAULT_SEASONAL_SELECTOR.to_string()),
        })
    }
}

fn database_url<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return url;
    }

    if cfg!(feature = "mysql") {
        if let Some(host) = lookup("DB_HOST") {
            let user = lookup("DB_USERNAME").unwrap_or_default();
            let password = lookup("DB_PASSWORD").unwrap_or_default();
            let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());
            return format!("mysql://{user}:{password}@{host}/{name}");
        }
    }

    info!("DATABASE_URL not set, using default: {DEFAULT_DATABASE_URL}");
    DEFAULT_DATABASE_URL.to_string()
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value,
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
