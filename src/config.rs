use std::env;
use std::time::Duration;

use crate::shared::mongo::MongoSettings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Debug routes must not be compiled into a production build")]
    DebugRoutesInProduction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub mongo: MongoSettings,
    pub argon2: Argon2Settings,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        if cfg!(feature = "debug-routes") && environment == "production" {
            return Err(ConfigError::DebugRoutesInProduction);
        }

        let uri = lookup("DB_URI").ok_or(ConfigError::Missing("DB_URI"))?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            mongo: MongoSettings {
                uri,
                database: lookup("DB_NAME").unwrap_or_else(|| "mooc".to_string()),
                max_pool_size: parse_or(&lookup, "DB_MAX_POOL_SIZE", 50)?,
                connect_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_CONNECT_TIMEOUT_SECS",
                    5,
                )?),
            },
            argon2: Argon2Settings {
                memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", 19 * 1024)?,
                iterations: parse_or(&lookup, "ARGON2_ITERATIONS", 2)?,
                parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", 1)?,
            },
            environment,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
