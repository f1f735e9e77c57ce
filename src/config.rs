use std::{env, fmt, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::errors::ConfigError;

// Application-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
}

// Environment enum for different deployment environments
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

// Encryption helper configuration
#[derive(Deserialize, Clone, Default)]
pub struct CryptoConfig {
    /// Raw key bytes, taken verbatim from the environment
    pub key: Option<String>,
}

impl fmt::Debug for CryptoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_ref().map(|k| format!("<{} bytes>", k.len()));
        f.debug_struct("CryptoConfig").field("key", &key).finish()
    }
}

// Result type for configuration functions
type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub crypto: CryptoConfig,
}

impl Config {
    /// Loads `.env` if present, then reads configuration from the environment.
    pub fn load() -> ConfigResult<Self> {
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        let config = Self::from_env()?;
        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }

    /// Reads configuration from environment variables only.
    pub fn from_env() -> ConfigResult<Self> {
        let version = env!("CARGO_PKG_VERSION").to_string();

        let app = AppConfig {
            name: get_env_or_default("APP_NAME", "shortcode-tools")?,
            version: env::var("APP_VERSION").unwrap_or(version),
            environment: get_env_or_default("APP_ENVIRONMENT", "development")?,
            log_level: get_env_or_default("RUST_LOG", "warn")?,
        };

        let crypto = CryptoConfig {
            key: get_env_opt("CRYPTO_KEY")?,
        };

        Ok(Config { app, crypto })
    }
}

/// Helper function to get an env variable with a default value
fn get_env_or_default<T: FromStr>(key: &str, default: &str) -> ConfigResult<T>
where
    T::Err: fmt::Display,
{
    let raw = match env::var(key) {
        Ok(val) => val,
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            default.to_string()
        }
        Err(source) => {
            return Err(ConfigError::EnvVar {
                key: key.to_string(),
                source,
            })
        }
    };

    raw.parse::<T>().map_err(|e| ConfigError::Parse {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Like `get_env_or_default`, but an unset or empty variable is `None`
fn get_env_opt(key: &str) -> ConfigResult<Option<String>> {
    match env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            source,
        }),
    }
}
