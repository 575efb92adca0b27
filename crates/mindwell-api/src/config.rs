//! Process configuration, read once from the environment at startup.
//!
//! The store location has no built-in default: either `MINDWELL_BUCKET` is
//! set, or the in-process store is requested explicitly with
//! `MINDWELL_STORE=memory`.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    S3 {
        bucket: String,
        endpoint: Option<String>,
    },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreConfig,
    pub jwt_secret: String,
    pub oracle: Option<OracleConfig>,
    pub client_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store = match (var("MINDWELL_STORE").as_deref(), var("MINDWELL_BUCKET")) {
            (Some("memory"), _) => StoreConfig::Memory,
            (None | Some("s3"), Some(bucket)) => StoreConfig::S3 {
                bucket,
                endpoint: var("MINDWELL_S3_ENDPOINT"),
            },
            (None | Some("s3"), None) => return Err(ConfigError::Missing("MINDWELL_BUCKET")),
            (Some(other), _) => {
                return Err(ConfigError::Invalid {
                    key: "MINDWELL_STORE",
                    message: format!("expected 's3' or 'memory', got '{other}'"),
                });
            }
        };

        let jwt_secret =
            var("MINDWELL_JWT_SECRET").ok_or(ConfigError::Missing("MINDWELL_JWT_SECRET"))?;

        let oracle = match var("MINDWELL_ORACLE_URL") {
            Some(url) => {
                let timeout_ms: u64 = parse_or(
                    "MINDWELL_ORACLE_TIMEOUT_MS",
                    var("MINDWELL_ORACLE_TIMEOUT_MS"),
                    DEFAULT_ORACLE_TIMEOUT_MS,
                )?;
                Some(OracleConfig {
                    url,
                    timeout: Duration::from_millis(timeout_ms),
                })
            }
            None => {
                info!("MINDWELL_ORACLE_URL not set, oracle cross-check disabled");
                None
            }
        };

        Ok(Self {
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            store,
            jwt_secret,
            oracle,
            client_url: var("MINDWELL_CLIENT_URL"),
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
