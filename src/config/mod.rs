//! Configuration layer: typed settings with layered precedence
//! (default file → local file → explicit file → env → CLI overrides).

use std::{path::PathBuf, str::FromStr};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "lactea";
const ENV_PREFIX: &str = "LACTEA";
const DEFAULT_SESSION_FILE: &str = "lactea-session.json";
const DEFAULT_PRODUCT_CACHE_FILE: &str = "lactea-productos.json";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub remote: RemoteSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct RemoteSettings {
    /// Base URL of the hosted data service.
    pub base_url: String,
    /// Publishable access key sent with every request.
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub session_file: PathBuf,
    pub product_cache_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Highest-precedence layer, filled from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub session_file: Option<PathBuf>,
    pub product_cache_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    remote: RawRemoteSettings,
    #[serde(default)]
    storage: RawStorageSettings,
    #[serde(default)]
    logging: RawLoggingSettings,
}

#[derive(Debug, Default, Deserialize)]
struct RawRemoteSettings {
    base_url: Option<String>,
    api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStorageSettings {
    session_file: Option<PathBuf>,
    product_cache_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if overrides.base_url.is_some() {
            self.remote.base_url = overrides.base_url.clone();
        }
        if overrides.api_key.is_some() {
            self.remote.api_key = overrides.api_key.clone();
        }
        if overrides.session_file.is_some() {
            self.storage.session_file = overrides.session_file.clone();
        }
        if overrides.product_cache_file.is_some() {
            self.storage.product_cache_file = overrides.product_cache_file.clone();
        }
        if overrides.log_level.is_some() {
            self.logging.level = overrides.log_level.clone();
        }
        if overrides.log_json.is_some() {
            self.logging.json = overrides.log_json;
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let base_url = raw
            .remote
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| LoadError::Invalid {
                key: "remote.base_url",
                reason: "missing (set it in a config file, LACTEA__REMOTE__BASE_URL, or --site)"
                    .to_string(),
            })?;
        url::Url::parse(&base_url).map_err(|err| LoadError::Invalid {
            key: "remote.base_url",
            reason: err.to_string(),
        })?;

        let api_key = raw
            .remote
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LoadError::Invalid {
                key: "remote.api_key",
                reason: "missing (set it in a config file, LACTEA__REMOTE__API_KEY, or --key)"
                    .to_string(),
            })?;

        let level = match raw.logging.level {
            Some(level) => {
                LevelFilter::from_str(level.trim()).map_err(|err| LoadError::Invalid {
                    key: "logging.level",
                    reason: err.to_string(),
                })?
            }
            None => DEFAULT_LOG_LEVEL,
        };
        let format = if raw.logging.json.unwrap_or(false) {
            LogFormat::Json
        } else {
            LogFormat::Compact
        };

        Ok(Settings {
            remote: RemoteSettings { base_url, api_key },
            storage: StorageSettings {
                session_file: raw
                    .storage
                    .session_file
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE)),
                product_cache_file: raw
                    .storage
                    .product_cache_file
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_PRODUCT_CACHE_FILE)),
            },
            logging: LoggingSettings { level, format },
        })
    }
}

pub fn load(config_file: Option<&PathBuf>, overrides: &Overrides) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(overrides);
    Settings::from_raw(raw)
}
