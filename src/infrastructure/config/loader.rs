use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Config;

/// Default project configuration file
pub const DEFAULT_CONFIG_PATH: &str = ".ssmenv/config.yaml";

/// Optional local overrides, merged over the main file
pub const LOCAL_CONFIG_PATH: &str = ".ssmenv/local.yaml";

/// Prefix of environment variables read as configuration
pub const ENV_PREFIX: &str = "SSMENV_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid page_size: {0}. Must be between 1 and 10")]
    InvalidPageSize(i32),

    #[error("Invalid max_attempts: {0}. Must be at least 1")]
    InvalidMaxAttempts(u32),

    #[error("Invalid timeout_secs: 0. Omit it to disable the deadline")]
    ZeroTimeout,

    #[error("Endpoint URL cannot be empty")]
    EmptyEndpointUrl,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path`, or .ssmenv/config.yaml when not given
    /// 3. .ssmenv/local.yaml (optional overrides)
    /// 4. Environment variables (SSMENV_* prefix, `__` for nesting)
    ///
    /// Missing files are skipped.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let main = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(main))
            .merge(Yaml::file(LOCAL_CONFIG_PATH))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        // SSM caps GetParametersByPath at 10 results per page
        if let Some(page_size) = config.store.page_size {
            if !(1..=10).contains(&page_size) {
                return Err(ConfigError::InvalidPageSize(page_size));
            }
        }

        if config.store.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts(config.store.max_attempts));
        }

        if config.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }

        if config
            .store
            .endpoint_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigError::EmptyEndpointUrl);
        }

        Ok(())
    }
}
