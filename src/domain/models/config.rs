use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for ssmenv
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Comma-separated namespaces used when none are given on the command line
    #[serde(default)]
    pub namespaces: Option<String>,

    /// Deadline in seconds for resolving all namespaces
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Parameter store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parameter store client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// AWS region (falls back to the SDK's default chain)
    #[serde(default)]
    pub region: Option<String>,

    /// Named AWS profile
    #[serde(default)]
    pub profile: Option<String>,

    /// Custom endpoint, e.g. a local emulator
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Decrypt `SecureString` parameters
    #[serde(default = "default_true")]
    pub with_decryption: bool,

    /// List nested paths below each namespace as well
    #[serde(default)]
    pub recursive: bool,

    /// Results per listing page (1-10, store default when unset)
    #[serde(default)]
    pub page_size: Option<i32>,

    /// Attempts per request handed to the SDK retry policy
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

const fn default_true() -> bool {
    true
}

const fn default_max_attempts() -> u32 {
    3
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            with_decryption: default_true(),
            recursive: false,
            page_size: None,
            max_attempts: default_max_attempts(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

/// Rotation policy for file logging
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    Daily,
    Hourly,
    #[default]
    Never,
}
