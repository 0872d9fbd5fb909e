//! Configuration file loading with precedence handling.

use crate::source::api::DEFAULT_API_URL;
use crate::state::DEFAULT_BATCH_SIZE;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an alternate config file.
pub const ENV_CONFIG: &str = "FLIGHTBOARD_CONFIG";
/// Environment variable carrying the aviationstack access key.
pub const ENV_API_KEY: &str = "FLIGHTBOARD_API_KEY";
/// Environment variable overriding the flights endpoint.
pub const ENV_API_URL: &str = "FLIGHTBOARD_API_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, directory instead of file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending key.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/flightboard/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Flights endpoint URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// aviationstack access key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Flights revealed per "load more".
    #[serde(default)]
    pub batch_size: Option<usize>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Flights endpoint URL.
    pub api_url: String,
    /// Access key, if any source supplied one.
    pub api_key: Option<String>,
    /// Flights revealed per "load more". Always at least 1.
    pub batch_size: usize,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

// Hand-written so the access key never reaches the log file.
impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("batch_size", &self.batch_size)
            .field("request_timeout", &self.request_timeout)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            batch_size: DEFAULT_BATCH_SIZE,
            request_timeout: Duration::from_secs(30),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/flightboard/flightboard.log` on Linux, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("flightboard").join("flightboard.log")
    } else {
        PathBuf::from("flightboard.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/flightboard/config.toml` on Linux, the platform
/// equivalent elsewhere, or `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flightboard").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FLIGHTBOARD_CONFIG` environment variable
/// 3. Default path `~/.config/flightboard/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a zero `batch_size`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let batch_size = validate_batch_size(config.batch_size.unwrap_or(defaults.batch_size))?;

    Ok(ResolvedConfig {
        api_url: config.api_url.unwrap_or(defaults.api_url),
        api_key: config.api_key.or(defaults.api_key),
        batch_size,
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FLIGHTBOARD_API_KEY`: access key
/// - `FLIGHTBOARD_API_URL`: endpoint URL
///
/// Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(key) = std::env::var(ENV_API_KEY) {
        if !key.is_empty() {
            config.api_key = Some(key);
        }
    }

    if let Ok(url) = std::env::var(ENV_API_URL) {
        if !url.is_empty() {
            config.api_url = url;
        }
    }

    config
}

/// Overrides collected from command-line flags.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-key`
    pub api_key: Option<String>,
    /// `--api-url`
    pub api_url: Option<String>,
    /// `--batch-size`
    pub batch_size: Option<usize>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a zero `batch_size`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(key) = overrides.api_key {
        config.api_key = Some(key);
    }

    if let Some(url) = overrides.api_url {
        config.api_url = url;
    }

    if let Some(batch_size) = overrides.batch_size {
        config.batch_size = validate_batch_size(batch_size)?;
    }

    Ok(config)
}

fn validate_batch_size(batch_size: usize) -> Result<usize, ConfigError> {
    if batch_size == 0 {
        return Err(ConfigError::InvalidValue {
            field: "batch_size",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(batch_size)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
