//! Error types for flightboard.
//!
//! Errors are defined with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error of the binary's startup (config, logging, source)
//!   - [`SourceError`] - the flight data source could not deliver a result set
//!   - [`crate::config::ConfigError`] - config file unreadable or invalid
//!   - [`crate::logging::LoggingError`] - tracing subscriber setup failed
//!   - `std::io::Error` - terminal failures
//!
//! # Recovery
//!
//! `SourceError` is never fatal once the TUI is running: a failed fetch moves the
//! controller into `LoadPhase::Failed` and the message is shown in the status bar.
//! The user can retry by searching or resetting. Nothing is retried automatically.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Data source could not be constructed.
    #[error("Flight source error: {0}")]
    Source(#[from] SourceError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure to obtain the full flight result set.
///
/// Carries rendered reasons rather than the underlying error values so results
/// can cross the worker channel and be compared in tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// No API key configured and no `--file` given.
    #[error("No API access key: set FLIGHTBOARD_API_KEY, api_key in the config file, or pass --file")]
    MissingApiKey,

    /// Network failure, timeout or TLS error.
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// Endpoint URL without the access key.
        url: String,
        /// Rendered transport error.
        reason: String,
    },

    /// Server answered with a non-success status.
    #[error("Flights API returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Server answered with an aviationstack error object, on any status.
    #[error("Flights API error ({code}): {message}")]
    Api {
        /// Error code, e.g. `invalid_access_key`.
        code: String,
        /// Human readable message.
        message: String,
    },

    /// Body was not a flights payload.
    #[error("Malformed flight data: {reason}")]
    Malformed {
        /// Decoder error.
        reason: String,
    },

    /// Offline data file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Offline data file could not be read.
    #[error("Failed to read {path}: {reason}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// Fetch worker hung up before delivering a result.
    #[error("Fetch worker stopped before delivering results")]
    WorkerDisconnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code() {
        let err = SourceError::Status { status: 503 };
        assert_eq!(err.to_string(), "Flights API returned HTTP 503");
    }

    #[test]
    fn api_error_carries_code_and_message() {
        let err = SourceError::Api {
            code: "usage_limit_reached".to_string(),
            message: "Your monthly usage limit has been reached.".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("usage_limit_reached"));
        assert!(msg.contains("monthly usage limit"));
    }

    #[test]
    fn file_not_found_mentions_path() {
        let err = SourceError::FileNotFound {
            path: PathBuf::from("/tmp/flights.json"),
        };
        assert!(err.to_string().contains("/tmp/flights.json"));
    }

    #[test]
    fn source_error_converts_into_app_error() {
        fn fetch() -> Result<(), AppError> {
            Err(SourceError::MissingApiKey)?;
            Ok(())
        }
        assert!(matches!(
            fetch(),
            Err(AppError::Source(SourceError::MissingApiKey))
        ));
    }

    #[test]
    fn io_error_converts_into_app_error() {
        let err: AppError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, AppError::Terminal(_)));
    }
}
