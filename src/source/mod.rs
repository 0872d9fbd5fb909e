//! Flight data sources.
//!
//! This module provides where the full result set comes from:
//! - the aviationstack HTTP API (default)
//! - a saved JSON response on disk (offline, `--file`)
//! - a background worker that runs fetches off the UI thread

use crate::model::{FlightRecord, FlightsResponse, SourceError};
use std::path::PathBuf;
use std::time::Duration;

pub mod api;
pub mod file;
pub mod worker;

pub use api::ApiSource;
pub use file::FileSource;
pub use worker::{FetchResult, FetchWorker};

/// Anything that can produce the complete, unfiltered flight list.
///
/// Each call is a fresh fetch; implementations do not cache.
pub trait DataSource: Send + Sync {
    /// Fetch every flight the source currently offers.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the source is unreachable or returns data that
    /// is not a flight list.
    fn fetch_all_flights(&self) -> Result<Vec<FlightRecord>, SourceError>;

    /// Short human readable origin, for the header bar and logs.
    fn describe(&self) -> String;
}

/// Unified flight source. Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum FlightSource {
    /// Live aviationstack API.
    Api(ApiSource),
    /// Saved response on disk.
    File(FileSource),
}

impl DataSource for FlightSource {
    fn fetch_all_flights(&self) -> Result<Vec<FlightRecord>, SourceError> {
        match self {
            FlightSource::Api(api) => api.fetch_all_flights(),
            FlightSource::File(file) => file.fetch_all_flights(),
        }
    }

    fn describe(&self) -> String {
        match self {
            FlightSource::Api(api) => api.describe(),
            FlightSource::File(file) => file.describe(),
        }
    }
}

/// Settings the API source needs, taken from the resolved config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Flights endpoint URL.
    pub url: String,
    /// aviationstack access key; required unless a file is given.
    pub access_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Pick the flight source.
///
/// # Logic:
/// 1. If a file path is provided: `FileSource` (must exist)
/// 2. Else: `ApiSource` (needs an access key)
///
/// # Errors
///
/// Returns `SourceError::FileNotFound` for a missing file,
/// `SourceError::MissingApiKey` when no file and no key are available, and
/// `SourceError::Transport` if the HTTP client cannot be built.
pub fn detect_flight_source(
    file: Option<PathBuf>,
    api: ApiSettings,
) -> Result<FlightSource, SourceError> {
    match file {
        Some(path) => Ok(FlightSource::File(FileSource::new(path)?)),
        None => {
            let key = api.access_key.ok_or(SourceError::MissingApiKey)?;
            Ok(FlightSource::Api(ApiSource::new(api.url, key, api.timeout)?))
        }
    }
}

fn malformed(err: serde_json::Error) -> SourceError {
    SourceError::Malformed {
        reason: err.to_string(),
    }
}

/// Decode a flights payload: the API envelope `{"data": [...]}` or a bare array.
///
/// The shape is chosen by the first token, so a bad record reports serde's own
/// error with its line and column.
///
/// # Errors
///
/// - `SourceError::Api` when the envelope carries an `error` object
/// - `SourceError::Malformed` when the body is neither shape, or has no `data`
pub fn decode_flights(body: &str) -> Result<Vec<FlightRecord>, SourceError> {
    if body.trim_start().starts_with('[') {
        return serde_json::from_str(body).map_err(malformed);
    }

    let response: FlightsResponse = serde_json::from_str(body).map_err(malformed)?;
    match response {
        FlightsResponse {
            error: Some(error), ..
        } => Err(SourceError::Api {
            code: error.code.unwrap_or_else(|| "unknown".to_string()),
            message: error.message.unwrap_or_default(),
        }),
        FlightsResponse {
            data: Some(records),
            ..
        } => Ok(records),
        FlightsResponse { .. } => Err(SourceError::Malformed {
            reason: "response has no data field".to_string(),
        }),
    }
}
