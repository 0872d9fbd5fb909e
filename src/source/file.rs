//! File-based flight source for offline use.
//!
//! Reads a saved API response (or a bare JSON array of flights). The file is
//! re-read on every fetch, so editing it between searches behaves like the API
//! returning new data.

use crate::model::{FlightRecord, SourceError};
use crate::source::{decode_flights, DataSource};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Flights loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a FileSource for the given path.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SourceError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the saved response.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn fetch_all_flights(&self) -> Result<Vec<FlightRecord>, SourceError> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::FileNotFound {
                path: self.path.clone(),
            },
            _ => SourceError::Io {
                path: self.path.clone(),
                reason: e.to_string(),
            },
        })?;
        decode_flights(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
