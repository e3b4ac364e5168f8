#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Detention record loading.
//!
//! A [`definition::DatasetDefinition`] describes where a CSV dataset lives
//! and which columns feed which record field. [`loader::load_records`]
//! fetches and coerces it into a
//! [`RecordTable`](trace_report_record_models::RecordTable), and
//! [`cache::DatasetCache`] memoizes the result per location so a dataset is
//! fetched at most once per process.

pub mod cache;
pub mod csv_download;
pub mod definition;
pub mod loader;
pub mod location;
pub mod parsing;
pub mod progress;
pub mod registry;

/// Errors that can occur while fetching or parsing a dataset.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error (file read, decompression).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV had no header row.
    #[error("CSV file contains no header row")]
    MissingHeader,

    /// A column named by the dataset definition is absent from the header.
    #[error("Column '{column}' not found in CSV header")]
    MissingColumn {
        /// The configured column name.
        column: String,
    },

    /// A dataset definition could not be parsed.
    #[error("Invalid dataset definition: {0}")]
    Definition(#[from] toml::de::Error),
}

/// The dataset could not be fetched or parsed at all.
///
/// This is fatal for the whole report: no section is rendered from a
/// partial load. Individual cells that fail coercion never produce this
/// error; they degrade to `None` instead.
#[derive(Debug, thiserror::Error)]
#[error("Data unavailable from {location}: {cause}")]
pub struct DataUnavailable {
    /// Where the load was attempted.
    pub location: String,
    /// Underlying failure.
    #[source]
    pub cause: SourceError,
}

impl DataUnavailable {
    /// Wraps a [`SourceError`] with the location it came from.
    #[must_use]
    pub fn new(location: impl Into<String>, cause: SourceError) -> Self {
        Self {
            location: location.into(),
            cause,
        }
    }
}
