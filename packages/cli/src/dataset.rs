//! Resolves which dataset to load and where from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::MultiProgress;
use trace_report_cli_utils::IndicatifProgress;
use trace_report_record_models::RecordTable;
use trace_report_server::AppState;
use trace_report_source::cache::DatasetCache;
use trace_report_source::definition::{DatasetDefinition, parse_dataset_toml};
use trace_report_source::location::DataLocation;
use trace_report_source::registry::{all_datasets, dataset, default_dataset};
use trace_report_source::{DataUnavailable, SourceError};

/// Errors resolving the dataset selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// No embedded dataset has this id.
    #[error("Unknown dataset '{id}' (available: {available})")]
    UnknownDataset { id: String, available: String },

    /// The custom definition file could not be read.
    #[error("Failed to read definition {}: {source}", path.display())]
    ReadDefinition {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The custom definition file is not a valid dataset definition.
    #[error("Invalid definition {}: {source}", path.display())]
    ParseDefinition {
        path: PathBuf,
        #[source]
        source: SourceError,
    },
}

/// The dataset to report on.
pub struct Selected {
    pub definition: DatasetDefinition,
    pub location: DataLocation,
}

/// Picks the definition (`--definition` file, then `--dataset` id, then
/// the default) and the location (`--source`, then `env_source`, then the
/// definition's URL).
///
/// # Errors
///
/// Returns [`SelectionError`] if the dataset id is unknown or the
/// definition file cannot be read or parsed.
pub fn resolve(
    source: Option<&str>,
    dataset_id: Option<&str>,
    definition_path: Option<&Path>,
    env_source: Option<String>,
) -> Result<Selected, SelectionError> {
    let definition = match (definition_path, dataset_id) {
        (Some(path), _) => read_definition(path)?,
        (None, Some(id)) => dataset(id).ok_or_else(|| SelectionError::UnknownDataset {
            id: id.to_string(),
            available: all_datasets()
                .iter()
                .map(|d| d.id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })?,
        (None, None) => default_dataset(),
    };

    let location = source
        .map(str::to_string)
        .or(env_source)
        .filter(|s| !s.trim().is_empty())
        .map_or_else(|| definition.default_location(), |s| DataLocation::from(s.as_str()));

    log::debug!("Using dataset '{}' from {location}", definition.id);

    Ok(Selected {
        definition,
        location,
    })
}

fn read_definition(path: &Path) -> Result<DatasetDefinition, SelectionError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| SelectionError::ReadDefinition {
            path: path.to_path_buf(),
            source,
        })?;
    parse_dataset_toml(&contents).map_err(|source| SelectionError::ParseDefinition {
        path: path.to_path_buf(),
        source,
    })
}

impl Selected {
    /// Server state serving this dataset with a fresh cache.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState::new(self.definition.clone(), self.location.clone())
    }

    /// Loads the table through `cache` with a download spinner.
    ///
    /// # Errors
    ///
    /// Returns [`DataUnavailable`] if the dataset cannot be fetched or
    /// parsed.
    pub async fn load(
        &self,
        cache: &DatasetCache,
        multi: &MultiProgress,
    ) -> Result<Arc<RecordTable>, DataUnavailable> {
        let progress =
            IndicatifProgress::download_spinner(multi, &format!("Loading {}", self.definition.name));
        cache
            .get_or_load(&self.definition, &self.location, &progress)
            .await
    }
}
