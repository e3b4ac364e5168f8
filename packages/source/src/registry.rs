//! Dataset registry. Loads all dataset definitions from embedded TOML.
//!
//! Each `.toml` file in `packages/source/datasets/` is baked into the binary
//! at compile time via [`include_str!`].

use crate::definition::{DatasetDefinition, parse_dataset_toml};

/// Identifier of the dataset used when none is requested.
pub const DEFAULT_DATASET_ID: &str = "under_18";

/// TOML configs embedded at compile time.
const DATASET_TOMLS: &[(&str, &str)] = &[("under_18", include_str!("../datasets/under_18.toml"))];

/// Returns all configured dataset definitions, parsed from embedded TOML.
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_datasets() -> Vec<DatasetDefinition> {
    DATASET_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_dataset_toml(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Looks up an embedded dataset by id.
#[must_use]
pub fn dataset(id: &str) -> Option<DatasetDefinition> {
    all_datasets().into_iter().find(|d| d.id == id)
}

/// The default embedded dataset.
///
/// # Panics
///
/// Panics if [`DEFAULT_DATASET_ID`] is not among the embedded configs.
#[must_use]
pub fn default_dataset() -> DatasetDefinition {
    dataset(DEFAULT_DATASET_ID)
        .unwrap_or_else(|| panic!("Default dataset '{DEFAULT_DATASET_ID}' is not embedded"))
}
