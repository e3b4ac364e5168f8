//! Config-driven dataset definition.
//!
//! [`DatasetDefinition`] captures everything specific to one CSV export: its
//! default location, how the file is encoded, and which header feeds which
//! [`DetentionRecord`](trace_report_record_models::DetentionRecord) field.
//! Definitions are TOML documents, either embedded through
//! [`crate::registry`] or read from disk.

use serde::Deserialize;

use crate::SourceError;
use crate::location::DataLocation;

/// A complete dataset definition.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetDefinition {
    /// Unique identifier (e.g., `"under_18"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Where the dataset is fetched from unless overridden.
    pub url: String,
    /// Field delimiter. Defaults to a comma.
    #[serde(default)]
    pub delimiter: Option<String>,
    /// Compression of the payload. `None` means detect from the location.
    #[serde(default)]
    pub compression: Option<Compression>,
    /// Header names for each typed record field.
    pub columns: ColumnMapping,
}

/// Payload compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    /// Plain CSV.
    None,
    /// Gzip-compressed CSV.
    Gzip,
}

/// CSV header names for the typed record fields.
///
/// Every other column lands in
/// [`DetentionRecord::text_fields`](trace_report_record_models::DetentionRecord::text_fields).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnMapping {
    pub admission_date: String,
    pub birthplace: String,
    pub latitude: String,
    pub longitude: String,
    pub arresting_patrol: String,
    pub place_of_arrest: String,
    pub referral_recommendation: String,
}

impl ColumnMapping {
    /// All mapped header names, in record-field order.
    #[must_use]
    pub fn names(&self) -> [&str; 7] {
        [
            &self.admission_date,
            &self.birthplace,
            &self.latitude,
            &self.longitude,
            &self.arresting_patrol,
            &self.place_of_arrest,
            &self.referral_recommendation,
        ]
    }
}

impl DatasetDefinition {
    /// The configured default location.
    #[must_use]
    pub fn default_location(&self) -> DataLocation {
        DataLocation::from(self.url.as_str())
    }

    /// Delimiter byte, falling back to `,`.
    #[must_use]
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter
            .as_deref()
            .and_then(|d| d.as_bytes().first().copied())
            .unwrap_or(b',')
    }

    /// Whether a payload read from `location` must be gunzipped first.
    #[must_use]
    pub fn is_gzipped(&self, location: &DataLocation) -> bool {
        match self.compression {
            Some(Compression::Gzip) => true,
            Some(Compression::None) => false,
            None => location.looks_gzipped(),
        }
    }
}

/// Parses a dataset definition from TOML.
///
/// # Errors
///
/// Returns [`SourceError::Definition`] if the document is malformed or a
/// required key is missing.
pub fn parse_dataset_toml(toml_str: &str) -> Result<DatasetDefinition, SourceError> {
    Ok(toml::from_str(toml_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
id = "sample"
name = "Sample"
url = "https://example.org/sample.csv"

[columns]
admission_date = "date_in"
birthplace = "birthplace"
latitude = "lat"
longitude = "lon"
arresting_patrol = "patrol"
place_of_arrest = "place"
referral_recommendation = "referral"
"#;

    #[test]
    fn parses_minimal_definition() {
        let def = parse_dataset_toml(MINIMAL).unwrap();
        assert_eq!(def.id, "sample");
        assert_eq!(def.delimiter_byte(), b',');
        assert_eq!(def.columns.names()[0], "date_in");
        assert!(!def.is_gzipped(&def.default_location()));
    }

    #[test]
    fn explicit_compression_overrides_suffix() {
        let toml_str = MINIMAL.replace(
            "url = \"https://example.org/sample.csv\"",
            "url = \"https://example.org/sample.csv\"\ncompression = \"gzip\"\ndelimiter = \";\"",
        );
        let def = parse_dataset_toml(&toml_str).unwrap();
        assert!(def.is_gzipped(&DataLocation::from("plain.csv")));
        assert_eq!(def.delimiter_byte(), b';');
    }

    #[test]
    fn rejects_missing_columns_table() {
        let err = parse_dataset_toml("id = \"x\"\nname = \"x\"\nurl = \"x\"").unwrap_err();
        assert!(matches!(err, SourceError::Definition(_)));
    }
}
