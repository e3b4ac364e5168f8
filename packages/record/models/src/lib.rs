#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Detention record types and the immutable in-memory record table.
//!
//! Every row of the source CSV is coerced into a [`DetentionRecord`] by the
//! loader. Typed fields are either valid values or `None`; a cell that
//! fails coercion never reaches the aggregation routines as raw text.

use std::collections::BTreeMap;

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};

/// Placeholder written by the data entry process when a field was not
/// recorded. Rows carrying it keep the value; frequency counts skip it.
pub const NO_VALUE_SENTINEL: &str = "no_value";

/// One detained individual-event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetentionRecord {
    /// Date the person was admitted to the branch. `None` when the source
    /// cell is missing or unparseable.
    pub admission_date: Option<NaiveDate>,
    /// Birthplace as written in the record.
    pub birthplace: Option<String>,
    /// Latitude (WGS84) of the geocoded birthplace.
    pub latitude: Option<f64>,
    /// Longitude (WGS84) of the geocoded birthplace.
    pub longitude: Option<f64>,
    /// Patrol that carried out the arrest. May hold [`NO_VALUE_SENTINEL`].
    pub arresting_patrol: Option<String>,
    /// Place where the arrest or detention happened.
    pub place_of_arrest: Option<String>,
    /// Referral recommendation from the branch head to the directorate.
    pub referral_recommendation: Option<String>,
    /// Every other column, kept verbatim for display (charge narrative,
    /// excerpts, ...). Keyed by the CSV header.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub text_fields: BTreeMap<String, String>,
}

impl DetentionRecord {
    /// Calendar year of the admission date, if the date is known.
    #[must_use]
    pub fn admission_year(&self) -> Option<i32> {
        self.admission_date.map(|d| d.year())
    }

    /// Both coordinates, when both are present.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// The arresting patrol, unless it is missing or the "not recorded"
    /// sentinel.
    #[must_use]
    pub fn recorded_patrol(&self) -> Option<&str> {
        self.arresting_patrol
            .as_deref()
            .filter(|p| *p != NO_VALUE_SENTINEL)
    }
}

/// The full parsed dataset.
///
/// Built once by the loader and then shared read-only (usually behind an
/// `Arc`). Nothing in the workspace mutates a table after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTable {
    records: Vec<DetentionRecord>,
}

impl RecordTable {
    /// Wraps already-coerced records, preserving their source order.
    #[must_use]
    pub const fn new(records: Vec<DetentionRecord>) -> Self {
        Self { records }
    }

    /// All records in source order.
    #[must_use]
    pub fn records(&self) -> &[DetentionRecord] {
        &self.records
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates rows in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, DetentionRecord> {
        self.records.iter()
    }
}

impl FromIterator<DetentionRecord> for RecordTable {
    fn from_iter<T: IntoIterator<Item = DetentionRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a DetentionRecord;
    type IntoIter = std::slice::Iter<'a, DetentionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
