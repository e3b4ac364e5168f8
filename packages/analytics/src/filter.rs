//! Year selection over the loaded table.

use std::collections::BTreeSet;

use trace_report_analytics_models::YearSelection;
use trace_report_record_models::{DetentionRecord, RecordTable};

/// A filtered, borrowed subset of a [`RecordTable`], in source order.
#[derive(Debug, Clone, Default)]
pub struct RecordView<'a> {
    rows: Vec<&'a DetentionRecord>,
}

impl<'a> RecordView<'a> {
    /// A view over every row of `table`.
    #[must_use]
    pub fn all(table: &'a RecordTable) -> Self {
        table.iter().collect()
    }

    /// Number of rows in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the view has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows in source order.
    pub fn iter(&self) -> impl Iterator<Item = &'a DetentionRecord> + '_ {
        self.rows.iter().copied()
    }
}

impl<'a> FromIterator<&'a DetentionRecord> for RecordView<'a> {
    fn from_iter<T: IntoIterator<Item = &'a DetentionRecord>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Distinct admission years in `table`, most recent first.
///
/// Always computed over the full table so the selector does not shrink
/// when a year is chosen.
#[must_use]
pub fn available_years(table: &RecordTable) -> Vec<i32> {
    let years: BTreeSet<i32> = table.iter().filter_map(DetentionRecord::admission_year).collect();
    years.into_iter().rev().collect()
}

/// The selector choices: "All Years" followed by [`available_years`].
#[must_use]
pub fn year_options(table: &RecordTable) -> Vec<YearSelection> {
    std::iter::once(YearSelection::AllYears)
        .chain(available_years(table).into_iter().map(YearSelection::Year))
        .collect()
}

/// Narrows `table` to `selection`.
///
/// A specific year drops rows without an admission date; `AllYears` keeps
/// every row.
#[must_use]
pub fn filter_by_year(table: &RecordTable, selection: YearSelection) -> RecordView<'_> {
    match selection {
        YearSelection::AllYears => RecordView::all(table),
        YearSelection::Year(year) => table
            .iter()
            .filter(|r| r.admission_year() == Some(year))
            .collect(),
    }
}
