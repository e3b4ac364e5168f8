#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Year selection and aggregation result types for the detention report.
//!
//! Every aggregation produces plain data (sequences of small records)
//! that any rendering surface can consume without knowing how it was
//! computed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label of the "no filter" choice in the year selector.
pub const ALL_YEARS_LABEL: &str = "All Years";

/// The viewer's year choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum YearSelection {
    /// No filtering; undated rows included.
    #[default]
    AllYears,
    /// Only rows admitted in this calendar year.
    Year(i32),
}

impl std::fmt::Display for YearSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllYears => write!(f, "{ALL_YEARS_LABEL}"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

impl std::str::FromStr for YearSelection {
    type Err = InvalidYearSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_YEARS_LABEL) || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::AllYears);
        }
        trimmed
            .parse::<i32>()
            .map(Self::Year)
            .map_err(|_| InvalidYearSelection {
                input: s.to_string(),
            })
    }
}

impl From<YearSelection> for String {
    fn from(selection: YearSelection) -> Self {
        selection.to_string()
    }
}

impl TryFrom<String> for YearSelection {
    type Error = InvalidYearSelection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error returned when a year selector string is neither a year nor
/// "All Years".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidYearSelection {
    /// The rejected input.
    pub input: String,
}

impl std::fmt::Display for InvalidYearSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid year selection '{}': expected a year or '{ALL_YEARS_LABEL}'",
            self.input
        )
    }
}

impl std::error::Error for InvalidYearSelection {}

/// Visual radius bounds for birthplace map markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusRange {
    /// Radius assigned to the smallest count (and to every group when all
    /// counts are equal).
    pub min: f64,
    /// Radius assigned to the largest count.
    pub max: f64,
}

impl RadiusRange {
    /// The marker range used by the birthplace map.
    pub const MARKERS: Self = Self {
        min: 5.0,
        max: 20.0,
    };
}

impl Default for RadiusRange {
    fn default() -> Self {
        Self::MARKERS
    }
}

/// One map marker: a birthplace, how many records name it, where it is,
/// and how large to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthplaceDensity {
    /// Birthplace as written in the records.
    pub birthplace: String,
    /// Number of filtered records with this birthplace.
    pub count: u64,
    /// Latitude of the first record in the group carrying coordinates.
    pub latitude: f64,
    /// Longitude of the same record.
    pub longitude: f64,
    /// Marker radius scaled into [`RadiusRange::MARKERS`].
    pub radius: f64,
}

/// Number of records carrying one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// The categorical value.
    pub label: String,
    /// Number of records.
    pub count: u64,
}

/// A count with its integer share of the displayed subset, for pie slices
/// and bar labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    /// The categorical value.
    pub label: String,
    /// Number of records.
    pub count: u64,
    /// `round(100 * count / displayed_total)`.
    pub percent: u32,
}

/// Records admitted during one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Number of records.
    pub count: u64,
}

impl MonthlyCount {
    /// Period label such as `"2013-05"`.
    #[must_use]
    pub fn period(&self) -> String {
        self.month_start.format("%Y-%m").to_string()
    }
}

/// Every computed section of the report for one year selection.
///
/// A selection matching no rows yields a report whose sections are all
/// empty; it is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetentionReport {
    /// The selection the report was built for.
    pub selection: YearSelection,
    /// Rows in the filtered table.
    pub total_records: u64,
    /// Birthplace markers, ordered by birthplace.
    pub birthplaces: Vec<BirthplaceDensity>,
    /// Ten most frequent arresting patrols, most frequent first.
    pub top_patrols: Vec<CategoryCount>,
    /// The same patrols with their shares, for the pie chart.
    pub patrol_slices: Vec<ChartSlice>,
    /// Fifteen most frequent arrest places, most frequent first.
    pub top_arrest_places: Vec<CategoryCount>,
    /// Twenty most frequent referral recommendations, least frequent first.
    pub top_referrals: Vec<CategoryCount>,
    /// Records per month, oldest first.
    pub monthly: Vec<MonthlyCount>,
}

impl DetentionReport {
    /// Whether the filtered table had no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_records == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_selections() {
        assert_eq!("All Years".parse(), Ok(YearSelection::AllYears));
        assert_eq!("all".parse(), Ok(YearSelection::AllYears));
        assert_eq!(" 2013 ".parse(), Ok(YearSelection::Year(2013)));
        assert!("twenty".parse::<YearSelection>().is_err());
    }

    #[test]
    fn year_selection_serializes_as_its_label() {
        let json = serde_json::to_string(&YearSelection::Year(2014)).unwrap();
        assert_eq!(json, "\"2014\"");
        let json = serde_json::to_string(&YearSelection::AllYears).unwrap();
        assert_eq!(json, "\"All Years\"");
        let back: YearSelection = serde_json::from_str("\"2014\"").unwrap();
        assert_eq!(back, YearSelection::Year(2014));
    }

    #[test]
    fn monthly_period_label() {
        let point = MonthlyCount {
            month_start: NaiveDate::from_ymd_opt(2013, 5, 1).unwrap(),
            count: 2,
        };
        assert_eq!(point.period(), "2013-05");
    }
}
