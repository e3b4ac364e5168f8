//! The per-chart aggregation routines.
//!
//! Each function takes a [`RecordView`] and returns a new summary; an empty
//! view always produces an empty summary.

use std::collections::BTreeMap;

use chrono::{Datelike as _, NaiveDate};
use trace_report_analytics_models::{BirthplaceDensity, CategoryCount, MonthlyCount, RadiusRange};
use trace_report_record_models::DetentionRecord;

use crate::filter::RecordView;
use crate::frequency::FrequencyTable;
use crate::scaling::min_max_scale;

/// How many patrols the pie chart shows.
pub const TOP_PATROLS: usize = 10;
/// How many arrest places the bar chart shows.
pub const TOP_ARREST_PLACES: usize = 15;
/// How many referral recommendations the horizontal bar chart shows.
pub const TOP_REFERRALS: usize = 20;

#[derive(Default)]
struct BirthplaceGroup {
    count: u64,
    coordinates: Option<(f64, f64)>,
}

/// Birthplace markers for the map.
///
/// Rows are grouped by birthplace (rows without one are ignored). A group's
/// position is the coordinate pair of its first row that has both
/// coordinates; groups with no such row are dropped. Counts are then
/// min-max scaled onto [`RadiusRange::MARKERS`]. Output is ordered by
/// birthplace.
#[must_use]
pub fn birthplace_density(view: &RecordView<'_>) -> Vec<BirthplaceDensity> {
    let mut groups: BTreeMap<&str, BirthplaceGroup> = BTreeMap::new();

    for record in view.iter() {
        let Some(birthplace) = record.birthplace.as_deref() else {
            continue;
        };
        let group = groups.entry(birthplace).or_default();
        group.count += 1;
        if group.coordinates.is_none() {
            group.coordinates = record.coordinates();
        }
    }

    let located: Vec<(&str, u64, (f64, f64))> = groups
        .into_iter()
        .filter_map(|(name, g)| g.coordinates.map(|c| (name, g.count, c)))
        .collect();

    let counts: Vec<u64> = located.iter().map(|(_, count, _)| *count).collect();
    let radii = min_max_scale(&counts, RadiusRange::MARKERS);

    located
        .into_iter()
        .zip(radii)
        .map(|((name, count, (latitude, longitude)), radius)| BirthplaceDensity {
            birthplace: name.to_string(),
            count,
            latitude,
            longitude,
            radius,
        })
        .collect()
}

fn count_field<'a>(
    view: &RecordView<'a>,
    field: impl Fn(&'a DetentionRecord) -> Option<&'a str>,
) -> FrequencyTable {
    view.iter().filter_map(field).collect()
}

/// The ten most frequent arresting patrols, excluding the "no_value"
/// sentinel. Most frequent first; ties in first-seen order.
#[must_use]
pub fn top_arresting_patrols(view: &RecordView<'_>) -> Vec<CategoryCount> {
    count_field(view, DetentionRecord::recorded_patrol).top_n(TOP_PATROLS)
}

/// The fifteen most frequent places of arrest, most frequent first.
#[must_use]
pub fn top_arrest_places(view: &RecordView<'_>) -> Vec<CategoryCount> {
    count_field(view, |r| r.place_of_arrest.as_deref()).top_n(TOP_ARREST_PLACES)
}

/// The twenty most frequent referral recommendations, ordered from least
/// to most frequent for a horizontal bar layout.
///
/// Selection is the same as the other top-N routines; the reordering is a
/// stable ascending sort, so equal counts keep their selection order.
#[must_use]
pub fn top_referral_recommendations(view: &RecordView<'_>) -> Vec<CategoryCount> {
    let mut top =
        count_field(view, |r| r.referral_recommendation.as_deref()).top_n(TOP_REFERRALS);
    top.sort_by_key(|c| c.count);
    top
}

/// Records per calendar month of admission, oldest month first.
///
/// Undated rows are skipped. Months without records are not emitted.
#[must_use]
pub fn monthly_distribution(view: &RecordView<'_>) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for date in view.iter().filter_map(|r| r.admission_date) {
        if let Some(month_start) = date.with_day(1) {
            *months.entry(month_start).or_insert(0) += 1;
        }
    }

    months
        .into_iter()
        .map(|(month_start, count)| MonthlyCount { month_start, count })
        .collect()
}
