//! Full report assembly for one year selection.

use trace_report_analytics_models::{DetentionReport, YearSelection};
use trace_report_record_models::RecordTable;

use crate::aggregations::{
    birthplace_density, monthly_distribution, top_arrest_places, top_arresting_patrols,
    top_referral_recommendations,
};
use crate::filter::filter_by_year;
use crate::scaling::chart_slices;

/// Filters `table` to `selection` and runs every aggregation over the
/// result.
///
/// The routines are independent; an empty selection produces a report with
/// every section empty.
#[must_use]
pub fn build_report(table: &RecordTable, selection: YearSelection) -> DetentionReport {
    let view = filter_by_year(table, selection);

    log::debug!(
        "Building report for {selection}: {} of {} records",
        view.len(),
        table.len()
    );

    let top_patrols = top_arresting_patrols(&view);
    let patrol_slices = chart_slices(&top_patrols);

    DetentionReport {
        selection,
        total_records: view.len() as u64,
        birthplaces: birthplace_density(&view),
        top_patrols,
        patrol_slices,
        top_arrest_places: top_arrest_places(&view),
        top_referrals: top_referral_recommendations(&view),
        monthly: monthly_distribution(&view),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use trace_report_record_models::DetentionRecord;

    use super::*;

    fn row(date: (i32, u32, u32), birthplace: &str, patrol: &str, place: &str) -> DetentionRecord {
        DetentionRecord {
            admission_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            birthplace: Some(birthplace.to_string()),
            latitude: Some(34.0),
            longitude: Some(36.0),
            arresting_patrol: Some(patrol.to_string()),
            place_of_arrest: Some(place.to_string()),
            referral_recommendation: Some(format!("{place} referral")),
            ..DetentionRecord::default()
        }
    }

    fn table() -> RecordTable {
        RecordTable::new(vec![
            row((2013, 5, 1), "حمص", "p1", "المزة الجديد"),
            row((2013, 5, 15), "حمص", "p1", "المزة القديم"),
            row((2014, 1, 10), "دمشق", "p2", "حلب"),
        ])
    }

    #[test]
    fn all_years_report_covers_every_row() {
        let report = build_report(&table(), YearSelection::AllYears);
        assert_eq!(report.total_records, 3);
        let monthly: Vec<_> = report.monthly.iter().map(|m| (m.period(), m.count)).collect();
        assert_eq!(
            monthly,
            [("2013-05".to_string(), 2), ("2014-01".to_string(), 1)]
        );
        assert_eq!(report.birthplaces.len(), 2);
        assert_eq!(report.patrol_slices[0].percent, 67);
    }

    #[test]
    fn year_filter_removes_other_years_from_every_section() {
        let report = build_report(&table(), YearSelection::Year(2013));
        assert_eq!(report.total_records, 2);
        assert!(report.birthplaces.iter().all(|b| b.birthplace == "حمص"));
        assert!(report.top_patrols.iter().all(|p| p.label == "p1"));
        assert!(report.top_arrest_places.iter().all(|p| p.label != "حلب"));
        assert!(report.top_referrals.iter().all(|r| r.label != "حلب referral"));
        assert_eq!(report.monthly.len(), 1);
        assert_eq!(report.patrol_slices[0].percent, 100);
    }

    #[test]
    fn empty_year_produces_empty_sections() {
        let report = build_report(&table(), YearSelection::Year(2016));
        assert!(report.is_empty());
        assert!(report.birthplaces.is_empty());
        assert!(report.top_patrols.is_empty());
        assert!(report.patrol_slices.is_empty());
        assert!(report.top_arrest_places.is_empty());
        assert!(report.top_referrals.is_empty());
        assert!(report.monthly.is_empty());
    }
}
