//! Plain-text rendering of report data for the terminal.
//!
//! Every section has a heading; an empty section prints a "no data" line
//! instead of an empty table.

use std::fmt::Write as _;

use trace_report_analytics_models::{CategoryCount, DetentionReport, YearSelection};
use trace_report_taxonomy::{
    ChargeCategory, Committee, InvestigationDepartment, InvestigatorCategory, MilitaryRank,
    RECORD_EXCERPTS, REFERENCED_ENTITIES,
};

const NO_DATA: &str = "  (no data for this selection)";

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

fn counts(out: &mut String, rows: &[CategoryCount]) {
    if rows.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
        return;
    }
    for row in rows {
        let _ = writeln!(out, "  {:>6}  {}", row.count, row.label);
    }
}

/// Renders the year selector contents.
#[must_use]
pub fn years(options: &[YearSelection]) -> String {
    let mut out = String::new();
    for option in options {
        let _ = writeln!(out, "{option}");
    }
    out
}

/// Renders every section of `report`.
#[must_use]
pub fn report(report: &DetentionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Detention report: {} ({} records)",
        report.selection, report.total_records
    );

    heading(&mut out, "Birthplaces");
    if report.birthplaces.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
    }
    for place in &report.birthplaces {
        let _ = writeln!(
            out,
            "  {:>6}  {}  ({:.4}, {:.4})  radius {:.1}",
            place.count, place.birthplace, place.latitude, place.longitude, place.radius
        );
    }

    heading(&mut out, "Arresting patrols (top 10)");
    if report.patrol_slices.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
    }
    for slice in &report.patrol_slices {
        let _ = writeln!(
            out,
            "  {:>6}  {:>3}%  {}",
            slice.count, slice.percent, slice.label
        );
    }

    heading(&mut out, "Places of arrest (top 15)");
    counts(&mut out, &report.top_arrest_places);

    heading(&mut out, "Referral recommendations (top 20)");
    counts(&mut out, &report.top_referrals);

    heading(&mut out, "Admissions per month");
    if report.monthly.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
    }
    for month in &report.monthly {
        let _ = writeln!(out, "  {}  {:>6}", month.period(), month.count);
    }

    out
}

/// Renders the static reference lists.
#[must_use]
pub fn taxonomy() -> String {
    let mut out = String::new();

    heading(&mut out, "Charges");
    for charge in ChargeCategory::all() {
        let _ = writeln!(
            out,
            "  {}. {}: {}",
            charge.rank(),
            charge.label(),
            charge.description()
        );
    }

    heading(&mut out, "Investigators");
    for category in InvestigatorCategory::all() {
        let _ = writeln!(out, "  {}: {}", category.label(), category.description());
    }

    heading(&mut out, "Military ranks");
    for rank in MilitaryRank::all() {
        let _ = writeln!(out, "  {}", rank.label());
    }

    heading(&mut out, "Investigation departments");
    for department in InvestigationDepartment::all() {
        let _ = writeln!(out, "  {}", department.label());
    }

    heading(&mut out, "Committees");
    for committee in Committee::all() {
        let _ = writeln!(out, "  {}", committee.label());
    }

    heading(&mut out, "Referenced entities");
    for entity in REFERENCED_ENTITIES {
        let _ = writeln!(out, "  {entity}");
    }

    heading(&mut out, "Record excerpts");
    for excerpt in RECORD_EXCERPTS {
        let _ = writeln!(out, "  - {}", excerpt.replace('\n', "\n    "));
    }

    out
}
