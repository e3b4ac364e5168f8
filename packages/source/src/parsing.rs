//! Lenient cell coercion.
//!
//! Every function here returns `None` instead of failing: a bad cell
//! degrades to an absent value and never aborts the row or the load.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Cell contents that mean "missing": the usual NA spellings written by
/// spreadsheet and dataframe exports.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// Month-first before day-first: an ambiguous `05/03/2013` is 3 May.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Trims a cell and maps empty strings and NA markers to `None`.
#[must_use]
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses an admission date, discarding any time-of-day component.
#[must_use]
pub fn parse_admission_date(raw: &str) -> Option<NaiveDate> {
    let s = normalize_text(raw)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Some(dt.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&s, format) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&s, format).ok())
}

/// Parses a single coordinate. Non-numeric and non-finite values (`inf`,
/// `NaN`) become `None`.
#[must_use]
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    normalize_text(raw)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_admission_date("2013-05-01"), Some(ymd(2013, 5, 1)));
    }

    #[test]
    fn parses_datetime_and_drops_time() {
        assert_eq!(
            parse_admission_date("2013-05-15 10:30:00"),
            Some(ymd(2013, 5, 15))
        );
        assert_eq!(
            parse_admission_date("2014-01-10T08:00:00.000"),
            Some(ymd(2014, 1, 10))
        );
        assert_eq!(
            parse_admission_date("2014-01-10T08:00:00+03:00"),
            Some(ymd(2014, 1, 10))
        );
    }

    #[test]
    fn slash_dates_prefer_month_first() {
        assert_eq!(parse_admission_date("05/03/2013"), Some(ymd(2013, 5, 3)));
        assert_eq!(parse_admission_date("25/03/2013"), Some(ymd(2013, 3, 25)));
    }

    #[test]
    fn unparseable_dates_become_absent() {
        assert!(parse_admission_date("not-a-date").is_none());
        assert!(parse_admission_date("2013-13-45").is_none());
        assert!(parse_admission_date("").is_none());
        assert!(parse_admission_date("NaN").is_none());
    }

    #[test]
    fn parses_coordinates() {
        let lat = parse_coordinate(" 33.5138 ").unwrap();
        assert!((lat - 33.5138).abs() < f64::EPSILON);
        assert!(parse_coordinate("-0.0").is_some());
    }

    #[test]
    fn garbage_coordinates_become_absent() {
        for raw in ["abc", "33,5", "", "nan", "NaN", "inf", "-inf", "null"] {
            assert!(parse_coordinate(raw).is_none(), "{raw:?} should be absent");
        }
    }

    #[test]
    fn normalizes_text_cells() {
        assert_eq!(normalize_text("  حمص "), Some("حمص".to_string()));
        assert_eq!(normalize_text("no_value"), Some("no_value".to_string()));
        assert!(normalize_text("   ").is_none());
        assert!(normalize_text("N/A").is_none());
    }
}
