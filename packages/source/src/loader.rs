//! Dataset loading: fetch, parse, coerce.

use std::collections::BTreeMap;
use std::sync::Arc;

use trace_report_record_models::{DetentionRecord, RecordTable};

use crate::csv_download::fetch_csv_bytes;
use crate::definition::DatasetDefinition;
use crate::location::DataLocation;
use crate::parsing::{normalize_text, parse_admission_date, parse_coordinate};
use crate::progress::ProgressCallback;
use crate::{DataUnavailable, SourceError};

/// Counters for cells that were present but failed coercion.
///
/// These cells were degraded to `None`; the counters exist for logging
/// only and never fail a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows parsed.
    pub rows: u64,
    /// Non-empty date cells that could not be parsed.
    pub dates_skipped: u64,
    /// Non-empty coordinate cells that were not finite numbers.
    pub coordinates_skipped: u64,
    /// Cells that were not valid UTF-8. Mapped cells become absent;
    /// unmapped text is kept with replacement characters.
    pub undecodable_cells: u64,
}

/// Header positions of the mapped columns.
struct ColumnIndex {
    admission_date: usize,
    birthplace: usize,
    latitude: usize,
    longitude: usize,
    arresting_patrol: usize,
    place_of_arrest: usize,
    referral_recommendation: usize,
    /// `(position, header)` for every unmapped column.
    text: Vec<(usize, String)>,
}

impl ColumnIndex {
    fn resolve(definition: &DatasetDefinition, headers: &[String]) -> Result<Self, SourceError> {
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| SourceError::MissingColumn {
                    column: column.to_string(),
                })
        };

        let columns = &definition.columns;
        let mapped = columns.names();
        let text = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.is_empty() && !mapped.contains(&h.as_str()))
            .map(|(i, h)| (i, h.clone()))
            .collect();

        Ok(Self {
            admission_date: position(&columns.admission_date)?,
            birthplace: position(&columns.birthplace)?,
            latitude: position(&columns.latitude)?,
            longitude: position(&columns.longitude)?,
            arresting_patrol: position(&columns.arresting_patrol)?,
            place_of_arrest: position(&columns.place_of_arrest)?,
            referral_recommendation: position(&columns.referral_recommendation)?,
            text,
        })
    }
}

/// Parses raw CSV bytes into a [`RecordTable`].
///
/// # Errors
///
/// Returns [`SourceError`] if the CSV is malformed, has no header row, or
/// lacks one of the mapped columns. Individual unparseable cells are not
/// errors.
pub fn parse_records(
    definition: &DatasetDefinition,
    bytes: &[u8],
) -> Result<(RecordTable, LoadStats), SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(definition.delimiter_byte())
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_owned())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(SourceError::MissingHeader);
    }

    let index = ColumnIndex::resolve(definition, &headers)?;
    let mut stats = LoadStats::default();
    let mut records = Vec::new();

    for result in reader.byte_records() {
        let row = result?;
        let decoded: Vec<Option<&str>> = row.iter().map(|b| std::str::from_utf8(b).ok()).collect();
        let mapped = [
            index.admission_date,
            index.birthplace,
            index.latitude,
            index.longitude,
            index.arresting_patrol,
            index.place_of_arrest,
            index.referral_recommendation,
        ];
        stats.undecodable_cells += decoded.iter().filter(|c| c.is_none()).count() as u64;
        let undecodable_mapped = mapped
            .iter()
            .filter(|&&i| matches!(decoded.get(i), Some(None)))
            .count();
        if undecodable_mapped > 0 {
            log::debug!(
                "Row {}: {undecodable_mapped} mapped cell(s) are not valid UTF-8",
                stats.rows + 1
            );
        }
        let cell = |i: usize| decoded.get(i).copied().flatten().unwrap_or("");

        let admission_date = parse_admission_date(cell(index.admission_date));
        if admission_date.is_none() && normalize_text(cell(index.admission_date)).is_some() {
            stats.dates_skipped += 1;
        }

        let mut coordinate = |i: usize| {
            let value = parse_coordinate(cell(i));
            if value.is_none() && normalize_text(cell(i)).is_some() {
                stats.coordinates_skipped += 1;
            }
            value
        };
        let latitude = coordinate(index.latitude);
        let longitude = coordinate(index.longitude);

        let text_fields: BTreeMap<String, String> = index
            .text
            .iter()
            .filter_map(|(i, header)| {
                let raw = row.get(*i).map(String::from_utf8_lossy)?;
                normalize_text(&raw).map(|v| (header.clone(), v))
            })
            .collect();

        records.push(DetentionRecord {
            admission_date,
            birthplace: normalize_text(cell(index.birthplace)),
            latitude,
            longitude,
            arresting_patrol: normalize_text(cell(index.arresting_patrol)),
            place_of_arrest: normalize_text(cell(index.place_of_arrest)),
            referral_recommendation: normalize_text(cell(index.referral_recommendation)),
            text_fields,
        });
        stats.rows += 1;
    }

    Ok((RecordTable::new(records), stats))
}

/// Fetches and parses a dataset.
///
/// # Errors
///
/// Returns [`DataUnavailable`] if the source cannot be fetched or parsed.
pub async fn load_records(
    definition: &DatasetDefinition,
    location: &DataLocation,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<RecordTable, DataUnavailable> {
    log::info!("[{}] Loading records from {location}", definition.id);

    let bytes = fetch_csv_bytes(location, definition.is_gzipped(location), progress)
        .await
        .map_err(|e| DataUnavailable::new(location.to_string(), e))?;

    let (table, stats) =
        parse_records(definition, &bytes).map_err(|e| DataUnavailable::new(location.to_string(), e))?;

    if stats.undecodable_cells > 0 {
        log::warn!(
            "[{}] {} cells were not valid UTF-8",
            definition.id,
            stats.undecodable_cells
        );
    }
    if stats.dates_skipped > 0 || stats.coordinates_skipped > 0 {
        log::info!(
            "[{}] Coerced to absent: {} dates, {} coordinates",
            definition.id,
            stats.dates_skipped,
            stats.coordinates_skipped
        );
    }
    log::info!("[{}] Loaded {} records", definition.id, stats.rows);

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::parse_dataset_toml;
    use crate::progress::null_progress;
    use crate::registry::default_dataset;
    use chrono::NaiveDate;

    const HEADER: &str = "date_in,مكان الولادة,lat,lon,الدورية_التي_جلبته,Place of Arrest,احالات,التهمة";

    fn parse(body: &str) -> Result<(RecordTable, LoadStats), SourceError> {
        let csv = format!("{HEADER}\n{body}");
        parse_records(&default_dataset(), csv.as_bytes())
    }

    #[test]
    fn coerces_typed_fields() {
        let (table, stats) =
            parse("2013-05-01,حمص,34.73,36.71,دورية المزة,المزة الجديد,إخلاء سبيل,تظاهر\n").unwrap();
        assert_eq!(stats.rows, 1);
        let record = &table.records()[0];
        assert_eq!(record.admission_date, NaiveDate::from_ymd_opt(2013, 5, 1));
        assert_eq!(record.birthplace.as_deref(), Some("حمص"));
        assert_eq!(record.coordinates(), Some((34.73, 36.71)));
        assert_eq!(record.referral_recommendation.as_deref(), Some("إخلاء سبيل"));
        assert_eq!(record.text_fields.get("التهمة").map(String::as_str), Some("تظاهر"));
    }

    #[test]
    fn bad_cells_degrade_to_absent() {
        let (table, stats) = parse("someday,حمص,north,36.71,,,,\n").unwrap();
        let record = &table.records()[0];
        assert!(record.admission_date.is_none());
        assert!(record.latitude.is_none());
        assert_eq!(record.longitude, Some(36.71));
        assert!(record.arresting_patrol.is_none());
        assert!(record.text_fields.is_empty());
        assert_eq!(stats.dates_skipped, 1);
        assert_eq!(stats.coordinates_skipped, 1);
    }

    #[test]
    fn invalid_utf8_cells_do_not_abort_the_load() {
        let mut csv = format!("{HEADER}\n2013-05-01,حمص,34.73,36.71,p1,a1,r1,").into_bytes();
        csv.extend_from_slice(&[b'x', 0xff, 0xfe, b'\n']);
        csv.extend_from_slice(b"2014-01-10,");
        csv.extend_from_slice(&[0xff]);
        csv.extend_from_slice(",33.51,36.27,p2,a2,r2,ok\n".as_bytes());

        let (table, stats) = parse_records(&default_dataset(), &csv).unwrap();
        assert_eq!(stats.rows, 2);
        assert_eq!(stats.undecodable_cells, 2);

        let first = &table.records()[0];
        assert_eq!(first.birthplace.as_deref(), Some("حمص"));
        assert_eq!(
            first.text_fields.get("التهمة").map(String::as_str),
            Some("x\u{fffd}\u{fffd}")
        );

        let second = &table.records()[1];
        assert!(second.birthplace.is_none());
        assert_eq!(second.admission_date, NaiveDate::from_ymd_opt(2014, 1, 10));
        assert_eq!(second.coordinates(), Some((33.51, 36.27)));
    }

    #[test]
    fn short_rows_are_padded_with_absent_cells() {
        let (table, _) = parse("2014-01-10,دمشق\n").unwrap();
        let record = &table.records()[0];
        assert_eq!(record.birthplace.as_deref(), Some("دمشق"));
        assert!(record.latitude.is_none());
        assert!(record.place_of_arrest.is_none());
    }

    #[test]
    fn missing_mapped_column_fails_the_load() {
        let err = parse_records(&default_dataset(), b"date_in,lat,lon\n2013-05-01,1,2\n").unwrap_err();
        assert!(
            matches!(err, SourceError::MissingColumn { ref column } if column == "مكان الولادة")
        );
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = parse_records(&default_dataset(), b"").unwrap_err();
        assert!(matches!(err, SourceError::MissingHeader));
    }

    #[test]
    fn honours_custom_delimiter() {
        let def = parse_dataset_toml(
            r#"
id = "semi"
name = "Semicolon export"
url = "semi.csv"
delimiter = ";"

[columns]
admission_date = "d"
birthplace = "b"
latitude = "y"
longitude = "x"
arresting_patrol = "p"
place_of_arrest = "a"
referral_recommendation = "r"
"#,
        )
        .unwrap();
        let (table, _) = parse_records(&def, "d;b;y;x;p;a;r\n2015-02-03;حلب;36.2;37.1;p1;a1;r1\n".as_bytes())
            .unwrap();
        assert_eq!(table.records()[0].coordinates(), Some((36.2, 37.1)));
    }

    #[tokio::test]
    async fn load_from_missing_file_is_data_unavailable() {
        let location = DataLocation::from("/definitely/not/here.csv");
        let err = load_records(&default_dataset(), &location, &null_progress())
            .await
            .unwrap_err();
        assert_eq!(err.location, "/definitely/not/here.csv");
        assert!(matches!(err.cause, SourceError::Io(_)));
    }
}
