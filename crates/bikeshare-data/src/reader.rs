//! City file loading for the bikeshare explorer.
//!
//! Reads a city's CSV file into a typed [`TripTable`], checks the mandatory
//! columns, derives the month and weekday columns and applies the month/day
//! filters of a [`FilterSelection`].

use std::io::Read;
use std::path::{Path, PathBuf};

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::formatting::title_case;
use bikeshare_core::models::{
    month_code, FilterSelection, TripRecord, TripSchema, TripTable, ALL,
};
use bikeshare_core::settings::city_path_in;
use bikeshare_core::time_utils::TimestampParser;
use serde::Deserialize;
use tracing::{debug, warn};

// ── Raw CSV row ───────────────────────────────────────────────────────────────

/// One CSV row as published. Columns not named here are ignored; blank cells
/// decode to `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    /// Published as a float, e.g. `1989.0`.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_record(self, row: usize) -> Result<TripRecord> {
        let start_time = TimestampParser::parse(&self.start_time).ok_or_else(|| {
            BikeshareError::TimestampParse {
                row,
                value: self.start_time.clone(),
            }
        })?;

        Ok(TripRecord::new(
            start_time,
            self.end_time,
            self.trip_duration.filter(|d| !d.is_nan()),
            non_blank(self.start_station),
            non_blank(self.end_station),
            non_blank(self.user_type),
            non_blank(self.gender),
            self.birth_year
                .filter(|y| y.is_finite())
                .map(|y| y.trunc() as i32),
        ))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the trip table for `selection.city` from `data_dir` and apply the
/// month and day filters.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let path = city_path_in(data_dir, selection.city);
    let table = read_trip_file(&path)?;
    Ok(apply_filters(table, selection.month, selection.day))
}

/// Read and validate a single city file without filtering.
pub fn read_trip_file(path: &Path) -> Result<TripTable> {
    let file = std::fs::File::open(path).map_err(|source| BikeshareError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    read_trip_table(std::io::BufReader::new(file), &label, path)
}

/// Decode a CSV stream into a [`TripTable`].
///
/// `label` names the source in the missing-column report; `path` is carried by
/// CSV decoding errors.
pub fn read_trip_table<R: Read>(reader: R, label: &str, path: &Path) -> Result<TripTable> {
    let csv_err = |source: csv::Error| BikeshareError::CsvParse {
        path: PathBuf::from(path),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?;
    let schema = TripSchema::new(headers.iter().map(|h| h.to_string()).collect());

    let missing = schema.missing_mandatory();
    if !missing.is_empty() {
        warn!("{} is missing columns: {}", label, missing.join(", "));
        return Err(BikeshareError::MissingColumns {
            file: label.to_string(),
            columns: missing,
        });
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(csv_err)?;
        rows.push(raw.into_record(idx)?);
    }

    debug!("Loaded {} trips from {}", rows.len(), label);
    Ok(TripTable::new(schema, rows))
}

/// Keep only the trips matching `month` and `day`; `"All"` disables a filter.
pub fn apply_filters(mut table: TripTable, month: &str, day: &str) -> TripTable {
    let before = table.len();

    if month != ALL {
        match month_code(month) {
            Some(code) => table.rows.retain(|r| r.month == code),
            None => {
                warn!("Unknown month filter \"{}\"; no trips match", month);
                table.rows.clear();
            }
        }
    }

    if day != ALL {
        let wanted = title_case(day);
        table
            .rows
            .retain(|r| r.day_of_week.eq_ignore_ascii_case(&wanted));
    }

    debug!(
        "Filters month={} day={} kept {} of {} trips",
        month,
        day,
        table.len(),
        before
    );
    table
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{City, GENDER_COL};
    use std::io::Write;
    use tempfile::TempDir;

    const HEADER: &str = ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

    // 2017-01-02 Monday, 2017-01-07 Saturday, 2017-02-06 Monday, 2017-03-04 Saturday.
    const ROWS: &[&str] = &[
        "0,2017-01-02 08:10:00,2017-01-02 08:20:00,600,A St,B St,Subscriber,Male,1980.0",
        "1,2017-01-07 09:00:00,2017-01-07 09:30:00,1800,B St,C St,Customer,,",
        "2,2017-02-06 17:45:00,2017-02-06 18:00:00,900,A St,C St,Subscriber,Female,1992.0",
        "3,2017-03-04 12:00:00,2017-03-04 12:05:00,300,C St,A St,Subscriber,Female,1975.0",
    ];

    fn csv_text(header: &str, rows: &[&str]) -> String {
        let mut s = String::from(header);
        s.push('\n');
        for r in rows {
            s.push_str(r);
            s.push('\n');
        }
        s
    }

    fn write_city(dir: &TempDir, city: City, contents: &str) {
        let mut f = std::fs::File::create(dir.path().join(city.file_name())).expect("create");
        f.write_all(contents.as_bytes()).expect("write");
    }

    fn parse(contents: &str) -> Result<TripTable> {
        read_trip_table(contents.as_bytes(), "test.csv", Path::new("test.csv"))
    }

    // ── read_trip_table ───────────────────────────────────────────────────────

    #[test]
    fn test_reads_rows_and_derives_columns() {
        let table = parse(&csv_text(HEADER, ROWS)).expect("load");
        assert_eq!(table.len(), 4);
        assert_eq!(table.rows[0].month, 1);
        assert_eq!(table.rows[0].day_of_week, "Monday");
        assert_eq!(table.rows[1].day_of_week, "Saturday");
        assert_eq!(table.rows[2].start_hour(), 17);
        assert!(table.schema.has_gender());
        assert!(table.schema.has_birth_year());
    }

    #[test]
    fn test_blank_optional_cells_are_missing() {
        let table = parse(&csv_text(HEADER, ROWS)).expect("load");
        assert_eq!(table.rows[0].gender.as_deref(), Some("Male"));
        assert_eq!(table.rows[0].birth_year, Some(1980));
        assert!(table.rows[1].gender.is_none());
        assert!(table.rows[1].birth_year.is_none());
    }

    #[test]
    fn test_missing_single_mandatory_column() {
        let header = "Start Time,End Time,Trip Duration,Start Station,End Station";
        let err = parse(&csv_text(header, &[])).unwrap_err();
        match err {
            BikeshareError::MissingColumns { file, columns } => {
                assert_eq!(file, "test.csv");
                assert_eq!(columns, vec!["User Type".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_each_mandatory_column_is_reported() {
        for dropped in bikeshare_core::models::MANDATORY_COLUMNS {
            let header: Vec<&str> = bikeshare_core::models::MANDATORY_COLUMNS
                .iter()
                .copied()
                .filter(|c| *c != dropped)
                .collect();
            let err = parse(&csv_text(&header.join(","), &[])).unwrap_err();
            match err {
                BikeshareError::MissingColumns { columns, .. } => {
                    assert_eq!(columns, vec![dropped.to_string()]);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_optional_columns_absent_loads() {
        let header = "Start Time,End Time,Trip Duration,Start Station,End Station,User Type";
        let rows = ["2017-06-01 10:00:00,2017-06-01 10:10:00,489.066,X,Y,Subscriber"];
        let table = parse(&csv_text(header, &rows)).expect("load");
        assert_eq!(table.len(), 1);
        assert!(!table.schema.has_column(GENDER_COL));
        assert!(!table.schema.has_birth_year());
        let duration = table.rows[0].trip_duration.expect("duration");
        assert!((duration - 489.066).abs() < 1e-9);
    }

    #[test]
    fn test_unparsable_timestamp_fails_load() {
        let rows = ["0,yesterday,2017-01-02 08:20:00,600,A St,B St,Subscriber,Male,1980.0"];
        let err = parse(&csv_text(HEADER, &rows)).unwrap_err();
        match err {
            BikeshareError::TimestampParse { row, value } => {
                assert_eq!(row, 0);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_station_and_duration_cells_are_missing() {
        let rows = [
            "0,2017-01-02 08:10:00,2017-01-02 08:20:00,,,B St,Subscriber,Male,1980.0",
            "1,2017-01-03 08:10:00,2017-01-03 08:20:00,600,A St, ,Subscriber,Male,1980.0",
        ];
        let table = parse(&csv_text(HEADER, &rows)).expect("load");
        assert_eq!(table.len(), 2);
        assert!(table.rows[0].trip_duration.is_none());
        assert!(table.rows[0].start_station.is_none());
        assert_eq!(table.rows[0].end_station.as_deref(), Some("B St"));
        assert_eq!(table.rows[1].trip_duration, Some(600.0));
        assert!(table.rows[1].end_station.is_none());
    }

    #[test]
    fn test_non_numeric_duration_fails_load() {
        let rows = ["0,2017-01-02 08:10:00,2017-01-02 08:20:00,ten,A St,B St,Subscriber,Male,1980.0"];
        let err = parse(&csv_text(HEADER, &rows)).unwrap_err();
        assert!(matches!(err, BikeshareError::CsvParse { .. }));
    }

    // ── apply_filters ─────────────────────────────────────────────────────────

    #[test]
    fn test_month_filter() {
        let table = parse(&csv_text(HEADER, ROWS)).expect("load");
        let filtered = apply_filters(table, "January", ALL);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.rows.iter().all(|r| r.month == 1));
    }

    #[test]
    fn test_day_filter() {
        let table = parse(&csv_text(HEADER, ROWS)).expect("load");
        let filtered = apply_filters(table, ALL, "Monday");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.rows.iter().all(|r| r.day_of_week == "Monday"));
    }

    #[test]
    fn test_day_filter_is_case_insensitive() {
        let table = parse(&csv_text(HEADER, ROWS)).expect("load");
        let filtered = apply_filters(table, ALL, "saturday");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.rows.iter().all(|r| r.day_of_week == "Saturday"));
    }

    #[test]
    fn test_month_and_day_filter() {
        let table = parse(&csv_text(HEADER, ROWS)).expect("load");
        let filtered = apply_filters(table, "March", "Saturday");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows[0].start_station.as_deref(), Some("C St"));
    }

    #[test]
    fn test_filters_can_empty_the_table() {
        let table = parse(&csv_text(HEADER, ROWS)).expect("load");
        let filtered = apply_filters(table, "June", ALL);
        assert!(filtered.is_empty());
        // The schema survives filtering.
        assert!(filtered.schema.has_gender());
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let table = parse(&csv_text(HEADER, ROWS)).expect("load");
        assert_eq!(apply_filters(table, ALL, ALL).len(), 4);
    }

    // ── load_data ─────────────────────────────────────────────────────────────

    #[test]
    fn test_load_data_from_dir() {
        let tmp = TempDir::new().expect("tempdir");
        write_city(&tmp, City::Chicago, &csv_text(HEADER, ROWS));

        let selection = FilterSelection {
            city: City::Chicago,
            month: "February",
            day: ALL,
        };
        let table = load_data(tmp.path(), &selection).expect("load");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].month, 2);
    }

    #[test]
    fn test_load_data_missing_file() {
        let tmp = TempDir::new().expect("tempdir");
        let err = load_data(tmp.path(), &FilterSelection::unfiltered(City::Washington))
            .unwrap_err();
        match err {
            BikeshareError::FileRead { path, .. } => {
                assert!(path.ends_with("washington.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_data_reports_file_name_for_missing_columns() {
        let tmp = TempDir::new().expect("tempdir");
        write_city(
            &tmp,
            City::NewYorkCity,
            "Start Time,End Time,Trip Duration,Start Station,User Type\n",
        );
        let err = load_data(tmp.path(), &FilterSelection::unfiltered(City::NewYorkCity))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing column 'End Station' in 'new_york_city.csv' file"
        );
    }
}
