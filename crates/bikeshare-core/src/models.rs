use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use std::fmt;

// ── Column names ──────────────────────────────────────────────────────────────

pub const START_TIME_COL: &str = "Start Time";
pub const END_TIME_COL: &str = "End Time";
pub const TRIP_DURATION_COL: &str = "Trip Duration";
pub const START_STATION_COL: &str = "Start Station";
pub const END_STATION_COL: &str = "End Station";
pub const USER_TYPE_COL: &str = "User Type";
pub const GENDER_COL: &str = "Gender";
pub const BIRTH_YEAR_COL: &str = "Birth Year";

/// Columns every city file must carry.
pub const MANDATORY_COLUMNS: [&str; 6] = [
    START_TIME_COL,
    END_TIME_COL,
    TRIP_DURATION_COL,
    START_STATION_COL,
    END_STATION_COL,
    USER_TYPE_COL,
];

/// Sentinel meaning "no filter" in the month and day option maps.
pub const ALL: &str = "All";

// ── City ──────────────────────────────────────────────────────────────────────

/// The three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Lowercase city name as used in the option map.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's trip data, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Option maps ───────────────────────────────────────────────────────────────

/// Accepted answers to the city prompt.
pub const CITY_OPTIONS: [(&str, City); 3] = [
    ("1", City::Chicago),
    ("2", City::NewYorkCity),
    ("3", City::Washington),
];

/// Accepted answers to the month prompt. The key doubles as the month number.
pub const MONTH_OPTIONS: [(&str, &str); 7] = [
    ("0", ALL),
    ("1", "January"),
    ("2", "February"),
    ("3", "March"),
    ("4", "April"),
    ("5", "May"),
    ("6", "June"),
];

/// Accepted answers to the day prompt. The week starts on Saturday.
pub const DAY_OPTIONS: [(&str, &str); 8] = [
    ("0", ALL),
    ("1", "Saturday"),
    ("2", "Sunday"),
    ("3", "Monday"),
    ("4", "Tuesday"),
    ("5", "Wednesday"),
    ("6", "Thursday"),
    ("7", "Friday"),
];

/// Reverse lookup of a month name in [`MONTH_OPTIONS`], yielding its number.
///
/// Returns `None` for the `"All"` sentinel and for unknown names.
pub fn month_code(month: &str) -> Option<u32> {
    MONTH_OPTIONS
        .iter()
        .filter(|(_, name)| *name != ALL)
        .find(|(_, name)| *name == month)
        .and_then(|(key, _)| key.parse().ok())
}

/// Display name for a month number via [`MONTH_OPTIONS`].
///
/// Months outside the option map (July onward) fall back to the number.
pub fn month_name(month: u32) -> String {
    let key = month.to_string();
    MONTH_OPTIONS
        .iter()
        .find(|(k, _)| *k == key)
        .filter(|(_, name)| *name != ALL)
        .map(|(_, name)| name.to_string())
        .unwrap_or(key)
}

/// Full English weekday name, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ── Filter selection ──────────────────────────────────────────────────────────

/// The (city, month, day) triple chosen at the start of a session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    /// Month name from [`MONTH_OPTIONS`], or `"All"`.
    pub month: &'static str,
    /// Day name from [`DAY_OPTIONS`], or `"All"`.
    pub day: &'static str,
}

impl FilterSelection {
    /// Selection covering every trip of `city`.
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: ALL,
            day: ALL,
        }
    }
}

// ── Trip records ──────────────────────────────────────────────────────────────

/// A single trip with its derived month and weekday columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Kept verbatim; no statistic reads it.
    pub end_time: String,
    /// Seconds.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time`, 1-indexed.
    pub month: u32,
    /// Full English weekday name of `start_time`.
    pub day_of_week: &'static str,
}

impl TripRecord {
    /// Build a record, deriving the month and weekday columns from `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: String,
        trip_duration: Option<f64>,
        start_station: Option<String>,
        end_station: Option<String>,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            day_of_week: weekday_name(start_time.weekday()),
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    /// Hour of day (0–23) the trip started.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// `"<start station> <-> <end station>"`, or `None` when either station
    /// is missing.
    pub fn trip_label(&self) -> Option<String> {
        let start = self.start_station.as_deref()?;
        let end = self.end_station.as_deref()?;
        Some(format!("{} <-> {}", start, end))
    }

    /// Text rendering of one column for tabular display.
    ///
    /// Missing values render as `NaN`; unknown columns render empty.
    pub fn cell(&self, column: &str) -> String {
        match column {
            START_TIME_COL => self.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            END_TIME_COL => self.end_time.clone(),
            TRIP_DURATION_COL => missing_or(self.trip_duration.map(|d| d.to_string())),
            START_STATION_COL => missing_or(self.start_station.clone()),
            END_STATION_COL => missing_or(self.end_station.clone()),
            USER_TYPE_COL => missing_or(self.user_type.clone()),
            GENDER_COL => missing_or(self.gender.clone()),
            BIRTH_YEAR_COL => missing_or(self.birth_year.map(|y| y.to_string())),
            _ => String::new(),
        }
    }
}

fn missing_or(value: Option<String>) -> String {
    value.unwrap_or_else(|| "NaN".to_string())
}

// ── Schema and table ──────────────────────────────────────────────────────────

/// Column layout of a loaded city file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripSchema {
    /// Header names in file order.
    pub columns: Vec<String>,
}

impl TripSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn has_gender(&self) -> bool {
        self.has_column(GENDER_COL)
    }

    pub fn has_birth_year(&self) -> bool {
        self.has_column(BIRTH_YEAR_COL)
    }

    /// Mandatory columns absent from this schema, in [`MANDATORY_COLUMNS`] order.
    pub fn missing_mandatory(&self) -> Vec<String> {
        MANDATORY_COLUMNS
            .iter()
            .filter(|col| !self.has_column(col))
            .map(|col| col.to_string())
            .collect()
    }

    /// Columns shown by the row pager: mandatory columns in file order,
    /// then `Gender` and `Birth Year` when present.
    pub fn display_columns(&self) -> Vec<String> {
        let mut cols: Vec<String> = self
            .columns
            .iter()
            .filter(|c| MANDATORY_COLUMNS.contains(&c.as_str()))
            .cloned()
            .collect();
        if self.has_gender() {
            cols.push(GENDER_COL.to_string());
        }
        if self.has_birth_year() {
            cols.push(BIRTH_YEAR_COL.to_string());
        }
        cols
    }
}

/// The typed, in-memory trip table for one city.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub schema: TripSchema,
    pub rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(schema: TripSchema, rows: Vec<TripRecord>) -> Self {
        Self { schema, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
