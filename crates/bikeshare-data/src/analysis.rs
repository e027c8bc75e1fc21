//! Descriptive statistics over a filtered [`TripTable`].
//!
//! Each `compute` is a read-only pass over the table. The "most frequent"
//! figures come from [`FrequencyCounter`], so ties resolve to the value seen
//! first. An empty table yields `None` rather than an undefined top value.

use bikeshare_core::models::TripTable;

use crate::aggregator::FrequencyCounter;

// ── TimeStats ─────────────────────────────────────────────────────────────────

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Month number (1–12) and its trip count.
    pub month: (u32, usize),
    /// Full weekday name and its trip count.
    pub day: (&'static str, usize),
    /// Start hour (0–23) and its trip count.
    pub hour: (u32, usize),
}

impl TimeStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        Some(Self {
            month: FrequencyCounter::most_common(table.rows.iter().map(|r| r.month))?,
            day: FrequencyCounter::most_common(table.rows.iter().map(|r| r.day_of_week))?,
            hour: FrequencyCounter::most_common(table.rows.iter().map(|r| r.start_hour()))?,
        })
    }
}

// ── StationStats ──────────────────────────────────────────────────────────────

/// Most popular stations and trip. Rows missing a station are skipped; a
/// figure is `None` when every row lacks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<(String, usize)>,
    pub end_station: Option<(String, usize)>,
    /// `"<start> <-> <end>"` label and its count, over rows with both stations.
    pub trip: Option<(String, usize)>,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let start = FrequencyCounter::most_common(
            table.rows.iter().filter_map(|r| r.start_station.as_deref()),
        );
        let end = FrequencyCounter::most_common(
            table.rows.iter().filter_map(|r| r.end_station.as_deref()),
        );

        Some(Self {
            start_station: start.map(|(s, n)| (s.to_string(), n)),
            end_station: end.map(|(s, n)| (s.to_string(), n)),
            trip: FrequencyCounter::most_common(table.rows.iter().filter_map(|r| r.trip_label())),
        })
    }
}

// ── DurationStats ─────────────────────────────────────────────────────────────

/// Aggregate trip duration, in seconds, over rows that carry one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    /// `0` when no row carries a duration.
    pub total: f64,
    /// `None` when no row carries a duration.
    pub mean: Option<f64>,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }
        let (total, count) = table
            .rows
            .iter()
            .filter_map(|r| r.trip_duration)
            .fold((0.0, 0usize), |(sum, n), d| (sum + d, n + 1));
        Some(Self {
            total,
            mean: (count > 0).then(|| total / count as f64),
        })
    }
}

// ── UserStats ─────────────────────────────────────────────────────────────────

/// Earliest, most recent and most common birth year. Each figure is `None`
/// when no row carries a birth year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<(i32, usize)>,
}

/// User demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Every distinct user type with its count, most frequent first.
    pub user_types: Vec<(String, usize)>,
    /// Every distinct gender with its count; `None` when the city file has no
    /// `Gender` column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the city file has no `Birth Year` column.
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let user_types = owned_counts(FrequencyCounter::value_counts(
            table.rows.iter().filter_map(|r| r.user_type.as_deref()),
        ));

        let genders = table.schema.has_gender().then(|| {
            owned_counts(FrequencyCounter::value_counts(
                table.rows.iter().filter_map(|r| r.gender.as_deref()),
            ))
        });

        let birth_years = table.schema.has_birth_year().then(|| {
            let years = || table.rows.iter().filter_map(|r| r.birth_year);
            BirthYearStats {
                earliest: years().min(),
                most_recent: years().max(),
                most_common: FrequencyCounter::most_common(years()),
            }
        });

        Some(Self {
            user_types,
            genders,
            birth_years,
        })
    }
}

fn owned_counts(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, n)| (value.to_string(), n))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
