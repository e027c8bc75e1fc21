//! The four themed statistics reports.
//!
//! Every report prints a header, its figures (or a no-data line for an empty
//! table), the wall-clock time it took and a 40-dash separator.

use std::io::Write;
use std::time::Instant;

use bikeshare_core::error::Result;
use bikeshare_core::formatting::{format_elapsed, format_raw_float, separator};
use bikeshare_core::models::{month_name, TripTable};
use bikeshare_data::analysis::{DurationStats, StationStats, TimeStats, UserStats};
use tracing::debug;

pub const NO_DATA: &str = "No trips match the selected filters.";

/// Run all four reports in order.
pub fn display_all<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    time_stats(out, table)?;
    station_stats(out, table)?;
    trip_duration_stats(out, table)?;
    user_stats(out, table)?;
    Ok(())
}

/// Most frequent month, weekday and start hour.
pub fn time_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    match TimeStats::compute(table) {
        Some(stats) => {
            let (month, month_n) = stats.month;
            let (day, day_n) = stats.day;
            let (hour, hour_n) = stats.hour;
            writeln!(
                out,
                "Most commonly used month: {} ({})",
                month_name(month),
                month_n
            )?;
            writeln!(out, "Most Common Day: {} ({})", day, day_n)?;
            writeln!(out, "Most Common Start Hour: {} ({})", hour, hour_n)?;
        }
        None => writeln!(out, "{}", NO_DATA)?,
    }

    finish(out, "time", started)
}

/// Most popular start station, end station and trip.
pub fn station_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    match StationStats::compute(table) {
        Some(stats) => {
            writeln!(
                out,
                "Most commonly used Start Station: {}",
                top_or_nan(&stats.start_station)
            )?;
            writeln!(
                out,
                "Most commonly used End Station: {}",
                top_or_nan(&stats.end_station)
            )?;
            writeln!(out, "Most frequent Trip: {}", top_or_nan(&stats.trip))?;
        }
        None => writeln!(out, "{}", NO_DATA)?,
    }

    finish(out, "station", started)
}

/// Total and mean trip duration, in raw seconds.
pub fn trip_duration_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    match DurationStats::compute(table) {
        Some(stats) => {
            writeln!(out, "Total travel time:  {}", stats.total)?;
            writeln!(
                out,
                "Average trip duration:  {}",
                format_raw_float(stats.mean.unwrap_or(f64::NAN))
            )?;
        }
        None => writeln!(out, "{}", NO_DATA)?,
    }

    finish(out, "duration", started)
}

/// User type counts, plus gender counts and birth-year figures where the
/// city publishes them.
pub fn user_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    match UserStats::compute(table) {
        Some(stats) => {
            for (user_type, n) in &stats.user_types {
                writeln!(out, "{} {}", user_type, n)?;
            }

            if let Some(genders) = &stats.genders {
                writeln!(out, "{}", separator(20))?;
                for (gender, n) in genders {
                    writeln!(out, "{} {}", gender, n)?;
                }
            }

            if let Some(years) = &stats.birth_years {
                writeln!(out, "{}", separator(20))?;
                writeln!(out, "Earliest date: {}", year_or_nan(years.earliest))?;
                writeln!(out, "Most recent date: {}", year_or_nan(years.most_recent))?;
                match years.most_common {
                    Some((year, n)) => writeln!(out, "Most common date: {} ({})", year, n)?,
                    None => writeln!(out, "Most common date: NaN")?,
                }
            }
        }
        None => writeln!(out, "{}", NO_DATA)?,
    }

    finish(out, "user", started)
}

/// `"<value> (<count>)"`, or `NaN` when nothing was counted.
fn top_or_nan(top: &Option<(String, usize)>) -> String {
    match top {
        Some((value, n)) => format!("{} ({})", value, n),
        None => "NaN".to_string(),
    }
}

fn year_or_nan(year: Option<i32>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| "NaN".to_string())
}

fn finish<W: Write>(out: &mut W, report: &str, started: Instant) -> Result<()> {
    let elapsed = started.elapsed();
    debug!("{} report took {:?}", report, elapsed);
    writeln!(out, "\nThis took {} seconds.", format_elapsed(elapsed))?;
    writeln!(out, "{}", separator(40))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
