use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

// ── TimestampParser ───────────────────────────────────────────────────────────

/// Parses the `Start Time` cells found in the city files.
pub struct TimestampParser;

impl TimestampParser {
    /// Naive date-time patterns tried in order. The published data uses the
    /// first one.
    const FORMATS: &'static [&'static str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ];

    /// Parse `s` into a naive local timestamp.
    ///
    /// A bare date (`%Y-%m-%d`) is read as midnight. Returns `None` for empty
    /// strings or unrecognised formats.
    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        for fmt in Self::FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt);
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }

        debug!("TimestampParser: could not parse timestamp string \"{}\"", s);
        None
    }
}
