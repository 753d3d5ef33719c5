use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

/// Placeholder feeds put in `published` when an entry carries no date.
pub const UNKNOWN_PUBLISHED: &str = "Unknown";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a feed publication date. Returns `None` for the sentinel, for
/// blank input and for anything that isn't a recognised format; naive
/// values are read as UTC.
pub fn parse_published(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() || value == UNKNOWN_PUBLISHED {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.and_utc());
        }
    }
    if let Some(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Some(parsed.and_utc());
    }

    debug!("Unparseable publication date {:?}, falling back to fetch time", value);
    None
}
