//! Timestamp conversions for the storage layer.
//!
//! The canonical in-process representation is [`DateTime<Utc>`]. SQLite
//! columns hold RFC 3339 text; these functions are the only place that
//! format is produced or consumed. Wire JSON uses chrono's serde
//! implementation directly and does not go through this module.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Format accepted by [`from_storage`] for rows written by older databases.
const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a timestamp into the storage text format.
///
/// Microsecond precision keeps lexicographic ordering of stored values
/// consistent with chronological ordering, which `MAX(clicked_at)` relies on.
pub fn to_storage(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a storage text value back into a timestamp.
///
/// Accepts RFC 3339 and the legacy space-separated format.
pub fn from_storage(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(t) => Ok(t.with_timezone(&Utc)),
        Err(rfc_err) => NaiveDateTime::parse_from_str(raw, LEGACY_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_err),
    }
}
