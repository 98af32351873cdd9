use crate::error::{GrantError, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Parses an `--as-of` value. A bare `YYYY-MM-DD` means midnight UTC.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            GrantError::InvalidInput(format!(
                "'{value}' is not a date (expected YYYY-MM-DD or RFC 3339)"
            ))
        })
}
