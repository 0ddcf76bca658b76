//! Creation date parsing

use crate::error::{RipenError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Accepted datetime encodings, tried in order after the date-only form.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a document creation date into a naive point in time.
///
/// `YYYY-MM-DD` is tried first and normalizes to midnight; the datetime
/// encodings follow in a fixed order and the first successful parse wins.
/// A value matching none of the encodings is a [`RipenError::DateFormat`].
pub fn parse_creation_date(input: &str) -> Result<NaiveDateTime> {
    let value = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime);
        }
    }

    Err(RipenError::DateFormat(input.to_string()))
}
