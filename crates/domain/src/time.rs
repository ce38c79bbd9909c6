//! Time and timestamp helpers, including the client wire format.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DateParseError;

/// UTC timestamp used for recorded readings.
pub type Timestamp = DateTime<Utc>;

/// `strftime` pattern clients use to submit timestamps.
pub const WIRE_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

/// Human-readable form of [`WIRE_FORMAT`], used in error messages.
pub const WIRE_FORMAT_HINT: &str = "MM-DD-YYYY HH:MM:SS";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a client-supplied timestamp in the wire format, interpreted as UTC.
///
/// # Errors
///
/// Returns [`DateParseError`] when `value` does not match [`WIRE_FORMAT`].
pub fn parse_wire(value: &str) -> Result<Timestamp, DateParseError> {
    NaiveDateTime::parse_from_str(value, WIRE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| DateParseError {
            value: value.to_string(),
            expected: WIRE_FORMAT_HINT,
        })
}
