//! Build date, optionally pinned for reproducible builds.

use chrono::{DateTime, NaiveDate};

use crate::error::DateError;

/// Environment variable that pins the build date (Unix seconds, UTC).
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Compute the build date.
///
/// With `source_date_epoch` set, the UTC calendar date of that timestamp is
/// used; otherwise `today` is called for the local date.
///
/// # Example
///
/// ```
/// use mkverhdr_core::build_date;
///
/// let date = build_date(Some("0"), || chrono::NaiveDate::MIN).unwrap();
/// assert_eq!(date.format("%Y-%m-%d").to_string(), "1970-01-01");
/// ```
///
/// # Errors
///
/// Returns [`DateError`] if the value is not an integer or does not map to a
/// representable date.
pub fn build_date(
    source_date_epoch: Option<&str>,
    today: impl FnOnce() -> NaiveDate,
) -> Result<NaiveDate, DateError> {
    let Some(raw) = source_date_epoch else {
        return Ok(today());
    };

    let secs: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DateError::NotAnInteger {
            value: raw.to_string(),
        })?;

    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.date_naive())
        .ok_or(DateError::OutOfRange(secs))
}

/// Today's date in the local timezone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
