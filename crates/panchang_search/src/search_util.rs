//! Shared helpers: fixed-iteration bisection and local-time conversion.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::PanchangError;

/// Bisect `[a, b]` for the instant where `crossed` turns true.
///
/// Requires `crossed(a) == false` and `crossed(b) == true`; runs exactly
/// `iterations` halvings and returns the upper end of the final bracket,
/// the first instant known to satisfy `crossed`.
pub(crate) fn bisect<F>(
    mut a: DateTime<Utc>,
    mut b: DateTime<Utc>,
    iterations: u32,
    mut crossed: F,
) -> Result<DateTime<Utc>, PanchangError>
where
    F: FnMut(DateTime<Utc>) -> Result<bool, PanchangError>,
{
    for _ in 0..iterations {
        let mid = a + (b - a) / 2;
        if mid == a || mid == b {
            break;
        }
        if crossed(mid)? {
            b = mid;
        } else {
            a = mid;
        }
    }
    Ok(b)
}

/// UTC instant of a local wall-clock time.
pub(crate) fn local_instant(
    date: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, PanchangError> {
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(PanchangError::InvalidLocalTime { date, time })
}

/// Civil date of an instant at `offset`.
pub(crate) fn local_date(at: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    at.with_timezone(&offset).date_naive()
}
