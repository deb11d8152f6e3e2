//! Error types for panchang derivation.

use chrono::{NaiveDate, NaiveTime};
use panchang_core::{EphemerisError, RiseSetEvent};
use thiserror::Error;

use crate::config::ConfigError;

/// Hard failure deriving a day. Bounded searches that run out of budget are
/// not errors; they come back as [`Resolution::Fallback`](crate::Resolution).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PanchangError {
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    #[error("no solar {event:?} on {date} at the configured site")]
    SunEventMissing { date: NaiveDate, event: RiseSetEvent },
    #[error("{time} on {date} is not a valid local time")]
    InvalidLocalTime { date: NaiveDate, time: NaiveTime },
    #[error("dates must be strictly increasing: {requested} requested after {previous}")]
    OutOfOrder {
        previous: NaiveDate,
        requested: NaiveDate,
    },
    #[error("calendar arithmetic out of range near {0}")]
    DateOutOfRange(NaiveDate),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
