//! Error type for ephemeris queries.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure reported by an [`Ephemeris`](crate::Ephemeris) implementation.
///
/// The pipeline treats every variant as fatal for the day being computed.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("{quantity} unavailable at {at}")]
    Unavailable {
        quantity: &'static str,
        at: DateTime<Utc>,
    },
    #[error("{at} is outside the ephemeris coverage")]
    OutOfRange { at: DateTime<Utc> },
    #[error("ephemeris backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_names_quantity() {
        let at = Utc.with_ymd_and_hms(2026, 3, 19, 0, 0, 0).unwrap();
        let err = EphemerisError::Unavailable {
            quantity: "lunar longitude",
            at,
        };
        assert!(err.to_string().starts_with("lunar longitude unavailable"));
    }

    #[test]
    fn backend_display() {
        let err = EphemerisError::Backend("kernel not loaded".into());
        assert_eq!(err.to_string(), "ephemeris backend error: kernel not loaded");
    }
}
