//! Element indices at an instant, straight from the ephemeris.

use chrono::{DateTime, Utc};
use panchang_base::{
    Rashi, TithiPosition, nakshatra_index, rashi_from_longitude, tithi_from_index, tithi_index,
    yoga_index,
};
use panchang_core::{AstronomicalAngle, Ephemeris};

use crate::error::PanchangError;

pub fn angles_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
) -> Result<AstronomicalAngle, PanchangError> {
    Ok(eph.sidereal_angles(at)?)
}

/// Moon-Sun elongation in degrees, [0, 360).
pub fn elongation_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
) -> Result<f64, PanchangError> {
    Ok(angles_at(eph, at)?.elongation_deg())
}

pub fn tithi_index_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
) -> Result<u8, PanchangError> {
    let a = angles_at(eph, at)?;
    Ok(tithi_index(a.sun_deg, a.moon_deg))
}

pub fn tithi_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
) -> Result<TithiPosition, PanchangError> {
    Ok(tithi_from_index(tithi_index_at(eph, at)?))
}

pub fn nakshatra_index_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
) -> Result<u8, PanchangError> {
    Ok(nakshatra_index(angles_at(eph, at)?.moon_deg))
}

pub fn yoga_index_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
) -> Result<u8, PanchangError> {
    let a = angles_at(eph, at)?;
    Ok(yoga_index(a.sun_deg, a.moon_deg))
}

/// Sidereal rashi of the Sun.
pub fn sun_rashi_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
) -> Result<Rashi, PanchangError> {
    Ok(rashi_from_longitude(angles_at(eph, at)?.sun_deg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use panchang_core::{EphemerisError, MeanMotionEphemeris};

    #[test]
    fn indices_in_range_over_a_month() {
        let eph = MeanMotionEphemeris::default();
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        for h in 0..(30 * 24) {
            let t = start + chrono::TimeDelta::hours(h);
            assert!(tithi_index_at(&eph, t).unwrap() <= 29);
            assert!(nakshatra_index_at(&eph, t).unwrap() <= 26);
            assert!(yoga_index_at(&eph, t).unwrap() <= 26);
        }
    }

    #[test]
    fn unavailable_propagates() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let eph = MeanMotionEphemeris::default().with_coverage(start, start);
        let late = start + chrono::TimeDelta::hours(1);
        match tithi_at(&eph, late) {
            Err(PanchangError::EphemerisUnavailable(EphemerisError::OutOfRange { at })) => {
                assert_eq!(at, late)
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
