#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use panchang_core::MeanMotionEphemeris;
use panchang_search::PanchangConfig;

/// Uniform-motion sky with a conjunction at `epoch`, the Sun then at
/// `sun_sidereal_deg`, a fixed 24 deg ayanamsa and a 29.7526-day synodic
/// month. Hyderabad sunrise falls at 00:46 UTC.
pub fn new_moon_at(epoch: DateTime<Utc>, sun_sidereal_deg: f64) -> MeanMotionEphemeris {
    MeanMotionEphemeris {
        epoch,
        sun_longitude_deg: sun_sidereal_deg + 24.0,
        sun_rate_deg_per_day: 0.9856,
        moon_longitude_deg: sun_sidereal_deg + 24.0,
        moon_rate_deg_per_day: 0.9856 + 360.0 / 29.7526,
        ayanamsa_deg: 24.0,
        ayanamsa_rate_deg_per_day: 0.0,
        ..MeanMotionEphemeris::default()
    }
    .with_civil_offset(config().time.offset().unwrap())
}

/// Conjunction at 2026-03-18 12:00 UTC with the Sun at 340 deg sidereal.
pub fn calibrated_2026() -> MeanMotionEphemeris {
    new_moon_at(Utc.with_ymd_and_hms(2026, 3, 18, 12, 0, 0).unwrap(), 340.0)
}

pub fn config() -> PanchangConfig {
    PanchangConfig::default()
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
