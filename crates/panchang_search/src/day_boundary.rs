//! Sunrise, sunset, moonrise and moonset for a civil date, and the kaalam
//! windows hung off them.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::trace;
use panchang_base::{KaalamSet, KaalamTables, TimeWindow};
use panchang_core::{Body, Ephemeris, GeoLocation, RiseSetEvent};
use serde::Serialize;

use crate::error::PanchangError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBoundaries {
    pub date: NaiveDate,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub moonrise: Option<DateTime<Utc>>,
    pub moonset: Option<DateTime<Utc>>,
}

impl DayBoundaries {
    pub fn daylight(&self) -> TimeWindow {
        TimeWindow::new(self.sunrise, self.sunset)
    }
}

fn sun_event<E: Ephemeris + ?Sized>(
    eph: &E,
    site: &GeoLocation,
    date: NaiveDate,
    event: RiseSetEvent,
) -> Result<DateTime<Utc>, PanchangError> {
    eph.rise_or_set(date, Body::Sun, event, site)?
        .ok_or(PanchangError::SunEventMissing { date, event })
}

/// Rise/set instants on `date` at `site`.
///
/// The day cannot be derived without a sunrise and a sunset; a missing
/// moonrise or moonset is recorded as `None`.
pub fn day_boundaries<E: Ephemeris + ?Sized>(
    eph: &E,
    site: &GeoLocation,
    date: NaiveDate,
) -> Result<DayBoundaries, PanchangError> {
    let sunrise = sun_event(eph, site, date, RiseSetEvent::Rise)?;
    let sunset = sun_event(eph, site, date, RiseSetEvent::Set)?;
    let moonrise = eph.rise_or_set(date, Body::Moon, RiseSetEvent::Rise, site)?;
    let moonset = eph.rise_or_set(date, Body::Moon, RiseSetEvent::Set, site)?;
    trace!("{date}: sunrise {sunrise}, sunset {sunset}, moonrise {moonrise:?}, moonset {moonset:?}");
    Ok(DayBoundaries {
        date,
        sunrise,
        sunset,
        moonrise,
        moonset,
    })
}

/// All kaalam windows for the day. The nakshatra span behind Amrit Kalam
/// and Varjyam is taken to start at sunrise.
pub fn kaalam_for_day(
    tables: &KaalamTables,
    boundaries: &DayBoundaries,
    nakshatra_end: DateTime<Utc>,
) -> KaalamSet {
    KaalamSet::compute(
        tables,
        boundaries.date.weekday(),
        boundaries.sunrise,
        boundaries.sunset,
        nakshatra_end,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use panchang_core::{EphemerisError, MeanMotionEphemeris};

    struct Polar;

    impl Ephemeris for Polar {
        fn solar_longitude(&self, _: DateTime<Utc>) -> Result<f64, EphemerisError> {
            Ok(90.0)
        }
        fn lunar_longitude(&self, _: DateTime<Utc>) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }
        fn ayanamsa(&self, _: DateTime<Utc>) -> Result<f64, EphemerisError> {
            Ok(24.0)
        }
        fn rise_or_set(
            &self,
            _: NaiveDate,
            _: Body,
            _: RiseSetEvent,
            _: &GeoLocation,
        ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
            Ok(None)
        }
    }

    #[test]
    fn hyderabad_mean_day() {
        let eph = MeanMotionEphemeris::default();
        let date = NaiveDate::from_ymd_opt(2026, 3, 19).unwrap();
        let b = day_boundaries(&eph, &GeoLocation::hyderabad(), date).unwrap();
        assert_eq!(b.sunset - b.sunrise, TimeDelta::hours(12));
        assert_eq!(b.sunrise, Utc.with_ymd_and_hms(2026, 3, 19, 0, 46, 3).unwrap() + TimeDelta::milliseconds(192));
    }

    #[test]
    fn missing_sunrise_is_fatal() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 21).unwrap();
        let err = day_boundaries(&Polar, &GeoLocation::new(80.0, 0.0, 0.0), date).unwrap_err();
        assert!(matches!(
            err,
            PanchangError::SunEventMissing {
                event: RiseSetEvent::Rise,
                ..
            }
        ));
    }

    #[test]
    fn kaalam_uses_civil_weekday() {
        let eph = MeanMotionEphemeris::default();
        // 2026-03-18 is a Wednesday: no Abhijit.
        let date = NaiveDate::from_ymd_opt(2026, 3, 18).unwrap();
        let b = day_boundaries(&eph, &GeoLocation::hyderabad(), date).unwrap();
        let set = kaalam_for_day(&KaalamTables::default(), &b, b.sunset);
        assert!(set.abhijit.is_absent());
        assert_eq!(set.dur_muhurtam.spans.len(), 1);
        assert_eq!(set.rahu.spans[0].start, b.sunrise + TimeDelta::minutes(90 * 4));
    }

    #[test]
    fn moon_events_fall_on_the_configured_civil_date() {
        let offset = crate::config::PanchangConfig::default().time.offset().unwrap();
        let eph = MeanMotionEphemeris::default().with_civil_offset(offset);
        let start = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        for date in start.iter_days().take(40) {
            let b = day_boundaries(&eph, &GeoLocation::hyderabad(), date).unwrap();
            for t in [b.moonrise, b.moonset].into_iter().flatten() {
                assert_eq!(t.with_timezone(&offset).date_naive(), date, "{date}");
            }
        }
    }
}
