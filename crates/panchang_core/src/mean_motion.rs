//! Uniform-motion ephemeris.
//!
//! Longitudes advance linearly from an epoch, sunrise and sunset sit at fixed
//! local mean solar times, and the Moon rises and sets later each day in
//! proportion to its elongation. Not an astronomical model: it exists so the
//! derivation layers can be driven deterministically.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::{Body, Ephemeris, EphemerisError, GeoLocation, RiseSetEvent};

const SECONDS_PER_DAY: f64 = 86_400.0;
const MS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MeanMotionEphemeris {
    pub epoch: DateTime<Utc>,
    /// Tropical solar longitude at `epoch`, degrees.
    pub sun_longitude_deg: f64,
    pub sun_rate_deg_per_day: f64,
    /// Tropical lunar longitude at `epoch`, degrees.
    pub moon_longitude_deg: f64,
    pub moon_rate_deg_per_day: f64,
    pub ayanamsa_deg: f64,
    pub ayanamsa_rate_deg_per_day: f64,
    /// Local mean solar time of sunrise.
    pub sunrise_lmt: NaiveTime,
    /// Local mean solar time of sunset.
    pub sunset_lmt: NaiveTime,
    /// Civil zone whose calendar day bounds moon events.
    pub civil_offset: FixedOffset,
    /// Queries outside `[start, end]` fail with [`EphemerisError::OutOfRange`].
    pub coverage: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl Default for MeanMotionEphemeris {
    /// Mean elements at J2000.0 with a Lahiri-like ayanamsa.
    fn default() -> Self {
        Self {
            epoch: DateTime::from_timestamp(946_728_000, 0).unwrap_or_default(),
            sun_longitude_deg: 280.46646,
            sun_rate_deg_per_day: 0.985_647_36,
            moon_longitude_deg: 218.3165,
            moon_rate_deg_per_day: 13.176_396_48,
            ayanamsa_deg: 23.853,
            ayanamsa_rate_deg_per_day: 3.8246e-5,
            sunrise_lmt: NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default(),
            sunset_lmt: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
            civil_offset: FixedOffset::east_opt(19_800).unwrap_or(chrono::Offset::fix(&Utc)),
            coverage: None,
        }
    }
}

impl MeanMotionEphemeris {
    /// Restrict the model to a coverage interval.
    pub fn with_coverage(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.coverage = Some((start, end));
        self
    }

    /// Assign moon events to the calendar days of `offset`.
    pub fn with_civil_offset(mut self, offset: FixedOffset) -> Self {
        self.civil_offset = offset;
        self
    }

    fn days_since_epoch(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
        if let Some((start, end)) = self.coverage {
            if at < start || at > end {
                return Err(EphemerisError::OutOfRange { at });
            }
        }
        let delta = at - self.epoch;
        Ok((delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) * 1e-9) / SECONDS_PER_DAY)
    }

    fn lmt_instant(&self, date: NaiveDate, time: NaiveTime, site: &GeoLocation) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_time(time)) - site.mean_solar_offset()
    }

    /// UTC instant of civil midnight opening `date`.
    fn civil_midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
            - TimeDelta::seconds(i64::from(self.civil_offset.local_minus_utc()))
    }

    fn moon_event(
        &self,
        date: NaiveDate,
        event: RiseSetEvent,
        site: &GeoLocation,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        let base_time = match event {
            RiseSetEvent::Rise => self.sunrise_lmt,
            RiseSetEvent::Set => self.sunset_lmt,
        };
        let slow = 1.0 - (self.moon_rate_deg_per_day - self.sun_rate_deg_per_day) / 360.0;
        if slow <= 0.0 {
            return Ok(None);
        }

        // The Moon's event trails the Sun's by elongation/360 of a day:
        //   T - base - E(T)/360 = n,  E(T) = e0 + w*T
        // so T = (base + e0/360 + n) / slow for integer n.
        let base = self.days_since_epoch(self.lmt_instant(date, base_time, site))?;
        let day_start = self.days_since_epoch(self.civil_midnight(date))?;
        let e0 = (self.moon_longitude_deg - self.sun_longitude_deg).rem_euclid(360.0) / 360.0;
        let lower = day_start * slow - base - e0;
        let upper = (day_start + 1.0) * slow - base - e0;
        let n = lower.ceil();
        if n >= upper {
            return Ok(None);
        }

        let days = (base + e0 + n) / slow;
        let at = self.epoch + TimeDelta::milliseconds((days * MS_PER_DAY).round() as i64);
        self.days_since_epoch(at)?;
        Ok(Some(at))
    }
}

impl Ephemeris for MeanMotionEphemeris {
    fn solar_longitude(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let days = self.days_since_epoch(at)?;
        Ok((self.sun_longitude_deg + self.sun_rate_deg_per_day * days).rem_euclid(360.0))
    }

    fn lunar_longitude(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let days = self.days_since_epoch(at)?;
        Ok((self.moon_longitude_deg + self.moon_rate_deg_per_day * days).rem_euclid(360.0))
    }

    fn ayanamsa(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let days = self.days_since_epoch(at)?;
        Ok(self.ayanamsa_deg + self.ayanamsa_rate_deg_per_day * days)
    }

    fn rise_or_set(
        &self,
        date: NaiveDate,
        body: Body,
        event: RiseSetEvent,
        site: &GeoLocation,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        match body {
            Body::Sun => {
                let time = match event {
                    RiseSetEvent::Rise => self.sunrise_lmt,
                    RiseSetEvent::Set => self.sunset_lmt,
                };
                let at = self.lmt_instant(date, time, site);
                self.days_since_epoch(at)?;
                Ok(Some(at))
            }
            Body::Moon => self.moon_event(date, event, site),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn longitudes_advance_linearly() {
        let eph = MeanMotionEphemeris::default();
        let t0 = eph.epoch;
        let t1 = t0 + TimeDelta::days(10);
        let s0 = eph.solar_longitude(t0).unwrap();
        let s1 = eph.solar_longitude(t1).unwrap();
        assert_abs_diff_eq!(s0, 280.46646, epsilon = 1e-9);
        assert_abs_diff_eq!(s1 - s0, 9.8564736, epsilon = 1e-6);
    }

    #[test]
    fn sidereal_angles_subtract_ayanamsa() {
        let eph = MeanMotionEphemeris::default();
        let angle = eph.sidereal_angles(eph.epoch).unwrap();
        assert_abs_diff_eq!(angle.sun_deg, 280.46646 - 23.853, epsilon = 1e-9);
        assert_abs_diff_eq!(angle.moon_deg, 218.3165 - 23.853, epsilon = 1e-9);
    }

    #[test]
    fn sunrise_tracks_site_longitude() {
        let eph = MeanMotionEphemeris::default();
        let date = NaiveDate::from_ymd_opt(2026, 3, 19).unwrap();
        let greenwich = GeoLocation::new(51.5, 0.0, 0.0);
        let rise = eph
            .rise_or_set(date, Body::Sun, RiseSetEvent::Rise, &greenwich)
            .unwrap()
            .unwrap();
        assert_eq!(rise, utc(2026, 3, 19, 6));
        let east = GeoLocation::new(0.0, 90.0, 0.0);
        let rise = eph
            .rise_or_set(date, Body::Sun, RiseSetEvent::Rise, &east)
            .unwrap()
            .unwrap();
        assert_eq!(rise, utc(2026, 3, 19, 0));
    }

    #[test]
    fn moonrise_sometimes_skips_a_day() {
        let eph = MeanMotionEphemeris::default();
        let site = GeoLocation::hyderabad();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut missing = 0;
        for day in start.iter_days().take(60) {
            match eph.rise_or_set(day, Body::Moon, RiseSetEvent::Rise, &site).unwrap() {
                Some(t) => assert_eq!(t.with_timezone(&eph.civil_offset).date_naive(), day),
                None => missing += 1,
            }
        }
        assert!((1..=3).contains(&missing));
    }

    #[test]
    fn moon_events_follow_the_civil_day() {
        // 30 minutes between LMT and civil midnight at this longitude.
        let site = GeoLocation::new(0.0, 75.0, 0.0);
        let date = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        let midnight = utc(2026, 5, 3, 18) + TimeDelta::minutes(30);
        // Moonrise exactly at 00:15 civil: inside the civil day, before LMT midnight.
        let at = midnight + TimeDelta::minutes(15);
        let slow = 1.0 - (13.176_396_48 - 0.985_647_36) / 360.0;
        let base = MeanMotionEphemeris::default();
        let days = |t: DateTime<Utc>| (t - base.epoch).num_milliseconds() as f64 / MS_PER_DAY;
        let lmt_six = days(utc(2026, 5, 4, 6) - site.mean_solar_offset());
        // Choose the epoch elongation so the event equation lands on `at`.
        let e0 = (days(at) * slow - lmt_six).rem_euclid(1.0) * 360.0;
        let eph = MeanMotionEphemeris {
            moon_longitude_deg: base.sun_longitude_deg + e0,
            ..base
        };
        let rise = eph
            .rise_or_set(date, Body::Moon, RiseSetEvent::Rise, &site)
            .unwrap()
            .unwrap();
        assert!((rise - at).num_seconds().abs() < 2, "rise {rise}");
        assert_eq!(rise.with_timezone(&eph.civil_offset).date_naive(), date);
    }

    #[test]
    fn moonrise_is_later_each_day() {
        let eph = MeanMotionEphemeris::default();
        let site = GeoLocation::hyderabad();
        let d1 = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let rises: Vec<_> = d1
            .iter_days()
            .take(3)
            .filter_map(|d| eph.rise_or_set(d, Body::Moon, RiseSetEvent::Rise, &site).unwrap())
            .collect();
        for pair in rises.windows(2) {
            let gap = (pair[1] - pair[0]).num_minutes();
            assert!((24 * 60 + 45..=24 * 60 + 55).contains(&gap), "gap {gap}");
        }
    }

    #[test]
    fn coverage_is_enforced() {
        let eph = MeanMotionEphemeris::default().with_coverage(utc(2026, 1, 1, 0), utc(2026, 12, 31, 0));
        assert!(eph.solar_longitude(utc(2026, 6, 1, 0)).is_ok());
        assert_eq!(
            eph.lunar_longitude(utc(2027, 6, 1, 0)),
            Err(EphemerisError::OutOfRange {
                at: utc(2027, 6, 1, 0)
            })
        );
    }
}
