//! Daily panchang: one [`DayRecord`] per civil date.
//!
//! All element positions are taken at local sunrise. Element end instants,
//! the lunar month and Ugadi come from bounded searches; any that run out
//! of budget are marked as fallbacks on the record rather than failing the
//! day.

use chrono::{Datelike, NaiveDate};
use log::{debug, trace};
use panchang_base::{Nakshatra, Rashi, Yoga, rashi_from_longitude, tithi_from_index, tithi_index};
use panchang_core::{Body, Ephemeris, RiseSetEvent};

use crate::angles::{angles_at, sun_rashi_at};
use crate::config::PanchangConfig;
use crate::day_boundary::{day_boundaries, kaalam_for_day};
use crate::error::PanchangError;
use crate::festival::{DayState, festivals_for_day};
use crate::festival_rules::FESTIVAL_RULES;
use crate::lunar_calendar::lunar_month_at;
use crate::panchang_types::{DayRecord, NakshatraInfo, TithiInfo, YogaInfo};
use crate::transition::{Element, element_end};
use crate::ugadi::{UgadiCache, year_naming};

/// The Sun's sign at sunrise on the day before `date`. Only that sunrise is
/// queried; if it does not occur, the sign at `date`'s sunrise stands in,
/// which suppresses ingress festivals for the day.
fn previous_sunrise_rashi<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &PanchangConfig,
    date: NaiveDate,
    today: Rashi,
) -> Result<Rashi, PanchangError> {
    let prev = date.pred_opt().ok_or(PanchangError::DateOutOfRange(date))?;
    match eph.rise_or_set(prev, Body::Sun, RiseSetEvent::Rise, &config.site)? {
        Some(sunrise) => sun_rashi_at(eph, sunrise),
        None => {
            debug!("{date}: no sunrise on {prev}; using today's solar sign for ingress");
            Ok(today)
        }
    }
}

/// Derive the panchang for `date`.
///
/// `previous_sun_rashi` is the Sun's sign at the previous day's sunrise; it
/// is computed when not supplied. A missing sunrise on the previous day does
/// not fail `date`. Ugadi lookups go through `cache`.
pub fn panchang_for_date<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &PanchangConfig,
    cache: &mut UgadiCache,
    date: NaiveDate,
    previous_sun_rashi: Option<Rashi>,
) -> Result<DayRecord, PanchangError> {
    let boundaries = day_boundaries(eph, &config.site, date)?;
    let sunrise = boundaries.sunrise;

    let a = angles_at(eph, sunrise)?;
    let position = tithi_from_index(tithi_index(a.sun_deg, a.moon_deg));
    let moon_nakshatra = Nakshatra::from_longitude(a.moon_deg);
    let moon_yoga = Yoga::from_longitudes(a.sun_deg, a.moon_deg);
    let sun_rashi = rashi_from_longitude(a.sun_deg);

    let tithi = TithiInfo {
        tithi: position.tithi,
        tithi_index: position.tithi_index,
        paksha: position.paksha,
        end: element_end(eph, Element::Tithi, sunrise, &config.solver)?,
    };
    let nakshatra = NakshatraInfo {
        nakshatra: moon_nakshatra,
        nakshatra_index: moon_nakshatra.index(),
        end: element_end(eph, Element::Nakshatra, sunrise, &config.solver)?,
    };
    let yoga = YogaInfo {
        yoga: moon_yoga,
        yoga_index: moon_yoga.index(),
        end: element_end(eph, Element::Yoga, sunrise, &config.solver)?,
    };

    let kaalam = kaalam_for_day(&config.kaalam, &boundaries, nakshatra.end.get());
    let lunar_month = lunar_month_at(eph, sunrise, config)?;
    let year = year_naming(eph, config, cache, date)?;

    let previous_sun_rashi = match previous_sun_rashi {
        Some(r) => r,
        None => previous_sunrise_rashi(eph, config, date, sun_rashi)?,
    };

    let state = DayState {
        date,
        weekday: date.weekday(),
        sunrise,
        tithi: position,
        masa: lunar_month.get(),
        sun_rashi,
        previous_sun_rashi,
        ugadi: year.ugadi.get(),
    };
    let festivals = festivals_for_day(eph, config, FESTIVAL_RULES, &state)?;

    trace!(
        "{date}: {} {} / {} / {} / {}; festivals {festivals:?}",
        tithi.paksha,
        tithi.tithi,
        nakshatra.nakshatra,
        yoga.yoga,
        lunar_month
    );

    Ok(DayRecord {
        date,
        weekday: date.weekday(),
        boundaries,
        tithi,
        nakshatra,
        yoga,
        kaalam,
        lunar_month,
        year,
        sun_rashi,
        festivals,
    })
}

// ---------------------------------------------------------------------------
// Ordered sequences
// ---------------------------------------------------------------------------

/// Derives consecutive days, carrying the Sun's sunrise sign forward so
/// ingress festivals do not recompute the previous day.
///
/// Dates must be requested in strictly increasing order.
pub struct DaySequence<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
    config: &'a PanchangConfig,
    ugadi_cache: UgadiCache,
    last: Option<(NaiveDate, Rashi)>,
}

impl<'a, E: Ephemeris + ?Sized> DaySequence<'a, E> {
    pub fn new(ephemeris: &'a E, config: &'a PanchangConfig) -> Self {
        Self {
            ephemeris,
            config,
            ugadi_cache: UgadiCache::new(),
            last: None,
        }
    }

    /// Derive `date`. Fails with [`PanchangError::OutOfOrder`] if `date` is
    /// not after the last date derived.
    pub fn next_day(&mut self, date: NaiveDate) -> Result<DayRecord, PanchangError> {
        let mut carried = None;
        if let Some((previous, rashi)) = self.last {
            if date <= previous {
                return Err(PanchangError::OutOfOrder {
                    previous,
                    requested: date,
                });
            }
            if previous.succ_opt() == Some(date) {
                carried = Some(rashi);
            }
        }
        let record = panchang_for_date(
            self.ephemeris,
            self.config,
            &mut self.ugadi_cache,
            date,
            carried,
        )?;
        debug!("derived {date} ({} festivals)", record.festivals.len());
        self.last = Some((date, record.sun_rashi));
        Ok(record)
    }

    /// Derive every date in `start..=end`.
    pub fn range(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayRecord>, PanchangError> {
        let mut records = Vec::new();
        for date in start.iter_days().take_while(|d| *d <= end) {
            records.push(self.next_day(date)?);
        }
        Ok(records)
    }

    pub fn ugadi_cache(&self) -> &UgadiCache {
        &self.ugadi_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use panchang_core::{EphemerisError, GeoLocation, MeanMotionEphemeris};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Mean motion, except the Sun never rises on `dark`.
    struct NoSunriseOn {
        inner: MeanMotionEphemeris,
        dark: NaiveDate,
    }

    impl Ephemeris for NoSunriseOn {
        fn solar_longitude(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
            self.inner.solar_longitude(at)
        }
        fn lunar_longitude(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
            self.inner.lunar_longitude(at)
        }
        fn ayanamsa(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError> {
            self.inner.ayanamsa(at)
        }
        fn rise_or_set(
            &self,
            date: NaiveDate,
            body: Body,
            event: RiseSetEvent,
            site: &GeoLocation,
        ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
            if date == self.dark && body == Body::Sun && event == RiseSetEvent::Rise {
                return Ok(None);
            }
            self.inner.rise_or_set(date, body, event, site)
        }
    }

    #[test]
    fn missing_previous_sunrise_falls_back_to_today() {
        let eph = NoSunriseOn {
            inner: MeanMotionEphemeris::default(),
            dark: ymd(2026, 8, 2),
        };
        let config = PanchangConfig::default();
        let mut cache = UgadiCache::new();

        let rec = panchang_for_date(&eph, &config, &mut cache, ymd(2026, 8, 3), None).unwrap();
        let same_sign =
            panchang_for_date(&eph, &config, &mut cache, ymd(2026, 8, 3), Some(rec.sun_rashi))
                .unwrap();
        assert_eq!(rec, same_sign);

        let err = panchang_for_date(&eph, &config, &mut cache, ymd(2026, 8, 2), None).unwrap_err();
        assert!(matches!(
            err,
            PanchangError::SunEventMissing {
                event: RiseSetEvent::Rise,
                ..
            }
        ));
    }

    #[test]
    fn carried_rashi_matches_recomputed() {
        let eph = MeanMotionEphemeris::default();
        let config = PanchangConfig::default();
        let mut seq = DaySequence::new(&eph, &config);
        seq.next_day(ymd(2026, 4, 13)).unwrap();
        let carried = seq.next_day(ymd(2026, 4, 14)).unwrap();

        let mut cache = UgadiCache::new();
        let fresh = panchang_for_date(&eph, &config, &mut cache, ymd(2026, 4, 14), None).unwrap();
        assert_eq!(carried, fresh);
    }

    #[test]
    fn repeated_date_is_rejected() {
        let eph = MeanMotionEphemeris::default();
        let config = PanchangConfig::default();
        let mut seq = DaySequence::new(&eph, &config);
        seq.next_day(ymd(2026, 6, 1)).unwrap();
        let err = seq.next_day(ymd(2026, 6, 1)).unwrap_err();
        assert!(matches!(err, PanchangError::OutOfOrder { .. }));
        assert_eq!(seq.ugadi_cache().len(), 1);
    }

    #[test]
    fn record_is_internally_consistent() {
        let eph = MeanMotionEphemeris::default();
        let config = PanchangConfig::default();
        let mut cache = UgadiCache::new();
        let rec = panchang_for_date(&eph, &config, &mut cache, ymd(2026, 8, 3), None).unwrap();
        assert!(rec.boundaries.sunrise < rec.boundaries.sunset);
        assert!(rec.tithi.end.get() > rec.boundaries.sunrise);
        assert_eq!(rec.tithi.paksha, tithi_from_index(rec.tithi.tithi_index).paksha);
        assert_eq!(rec.kaalam.iter().count(), 7);
    }
}
