//! Ugadi (lunar new year), its per-year cache, and Shaka/Samvatsara naming.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{Datelike, NaiveDate, NaiveTime};
use log::{debug, warn};
use panchang_base::{Samvatsara, samvatsara_from_shaka_year, shaka_year};
use panchang_core::{Body, Ephemeris, RiseSetEvent};
use serde::Serialize;

use crate::angles::tithi_index_at;
use crate::config::PanchangConfig;
use crate::error::PanchangError;
use crate::lunar_calendar::next_amavasya;
use crate::resolution::Resolution;
use crate::search_util::{local_date, local_instant};

/// Ugadi of Gregorian `year`: the first day after the Chaitra conjunction
/// whose sunrise falls in Shukla Pratipada.
///
/// The conjunction is searched forward from local midnight of the anchor
/// date (March 18 by default). When Pratipada begins and ends between two
/// sunrises the day it began on is taken. If nothing qualifies within the
/// scan the configured fallback date is returned, flagged.
pub fn ugadi_for_year<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &PanchangConfig,
    year: i32,
) -> Result<Resolution<NaiveDate>, PanchangError> {
    let offset = config.time.offset()?;
    let search = &config.search;
    let anchor_date = search
        .ugadi_anchor_date(year)
        .ok_or(PanchangError::YearOutOfRange(year))?;
    let fallback_date = search
        .ugadi_fallback_date(year)
        .ok_or(PanchangError::YearOutOfRange(year))?;
    let scan_budget = search.ugadi_scan_days + 1;

    let anchor = local_instant(anchor_date, NaiveTime::MIN, offset)?;
    let Some(conjunction) = next_amavasya(eph, anchor, search, &config.solver)? else {
        warn!("{year}: no conjunction after {anchor}; Ugadi falls back to {fallback_date}");
        return Ok(Resolution::fallback(
            fallback_date,
            "amavasya",
            search.amavasya_max_steps,
        ));
    };

    let mut previous: Option<(NaiveDate, u8)> = None;
    for date in local_date(conjunction, offset)
        .iter_days()
        .take(scan_budget as usize)
    {
        let sunrise = eph
            .rise_or_set(date, Body::Sun, RiseSetEvent::Rise, &config.site)?
            .ok_or(PanchangError::SunEventMissing {
                date,
                event: RiseSetEvent::Rise,
            })?;
        let tithi = tithi_index_at(eph, sunrise)?;
        if tithi == 0 {
            debug!("{year}: Ugadi {date} (conjunction {conjunction})");
            return Ok(Resolution::Found(date));
        }
        if let Some((prev_date, 29)) = previous {
            if tithi < 15 {
                debug!("{year}: Pratipada skipped at sunrise; Ugadi {prev_date}");
                return Ok(Resolution::Found(prev_date));
            }
        }
        previous = Some((date, tithi));
    }

    warn!("{year}: no Pratipada sunrise after {conjunction}; Ugadi falls back to {fallback_date}");
    Ok(Resolution::fallback(fallback_date, "ugadi", scan_budget))
}

/// Per-year Ugadi results. A year, once stored, is never recomputed or
/// overwritten.
#[derive(Debug, Clone, Default)]
pub struct UgadiCache {
    years: BTreeMap<i32, Resolution<NaiveDate>>,
}

impl UgadiCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, year: i32) -> Option<Resolution<NaiveDate>> {
        self.years.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Cached value for `year`, or the result of `compute` (stored on success).
    pub fn get_or_compute<F>(
        &mut self,
        year: i32,
        compute: F,
    ) -> Result<Resolution<NaiveDate>, PanchangError>
    where
        F: FnOnce() -> Result<Resolution<NaiveDate>, PanchangError>,
    {
        match self.years.entry(year) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                let ugadi = compute()?;
                debug!("cached Ugadi for {year}: {ugadi:?}");
                Ok(*entry.insert(ugadi))
            }
        }
    }

    pub fn get_or_resolve<E: Ephemeris + ?Sized>(
        &mut self,
        eph: &E,
        config: &PanchangConfig,
        year: i32,
    ) -> Result<Resolution<NaiveDate>, PanchangError> {
        self.get_or_compute(year, || ugadi_for_year(eph, config, year))
    }

    /// Fill the cache for `years` up front, for callers that will not visit
    /// dates in increasing order.
    pub fn precompute<E, I>(
        &mut self,
        eph: &E,
        config: &PanchangConfig,
        years: I,
    ) -> Result<(), PanchangError>
    where
        E: Ephemeris + ?Sized,
        I: IntoIterator<Item = i32>,
    {
        for year in years {
            self.get_or_resolve(eph, config, year)?;
        }
        Ok(())
    }
}

/// Shaka year and Samvatsara of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearNaming {
    pub shaka_year: i32,
    pub samvatsara: Samvatsara,
    /// Ugadi of the date's Gregorian year.
    pub ugadi: Resolution<NaiveDate>,
}

impl YearNaming {
    pub fn new(date: NaiveDate, ugadi: Resolution<NaiveDate>) -> Self {
        let shaka_year = shaka_year(date, ugadi.get());
        Self {
            shaka_year,
            samvatsara: samvatsara_from_shaka_year(shaka_year),
            ugadi,
        }
    }
}

/// Year naming for `date`, resolving Ugadi through `cache`.
pub fn year_naming<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &PanchangConfig,
    cache: &mut UgadiCache,
    date: NaiveDate,
) -> Result<YearNaming, PanchangError> {
    let ugadi = cache.get_or_resolve(eph, config, date.year())?;
    Ok(YearNaming::new(date, ugadi))
}
