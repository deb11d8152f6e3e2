//! Amavasya location and lunar-month naming.
//!
//! The month is resolved by one method only: step backward from the
//! evaluation instant until the Moon-Sun elongation is seen to wrap past
//! 360 deg, bisect that bracket to the conjunction, and name the month after
//! the Sun's sign there (see [`masa_after_rashi`]).
//!
//! The forward search ([`next_amavasya`]) finds the conjunction after an
//! anchor and serves the Ugadi computation; it is never used to name months.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, warn};
use panchang_base::{Masa, masa_after_rashi};
use panchang_core::Ephemeris;

use crate::angles::{elongation_at, sun_rashi_at};
use crate::config::{PanchangConfig, SearchConfig, SolverConfig};
use crate::error::PanchangError;
use crate::resolution::Resolution;
use crate::search_util::bisect;

/// Walk from `start` in `step` increments (either sign) looking for the
/// step across which the elongation wraps, then bisect to the conjunction.
fn scan_for_conjunction<E: Ephemeris + ?Sized>(
    eph: &E,
    start: DateTime<Utc>,
    step: TimeDelta,
    budget: u32,
    iterations: u32,
) -> Result<Option<DateTime<Utc>>, PanchangError> {
    let mut t = start;
    let mut elong = elongation_at(eph, t)?;
    for _ in 0..budget {
        let u = t + step;
        let next_elong = elongation_at(eph, u)?;
        let (early, late, early_elong, late_elong) = if step < TimeDelta::zero() {
            (u, t, next_elong, elong)
        } else {
            (t, u, elong, next_elong)
        };
        // Elongation only ever decreases across a wrap.
        if late_elong < early_elong {
            let conjunction = bisect(early, late, iterations, |x| {
                Ok(elongation_at(eph, x)? < early_elong)
            })?;
            return Ok(Some(conjunction));
        }
        t = u;
        elong = next_elong;
    }
    Ok(None)
}

/// Conjunction opening the lunar month that contains `at`, if one lies
/// within the configured lookback.
pub fn opening_amavasya<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
    search: &SearchConfig,
    solver: &SolverConfig,
) -> Result<Option<DateTime<Utc>>, PanchangError> {
    scan_for_conjunction(
        eph,
        at,
        -search.month_step(),
        search.month_step_budget(),
        solver.iterations,
    )
}

/// First conjunction after `from`, if one lies within the forward budget.
pub fn next_amavasya<E: Ephemeris + ?Sized>(
    eph: &E,
    from: DateTime<Utc>,
    search: &SearchConfig,
    solver: &SolverConfig,
) -> Result<Option<DateTime<Utc>>, PanchangError> {
    scan_for_conjunction(
        eph,
        from,
        search.amavasya_step(),
        search.amavasya_max_steps,
        solver.iterations,
    )
}

/// Amanta month at `at`.
///
/// Falls back to the month following the Sun's current sign when no
/// conjunction is found within the lookback.
pub fn lunar_month_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: DateTime<Utc>,
    config: &PanchangConfig,
) -> Result<Resolution<Masa>, PanchangError> {
    match opening_amavasya(eph, at, &config.search, &config.solver)? {
        Some(amavasya) => {
            let rashi = sun_rashi_at(eph, amavasya)?;
            let masa = masa_after_rashi(rashi);
            debug!("month at {at}: Amavasya {amavasya}, Sun in {rashi} -> {masa}");
            Ok(Resolution::Found(masa))
        }
        None => {
            let rashi = sun_rashi_at(eph, at)?;
            let masa = masa_after_rashi(rashi);
            warn!(
                "no Amavasya within {} days before {at}; using Sun in {rashi} -> {masa}",
                config.search.month_lookback_days
            );
            Ok(Resolution::fallback(
                masa,
                "lunar month",
                config.search.month_step_budget(),
            ))
        }
    }
}
