//! Transition solver: when does an element index change?
//!
//! Fixed-iteration bisection over `[t0, t0 + window]`. The cost is the same
//! every day and the result lands within `SolverConfig::effective_tolerance`
//! of the true crossing. No convergence test is applied.

use chrono::{DateTime, Utc};
use log::warn;
use panchang_core::Ephemeris;

use crate::angles::{nakshatra_index_at, tithi_index_at, yoga_index_at};
use crate::config::SolverConfig;
use crate::error::PanchangError;
use crate::resolution::Resolution;
use crate::search_util::bisect;

/// Panchang elements with a daily end instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Tithi,
    Nakshatra,
    Yoga,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
        }
    }

    pub fn index_at<E: Ephemeris + ?Sized>(
        self,
        eph: &E,
        at: DateTime<Utc>,
    ) -> Result<u8, PanchangError> {
        match self {
            Self::Tithi => tithi_index_at(eph, at),
            Self::Nakshatra => nakshatra_index_at(eph, at),
            Self::Yoga => yoga_index_at(eph, at),
        }
    }
}

/// First instant after `t0` at which `index` differs from `index(t0)`.
///
/// If the index is unchanged at the end of the window the crossing is not
/// bracketed; the window end comes back as a fallback.
pub fn find_transition<F>(
    t0: DateTime<Utc>,
    solver: &SolverConfig,
    mut index: F,
) -> Result<Resolution<DateTime<Utc>>, PanchangError>
where
    F: FnMut(DateTime<Utc>) -> Result<u8, PanchangError>,
{
    let k = index(t0)?;
    let end = t0 + solver.window();
    if index(end)? == k {
        return Ok(Resolution::fallback(end, "transition", solver.iterations));
    }
    let t = bisect(t0, end, solver.iterations, |t| Ok(index(t)? != k))?;
    Ok(Resolution::Found(t))
}

/// End instant of the element current at `t0`.
pub fn element_end<E: Ephemeris + ?Sized>(
    eph: &E,
    element: Element,
    t0: DateTime<Utc>,
    solver: &SolverConfig,
) -> Result<Resolution<DateTime<Utc>>, PanchangError> {
    let end = find_transition(t0, solver, |t| element.index_at(eph, t))?;
    if end.is_fallback() {
        warn!(
            "{} starting before {t0} does not end within {} h",
            element.name(),
            solver.window_hours
        );
    }
    Ok(end)
}
