//! Festival rule engine.
//!
//! Rules are data ([`FestivalRule`]) evaluated by one dispatcher in
//! declaration order. Every rule that fires appends its names; rules never
//! suppress one another, so a day may carry several aliases for the same
//! occasion.

use chrono::{DateTime, NaiveTime, Utc, Weekday};
use panchang_base::{Masa, Paksha, Rashi, Tithi, TithiPosition};
use panchang_core::Ephemeris;

use crate::angles::tithi_at;
use crate::config::PanchangConfig;
use crate::error::PanchangError;
use crate::search_util::local_instant;

// ---------------------------------------------------------------------------
// Rule types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSelector {
    Any,
    One(Masa),
    AnyOf(&'static [Masa]),
}

impl MonthSelector {
    pub fn contains(&self, masa: Masa) -> bool {
        match self {
            Self::Any => true,
            Self::One(m) => *m == masa,
            Self::AnyOf(ms) => ms.contains(&masa),
        }
    }
}

/// Month, optional paksha and tithi name a day must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMatch {
    pub months: MonthSelector,
    pub paksha: Option<Paksha>,
    pub tithi: Tithi,
}

impl LunarMatch {
    /// Tithi name and, when set, paksha.
    pub fn matches_tithi(&self, position: &TithiPosition) -> bool {
        position.tithi == self.tithi && self.paksha.is_none_or(|p| p == position.paksha)
    }

    pub fn matches(&self, masa: Masa, position: &TithiPosition) -> bool {
        self.months.contains(masa) && self.matches_tithi(position)
    }
}

/// Moment at which the tithi of a [`TimingRefinement`](RuleCondition::TimingRefinement)
/// is checked a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingPredicate {
    /// Local midnight closing the civil day.
    AtLocalMidnight,
    /// Either edge of the configured Madhyana window.
    DuringMadhyana,
    AtSunrise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCondition {
    LunarMatch(LunarMatch),
    /// Ingress day: the Sun is in `target` at sunrise and was not at the
    /// previous day's sunrise.
    SolarCrossing { target: Rashi },
    TimingRefinement {
        base: LunarMatch,
        predicate: TimingPredicate,
    },
    /// The resolved Ugadi date of the day's year. Follows the year
    /// boundary even when Pratipada holds at no sunrise.
    YearStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FestivalNames {
    Fixed(&'static [&'static str]),
    /// `"<prefix> <base>"`, or just `base` for weekdays without a prefix.
    WeekdayPrefixed {
        base: &'static str,
        prefixes: &'static [(Weekday, &'static str)],
    },
}

impl FestivalNames {
    pub fn append_to(&self, weekday: Weekday, out: &mut Vec<String>) {
        match self {
            Self::Fixed(names) => out.extend(names.iter().map(|n| (*n).to_string())),
            Self::WeekdayPrefixed { base, prefixes } => {
                let name = prefixes
                    .iter()
                    .find(|(w, _)| *w == weekday)
                    .map_or_else(|| (*base).to_string(), |(_, p)| format!("{p} {base}"));
                out.push(name);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalRule {
    pub names: FestivalNames,
    pub condition: RuleCondition,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// What the engine knows about a day before evaluating rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayState {
    pub date: chrono::NaiveDate,
    pub weekday: Weekday,
    pub sunrise: DateTime<Utc>,
    pub tithi: TithiPosition,
    pub masa: Masa,
    pub sun_rashi: Rashi,
    pub previous_sun_rashi: Rashi,
    /// Ugadi of the date's Gregorian year.
    pub ugadi: chrono::NaiveDate,
}

fn tithi_matches_at<E: Ephemeris + ?Sized>(
    eph: &E,
    base: &LunarMatch,
    at: DateTime<Utc>,
) -> Result<bool, PanchangError> {
    Ok(base.matches_tithi(&tithi_at(eph, at)?))
}

fn predicate_holds<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &PanchangConfig,
    base: &LunarMatch,
    predicate: TimingPredicate,
    day: &DayState,
) -> Result<bool, PanchangError> {
    let offset = config.time.offset()?;
    match predicate {
        TimingPredicate::AtSunrise => tithi_matches_at(eph, base, day.sunrise),
        TimingPredicate::AtLocalMidnight => {
            let next = day
                .date
                .succ_opt()
                .ok_or(PanchangError::DateOutOfRange(day.date))?;
            let midnight = local_instant(next, NaiveTime::MIN, offset)?;
            tithi_matches_at(eph, base, midnight)
        }
        TimingPredicate::DuringMadhyana => {
            let window = &config.festival;
            let start = local_instant(day.date, window.madhyana_start, offset)?;
            if tithi_matches_at(eph, base, start)? {
                return Ok(true);
            }
            let end = local_instant(day.date, window.madhyana_end, offset)?;
            tithi_matches_at(eph, base, end)
        }
    }
}

/// Whether `rule` fires on `day`.
pub fn rule_fires<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &PanchangConfig,
    rule: &FestivalRule,
    day: &DayState,
) -> Result<bool, PanchangError> {
    match &rule.condition {
        RuleCondition::LunarMatch(m) => Ok(m.matches(day.masa, &day.tithi)),
        RuleCondition::SolarCrossing { target } => {
            Ok(day.sun_rashi == *target && day.previous_sun_rashi != *target)
        }
        RuleCondition::TimingRefinement { base, predicate } => {
            if !base.matches(day.masa, &day.tithi) {
                return Ok(false);
            }
            predicate_holds(eph, config, base, *predicate, day)
        }
        RuleCondition::YearStart => Ok(day.date == day.ugadi),
    }
}

/// Names of every rule in `rules` that fires on `day`, in rule order.
pub fn festivals_for_day<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &PanchangConfig,
    rules: &[FestivalRule],
    day: &DayState,
) -> Result<Vec<String>, PanchangError> {
    let mut names = Vec::new();
    for rule in rules {
        if rule_fires(eph, config, rule, day)? {
            rule.names.append_to(day.weekday, &mut names);
        }
    }
    Ok(names)
}
