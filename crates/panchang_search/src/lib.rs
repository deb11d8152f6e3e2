//! Ephemeris-driven panchang derivation.
//!
//! This crate provides:
//! - Element end instants (tithi, nakshatra, yoga) by fixed-iteration bisection
//! - Day boundaries and the kaalam windows derived from them
//! - Amanta lunar month naming from the opening Amavasya
//! - Ugadi location, Shaka year and Samvatsara naming
//! - A declarative festival rule set evaluated per day
//! - [`DaySequence`] for ordered multi-day derivation

pub mod angles;
pub mod config;
pub mod day_boundary;
pub mod error;
pub mod festival;
pub mod festival_rules;
pub mod lunar_calendar;
pub mod panchang;
pub mod panchang_types;
pub mod resolution;
pub(crate) mod search_util;
pub mod transition;
pub mod ugadi;

pub use angles::{
    angles_at, elongation_at, nakshatra_index_at, sun_rashi_at, tithi_at, tithi_index_at,
    yoga_index_at,
};
pub use config::{
    ConfigError, FestivalConfig, PanchangConfig, SearchConfig, SolverConfig, TimeConfig,
};
pub use day_boundary::{DayBoundaries, day_boundaries, kaalam_for_day};
pub use error::PanchangError;
pub use festival::{
    DayState, FestivalNames, FestivalRule, LunarMatch, MonthSelector, RuleCondition,
    TimingPredicate, festivals_for_day, rule_fires,
};
pub use festival_rules::FESTIVAL_RULES;
pub use lunar_calendar::{lunar_month_at, next_amavasya, opening_amavasya};
pub use panchang::{DaySequence, panchang_for_date};
pub use panchang_types::{DayRecord, NakshatraInfo, RenderedDay, TithiInfo, YogaInfo};
pub use resolution::{Resolution, SearchExhausted};
pub use transition::{Element, element_end, find_transition};
pub use ugadi::{UgadiCache, YearNaming, ugadi_for_year, year_naming};
