//! Runtime configuration.
//!
//! Every field has a default, so an empty source yields a usable
//! configuration for Hyderabad at IST. Sources are layered: an optional TOML
//! file, then `PANCHANG__SECTION__KEY` environment variables.

use std::path::Path;

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use config::{Config, Environment, File, FileFormat};
use panchang_base::{KaalamTableError, KaalamTables};
use panchang_core::GeoLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("invalid kaalam tables: {0}")]
    KaalamTable(#[from] KaalamTableError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PanchangConfig {
    pub site: GeoLocation,
    pub time: TimeConfig,
    pub solver: SolverConfig,
    pub search: SearchConfig,
    pub festival: FestivalConfig,
    pub kaalam: KaalamTables,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Civil UTC offset of the site, minutes east.
    pub utc_offset_minutes: i32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 330,
        }
    }
}

impl TimeConfig {
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "utc_offset_minutes {} out of range",
                self.utc_offset_minutes
            ))
        })
    }
}

/// Fixed-iteration bisection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub iterations: u32,
    /// Search window after the starting instant, hours.
    pub window_hours: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            window_hours: 24.0,
        }
    }
}

impl SolverConfig {
    pub fn window(&self) -> TimeDelta {
        hours(self.window_hours)
    }

    /// Width of the final bracket: window / 2^iterations, floored at 1 ns.
    pub fn effective_tolerance(&self) -> TimeDelta {
        let ns = self.window_hours * 3.6e12 / 2f64.powi(self.iterations.min(1023) as i32);
        TimeDelta::nanoseconds(ns.max(1.0) as i64)
    }
}

/// Step sizes and budgets of the lunar-calendar searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub month_step_hours: f64,
    pub month_lookback_days: f64,
    pub amavasya_step_hours: f64,
    pub amavasya_max_steps: u32,
    /// Month/day of the Ugadi search anchor (local midnight).
    pub ugadi_anchor: (u32, u32),
    pub ugadi_scan_days: u32,
    /// Month/day used when the Ugadi search is exhausted.
    pub ugadi_fallback: (u32, u32),
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            month_step_hours: 6.0,
            month_lookback_days: 35.0,
            amavasya_step_hours: 2.4,
            amavasya_max_steps: 500,
            ugadi_anchor: (3, 18),
            ugadi_scan_days: 7,
            ugadi_fallback: (3, 22),
        }
    }
}

impl SearchConfig {
    pub fn month_step(&self) -> TimeDelta {
        hours(self.month_step_hours)
    }

    /// Number of backward steps covering the lookback.
    pub fn month_step_budget(&self) -> u32 {
        (self.month_lookback_days * 24.0 / self.month_step_hours).ceil() as u32
    }

    pub fn amavasya_step(&self) -> TimeDelta {
        hours(self.amavasya_step_hours)
    }

    pub fn ugadi_anchor_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.ugadi_anchor.0, self.ugadi_anchor.1)
    }

    pub fn ugadi_fallback_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.ugadi_fallback.0, self.ugadi_fallback.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestivalConfig {
    /// Madhyana reference window, local time.
    pub madhyana_start: NaiveTime,
    pub madhyana_end: NaiveTime,
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            madhyana_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            madhyana_end: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

fn hours(h: f64) -> TimeDelta {
    TimeDelta::milliseconds((h * 3_600_000.0).round() as i64)
}

impl PanchangConfig {
    /// Load from an optional TOML file plus `PANCHANG__*` environment
    /// overrides, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix("PANCHANG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document (no environment layer).
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.site.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "site ({}, {}) out of range",
                self.site.latitude_deg, self.site.longitude_deg
            )));
        }
        self.time.offset()?;
        if self.solver.iterations == 0 || !(self.solver.window_hours > 0.0) {
            return Err(ConfigError::Invalid(
                "solver needs at least one iteration and a positive window".into(),
            ));
        }
        let s = &self.search;
        if !(s.month_step_hours > 0.0 && s.month_lookback_days > 0.0 && s.amavasya_step_hours > 0.0) {
            return Err(ConfigError::Invalid("search steps must be positive".into()));
        }
        // Steps longer than a tithi can skip the Amavasya entirely.
        if s.month_step_hours > 12.0 || s.amavasya_step_hours > 12.0 {
            return Err(ConfigError::Invalid(
                "search steps must not exceed 12 hours".into(),
            ));
        }
        // Checked against a non-leap year so Feb 29 is rejected.
        if s.ugadi_anchor_date(2001).is_none() || s.ugadi_fallback_date(2001).is_none() {
            return Err(ConfigError::Invalid("ugadi anchor/fallback is not a date".into()));
        }
        if self.festival.madhyana_start >= self.festival.madhyana_end {
            return Err(ConfigError::Invalid(
                "madhyana window must start before it ends".into(),
            ));
        }
        self.kaalam.validate()?;
        Ok(())
    }
}
