//! Day record types and their rendered form.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc, Weekday};
use panchang_base::{KaalamSet, KaalamWindow, Masa, Nakshatra, Paksha, Rashi, Tithi, Yoga};
use serde::Serialize;

use crate::day_boundary::DayBoundaries;
use crate::resolution::Resolution;
use crate::ugadi::YearNaming;

/// Tithi current at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    pub end: Resolution<DateTime<Utc>>,
}

/// Nakshatra current at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    pub end: Resolution<DateTime<Utc>>,
}

/// Yoga current at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub yoga_index: u8,
    pub end: Resolution<DateTime<Utc>>,
}

/// Everything derived for one civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub boundaries: DayBoundaries,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub kaalam: KaalamSet,
    pub lunar_month: Resolution<Masa>,
    pub year: YearNaming,
    /// Sun's sidereal sign at sunrise.
    pub sun_rashi: Rashi,
    pub festivals: Vec<String>,
}

/// String form of a [`DayRecord`] for display or JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDay {
    pub date: String,
    #[serde(rename = "Weekday")]
    pub weekday: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Sunset")]
    pub sunset: String,
    #[serde(rename = "Moonrise")]
    pub moonrise: Option<String>,
    #[serde(rename = "Moonset")]
    pub moonset: Option<String>,
    #[serde(rename = "Paksha")]
    pub paksha: String,
    #[serde(rename = "Tithi")]
    pub tithi: String,
    #[serde(rename = "Nakshatra")]
    pub nakshatra: String,
    #[serde(rename = "Yoga")]
    pub yoga: String,
    #[serde(rename = "Lunar Month")]
    pub lunar_month: String,
    #[serde(rename = "Shaka Samvat")]
    pub shaka_samvat: String,
    #[serde(rename = "Rahu Kalam")]
    pub rahu_kalam: Option<String>,
    #[serde(rename = "Gulikai Kalam")]
    pub gulikai_kalam: Option<String>,
    #[serde(rename = "Yamaganda")]
    pub yamaganda: Option<String>,
    #[serde(rename = "Abhijit")]
    pub abhijit: Option<String>,
    #[serde(rename = "Dur Muhurtam")]
    pub dur_muhurtam: Option<String>,
    #[serde(rename = "Amrit Kalam")]
    pub amrit_kalam: Option<String>,
    #[serde(rename = "Varjyam")]
    pub varjyam: Option<String>,
    #[serde(rename = "Festivals")]
    pub festivals: Vec<String>,
    /// Fields that came from an exhausted search.
    #[serde(rename = "Approximate", skip_serializing_if = "Vec::is_empty")]
    pub approximate: Vec<&'static str>,
}

fn clock(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%I:%M %p").to_string()
}

fn window(w: &KaalamWindow, offset: FixedOffset) -> Option<String> {
    if w.is_absent() {
        return None;
    }
    let spans: Vec<String> = w
        .spans
        .iter()
        .map(|s| format!("{} to {}", clock(s.start, offset), clock(s.end, offset)))
        .collect();
    Some(spans.join(", "))
}

impl DayRecord {
    /// Render with local times at `offset`.
    pub fn render(&self, offset: FixedOffset) -> RenderedDay {
        let upto = |name: &str, end: &Resolution<DateTime<Utc>>| {
            format!("{name} upto {}", clock(end.get(), offset))
        };

        let mut approximate = Vec::new();
        for (label, flagged) in [
            ("Tithi", self.tithi.end.is_fallback()),
            ("Nakshatra", self.nakshatra.end.is_fallback()),
            ("Yoga", self.yoga.end.is_fallback()),
            ("Lunar Month", self.lunar_month.is_fallback()),
            ("Shaka Samvat", self.year.ugadi.is_fallback()),
        ] {
            if flagged {
                approximate.push(label);
            }
        }

        RenderedDay {
            date: self.date.format("%d/%m/%Y").to_string(),
            weekday: self.date.format("%A").to_string(),
            sunrise: clock(self.boundaries.sunrise, offset),
            sunset: clock(self.boundaries.sunset, offset),
            moonrise: self.boundaries.moonrise.map(|t| clock(t, offset)),
            moonset: self.boundaries.moonset.map(|t| clock(t, offset)),
            paksha: self.tithi.paksha.to_string(),
            tithi: upto(self.tithi.tithi.name(), &self.tithi.end),
            nakshatra: upto(self.nakshatra.nakshatra.name(), &self.nakshatra.end),
            yoga: upto(self.yoga.yoga.name(), &self.yoga.end),
            lunar_month: self.lunar_month.get().name().to_string(),
            shaka_samvat: format!("{} {}", self.year.shaka_year, self.year.samvatsara),
            rahu_kalam: window(&self.kaalam.rahu, offset),
            gulikai_kalam: window(&self.kaalam.gulikai, offset),
            yamaganda: window(&self.kaalam.yamaganda, offset),
            abhijit: window(&self.kaalam.abhijit, offset),
            dur_muhurtam: window(&self.kaalam.dur_muhurtam, offset),
            amrit_kalam: window(&self.kaalam.amrit_kalam, offset),
            varjyam: window(&self.kaalam.varjyam, offset),
            festivals: self.festivals.clone(),
            approximate,
        }
    }
}
