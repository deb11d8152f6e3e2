//! Kaalam and muhurta windows.
//!
//! Daylight (sunrise to sunset) is cut into eight equal segments numbered
//! 1..=8. Rahu Kalam, Yamaganda and Gulikai Kalam each occupy one segment
//! chosen by weekday through [`KaalamTables`]. Abhijit and the noon variant
//! of Dur Muhurtam are 48-minute windows centred on solar noon (the midpoint
//! of sunrise and sunset).
//!
//! Weekday numbering throughout: Monday = 0 .. Sunday = 6
//! (`chrono::Weekday::num_days_from_monday`).

use chrono::{DateTime, TimeDelta, Utc, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of daylight segments.
pub const SEGMENTS: u8 = 8;

/// Half-width of the noon-centred windows (Abhijit, noon Dur Muhurtam).
pub const NOON_HALF_WIDTH_MINUTES: i64 = 24;

/// Length of Amrit Kalam and Varjyam.
pub const AMRIT_VARJYAM_MINUTES: i64 = 90;

/// Fractions of the nakshatra span at which Varjyam and Amrit Kalam open.
pub const VARJYAM_FRACTION: f64 = 0.66;
pub const AMRIT_FRACTION: f64 = 0.80;

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

/// Half-open instant interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn midpoint(&self) -> DateTime<Utc> {
        self.start + self.duration() / 2
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KaalamKind {
    Rahu,
    Yamaganda,
    Gulikai,
    Abhijit,
    DurMuhurtam,
    AmritKalam,
    Varjyam,
}

impl KaalamKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rahu => "Rahu Kalam",
            Self::Yamaganda => "Yamaganda",
            Self::Gulikai => "Gulikai Kalam",
            Self::Abhijit => "Abhijit",
            Self::DurMuhurtam => "Dur Muhurtam",
            Self::AmritKalam => "Amrit Kalam",
            Self::Varjyam => "Varjyam",
        }
    }
}

/// A labelled window. Dur Muhurtam can span two disjoint intervals;
/// an empty `spans` means the window does not occur that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KaalamWindow {
    pub kind: KaalamKind,
    pub spans: Vec<TimeWindow>,
}

impl KaalamWindow {
    pub fn absent(kind: KaalamKind) -> Self {
        Self {
            kind,
            spans: Vec::new(),
        }
    }

    pub fn single(kind: KaalamKind, window: TimeWindow) -> Self {
        Self {
            kind,
            spans: vec![window],
        }
    }

    pub fn is_absent(&self) -> bool {
        self.spans.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Weekday to daylight-segment tables. Shipped as `config/panchang.toml`;
/// the compiled-in defaults are the same tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KaalamTables {
    pub version: u32,
    /// Rahu Kalam segment, Monday first.
    pub rahu: [u8; 7],
    pub yamaganda: [u8; 7],
    pub gulikai: [u8; 7],
    /// Weekday on which Abhijit is not observed.
    pub abhijit_excluded: Weekday,
    pub dur_muhurtam: DurMuhurtamTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurMuhurtamTable {
    /// Weekday whose Dur Muhurtam is the noon-centred window.
    pub noon_weekday: Weekday,
    /// Weekday whose Dur Muhurtam covers two segments.
    pub split_weekday: Weekday,
    pub split_segments: [u8; 2],
    /// Segment for the remaining weekdays, Monday first; 0 = none.
    pub segments: [u8; 7],
}

impl Default for KaalamTables {
    fn default() -> Self {
        Self {
            version: 1,
            rahu: [2, 7, 5, 6, 4, 3, 8],
            yamaganda: [4, 3, 2, 1, 7, 6, 5],
            gulikai: [6, 5, 4, 3, 2, 1, 7],
            abhijit_excluded: Weekday::Wed,
            dur_muhurtam: DurMuhurtamTable::default(),
        }
    }
}

impl Default for DurMuhurtamTable {
    fn default() -> Self {
        Self {
            noon_weekday: Weekday::Wed,
            split_weekday: Weekday::Sat,
            split_segments: [1, 7],
            segments: [5, 6, 0, 3, 2, 0, 4],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KaalamTableError {
    #[error("{table} table: segment {slot} for {weekday} is outside 1..=8")]
    SlotOutOfRange {
        table: &'static str,
        weekday: Weekday,
        slot: u8,
    },
    #[error("unsupported kaalam table version {0}")]
    Version(u32),
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl KaalamTables {
    /// Check every slot. Only the Dur Muhurtam table may hold 0.
    pub fn validate(&self) -> Result<(), KaalamTableError> {
        if self.version == 0 {
            return Err(KaalamTableError::Version(self.version));
        }
        let strict = [
            ("rahu", &self.rahu),
            ("yamaganda", &self.yamaganda),
            ("gulikai", &self.gulikai),
        ];
        for (table, slots) in strict {
            for (weekday, &slot) in WEEKDAYS.iter().zip(slots.iter()) {
                if !(1..=SEGMENTS).contains(&slot) {
                    return Err(KaalamTableError::SlotOutOfRange {
                        table,
                        weekday: *weekday,
                        slot,
                    });
                }
            }
        }
        let dur = &self.dur_muhurtam;
        for (weekday, &slot) in WEEKDAYS.iter().zip(dur.segments.iter()) {
            if slot > SEGMENTS {
                return Err(KaalamTableError::SlotOutOfRange {
                    table: "dur_muhurtam",
                    weekday: *weekday,
                    slot,
                });
            }
        }
        for &slot in &dur.split_segments {
            if !(1..=SEGMENTS).contains(&slot) {
                return Err(KaalamTableError::SlotOutOfRange {
                    table: "dur_muhurtam.split_segments",
                    weekday: dur.split_weekday,
                    slot,
                });
            }
        }
        Ok(())
    }

    /// Segment for one of the table-driven kaalams (Rahu, Yamaganda,
    /// Gulikai). Other kinds have no segment table.
    pub fn segment_for(&self, kind: KaalamKind, weekday: Weekday) -> Option<u8> {
        let day = weekday.num_days_from_monday() as usize;
        match kind {
            KaalamKind::Rahu => Some(self.rahu[day]),
            KaalamKind::Yamaganda => Some(self.yamaganda[day]),
            KaalamKind::Gulikai => Some(self.gulikai[day]),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// Segment `n` (1..=8) of daylight.
pub fn daylight_segment(sunrise: DateTime<Utc>, sunset: DateTime<Utc>, n: u8) -> Option<TimeWindow> {
    if !(1..=SEGMENTS).contains(&n) {
        return None;
    }
    let part = (sunset - sunrise) / i32::from(SEGMENTS);
    let start = sunrise + part * i32::from(n - 1);
    // The last segment ends exactly at sunset regardless of rounding.
    let end = if n == SEGMENTS { sunset } else { start + part };
    Some(TimeWindow::new(start, end))
}

fn noon_window(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> TimeWindow {
    let noon = TimeWindow::new(sunrise, sunset).midpoint();
    let half = TimeDelta::minutes(NOON_HALF_WIDTH_MINUTES);
    TimeWindow::new(noon - half, noon + half)
}

/// Rahu Kalam, Yamaganda or Gulikai Kalam for a weekday.
pub fn kaalam_window(
    tables: &KaalamTables,
    kind: KaalamKind,
    weekday: Weekday,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> KaalamWindow {
    tables
        .segment_for(kind, weekday)
        .and_then(|n| daylight_segment(sunrise, sunset, n))
        .map_or_else(|| KaalamWindow::absent(kind), |w| KaalamWindow::single(kind, w))
}

pub fn abhijit(
    tables: &KaalamTables,
    weekday: Weekday,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> KaalamWindow {
    if weekday == tables.abhijit_excluded {
        KaalamWindow::absent(KaalamKind::Abhijit)
    } else {
        KaalamWindow::single(KaalamKind::Abhijit, noon_window(sunrise, sunset))
    }
}

pub fn dur_muhurtam(
    tables: &KaalamTables,
    weekday: Weekday,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
) -> KaalamWindow {
    let table = &tables.dur_muhurtam;
    let kind = KaalamKind::DurMuhurtam;
    if weekday == table.noon_weekday {
        return KaalamWindow::single(kind, noon_window(sunrise, sunset));
    }
    let slots: &[u8] = if weekday == table.split_weekday {
        &table.split_segments
    } else {
        std::slice::from_ref(&table.segments[weekday.num_days_from_monday() as usize])
    };
    KaalamWindow {
        kind,
        spans: slots
            .iter()
            .filter_map(|&n| daylight_segment(sunrise, sunset, n))
            .collect(),
    }
}

fn fraction_of(delta: TimeDelta, fraction: f64) -> TimeDelta {
    TimeDelta::milliseconds((delta.num_milliseconds() as f64 * fraction).round() as i64)
}

/// Amrit Kalam and Varjyam from the nakshatra span `[start, end)`.
///
/// Returns `(amrit_kalam, varjyam)`. Both are absent when the span is empty.
pub fn amrit_varjyam(start: DateTime<Utc>, end: DateTime<Utc>) -> (KaalamWindow, KaalamWindow) {
    let span = end - start;
    if span <= TimeDelta::zero() {
        return (
            KaalamWindow::absent(KaalamKind::AmritKalam),
            KaalamWindow::absent(KaalamKind::Varjyam),
        );
    }
    let length = TimeDelta::minutes(AMRIT_VARJYAM_MINUTES);
    let open = |fraction| {
        let s = start + fraction_of(span, fraction);
        TimeWindow::new(s, s + length)
    };
    (
        KaalamWindow::single(KaalamKind::AmritKalam, open(AMRIT_FRACTION)),
        KaalamWindow::single(KaalamKind::Varjyam, open(VARJYAM_FRACTION)),
    )
}

/// Every kaalam/muhurta window of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KaalamSet {
    pub rahu: KaalamWindow,
    pub gulikai: KaalamWindow,
    pub yamaganda: KaalamWindow,
    pub abhijit: KaalamWindow,
    pub dur_muhurtam: KaalamWindow,
    pub amrit_kalam: KaalamWindow,
    pub varjyam: KaalamWindow,
}

impl KaalamSet {
    /// `nakshatra_end` closes the span that starts at sunrise.
    pub fn compute(
        tables: &KaalamTables,
        weekday: Weekday,
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
        nakshatra_end: DateTime<Utc>,
    ) -> Self {
        let (amrit_kalam, varjyam) = amrit_varjyam(sunrise, nakshatra_end);
        Self {
            rahu: kaalam_window(tables, KaalamKind::Rahu, weekday, sunrise, sunset),
            gulikai: kaalam_window(tables, KaalamKind::Gulikai, weekday, sunrise, sunset),
            yamaganda: kaalam_window(tables, KaalamKind::Yamaganda, weekday, sunrise, sunset),
            abhijit: abhijit(tables, weekday, sunrise, sunset),
            dur_muhurtam: dur_muhurtam(tables, weekday, sunrise, sunset),
            amrit_kalam,
            varjyam,
        }
    }

    /// Windows in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = &KaalamWindow> {
        [
            &self.rahu,
            &self.gulikai,
            &self.yamaganda,
            &self.abhijit,
            &self.dur_muhurtam,
            &self.amrit_kalam,
            &self.varjyam,
        ]
        .into_iter()
    }
}
