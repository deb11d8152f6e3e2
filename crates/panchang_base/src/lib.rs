//! Pure panchang arithmetic.
//!
//! Everything here is a function of sidereal longitudes or of sunrise/sunset
//! instants already in hand; nothing queries an ephemeris. The search layer
//! (`panchang_search`) builds on these primitives.

pub mod angle;
pub mod kaalam;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod samvatsara;
pub mod tithi;
pub mod yoga;

pub use angle::{
    NAKSHATRA_SPAN_DEG, RASHI_SPAN_DEG, TITHI_SPAN_DEG, YOGA_SPAN_DEG, elongation_deg,
    nakshatra_index, normalize_360, rashi_index, tithi_index, yoga_index,
};
pub use kaalam::{
    DurMuhurtamTable, KaalamKind, KaalamSet, KaalamTableError, KaalamTables, KaalamWindow,
    TimeWindow, abhijit, amrit_varjyam, daylight_segment, dur_muhurtam, kaalam_window,
};
pub use masa::{ALL_MASAS, Masa, masa_after_rashi};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use samvatsara::{
    ALL_SAMVATSARAS, SHAKA_ANCHOR_INDEX, SHAKA_ANCHOR_YEAR, Samvatsara, samvatsara_from_shaka_year,
    shaka_year,
};
pub use tithi::{ALL_TITHIS, Paksha, Tithi, TithiPosition, tithi_from_index};
pub use yoga::{ALL_YOGAS, Yoga};
