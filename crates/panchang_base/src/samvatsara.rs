//! Samvatsara (60-year cycle) and Shaka year numbering.
//!
//! The Shaka year turns over at Ugadi: a date on or after that year's Ugadi
//! is in Shaka `year - 78`, an earlier date in `year - 79`. Samvatsara names
//! repeat every 60 Shaka years; Shaka 1947 (from Ugadi 2025) is Vishvavasu.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// The 60 samvatsaras of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Samvatsara {
    Prabhava,
    Vibhava,
    Shukla,
    Pramodoota,
    Prajothpatti,
    Angirasa,
    Shrimukha,
    Bhava,
    Yuva,
    Dhaatu,
    Eeshvara,
    Bahudhanya,
    Pramaathi,
    Vikrama,
    Vrisha,
    Chitrabhanu,
    Svabhanu,
    Taarana,
    Paarthiva,
    Vyaya,
    Sarvajit,
    Sarvadhari,
    Virodhi,
    Vikruti,
    Khara,
    Nandana,
    Vijaya,
    Jaya,
    Manmatha,
    Durmukhi,
    Hevilambi,
    Vilambi,
    Vikari,
    Sharvari,
    Plava,
    Shubhakrut,
    Shobhakrut,
    Krodhi,
    Vishvavasu,
    Paraabhava,
    Plavanga,
    Keelaka,
    Saumya,
    Sadharana,
    Virodhikrut,
    Paridhavi,
    Pramaadhi,
    Aananda,
    Raakshasa,
    Naala,
    Pingala,
    Kaalayukti,
    Siddharthi,
    Raudri,
    Durmathi,
    Dundubhi,
    Rudhirodgaari,
    Raktaakshi,
    Krodhana,
    Akshaya,
}

/// All 60 samvatsaras in order (index 0 = Prabhava).
pub const ALL_SAMVATSARAS: [Samvatsara; 60] = [
    Samvatsara::Prabhava,
    Samvatsara::Vibhava,
    Samvatsara::Shukla,
    Samvatsara::Pramodoota,
    Samvatsara::Prajothpatti,
    Samvatsara::Angirasa,
    Samvatsara::Shrimukha,
    Samvatsara::Bhava,
    Samvatsara::Yuva,
    Samvatsara::Dhaatu,
    Samvatsara::Eeshvara,
    Samvatsara::Bahudhanya,
    Samvatsara::Pramaathi,
    Samvatsara::Vikrama,
    Samvatsara::Vrisha,
    Samvatsara::Chitrabhanu,
    Samvatsara::Svabhanu,
    Samvatsara::Taarana,
    Samvatsara::Paarthiva,
    Samvatsara::Vyaya,
    Samvatsara::Sarvajit,
    Samvatsara::Sarvadhari,
    Samvatsara::Virodhi,
    Samvatsara::Vikruti,
    Samvatsara::Khara,
    Samvatsara::Nandana,
    Samvatsara::Vijaya,
    Samvatsara::Jaya,
    Samvatsara::Manmatha,
    Samvatsara::Durmukhi,
    Samvatsara::Hevilambi,
    Samvatsara::Vilambi,
    Samvatsara::Vikari,
    Samvatsara::Sharvari,
    Samvatsara::Plava,
    Samvatsara::Shubhakrut,
    Samvatsara::Shobhakrut,
    Samvatsara::Krodhi,
    Samvatsara::Vishvavasu,
    Samvatsara::Paraabhava,
    Samvatsara::Plavanga,
    Samvatsara::Keelaka,
    Samvatsara::Saumya,
    Samvatsara::Sadharana,
    Samvatsara::Virodhikrut,
    Samvatsara::Paridhavi,
    Samvatsara::Pramaadhi,
    Samvatsara::Aananda,
    Samvatsara::Raakshasa,
    Samvatsara::Naala,
    Samvatsara::Pingala,
    Samvatsara::Kaalayukti,
    Samvatsara::Siddharthi,
    Samvatsara::Raudri,
    Samvatsara::Durmathi,
    Samvatsara::Dundubhi,
    Samvatsara::Rudhirodgaari,
    Samvatsara::Raktaakshi,
    Samvatsara::Krodhana,
    Samvatsara::Akshaya,
];

const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramodoota",
    "Prajothpatti",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhaatu",
    "Eeshvara",
    "Bahudhanya",
    "Pramaathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Taarana",
    "Paarthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Paraabhava",
    "Plavanga",
    "Keelaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paridhavi",
    "Pramaadhi",
    "Aananda",
    "Raakshasa",
    "Naala",
    "Pingala",
    "Kaalayukti",
    "Siddharthi",
    "Raudri",
    "Durmathi",
    "Dundubhi",
    "Rudhirodgaari",
    "Raktaakshi",
    "Krodhana",
    "Akshaya",
];

/// Shaka year used as the naming anchor.
pub const SHAKA_ANCHOR_YEAR: i32 = 1947;

/// Cycle index of [`SHAKA_ANCHOR_YEAR`] (Vishvavasu).
pub const SHAKA_ANCHOR_INDEX: i32 = 38;

impl Samvatsara {
    pub fn name(self) -> &'static str {
        SAMVATSARA_NAMES[self.index() as usize]
    }

    /// 0-based index (Prabhava=0 .. Akshaya=59).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Samvatsara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Samvatsara of a Shaka year.
pub fn samvatsara_from_shaka_year(shaka_year: i32) -> Samvatsara {
    let offset = (shaka_year - SHAKA_ANCHOR_YEAR + SHAKA_ANCHOR_INDEX).rem_euclid(60);
    ALL_SAMVATSARAS[offset as usize]
}

/// Shaka year of `date`, given the Ugadi of `date`'s Gregorian year.
pub fn shaka_year(date: NaiveDate, ugadi: NaiveDate) -> i32 {
    if date < ugadi {
        date.year() - 79
    } else {
        date.year() - 78
    }
}
