//! Tithi (lunar day) names and paksha.
//!
//! Thirty tithis per synodic month. The fourteen tithis from Pratipada to
//! Chaturdashi occur once in each paksha; Purnima closes the Shukla paksha
//! and Amavasya the Krishna paksha.

use std::fmt;

use serde::Serialize;

/// Tithi name, independent of paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    Pratipada,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

/// Cyclic table indexed by tithi index 0..=29.
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::Pratipada,
    Tithi::Dvitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::Purnima,
    Tithi::Pratipada,
    Tithi::Dvitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::Amavasya,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dvitiya => "Dvitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Parse a tithi name. Accepts the regional spellings "Padyami" and
    /// "Dwitiya" as well as the canonical names; case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let alias = match name.to_ascii_lowercase().as_str() {
            "padyami" | "prathama" => Some(Self::Pratipada),
            "dwitiya" => Some(Self::Dvitiya),
            "dvadashi" => Some(Self::Dwadashi),
            "pournami" | "poornima" => Some(Self::Purnima),
            _ => None,
        };
        alias.or_else(|| {
            ALL_TITHIS
                .iter()
                .copied()
                .find(|t| t.name().eq_ignore_ascii_case(name))
        })
    }
}

impl fmt::Display for Tithi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing, tithi indices 0..=14.
    Shukla,
    /// Waning, tithi indices 15..=29.
    Krishna,
}

impl Paksha {
    pub const fn from_tithi_index(index: u8) -> Self {
        if index >= 15 { Self::Krishna } else { Self::Shukla }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

impl fmt::Display for Paksha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Paksha", self.name())
    }
}

/// A tithi index resolved to its name and paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index (0 = Shukla Pratipada .. 29 = Amavasya).
    pub tithi_index: u8,
    pub paksha: Paksha,
}

/// Resolve a tithi index. Indices past 29 wrap.
pub fn tithi_from_index(index: u8) -> TithiPosition {
    let tithi_index = index % 30;
    TithiPosition {
        tithi: ALL_TITHIS[tithi_index as usize],
        tithi_index,
        paksha: Paksha::from_tithi_index(tithi_index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(tithi_from_index(0).tithi, Tithi::Pratipada);
        assert_eq!(tithi_from_index(14).tithi, Tithi::Purnima);
        assert_eq!(tithi_from_index(15).tithi, Tithi::Pratipada);
        assert_eq!(tithi_from_index(29).tithi, Tithi::Amavasya);
    }

    #[test]
    fn paksha_is_total() {
        for i in 0..30u8 {
            let p = tithi_from_index(i).paksha;
            assert_eq!(p == Paksha::Krishna, i >= 15, "index {i}");
        }
    }

    #[test]
    fn paksha_halves_share_names() {
        for i in 0..14usize {
            assert_eq!(ALL_TITHIS[i], ALL_TITHIS[i + 15]);
        }
    }

    #[test]
    fn aliases_parse() {
        assert_eq!(Tithi::from_name("Padyami"), Some(Tithi::Pratipada));
        assert_eq!(Tithi::from_name("pratipada"), Some(Tithi::Pratipada));
        assert_eq!(Tithi::from_name("dwitiya"), Some(Tithi::Dvitiya));
        assert_eq!(Tithi::Dvitiya.name(), "Dvitiya");
        assert_eq!(Tithi::from_name("AMAVASYA"), Some(Tithi::Amavasya));
        assert_eq!(Tithi::from_name("Purnima"), Some(Tithi::Purnima));
        assert_eq!(Tithi::from_name("Sunday"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Paksha::Krishna.to_string(), "Krishna Paksha");
        assert_eq!(Tithi::Ekadashi.to_string(), "Ekadashi");
    }
}
