//! Lunar months (Amanta).
//!
//! A month runs from one Amavasya to the next and takes its name from the
//! sign the Sun occupies at the opening Amavasya: the Sun in Meena opens
//! Chaitra, in Mesha Vaishakha, and so on around the zodiac.

use std::fmt;

use serde::Serialize;

use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwin,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwin,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwin => "Ashwin",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_MASAS[(index % 12) as usize]
    }
}

impl fmt::Display for Masa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month opened by an Amavasya with the Sun in `sun_rashi`.
pub const fn masa_after_rashi(sun_rashi: Rashi) -> Masa {
    Masa::from_index(sun_rashi.index() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn meena_opens_chaitra() {
        assert_eq!(masa_after_rashi(Rashi::Meena), Masa::Chaitra);
        assert_eq!(masa_after_rashi(Rashi::Tula), Masa::Kartika);
        assert_eq!(masa_after_rashi(Rashi::Kumbha), Masa::Phalguna);
    }

    #[test]
    fn mapping_is_a_bijection() {
        let mut seen = [false; 12];
        for r in ALL_RASHIS {
            seen[masa_after_rashi(r).index() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
