//! Rashi (sidereal zodiac sign).
//!
//! Twelve equal signs of 30 degrees starting from Mesha at 0 deg sidereal.
//! The search layer uses the Sun's rashi for month naming and for
//! Sankranti (ingress) detection.

use std::fmt;

use serde::Serialize;

use crate::angle::{normalize_360, rashi_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Determine rashi from a sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    ALL_RASHIS[rashi_index(normalize_360(sidereal_lon_deg)) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_longitude_wraps() {
        assert_eq!(rashi_from_longitude(-5.0), Rashi::Meena);
        assert_eq!(rashi_from_longitude(360.0), Rashi::Mesha);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
        assert_eq!(Rashi::from_index(Rashi::Tula.index() + 1), Rashi::Vrischika);
    }
}
