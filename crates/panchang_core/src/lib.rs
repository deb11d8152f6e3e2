//! Ephemeris service contract for the panchang pipeline.
//!
//! The derivation crates never compute planetary positions themselves. They
//! consume an [`Ephemeris`] that reports tropical solar and lunar longitudes,
//! the ayanamsa, and rise/set instants for a site. This crate defines that
//! contract together with [`MeanMotionEphemeris`], a uniform-motion model
//! used for deterministic fixtures and benchmarks.

pub mod error;
pub mod mean_motion;
pub mod site;

pub use error::EphemerisError;
pub use mean_motion::MeanMotionEphemeris;
pub use site::GeoLocation;

use chrono::{DateTime, NaiveDate, Utc};

/// Bodies whose horizon events the pipeline asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

/// Direction of a horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    Rise,
    Set,
}

/// Sidereal (ayanamsa-corrected) longitudes of the Sun and Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalAngle {
    pub at: DateTime<Utc>,
    /// Sidereal solar longitude in degrees, [0, 360).
    pub sun_deg: f64,
    /// Sidereal lunar longitude in degrees, [0, 360).
    pub moon_deg: f64,
}

impl AstronomicalAngle {
    /// Moon minus Sun, normalized to [0, 360).
    pub fn elongation_deg(&self) -> f64 {
        (self.moon_deg - self.sun_deg).rem_euclid(360.0)
    }
}

/// Source of positions and horizon events.
///
/// Longitudes are tropical, in degrees. Implementations must be pure for a
/// given instant: the search routines call them many times per day and rely
/// on repeated queries agreeing.
pub trait Ephemeris {
    /// Tropical apparent longitude of the Sun.
    fn solar_longitude(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Tropical apparent longitude of the Moon.
    fn lunar_longitude(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Ayanamsa (tropical minus sidereal) in degrees.
    fn ayanamsa(&self, at: DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// The first `event` of `body` falling on the site's local civil `date`.
    ///
    /// `Ok(None)` means the event does not occur that day (common for the
    /// Moon, possible for the Sun at high latitudes).
    fn rise_or_set(
        &self,
        date: NaiveDate,
        body: Body,
        event: RiseSetEvent,
        site: &GeoLocation,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError>;

    /// Sidereal Sun and Moon longitudes at `at`.
    fn sidereal_angles(&self, at: DateTime<Utc>) -> Result<AstronomicalAngle, EphemerisError> {
        let ayanamsa = self.ayanamsa(at)?;
        let sun_deg = (self.solar_longitude(at)? - ayanamsa).rem_euclid(360.0);
        let moon_deg = (self.lunar_longitude(at)? - ayanamsa).rem_euclid(360.0);
        Ok(AstronomicalAngle {
            at,
            sun_deg,
            moon_deg,
        })
    }
}
