//! Observer location.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Hyderabad, India.
    pub fn hyderabad() -> Self {
        Self::new(17.3850, 78.4867, 0.0)
    }

    /// Whether latitude and longitude lie in their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
            && self.altitude_m.is_finite()
    }

    /// Offset of local mean solar time from UTC (4 minutes per degree east).
    pub fn mean_solar_offset(&self) -> TimeDelta {
        TimeDelta::milliseconds((self.longitude_deg * 240_000.0).round() as i64)
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::hyderabad()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_solar_offset_east_positive() {
        let site = GeoLocation::new(0.0, 90.0, 0.0);
        assert_eq!(site.mean_solar_offset(), TimeDelta::hours(6));
        let west = GeoLocation::new(0.0, -15.0, 0.0);
        assert_eq!(west.mean_solar_offset(), TimeDelta::hours(-1));
    }

    #[test]
    fn validity() {
        assert!(GeoLocation::hyderabad().is_valid());
        assert!(!GeoLocation::new(91.0, 0.0, 0.0).is_valid());
        assert!(!GeoLocation::new(0.0, 181.0, 0.0).is_valid());
    }
}
