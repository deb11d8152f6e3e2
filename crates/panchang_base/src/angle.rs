//! Angle reducer: sidereal longitudes to element indices.
//!
//! Indices are clamped to their upper bound so that a floating-point
//! `rem_euclid` result of exactly 360.0 can never index past the table.

/// One tithi is 12 degrees of Moon-Sun elongation.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one yoga, same partition as nakshatras.
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one rashi.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Moon minus Sun, normalized to [0, 360).
pub fn elongation_deg(sun_deg: f64, moon_deg: f64) -> f64 {
    normalize_360(moon_deg - sun_deg)
}

fn sector(deg: f64, span: f64, max: u8) -> u8 {
    ((normalize_360(deg) / span).floor() as u8).min(max)
}

/// Tithi index 0..=29 from sidereal Sun and Moon longitudes.
pub fn tithi_index(sun_deg: f64, moon_deg: f64) -> u8 {
    sector(moon_deg - sun_deg, TITHI_SPAN_DEG, 29)
}

/// Nakshatra index 0..=26 from the Moon's sidereal longitude.
pub fn nakshatra_index(moon_deg: f64) -> u8 {
    sector(moon_deg, NAKSHATRA_SPAN_DEG, 26)
}

/// Yoga index 0..=26 from the sum of sidereal longitudes.
pub fn yoga_index(sun_deg: f64, moon_deg: f64) -> u8 {
    sector(sun_deg + moon_deg, YOGA_SPAN_DEG, 26)
}

/// Rashi index 0..=11 from a sidereal longitude.
pub fn rashi_index(lon_deg: f64) -> u8 {
    sector(lon_deg, RASHI_SPAN_DEG, 11)
}
