//! The ephemeris contract consumed by the chart engine.

use manse_time::{CivilTime, calendar_to_jd};

use crate::error::EphemerisError;

/// Solar primitives needed to place calendar boundaries.
///
/// All Julian Days are on the UT clock. Implementations must be
/// deterministic: equal inputs give bit-identical outputs.
pub trait Ephemeris {
    /// Julian Day (UT) of a civil UT date and fractional hour.
    fn civil_to_jd_ut(&self, year: i32, month: u32, day: u32, hour_fraction: f64) -> f64 {
        calendar_to_jd(year, month, day as f64 + hour_fraction / 24.0)
    }

    /// Civil UT reading of a Julian Day.
    fn jd_to_civil(&self, jd_ut: f64) -> CivilTime {
        CivilTime::from_jd(jd_ut)
    }

    /// Apparent geocentric ecliptic longitude of the Sun, degrees in [0, 360).
    fn solar_longitude(&self, jd_ut: f64) -> f64;

    /// Equation of time in days: apparent minus mean solar time.
    fn equation_of_time(&self, jd_ut: f64) -> f64;

    /// First instant at or after `start_jd_ut` at which the Sun's apparent
    /// longitude equals `longitude_deg`.
    fn solar_longitude_crossing(
        &self,
        longitude_deg: f64,
        start_jd_ut: f64,
    ) -> Result<f64, EphemerisError>;
}
