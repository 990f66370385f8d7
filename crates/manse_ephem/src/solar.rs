//! Analytic apparent Sun and the equation of time.
//!
//! Position follows Meeus ch. 25 ("higher accuracy" method): heliocentric
//! Earth from the truncated VSOP87 series, reversed to geocentric, reduced to
//! FK5, then corrected for nutation and annual aberration. The equation of
//! time follows Meeus ch. 28.

use manse_time::{J2000_JD, SECONDS_PER_DAY};
use tracing::trace;

use crate::delta_t::delta_t_seconds;
use crate::ephemeris::Ephemeris;
use crate::error::EphemerisError;
use crate::nutation::{mean_obliquity_deg, nutation_low_precision};
use crate::util::{normalize_360, normalize_to_pm180};
use crate::vsop87::{earth_longitude_rad, earth_radius_au};

/// Mean motion of the Sun in longitude, degrees per day.
const MEAN_DAILY_MOTION_DEG: f64 = 360.0 / 365.242_19;

/// FK5 frame correction to VSOP87 longitude, arcseconds.
const FK5_CORRECTION_ARCSEC: f64 = -0.090_33;

/// Constant of aberration scaled to 1 AU, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.489_8;

/// Apparent geocentric position of the Sun at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent ecliptic longitude of date, degrees [0, 360).
    pub longitude_deg: f64,
    /// Earth-Sun distance in AU.
    pub distance_au: f64,
    /// Nutation in longitude, degrees.
    pub nutation_longitude_deg: f64,
    /// True obliquity of the ecliptic, degrees.
    pub true_obliquity_deg: f64,
}

/// Apparent solar position for a Julian Ephemeris Day (TT).
pub fn solar_position_tt(jd_tt: f64) -> SolarPosition {
    let tau = (jd_tt - J2000_JD) / 365_250.0;
    let t = tau * 10.0;

    let l_earth = earth_longitude_rad(tau).to_degrees();
    let r = earth_radius_au(tau);
    let geometric = l_earth + 180.0;

    let nut = nutation_low_precision(t);
    let apparent = geometric
        + (FK5_CORRECTION_ARCSEC + nut.dpsi_arcsec - ABERRATION_ARCSEC / r) / 3600.0;

    SolarPosition {
        longitude_deg: normalize_360(apparent),
        distance_au: r,
        nutation_longitude_deg: nut.dpsi_arcsec / 3600.0,
        true_obliquity_deg: mean_obliquity_deg(t) + nut.deps_arcsec / 3600.0,
    }
}

/// Equation of time for a Julian Ephemeris Day (TT), in degrees of hour angle.
fn equation_of_time_deg(jd_tt: f64) -> f64 {
    let tau = (jd_tt - J2000_JD) / 365_250.0;
    // Mean longitude of the Sun referred to the mean equinox of date.
    let l0 = 280.466_456_7
        + 360_007.698_277_9 * tau
        + 0.030_320_28 * tau.powi(2)
        + tau.powi(3) / 49_931.0
        - tau.powi(4) / 15_300.0
        - tau.powi(5) / 2_000_000.0;

    let pos = solar_position_tt(jd_tt);
    let lambda = pos.longitude_deg.to_radians();
    let eps = pos.true_obliquity_deg.to_radians();
    let alpha = (eps.cos() * lambda.sin()).atan2(lambda.cos()).to_degrees();

    normalize_to_pm180(l0 - 0.005_718_3 - alpha + pos.nutation_longitude_deg * eps.cos())
}

/// Settings for [`SolarEphemeris`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarConfig {
    /// Convert UT to TT with the ΔT model before evaluating the theory.
    pub apply_delta_t: bool,
    /// Convergence threshold for crossing searches, days.
    pub tolerance_days: f64,
    /// Iteration budget for crossing searches.
    pub max_iterations: u32,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            apply_delta_t: true,
            tolerance_days: 1e-8,
            max_iterations: 50,
        }
    }
}

impl SolarConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !(self.tolerance_days.is_finite() && self.tolerance_days > 0.0) {
            return Err(EphemerisError::InvalidConfig(
                "tolerance_days must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(EphemerisError::InvalidConfig(
                "max_iterations must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Kernel-free solar ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarEphemeris {
    config: SolarConfig,
}

impl SolarEphemeris {
    pub fn new(config: SolarConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolarConfig {
        &self.config
    }

    /// Julian Ephemeris Day (TT) for a Julian Day (UT).
    pub fn jd_tt(&self, jd_ut: f64) -> f64 {
        if !self.config.apply_delta_t {
            return jd_ut;
        }
        let year = 2000.0 + (jd_ut - J2000_JD) / 365.25;
        jd_ut + delta_t_seconds(year) / SECONDS_PER_DAY
    }
}

impl Ephemeris for SolarEphemeris {
    fn solar_longitude(&self, jd_ut: f64) -> f64 {
        solar_position_tt(self.jd_tt(jd_ut)).longitude_deg
    }

    fn equation_of_time(&self, jd_ut: f64) -> f64 {
        equation_of_time_deg(self.jd_tt(jd_ut)) / 360.0
    }

    fn solar_longitude_crossing(
        &self,
        longitude_deg: f64,
        start_jd_ut: f64,
    ) -> Result<f64, EphemerisError> {
        if !longitude_deg.is_finite() {
            return Err(EphemerisError::NonFinite(longitude_deg));
        }
        if !start_jd_ut.is_finite() {
            return Err(EphemerisError::NonFinite(start_jd_ut));
        }
        let target = normalize_360(longitude_deg);
        let ahead = normalize_360(target - self.solar_longitude(start_jd_ut));
        let mut jd = start_jd_ut + ahead / MEAN_DAILY_MOTION_DEG;

        for iteration in 0..self.config.max_iterations {
            let diff = normalize_to_pm180(target - self.solar_longitude(jd));
            let step = diff / MEAN_DAILY_MOTION_DEG;
            jd += step;
            if step.abs() < self.config.tolerance_days {
                trace!(target, jd, iteration, "solar longitude crossing converged");
                return Ok(jd.max(start_jd_ut));
            }
        }
        Err(EphemerisError::NoConvergence(
            "solar longitude crossing did not settle",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manse_time::calendar_to_jd;

    #[test]
    fn meeus_example_25b_apparent_longitude() {
        // 1992 October 13.0 TD
        let pos = solar_position_tt(2_448_908.5);
        assert!(
            (pos.longitude_deg - 199.906).abs() < 0.003,
            "got {}",
            pos.longitude_deg
        );
        assert!((pos.distance_au - 0.997_6).abs() < 1e-3);
    }

    #[test]
    fn meeus_example_28b_equation_of_time() {
        // 1992 October 13.0 TD: E = +13m 42.6s
        let minutes = equation_of_time_deg(2_448_908.5) * 4.0;
        assert!((minutes - 13.71).abs() < 0.1, "got {minutes}");
    }

    #[test]
    fn equation_of_time_extremes() {
        let eph = SolarEphemeris::default();
        let feb = eph.equation_of_time(calendar_to_jd(2024, 2, 11.5)) * 1440.0;
        let nov = eph.equation_of_time(calendar_to_jd(2024, 11, 3.5)) * 1440.0;
        assert!((feb + 14.2).abs() < 0.5, "February minimum {feb}");
        assert!((nov - 16.4).abs() < 0.5, "November maximum {nov}");
    }

    #[test]
    fn crossing_lands_on_target() {
        let eph = SolarEphemeris::default();
        let start = calendar_to_jd(2024, 1, 1.0);
        let jd = eph.solar_longitude_crossing(315.0, start).unwrap();
        assert!(jd >= start);
        assert!(normalize_to_pm180(eph.solar_longitude(jd) - 315.0).abs() < 1e-6);
    }

    #[test]
    fn crossing_just_passed_wraps_to_next_year() {
        let eph = SolarEphemeris::default();
        let first = eph
            .solar_longitude_crossing(0.0, calendar_to_jd(2024, 3, 1.0))
            .unwrap();
        let next = eph.solar_longitude_crossing(0.0, first + 0.01).unwrap();
        assert!((next - first - 365.24).abs() < 0.1);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SolarConfig {
            max_iterations: 0,
            ..SolarConfig::default()
        };
        assert!(SolarEphemeris::new(config).is_err());
    }

    #[test]
    fn non_finite_start_rejected() {
        let eph = SolarEphemeris::default();
        assert!(matches!(
            eph.solar_longitude_crossing(0.0, f64::NAN),
            Err(EphemerisError::NonFinite(_))
        ));
    }
}
