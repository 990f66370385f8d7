//! Low-precision nutation and obliquity.
//!
//! Four-term nutation series from Meeus, *Astronomical Algorithms* ch. 22,
//! accurate to about 0.5″ in longitude and 0.1″ in obliquity. Mean obliquity
//! is the IAU 1980 polynomial (Meeus eq. 22.2).

/// Nutation in longitude and obliquity, arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub dpsi_arcsec: f64,
    pub deps_arcsec: f64,
}

/// Nutation for `t` Julian centuries (TT) since J2000.
pub fn nutation_low_precision(t: f64) -> Nutation {
    // Longitude of the Moon's ascending node.
    let omega = (125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t.powi(3) / 450_000.0)
        .to_radians();
    // Mean longitudes of the Sun and Moon.
    let l_sun = (280.466_5 + 36_000.769_8 * t).to_radians();
    let l_moon = (218.316_5 + 481_267.881_3 * t).to_radians();

    let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps_arcsec = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();
    Nutation {
        dpsi_arcsec,
        deps_arcsec,
    }
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.448 - 46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t.powi(3);
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD
        let t = -0.127_296_372_348;
        let n = nutation_low_precision(t);
        assert!((n.dpsi_arcsec + 3.788).abs() < 0.5, "dpsi {}", n.dpsi_arcsec);
        assert!((n.deps_arcsec - 9.443).abs() < 0.2, "deps {}", n.deps_arcsec);
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }
}
