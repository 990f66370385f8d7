//! Solar ephemeris for calendar boundary searches.
//!
//! The chart engine needs four primitives from an ephemeris: civil ↔ Julian
//! Day conversion, the equation of time, and the instant at which the Sun's
//! apparent ecliptic longitude reaches a given value. [`Ephemeris`] names that
//! contract; [`SolarEphemeris`] fulfils it analytically with a truncated
//! VSOP87 Earth theory, so no kernel files are required.

pub mod delta_t;
pub mod ephemeris;
pub mod error;
pub mod nutation;
pub mod solar;
pub mod util;
mod vsop87;

pub use delta_t::delta_t_seconds;
pub use ephemeris::Ephemeris;
pub use error::EphemerisError;
pub use nutation::{Nutation, mean_obliquity_deg, nutation_low_precision};
pub use solar::{SolarConfig, SolarEphemeris, SolarPosition, solar_position_tt};
pub use util::{normalize_360, normalize_to_pm180};
