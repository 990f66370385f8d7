//! Calendar arithmetic shared by the chart engine.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Julian Day Numbers for civil dates
//! - `CivilTime`, a clock-agnostic calendar timestamp with sub-second precision
//! - Parsing of user-entered dates and times of day

pub mod civil;
pub mod error;
pub mod julian;
pub mod parse;

pub use civil::{CivilTime, jd_to_naive, minutes_since_midnight, naive_to_jd};
pub use error::TimeError;
pub use julian::{
    J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    julian_day_number,
};
pub use parse::{parse_date, parse_time_of_day};
