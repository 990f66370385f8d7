//! Calendar timestamps with sub-second precision.
//!
//! `CivilTime` carries a wall-clock reading without committing to a clock:
//! the chart engine uses it for UTC, standard time and apparent solar time
//! alike. Bridges to `chrono::NaiveDateTime` live here too.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// Calendar date and time with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fraction of the day elapsed, in hours.
    pub fn hour_fraction(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Julian Date on the same clock as the timestamp.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.hour_fraction() / 24.0)
    }

    /// Calendar reading of a Julian Date, rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let millis = (day_frac.fract() * SECONDS_PER_DAY * 1000.0).round() as u64;
        if millis >= 86_400_000 {
            // Rounding reached midnight: re-derive the date from the next day.
            return Self::from_jd((jd + 0.5).floor() + 0.5);
        }
        let hour = (millis / 3_600_000) as u32;
        let minute = ((millis % 3_600_000) / 60_000) as u32;
        let second = (millis % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }

    pub fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )?;
        let nanos = (self.second * 1e9).round() as i64;
        date.and_hms_opt(self.hour, self.minute, 0)
            .and_then(|dt| dt.checked_add_signed(TimeDelta::nanoseconds(nanos)))
            .ok_or(TimeError::OutOfRange {
                field: "time of day",
                value: i64::from(self.hour * 100 + self.minute),
            })
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Julian Date of a naive timestamp, read on whatever clock it carries.
pub fn naive_to_jd(dt: &NaiveDateTime) -> f64 {
    CivilTime::from_naive(dt).to_jd()
}

/// Naive timestamp for a Julian Date, rounded to the millisecond.
pub fn jd_to_naive(jd: f64) -> Result<NaiveDateTime, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::Unrepresentable(jd));
    }
    CivilTime::from_jd(jd)
        .to_naive()
        .map_err(|_| TimeError::Unrepresentable(jd))
}

/// Minutes elapsed since the preceding midnight, including seconds.
pub fn minutes_since_midnight(dt: &NaiveDateTime) -> f64 {
    dt.hour() as f64 * 60.0
        + dt.minute() as f64
        + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 60.0
}
