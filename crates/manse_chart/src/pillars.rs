//! Year, month, day and hour pillars of a normalized birth instant.
//!
//! Year and month boundaries are solar-longitude crossings, not calendar
//! dates. Day and hour pillars are read from local apparent time.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use manse_cycle::{
    MAJOR_TERMS, SolarTerm, Stem, StemBranch, hour_branch_for, hour_pillar_for,
    month_pillar_for, year_pillar_for,
};
use manse_ephem::Ephemeris;
use manse_time::{julian_day_number, minutes_since_midnight};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChartError;

/// Apparent solar longitude of 立春, which opens the year.
pub const START_OF_SPRING_DEG: f64 = 315.0;

/// Days before 1 January from which 立春 is searched.
const START_OF_SPRING_LEAD_DAYS: f64 = 5.0;

/// Lookback for the month-opening term; major terms are at most ~31.5 days apart.
pub const MONTH_TERM_LOOKBACK_DAYS: f64 = 40.0;

/// Apparent-time hour from which the day pillar belongs to the next date.
const EARLY_RAT_HOUR: u32 = 23;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPillar {
    pub pillar: StemBranch,
    /// Year whose 立春 opened the pillar.
    pub solar_year: i32,
    pub start_of_spring_jd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthPillar {
    pub pillar: StemBranch,
    pub term: SolarTerm,
    pub term_jd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayPillar {
    pub pillar: StemBranch,
    /// Apparent-time date counted for the day, after the 23:00 rule.
    pub date: NaiveDate,
    pub day_number: i64,
    /// Whether the 23:00 rule moved the date forward.
    pub early_rat_hour: bool,
}

/// The four pillars with the metadata that fixed them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
    pub solar_year: i32,
    pub month_term: SolarTerm,
    pub day_date: NaiveDate,
    pub day_number: i64,
}

impl Chart {
    pub fn day_stem(&self) -> Stem {
        self.day.stem
    }

    /// Pillars in display order: year, month, day, hour.
    pub fn pillars(&self) -> [StemBranch; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Instant of 立春 in a calendar year.
pub fn start_of_spring<E: Ephemeris + ?Sized>(ephemeris: &E, year: i32) -> Result<f64, ChartError> {
    let search_from = ephemeris.civil_to_jd_ut(year, 1, 1, 0.0) - START_OF_SPRING_LEAD_DAYS;
    Ok(ephemeris.solar_longitude_crossing(START_OF_SPRING_DEG, search_from)?)
}

/// Year pillar: births before 立春 belong to the previous year.
pub fn resolve_year_pillar<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
    utc_year: i32,
) -> Result<YearPillar, ChartError> {
    let mut solar_year = utc_year;
    let mut start_of_spring_jd = start_of_spring(ephemeris, solar_year)?;
    if jd_ut < start_of_spring_jd {
        solar_year -= 1;
        start_of_spring_jd = start_of_spring(ephemeris, solar_year)?;
    }
    Ok(YearPillar {
        pillar: year_pillar_for(solar_year),
        solar_year,
        start_of_spring_jd,
    })
}

/// Month pillar from the latest major term at or before birth.
pub fn resolve_month_pillar<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
    year_stem: Stem,
) -> Result<MonthPillar, ChartError> {
    let search_from = jd_ut - MONTH_TERM_LOOKBACK_DAYS;
    let mut latest: Option<(SolarTerm, f64)> = None;
    for term in MAJOR_TERMS {
        let crossing = ephemeris.solar_longitude_crossing(term.longitude_deg(), search_from)?;
        if crossing <= jd_ut && latest.is_none_or(|(_, best)| crossing > best) {
            latest = Some((term, crossing));
        }
    }
    let not_found = ChartError::TermNotFound {
        jd_ut,
        window_days: MONTH_TERM_LOOKBACK_DAYS,
    };
    let (term, term_jd) = latest.ok_or_else(|| not_found.clone())?;
    let branch = term.month_branch().ok_or(not_found)?;
    debug!(term = term.name(), term_jd, "month-opening term");
    Ok(MonthPillar {
        pillar: month_pillar_for(year_stem, branch),
        term,
        term_jd,
    })
}

/// Day pillar from the apparent-time date; 23:00 onward counts as the next day.
pub fn resolve_day_pillar(apparent: &NaiveDateTime) -> Result<DayPillar, ChartError> {
    let early_rat_hour = apparent.hour() >= EARLY_RAT_HOUR;
    let date = if early_rat_hour {
        apparent
            .date()
            .succ_opt()
            .ok_or_else(|| ChartError::InvalidInput(format!("no day after {apparent}")))?
    } else {
        apparent.date()
    };
    let day_number = julian_day_number(date.year(), date.month(), date.day());
    Ok(DayPillar {
        pillar: StemBranch::from_day_number(day_number),
        date,
        day_number,
        early_rat_hour,
    })
}

/// Hour pillar from the apparent time of day and the day stem.
pub fn resolve_hour_pillar(apparent: &NaiveDateTime, day_stem: Stem) -> StemBranch {
    hour_pillar_for(day_stem, hour_branch_for(minutes_since_midnight(apparent)))
}
