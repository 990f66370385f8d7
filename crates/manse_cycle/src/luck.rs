//! Luck pillars (大運) and annual pillars (歲運).
//!
//! The luck sequence steps the month pillar forward or backward, one pair
//! per decade. Its starting age comes from the gap between birth and the
//! adjacent solar term, read at three days of gap per year of age.

use serde::{Deserialize, Serialize};

use crate::detail::PillarDetail;
use crate::element::Polarity;
use crate::pillar::{StemBranch, year_pillar_for};
use crate::stem::Stem;
use crate::ten_god::PolarityConvention;
use crate::twelve_stage::{TwelveStage, twelve_stage};

/// Number of decadal pillars generated.
pub const DECADAL_PILLAR_COUNT: usize = 10;

/// Number of annual pillars in one decade.
pub const ANNUAL_PILLAR_COUNT: usize = 10;

/// Gap minutes worth one year of age (three days).
pub const MINUTES_PER_AGE_YEAR: f64 = 4_320.0;

/// Gap minutes worth one month of age (six hours).
pub const MINUTES_PER_AGE_MONTH: f64 = 360.0;

/// Gap minutes worth one day of age.
pub const MINUTES_PER_AGE_DAY: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남자" => Ok(Self::Male),
            "female" | "f" | "여" | "여자" => Ok(Self::Female),
            _ => Err(format!("unknown gender: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    /// Cycle step per decade: +1 or -1.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Yang-year men and yin-year women run forward; the other two run backward.
pub fn luck_direction(year_stem: Stem, gender: Gender) -> LuckDirection {
    match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => {
            LuckDirection::Forward
        }
        _ => LuckDirection::Backward,
    }
}

/// Age at which the first luck pillar begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartingAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    /// `years + months/12 + days/360`.
    pub fractional_years: f64,
}

impl StartingAge {
    /// Convert a birth-to-term gap in minutes. The sign is ignored.
    ///
    /// Residual days round half-to-even; 30 days carry into a month and
    /// 12 months into a year.
    pub fn from_minutes(minutes: f64) -> Self {
        let total = minutes.abs();
        let mut years = (total / MINUTES_PER_AGE_YEAR).floor() as u32;
        let rem = total - f64::from(years) * MINUTES_PER_AGE_YEAR;
        let mut months = (rem / MINUTES_PER_AGE_MONTH).floor() as u32;
        let rem = rem - f64::from(months) * MINUTES_PER_AGE_MONTH;
        let mut days = (rem / MINUTES_PER_AGE_DAY).round_ties_even() as u32;

        if days >= 30 {
            months += days / 30;
            days %= 30;
        }
        if months >= 12 {
            years += months / 12;
            months %= 12;
        }
        Self {
            years,
            months,
            days,
            fractional_years: f64::from(years)
                + f64::from(months) / 12.0
                + f64::from(days) / 360.0,
        }
    }
}

/// One decade of the luck sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LuckPillar {
    /// 1-based position in the sequence.
    pub order: u8,
    pub pillar: StemBranch,
    pub start_age: f64,
    pub end_age: f64,
}

/// Ten luck pillars stepping from the month pillar.
///
/// The first pillar is one step from the month pillar, never the month
/// pillar itself.
pub fn decadal_pillars(
    month_pillar: StemBranch,
    direction: LuckDirection,
    start_age: f64,
) -> Vec<LuckPillar> {
    (1..=DECADAL_PILLAR_COUNT as u8)
        .map(|order| {
            let start = start_age + f64::from(order - 1) * 10.0;
            LuckPillar {
                order,
                pillar: month_pillar.offset(direction.step() * i64::from(order)),
                start_age: start,
                end_age: start + 10.0,
            }
        })
        .collect()
}

/// Whole years and months of a fractional age.
pub fn age_years_months(age: f64) -> (u32, u32) {
    let years = age.floor();
    let months = ((age - years) * 12.0 + 1e-9).floor().min(11.0);
    (years as u32, months as u32)
}

/// One year of the annual sequence within a decade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualPillar {
    pub year: i32,
    /// 0-based position within the decade.
    pub offset: u8,
    /// Nominal age: the decade's start age plus `offset`.
    pub age: f64,
    pub pillar: StemBranch,
    /// Ten gods, own-stem stage and hidden stems relative to the day stem.
    pub detail: PillarDetail,
    /// Stage of the day stem over the year branch.
    pub day_stem_stage: TwelveStage,
}

/// Ten annual pillars spanning a luck pillar.
///
/// The first year is `birth_solar_year + floor(start_age)`; pairs use the
/// plain `(year - 1984) mod 60` year count.
pub fn annual_pillars(
    decade: &LuckPillar,
    day_stem: Stem,
    birth_solar_year: i32,
    convention: PolarityConvention,
) -> Vec<AnnualPillar> {
    let first_year = birth_solar_year + (decade.start_age + 1e-9).floor() as i32;
    (0..ANNUAL_PILLAR_COUNT as u8)
        .map(|offset| {
            let year = first_year + i32::from(offset);
            let pillar = year_pillar_for(year);
            AnnualPillar {
                year,
                offset,
                age: decade.start_age + f64::from(offset),
                pillar,
                detail: PillarDetail::new(pillar, day_stem, convention, false),
                day_stem_stage: twelve_stage(day_stem, pillar.branch),
            }
        })
        .collect()
}
