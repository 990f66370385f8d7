//! Luck-cycle reference term and starting age.

use chrono::NaiveDateTime;
use manse_cycle::{
    ALL_SOLAR_TERMS, Gender, LuckDirection, LuckPillar, SolarTerm, StartingAge, decadal_pillars,
    luck_direction,
};
use manse_ephem::Ephemeris;
use manse_time::{MINUTES_PER_DAY, jd_to_naive};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChartError;
use crate::normalize::NormalizedTime;
use crate::pillars::Chart;

/// Lookback windows tried in turn for the preceding term, days.
const BACKWARD_LOOKBACK_DAYS: [f64; 2] = [40.0, 80.0];

/// A solar term crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermCrossing {
    pub term: SolarTerm,
    pub jd_ut: f64,
    pub utc: NaiveDateTime,
}

/// Direction, reference term, starting age and the ten luck pillars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuckCycle {
    pub direction: LuckDirection,
    pub reference_term: TermCrossing,
    /// Birth-to-term gap on the input clock, minutes; sign follows direction.
    pub gap_minutes: f64,
    pub starting_age: StartingAge,
    pub pillars: Vec<LuckPillar>,
}

impl LuckCycle {
    pub fn gap_days(&self) -> f64 {
        self.gap_minutes / MINUTES_PER_DAY
    }

    /// Luck pillar by 1-based order.
    pub fn pillar(&self, order: u8) -> Option<&LuckPillar> {
        self.pillars.iter().find(|p| p.order == order)
    }
}

fn crossing_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    term: SolarTerm,
    from_jd: f64,
) -> Result<f64, ChartError> {
    Ok(ephemeris.solar_longitude_crossing(term.longitude_deg(), from_jd)?)
}

/// Nearest of the 24 terms after birth (forward) or at/before birth (backward).
pub fn adjacent_solar_term<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
    direction: LuckDirection,
) -> Result<TermCrossing, ChartError> {
    let mut found: Option<(SolarTerm, f64)> = None;
    match direction {
        LuckDirection::Forward => {
            for term in ALL_SOLAR_TERMS {
                let jx = crossing_at(ephemeris, term, jd_ut)?;
                if jx > jd_ut && found.is_none_or(|(_, best)| jx < best) {
                    found = Some((term, jx));
                }
            }
        }
        LuckDirection::Backward => {
            for window in BACKWARD_LOOKBACK_DAYS {
                for term in ALL_SOLAR_TERMS {
                    let jx = crossing_at(ephemeris, term, jd_ut - window)?;
                    if jx <= jd_ut && found.is_none_or(|(_, best)| jx > best) {
                        found = Some((term, jx));
                    }
                }
                if found.is_some() {
                    break;
                }
            }
        }
    }
    let (term, jd) = found.ok_or(ChartError::CrossingSearchExhausted { jd_ut, direction })?;
    Ok(TermCrossing {
        term,
        jd_ut: jd,
        utc: jd_to_naive(jd)?,
    })
}

/// Luck cycle of a resolved chart.
pub fn compute_luck_cycle<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: &NormalizedTime,
    chart: &Chart,
    gender: Gender,
) -> Result<LuckCycle, ChartError> {
    let direction = luck_direction(chart.year.stem, gender);
    let reference_term = adjacent_solar_term(ephemeris, birth.jd_ut, direction)?;

    let mut gap_minutes = birth.clock_minutes_until(reference_term.jd_ut, &reference_term.utc);
    if direction == LuckDirection::Backward {
        gap_minutes = -gap_minutes;
    }
    let starting_age = StartingAge::from_minutes(gap_minutes);
    debug!(
        direction = direction.name(),
        term = reference_term.term.name(),
        gap_minutes,
        start_age = starting_age.fractional_years,
        "luck cycle"
    );

    Ok(LuckCycle {
        direction,
        reference_term,
        gap_minutes,
        starting_age,
        pillars: decadal_pillars(chart.month, direction, starting_age.fractional_years),
    })
}
