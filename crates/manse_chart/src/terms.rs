//! Solar terms of a calendar year.

use chrono::NaiveDateTime;
use manse_cycle::{ALL_SOLAR_TERMS, SolarTerm};
use manse_ephem::Ephemeris;
use manse_time::jd_to_naive;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// One solar term crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    pub longitude_deg: f64,
    pub jd_ut: f64,
    pub utc: NaiveDateTime,
}

/// All solar terms whose crossing falls within a calendar year (UTC), in time order.
pub fn solar_terms_in_year<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    year: i32,
) -> Result<Vec<SolarTermEvent>, ChartError> {
    let start = ephemeris.civil_to_jd_ut(year, 1, 1, 0.0);
    let end = ephemeris.civil_to_jd_ut(year + 1, 1, 1, 0.0);
    let mut events = Vec::with_capacity(ALL_SOLAR_TERMS.len());
    for term in ALL_SOLAR_TERMS {
        let jd = ephemeris.solar_longitude_crossing(term.longitude_deg(), start)?;
        if jd < end {
            events.push(SolarTermEvent {
                term,
                longitude_deg: term.longitude_deg(),
                jd_ut: jd,
                utc: jd_to_naive(jd)?,
            });
        }
    }
    events.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));
    Ok(events)
}
