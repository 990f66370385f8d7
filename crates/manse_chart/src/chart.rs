//! Chart computation entry points.

use chrono::{Datelike, NaiveDateTime};
use manse_cycle::{
    AnnualPillar, LuckDirection, LuckPillar, PillarDetail, PolarityConvention, StartingAge,
    Stem, annual_pillars,
};
use manse_ephem::Ephemeris;
use manse_time::jd_to_naive;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::ChartError;
use crate::luck::{LuckCycle, compute_luck_cycle};
use crate::normalize::normalize_time;
use crate::pillars::{
    Chart, resolve_day_pillar, resolve_hour_pillar, resolve_month_pillar, resolve_year_pillar,
};
use crate::request::{ChartRequest, TimeBasis};
use crate::zone::ZoneResolver;

/// Derived facts for each of the four pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDetails {
    pub year: PillarDetail,
    pub month: PillarDetail,
    pub day: PillarDetail,
    pub hour: PillarDetail,
}

impl ChartDetails {
    pub fn new(chart: &Chart, convention: PolarityConvention) -> Self {
        let day_stem = chart.day_stem();
        Self {
            year: PillarDetail::new(chart.year, day_stem, convention, false),
            month: PillarDetail::new(chart.month, day_stem, convention, false),
            day: PillarDetail::new(chart.day, day_stem, convention, true),
            hour: PillarDetail::new(chart.hour, day_stem, convention, false),
        }
    }
}

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub request: ChartRequest,
    pub chart: Chart,
    pub details: ChartDetails,
    pub utc: NaiveDateTime,
    /// Local apparent (true solar) time of birth.
    pub apparent_solar_time: NaiveDateTime,
    pub eot_minutes: f64,
    /// `None` when the luck cycle failed; see the diagnostics warnings.
    pub luck: Option<LuckCycle>,
    pub diagnostics: Diagnostics,
}

impl ChartResult {
    pub fn luck_direction(&self) -> Option<LuckDirection> {
        self.luck.as_ref().map(|l| l.direction)
    }

    pub fn luck_starting_age(&self) -> Option<StartingAge> {
        self.luck.as_ref().map(|l| l.starting_age)
    }

    pub fn decadal_pillars(&self) -> &[LuckPillar] {
        self.luck
            .as_ref()
            .map(|l| l.pillars.as_slice())
            .unwrap_or_default()
    }

    /// Annual pillars of the luck pillar with 1-based `order`.
    pub fn annual_table(&self, order: u8) -> Result<Vec<AnnualPillar>, ChartError> {
        let decade = self
            .luck
            .as_ref()
            .and_then(|l| l.pillar(order))
            .ok_or_else(|| ChartError::InvalidInput(format!("no luck pillar #{order}")))?;
        Ok(compute_annual_table(
            decade,
            self.chart.day_stem(),
            self.chart.solar_year,
            self.request.convention,
        ))
    }
}

fn basis_note(basis: TimeBasis) -> &'static str {
    match basis {
        TimeBasis::StandardTime => {
            "birth time read on zone standard time; pillars use local apparent solar time"
        }
        TimeBasis::LocalMeanTime => {
            "birth time read on local mean time; pillars use local apparent solar time"
        }
    }
}

/// Compute the four pillars and the luck cycle for a request.
///
/// A luck-cycle failure does not fail the chart: `luck` is `None` and a
/// [`Warning::LuckCycleUnavailable`] is recorded.
pub fn compute_chart<E, Z>(
    ephemeris: &E,
    zones: &Z,
    request: &ChartRequest,
) -> Result<ChartResult, ChartError>
where
    E: Ephemeris + ?Sized,
    Z: ZoneResolver + ?Sized,
{
    let birth = normalize_time(ephemeris, zones, request)?;

    let year = resolve_year_pillar(ephemeris, birth.jd_ut, birth.utc.year())?;
    let month = resolve_month_pillar(ephemeris, birth.jd_ut, year.pillar.stem)?;
    let day = resolve_day_pillar(&birth.apparent)?;
    let hour = resolve_hour_pillar(&birth.apparent, day.pillar.stem);

    let chart = Chart {
        year: year.pillar,
        month: month.pillar,
        day: day.pillar,
        hour,
        solar_year: year.solar_year,
        month_term: month.term,
        day_date: day.date,
        day_number: day.day_number,
    };

    let mut warnings = birth.warnings.clone();
    let luck = match compute_luck_cycle(ephemeris, &birth, &chart, request.gender) {
        Ok(luck) => Some(luck),
        Err(e) => {
            warn!(error = %e, "luck cycle unavailable");
            warnings.push(Warning::LuckCycleUnavailable {
                reason: e.to_string(),
            });
            None
        }
    };

    info!(
        year = %chart.year,
        month = %chart.month,
        day = %chart.day,
        hour = %chart.hour,
        "chart computed"
    );

    Ok(ChartResult {
        request: *request,
        details: ChartDetails::new(&chart, request.convention),
        chart,
        utc: birth.utc,
        apparent_solar_time: birth.apparent,
        eot_minutes: birth.eot_minutes,
        luck,
        diagnostics: Diagnostics {
            zone: birth.clock.name(),
            zone_fallback: birth.zone_fallback,
            basis_note: basis_note(request.basis).to_string(),
            standard_local: birth.standard_local,
            start_of_spring_utc: jd_to_naive(year.start_of_spring_jd)?,
            month_term_utc: jd_to_naive(month.term_jd)?,
            early_rat_hour: day.early_rat_hour,
            warnings,
        },
    })
}

/// Ten annual pillars for one luck pillar.
///
/// `birth_solar_year` is the chart's 立春 year; rows start at
/// `birth_solar_year + floor(start_age)`.
pub fn compute_annual_table(
    decade: &LuckPillar,
    day_stem: Stem,
    birth_solar_year: i32,
    convention: PolarityConvention,
) -> Vec<AnnualPillar> {
    annual_pillars(decade, day_stem, birth_solar_year, convention)
}
