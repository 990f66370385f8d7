//! Four Pillars chart computation.
//!
//! Turns a civil birth time and place into:
//! - UTC and local apparent solar time, via the equation of time
//! - Year and month pillars bounded by solar-term crossings
//! - Day and hour pillars read from apparent solar time
//! - The luck cycle: direction, starting age, ten decadal pillars, and the
//!   annual pillars of any decade
//!
//! The ephemeris and the zone lookup are collaborators passed in by the
//! caller; see [`manse_ephem::Ephemeris`] and [`ZoneResolver`].

pub mod chart;
pub mod diagnostics;
pub mod error;
pub mod luck;
pub mod normalize;
pub mod pillars;
pub mod request;
pub mod terms;
pub mod zone;

pub use chart::{ChartDetails, ChartResult, compute_annual_table, compute_chart};
pub use diagnostics::{Diagnostics, Warning};
pub use error::ChartError;
pub use luck::{LuckCycle, TermCrossing, adjacent_solar_term, compute_luck_cycle};
pub use normalize::{InputClock, NormalizedTime, normalize_time};
pub use pillars::{
    Chart, DayPillar, MonthPillar, YearPillar, resolve_day_pillar, resolve_hour_pillar,
    resolve_month_pillar, resolve_year_pillar, start_of_spring,
};
pub use request::{ChartRequest, TimeBasis};
pub use terms::{SolarTermEvent, solar_terms_in_year};
pub use zone::{FixedZone, ZoneResolver};
