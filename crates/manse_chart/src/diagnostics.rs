//! Non-fatal conditions surfaced alongside a chart.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A condition that degraded the computation without aborting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// No zone for the coordinate; the birth time was read as UTC.
    TimezoneUnresolved {
        latitude: f64,
        longitude: f64,
        requested: Option<String>,
    },
    /// Local time falls in a DST fold; the earlier instant was used.
    AmbiguousLocalTime { local: NaiveDateTime, zone: String },
    /// Local time falls in a DST gap; the pre-transition offset was used.
    NonexistentLocalTime { local: NaiveDateTime, zone: String },
    /// The luck cycle could not be computed; the four pillars stand.
    LuckCycleUnavailable { reason: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimezoneUnresolved {
                latitude,
                longitude,
                requested,
            } => match requested {
                Some(name) => write!(f, "unknown time zone {name:?}; using UTC"),
                None => write!(
                    f,
                    "no time zone for ({latitude:.4}, {longitude:.4}); using UTC"
                ),
            },
            Self::AmbiguousLocalTime { local, zone } => {
                write!(f, "{local} is ambiguous in {zone}; using the earlier instant")
            }
            Self::NonexistentLocalTime { local, zone } => {
                write!(f, "{local} does not exist in {zone}; using the offset before the change")
            }
            Self::LuckCycleUnavailable { reason } => {
                write!(f, "luck cycle unavailable: {reason}")
            }
        }
    }
}

/// Supporting facts about how a chart was derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Zone whose clock the birth time was read on (`LMT` for local mean time).
    pub zone: String,
    /// Whether the zone is the UTC fallback for an unresolved lookup.
    pub zone_fallback: bool,
    pub basis_note: String,
    /// Birth instant on the zone's standard clock, when a zone resolved.
    pub standard_local: Option<NaiveDateTime>,
    /// Start of spring (立春) governing the year pillar, UTC.
    pub start_of_spring_utc: NaiveDateTime,
    /// Major term governing the month pillar, UTC.
    pub month_term_utc: NaiveDateTime,
    /// Whether the 23:00 rule moved the day pillar to the next date.
    pub early_rat_hour: bool,
    pub warnings: Vec<Warning>,
}
