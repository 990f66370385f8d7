//! Error types for chart computation.

use manse_cycle::LuckDirection;
use manse_ephem::EphemerisError;
use manse_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Request rejected before any astronomy ran.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// No month-opening term crossed within the lookback window.
    #[error("no major solar term within {window_days} days before JD {jd_ut}")]
    TermNotFound { jd_ut: f64, window_days: f64 },
    /// No solar term found adjacent to birth for the luck cycle.
    #[error("no solar term crossing found {} of JD {jd_ut}", direction.name())]
    CrossingSearchExhausted {
        jd_ut: f64,
        direction: LuckDirection,
    },
    /// Underlying ephemeris failure.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
