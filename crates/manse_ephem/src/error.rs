//! Error types for ephemeris evaluation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Iterative search did not settle within its iteration budget.
    #[error("search did not converge: {0}")]
    NoConvergence(&'static str),
    /// Configuration values are unusable.
    #[error("invalid ephemeris configuration: {0}")]
    InvalidConfig(&'static str),
    /// An input epoch or angle was NaN or infinite.
    #[error("non-finite input: {0}")]
    NonFinite(f64),
}
