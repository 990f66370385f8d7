//! Error types for cycle lookups.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CycleError {
    /// Text is not one of the ten stem or twelve branch glyphs.
    #[error("not a stem or branch symbol: {0:?}")]
    InvalidSymbol(String),
    /// Index outside the cycle it names.
    #[error("{cycle} index out of range: {index}")]
    InvalidIndex { cycle: &'static str, index: usize },
}
