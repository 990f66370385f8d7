//! Error types for calendar conversions and input parsing.

use thiserror::Error;

/// Errors from calendar conversion or from parsing user-entered values.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input does not have the expected shape (e.g. `HH:MM`).
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// A field that must be an integer is not.
    #[error("non-numeric field: {0}")]
    NonNumeric(String),
    /// A field parsed but lies outside its valid range.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
    /// Year/month/day do not name a real calendar date.
    #[error("no such date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Julian Date cannot be represented as a calendar timestamp.
    #[error("Julian Date {0} is outside the representable range")]
    Unrepresentable(f64),
}
