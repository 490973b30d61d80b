//! Error types for danish-holidays.
//!
//! A single `thiserror`-derived enum covers every fallible boundary in the
//! workspace. "Not a holiday" is never an error; errors only signal inputs
//! outside the supported calendar range or text that is not a date.

use thiserror::Error;

/// The top-level error type used throughout danish-holidays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument, such as unparsable date text.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout danish-holidays.
pub type Result<T, E = Error> = std::result::Result<T, E>;
