//! # dh-core
//!
//! Error definitions and process-wide settings shared by the
//! `danish-holidays` crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Process-wide settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Gregorian calendar year.
pub type Year = i32;

/// Serial day number (days relative to 1970-01-01).
pub type Serial = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
