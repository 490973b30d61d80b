//! # dh-time
//!
//! Timezone-naive calendar dates and the Gregorian Easter computus.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and Gregorian helpers.
pub mod date;

/// Easter Sunday computus.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date, MAX_YEAR, MIN_YEAR};
pub use easter::{compute_easter_sunday, easter_sunday};
pub use month::Month;
pub use weekday::Weekday;
