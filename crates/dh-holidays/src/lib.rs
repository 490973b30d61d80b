//! # dh-holidays
//!
//! Danish public holidays and observances for a Gregorian year, with
//! date lookups.
//!
//! ```
//! use dh_holidays::{find_holiday, holidays};
//! use dh_time::Date;
//!
//! let list = holidays(2025).unwrap();
//! assert_eq!(list.len(), 16);
//!
//! let eve = find_holiday(Date::from_ymd(2025, 12, 24).unwrap()).unwrap();
//! assert_eq!(eve.name(), "Juleaften");
//! assert!(eve.is_day_off());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Holiday generation and lookups.
pub mod generator;

/// `Holiday` record.
pub mod holiday;

/// Declarative holiday table.
pub mod rules;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use generator::{find_holiday, holidays, holidays_between, holidays_this_year, is_holiday};
pub use holiday::Holiday;
pub use rules::{fastelavn_offset, HolidayRule, Rule, DANISH_HOLIDAYS, HOLIDAY_COUNT};
