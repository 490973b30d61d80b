//! # danish-holidays
//!
//! Danish public holidays and observances for any Gregorian year from 1583
//! to 9999, including the movable feasts anchored to Easter Sunday.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use danish_holidays::{holidays, is_holiday, Date};
//!
//! let list = holidays(2024).unwrap();
//! let easter = list.iter().find(|h| h.name() == "Påskedag").unwrap();
//! assert_eq!(easter.date(), Date::from_ymd(2024, 3, 31).unwrap());
//!
//! assert!(is_holiday(Date::from_ymd(2024, 6, 5).unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and process-wide settings.
pub use dh_core as core;

/// Dates and the Easter computus.
pub use dh_time as time;

/// The Danish holiday table and generator.
pub use dh_holidays as danish;

pub use dh_core::{Error, Result, ScopedEvaluationDate, Settings};
pub use dh_holidays::{
    find_holiday, holidays, holidays_between, holidays_this_year, is_holiday, Holiday,
};
pub use dh_time::{compute_easter_sunday, easter_sunday, Date, Month, Weekday};
