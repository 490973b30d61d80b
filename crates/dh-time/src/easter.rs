//! Easter Sunday for the Gregorian calendar.
//!
//! Gauss's algorithm in its anonymous Gregorian form. Quotients truncate,
//! remainders are Euclidean, and no lookup table is involved; for every year in the supported
//! [`Date`] range the result falls between March 22 and April 25 inclusive.

use dh_core::errors::Result;
use dh_core::Year;

use crate::date::{check_year, Date};
use crate::month::Month;

/// Earliest possible Gregorian Easter Sunday, as (month, day).
pub const EARLIEST_EASTER: (Month, u8) = (Month::March, 22);

/// Latest possible Gregorian Easter Sunday, as (month, day).
pub const LATEST_EASTER: (Month, u8) = (Month::April, 25);

/// Compute the month and day of Easter Sunday in `year`.
///
/// Total over every `i32`: intermediates are widened to `i64` and remainders
/// are Euclidean, so the result always lies in
/// [`EARLIEST_EASTER`]..=[`LATEST_EASTER`]. Outside 1583–9999 the value is
/// arithmetic only; use [`easter_sunday`] for a range-checked [`Date`].
///
/// ```
/// use dh_time::easter::compute_easter_sunday;
/// use dh_time::Month;
///
/// assert_eq!(compute_easter_sunday(2024), (Month::March, 31));
/// assert_eq!(compute_easter_sunday(2025), (Month::April, 20));
/// ```
pub fn compute_easter_sunday(year: Year) -> (Month, u8) {
    let y = i64::from(year);
    let g = y.rem_euclid(19);
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15).rem_euclid(30);
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));

    let mut day = i - (y + y / 4 + i + 2 - c + c / 4).rem_euclid(7) + 28;
    let mut month = Month::March;
    if day > 31 {
        month = Month::April;
        day -= 31;
    }
    (month, day as u8)
}

/// Easter Sunday of `year` as a [`Date`].
///
/// # Errors
/// Returns [`Error::Date`](dh_core::Error::Date) if `year` is outside the
/// supported date range.
pub fn easter_sunday(year: Year) -> Result<Date> {
    check_year(year)?;
    let (month, day) = compute_easter_sunday(year);
    Date::from_ymd(year, month.number(), day)
}
