//! `Date` type.
//!
//! Dates are timezone-naive calendar days represented as a serial number of
//! days relative to the civil epoch 1970-01-01 (serial 0). Whole-day
//! arithmetic is plain integer arithmetic on the serial, so adding or
//! subtracting days can never be affected by clock-time concepts such as
//! daylight saving.
//!
//! # Valid range
//! Years 1583 through 9999: 1583 is the first full year of the Gregorian
//! calendar, 9999 the last four-digit year.

use std::str::FromStr;

use dh_core::errors::{Error, Result};
use dh_core::{Serial, Settings, Year};

use crate::month::Month;
use crate::weekday::Weekday;

/// First supported Gregorian year.
pub const MIN_YEAR: Year = 1583;

/// Last supported Gregorian year.
pub const MAX_YEAR: Year = 9999;

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Serial);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(serial_from_ymd(MIN_YEAR, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(MAX_YEAR, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: Serial) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Today's date according to the local system clock.
    pub fn today() -> Result<Self> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    /// The date treated as "today": the evaluation date pinned in
    /// [`Settings`] if any, otherwise [`Date::today`].
    pub fn evaluation_date() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Self::from_serial(serial),
            None => Self::today(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> Serial {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("ymd_from_serial yields months in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(wd) => wd,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` whole days. Returns an error if the result is out of
    /// range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self:?} + {n} overflows")))?;
        Self::from_serial(serial)
            .map_err(|_| Error::Date(format!("date arithmetic: {self:?} + {n} out of range")))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the supported range; use
    /// [`Date::add_days`] for a checked variant.
    fn add(self, rhs: i32) -> Self {
        match self.add_days(rhs) {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the supported range.
    fn sub(self, rhs: i32) -> Self {
        self + (-rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, _, d) = ymd_from_serial(self.0);
        write!(f, "{d} {} {y}", self.month_of_year())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let mut field = |what: &str| {
            parts
                .next()
                .ok_or_else(|| Error::InvalidArgument(format!("{s:?}: missing {what}")))
        };
        let (y, m, d) = (field("year")?, field("month")?, field("day")?);
        let bad = |what: &str| Error::InvalidArgument(format!("{s:?}: invalid {what}"));
        Date::from_ymd(
            y.parse().map_err(|_| bad("year"))?,
            m.parse().map_err(|_| bad("month"))?,
            d.parse().map_err(|_| bad("day"))?,
        )
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

impl TryFrom<chrono::NaiveDateTime> for Date {
    type Error = Error;

    /// Keep the calendar day, discarding the time of day.
    fn try_from(dt: chrono::NaiveDateTime) -> Result<Self> {
        Date::try_from(dt.date())
    }
}

impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        let (y, m, day) = ymd_from_serial(d.0);
        chrono::NaiveDate::from_ymd_opt(y, u32::from(m), u32::from(day))
            .ok_or_else(|| Error::Date(format!("{d:?} not representable as chrono::NaiveDate")))
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let (y, m, d) = ymd_from_serial(self.0);
        serializer.collect_str(&format_args!("{y:04}-{m:02}-{d:02}"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Gregorian helpers ─────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Return an error unless `year` lies in [`MIN_YEAR`, `MAX_YEAR`].
pub fn check_year(year: Year) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::Date(format!(
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        )));
    }
    Ok(())
}

/// Convert (year, month, day) to a serial number.
///
/// Counts days in 400-year eras starting each March 1st so that the leap day
/// falls at the end of the computational year.
const fn serial_from_ymd(year: Year, month: u8, day: u8) -> Serial {
    let m = month as i32;
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = if m > 2 { m - 3 } else { m + 9 }; // March = 0
    let doy = (153 * mp + 2) / 5 + day as i32 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - DAYS_0000_03_01_TO_EPOCH
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: Serial) -> (Year, u8, u8) {
    let z = serial + DAYS_0000_03_01_TO_EPOCH;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y, m, d)
}

/// Days from 0000-03-01 to 1970-01-01.
const DAYS_0000_03_01_TO_EPOCH: i32 = 719_468;

// ── Tests ─────────────────────────────────────────────────────────────────────
