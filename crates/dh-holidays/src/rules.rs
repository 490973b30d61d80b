//! The Danish holiday table.
//!
//! Every holiday is either a fixed calendar day or a whole-day offset from
//! Easter Sunday. [`DANISH_HOLIDAYS`] lists them in the order the generator
//! returns them.
//!
//! Fastelavn is placed 49 days before Easter in a leap year and 48 days
//! before otherwise. The customary definition is seven weeks (49 days)
//! regardless of leap year; the leap-year rule is kept as the established
//! behaviour of this table.
//! TODO: confirm the Fastelavn leap-year offset against an authoritative
//! Danish calendar before changing it.

use dh_core::errors::Result;
use dh_core::Year;
use dh_time::{is_leap_year, Date, Month};

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The same calendar day every year.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// A fixed number of days from Easter Sunday (negative = before).
    Easter(i32),
    /// Fastelavn: 49 days before Easter in a leap year, 48 otherwise.
    Fastelavn,
}

impl Rule {
    /// Resolve the rule to a date in `year`, given that year's Easter Sunday.
    pub fn resolve(&self, year: Year, easter: Date) -> Result<Date> {
        match *self {
            Rule::Fixed { month, day } => Date::from_ymd(year, month.number(), day),
            Rule::Easter(offset) => easter.add_days(offset),
            Rule::Fastelavn => easter.add_days(fastelavn_offset(year)),
        }
    }
}

/// Day offset of Fastelavn from Easter Sunday in `year`.
pub fn fastelavn_offset(year: Year) -> i32 {
    if is_leap_year(year) {
        -49
    } else {
        -48
    }
}

/// One row of the holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    /// Danish name.
    pub name: &'static str,
    /// Date rule.
    pub rule: Rule,
    /// Statutory paid day off.
    pub is_day_off: bool,
}

const fn fixed(name: &'static str, month: Month, day: u8, is_day_off: bool) -> HolidayRule {
    HolidayRule {
        name,
        rule: Rule::Fixed { month, day },
        is_day_off,
    }
}

const fn easter(name: &'static str, offset: i32) -> HolidayRule {
    HolidayRule {
        name,
        rule: Rule::Easter(offset),
        is_day_off: true,
    }
}

/// Number of holidays produced for every year.
pub const HOLIDAY_COUNT: usize = 16;

/// Danish holidays in generation order.
pub const DANISH_HOLIDAYS: [HolidayRule; HOLIDAY_COUNT] = [
    fixed("Nytårsdag", Month::January, 1, true),
    easter("Skærtorsdag", -3),
    easter("Langfredag", -2),
    easter("Påskedag", 0),
    easter("2. Påskedag", 1),
    easter("Store bededag", 26),
    easter("Kr. himmelfartsdag", 39),
    easter("Pinsedag", 49),
    easter("2. Pinsedag", 50),
    fixed("Grundlovsdag", Month::June, 5, true),
    fixed("Juleaften", Month::December, 24, true),
    fixed("1. Juledag", Month::December, 25, true),
    fixed("2. Juledag", Month::December, 26, true),
    fixed("Nytårsaften", Month::December, 31, true),
    HolidayRule {
        name: "Fastelavn",
        rule: Rule::Fastelavn,
        is_day_off: false,
    },
    fixed("Hellig 3 Konger", Month::January, 6, false),
];
