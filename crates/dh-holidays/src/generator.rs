//! Holiday generation and lookup.
//!
//! Every call builds a fresh list from [`DANISH_HOLIDAYS`]; nothing is
//! cached, so results never alias between calls or threads. Lookups scan
//! that list linearly, and a date that matches nothing is an ordinary
//! outcome (`false` / `None`), never an error.

use dh_core::errors::Result;
use dh_core::Year;
use dh_time::{easter_sunday, Date};

use crate::holiday::Holiday;
use crate::rules::DANISH_HOLIDAYS;

/// All Danish holidays of `year`, in table order (not date order).
///
/// Always returns exactly 16 records, each dated within `year`.
///
/// # Errors
/// Returns [`Error::Date`](dh_core::Error::Date) if `year` is outside the
/// supported range 1583–9999.
///
/// ```
/// let list = dh_holidays::holidays(2024).unwrap();
/// assert_eq!(list.len(), 16);
/// assert_eq!(list[0].name(), "Nytårsdag");
/// ```
pub fn holidays(year: Year) -> Result<Vec<Holiday>> {
    let easter = easter_sunday(year)?;
    let list = DANISH_HOLIDAYS
        .iter()
        .map(|r| Ok(Holiday::new(r.rule.resolve(year, easter)?, r.name, r.is_day_off)))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(year, easter = ?easter, count = list.len(), "generated holidays");
    Ok(list)
}

/// Holidays of the current year.
///
/// The year is taken from [`Date::evaluation_date`]: the pinned evaluation
/// date if one is set, otherwise the system clock at call time.
pub fn holidays_this_year() -> Result<Vec<Holiday>> {
    holidays(Date::evaluation_date()?.year())
}

/// The holiday falling on `date`, if any.
///
/// Dates are compared as calendar days; convert a
/// `chrono::NaiveDateTime` with `Date::try_from` to drop its time of day.
pub fn find_holiday(date: Date) -> Option<Holiday> {
    match holidays(date.year()) {
        Ok(list) => {
            let found = list.into_iter().find(|h| h.date() == date);
            tracing::trace!(date = ?date, found = ?found.map(|h| h.name()), "holiday lookup");
            found
        }
        Err(err) => {
            tracing::warn!(%err, date = ?date, "could not generate holidays for lookup");
            None
        }
    }
}

/// `true` if `date` is one of the year's holidays (day off or observance).
///
/// ```
/// use dh_time::Date;
///
/// assert!(dh_holidays::is_holiday(Date::from_ymd(2025, 12, 24).unwrap()));
/// assert!(!dh_holidays::is_holiday(Date::from_ymd(2025, 7, 4).unwrap()));
/// ```
pub fn is_holiday(date: Date) -> bool {
    find_holiday(date).is_some()
}

/// Every holiday dated in the inclusive range `[from, to]`, sorted by date.
///
/// Returns an empty list when `from > to`.
pub fn holidays_between(from: Date, to: Date) -> Result<Vec<Holiday>> {
    if from > to {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for year in from.year()..=to.year() {
        out.extend(
            holidays(year)?
                .into_iter()
                .filter(|h| (from..=to).contains(&h.date())),
        );
    }
    out.sort_by_key(|h| h.date());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn by_name(list: &[Holiday], name: &str) -> Date {
        list.iter()
            .find(|h| h.name() == name)
            .map(|h| h.date())
            .unwrap_or_else(|| panic!("{name} missing"))
    }

    #[test]
    fn holidays_2024() {
        let list = holidays(2024).unwrap();
        assert_eq!(list.len(), 16);
        assert_eq!(by_name(&list, "Påskedag"), date(2024, 3, 31));
        assert_eq!(by_name(&list, "Skærtorsdag"), date(2024, 3, 28));
        assert_eq!(by_name(&list, "Langfredag"), date(2024, 3, 29));
        assert_eq!(by_name(&list, "2. Påskedag"), date(2024, 4, 1));
        assert_eq!(by_name(&list, "Store bededag"), date(2024, 4, 26));
        assert_eq!(by_name(&list, "Kr. himmelfartsdag"), date(2024, 5, 9));
        assert_eq!(by_name(&list, "Pinsedag"), date(2024, 5, 19));
        assert_eq!(by_name(&list, "2. Pinsedag"), date(2024, 5, 20));
        assert_eq!(by_name(&list, "Fastelavn"), date(2024, 2, 11));
    }

    #[test]
    fn holidays_2025() {
        let list = holidays(2025).unwrap();
        assert_eq!(by_name(&list, "Påskedag"), date(2025, 4, 20));
        assert_eq!(by_name(&list, "Juleaften"), date(2025, 12, 24));
        // Non-leap year: 48 days before Easter.
        assert_eq!(by_name(&list, "Fastelavn"), date(2025, 3, 3));
    }

    #[test]
    fn table_order_is_kept() {
        let names: Vec<_> = holidays(2025).unwrap().iter().map(|h| h.name()).collect();
        assert_eq!(
            names,
            [
                "Nytårsdag",
                "Skærtorsdag",
                "Langfredag",
                "Påskedag",
                "2. Påskedag",
                "Store bededag",
                "Kr. himmelfartsdag",
                "Pinsedag",
                "2. Pinsedag",
                "Grundlovsdag",
                "Juleaften",
                "1. Juledag",
                "2. Juledag",
                "Nytårsaften",
                "Fastelavn",
                "Hellig 3 Konger",
            ]
        );
    }

    #[test]
    fn lookup() {
        let h = find_holiday(date(2024, 1, 1)).unwrap();
        assert_eq!(h.name(), "Nytårsdag");
        assert!(h.is_day_off());
        assert!(find_holiday(date(2024, 7, 4)).is_none());
        assert!(!is_holiday(date(2024, 7, 4)));

        let konger = find_holiday(date(2024, 1, 6)).unwrap();
        assert_eq!(konger.name(), "Hellig 3 Konger");
        assert!(!konger.is_day_off());
    }

    #[test]
    fn out_of_range_year() {
        assert!(holidays(1582).is_err());
        assert!(holidays(10_000).is_err());
    }

    #[test]
    fn range_across_new_year() {
        let list = holidays_between(date(2024, 12, 20), date(2025, 1, 10)).unwrap();
        let got: Vec<_> = list.iter().map(|h| (h.name(), h.date())).collect();
        assert_eq!(
            got,
            [
                ("Juleaften", date(2024, 12, 24)),
                ("1. Juledag", date(2024, 12, 25)),
                ("2. Juledag", date(2024, 12, 26)),
                ("Nytårsaften", date(2024, 12, 31)),
                ("Nytårsdag", date(2025, 1, 1)),
                ("Hellig 3 Konger", date(2025, 1, 6)),
            ]
        );
        assert!(holidays_between(date(2025, 1, 10), date(2024, 12, 20))
            .unwrap()
            .is_empty());
    }
}
