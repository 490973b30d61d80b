//! Integration tests for the Danish holiday generator and lookups.

use dh_core::ScopedEvaluationDate;
use dh_holidays::{
    fastelavn_offset, find_holiday, holidays, holidays_between, holidays_this_year, is_holiday,
    HOLIDAY_COUNT,
};
use dh_time::{easter_sunday, is_leap_year, Date, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn named(year: i32, name: &str) -> Date {
    holidays(year)
        .unwrap()
        .into_iter()
        .find(|h| h.name() == name)
        .map(|h| h.date())
        .unwrap_or_else(|| panic!("{name} missing in {year}"))
}

// ─── Generator ────────────────────────────────────────────────────────────────

#[test]
fn sixteen_records_dated_within_the_year() {
    for y in 1900..=2100 {
        let list = holidays(y).unwrap();
        assert_eq!(list.len(), HOLIDAY_COUNT, "{y}");
        for h in &list {
            assert_eq!(h.date().year(), y, "{h} escaped {y}");
        }
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(holidays(2031).unwrap(), holidays(2031).unwrap());
}

#[test]
fn earliest_easter_does_not_underflow_the_year() {
    // Easter 2285 is March 22, the earliest possible date.
    assert_eq!(easter_sunday(2285).unwrap(), date(2285, 3, 22));
    assert_eq!(named(2285, "Skærtorsdag"), date(2285, 3, 19));
    assert_eq!(named(2285, "Fastelavn"), date(2285, 2, 2));
}

#[test]
fn fastelavn_leap_and_common_years() {
    assert!(is_leap_year(2024));
    assert_eq!(easter_sunday(2024).unwrap() - named(2024, "Fastelavn"), 49);
    assert!(!is_leap_year(2025));
    assert_eq!(easter_sunday(2025).unwrap() - named(2025, "Fastelavn"), 48);
}

#[test]
fn scenario_2024() {
    assert_eq!(named(2024, "Påskedag"), date(2024, 3, 31));
    assert_eq!(named(2024, "Skærtorsdag"), date(2024, 3, 28));
    assert_eq!(named(2024, "2. Pinsedag"), date(2024, 5, 20));
}

#[test]
fn scenario_2025() {
    assert_eq!(named(2025, "Påskedag"), date(2025, 4, 20));
    assert_eq!(named(2025, "Juleaften"), date(2025, 12, 24));
}

proptest! {
    #[test]
    fn every_supported_year_yields_sixteen(year in 1583i32..=9999) {
        let list = holidays(year).unwrap();
        prop_assert_eq!(list.len(), HOLIDAY_COUNT);
        prop_assert!(list.iter().all(|h| h.date().year() == year));
    }

    #[test]
    fn movable_feasts_keep_their_offsets(year in 1583i32..=9999) {
        let easter = easter_sunday(year).unwrap();
        prop_assert_eq!(named(year, "Langfredag"), easter - 2);
        prop_assert_eq!(named(year, "Kr. himmelfartsdag"), easter + 39);
        prop_assert_eq!(named(year, "Fastelavn"), easter + fastelavn_offset(year));
    }
}

// ─── Lookups ──────────────────────────────────────────────────────────────────

#[test]
fn july_fourth_is_never_a_holiday() {
    for y in [1999, 2024, 2025, 2100] {
        assert!(!is_holiday(date(y, 7, 4)));
        assert_eq!(find_holiday(date(y, 7, 4)), None);
    }
}

#[test]
fn new_years_day_every_year() {
    for y in [1583, 1900, 2024, 9999] {
        let h = find_holiday(date(y, 1, 1)).unwrap();
        assert_eq!(h.name(), "Nytårsdag");
        assert!(h.is_day_off());
    }
}

#[test]
fn time_of_day_is_ignored() {
    let evening = chrono::NaiveDate::from_ymd_opt(2025, 12, 24)
        .and_then(|d| d.and_hms_opt(18, 30, 0))
        .unwrap();
    let day = Date::try_from(evening).unwrap();
    assert_eq!(find_holiday(day).map(|h| h.name()), Some("Juleaften"));
}

#[test]
fn this_year_follows_evaluation_date() {
    let _guard = ScopedEvaluationDate::new(date(2024, 8, 1).serial());
    assert_eq!(holidays_this_year().unwrap(), holidays(2024).unwrap());
}

#[test]
fn range_listing_is_date_ordered() {
    let list = holidays_between(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
    assert_eq!(list.len(), HOLIDAY_COUNT);
    assert!(list.windows(2).all(|w| w[0].date() <= w[1].date()));
    assert_eq!(list[0].name(), "Nytårsdag");
    assert_eq!(list[1].name(), "Hellig 3 Konger");
    assert_eq!(list[2].name(), "Fastelavn");
}

#[test]
fn lookup_agrees_with_the_table_on_every_day() {
    let table: Vec<Date> = holidays(2025).unwrap().iter().map(|h| h.date()).collect();
    let mut d = date(2025, 1, 1);
    while d <= date(2025, 12, 31) {
        assert_eq!(is_holiday(d), table.contains(&d), "{d}");
        d += 1;
    }

    // Observances are holidays; an ordinary weekend is not.
    assert!(is_holiday(date(2025, 1, 6)));
    let saturday = date(2025, 1, 4);
    assert_eq!(saturday.weekday(), Weekday::Saturday);
    assert!(!is_holiday(saturday));
}

#[cfg(feature = "serde")]
#[test]
fn holiday_serializes_with_iso_date() {
    let h = find_holiday(date(2025, 6, 5)).unwrap();
    assert_eq!(
        serde_json::to_string(&h).unwrap(),
        r#"{"date":"2025-06-05","name":"Grundlovsdag","is_day_off":true}"#
    );
}
