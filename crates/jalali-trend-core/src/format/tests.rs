//! Tests for bucket label formatting.

use jiff::{civil::datetime, tz::TimeZone};

use super::*;
use crate::{
    calendar::JalaliCalendar,
    error::TrendError,
    locale::{Translations, Untranslated},
};

fn formatter(twelve_hour_time: bool) -> BucketLabelFormatter<'static> {
    BucketLabelFormatter::new(&JalaliCalendar, &Untranslated, twelve_hour_time)
}

fn tick(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> Zoned {
    datetime(year, month, day, hour, minute, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("valid tick")
}

#[test]
fn test_month_label() {
    let label = formatter(false)
        .format_result_date("2023-10", TimeUnit::Month)
        .unwrap();
    assert_eq!(label, "مهر 1402");
}

#[test]
fn test_month_label_for_early_gregorian_year() {
    // Gregorian 1402-05-01 falls in Ordibehesht of Jalali 781.
    let label = formatter(false)
        .format_result_date("1402-5", TimeUnit::Month)
        .unwrap();
    assert_eq!(label, "اردیبهشت 781");
}

#[test]
fn test_week_label_spans_iso_week() {
    // ISO week 10 of 2023 runs from 2023-03-06 to 2023-03-12.
    let label = formatter(false)
        .format_result_date("2023-10", TimeUnit::Week)
        .unwrap();
    assert_eq!(label, "اسفند 15 - اسفند 21");
}

#[test]
fn test_week_label_across_new_year() {
    // ISO week 12 of 2024 runs from 2024-03-18 to 2024-03-24, over Nowruz.
    let label = formatter(false)
        .format_result_date("2024-12", TimeUnit::Week)
        .unwrap();
    assert_eq!(label, "اسفند 28 - فروردین 5");
}

#[test]
fn test_day_label() {
    let label = formatter(false)
        .format_result_date("2023-10-15", TimeUnit::Day)
        .unwrap();
    assert_eq!(label, "23 مهر 1402");
}

#[test]
fn test_hour_label_twelve_hour() {
    let label = formatter(true)
        .format_result_date("2023-05-01 14:00", TimeUnit::Hour)
        .unwrap();
    assert_eq!(label, "اردیبهشت 11 - 2:00 PM");
    assert!(label.ends_with("2:00 PM"));
}

#[test]
fn test_hour_label_twenty_four_hour() {
    let label = formatter(false)
        .format_result_date("2023-05-01 14:00", TimeUnit::Hour)
        .unwrap();
    assert_eq!(label, "اردیبهشت 11 - 14:00");
}

#[test]
fn test_minute_labels() {
    let key = "2023-05-01 09:07:00";
    assert_eq!(
        formatter(false)
            .format_result_date(key, TimeUnit::Minute)
            .unwrap(),
        "اردیبهشت 11 - 9:07"
    );
    assert_eq!(
        formatter(true)
            .format_result_date(key, TimeUnit::Minute)
            .unwrap(),
        "اردیبهشت 11 - 9:07 AM"
    );
}

#[test]
fn test_labels_are_deterministic() {
    let cases = [
        ("2023-10", TimeUnit::Month),
        ("2023-41", TimeUnit::Week),
        ("2023-10-15", TimeUnit::Day),
        ("2023-10-15 00:00", TimeUnit::Hour),
        ("2023-10-15 23:59:00", TimeUnit::Minute),
    ];
    for twelve_hour_time in [false, true] {
        let formatter = formatter(twelve_hour_time);
        for (key, unit) in cases {
            let first = formatter.format_result_date(key, unit).unwrap();
            let second = formatter.format_result_date(key, unit).unwrap();
            assert!(!first.is_empty());
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_key_shape_mismatch_is_error() {
    let err = formatter(false)
        .format_result_date("2023-10-15", TimeUnit::Hour)
        .unwrap_err();
    assert!(matches!(
        err,
        TrendError::InvalidBucketKey {
            unit: TimeUnit::Hour,
            ..
        }
    ));
    assert!(formatter(false)
        .format_result_date("garbage", TimeUnit::Month)
        .is_err());
}

#[test]
fn test_localizer_applies_to_month_names() {
    let translations = Translations::builtin().with_locale("en");
    let formatter = BucketLabelFormatter::new(&JalaliCalendar, &translations, true);

    assert_eq!(
        formatter.format_result_date("2023-10", TimeUnit::Month).unwrap(),
        "Mehr 1402"
    );
    assert_eq!(
        formatter.format_result_date("2023-10", TimeUnit::Week).unwrap(),
        "Esfand 15 - Esfand 21"
    );
    assert_eq!(
        formatter
            .format_result_date("2023-05-01 14:00", TimeUnit::Hour)
            .unwrap(),
        "Ordibehesht 11 - 2:00 PM"
    );
}

#[test]
fn test_day_label_localizes_day_number_only() {
    let digits = [("23".to_string(), "۲۳".to_string())].into();
    let translations = Translations::builtin()
        .with_bundle("fa", digits)
        .with_locale("fa");
    let formatter = BucketLabelFormatter::new(&JalaliCalendar, &translations, false);

    assert_eq!(
        formatter.format_result_date("2023-10-15", TimeUnit::Day).unwrap(),
        "۲۳ مهر 1402"
    );

    let translations = translations.with_locale("en");
    let formatter = BucketLabelFormatter::new(&JalaliCalendar, &translations, false);
    assert_eq!(
        formatter.format_result_date("2023-10-15", TimeUnit::Day).unwrap(),
        "23 مهر 1402"
    );
}

#[test]
fn test_possible_date_matches_result_date() {
    let formatter = formatter(true);
    let cases = [
        (tick(2023, 10, 1, 0, 0), "2023-10", TimeUnit::Month),
        (tick(2023, 10, 18, 0, 0), "2023-42", TimeUnit::Week),
        (tick(2023, 10, 15, 0, 0), "2023-10-15", TimeUnit::Day),
        (tick(2023, 5, 1, 14, 0), "2023-05-01 14:00", TimeUnit::Hour),
        (tick(2023, 5, 1, 9, 7), "2023-05-01 09:07:00", TimeUnit::Minute),
    ];
    for (tick, key, unit) in cases {
        assert_eq!(
            formatter.format_possible_date(&tick, unit).unwrap(),
            formatter.format_result_date(key, unit).unwrap(),
            "{unit} tick {tick} vs key {key}"
        );
    }
}

#[test]
fn test_possible_week_matches_iso_bucket_label() {
    let formatter = formatter(false);
    // 2023-10-15 is the Sunday closing ISO week 41 (Monday 10-09 to Sunday 10-15).
    let result = formatter
        .format_result_date("2023-41", TimeUnit::Week)
        .unwrap();
    for day in 9..=15 {
        let possible = formatter
            .format_possible_date(&tick(2023, 10, day, 0, 0), TimeUnit::Week)
            .unwrap();
        assert_eq!(possible, result, "2023-10-{day}");
    }
    assert_eq!(result, "مهر 17 - مهر 23");
}

#[test]
fn test_possible_week_on_monday_starts_that_day() {
    let label = formatter(false)
        .format_possible_date(&tick(2023, 10, 16, 8, 30), TimeUnit::Week)
        .unwrap();
    assert_eq!(label, "مهر 24 - مهر 30");
}

#[test]
fn test_possible_date_uses_wall_clock_of_tick_zone() {
    let tehran = TimeZone::get("Asia/Tehran").unwrap();
    // 2023-10-14 21:00 UTC is already 2023-10-15 00:30 in Tehran.
    let tick = tick(2023, 10, 14, 21, 0).with_time_zone(tehran);
    let label = formatter(false)
        .format_possible_date(&tick, TimeUnit::Day)
        .unwrap();
    assert_eq!(label, "23 مهر 1402");
}
