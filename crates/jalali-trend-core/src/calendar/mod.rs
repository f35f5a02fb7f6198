//! Jalali (Persian solar) calendar conversion.
//!
//! The [`CalendarConverter`] trait is the seam between label formatting and
//! the calendar arithmetic. [`JalaliCalendar`] is the built-in implementation
//! on top of the `icu_calendar` Persian calendar; callers may inject their own
//! (for example one backed by an astronomical calendar) through
//! [`crate::TrendBuilder::with_calendar`].
//!
//! ```rust
//! use jalali_trend_core::calendar::{CalendarConverter, JalaliCalendar};
//! use jiff::civil::date;
//!
//! let calendar = JalaliCalendar;
//! let nowruz = calendar.to_jalali(date(2023, 3, 21)).unwrap();
//! assert_eq!((nowruz.year, nowruz.month, nowruz.day), (1402, 1, 1));
//! assert_eq!(calendar.month_name(nowruz.month), "فروردین");
//! ```

use std::fmt;

use icu_calendar::{
    cal::{Iso, Persian},
    Date,
};
use jiff::civil;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrendError};

/// First Jalali year whose every day is a valid civil date (inclusive).
pub const MIN_YEAR: i32 = -10_620;
/// Last Jalali year whose every day is a valid civil date (inclusive).
pub const MAX_YEAR: i32 = 9_377;

/// Jalali month names as rendered by the `F` format token.
pub const JALALI_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// A date on the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JalaliDate {
    pub year: i32,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
}

impl JalaliDate {
    /// Creates a validated Jalali date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TrendError::DateOutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        if !(1..=12).contains(&month) {
            return Err(TrendError::invalid_input("month").with_reason(format!(
                "Jalali month must be between 1 and 12, got {month}"
            )));
        }
        persian_date(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Whether the year of this date has 366 days.
    pub fn is_leap_year(&self) -> Result<bool> {
        Ok(persian_date(self.year, self.month, self.day)?.is_in_leap_year())
    }

    /// Number of days in the month of this date.
    pub fn days_in_month(&self) -> Result<u8> {
        Ok(persian_date(self.year, self.month, self.day)?.days_in_month())
    }
}

fn persian_date(year: i32, month: u8, day: u8) -> Result<Date<Persian>> {
    Date::try_new_persian(year, month, day).map_err(|e| {
        TrendError::invalid_input("day")
            .with_reason(format!("{year}/{month:02}/{day:02} is not a Jalali date: {e}"))
    })
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// A Jalali date with a wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JalaliDateTime {
    pub date: JalaliDate,
    /// 0..=23
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for JalaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

/// Converts between the Gregorian and Jalali calendars.
pub trait CalendarConverter: Send + Sync {
    /// Converts a Gregorian civil date into a Jalali date.
    fn to_jalali(&self, date: civil::Date) -> Result<JalaliDate>;

    /// Converts a Jalali date back into a Gregorian civil date.
    fn to_gregorian(&self, date: JalaliDate) -> Result<civil::Date>;

    /// Localizable month name for a 1-based Jalali month.
    fn month_name(&self, month: u8) -> &'static str;

    /// Converts a Gregorian civil date/time, keeping the wall-clock time.
    fn to_jalali_datetime(&self, datetime: civil::DateTime) -> Result<JalaliDateTime> {
        Ok(JalaliDateTime {
            date: self.to_jalali(datetime.date())?,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second() as u8,
        })
    }
}

/// Jalali calendar backed by the `icu_calendar` Persian calendar.
///
/// Valid for Jalali years [`MIN_YEAR`] through [`MAX_YEAR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JalaliCalendar;

impl CalendarConverter for JalaliCalendar {
    fn to_jalali(&self, date: civil::Date) -> Result<JalaliDate> {
        let iso = Date::try_new_iso(i32::from(date.year()), date.month() as u8, date.day() as u8)
            .map_err(|e| TrendError::invalid_input("date").with_reason(e.to_string()))?;
        let persian = iso.to_calendar(Persian);
        Ok(JalaliDate {
            year: persian.era_year().year,
            month: persian.month().ordinal,
            day: persian.day_of_month().0,
        })
    }

    fn to_gregorian(&self, date: JalaliDate) -> Result<civil::Date> {
        JalaliDate::new(date.year, date.month, date.day)?;
        let iso = persian_date(date.year, date.month, date.day)?.to_calendar(Iso);
        let year = i16::try_from(iso.era_year().year).map_err(|_| TrendError::DateOutOfRange {
            year: date.year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        })?;
        Ok(civil::Date::new(
            year,
            iso.month().ordinal as i8,
            iso.day_of_month().0 as i8,
        )?)
    }

    fn month_name(&self, month: u8) -> &'static str {
        JALALI_MONTHS[usize::from(month.clamp(1, 12)) - 1]
    }
}
