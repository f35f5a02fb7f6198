//! Jalali labels for trend buckets.
//!
//! [`BucketLabelFormatter`] turns the Gregorian bucket keys produced by an
//! aggregation backend, and the ticks produced by the possible-date
//! generator, into human-readable Jalali labels:
//!
//! | Unit   | Bucket key            | Label                         |
//! |--------|-----------------------|-------------------------------|
//! | month  | `YYYY-MM`             | `مرداد 1402`                  |
//! | week   | `YYYY-WW` (ISO)       | `اسفند 15 - اسفند 21`         |
//! | day    | `YYYY-MM-DD`          | `23 مهر 1402`                 |
//! | hour   | `YYYY-MM-DD HH:00`    | `اردیبهشت 11 - 2:00 PM`       |
//! | minute | `YYYY-MM-DD HH:MM:00` | `اردیبهشت 11 - 14:05`         |
//!
//! Month names come from the [`CalendarConverter`] and pass through the
//! [`Localizer`]. In day labels the localizer receives the day number
//! instead, and the month name is used as is.
//!
//! Week labels span the ISO week (Monday to Sunday) for both sources, so a
//! tick and the bucket key of the same week share one label.

mod clock;
pub mod parse;

#[cfg(test)]
mod tests;

use jiff::{civil, Zoned, ToSpan};

pub use clock::clock_label;

use crate::{
    calendar::{CalendarConverter, JalaliDate, JalaliDateTime},
    error::Result,
    locale::Localizer,
    models::TimeUnit,
};

/// Stateless label formatter over an injected calendar and localizer.
#[derive(Clone, Copy)]
pub struct BucketLabelFormatter<'a> {
    calendar: &'a dyn CalendarConverter,
    localizer: &'a dyn Localizer,
    twelve_hour_time: bool,
}

impl<'a> BucketLabelFormatter<'a> {
    pub fn new(
        calendar: &'a dyn CalendarConverter,
        localizer: &'a dyn Localizer,
        twelve_hour_time: bool,
    ) -> Self {
        Self {
            calendar,
            localizer,
            twelve_hour_time,
        }
    }

    pub fn twelve_hour_time(&self) -> bool {
        self.twelve_hour_time
    }

    /// Formats a Gregorian bucket key produced by an aggregation backend.
    ///
    /// # Errors
    ///
    /// Returns `TrendError::InvalidBucketKey` when the key does not have the
    /// shape implied by `unit`.
    pub fn format_result_date(&self, key: &str, unit: TimeUnit) -> Result<String> {
        match unit {
            TimeUnit::Month => {
                let date = self.calendar.to_jalali(parse::month_key(key)?)?;
                Ok(self.month_label(&date))
            }
            TimeUnit::Week => {
                let (monday, sunday) = parse::week_key(key)?;
                self.week_label(monday, sunday)
            }
            TimeUnit::Day => {
                let date = self.calendar.to_jalali(parse::day_key(key)?)?;
                Ok(self.day_label(&date))
            }
            TimeUnit::Hour => {
                let datetime = self.calendar.to_jalali_datetime(parse::hour_key(key)?)?;
                Ok(self.time_label(&datetime, TimeUnit::Hour))
            }
            TimeUnit::Minute => {
                let datetime = self.calendar.to_jalali_datetime(parse::minute_key(key)?)?;
                Ok(self.time_label(&datetime, TimeUnit::Minute))
            }
        }
    }

    /// Formats a tick of the possible-date sequence.
    ///
    /// The tick is read as its wall-clock date/time in its own time zone, with
    /// sub-second precision dropped, and converted from there.
    pub fn format_possible_date(&self, tick: &Zoned, unit: TimeUnit) -> Result<String> {
        let wall = tick.datetime();
        let wall = wall
            .date()
            .at(wall.hour(), wall.minute(), wall.second(), 0);
        let datetime = self.calendar.to_jalali_datetime(wall)?;

        match unit {
            TimeUnit::Month => Ok(self.month_label(&datetime.date)),
            TimeUnit::Week => {
                let offset = wall.date().weekday().to_monday_zero_offset();
                let monday = wall.date().checked_sub(i32::from(offset).days())?;
                let sunday = monday.checked_add(6.days())?;
                self.week_label(monday, sunday)
            }
            TimeUnit::Day => Ok(self.day_label(&datetime.date)),
            TimeUnit::Hour | TimeUnit::Minute => Ok(self.time_label(&datetime, unit)),
        }
    }

    fn month_name(&self, date: &JalaliDate) -> &'static str {
        self.calendar.month_name(date.month)
    }

    fn month_label(&self, date: &JalaliDate) -> String {
        format!(
            "{} {}",
            self.localizer.translate(self.month_name(date)),
            date.year
        )
    }

    fn week_label(&self, start: civil::Date, end: civil::Date) -> Result<String> {
        let start = self.calendar.to_jalali(start)?;
        let end = self.calendar.to_jalali(end)?;
        Ok(format!(
            "{} {} - {} {}",
            self.localizer.translate(self.month_name(&start)),
            start.day,
            self.localizer.translate(self.month_name(&end)),
            end.day
        ))
    }

    fn day_label(&self, date: &JalaliDate) -> String {
        format!(
            "{} {} {}",
            self.localizer.translate(&date.day.to_string()),
            self.month_name(date),
            date.year
        )
    }

    fn time_label(&self, datetime: &JalaliDateTime, unit: TimeUnit) -> String {
        let minute = match unit {
            TimeUnit::Minute => datetime.minute,
            _ => 0,
        };
        format!(
            "{} {} - {}",
            self.localizer.translate(self.month_name(&datetime.date)),
            datetime.date.day,
            clock_label(datetime.hour, minute, self.twelve_hour_time)
        )
    }
}
