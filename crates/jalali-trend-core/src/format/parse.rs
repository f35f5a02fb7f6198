//! Parsing of Gregorian bucket keys into civil dates.
//!
//! Every unit accepts exactly one key shape. Month and week keys are split on
//! `-` and read as integers, so unpadded keys such as `2023-5` are accepted.

use jiff::civil::{self, ISOWeekDate, Weekday};

use crate::{
    error::{Result, TrendError},
    models::TimeUnit,
};

fn split_pair(unit: TimeUnit, key: &str) -> Result<(i16, i8)> {
    let (first, second) = key
        .split_once('-')
        .ok_or_else(|| TrendError::bucket_key(unit, key, "expected two '-' separated numbers"))?;
    let first = first
        .trim()
        .parse::<i16>()
        .map_err(|e| TrendError::bucket_key(unit, key, format!("bad year: {e}")))?;
    let second = second
        .trim()
        .parse::<i8>()
        .map_err(|e| TrendError::bucket_key(unit, key, format!("bad {unit} number: {e}")))?;
    Ok((first, second))
}

/// `YYYY-MM` to the first day of that Gregorian month.
pub fn month_key(key: &str) -> Result<civil::Date> {
    let (year, month) = split_pair(TimeUnit::Month, key)?;
    civil::Date::new(year, month, 1)
        .map_err(|e| TrendError::bucket_key(TimeUnit::Month, key, e.to_string()))
}

/// `YYYY-WW` (ISO year and week) to the Monday and Sunday of that week.
pub fn week_key(key: &str) -> Result<(civil::Date, civil::Date)> {
    let (year, week) = split_pair(TimeUnit::Week, key)?;
    let monday = ISOWeekDate::new(year, week, Weekday::Monday)
        .map_err(|e| TrendError::bucket_key(TimeUnit::Week, key, e.to_string()))?
        .date();
    let sunday = ISOWeekDate::new(year, week, Weekday::Sunday)
        .map_err(|e| TrendError::bucket_key(TimeUnit::Week, key, e.to_string()))?
        .date();
    Ok((monday, sunday))
}

/// `YYYY-MM-DD`.
pub fn day_key(key: &str) -> Result<civil::Date> {
    civil::Date::strptime("%Y-%m-%d", key)
        .map_err(|e| TrendError::bucket_key(TimeUnit::Day, key, e.to_string()))
}

/// `YYYY-MM-DD HH:00`.
pub fn hour_key(key: &str) -> Result<civil::DateTime> {
    let datetime = civil::DateTime::strptime("%Y-%m-%d %H:%M", key)
        .map_err(|e| TrendError::bucket_key(TimeUnit::Hour, key, e.to_string()))?;
    if datetime.minute() != 0 {
        return Err(TrendError::bucket_key(
            TimeUnit::Hour,
            key,
            "minutes must be 00",
        ));
    }
    Ok(datetime)
}

/// `YYYY-MM-DD HH:MM:00`.
pub fn minute_key(key: &str) -> Result<civil::DateTime> {
    let datetime = civil::DateTime::strptime("%Y-%m-%d %H:%M:%S", key)
        .map_err(|e| TrendError::bucket_key(TimeUnit::Minute, key, e.to_string()))?;
    if datetime.second() != 0 {
        return Err(TrendError::bucket_key(
            TimeUnit::Minute,
            key,
            "seconds must be 00",
        ));
    }
    Ok(datetime)
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, datetime};

    use super::*;

    #[test]
    fn test_month_key_accepts_unpadded_month() {
        assert_eq!(month_key("2023-5").unwrap(), date(2023, 5, 1));
        assert_eq!(month_key("2023-05").unwrap(), date(2023, 5, 1));
        assert!(month_key("2023-13").is_err());
        assert!(month_key("2023").is_err());
    }

    #[test]
    fn test_week_key_spans_monday_to_sunday() {
        let (monday, sunday) = week_key("2023-10").unwrap();
        assert_eq!(monday, date(2023, 3, 6));
        assert_eq!(sunday, date(2023, 3, 12));

        // ISO week 1 of 2021 starts in the previous Gregorian year.
        let (monday, _) = week_key("2021-01").unwrap();
        assert_eq!(monday, date(2021, 1, 4));
        let (monday, _) = week_key("2020-01").unwrap();
        assert_eq!(monday, date(2019, 12, 30));
    }

    #[test]
    fn test_week_key_rejects_missing_week() {
        assert!(week_key("2023-54").is_err());
        assert!(week_key("2023-xx").is_err());
    }

    #[test]
    fn test_day_key() {
        assert_eq!(day_key("2023-10-15").unwrap(), date(2023, 10, 15));
        assert!(day_key("2023/10/15").is_err());
        assert!(day_key("2023-02-30").is_err());
    }

    #[test]
    fn test_hour_key_requires_zero_minutes() {
        assert_eq!(
            hour_key("2023-05-01 14:00").unwrap(),
            datetime(2023, 5, 1, 14, 0, 0, 0)
        );
        assert!(hour_key("2023-05-01 14:30").is_err());
        assert!(hour_key("2023-05-01").is_err());
    }

    #[test]
    fn test_minute_key_requires_zero_seconds() {
        assert_eq!(
            minute_key("2023-05-01 09:07:00").unwrap(),
            datetime(2023, 5, 1, 9, 7, 0, 0)
        );
        assert!(minute_key("2023-05-01 09:07:30").is_err());
        assert!(minute_key("2023-05-01 09:07").is_err());
    }
}
