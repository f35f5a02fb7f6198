//! Date range computation and the gap-free set of expected bucket labels.

use indexmap::IndexMap;
use jiff::{civil, tz::TimeZone, Span, ToSpan, Zoned};

use crate::{error::Result, format::BucketLabelFormatter, models::TimeUnit};

impl TimeUnit {
    /// Distance between two consecutive buckets.
    pub fn step(&self) -> Span {
        match self {
            TimeUnit::Minute => 1.minute(),
            TimeUnit::Hour => 1.hour(),
            TimeUnit::Day => 1.day(),
            TimeUnit::Week => 1.week(),
            TimeUnit::Month => 1.month(),
        }
    }
}

/// Clamps a requested range to the largest allowed range when the request is
/// not one of the allowed values. An empty allow-list accepts anything.
pub fn effective_range(range: u32, ranges: &[u32]) -> u32 {
    match ranges.iter().max() {
        Some(&max) if !ranges.contains(&range) => range.min(max),
        _ => range,
    }
}

/// First instant covered by a trend of `range` buckets ending at `now`.
///
/// The result is aligned to the start of its bucket in the time zone of
/// `now`: the first of the month, the Monday of the week, midnight, or the
/// top of the hour or minute.
pub fn aggregate_starting_date(
    now: &Zoned,
    unit: TimeUnit,
    range: u32,
    ranges: &[u32],
) -> Result<Zoned> {
    let back = i64::from(effective_range(range, ranges).saturating_sub(1));
    let tz = now.time_zone().clone();
    let today = now.date();

    let start = match unit {
        TimeUnit::Month => midnight(today.checked_sub(back.months())?.first_of_month()),
        TimeUnit::Week => {
            let day = today.checked_sub(back.weeks())?;
            let monday_offset = i64::from(day.weekday().to_monday_zero_offset());
            midnight(day.checked_sub(monday_offset.days())?)
        }
        TimeUnit::Day => midnight(today.checked_sub(back.days())?),
        TimeUnit::Hour => {
            let wall = now.checked_sub(back.hours())?.datetime();
            wall.date().at(wall.hour(), 0, 0, 0)
        }
        TimeUnit::Minute => {
            let wall = now.checked_sub(back.minutes())?.datetime();
            wall.date().at(wall.hour(), wall.minute(), 0, 0)
        }
    };

    Ok(start.to_zoned(tz)?)
}

fn midnight(date: civil::Date) -> civil::DateTime {
    date.to_datetime(civil::Time::midnight())
}

/// Every label between `start` and `end`, one per bucket, each mapped to 0.
///
/// Both bounds are moved to `timezone` first when one is given. Months are
/// stepped without overflowing into the following month.
pub fn possible_results(
    formatter: &BucketLabelFormatter<'_>,
    start: &Zoned,
    end: &Zoned,
    unit: TimeUnit,
    timezone: Option<&TimeZone>,
) -> Result<IndexMap<String, f64>> {
    let (mut next, end) = match timezone {
        Some(tz) => (start.with_time_zone(tz.clone()), end.with_time_zone(tz.clone())),
        None => (start.clone(), end.clone()),
    };

    let mut results = IndexMap::new();
    results.insert(formatter.format_possible_date(&next, unit)?, 0.0);

    while next < end {
        next = next.checked_add(unit.step())?;
        if next <= end {
            results.insert(formatter.format_possible_date(&next, unit)?, 0.0);
        }
    }

    Ok(results)
}
