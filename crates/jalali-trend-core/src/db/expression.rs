//! SQLite expressions for grouping a date column into trend buckets.

use crate::models::{AggregateFunction, TimeUnit};

/// Quotes an identifier the way SQLite's grammar does, doubling embedded
/// quotes. `*` is passed through for `count(*)`.
pub fn wrap(identifier: &str) -> String {
    if identifier == "*" {
        return identifier.to_string();
    }
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// `datetime()` modifier shifting stored UTC values into the user's zone.
pub fn offset_modifier(offset_seconds: i32) -> String {
    format!("'{offset_seconds:+} seconds'")
}

fn strftime_format(unit: TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Month => "%Y-%m",
        TimeUnit::Week => "%G-%V",
        TimeUnit::Day => "%Y-%m-%d",
        TimeUnit::Hour => "%Y-%m-%d %H:00",
        TimeUnit::Minute => "%Y-%m-%d %H:%M:00",
    }
}

/// Expression producing the bucket key of `date_column` for `unit`.
pub fn bucket_expression(date_column: &str, unit: TimeUnit, offset_seconds: i32) -> String {
    format!(
        "strftime('{}', datetime({}, {}))",
        strftime_format(unit),
        wrap(date_column),
        offset_modifier(offset_seconds)
    )
}

/// Expression aggregating `column` with `function`.
pub fn aggregate_expression(function: AggregateFunction, column: &str) -> String {
    format!("{}({})", function.as_sql(), wrap(column))
}
