//! Time units and aggregate functions for trend buckets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TrendError;

/// Granularity of a trend bucket.
///
/// The unit decides the shape of the bucket key produced by the backend, the
/// SQL grouping expression, and the label template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl FromStr for TimeUnit {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minute" | "minutes" => Ok(TimeUnit::Minute),
            "hour" | "hours" => Ok(TimeUnit::Hour),
            "day" | "days" => Ok(TimeUnit::Day),
            "week" | "weeks" => Ok(TimeUnit::Week),
            "month" | "months" => Ok(TimeUnit::Month),
            _ => Err(TrendError::UnsupportedUnit(s.to_string())),
        }
    }
}

impl TimeUnit {
    /// All units, finest first.
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
        }
    }

    /// Shape of the Gregorian bucket key the backend produces for this unit.
    pub fn key_shape(&self) -> &'static str {
        match self {
            TimeUnit::Minute => "YYYY-MM-DD HH:MM:00",
            TimeUnit::Hour => "YYYY-MM-DD HH:00",
            TimeUnit::Day => "YYYY-MM-DD",
            TimeUnit::Week => "YYYY-WW",
            TimeUnit::Month => "YYYY-MM",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SQL aggregate applied to each bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFunction {
    #[default]
    Count,
    Sum,
    Avg,
    Max,
    Min,
}

impl FromStr for AggregateFunction {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "count" => Ok(AggregateFunction::Count),
            "sum" => Ok(AggregateFunction::Sum),
            "avg" | "average" => Ok(AggregateFunction::Avg),
            "max" => Ok(AggregateFunction::Max),
            "min" => Ok(AggregateFunction::Min),
            _ => Err(TrendError::UnsupportedUnit(s.to_string())),
        }
    }
}

impl AggregateFunction {
    /// SQL function name.
    pub fn as_sql(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Avg => "avg",
            AggregateFunction::Max => "max",
            AggregateFunction::Min => "min",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
