//! Parameter structures for trend operations.
//!
//! These types carry no framework-specific derives beyond serde, so the CLI
//! (or any other interface) can wrap them with its own argument parsing and
//! convert into them.
//!
//! ```rust
//! use jalali_trend_core::{params::AggregateParams, TimeUnit};
//!
//! let params = AggregateParams::sum("orders", TimeUnit::Day, "total")
//!     .with_date_column("paid_at");
//! assert_eq!(params.date_column(), "paid_at");
//! ```

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrendError},
    models::{AggregateFunction, TimeUnit},
};

/// Date column used when none is given.
pub const DEFAULT_DATE_COLUMN: &str = "created_at";

/// Column counted when none is given.
pub const DEFAULT_COUNT_COLUMN: &str = "id";

/// Per-request inputs: how many buckets, in which zone, on which clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRequest {
    /// Number of buckets to show
    pub range: u32,
    /// IANA zone of the viewer; buckets are cut in this zone when present
    pub timezone: Option<String>,
    /// Render hours as `2:00 PM` instead of `14:00`
    pub twelve_hour_time: bool,
}

impl Default for TrendRequest {
    fn default() -> Self {
        Self {
            range: 30,
            timezone: None,
            twelve_hour_time: false,
        }
    }
}

impl TrendRequest {
    pub fn new(range: u32) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_twelve_hour_time(mut self, twelve_hour_time: bool) -> Self {
        self.twelve_hour_time = twelve_hour_time;
        self
    }

    /// Checks the range and resolves the viewer's time zone.
    pub fn validate(&self) -> Result<Option<TimeZone>> {
        if self.range == 0 {
            return Err(TrendError::invalid_input("range").with_reason("must be at least 1"));
        }
        self.timezone
            .as_deref()
            .map(|name| {
                TimeZone::get(name).map_err(|source| TrendError::Timezone {
                    name: name.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

/// What to aggregate: table, columns, function and bucket unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateParams {
    pub table: String,
    pub unit: TimeUnit,
    pub function: AggregateFunction,
    pub column: String,
    pub date_column: Option<String>,
}

impl AggregateParams {
    pub fn new(
        table: impl Into<String>,
        unit: TimeUnit,
        function: AggregateFunction,
        column: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            unit,
            function,
            column: column.into(),
            date_column: None,
        }
    }

    /// Number of rows per bucket.
    pub fn count(table: impl Into<String>, unit: TimeUnit) -> Self {
        Self::new(table, unit, AggregateFunction::Count, DEFAULT_COUNT_COLUMN)
    }

    pub fn sum(table: impl Into<String>, unit: TimeUnit, column: impl Into<String>) -> Self {
        Self::new(table, unit, AggregateFunction::Sum, column)
    }

    pub fn average(table: impl Into<String>, unit: TimeUnit, column: impl Into<String>) -> Self {
        Self::new(table, unit, AggregateFunction::Avg, column)
    }

    pub fn max(table: impl Into<String>, unit: TimeUnit, column: impl Into<String>) -> Self {
        Self::new(table, unit, AggregateFunction::Max, column)
    }

    pub fn min(table: impl Into<String>, unit: TimeUnit, column: impl Into<String>) -> Self {
        Self::new(table, unit, AggregateFunction::Min, column)
    }

    pub fn with_date_column(mut self, date_column: impl Into<String>) -> Self {
        self.date_column = Some(date_column.into());
        self
    }

    /// Date column, falling back to [`DEFAULT_DATE_COLUMN`].
    pub fn date_column(&self) -> &str {
        self.date_column.as_deref().unwrap_or(DEFAULT_DATE_COLUMN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        assert!(TrendRequest::new(7).validate().unwrap().is_none());
        assert!(TrendRequest::new(0).validate().is_err());

        let tz = TrendRequest::new(7)
            .with_timezone("Asia/Tehran")
            .validate()
            .unwrap();
        assert!(tz.is_some());

        let err = TrendRequest::new(7)
            .with_timezone("Mars/Olympus_Mons")
            .validate()
            .unwrap_err();
        assert!(matches!(err, TrendError::Timezone { ref name, .. } if name == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_aggregate_constructors() {
        let count = AggregateParams::count("users", TimeUnit::Week);
        assert_eq!(count.function, AggregateFunction::Count);
        assert_eq!(count.column, "id");
        assert_eq!(count.date_column(), "created_at");

        let avg = AggregateParams::average("orders", TimeUnit::Month, "total");
        assert_eq!(avg.function, AggregateFunction::Avg);
        assert_eq!(AggregateParams::max("o", TimeUnit::Day, "x").function, AggregateFunction::Max);
        assert_eq!(AggregateParams::min("o", TimeUnit::Day, "x").function, AggregateFunction::Min);
    }

    #[test]
    fn test_request_default() {
        let request = TrendRequest::default();
        assert_eq!(request.range, 30);
        assert!(!request.twelve_hour_time);
        assert!(request.with_twelve_hour_time(true).twelve_hour_time);
    }
}
