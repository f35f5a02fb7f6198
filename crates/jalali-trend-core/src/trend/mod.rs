//! High-level trend API.
//!
//! [`Trend`] ties the pieces together for one metric request:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ starting date│──▶│ backend rows │──▶│ Jalali labels│──▶│ merge + trim │
//! │ + possible   │   │ (SQLite)     │   │ (formatter)  │   │ TrendResult  │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! The async methods in [`ops`] run the blocking SQLite work on a blocking
//! task; [`Trend::aggregate_at`] is the synchronous core they delegate to and
//! accepts any [`AggregationBackend`] and an explicit clock.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jalali_trend_core::{params::TrendRequest, TimeUnit, TrendBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let trend = TrendBuilder::new()
//!     .with_database_path(Some("shop.db"))
//!     .with_precision(2)
//!     .build()
//!     .await?;
//!
//! let request = TrendRequest::new(30).with_timezone("Asia/Tehran");
//! let result = trend.sum(&request, "orders", TimeUnit::Day, "total").await?;
//! for (label, value) in &result.trend {
//!     println!("{label}: {value}");
//! }
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::{civil, tz::TimeZone, Timestamp};
use log::debug;

pub mod builder;
pub mod ops;


pub use builder::TrendBuilder;

use crate::{
    assemble::{merge_rows, trim_to_range},
    calendar::CalendarConverter,
    db::{AggregationBackend, BucketQuery},
    display::Conversion,
    error::Result,
    format::BucketLabelFormatter,
    locale::Localizer,
    models::{TimeUnit, TrendResult},
    params::{AggregateParams, TrendRequest},
    possible::{aggregate_starting_date, possible_results},
};

/// Settings shared by every request of a [`Trend`].
#[derive(Debug, Clone)]
pub struct TrendSettings {
    /// Decimal digits aggregates are rounded to
    pub precision: u32,
    /// Allowed ranges; empty allows any
    pub ranges: Vec<u32>,
    /// Zone of the application clock and of starting dates
    pub app_timezone: TimeZone,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            precision: 0,
            ranges: Vec::new(),
            app_timezone: TimeZone::UTC,
        }
    }
}

/// Jalali trend metric over a SQLite database.
#[derive(Clone)]
pub struct Trend {
    pub(crate) db_path: PathBuf,
    pub(crate) settings: TrendSettings,
    calendar: Arc<dyn CalendarConverter>,
    localizer: Arc<dyn Localizer>,
}

impl Trend {
    pub fn settings(&self) -> &TrendSettings {
        &self.settings
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Label formatter using this trend's calendar and localizer.
    pub fn formatter(&self, twelve_hour_time: bool) -> BucketLabelFormatter<'_> {
        BucketLabelFormatter::new(
            self.calendar.as_ref(),
            self.localizer.as_ref(),
            twelve_hour_time,
        )
    }

    /// Shows a Gregorian date on the Jalali calendar with a localized month.
    pub fn convert(&self, date: civil::Date) -> Result<Conversion> {
        Conversion::new(self.calendar.as_ref(), self.localizer.as_ref(), date)
    }

    /// The zero-filled labels a request would produce at `now`.
    pub fn possible_labels_at(
        &self,
        request: &TrendRequest,
        unit: TimeUnit,
        now: Timestamp,
    ) -> Result<Vec<String>> {
        let user_timezone = request.validate()?;
        let now = now.to_zoned(self.settings.app_timezone.clone());
        let start = aggregate_starting_date(&now, unit, request.range, &self.settings.ranges)?;
        let possible = possible_results(
            &self.formatter(request.twelve_hour_time),
            &start,
            &now,
            unit,
            user_timezone.as_ref(),
        )?;
        Ok(possible.into_keys().collect())
    }

    /// Builds the trend for `params` as seen at `now`.
    ///
    /// Buckets are cut in the request's zone (the application zone when the
    /// request has none); stored dates are read as UTC.
    pub fn aggregate_at(
        &self,
        backend: &dyn AggregationBackend,
        request: &TrendRequest,
        params: &AggregateParams,
        now: Timestamp,
    ) -> Result<TrendResult> {
        let user_timezone = request.validate()?;
        let app_now = now.to_zoned(self.settings.app_timezone.clone());
        let start =
            aggregate_starting_date(&app_now, params.unit, request.range, &self.settings.ranges)?;

        let formatter = self.formatter(request.twelve_hour_time);
        let possible = possible_results(
            &formatter,
            &start,
            &app_now,
            params.unit,
            user_timezone.as_ref(),
        )?;

        let bucket_zone = user_timezone.unwrap_or_else(|| self.settings.app_timezone.clone());
        let query = BucketQuery {
            table: params.table.clone(),
            column: params.column.clone(),
            date_column: params.date_column().to_string(),
            unit: params.unit,
            function: params.function,
            offset_seconds: bucket_zone.to_offset(now).seconds(),
            start: start.timestamp(),
            end: now,
        };
        let rows = backend.aggregate(&query)?;
        debug!(
            "{} {} rows by {} over {} possible buckets",
            rows.len(),
            params.function,
            params.unit,
            possible.len()
        );

        let merged = merge_rows(possible, &rows, &formatter, params.unit, self.settings.precision)?;
        Ok(TrendResult::new(trim_to_range(merged, request.range as usize)))
    }
}
