//! Jalali calendar trend metrics.
//!
//! This crate groups rows of a table into time buckets (minute, hour, day,
//! week or month), aggregates a column per bucket and labels every bucket in
//! the Jalali (Persian solar) calendar. Buckets with no rows are filled with
//! zero so that a chart always shows the full requested range.
//!
//! # Architecture
//!
//! - **Calendar** ([`calendar`]): Gregorian to Jalali conversion behind the
//!   [`CalendarConverter`] trait
//! - **Labels** ([`format`]): bucket keys and ticks rendered as Jalali labels
//! - **Possible dates** ([`possible`]): starting date and gap-free label set
//! - **Backends** ([`db`]): grouped SQL aggregation behind
//!   [`AggregationBackend`]
//! - **Assembly** ([`assemble`]): merge, round and trim into a
//!   [`TrendResult`]
//! - **Orchestration** ([`trend`]): the async [`Trend`] API
//!
//! # Quick Start
//!
//! ```rust
//! use jalali_trend_core::{BucketLabelFormatter, JalaliCalendar, TimeUnit, Untranslated};
//!
//! let formatter = BucketLabelFormatter::new(&JalaliCalendar, &Untranslated, true);
//! let label = formatter
//!     .format_result_date("2023-05-01 14:00", TimeUnit::Hour)
//!     .unwrap();
//! assert_eq!(label, "اردیبهشت 11 - 2:00 PM");
//! ```

pub mod assemble;
pub mod calendar;
pub mod db;
pub mod display;
pub mod error;
pub mod format;
pub mod locale;
pub mod models;
pub mod params;
pub mod possible;
pub mod trend;

// Re-export commonly used types
pub use calendar::{CalendarConverter, JalaliCalendar, JalaliDate, JalaliDateTime};
pub use db::{AggregationBackend, BucketQuery, Database};
pub use display::{Conversion, Labels};
pub use error::{Result, TrendError};
pub use format::BucketLabelFormatter;
pub use locale::{Localizer, Translations, Untranslated};
pub use models::{AggregateFunction, BucketRow, TimeUnit, TrendResult};
pub use params::{AggregateParams, TrendRequest};
pub use trend::{Trend, TrendBuilder, TrendSettings};
