//! Data models for trend buckets and results.
//!
//! - [`TimeUnit`] and [`AggregateFunction`] describe how rows are grouped
//! - [`BucketRow`] is what an aggregation backend returns
//! - [`TrendResult`] is the ordered label to value mapping rendered as a chart

pub mod result;
pub mod row;
pub mod unit;

#[cfg(test)]
mod tests;

pub use result::TrendResult;
pub use row::BucketRow;
pub use unit::{AggregateFunction, TimeUnit};
