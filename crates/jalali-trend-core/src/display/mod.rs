//! Markdown formatting for trend output.
//!
//! Domain types implement [`std::fmt::Display`] directly ([`models`]); the
//! wrappers here add context the types do not carry themselves, such as a
//! list of bare labels or a date shown on both calendars.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  TrendResult,   │    │ Display impls & │    │    Markdown     │
//! │  labels, dates  │───▶│    wrappers     │───▶│ (terminal/JSON) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use indexmap::IndexMap;
//! use jalali_trend_core::TrendResult;
//!
//! let mut trend = IndexMap::new();
//! trend.insert("مهر 1402".to_string(), 5.0);
//! let output = TrendResult::new(trend).show_sum_value().to_string();
//! assert!(output.contains("| مهر 1402 | 5 |"));
//! assert!(output.contains("**Value:** 5"));
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::Labels;
pub use results::Conversion;
