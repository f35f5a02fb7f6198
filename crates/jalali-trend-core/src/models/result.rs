//! Trend result handed to renderers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered label to value mapping plus an optional headline value.
///
/// Iteration order is chronological: it is the order in which labels were
/// first inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Headline value shown next to the chart
    pub value: Option<f64>,
    /// Chart points keyed by Jalali label
    pub trend: IndexMap<String, f64>,
}

impl TrendResult {
    pub fn new(trend: IndexMap<String, f64>) -> Self {
        Self { value: None, trend }
    }

    /// Use the most recent bucket as the headline value.
    pub fn show_latest_value(mut self) -> Self {
        self.value = self.trend.values().last().copied();
        self
    }

    /// Use the sum of every bucket as the headline value.
    pub fn show_sum_value(mut self) -> Self {
        self.value = Some(self.trend.values().sum());
        self
    }

    pub fn len(&self) -> usize {
        self.trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.trend.get(label).copied()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.trend.keys().map(String::as_str)
    }
}
