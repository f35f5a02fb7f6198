//! Raw rows returned by an aggregation backend.

use serde::{Deserialize, Serialize};

/// One grouped row: a Gregorian bucket key and its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketRow {
    /// Bucket key in the shape given by [`super::TimeUnit::key_shape`]
    pub date_result: String,
    /// Aggregate value, `None` when SQL produced NULL
    pub aggregate: Option<f64>,
}

impl BucketRow {
    pub fn new(date_result: impl Into<String>, aggregate: f64) -> Self {
        Self {
            date_result: date_result.into(),
            aggregate: Some(aggregate),
        }
    }
}
