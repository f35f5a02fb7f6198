//! Merging of backend rows into the possible-label set.

use indexmap::IndexMap;
use log::debug;

use crate::{
    error::Result,
    format::BucketLabelFormatter,
    models::{BucketRow, TimeUnit},
};

/// Largest precision that still changes an `f64`.
const MAX_SIGNIFICANT_DIGITS: u32 = 17;

/// Rounds half away from zero to `precision` decimal digits.
///
/// Precisions of [`MAX_SIGNIFICANT_DIGITS`] and above return `value` as is.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    if precision >= MAX_SIGNIFICANT_DIGITS {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Relabels backend rows and merges them over the possible labels.
///
/// A row whose label already exists overwrites the placeholder in place; a
/// label that is not among the possible ones is appended. NULL aggregates
/// count as zero.
pub fn merge_rows(
    mut possible: IndexMap<String, f64>,
    rows: &[BucketRow],
    formatter: &BucketLabelFormatter<'_>,
    unit: TimeUnit,
    precision: u32,
) -> Result<IndexMap<String, f64>> {
    for row in rows {
        let label = formatter.format_result_date(&row.date_result, unit)?;
        let value = round_to_precision(row.aggregate.unwrap_or(0.0), precision);
        if !possible.contains_key(&label) {
            debug!("Bucket '{}' has no matching possible label '{label}'", row.date_result);
        }
        possible.insert(label, value);
    }
    Ok(possible)
}

/// Drops the oldest entry when the merged set is longer than `range`.
///
/// At most one entry is removed per call, even when the overflow is larger.
pub fn trim_to_range(mut results: IndexMap<String, f64>, range: usize) -> IndexMap<String, f64> {
    if results.len() > range {
        results.shift_remove_index(0);
    }
    results
}
