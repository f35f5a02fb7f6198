//! Display implementations for trend models.

use std::fmt;

use crate::models::TrendResult;

impl fmt::Display for TrendResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.value {
            writeln!(f, "**Value:** {value}")?;
            writeln!(f)?;
        }

        if self.trend.is_empty() {
            return writeln!(f, "No trend data.");
        }

        writeln!(f, "| Period | Value |")?;
        writeln!(f, "|--------|------:|")?;
        for (label, value) in &self.trend {
            writeln!(f, "| {label} | {value} |")?;
        }
        Ok(())
    }
}
