//! Collection wrapper types.

use std::fmt;

/// Newtype wrapper for displaying bucket labels as a markdown list.
pub struct Labels<'a>(pub &'a [String]);

impl<'a> fmt::Display for Labels<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No buckets.");
        }
        for label in self.0 {
            writeln!(f, "- {label}")?;
        }
        Ok(())
    }
}
