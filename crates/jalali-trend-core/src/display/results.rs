//! Result wrappers for one-off calendar operations.

use std::fmt;

use jiff::civil;
use serde::Serialize;

use crate::{
    calendar::{CalendarConverter, JalaliDate},
    error::Result,
    locale::Localizer,
};

/// A Gregorian date shown next to its Jalali counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub gregorian: civil::Date,
    pub jalali: JalaliDate,
    /// Localized Jalali month name
    pub month_name: String,
}

impl Conversion {
    /// Converts `gregorian` with the given calendar and localizes the month.
    pub fn new(
        calendar: &dyn CalendarConverter,
        localizer: &dyn Localizer,
        gregorian: civil::Date,
    ) -> Result<Self> {
        let jalali = calendar.to_jalali(gregorian)?;
        Ok(Self {
            gregorian,
            jalali,
            month_name: localizer.translate(calendar.month_name(jalali.month)),
        })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.jalali)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Jalali: {} {} {}",
            self.jalali.day, self.month_name, self.jalali.year
        )?;
        writeln!(f, "- Gregorian: {}", self.gregorian)?;
        writeln!(f, "- Weekday: {:?}", self.gregorian.weekday())
    }
}
