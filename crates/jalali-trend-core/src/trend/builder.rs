//! Builder for creating and configuring Trend instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::tz::TimeZone;
use log::debug;
use tokio::task;

use super::{Trend, TrendSettings};
use crate::{
    calendar::{CalendarConverter, JalaliCalendar},
    db::Database,
    error::{Result, TrendError},
    locale::{Localizer, Translations},
};

/// Builder for creating and configuring Trend instances.
#[derive(Clone)]
pub struct TrendBuilder {
    database_path: Option<PathBuf>,
    precision: u32,
    ranges: Vec<u32>,
    app_timezone: Option<String>,
    calendar: Option<Arc<dyn CalendarConverter>>,
    localizer: Option<Arc<dyn Localizer>>,
}

impl TrendBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            precision: 0,
            ranges: Vec::new(),
            app_timezone: None,
            calendar: None,
            localizer: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/jalali-trend/metrics.db` or
    /// `~/.local/share/jalali-trend/metrics.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the number of decimal digits aggregates are rounded to.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Restricts requested ranges to the given values; a range outside the
    /// list is clamped to its largest value.
    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = u32>) -> Self {
        self.ranges = ranges.into_iter().collect();
        self
    }

    /// Sets the zone the application clock runs in (default UTC).
    pub fn with_app_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.app_timezone = Some(timezone.into());
        self
    }

    /// Replaces the built-in Jalali calendar.
    pub fn with_calendar(mut self, calendar: Arc<dyn CalendarConverter>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Replaces the default translations.
    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Builds the configured trend instance.
    ///
    /// # Errors
    ///
    /// Returns `TrendError::Timezone` if the application zone is unknown
    /// Returns `TrendError::FileSystem` if the database path is invalid
    /// Returns `TrendError::Database` if the database cannot be opened
    pub async fn build(self) -> Result<Trend> {
        let app_timezone = match self.app_timezone {
            Some(name) => TimeZone::get(&name).map_err(|source| TrendError::Timezone {
                name,
                source,
            })?,
            None => TimeZone::UTC,
        };

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrendError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TrendError>(())
        })
        .await
        .map_err(|e| TrendError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let localizer = match self.localizer {
            Some(localizer) => localizer,
            None => Arc::new(Translations::from_default_dir()?),
        };

        debug!("Trend configured with database {}", db_path.display());

        Ok(Trend {
            db_path,
            settings: TrendSettings {
                precision: self.precision,
                ranges: self.ranges,
                app_timezone,
            },
            calendar: self.calendar.unwrap_or_else(|| Arc::new(JalaliCalendar)),
            localizer,
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("jalali-trend")
            .place_data_file("metrics.db")
            .map_err(|e| TrendError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrendBuilder {
    fn default() -> Self {
        Self::new()
    }
}
