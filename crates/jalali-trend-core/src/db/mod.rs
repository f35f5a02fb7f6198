//! Aggregation backends producing one row per time bucket.
//!
//! [`AggregationBackend`] is the seam between the trend orchestrator and the
//! store holding the measured rows. [`Database`] implements it on SQLite,
//! with date columns stored as `YYYY-MM-DD HH:MM:SS` UTC text.

pub mod expression;

use std::path::Path;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{AggregateFunction, BucketRow, TimeUnit},
};

/// Format of stored date values and of the range bounds.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One grouped aggregation over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketQuery {
    pub table: String,
    /// Aggregated column, `*` allowed for counts
    pub column: String,
    pub date_column: String,
    pub unit: TimeUnit,
    pub function: AggregateFunction,
    /// UTC offset of the zone buckets are cut in
    pub offset_seconds: i32,
    /// Inclusive lower bound
    pub start: Timestamp,
    /// Inclusive upper bound
    pub end: Timestamp,
}

/// Produces grouped rows ordered by bucket key.
pub trait AggregationBackend {
    fn aggregate(&self, query: &BucketQuery) -> Result<Vec<BucketRow>>;
}

/// SQLite-backed aggregation.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) a database file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).db_context("Failed to open database connection")?;
        Ok(Self { connection })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Ok(Self { connection })
    }

    /// Access to the underlying connection, for seeding and schema work.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Renders a timestamp the way date columns are stored.
    pub fn format_timestamp(timestamp: &Timestamp) -> String {
        timestamp.strftime(STORAGE_FORMAT).to_string()
    }

    fn aggregate_sql(query: &BucketQuery) -> String {
        let bucket = expression::bucket_expression(&query.date_column, query.unit, query.offset_seconds);
        format!(
            "SELECT {bucket} AS date_result, {aggregate} AS aggregate
             FROM {table}
             WHERE {date_column} BETWEEN ?1 AND ?2
             GROUP BY {bucket}
             ORDER BY date_result",
            aggregate = expression::aggregate_expression(query.function, &query.column),
            table = expression::wrap(&query.table),
            date_column = expression::wrap(&query.date_column),
        )
    }
}

impl AggregationBackend for Database {
    fn aggregate(&self, query: &BucketQuery) -> Result<Vec<BucketRow>> {
        let sql = Self::aggregate_sql(query);
        let start = Self::format_timestamp(&query.start);
        let end = Self::format_timestamp(&query.end);
        debug!("Aggregating {} between {start} and {end}: {sql}", query.table);

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare aggregate query")?;

        let rows = stmt
            .query_map(params![start, end], |row| {
                Ok(BucketRow {
                    date_result: row.get(0)?,
                    aggregate: row.get(1)?,
                })
            })
            .db_context("Failed to run aggregate query")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch aggregate rows")?;

        Ok(rows)
    }
}
