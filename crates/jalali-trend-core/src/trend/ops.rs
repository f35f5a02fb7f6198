//! Async trend operations over the configured database.

use jiff::Timestamp;
use tokio::task;

use super::Trend;
use crate::{
    db::Database,
    error::{Result, TrendError},
    models::{TimeUnit, TrendResult},
    params::{AggregateParams, TrendRequest},
};

impl Trend {
    /// Builds the trend for `params` as of now.
    pub async fn aggregate(
        &self,
        request: &TrendRequest,
        params: &AggregateParams,
    ) -> Result<TrendResult> {
        let trend = self.clone();
        let request = request.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&trend.db_path)?;
            trend.aggregate_at(&db, &request, &params, Timestamp::now())
        })
        .await
        .map_err(|e| TrendError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Number of rows per bucket.
    pub async fn count(
        &self,
        request: &TrendRequest,
        table: &str,
        unit: TimeUnit,
    ) -> Result<TrendResult> {
        self.aggregate(request, &AggregateParams::count(table, unit))
            .await
    }

    /// Sum of `column` per bucket.
    pub async fn sum(
        &self,
        request: &TrendRequest,
        table: &str,
        unit: TimeUnit,
        column: &str,
    ) -> Result<TrendResult> {
        self.aggregate(request, &AggregateParams::sum(table, unit, column))
            .await
    }

    /// Average of `column` per bucket.
    pub async fn average(
        &self,
        request: &TrendRequest,
        table: &str,
        unit: TimeUnit,
        column: &str,
    ) -> Result<TrendResult> {
        self.aggregate(request, &AggregateParams::average(table, unit, column))
            .await
    }

    /// Largest `column` per bucket.
    pub async fn max(
        &self,
        request: &TrendRequest,
        table: &str,
        unit: TimeUnit,
        column: &str,
    ) -> Result<TrendResult> {
        self.aggregate(request, &AggregateParams::max(table, unit, column))
            .await
    }

    /// Smallest `column` per bucket.
    pub async fn min(
        &self,
        request: &TrendRequest,
        table: &str,
        unit: TimeUnit,
        column: &str,
    ) -> Result<TrendResult> {
        self.aggregate(request, &AggregateParams::min(table, unit, column))
            .await
    }
}
