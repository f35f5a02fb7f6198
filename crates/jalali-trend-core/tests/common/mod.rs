use std::sync::Arc;

use jalali_trend_core::{Database, Trend, TrendBuilder, Untranslated};
use tempfile::{NamedTempFile, TempDir};

/// Rows spread over August and October 2023, stored as UTC text.
pub const ORDERS: &str = "
    CREATE TABLE orders (id INTEGER PRIMARY KEY, total REAL, created_at TEXT);
    INSERT INTO orders (total, created_at) VALUES
        (1.0, '2023-08-05 12:00:00'),
        (99.0, '2023-10-10 08:00:00'),
        (10.5, '2023-10-15 10:00:00'),
        (4.25, '2023-10-15 23:00:00'),
        (12.3456, '2023-10-17 08:00:00'),
        (3.0, '2023-10-18 14:20:00'),
        (NULL, '2023-10-19 09:00:00');
";

/// Helper function to create a temporary database seeded with [`ORDERS`]
#[allow(dead_code)]
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    db.connection()
        .execute_batch(ORDERS)
        .expect("Failed to seed orders");
    (temp_file, db)
}

/// Helper function to create a test trend with untranslated labels
#[allow(dead_code)]
pub async fn create_test_trend(builder: TrendBuilder) -> (TempDir, Trend) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let trend = builder
        .with_database_path(Some(&db_path))
        .with_localizer(Arc::new(Untranslated))
        .build()
        .await
        .expect("Failed to create trend");
    (temp_dir, trend)
}
