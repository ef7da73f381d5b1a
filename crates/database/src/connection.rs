use std::time::Duration;

use configuration::DatabaseSettings;
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use crate::error::DbError;

/// Establishes a connection pool to the configured PostgreSQL database.
///
/// The pool is created once at startup and shared across the application;
/// every registry operation acquires a connection from it and releases it
/// when the operation's scope ends, including on error paths.
pub async fn connect(settings: &DatabaseSettings) -> Result<AnyPool, DbError> {
    connect_url(&settings.connection_url()).await
}

/// Opens a pool from a raw connection URL.
///
/// Production goes through [`connect`]; the test suites hand this a
/// `sqlite://` URL so they can run against a throwaway database file.
pub async fn connect_url(url: &str) -> Result<AnyPool, DbError> {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await?;

    Ok(pool)
}

/// Ensures the `visitors` table and its unique plate index exist.
///
/// The unique index is what arbitrates concurrent inserts of the same plate;
/// the registry's `ON CONFLICT` statements rely on it.
pub async fn init_schema(pool: &AnyPool) -> Result<(), DbError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS visitors (
            name TEXT NOT NULL,
            plate TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS visitors_plate_idx ON visitors (plate)")
        .execute(pool)
        .await?;

    Ok(())
}
