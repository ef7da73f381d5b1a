use serde::{Deserialize, Serialize};
use sqlx::{AnyPool, FromRow};

use crate::error::DbError;

/// A single gate-access record: who may enter, keyed by their license plate.
///
/// Plates are free text; the registry never validates their format.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Visitor {
    pub name: String,
    pub plate: String,
}

/// The `VisitorRegistry` provides a high-level, application-specific interface
/// to the `visitors` table. It encapsulates all SQL queries and data access
/// logic; every statement is parameter-bound.
#[derive(Debug, Clone)]
pub struct VisitorRegistry {
    pool: AnyPool,
}

impl VisitorRegistry {
    /// Creates a new `VisitorRegistry` with a shared database connection pool.
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Fetches visitors, optionally restricted to an exact plate match.
    ///
    /// No matches is an empty Vec, never an error; the HTTP layer decides
    /// whether that means 404 (a specific plate was asked for) or an empty
    /// 200 list.
    pub async fn list_visitors(&self, plate: Option<&str>) -> Result<Vec<Visitor>, DbError> {
        let visitors = match plate {
            None => {
                sqlx::query_as::<_, Visitor>("SELECT name, plate FROM visitors ORDER BY plate ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(plate) => {
                sqlx::query_as::<_, Visitor>("SELECT name, plate FROM visitors WHERE plate = $1")
                    .bind(plate)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(visitors)
    }

    /// Returns true iff at least one record carries exactly this plate.
    pub async fn exists_by_plate(&self, plate: &str) -> Result<bool, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM visitors WHERE plate = $1")
            .bind(plate)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Inserts a new visitor.
    ///
    /// The unique index on `plate` arbitrates concurrent inserts: the loser
    /// of a race observes zero affected rows and gets
    /// [`DbError::DuplicatePlate`], so two simultaneous creates of the same
    /// plate can never both succeed.
    pub async fn insert(&self, visitor: &Visitor) -> Result<(), DbError> {
        let result = sqlx::query(
            "INSERT INTO visitors (name, plate) VALUES ($1, $2) ON CONFLICT (plate) DO NOTHING",
        )
        .bind(&visitor.name)
        .bind(&visitor.plate)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::DuplicatePlate(visitor.plate.clone()));
        }

        tracing::info!(name = %visitor.name, plate = %visitor.plate, "Visitor added to the registry.");
        Ok(())
    }

    /// Inserts the visitor, or replaces the stored name when the plate is
    /// already registered. Callers are responsible for confirming the
    /// overwrite with the operator before invoking this.
    pub async fn upsert(&self, visitor: &Visitor) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO visitors (name, plate) VALUES ($1, $2) \
             ON CONFLICT (plate) DO UPDATE SET name = excluded.name",
        )
        .bind(&visitor.name)
        .bind(&visitor.plate)
        .execute(&self.pool)
        .await?;

        tracing::info!(name = %visitor.name, plate = %visitor.plate, "Plate is now registered to this name.");
        Ok(())
    }

    /// Deletes records matching the plate exactly and returns how many rows
    /// were removed. Zero matches is a no-op, not an error; the delete is
    /// idempotent.
    pub async fn delete_by_plate(&self, plate: &str) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM visitors WHERE plate = $1")
            .bind(plate)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected();
        if removed > 0 {
            tracing::info!(plate = %plate, "Plate removed from the registry.");
        }
        Ok(removed)
    }
}
