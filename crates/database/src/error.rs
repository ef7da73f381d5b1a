use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("A visitor with plate '{0}' is already registered.")]
    DuplicatePlate(String),
}
