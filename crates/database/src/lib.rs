//! # Gatekeeper Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! relational store that backs the gate-access registry.
//!
//! ## Architectural Principles
//!
//! - **Gateway + Registry:** `connection` owns pool acquisition and schema
//!   setup; `registry` encapsulates every SQL statement the application runs.
//!   Nothing outside this crate ever writes SQL.
//! - **Parameter binding everywhere:** values are never interpolated into
//!   query text.
//! - **Asynchronous & Pooled:** all operations are asynchronous and share a
//!   connection pool, so acquisition and release are deterministic and
//!   leak-free on every exit path.
//!
//! ## Public API
//!
//! - `connect` / `connect_url`: establish the database connection pool.
//! - `init_schema`: create the `visitors` table and its unique plate index.
//! - `VisitorRegistry`: the high-level data access methods (list, exists,
//!   insert, upsert, delete).
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod registry;

// Re-export the key components to create a clean, public-facing API.
// The pool type is re-exported so dependents don't need their own sqlx dep.
pub use sqlx::AnyPool;

pub use connection::{connect, connect_url, init_schema};
pub use error::DbError;
pub use registry::{Visitor, VisitorRegistry};
