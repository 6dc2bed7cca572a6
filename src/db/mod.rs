//! Database connection and query utilities for the flights dataset.
//!
//! This module provides the database abstraction layer for the CLI tool:
//! - Connection management (read-only file open, in-memory for tests)
//! - Query execution with named parameter binding
//! - Row mapping into the typed records in `crate::types`
//!
//! # Type Decisions
//!
//! **Why `i64` for ids/dates/delays instead of `u32`?**
//! SQLite returns all integers as `i64`. Using `i64` throughout avoids lossy
//! conversions. `DEPARTURE_DELAY` is nullable in the dataset and maps to
//! `Option<i64>`.
//!
//! **Why bare `String` for airport codes and airline names?**
//! For a CLI tool, the complexity of newtype wrappers outweighs the type
//! safety benefit. Field names (`origin_airport`, `airline`) are
//! sufficiently clear.

mod connection;
mod query;

pub use connection::FlightDb;
pub use query::run_query;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },
}
