//! Parameterized queries against the flights dataset.
//!
//! One module per query. Each public operation binds its arguments as named
//! parameters into a fixed SQL template and maps the rows into the typed
//! records in `crate::types`.
//!
//! Execution failures (missing table, unreadable database, type mismatch)
//! are logged and collapse to an empty `Vec` at the operation boundary, so
//! callers see the same result for "no matching rows" and "query failed".

pub mod delay_stats;
pub mod delayed_by_airline;
pub mod delayed_by_airport;
pub mod flight_by_id;
pub mod flights_by_date;

/// Minimum departure delay, in minutes, for a flight to count as delayed.
pub const DELAY_THRESHOLD_MINUTES: i64 = 20;
