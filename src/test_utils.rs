//! Shared test utilities for query and command tests.

use crate::db::FlightDb;
use crate::fixtures;

/// In-memory database with the flights schema and seed rows loaded.
///
/// This is the standard setup for query tests: known ids, one flight with
/// no recorded delay, and flights on both sides of the delay threshold.
pub fn seeded_db() -> FlightDb {
    let db = FlightDb::open_in_memory();
    db.conn()
        .execute_batch(fixtures::FLIGHTS_SCHEMA)
        .expect("schema should load");
    db.conn()
        .execute_batch(fixtures::FLIGHTS_SEED)
        .expect("seed should load");
    db
}

/// In-memory database with no schema at all.
///
/// Queries against it fail, which exercises the log-and-return-empty path.
pub fn empty_db() -> FlightDb {
    FlightDb::open_in_memory()
}
