//! Flights scheduled on an exact date.

use tracing::error;

use crate::db::{FlightDb, run_query};
use crate::types::FlightRecord;

const QUERY: &str = "\
SELECT flights.ID AS FLIGHT_ID, flights.ORIGIN_AIRPORT, flights.DESTINATION_AIRPORT,
       flights.DEPARTURE_DELAY AS DELAY, airlines.AIRLINE
FROM flights
JOIN airlines ON flights.AIRLINE = airlines.ID
WHERE flights.DAY = :day AND flights.MONTH = :month AND flights.YEAR = :year";

/// List all flights whose scheduled date matches exactly.
pub fn flights_by_date(db: &FlightDb, day: i64, month: i64, year: i64) -> Vec<FlightRecord> {
    let params: &[(&str, &dyn rusqlite::types::ToSql)] =
        &[(":day", &day), (":month", &month), (":year", &year)];
    run_query(db, QUERY, params, |row| {
        Ok(FlightRecord {
            flight_id: row.get("FLIGHT_ID")?,
            origin_airport: row.get("ORIGIN_AIRPORT")?,
            destination_airport: row.get("DESTINATION_AIRPORT")?,
            delay: row.get("DELAY")?,
            airline: row.get("AIRLINE")?,
        })
    })
    .unwrap_or_else(|e| {
        error!("by-date query failed: {e}");
        Vec::new()
    })
}
