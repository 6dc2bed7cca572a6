//! Delayed flights for a named airline.

use tracing::error;

use crate::db::{FlightDb, run_query};
use crate::queries::DELAY_THRESHOLD_MINUTES;
use crate::types::FlightRecord;

const QUERY: &str = "\
SELECT flights.ID AS FLIGHT_ID, flights.ORIGIN_AIRPORT, flights.DESTINATION_AIRPORT,
       flights.DEPARTURE_DELAY AS DELAY, airlines.AIRLINE
FROM flights
JOIN airlines ON flights.AIRLINE = airlines.ID
WHERE airlines.AIRLINE = :airline_name
  AND flights.DEPARTURE_DELAY >= :min_delay";

/// List delayed flights for the named airline (exact name match).
pub fn delayed_by_airline(db: &FlightDb, airline_name: &str) -> Vec<FlightRecord> {
    let params: &[(&str, &dyn rusqlite::types::ToSql)] = &[
        (":airline_name", &airline_name),
        (":min_delay", &DELAY_THRESHOLD_MINUTES),
    ];
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
        error!("delayed-by-airline query failed: {e}");
        Vec::new()
    })
}
