//! Delayed flights leaving an origin airport.

use tracing::error;

use crate::db::{FlightDb, run_query};
use crate::queries::DELAY_THRESHOLD_MINUTES;
use crate::types::FlightRecord;

const QUERY: &str = "\
SELECT flights.ID AS FLIGHT_ID, flights.ORIGIN_AIRPORT, flights.DESTINATION_AIRPORT,
       flights.DEPARTURE_DELAY AS DELAY, airlines.AIRLINE
FROM flights
JOIN airlines ON flights.AIRLINE = airlines.ID
WHERE flights.ORIGIN_AIRPORT = :origin_airport
  AND flights.DEPARTURE_DELAY >= :min_delay";

/// List delayed flights whose origin matches the given IATA code.
///
/// The code is matched as stored in the dataset (upper case); callers
/// normalize user input before getting here.
pub fn delayed_by_airport(db: &FlightDb, origin_airport: &str) -> Vec<FlightRecord> {
    let params: &[(&str, &dyn rusqlite::types::ToSql)] = &[
        (":origin_airport", &origin_airport),
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
        error!("delayed-by-airport query failed: {e}");
        Vec::new()
    })
}
