//! Flight lookup by primary key.

use tracing::error;

use crate::db::{FlightDb, run_query};
use crate::types::FlightDetails;

const QUERY: &str = "\
SELECT flights.ID AS FLIGHT_ID, flights.YEAR, flights.MONTH, flights.DAY,
       flights.ORIGIN_AIRPORT, flights.DESTINATION_AIRPORT,
       flights.DEPARTURE_DELAY AS DELAY, airlines.AIRLINE
FROM flights
JOIN airlines ON flights.AIRLINE = airlines.ID
WHERE flights.ID = :id";

/// Look up a single flight by its ID.
///
/// Expected to return zero or one record.
pub fn flight_by_id(db: &FlightDb, id: i64) -> Vec<FlightDetails> {
    run_query(db, QUERY, &[(":id", &id)], |row| {
        Ok(FlightDetails {
            flight_id: row.get("FLIGHT_ID")?,
            year: row.get("YEAR")?,
            month: row.get("MONTH")?,
            day: row.get("DAY")?,
            origin_airport: row.get("ORIGIN_AIRPORT")?,
            destination_airport: row.get("DESTINATION_AIRPORT")?,
            delay: row.get("DELAY")?,
            airline: row.get("AIRLINE")?,
        })
    })
    .unwrap_or_else(|e| {
        error!("flight lookup failed: {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{empty_db, seeded_db};

    #[test]
    fn test_finds_seeded_flight_with_matching_fields() {
        let db = seeded_db();
        let flights = flight_by_id(&db, 540);
        assert_eq!(flights.len(), 1);

        let flight = &flights[0];
        assert_eq!(flight.flight_id, 540);
        assert_eq!(flight.origin_airport, "SFO");
        assert_eq!(flight.destination_airport, "JFK");
        assert_eq!(flight.airline, "United Air Lines Inc.");
        assert_eq!(flight.delay, Some(25));
        assert_eq!((flight.year, flight.month, flight.day), (2015, 1, 1));
    }

    #[test]
    fn test_null_delay_maps_to_none() {
        let db = seeded_db();
        let flights = flight_by_id(&db, 541);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].delay, None);
        assert_eq!(flights[0].delay_minutes(), 0);
    }

    #[test]
    fn test_unknown_id_returns_empty() {
        let db = seeded_db();
        assert!(flight_by_id(&db, 999_999).is_empty());
    }

    #[test]
    fn test_missing_schema_returns_empty_instead_of_failing() {
        let db = empty_db();
        assert!(flight_by_id(&db, 540).is_empty());
    }
}
