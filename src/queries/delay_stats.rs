//! Aggregate delay share per airline.

use tracing::error;

use crate::db::{FlightDb, run_query};
use crate::queries::DELAY_THRESHOLD_MINUTES;
use crate::types::AirlineDelayStat;

const QUERY: &str = "\
SELECT airlines.AIRLINE,
       COUNT(CASE WHEN flights.DEPARTURE_DELAY >= :min_delay THEN 1 END) * 100.0
           / COUNT(*) AS DELAY_PERCENTAGE
FROM flights
JOIN airlines ON flights.AIRLINE = airlines.ID
GROUP BY airlines.AIRLINE
ORDER BY DELAY_PERCENTAGE DESC";

/// Percentage of delayed flights per airline, highest share first.
///
/// Flights with no recorded delay count toward the total but never toward
/// the delayed share.
pub fn delay_percentages(db: &FlightDb) -> Vec<AirlineDelayStat> {
    run_query(
        db,
        QUERY,
        &[(":min_delay", &DELAY_THRESHOLD_MINUTES)],
        |row| {
            Ok(AirlineDelayStat {
                airline: row.get("AIRLINE")?,
                delay_percentage: row.get("DELAY_PERCENTAGE")?,
            })
        },
    )
    .unwrap_or_else(|e| {
        error!("delay-percentage query failed: {e}");
        Vec::new()
    })
}
